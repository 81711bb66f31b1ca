use facility_client::db::{sensor_queries, usage_queries};
use facility_client::domain::{UsageKind, UsageReading};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::usage::UsageSettings;

/// Pure validation of a usage quantity.
///
/// Rules: the value must be finite and non-negative. Zero is a legitimate
/// reading (an idle meter interval).
pub fn validate_quantity(quantity: f64) -> Result<(), ServiceError> {
    if !quantity.is_finite() {
        return Err(ServiceError::Validation(format!(
            "quantity must be finite, got {quantity}"
        )));
    }
    if quantity < 0.0 {
        return Err(ServiceError::Validation(format!(
            "quantity must be non-negative, got {quantity}"
        )));
    }
    Ok(())
}

/// Append one reading for `sensor_name` and prune readings of the same kind
/// older than the retention window. Insert and prune share a transaction, so
/// a failed prune leaves no partial state.
pub async fn record(
    pool: &PgPool,
    settings: &UsageSettings,
    kind: UsageKind,
    sensor_name: &str,
    quantity: f64,
) -> Result<UsageReading, ServiceError> {
    validate_quantity(quantity)?;

    let sensor = sensor_queries::find_sensor(pool, sensor_name)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("sensor {sensor_name}")))?;

    let now = OffsetDateTime::now_utc();
    let reading = UsageReading {
        id: Uuid::new_v4(),
        sensor_id: sensor.sensor_name,
        location: sensor.location,
        quantity,
        ts: now,
    };

    let mut tx = pool.begin().await?;
    usage_queries::insert_reading(&mut *tx, kind, &reading).await?;
    let pruned = usage_queries::prune_older_than(&mut *tx, kind, now - settings.retention).await?;
    tx.commit().await?;

    metrics::counter!("usage_readings_recorded_total").increment(1);
    if pruned > 0 {
        metrics::counter!("usage_readings_pruned_total").increment(pruned);
        tracing::debug!(pruned, kind = kind.as_str(), "expired readings removed");
    }

    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_quantities() {
        assert!(validate_quantity(0.0).is_ok());
        assert!(validate_quantity(42.5).is_ok());
    }

    #[test]
    fn rejects_negative_quantity() {
        assert!(matches!(
            validate_quantity(-0.1),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_finite_quantities() {
        assert!(validate_quantity(f64::NAN).is_err());
        assert!(validate_quantity(f64::INFINITY).is_err());
        assert!(validate_quantity(f64::NEG_INFINITY).is_err());
    }
}
