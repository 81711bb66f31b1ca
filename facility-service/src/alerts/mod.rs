use std::sync::Arc;

use facility_client::db::{alert_queries, sensor_queries};
use facility_client::domain::{AlertKind, AlertRecord};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::notify::SmsNotifier;

/// Message body sent to the emergency contact.
pub fn alert_message(kind: AlertKind, location: &str) -> String {
    match kind {
        AlertKind::Garbage => {
            format!("Garbage overflow detected at {location}. Immediate cleanup required.")
        }
        AlertKind::Fire => format!("Fire emergency detected at {location}!"),
    }
}

pub struct AlertDispatcher {
    emergency_contact: Option<String>,
    notifier: Option<Arc<dyn SmsNotifier>>,
}

impl AlertDispatcher {
    pub fn new(emergency_contact: Option<String>, notifier: Option<Arc<dyn SmsNotifier>>) -> Self {
        Self {
            emergency_contact,
            notifier,
        }
    }

    /// Persist one alert record for `sensor_name`, then notify the emergency
    /// contact. The record is committed before the send; a delivery failure
    /// is logged and swallowed, never rolled back. Duplicate triggers create
    /// duplicate records and duplicate messages.
    pub async fn raise(
        &self,
        pool: &PgPool,
        sensor_name: &str,
        kind: AlertKind,
    ) -> Result<AlertRecord, ServiceError> {
        let sensor = sensor_queries::find_sensor(pool, sensor_name)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("sensor {sensor_name}")))?;

        let alert = AlertRecord {
            id: Uuid::new_v4(),
            location: sensor.location.clone(),
            alert_kind: kind.as_str().to_string(),
            sensor_id: sensor.sensor_name.clone(),
            ts: OffsetDateTime::now_utc(),
        };
        alert_queries::insert_alert(pool, &alert).await?;
        metrics::counter!("alerts_raised_total").increment(1);

        match (&self.emergency_contact, &self.notifier) {
            (Some(contact), Some(notifier)) => {
                match notifier.send(contact, &alert_message(kind, &sensor.location)).await {
                    Ok(delivery_id) => {
                        tracing::info!(
                            delivery_id = %delivery_id,
                            kind = kind.as_str(),
                            location = %sensor.location,
                            "emergency sms dispatched"
                        );
                    }
                    Err(e) => {
                        metrics::counter!("alert_sms_failed_total").increment(1);
                        tracing::warn!(
                            error = %e,
                            kind = kind.as_str(),
                            "emergency sms failed; alert record kept"
                        );
                    }
                }
            }
            _ => {
                tracing::warn!(
                    kind = kind.as_str(),
                    "no emergency contact configured; alert recorded only"
                );
            }
        }

        Ok(alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_message_names_the_location() {
        assert_eq!(
            alert_message(AlertKind::Garbage, "Building C"),
            "Garbage overflow detected at Building C. Immediate cleanup required."
        );
    }

    #[test]
    fn fire_message_names_the_location() {
        assert_eq!(
            alert_message(AlertKind::Fire, "Ward A"),
            "Fire emergency detected at Ward A!"
        );
    }
}
