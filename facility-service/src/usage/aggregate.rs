use facility_client::db::usage_queries;
use facility_client::domain::{UsageKind, UsageReading};
use sqlx::PgPool;
use time::{Date, UtcOffset};

use crate::error::ServiceError;
use crate::usage::window::month_window;

/// One summary entry per reading. Readings sharing a calendar date are not
/// merged.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedReading {
    pub date: Date,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsageSummary {
    pub total_quantity: f64,
    pub records: Vec<DatedReading>,
}

/// Fold fetched readings into a summary. Dates are rendered in the reference
/// offset; the input order (storage `ORDER BY ts`) is preserved.
pub fn summarize(rows: Vec<UsageReading>, reference: UtcOffset) -> UsageSummary {
    let total_quantity = rows.iter().map(|r| r.quantity).sum();
    let records = rows
        .into_iter()
        .map(|r| DatedReading {
            date: r.ts.to_offset(reference).date(),
            quantity: r.quantity,
        })
        .collect();

    UsageSummary {
        total_quantity,
        records,
    }
}

/// Total and per-reading breakdown for one calendar month. Read-only.
pub async fn aggregate(
    pool: &PgPool,
    kind: UsageKind,
    year: i32,
    month: u8,
    reference: UtcOffset,
) -> Result<UsageSummary, ServiceError> {
    let (start, end) = month_window(year, month, reference)?;
    let rows = usage_queries::readings_in_window(pool, kind, start, end).await?;
    Ok(summarize(rows, reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};
    use uuid::Uuid;

    fn reading(ts: time::OffsetDateTime, quantity: f64) -> UsageReading {
        UsageReading {
            id: Uuid::new_v4(),
            sensor_id: "W1".to_string(),
            location: "Ward A".to_string(),
            quantity,
            ts,
        }
    }

    #[test]
    fn sums_all_readings_and_keeps_one_record_each() {
        let rows = vec![
            reading(datetime!(2025-03-05 10:00 UTC), 100.0),
            reading(datetime!(2025-03-31 23:59 UTC), 50.0),
        ];

        let summary = summarize(rows, UtcOffset::UTC);
        assert_eq!(summary.total_quantity, 150.0);
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.records[0].date, date!(2025-03-05));
        assert_eq!(summary.records[0].quantity, 100.0);
        assert_eq!(summary.records[1].date, date!(2025-03-31));
        assert_eq!(summary.records[1].quantity, 50.0);
    }

    #[test]
    fn dates_are_rendered_in_the_reference_offset() {
        // 23:59Z is already the next local day at +05:30.
        let rows = vec![reading(datetime!(2025-03-31 23:59 UTC), 50.0)];
        let summary = summarize(rows, offset!(+5:30));
        assert_eq!(summary.records[0].date, date!(2025-04-01));
    }

    #[test]
    fn same_day_readings_are_not_merged() {
        let rows = vec![
            reading(datetime!(2025-03-05 08:00 UTC), 10.0),
            reading(datetime!(2025-03-05 09:00 UTC), 20.0),
        ];

        let summary = summarize(rows, UtcOffset::UTC);
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.total_quantity, 30.0);
    }

    #[test]
    fn empty_month_yields_zero_total() {
        let summary = summarize(Vec::new(), offset!(+5:30));
        assert_eq!(summary.total_quantity, 0.0);
        assert!(summary.records.is_empty());
    }
}
