use time::{Date, Month, OffsetDateTime, UtcOffset};

use crate::error::ServiceError;

/// Compute the UTC instant range covering a calendar month in the reference
/// offset.
///
/// The window is half-open: it starts at the first instant of `year-month-01`
/// and ends at the first instant of the following month, both taken in the
/// reference offset and converted to UTC. December rolls into January of the
/// next year.
pub fn month_window(
    year: i32,
    month: u8,
    reference: UtcOffset,
) -> Result<(OffsetDateTime, OffsetDateTime), ServiceError> {
    let month = Month::try_from(month)
        .map_err(|_| ServiceError::Validation(format!("month must be 1..=12, got {month}")))?;
    let start_date = Date::from_calendar_date(year, month, 1)
        .map_err(|e| ServiceError::Validation(format!("invalid month {year}-{month}: {e}")))?;

    let (next_year, next_month) = match month {
        Month::December => (year + 1, Month::January),
        m => (year, m.next()),
    };
    let end_date = Date::from_calendar_date(next_year, next_month, 1)
        .map_err(|e| ServiceError::Validation(format!("invalid month {next_year}-{next_month}: {e}")))?;

    let start = start_date
        .midnight()
        .assume_offset(reference)
        .to_offset(UtcOffset::UTC);
    let end = end_date
        .midnight()
        .assume_offset(reference)
        .to_offset(UtcOffset::UTC);

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn march_window_shifts_to_utc() {
        let (start, end) = month_window(2025, 3, offset!(+5:30)).unwrap();
        assert_eq!(start, datetime!(2025-02-28 18:30 UTC));
        assert_eq!(end, datetime!(2025-03-31 18:30 UTC));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let (start, end) = month_window(2024, 12, offset!(+5:30)).unwrap();
        assert_eq!(start, datetime!(2024-11-30 18:30 UTC));
        assert_eq!(end, datetime!(2024-12-31 18:30 UTC));
    }

    #[test]
    fn leap_february_ends_on_march_first() {
        let (start, end) = month_window(2024, 2, UtcOffset::UTC).unwrap();
        assert_eq!(start, datetime!(2024-02-01 00:00 UTC));
        assert_eq!(end, datetime!(2024-03-01 00:00 UTC));
    }

    #[test]
    fn utc_reference_keeps_plain_bounds() {
        let (start, end) = month_window(2025, 3, UtcOffset::UTC).unwrap();
        assert_eq!(start, datetime!(2025-03-01 00:00 UTC));
        assert_eq!(end, datetime!(2025-04-01 00:00 UTC));
    }

    #[test]
    fn out_of_range_months_are_rejected() {
        assert!(matches!(
            month_window(2025, 13, UtcOffset::UTC),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            month_window(2025, 0, UtcOffset::UTC),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn upper_bound_is_exclusive_of_next_month_local_time() {
        // 2025-03-31T23:59Z is already April 1st in +05:30, so it sits at or
        // past the window end while an 18:29Z reading the same day is inside.
        let (start, end) = month_window(2025, 3, offset!(+5:30)).unwrap();
        let inside = datetime!(2025-03-31 18:29 UTC);
        let outside = datetime!(2025-03-31 23:59 UTC);
        assert!(inside >= start && inside < end);
        assert!(outside >= end);
    }
}
