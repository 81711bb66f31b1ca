use sqlx::PgExecutor;
use time::OffsetDateTime;

use crate::domain::{UsageKind, UsageReading};

// The two usage tables share one shape, so the table name is interpolated.
// `UsageKind::table` only ever yields fixed identifiers.

pub async fn insert_reading(
    ex: impl PgExecutor<'_>,
    kind: UsageKind,
    reading: &UsageReading,
) -> Result<(), sqlx::Error> {
    let sql = format!(
        "INSERT INTO {} (id, sensor_id, location, quantity, ts) VALUES ($1, $2, $3, $4, $5)",
        kind.table()
    );
    sqlx::query(&sql)
        .bind(reading.id)
        .bind(&reading.sensor_id)
        .bind(&reading.location)
        .bind(reading.quantity)
        .bind(reading.ts)
        .execute(ex)
        .await
        .map(|_| ())
}

/// Delete all readings of `kind` older than `cutoff`. Returns the number of
/// rows removed.
pub async fn prune_older_than(
    ex: impl PgExecutor<'_>,
    kind: UsageKind,
    cutoff: OffsetDateTime,
) -> Result<u64, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE ts < $1", kind.table());
    let result = sqlx::query(&sql).bind(cutoff).execute(ex).await?;
    Ok(result.rows_affected())
}

/// Fetch a time-ordered slice of readings with `start <= ts < end`.
pub async fn readings_in_window(
    ex: impl PgExecutor<'_>,
    kind: UsageKind,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<Vec<UsageReading>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT
            id,
            sensor_id,
            location,
            quantity,
            ts
        FROM {}
        WHERE ts >= $1
          AND ts <  $2
        ORDER BY ts
        "#,
        kind.table()
    );
    sqlx::query_as::<_, UsageReading>(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(ex)
        .await
}
