use sqlx::PgExecutor;
use time::OffsetDateTime;

/// One row of the lot listing, joined with the sensor for its location.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParkingLotStatus {
    pub sensor_id: String,
    pub location: String,
    pub vacant: bool,
    pub last_updated: OffsetDateTime,
}

/// Create the lot row for a parking sensor if it does not exist yet. New lots
/// start out vacant.
pub async fn ensure_lot(
    ex: impl PgExecutor<'_>,
    sensor_name: &str,
    now: OffsetDateTime,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO parking_lot (sensor_id, vacant, last_updated) VALUES ($1, TRUE, $2) \
         ON CONFLICT (sensor_id) DO NOTHING",
    )
    .bind(sensor_name)
    .bind(now)
    .execute(ex)
    .await
    .map(|_| ())
}

/// Set a lot's occupancy. Returns the number of rows updated; zero means the
/// lot does not exist.
pub async fn set_status(
    ex: impl PgExecutor<'_>,
    sensor_name: &str,
    vacant: bool,
    now: OffsetDateTime,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE parking_lot SET vacant = $2, last_updated = $3 WHERE sensor_id = $1",
    )
    .bind(sensor_name)
    .bind(vacant)
    .bind(now)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

pub async fn lot_statuses(ex: impl PgExecutor<'_>) -> Result<Vec<ParkingLotStatus>, sqlx::Error> {
    sqlx::query_as::<_, ParkingLotStatus>(
        r#"
        SELECT
            p.sensor_id,
            s.location,
            p.vacant,
            p.last_updated
        FROM parking_lot p
        JOIN sensor s ON s.sensor_name = p.sensor_id
        ORDER BY p.sensor_id
        "#,
    )
    .fetch_all(ex)
    .await
}
