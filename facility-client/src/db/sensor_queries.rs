use sqlx::PgExecutor;

use crate::domain::Sensor;

pub async fn insert_sensor(ex: impl PgExecutor<'_>, sensor: &Sensor) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO sensor (sensor_name, location, kind) VALUES ($1, $2, $3)")
        .bind(&sensor.sensor_name)
        .bind(&sensor.location)
        .bind(&sensor.kind)
        .execute(ex)
        .await
        .map(|_| ())
}

pub async fn find_sensor(
    ex: impl PgExecutor<'_>,
    sensor_name: &str,
) -> Result<Option<Sensor>, sqlx::Error> {
    sqlx::query_as::<_, Sensor>(
        "SELECT sensor_name, location, kind FROM sensor WHERE sensor_name = $1",
    )
    .bind(sensor_name)
    .fetch_optional(ex)
    .await
}

pub async fn list_sensors(ex: impl PgExecutor<'_>) -> Result<Vec<Sensor>, sqlx::Error> {
    sqlx::query_as::<_, Sensor>("SELECT sensor_name, location, kind FROM sensor ORDER BY sensor_name")
        .fetch_all(ex)
        .await
}
