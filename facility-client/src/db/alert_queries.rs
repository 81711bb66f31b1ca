use sqlx::PgExecutor;

use crate::domain::AlertRecord;

pub async fn insert_alert(ex: impl PgExecutor<'_>, alert: &AlertRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO emergency_report (id, location, alert_kind, sensor_id, ts) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(alert.id)
    .bind(&alert.location)
    .bind(&alert.alert_kind)
    .bind(&alert.sensor_id)
    .bind(alert.ts)
    .execute(ex)
    .await
    .map(|_| ())
}
