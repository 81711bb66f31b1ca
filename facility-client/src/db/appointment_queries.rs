use sqlx::PgExecutor;
use time::OffsetDateTime;

/// Flip past-due pending appointments to expired. One statement, one commit;
/// returns the number of appointments flipped.
pub async fn expire_past_pending(
    ex: impl PgExecutor<'_>,
    now: OffsetDateTime,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE appointment SET status = 'expired' WHERE status = 'pending' AND scheduled_at < $1",
    )
    .bind(now)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}
