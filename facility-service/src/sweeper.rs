use std::time::Duration;

use facility_client::db::appointment_queries;
use sqlx::PgPool;
use time::OffsetDateTime;

/// Spawn the stale-appointment sweep. Each tick flips past-due pending
/// appointments to expired in a single statement committed once per sweep.
/// A failed sweep is logged; the next tick runs as scheduled.
pub fn spawn(pool: PgPool, interval_secs: u64) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match appointment_queries::expire_past_pending(&pool, OffsetDateTime::now_utc()).await {
                Ok(0) => {}
                Ok(expired) => {
                    metrics::counter!("appointments_expired_total").increment(expired);
                    tracing::info!(expired, "stale appointments expired");
                }
                Err(e) => {
                    tracing::error!(error = %e, "appointment sweep failed");
                }
            }
        }
    })
}
