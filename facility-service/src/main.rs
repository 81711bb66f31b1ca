use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use facility_service::{
    alerts::AlertDispatcher,
    config::AppConfig,
    http::{self, AppState},
    metrics_server,
    notify::{SmsNotifier, TwilioNotifier},
    observability, sweeper,
    usage::UsageSettings,
};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    // Start metrics server if configured
    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr);
    }

    let pool = PgPoolOptions::new()
        .max_connections(cfg.database.max_connections)
        .connect(&cfg.database.uri)
        .await?;

    let usage = Arc::new(UsageSettings::from_config(&cfg.usage)?);

    let notifier: Option<Arc<dyn SmsNotifier>> = cfg
        .alerts
        .twilio
        .as_ref()
        .map(|tw| Arc::new(TwilioNotifier::from_config(tw)) as Arc<dyn SmsNotifier>);
    let alerts = Arc::new(AlertDispatcher::new(
        cfg.alerts.emergency_contact.clone(),
        notifier,
    ));

    if let Some(sweeper_cfg) = &cfg.sweeper {
        sweeper::spawn(pool.clone(), sweeper_cfg.interval_secs);
    }

    let state = AppState { pool, usage, alerts };
    let app = http::router(state);

    let addr: SocketAddr = cfg
        .http
        .bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid http.bind_addr: {e}"))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "facility service listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
