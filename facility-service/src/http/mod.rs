pub mod alerts;
pub mod parking;
pub mod sensors;
pub mod usage;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;

use crate::alerts::AlertDispatcher;
use crate::usage::UsageSettings;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub usage: Arc<UsageSettings>,
    pub alerts: Arc<AlertDispatcher>,
}

/// Route shapes mirror the original facility blueprints: one prefix per
/// sensor family.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sensors/add_sensor", post(sensors::add_sensor))
        .route("/sensors", get(sensors::list_sensors))
        .route("/parking/update-status/:sensor_id", post(parking::update_status))
        .route("/parking/status", get(parking::list_status))
        .route("/water/record-usage", post(usage::record_water_usage))
        .route("/water/usage/:year/:month", get(usage::monthly_water_usage))
        .route("/water/bill/:year/:month", get(usage::water_bill))
        .route("/energy/record-usage", post(usage::record_energy_usage))
        .route("/energy/usage/:year/:month", get(usage::monthly_energy_usage))
        .route("/energy/bill/:year/:month", get(usage::energy_bill))
        .route("/garbage/garbage-overflow", post(alerts::garbage_overflow))
        .route("/fire/fire-detected", post(alerts::fire_detected))
        .with_state(state)
}
