use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use facility_client::domain::AlertKind;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ServiceError;
use crate::http::AppState;

#[derive(Debug, Deserialize)]
pub struct AlertRequest {
    pub sensor_name: String,
}

pub async fn garbage_overflow(
    State(state): State<AppState>,
    Json(req): Json<AlertRequest>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    state
        .alerts
        .raise(&state.pool, &req.sensor_name, AlertKind::Garbage)
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "Alert logged." }))))
}

pub async fn fire_detected(
    State(state): State<AppState>,
    Json(req): Json<AlertRequest>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    state
        .alerts
        .raise(&state.pool, &req.sensor_name, AlertKind::Fire)
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "Fire alert handled." }))))
}
