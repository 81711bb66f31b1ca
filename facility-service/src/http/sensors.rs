use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use facility_client::db::{parking_queries, sensor_queries};
use facility_client::domain::{Sensor, SensorKind};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::OffsetDateTime;

use crate::error::ServiceError;
use crate::http::AppState;

#[derive(Debug, Deserialize)]
pub struct AddSensorRequest {
    pub sensor_name: String,
    #[serde(rename = "type")]
    pub kind: SensorKind,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct SensorResponse {
    pub sensor_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
}

/// Register a sensor. Parking sensors get their lot row in the same
/// transaction so the status endpoints work immediately.
pub async fn add_sensor(
    State(state): State<AppState>,
    Json(req): Json<AddSensorRequest>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    if req.sensor_name.trim().is_empty() {
        return Err(ServiceError::Validation("sensor_name must not be empty".to_string()));
    }
    if req.location.trim().is_empty() {
        return Err(ServiceError::Validation("location must not be empty".to_string()));
    }

    let sensor = Sensor {
        sensor_name: req.sensor_name,
        location: req.location,
        kind: req.kind.as_str().to_string(),
    };

    let mut tx = state.pool.begin().await?;
    sensor_queries::insert_sensor(&mut *tx, &sensor).await?;
    if req.kind == SensorKind::Parking {
        parking_queries::ensure_lot(&mut *tx, &sensor.sensor_name, OffsetDateTime::now_utc()).await?;
    }
    tx.commit().await?;

    tracing::info!(sensor = %sensor.sensor_name, kind = %req.kind, "sensor registered");
    Ok((StatusCode::CREATED, Json(json!({ "message": "Sensor added successfully!" }))))
}

pub async fn list_sensors(
    State(state): State<AppState>,
) -> Result<Json<Vec<SensorResponse>>, ServiceError> {
    let sensors = sensor_queries::list_sensors(&state.pool).await?;
    let body = sensors
        .into_iter()
        .map(|s| SensorResponse {
            sensor_name: s.sensor_name,
            kind: s.kind,
            location: s.location,
        })
        .collect();
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sensor_request_uses_type_field() {
        let req: AddSensorRequest = serde_json::from_value(json!({
            "sensor_name": "P005",
            "type": "parking",
            "location": "Building C"
        }))
        .unwrap();
        assert_eq!(req.kind, SensorKind::Parking);
        assert_eq!(req.sensor_name, "P005");
    }

    #[test]
    fn unknown_sensor_type_fails_deserialization() {
        let result = serde_json::from_value::<AddSensorRequest>(json!({
            "sensor_name": "H001",
            "type": "humidity",
            "location": "Roof"
        }));
        assert!(result.is_err());
    }
}
