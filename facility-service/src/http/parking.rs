use axum::extract::{Path, State};
use axum::Json;
use facility_client::db::parking_queries;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::ServiceError;
use crate::http::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateParkingStatusRequest {
    /// `true` means the lot is empty. Missing field defaults to empty.
    #[serde(default = "default_vacant")]
    pub status: bool,
}

fn default_vacant() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct ParkingLotStatusResponse {
    pub sensor_id: String,
    pub location: String,
    pub status: &'static str,
    pub last_updated: String,
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(sensor_id): Path<String>,
    Json(req): Json<UpdateParkingStatusRequest>,
) -> Result<Json<Value>, ServiceError> {
    let updated = parking_queries::set_status(
        &state.pool,
        &sensor_id,
        req.status,
        OffsetDateTime::now_utc(),
    )
    .await?;
    if updated == 0 {
        return Err(ServiceError::NotFound(format!("parking lot {sensor_id}")));
    }

    let message = if req.status { "Car unparked" } else { "Car parked" };
    Ok(Json(json!({ "message": message })))
}

pub async fn list_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParkingLotStatusResponse>>, ServiceError> {
    let lots = parking_queries::lot_statuses(&state.pool).await?;
    let body = lots
        .into_iter()
        .map(|lot| ParkingLotStatusResponse {
            sensor_id: lot.sensor_id,
            location: lot.location,
            status: if lot.vacant { "Empty" } else { "Occupied" },
            last_updated: lot
                .last_updated
                .format(&Rfc3339)
                .unwrap_or_else(|_| lot.last_updated.to_string()),
        })
        .collect();
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_defaults_to_vacant() {
        let req: UpdateParkingStatusRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.status);
    }

    #[test]
    fn status_field_is_honored() {
        let req: UpdateParkingStatusRequest =
            serde_json::from_value(json!({ "status": false })).unwrap();
        assert!(!req.status);
    }
}
