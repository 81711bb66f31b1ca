use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use facility_client::domain::UsageKind;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::Date;

use crate::error::ServiceError;
use crate::http::AppState;
use crate::usage::{aggregate, bill, record, UsageSummary};

#[derive(Debug, Deserialize)]
pub struct RecordWaterUsageRequest {
    pub sensor_name: String,
    pub usage_liters: f64,
}

#[derive(Debug, Deserialize)]
pub struct RecordEnergyUsageRequest {
    pub sensor_name: String,
    pub usage_kwh: f64,
}

#[derive(Debug, Serialize)]
pub struct WaterUsageRecord {
    pub date: String,
    pub usage_liters: f64,
}

#[derive(Debug, Serialize)]
pub struct WaterUsageResponse {
    pub total_usage_liters: f64,
    pub usage_records: Vec<WaterUsageRecord>,
}

#[derive(Debug, Serialize)]
pub struct WaterBillResponse {
    pub total_usage_liters: f64,
    pub total_bill: f64,
    pub rate_per_liter: f64,
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct EnergyUsageRecord {
    pub date: String,
    pub usage_kwh: f64,
}

#[derive(Debug, Serialize)]
pub struct EnergyUsageResponse {
    pub total_usage_kwh: f64,
    pub usage_records: Vec<EnergyUsageRecord>,
}

#[derive(Debug, Serialize)]
pub struct EnergyBillResponse {
    pub total_usage_kwh: f64,
    pub total_bill: f64,
    pub rate_per_kwh: f64,
    pub currency: String,
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub async fn record_water_usage(
    State(state): State<AppState>,
    Json(req): Json<RecordWaterUsageRequest>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    record(
        &state.pool,
        &state.usage,
        UsageKind::Water,
        &req.sensor_name,
        req.usage_liters,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "Water usage recorded" }))))
}

pub async fn monthly_water_usage(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<WaterUsageResponse>, ServiceError> {
    let summary = monthly_summary(&state, UsageKind::Water, year, month).await?;
    let usage_records = summary
        .records
        .into_iter()
        .map(|r| WaterUsageRecord {
            date: format_date(r.date),
            usage_liters: r.quantity,
        })
        .collect();
    Ok(Json(WaterUsageResponse {
        total_usage_liters: summary.total_quantity,
        usage_records,
    }))
}

pub async fn water_bill(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<WaterBillResponse>, ServiceError> {
    let summary = monthly_summary(&state, UsageKind::Water, year, month).await?;
    let bill = bill(
        &summary,
        state.usage.rates.rate_for(UsageKind::Water),
        &state.usage.currency,
    );
    Ok(Json(WaterBillResponse {
        total_usage_liters: bill.total_quantity,
        total_bill: bill.total_bill,
        rate_per_liter: bill.rate_per_unit,
        currency: bill.currency,
    }))
}

pub async fn record_energy_usage(
    State(state): State<AppState>,
    Json(req): Json<RecordEnergyUsageRequest>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    record(
        &state.pool,
        &state.usage,
        UsageKind::Energy,
        &req.sensor_name,
        req.usage_kwh,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "Energy usage recorded" }))))
}

pub async fn monthly_energy_usage(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<EnergyUsageResponse>, ServiceError> {
    let summary = monthly_summary(&state, UsageKind::Energy, year, month).await?;
    let usage_records = summary
        .records
        .into_iter()
        .map(|r| EnergyUsageRecord {
            date: format_date(r.date),
            usage_kwh: r.quantity,
        })
        .collect();
    Ok(Json(EnergyUsageResponse {
        total_usage_kwh: summary.total_quantity,
        usage_records,
    }))
}

pub async fn energy_bill(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<EnergyBillResponse>, ServiceError> {
    let summary = monthly_summary(&state, UsageKind::Energy, year, month).await?;
    let bill = bill(
        &summary,
        state.usage.rates.rate_for(UsageKind::Energy),
        &state.usage.currency,
    );
    Ok(Json(EnergyBillResponse {
        total_usage_kwh: bill.total_quantity,
        total_bill: bill.total_bill,
        rate_per_kwh: bill.rate_per_unit,
        currency: bill.currency,
    }))
}

async fn monthly_summary(
    state: &AppState,
    kind: UsageKind,
    year: i32,
    month: u8,
) -> Result<UsageSummary, ServiceError> {
    aggregate(
        &state.pool,
        kind,
        year,
        month,
        state.usage.reference_offset,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn dates_render_as_iso_calendar_days() {
        assert_eq!(format_date(date!(2025-03-05)), "2025-03-05");
        assert_eq!(format_date(date!(2024-12-31)), "2024-12-31");
    }

    #[test]
    fn water_request_shape_matches_the_api() {
        let req: RecordWaterUsageRequest = serde_json::from_value(json!({
            "sensor_name": "W1",
            "usage_liters": 100.0
        }))
        .unwrap();
        assert_eq!(req.sensor_name, "W1");
        assert_eq!(req.usage_liters, 100.0);
    }

    #[test]
    fn energy_request_rejects_missing_quantity() {
        let result = serde_json::from_value::<RecordEnergyUsageRequest>(json!({
            "sensor_name": "E1"
        }));
        assert!(result.is_err());
    }
}
