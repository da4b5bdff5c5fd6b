use super::{ApiError, ApiState};
use crate::optimizer::{OptimalRoute, TrafficPrediction};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use smartroute_core::util::datetime_ops;

pub const SERVICE_NAME: &str = "Smart Route Optimization System";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// body of `POST /optimize-route`. `departure_time` accepts RFC 3339 or a naive
/// `YYYY-MM-DDTHH:MM:SS` in server local time.
#[derive(Deserialize, Clone, Debug)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default, deserialize_with = "datetime_ops::deserialize_optional_departure_time")]
    pub departure_time: Option<DateTime<FixedOffset>>,
}

/// query of `GET /traffic-prediction`
#[derive(Deserialize, Clone, Debug)]
pub struct TrafficQuery {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, deserialize_with = "datetime_ops::deserialize_optional_departure_time")]
    pub time: Option<DateTime<FixedOffset>>,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: String::from("online"),
        service: String::from(SERVICE_NAME),
        version: String::from(env!("CARGO_PKG_VERSION")),
    })
}

pub async fn optimize_route(
    State(state): State<ApiState>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Json<OptimalRoute>, ApiError> {
    let Json(request) = payload?;
    let optimizer = state.optimizer.clone();
    let route = tokio::task::spawn_blocking(move || {
        optimizer.optimize(
            &request.origin,
            &request.destination,
            request.departure_time,
        )
    })
    .await??;
    Ok(Json(route))
}

pub async fn traffic_prediction(
    State(state): State<ApiState>,
    query: Result<Query<TrafficQuery>, QueryRejection>,
) -> Result<Json<TrafficPrediction>, ApiError> {
    let Query(query) = query?;
    let optimizer = state.optimizer.clone();
    let prediction = tokio::task::spawn_blocking(move || {
        optimizer.predict_traffic(query.latitude, query.longitude, query.time)
    })
    .await??;
    Ok(Json(prediction))
}
