//! API routes

pub mod admin;
pub mod auth;
pub mod missions;
pub mod submissions;

use axum::Json;
use serde::Serialize;
use sun_task_core::{current_period, WeekPeriod};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The week/year bucket submissions land in right now.
pub async fn get_period() -> Json<WeekPeriod> {
    Json(current_period())
}
