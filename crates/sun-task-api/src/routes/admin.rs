//! Admin dashboard routes

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use sun_task_core::{current_period, now_taipei};

use crate::db;
use crate::error::ApiError;
use crate::AppState;

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_missions: i64,
    pub active_missions: i64,
    pub available_missions: i64,
    pub total_submissions: i64,
    pub current_week: i32,
    pub current_year: i32,
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let missions = db::list_missions(&state.db)
        .await
        .map_err(ApiError::db("Failed to fetch missions"))?;

    let total_submissions = db::count_submissions(&state.db)
        .await
        .map_err(ApiError::db("Failed to count submissions"))?;

    let now = now_taipei();
    let active = missions
        .iter()
        .filter(|m| m.active.unwrap_or(true))
        .count() as i64;
    let available = missions
        .iter()
        .filter(|m| m.availability().selectable(now))
        .count() as i64;

    let period = current_period();

    Ok(Json(StatsResponse {
        total_missions: missions.len() as i64,
        active_missions: active,
        available_missions: available,
        total_submissions,
        current_week: period.week,
        current_year: period.year,
    }))
}
