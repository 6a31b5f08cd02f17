//! Submission routes

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use sun_task_core::{current_period, WeekPeriod};
use uuid::Uuid;

use crate::db::{self, schema::SubmissionRow, NewSubmission};
use crate::error::ApiError;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    /// Restrict the history to one account name.
    pub username: Option<String>,
}

#[derive(Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<SubmissionRow>,
}

#[derive(Serialize)]
pub struct SubmissionResponse {
    pub submission: SubmissionRow,
}

#[derive(Deserialize)]
pub struct SubmissionPayload {
    pub username: String,
    pub mission_id: Uuid,
    pub mission_title: String,
    pub mission_type: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub photos_count: i32,
    pub week: Option<i32>,
    pub year: Option<i32>,
}

/// A caller that already resolved the period supplies both halves; anything
/// less and the record is stamped with the current bucket.
fn resolve_stamp(week: Option<i32>, year: Option<i32>) -> WeekPeriod {
    match (week, year) {
        (Some(week), Some(year)) => WeekPeriod { week, year },
        _ => current_period(),
    }
}

pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<SubmissionListResponse>, ApiError> {
    let submissions = db::list_submissions(&state.db, query.username.as_deref())
        .await
        .map_err(ApiError::db("Failed to fetch submissions"))?;

    Ok(Json(SubmissionListResponse { submissions }))
}

pub async fn create_submission(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    if payload.username.trim().is_empty() {
        return Err(ApiError::BadRequest("username must not be empty".to_string()));
    }

    let stamp = resolve_stamp(payload.week, payload.year);

    // photos_count is stored as supplied; it is not recomputed from the
    // photo array and the two can diverge.
    let submission = db::create_submission(
        &state.db,
        NewSubmission {
            username: payload.username.trim().to_string(),
            mission_id: payload.mission_id,
            mission_title: payload.mission_title,
            mission_type: payload.mission_type,
            photos: payload.photos,
            photos_count: payload.photos_count,
            week: stamp.week,
            year: stamp.year,
        },
    )
    .await
    .map_err(ApiError::db("Failed to create submission"))?;

    Ok(Json(SubmissionResponse { submission }))
}
