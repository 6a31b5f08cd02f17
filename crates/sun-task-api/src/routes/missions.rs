//! Mission management routes

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use sun_task_core::{now_taipei, parse_wall_clock, MissionType};
use uuid::Uuid;

use crate::db::{self, schema::MissionRow, MissionUpdate, NewMission};
use crate::error::ApiError;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    /// When true, only missions currently selectable by end users.
    pub available: Option<bool>,
}

#[derive(Serialize)]
pub struct MissionListResponse {
    pub missions: Vec<MissionRow>,
}

#[derive(Serialize)]
pub struct MissionResponse {
    pub mission: MissionRow,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Create and update share one body shape: full mission fields, with the
/// window bounds as optional strings (absent and empty both mean no bound).
#[derive(Deserialize)]
pub struct MissionPayload {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub desc: String,
    pub active: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl MissionPayload {
    /// Server-side validation: non-empty title and description, a known
    /// category, parseable window bounds.
    fn validate(&self) -> Result<(Option<NaiveDateTime>, Option<NaiveDateTime>), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::BadRequest("title must not be empty".to_string()));
        }
        if self.desc.trim().is_empty() {
            return Err(ApiError::BadRequest("desc must not be empty".to_string()));
        }
        self.kind
            .parse::<MissionType>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok((
            parse_window_bound(self.start_date.as_deref())?,
            parse_window_bound(self.end_date.as_deref())?,
        ))
    }
}

fn parse_window_bound(value: Option<&str>) -> Result<Option<NaiveDateTime>, ApiError> {
    match value {
        None => Ok(None),
        Some("") => Ok(None),
        Some(s) => parse_wall_clock(s)
            .map(Some)
            .map_err(|e| ApiError::BadRequest(e.to_string())),
    }
}

pub async fn list_missions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<MissionListResponse>, ApiError> {
    let mut missions = db::list_missions(&state.db)
        .await
        .map_err(ApiError::db("Failed to fetch missions"))?;

    if query.available.unwrap_or(false) {
        let now = now_taipei();
        missions.retain(|mission| mission.availability().selectable(now));
    }

    Ok(Json(MissionListResponse { missions }))
}

pub async fn create_mission(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MissionPayload>,
) -> Result<Json<MissionResponse>, ApiError> {
    let (start_date, end_date) = payload.validate()?;

    let mission = db::create_mission(
        &state.db,
        NewMission {
            title: payload.title.trim().to_string(),
            kind: payload.kind,
            desc: payload.desc.trim().to_string(),
            active: payload.active.unwrap_or(true),
            start_date,
            end_date,
        },
    )
    .await
    .map_err(ApiError::db("Failed to create mission"))?;

    Ok(Json(MissionResponse { mission }))
}

pub async fn update_mission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MissionPayload>,
) -> Result<Json<MissionResponse>, ApiError> {
    let (start_date, end_date) = payload.validate()?;

    let mission = db::update_mission(
        &state.db,
        id,
        MissionUpdate {
            title: payload.title.trim().to_string(),
            kind: payload.kind,
            desc: payload.desc.trim().to_string(),
            active: payload.active,
            start_date,
            end_date,
        },
    )
    .await
    .map_err(ApiError::db("Failed to update mission"))?;

    Ok(Json(MissionResponse { mission }))
}

pub async fn delete_mission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    db::delete_mission(&state.db, id)
        .await
        .map_err(ApiError::db("Failed to delete mission"))?;

    Ok(Json(DeleteResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> MissionPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_payload_accepts_wire_shape() {
        let p = payload(serde_json::json!({
            "title": "T1",
            "type": "聊天任務",
            "desc": "D",
            "active": true,
            "start_date": "2024-06-01T00:00",
            "end_date": null,
        }));
        let (start, end) = p.validate().unwrap();
        assert!(start.is_some());
        assert!(end.is_none());
    }

    #[test]
    fn test_empty_date_strings_mean_no_bound() {
        let p = payload(serde_json::json!({
            "title": "T1",
            "type": "其他任務",
            "desc": "D",
            "start_date": "",
            "end_date": "",
        }));
        let (start, end) = p.validate().unwrap();
        assert!(start.is_none());
        assert!(end.is_none());
    }

    #[test]
    fn test_blank_title_rejected() {
        let p = payload(serde_json::json!({
            "title": "   ",
            "type": "聊天任務",
            "desc": "D",
        }));
        assert!(matches!(p.validate(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let p = payload(serde_json::json!({
            "title": "T1",
            "type": "儲值任務",
            "desc": "D",
        }));
        assert!(matches!(p.validate(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_unparsable_date_rejected() {
        let p = payload(serde_json::json!({
            "title": "T1",
            "type": "聊天任務",
            "desc": "D",
            "start_date": "soon",
        }));
        assert!(matches!(p.validate(), Err(ApiError::BadRequest(_))));
    }
}
