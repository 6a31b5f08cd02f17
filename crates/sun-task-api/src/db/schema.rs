//! Database row types.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sun_task_core::Availability;
use uuid::Uuid;

/// One mission record as stored. Serializes with the wire field names, so
/// handlers return rows directly.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MissionRow {
    pub id: Uuid,
    pub title: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub desc: String,
    pub active: Option<bool>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
}

impl MissionRow {
    /// The selection-eligibility view over the stored flag and window.
    pub fn availability(&self) -> Availability {
        Availability {
            active: self.active,
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// One submission record as stored. `mission_title` and `mission_type` are
/// the snapshot taken at write time, not a join; `photos_count` is the
/// caller-supplied figure and may diverge from `photos.len()`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubmissionRow {
    pub id: Uuid,
    pub username: String,
    pub mission_id: Uuid,
    pub mission_title: String,
    pub mission_type: String,
    pub photos: Vec<String>,
    pub photos_count: i32,
    pub week: i32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_row_serializes_with_wire_names() {
        let row = MissionRow {
            id: Uuid::nil(),
            title: "T1".to_string(),
            kind: "聊天任務".to_string(),
            desc: "D".to_string(),
            active: Some(true),
            start_date: None,
            end_date: None,
            created_at: DateTime::UNIX_EPOCH,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], "聊天任務");
        assert_eq!(value["desc"], "D");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_availability_reads_stored_window() {
        let row = MissionRow {
            id: Uuid::nil(),
            title: "T1".to_string(),
            kind: "其他任務".to_string(),
            desc: "D".to_string(),
            active: None,
            start_date: Some(
                chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            ),
            end_date: None,
            created_at: DateTime::UNIX_EPOCH,
        };
        let availability = row.availability();
        assert_eq!(availability.active, None);
        assert_eq!(availability.start, row.start_date);
        assert_eq!(availability.end, None);
    }
}
