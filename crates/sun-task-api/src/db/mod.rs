//! Storage access for missions and submissions.
//!
//! Plain runtime-bound queries over the shared pool. Update and delete
//! report a missing id as `sqlx::Error::RowNotFound`; nothing cascades from
//! missions to submissions.

pub mod schema;

use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use schema::{MissionRow, SubmissionRow};

const MISSION_COLUMNS: &str = r#"id, title, "type", "desc", active, start_date, end_date, created_at"#;

/// Fields for a mission insert.
#[derive(Debug, Clone)]
pub struct NewMission {
    pub title: String,
    pub kind: String,
    pub desc: String,
    pub active: bool,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

/// Full replacement fields for a mission update. `active` is written as
/// given; an absent flag stores NULL and consumers fall back to active.
#[derive(Debug, Clone)]
pub struct MissionUpdate {
    pub title: String,
    pub kind: String,
    pub desc: String,
    pub active: Option<bool>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

/// Fields for a submission insert; the caller has already resolved the
/// period stamp and taken the mission snapshot.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub username: String,
    pub mission_id: Uuid,
    pub mission_title: String,
    pub mission_type: String,
    pub photos: Vec<String>,
    pub photos_count: i32,
    pub week: i32,
    pub year: i32,
}

pub async fn list_missions(pool: &PgPool) -> sqlx::Result<Vec<MissionRow>> {
    sqlx::query_as(&format!(
        "SELECT {MISSION_COLUMNS} FROM missions ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn create_mission(pool: &PgPool, mission: NewMission) -> sqlx::Result<MissionRow> {
    sqlx::query_as(&format!(
        r#"INSERT INTO missions (title, "type", "desc", active, start_date, end_date)
           VALUES ($1, $2, $3, $4, $5, $6)
           RETURNING {MISSION_COLUMNS}"#
    ))
    .bind(mission.title)
    .bind(mission.kind)
    .bind(mission.desc)
    .bind(mission.active)
    .bind(mission.start_date)
    .bind(mission.end_date)
    .fetch_one(pool)
    .await
}

pub async fn update_mission(
    pool: &PgPool,
    id: Uuid,
    update: MissionUpdate,
) -> sqlx::Result<MissionRow> {
    sqlx::query_as(&format!(
        r#"UPDATE missions
           SET title = $2, "type" = $3, "desc" = $4, active = $5, start_date = $6, end_date = $7
           WHERE id = $1
           RETURNING {MISSION_COLUMNS}"#
    ))
    .bind(id)
    .bind(update.title)
    .bind(update.kind)
    .bind(update.desc)
    .bind(update.active)
    .bind(update.start_date)
    .bind(update.end_date)
    .fetch_optional(pool)
    .await?
    .ok_or(sqlx::Error::RowNotFound)
}

pub async fn delete_mission(pool: &PgPool, id: Uuid) -> sqlx::Result<()> {
    let result = sqlx::query("DELETE FROM missions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

pub async fn list_submissions(
    pool: &PgPool,
    username: Option<&str>,
) -> sqlx::Result<Vec<SubmissionRow>> {
    match username {
        Some(name) => {
            sqlx::query_as(
                "SELECT * FROM submissions WHERE username = $1 ORDER BY created_at DESC",
            )
            .bind(name)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as("SELECT * FROM submissions ORDER BY created_at DESC")
                .fetch_all(pool)
                .await
        }
    }
}

pub async fn count_submissions(pool: &PgPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM submissions")
        .fetch_one(pool)
        .await
}

pub async fn create_submission(
    pool: &PgPool,
    submission: NewSubmission,
) -> sqlx::Result<SubmissionRow> {
    sqlx::query_as(
        r#"INSERT INTO submissions
               (username, mission_id, mission_title, mission_type, photos, photos_count, week, year)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
           RETURNING *"#,
    )
    .bind(submission.username)
    .bind(submission.mission_id)
    .bind(submission.mission_title)
    .bind(submission.mission_type)
    .bind(submission.photos)
    .bind(submission.photos_count)
    .bind(submission.week)
    .bind(submission.year)
    .fetch_one(pool)
    .await
}
