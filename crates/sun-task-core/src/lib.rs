//! Weekly Mission Domain Core
//!
//! This crate provides the rules the submission service is built around:
//! which missions are currently selectable, and which ISO week/year bucket
//! a submission is stamped with. Both are pure functions; storage and HTTP
//! live in `sun-task-api`.

pub mod availability;
pub mod period;
pub mod types;

use thiserror::Error;

pub use availability::{now_taipei, parse_wall_clock, Availability};
pub use period::{current_period, resolve_period, WeekPeriod};
pub use types::MissionType;

/// The fixed civil timezone every date comparison and week resolution is
/// normalized into. Window bounds are authored in this zone's wall clock.
pub const TAIPEI: chrono_tz::Tz = chrono_tz::Asia::Taipei;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("unknown mission type: {0}")]
    UnknownMissionType(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
