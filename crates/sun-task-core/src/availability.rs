//! Mission selection eligibility.
//!
//! A mission may carry an optional activation window and an `active` flag.
//! Window bounds are wall-clock instants in the fixed civil timezone; the
//! comparison instant must be normalized into the same zone before any
//! check.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::{CoreError, CoreResult, TAIPEI};

/// Wall-clock "now" in the fixed civil timezone.
pub fn now_taipei() -> NaiveDateTime {
    Utc::now().with_timezone(&TAIPEI).naive_local()
}

/// Parse a client-supplied timestamp into fixed-zone wall-clock time.
///
/// Zone-aware inputs (RFC 3339) are converted into the fixed zone; zone-less
/// inputs are taken as already being wall clock in that zone. A bare date
/// means midnight.
pub fn parse_wall_clock(s: &str) -> CoreResult<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&TAIPEI).naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(CoreError::InvalidTimestamp(s.to_string()))
}

/// The selection-eligibility inputs of one mission.
///
/// `active` is optional because storage does not enforce its presence; an
/// absent flag counts as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Availability {
    pub active: Option<bool>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl Availability {
    /// Timing check alone: a start after `now` or an end before `now` rules
    /// the mission out; both boundaries are inclusive. The two bounds are
    /// evaluated independently, so a window with `start > end` is never
    /// repaired and trips at least one of the checks at every instant.
    pub fn in_window(&self, now: NaiveDateTime) -> bool {
        if let Some(start) = self.start {
            if start > now {
                return false;
            }
        }
        if let Some(end) = self.end {
            if end < now {
                return false;
            }
        }
        true
    }

    /// Whether the mission may be offered for selection: the `active` flag
    /// and the timing check together. The admin surface does not use this;
    /// it lists every mission regardless of window.
    pub fn selectable(&self, now: NaiveDateTime) -> bool {
        self.active.unwrap_or(true) && self.in_window(now)
    }
}
