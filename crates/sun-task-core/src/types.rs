//! Mission categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The closed set of mission categories. Serialized with the labels the
/// service has always used; anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionType {
    /// 聊天任務: chat-room interaction missions.
    #[serde(rename = "聊天任務")]
    Chat,
    /// 跟牌任務: follow-the-bet missions.
    #[serde(rename = "跟牌任務")]
    CardFollowing,
    /// 馬逼任務: special challenge missions.
    #[serde(rename = "馬逼任務")]
    SpecialChallenge,
    /// 其他任務: everything else.
    #[serde(rename = "其他任務")]
    Other,
}

impl MissionType {
    /// The wire and storage label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            MissionType::Chat => "聊天任務",
            MissionType::CardFollowing => "跟牌任務",
            MissionType::SpecialChallenge => "馬逼任務",
            MissionType::Other => "其他任務",
        }
    }
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MissionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "聊天任務" => Ok(MissionType::Chat),
            "跟牌任務" => Ok(MissionType::CardFollowing),
            "馬逼任務" => Ok(MissionType::SpecialChallenge),
            "其他任務" => Ok(MissionType::Other),
            other => Err(CoreError::UnknownMissionType(other.to_string())),
        }
    }
}
