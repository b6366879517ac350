//! Share record payloads.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder solve time served when no store is configured.
const FALLBACK_TIME: &str = "01:23.456";

/// Placeholder hint count served when no store is configured.
const FALLBACK_HINTS: u32 = 1;

/// A completed puzzle attempt published by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecord {
    /// Which daily puzzle this attempt was for.
    pub date: String,
    /// Elapsed solve time, formatted as `minutes:seconds.milliseconds`.
    pub time: String,
    /// Number of hints used.
    pub hints: u32,
    /// Whether the solution was revealed rather than solved.
    pub is_revealed: bool,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

impl ShareRecord {
    /// Synthetic record served when no store is configured.
    ///
    /// The placeholder time and hint count are the fixed values the share
    /// page renders in storeless environments.
    pub fn fallback(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: FALLBACK_TIME.to_string(),
            hints: FALLBACK_HINTS,
            is_revealed: false,
            created_at: now_timestamp(),
        }
    }
}

/// Input for publishing a new share; the server assigns the share id and
/// the creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShare {
    /// Which daily puzzle the attempt was for.
    pub date: String,
    /// Elapsed solve time, formatted as `minutes:seconds.milliseconds`.
    pub time: String,
    /// Number of hints used.
    pub hints: u32,
    /// Whether the solution was revealed rather than solved.
    pub is_revealed: bool,
}

impl NewShare {
    /// Stamp the creation time, producing the record to store.
    pub fn into_record(self) -> ShareRecord {
        ShareRecord {
            date: self.date,
            time: self.time,
            hints: self.hints,
            is_revealed: self.is_revealed,
            created_at: now_timestamp(),
        }
    }
}

/// Current time in ISO-8601 form with millisecond precision.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
