use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single human-readable entry in the activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub text: String,
}

impl ActivityRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            text: text.into(),
        }
    }
}
