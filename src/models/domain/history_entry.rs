use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of a successfully generated-and-persisted question.
/// The rolling 24h count of these rows is the quota substrate.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub id: String,
    pub user_id: String,
    pub trivia_id: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(user_id: &str, trivia_id: &str) -> Self {
        HistoryEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            trivia_id: trivia_id.to_string(),
            created_at: Utc::now(),
        }
    }
}
