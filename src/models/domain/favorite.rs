use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's bookmark of a question. Row existence, not a flag, represents
/// "favorited".
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub trivia_id: String,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: &str, trivia_id: &str) -> Self {
        Favorite {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            trivia_id: trivia_id.to_string(),
            created_at: Utc::now(),
        }
    }
}
