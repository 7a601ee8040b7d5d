use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single stored outcome of a user's attempt at a question, keyed by
/// (user_id, trivia_id). Resubmission overwrites the existing row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerRecord {
    pub user_id: String,
    pub trivia_id: String,
    pub selected_answer: String,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn new(user_id: &str, trivia_id: &str, selected_answer: &str, is_correct: bool) -> Self {
        AnswerRecord {
            user_id: user_id.to_string(),
            trivia_id: trivia_id.to_string(),
            selected_answer: selected_answer.to_string(),
            is_correct,
            answered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_serialization_preserves_correctness() {
        let record = AnswerRecord::new("user-1", "trivia-1", "B", false);

        let json = serde_json::to_string(&record).expect("record should serialize");
        let parsed: AnswerRecord = serde_json::from_str(&json).expect("record should deserialize");

        assert_eq!(parsed.selected_answer, "B");
        assert!(!parsed.is_correct);
        assert_eq!(parsed, record);
    }
}
