use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of labeled choices every question carries.
pub const CHOICE_COUNT: usize = 4;

/// A generated multiple-choice trivia question. Immutable after creation;
/// rows are written only by the generation workflow.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TriviaQuestion {
    pub id: String, // uuid, assigned on create
    pub question: String,
    pub choices: Vec<String>, // exactly 4, each prefixed "A: " through "D: "
    pub answer: String,       // single capital letter, must label one of the choices
    pub difficulty: i32,      // 1-10
    pub category: String,
    pub user_id: String, // user who triggered the generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TriviaQuestion {
    pub fn new(
        question: &str,
        choices: Vec<String>,
        answer: &str,
        difficulty: i32,
        category: &str,
        user_id: &str,
    ) -> Self {
        TriviaQuestion {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            choices,
            answer: answer.to_string(),
            difficulty,
            category: category.to_string(),
            user_id: user_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }

    /// Whether `label` is the label of one of this question's choices.
    /// Choices are stored as `"A: some text"`, so the label is everything
    /// before the first colon.
    pub fn has_choice_label(&self, label: &str) -> bool {
        self.choices
            .iter()
            .any(|choice| choice.split(':').next().map(str::trim) == Some(label))
    }
}
