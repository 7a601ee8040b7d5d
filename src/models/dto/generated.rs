use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::trivia_question::CHOICE_COUNT,
};

static ANSWER_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-D]$").expect("valid regex"));

/// Parse the generator's JSON payload into its candidate items. The top level
/// must be an object carrying a `triviaQuestions` array; anything else fails
/// the whole request.
pub fn parse_generated_batch(content: &str) -> AppResult<Vec<Value>> {
    let parsed: Value = serde_json::from_str(content)
        .map_err(|e| AppError::GenerationFailed(format!("Unparseable generator output: {}", e)))?;

    let items = parsed
        .get("triviaQuestions")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::GenerationFailed(
                "Generator output missing 'triviaQuestions' array".to_string(),
            )
        })?;

    Ok(items.clone())
}

/// One generator item that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuestion {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: String,
    pub difficulty: i32,
    pub category: String,
}

impl CandidateQuestion {
    /// Field-by-field shape check of a single generated item. Returns `None`
    /// when any required field is missing or mistyped; the caller drops the
    /// item and continues with the rest of the batch.
    pub fn from_value(value: &Value) -> Option<Self> {
        let question = value.get("question")?.as_str()?.trim();
        if question.is_empty() {
            return None;
        }

        let raw_choices = value.get("choices")?.as_array()?;
        if raw_choices.len() != CHOICE_COUNT {
            return None;
        }
        let mut choices = Vec::with_capacity(CHOICE_COUNT);
        for raw in raw_choices {
            let choice = raw.as_str()?.trim();
            if choice.is_empty() {
                return None;
            }
            choices.push(choice.to_string());
        }

        let answer = value.get("answer")?.as_str()?.trim().to_string();
        if !ANSWER_LABEL.is_match(&answer) {
            return None;
        }
        let labels_choice = choices
            .iter()
            .any(|choice| choice.split(':').next().map(str::trim) == Some(answer.as_str()));
        if !labels_choice {
            return None;
        }

        let raw_difficulty = value.get("difficulty")?;
        let difficulty = raw_difficulty
            .as_i64()
            .or_else(|| raw_difficulty.as_f64().map(|f| f as i64))? as i32;

        let category = value.get("category")?.as_str()?.trim();
        if category.is_empty() {
            return None;
        }

        Some(CandidateQuestion {
            question: question.to_string(),
            choices,
            answer,
            difficulty,
            category: category.to_string(),
        })
    }
}
