use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{AnswerRecord, TriviaQuestion};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsResponse {
    pub trivia_questions: Vec<TriviaQuestion>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaResponse {
    pub questions_generated: i64,
    pub daily_limit: i64,
    pub remaining: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub success: bool,
    pub is_correct: bool,
    pub correct_answer: String,
    pub saved_answer: AnswerRecord,
}

#[derive(Debug, Serialize)]
pub struct FavoriteToggleResponse {
    pub favorited: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteStatusResponse {
    pub favorited: bool,
}

/// One history or favorites listing entry: the owning row joined with its
/// question, the caller's answer for it (if any) and favorite membership.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub question: TriviaQuestion,
    pub answer: Option<AnswerRecord>,
    pub favorited: bool,
}

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub items: Vec<ReviewItem>,
    pub total: i64,
}
