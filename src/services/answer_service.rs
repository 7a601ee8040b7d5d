use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::AnswerRecord,
    repositories::{AnswerRepository, TriviaQuestionRepository},
};

pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
    pub record: AnswerRecord,
}

pub struct AnswerService {
    question_repository: Arc<dyn TriviaQuestionRepository>,
    answer_repository: Arc<dyn AnswerRepository>,
}

impl AnswerService {
    pub fn new(
        question_repository: Arc<dyn TriviaQuestionRepository>,
        answer_repository: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            question_repository,
            answer_repository,
        }
    }

    /// Grade and record a submitted answer. The record keyed by
    /// (user, question) is written-or-overwritten, so resubmitting is always
    /// allowed here; any "already answered" restriction lives in the
    /// presentation layer, not in this workflow.
    pub async fn submit_answer(
        &self,
        user_id: &str,
        trivia_id: &str,
        selected_answer: &str,
    ) -> AppResult<AnswerOutcome> {
        if trivia_id.trim().is_empty() || selected_answer.trim().is_empty() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        let question = self
            .question_repository
            .find_by_id(trivia_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Trivia question '{}' not found", trivia_id))
            })?;

        let is_correct = selected_answer == question.answer;
        let record = AnswerRecord::new(user_id, trivia_id, selected_answer, is_correct);
        let record = self.answer_repository.upsert(record).await?;

        Ok(AnswerOutcome {
            is_correct,
            correct_answer: question.answer,
            record,
        })
    }
}
