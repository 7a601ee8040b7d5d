use std::sync::Arc;

use crate::{
    constants::trivia_prompt::{build_generation_prompt, GENERATION_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::{
        domain::{HistoryEntry, TriviaQuestion},
        dto::generated::{parse_generated_batch, CandidateQuestion},
    },
    repositories::{HistoryRepository, TriviaQuestionRepository},
    services::{model_service::QuestionGenerator, quota_service::QuotaService},
};

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 10;

/// Orchestrates one generation batch: quota gate, prompt construction,
/// generator call, per-item validation, persistence, response assembly.
pub struct TriviaService {
    question_repository: Arc<dyn TriviaQuestionRepository>,
    history_repository: Arc<dyn HistoryRepository>,
    quota_service: Arc<QuotaService>,
    generator: Arc<dyn QuestionGenerator>,
}

impl TriviaService {
    pub fn new(
        question_repository: Arc<dyn TriviaQuestionRepository>,
        history_repository: Arc<dyn HistoryRepository>,
        quota_service: Arc<QuotaService>,
        generator: Arc<dyn QuestionGenerator>,
    ) -> Self {
        Self {
            question_repository,
            history_repository,
            quota_service,
            generator,
        }
    }

    /// Returns the subset of the generator's output that was validated and
    /// durably persisted, each item carrying its assigned id. Items that fail
    /// validation or either of their two writes are dropped and the rest of
    /// the batch continues; there is no rollback and no whole-batch failure
    /// once the generator has answered.
    pub async fn generate_questions(
        &self,
        user_id: &str,
        categories: &[String],
        min_difficulty: i32,
        max_difficulty: i32,
    ) -> AppResult<Vec<TriviaQuestion>> {
        let bounds = MIN_DIFFICULTY..=MAX_DIFFICULTY;
        if !bounds.contains(&min_difficulty)
            || !bounds.contains(&max_difficulty)
            || min_difficulty > max_difficulty
        {
            return Err(AppError::BadRequest(format!(
                "Invalid difficulty range [{}, {}]",
                min_difficulty, max_difficulty
            )));
        }

        let quota = self.quota_service.check(user_id).await?;
        if !quota.may_generate() {
            return Err(AppError::QuotaExceeded(format!(
                "Daily limit of {} trivia questions reached. Please try again tomorrow!",
                quota.limit
            )));
        }

        let prompt = build_generation_prompt(categories, min_difficulty, max_difficulty);
        let content = self
            .generator
            .generate(GENERATION_SYSTEM_PROMPT, &prompt)
            .await?;

        let candidates = parse_generated_batch(&content)?;

        let mut saved = Vec::new();
        for value in &candidates {
            let Some(candidate) = CandidateQuestion::from_value(value) else {
                log::warn!("Dropping generated item with missing or malformed fields");
                continue;
            };

            let CandidateQuestion {
                question,
                choices,
                answer,
                difficulty,
                category,
            } = candidate;

            let question = TriviaQuestion::new(
                &question, choices, &answer, difficulty, &category, user_id,
            );

            let question = match self.question_repository.insert(question).await {
                Ok(question) => question,
                Err(e) => {
                    log::error!("Failed to persist generated question: {}", e);
                    continue;
                }
            };

            let entry = HistoryEntry::new(user_id, &question.id);
            if let Err(e) = self.history_repository.insert(entry).await {
                log::error!(
                    "Failed to record generation history for question {}: {}",
                    question.id,
                    e
                );
                continue;
            }

            saved.push(question);
        }

        Ok(saved)
    }
}
