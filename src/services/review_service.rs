use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::{AnswerRecord, TriviaQuestion},
        dto::response::ReviewItem,
    },
    repositories::{
        AnswerRepository, FavoriteRepository, HistoryRepository, TriviaQuestionRepository,
    },
};

/// Read-side assembly for the history and favorites pages: rows joined with
/// their question, the caller's answer and favorite membership. Questions are
/// referenced by id from the owning rows and fetched in a second read; they
/// are never embedded in history or favorite documents.
pub struct ReviewService {
    history_repository: Arc<dyn HistoryRepository>,
    favorite_repository: Arc<dyn FavoriteRepository>,
    question_repository: Arc<dyn TriviaQuestionRepository>,
    answer_repository: Arc<dyn AnswerRepository>,
}

impl ReviewService {
    pub fn new(
        history_repository: Arc<dyn HistoryRepository>,
        favorite_repository: Arc<dyn FavoriteRepository>,
        question_repository: Arc<dyn TriviaQuestionRepository>,
        answer_repository: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            history_repository,
            favorite_repository,
            question_repository,
            answer_repository,
        }
    }

    pub async fn list_history(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ReviewItem>, i64)> {
        let (entries, total) = self
            .history_repository
            .list_by_user(user_id, offset, limit)
            .await?;

        let ids: Vec<String> = entries.iter().map(|e| e.trivia_id.clone()).collect();
        let questions = self.load_questions(&ids).await?;
        let mut answers = self.load_answers(user_id, &ids).await?;
        let favorited = self.load_favorited(user_id, &ids).await?;

        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            // a history row whose question row is gone is silently skipped
            let Some(question) = questions.get(&entry.trivia_id) else {
                continue;
            };

            items.push(ReviewItem {
                id: entry.id,
                created_at: entry.created_at,
                question: question.clone(),
                answer: answers.remove(&entry.trivia_id),
                favorited: favorited.contains(&entry.trivia_id),
            });
        }

        Ok((items, total))
    }

    pub async fn list_favorites(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ReviewItem>, i64)> {
        let (favorites, total) = self
            .favorite_repository
            .list_by_user(user_id, offset, limit)
            .await?;

        let ids: Vec<String> = favorites.iter().map(|f| f.trivia_id.clone()).collect();
        let questions = self.load_questions(&ids).await?;
        let mut answers = self.load_answers(user_id, &ids).await?;

        let mut items = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            let Some(question) = questions.get(&favorite.trivia_id) else {
                continue;
            };

            items.push(ReviewItem {
                id: favorite.id,
                created_at: favorite.created_at,
                question: question.clone(),
                answer: answers.remove(&favorite.trivia_id),
                favorited: true,
            });
        }

        Ok((items, total))
    }

    async fn load_questions(
        &self,
        trivia_ids: &[String],
    ) -> AppResult<HashMap<String, TriviaQuestion>> {
        let questions = self.question_repository.find_by_ids(trivia_ids).await?;
        Ok(questions
            .into_iter()
            .map(|q| (q.id.clone(), q))
            .collect())
    }

    async fn load_answers(
        &self,
        user_id: &str,
        trivia_ids: &[String],
    ) -> AppResult<HashMap<String, AnswerRecord>> {
        let answers = self
            .answer_repository
            .find_by_user_and_questions(user_id, trivia_ids)
            .await?;
        Ok(answers
            .into_iter()
            .map(|a| (a.trivia_id.clone(), a))
            .collect())
    }

    async fn load_favorited(
        &self,
        user_id: &str,
        trivia_ids: &[String],
    ) -> AppResult<HashSet<String>> {
        let favorites = self
            .favorite_repository
            .find_by_user_and_questions(user_id, trivia_ids)
            .await?;
        Ok(favorites.into_iter().map(|f| f.trivia_id).collect())
    }
}
