use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Favorite,
    repositories::FavoriteRepository,
};

pub struct FavoriteService {
    favorite_repository: Arc<dyn FavoriteRepository>,
}

impl FavoriteService {
    pub fn new(favorite_repository: Arc<dyn FavoriteRepository>) -> Self {
        Self {
            favorite_repository,
        }
    }

    /// Flip the caller's favorite relationship to a question and report the
    /// resulting state. The presence check and the following write are
    /// separate store calls; concurrent toggles on the same pair can race,
    /// which this system tolerates.
    pub async fn toggle(&self, user_id: &str, trivia_id: &str) -> AppResult<bool> {
        if trivia_id.trim().is_empty() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        match self
            .favorite_repository
            .find_by_user_and_question(user_id, trivia_id)
            .await?
        {
            Some(existing) => {
                self.favorite_repository.delete(&existing.id).await?;
                Ok(false)
            }
            None => {
                self.favorite_repository
                    .insert(Favorite::new(user_id, trivia_id))
                    .await?;
                Ok(true)
            }
        }
    }

    pub async fn status(&self, user_id: &str, trivia_id: &str) -> AppResult<bool> {
        if trivia_id.trim().is_empty() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        let favorite = self
            .favorite_repository
            .find_by_user_and_question(user_id, trivia_id)
            .await?;
        Ok(favorite.is_some())
    }
}
