use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAnswerRepository, MongoFavoriteRepository, MongoHistoryRepository,
        MongoTriviaQuestionRepository,
    },
    services::{
        AnswerService, FavoriteService, OpenAiGenerator, QuotaService, ReviewService,
        TriviaService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub trivia_service: Arc<TriviaService>,
    pub quota_service: Arc<QuotaService>,
    pub answer_service: Arc<AnswerService>,
    pub favorite_service: Arc<FavoriteService>,
    pub review_service: Arc<ReviewService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoTriviaQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;
        let answer_repository = Arc::new(MongoAnswerRepository::new(&db));
        answer_repository.ensure_indexes().await?;
        let favorite_repository = Arc::new(MongoFavoriteRepository::new(&db));
        favorite_repository.ensure_indexes().await?;
        let history_repository = Arc::new(MongoHistoryRepository::new(&db));
        history_repository.ensure_indexes().await?;

        let quota_service = Arc::new(QuotaService::new(
            history_repository.clone(),
            config.daily_generation_limit,
        ));
        let generator = Arc::new(OpenAiGenerator::new(&config));

        let trivia_service = Arc::new(TriviaService::new(
            question_repository.clone(),
            history_repository.clone(),
            quota_service.clone(),
            generator,
        ));
        let answer_service = Arc::new(AnswerService::new(
            question_repository.clone(),
            answer_repository.clone(),
        ));
        let favorite_service = Arc::new(FavoriteService::new(favorite_repository.clone()));
        let review_service = Arc::new(ReviewService::new(
            history_repository,
            favorite_repository,
            question_repository,
            answer_repository,
        ));

        Ok(Self {
            trivia_service,
            quota_service,
            answer_service,
            favorite_service,
            review_service,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
