use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::GenerateQuestionsQuery,
        response::{GenerateQuestionsResponse, QuotaResponse},
    },
};

#[get("/api/trivia")]
pub async fn generate_trivia(
    state: web::Data<AppState>,
    query: web::Query<GenerateQuestionsQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let (min_difficulty, max_difficulty) = query.difficulty_range();
    let questions = state
        .trivia_service
        .generate_questions(
            auth.user_id(),
            &query.category_list(),
            min_difficulty,
            max_difficulty,
        )
        .await?;

    Ok(HttpResponse::Ok().json(GenerateQuestionsResponse {
        trivia_questions: questions,
    }))
}

#[get("/api/quota")]
pub async fn get_quota(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let status = state.quota_service.check(auth.user_id()).await?;

    Ok(HttpResponse::Ok().json(QuotaResponse {
        questions_generated: status.used,
        daily_limit: status.limit,
        remaining: status.remaining(),
    }))
}
