use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{request::SubmitAnswerRequest, response::SubmitAnswerResponse},
};

#[post("/api/answer")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let outcome = state
        .answer_service
        .submit_answer(auth.user_id(), &request.trivia_id, &request.selected_answer)
        .await?;

    Ok(HttpResponse::Ok().json(SubmitAnswerResponse {
        success: true,
        is_correct: outcome.is_correct,
        correct_answer: outcome.correct_answer,
        saved_answer: outcome.record,
    }))
}
