use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{request::PaginationParams, response::ReviewListResponse},
};

#[get("/api/history")]
pub async fn list_history(
    state: web::Data<AppState>,
    pagination: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let pagination = pagination.into_inner();
    pagination.validate()?;

    let (items, total) = state
        .review_service
        .list_history(auth.user_id(), pagination.offset(), pagination.limit())
        .await?;

    Ok(HttpResponse::Ok().json(ReviewListResponse { items, total }))
}
