use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{FavoriteStatusQuery, PaginationParams, ToggleFavoriteRequest},
        response::{FavoriteStatusResponse, FavoriteToggleResponse, ReviewListResponse},
    },
};

#[post("/api/favorites")]
pub async fn toggle_favorite(
    state: web::Data<AppState>,
    request: web::Json<ToggleFavoriteRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let favorited = state
        .favorite_service
        .toggle(auth.user_id(), &request.trivia_id)
        .await?;

    let message = if favorited {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };

    Ok(HttpResponse::Ok().json(FavoriteToggleResponse {
        favorited,
        message: message.to_string(),
    }))
}

#[get("/api/favorites")]
pub async fn favorite_status(
    state: web::Data<AppState>,
    query: web::Query<FavoriteStatusQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let favorited = state
        .favorite_service
        .status(auth.user_id(), &query.trivia_id)
        .await?;

    Ok(HttpResponse::Ok().json(FavoriteStatusResponse { favorited }))
}

#[get("/api/favorites/list")]
pub async fn list_favorites(
    state: web::Data<AppState>,
    pagination: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let pagination = pagination.into_inner();
    pagination.validate()?;

    let (items, total) = state
        .review_service
        .list_favorites(auth.user_id(), pagination.offset(), pagination.limit())
        .await?;

    Ok(HttpResponse::Ok().json(ReviewListResponse { items, total }))
}
