use crate::dtos::{CreateReviewRequest, ListParams, Paginated, ReviewResponse, UpdateReviewRequest};
use crate::middleware::CurrentUser;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use uuid::Uuid;
use validator::Validate;

pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.to_page();
    let (reviews, total) = state.store.list_reviews(page).await?;
    let items = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(Paginated::new(items, total, page)))
}

pub async fn create_review(
    State(state): State<AppState>,
    CurrentUser(author): CurrentUser,
    Json(req): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let review = state.store.create_review(req.into_input(author)).await?;
    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let review = state
        .store
        .get_review(review_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Review {} not found", review_id)))?;
    Ok(Json(ReviewResponse::from(review)))
}

pub async fn update_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(req): Json<UpdateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let review = state
        .store
        .update_review(review_id, req.into_input())
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Review {} not found", review_id)))?;
    Ok(Json(ReviewResponse::from(review)))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.delete_review(review_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(anyhow::anyhow!(
            "Review {} not found",
            review_id
        )))
    }
}
