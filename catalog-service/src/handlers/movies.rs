use crate::dtos::{CreateMovieRequest, ListParams, MovieResponse, Paginated, UpdateMovieRequest};
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

pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.to_page();
    let (movies, total) = state.store.list_movies(page).await?;
    let items = movies.into_iter().map(MovieResponse::from).collect();
    Ok(Json(Paginated::new(items, total, page)))
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(req): Json<CreateMovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let movie = state.store.create_movie(req.into_input()).await?;
    Ok((StatusCode::CREATED, Json(MovieResponse::from(movie))))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let movie = state
        .store
        .get_movie(movie_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Movie {} not found", movie_id)))?;
    Ok(Json(MovieResponse::from(movie)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
    Json(req): Json<UpdateMovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let movie = state
        .store
        .update_movie(movie_id, req.into_input())
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Movie {} not found", movie_id)))?;
    Ok(Json(MovieResponse::from(movie)))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.delete_movie(movie_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(anyhow::anyhow!(
            "Movie {} not found",
            movie_id
        )))
    }
}
