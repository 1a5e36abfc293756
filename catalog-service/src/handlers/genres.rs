use crate::dtos::{CreateGenreRequest, GenreResponse, ListParams, Paginated, UpdateGenreRequest};
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

pub async fn list_genres(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.to_page();
    let (genres, total) = state.store.list_genres(page).await?;
    let items = genres.into_iter().map(GenreResponse::from).collect();
    Ok(Json(Paginated::new(items, total, page)))
}

pub async fn create_genre(
    State(state): State<AppState>,
    Json(req): Json<CreateGenreRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let genre = state.store.create_genre(req.into_input()).await?;
    Ok((StatusCode::CREATED, Json(GenreResponse::from(genre))))
}

pub async fn get_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let genre = state
        .store
        .get_genre(genre_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Genre {} not found", genre_id)))?;
    Ok(Json(GenreResponse::from(genre)))
}

pub async fn update_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<Uuid>,
    Json(req): Json<UpdateGenreRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let genre = state
        .store
        .update_genre(genre_id, req.into_input())
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Genre {} not found", genre_id)))?;
    Ok(Json(GenreResponse::from(genre)))
}

pub async fn delete_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.delete_genre(genre_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(anyhow::anyhow!(
            "Genre {} not found",
            genre_id
        )))
    }
}
