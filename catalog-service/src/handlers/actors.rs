use crate::dtos::{ActorResponse, CreateActorRequest, ListParams, Paginated, UpdateActorRequest};
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

pub async fn list_actors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.to_page();
    let (actors, total) = state.store.list_actors(page).await?;
    let items = actors.into_iter().map(ActorResponse::from).collect();
    Ok(Json(Paginated::new(items, total, page)))
}

pub async fn create_actor(
    State(state): State<AppState>,
    Json(req): Json<CreateActorRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let actor = state.store.create_actor(req.into_input()).await?;
    Ok((StatusCode::CREATED, Json(ActorResponse::from(actor))))
}

pub async fn get_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let actor = state
        .store
        .get_actor(actor_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Actor {} not found", actor_id)))?;
    Ok(Json(ActorResponse::from(actor)))
}

pub async fn update_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<Uuid>,
    Json(req): Json<UpdateActorRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let actor = state
        .store
        .update_actor(actor_id, req.into_input())
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Actor {} not found", actor_id)))?;
    Ok(Json(ActorResponse::from(actor)))
}

pub async fn delete_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.delete_actor(actor_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(anyhow::anyhow!(
            "Actor {} not found",
            actor_id
        )))
    }
}
