//! Author CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::response;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// A segment that is not a valid id cannot name any record.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str.trim().parse().map_err(|_| AppError::NotFound)
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::create_author(&body)?;
    let author = state.authors.create(input).await?;
    Ok(response::created(author))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let authors = state.authors.find_all().await?;
    Ok(response::ok(authors))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let author = state.authors.find_one(id).await?;
    Ok(response::ok(author))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let patch = RequestValidator::author_patch(&body)?;
    let id = parse_id(&id_str)?;
    state.authors.update(id, &patch).await?;
    Ok(response::no_content())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.authors.remove(id).await?;
    Ok(response::no_content())
}
