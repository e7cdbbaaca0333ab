//! Handlers shared by the `/director` and `/genre` resources.
//!
//! Each handler is generic over a [`NamedResource`] marker that supplies the
//! entity descriptor, so both resources run the same code.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use cinema_core::entity::{EntityDescriptor, DIRECTOR, GENRE};
use cinema_core::error::CoreError;
use cinema_core::payload::parse_name_payload;
use cinema_core::types::DbId;
use cinema_db::models::named::NamedView;
use cinema_db::repositories::NamedEntityRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Binds a handler set to one name-only entity.
pub trait NamedResource: Send + Sync + 'static {
    const DESCRIPTOR: EntityDescriptor;
}

/// Marker for `/director`.
pub struct Directors;

impl NamedResource for Directors {
    const DESCRIPTOR: EntityDescriptor = DIRECTOR;
}

/// Marker for `/genre`.
pub struct Genres;

impl NamedResource for Genres {
    const DESCRIPTOR: EntityDescriptor = GENRE;
}

fn not_found<R: NamedResource>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::DESCRIPTOR.entity,
        id,
    })
}

/// GET /{entity}/
pub async fn list<R: NamedResource>(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<NamedView>>> {
    let rows = NamedEntityRepo::list(&state.pool, &R::DESCRIPTOR).await?;
    Ok(Json(
        rows.into_iter()
            .map(|row| row.into_view(R::DESCRIPTOR))
            .collect(),
    ))
}

/// GET /{entity}/{id}
pub async fn get_by_id<R: NamedResource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NamedView>> {
    let row = NamedEntityRepo::find_by_id(&state.pool, &R::DESCRIPTOR, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(row.into_view(R::DESCRIPTOR)))
}

/// POST /{entity}/
///
/// Responds 201 with an empty body; the new resource path is only
/// advertised through the `Location` header.
pub async fn create<R: NamedResource>(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let name = parse_name_payload(&R::DESCRIPTOR, &body)?;
    let id = NamedEntityRepo::create(&state.pool, &R::DESCRIPTOR, &name).await?;
    tracing::info!(entity = R::DESCRIPTOR.entity, id, "Created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, R::DESCRIPTOR.location(id))],
    ))
}

/// PUT /{entity}/{id}
///
/// Full replace of the name. 404 when the id does not exist.
pub async fn update<R: NamedResource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<StatusCode> {
    let name = parse_name_payload(&R::DESCRIPTOR, &body)?;
    NamedEntityRepo::update(&state.pool, &R::DESCRIPTOR, id, &name)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    tracing::info!(entity = R::DESCRIPTOR.entity, id, "Updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /{entity}/{id}
///
/// Always 204 on success, whether or not the row existed. Rows still
/// referenced by movies surface as 409 from the foreign key.
pub async fn delete<R: NamedResource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if NamedEntityRepo::delete(&state.pool, &R::DESCRIPTOR, id).await? {
        tracing::info!(entity = R::DESCRIPTOR.entity, id, "Deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
