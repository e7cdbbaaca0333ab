//! Handlers for the read-only `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use cinema_core::entity::MOVIE;
use cinema_core::error::CoreError;
use cinema_core::filter::MovieFilter;
use cinema_core::types::DbId;
use cinema_db::models::movie::{MovieDetail, MovieTitle};
use cinema_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::MovieListParams;
use crate::state::AppState;

/// GET /movies/
///
/// Title-only listing, optionally filtered by `director_id` and/or `genre_id`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<MovieTitle>>> {
    let (director_id, genre_id) = params.parse_ids()?;
    let filter = MovieFilter::resolve(director_id, genre_id);
    let titles = MovieRepo::list_filtered(&state.pool, filter).await?;
    Ok(Json(titles))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieDetail>> {
    let movie = MovieRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: MOVIE, id }))?;
    Ok(Json(movie))
}
