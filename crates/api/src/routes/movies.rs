//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// ```text
/// GET    /movies/        -> list
/// GET    /movies/{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie::list))
        .route("/movies/", get(movie::list))
        .route("/movies/{id}", get(movie::get_by_id))
}
