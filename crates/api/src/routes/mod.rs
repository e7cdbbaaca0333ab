pub mod health;
pub mod movies;
pub mod named;

use axum::Router;

use crate::handlers::named::{Directors, Genres};
use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy (collection routes also answer without the trailing slash):
///
/// ```text
/// /movies/                 list titles (?director_id=&genre_id=)
/// /movies/{id}             movie detail
///
/// /director/               list, create
/// /director/{id}           get, update, delete
///
/// /genre/                  list, create
/// /genre/{id}              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(named::router::<Directors>())
        .merge(named::router::<Genres>())
}
