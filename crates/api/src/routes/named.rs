//! Route definitions for the `/director` and `/genre` resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::named::{self, NamedResource};
use crate::state::AppState;

/// Routes for one name-only resource, mounted at `/{entity}`.
///
/// ```text
/// GET    /{entity}/        -> list
/// POST   /{entity}/        -> create
/// GET    /{entity}/{id}    -> get_by_id
/// PUT    /{entity}/{id}    -> update
/// DELETE /{entity}/{id}    -> delete
/// ```
pub fn router<R: NamedResource>() -> Router<AppState> {
    let base = format!("/{}", R::DESCRIPTOR.entity);

    Router::new()
        .route(&base, get(named::list::<R>).post(named::create::<R>))
        .route(
            &format!("{base}/"),
            get(named::list::<R>).post(named::create::<R>),
        )
        .route(
            &format!("{base}/{{id}}"),
            get(named::get_by_id::<R>)
                .put(named::update::<R>)
                .delete(named::delete::<R>),
        )
}
