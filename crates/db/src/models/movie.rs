//! Movie rows and wire types.

use cinema_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A movie joined with its genre and director names.
///
/// Both joins are inner joins, so the foreign keys are always populated here.
#[derive(Debug, Clone, FromRow)]
pub struct MovieDetailRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: DbId,
    pub director_id: DbId,
    pub genre_name: String,
    pub director_name: String,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Title-only projection used by every listing variant.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MovieTitle {
    pub title: String,
}

/// `GET /movies/{id}` body. Foreign keys are replaced by the joined names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_name: String,
    pub director_name: String,
}

impl From<MovieDetailRow> for MovieDetail {
    fn from(row: MovieDetailRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            trailer: row.trailer,
            year: row.year,
            rating: row.rating,
            genre_name: row.genre_name,
            director_name: row.director_name,
        }
    }
}
