//! Repository for the `movies` table and its joins.

use cinema_core::filter::MovieFilter;
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{MovieDetail, MovieDetailRow, MovieTitle};

/// Provides read operations for movies. Movies have no write surface.
pub struct MovieRepo;

impl MovieRepo {
    /// Every movie title in id order.
    pub async fn list_titles(pool: &PgPool) -> Result<Vec<MovieTitle>, sqlx::Error> {
        Self::list_filtered(pool, MovieFilter::All).await
    }

    /// Titles matching `filter`. Filtered variants are ordered by year
    /// ascending, ties by id.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: MovieFilter,
    ) -> Result<Vec<MovieTitle>, sqlx::Error> {
        let query = listing_query(&filter);
        let mut q = sqlx::query_as::<_, MovieTitle>(&query);

        // Bind in the same order `listing_query` numbers the placeholders.
        if let Some(director_id) = filter.director_id() {
            q = q.bind(director_id);
        }
        if let Some(genre_id) = filter.genre_id() {
            q = q.bind(genre_id);
        }

        q.fetch_all(pool).await
    }

    /// A movie with its genre and director names resolved.
    ///
    /// Returns `None` when the id does not exist or when either foreign key
    /// has no partner row, so a join miss is indistinguishable from a
    /// missing movie.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<MovieDetail>, sqlx::Error> {
        let row = sqlx::query_as::<_, MovieDetailRow>(
            "SELECT m.id, m.title, m.description, m.trailer, m.year, m.rating, \
                    m.genre_id, m.director_id, \
                    g.name AS genre_name, d.name AS director_name \
             FROM movies m \
             JOIN genres g ON g.id = m.genre_id \
             JOIN directors d ON d.id = m.director_id \
             WHERE m.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        if row.is_none() {
            tracing::debug!(movie_id = id, "Movie detail lookup found no joined row");
        }
        Ok(row.map(MovieDetail::from))
    }
}

/// Build the title listing query for `filter`.
///
/// Placeholders are numbered director first, then genre.
fn listing_query(filter: &MovieFilter) -> String {
    let mut conditions = Vec::new();

    if filter.director_id().is_some() {
        conditions.push(format!("director_id = ${}", conditions.len() + 1));
    }
    if filter.genre_id().is_some() {
        conditions.push(format!("genre_id = ${}", conditions.len() + 1));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    let order_by = if filter.orders_by_year() {
        "year ASC, id ASC"
    } else {
        "id ASC"
    };

    format!("SELECT title FROM movies{where_clause} ORDER BY {order_by}")
}
