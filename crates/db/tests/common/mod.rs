#![allow(dead_code)]

use sqlx::PgPool;

/// Insert a movie row directly; movies have no repository write path.
pub async fn insert_movie(
    pool: &PgPool,
    title: &str,
    year: i32,
    genre_id: Option<i64>,
    director_id: Option<i64>,
) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO movies (title, description, trailer, year, rating, genre_id, director_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id",
    )
    .bind(title)
    .bind(format!("{title} description"))
    .bind(format!("https://trailers.example/{year}"))
    .bind(year)
    .bind(7.5_f64)
    .bind(genre_id)
    .bind(director_id)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}
