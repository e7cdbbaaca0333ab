//! HTTP-level integration tests for the `/director` and `/genre` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, insert_movie, insert_named, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

/// POST a director and return the id from the `Location` header.
async fn create_director(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/director/", json!({ "director_name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    location
        .strip_prefix("/director/")
        .unwrap()
        .parse()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_director_returns_201_with_empty_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/director/", json!({"director_name": "Nolan"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key("location"));
    assert!(body_bytes(response).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_get_via_enumeration(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/director", json!({"director_name": "Тарковский"})).await;

    let app = common::build_test_app(pool.clone());
    let listing = body_json(get(app, "/director/").await).await;
    let id = listing[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/director/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": id, "director_name": "Тарковский"})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/director/", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "director_name is required");

    // Nothing was written.
    let app = common::build_test_app(pool);
    assert_eq!(body_json(get(app, "/director/").await).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_wrong_field_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/genre/", json!({"name": "Drama"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_director_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/director/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        common::body_text(response).await,
        "director id=424242 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_genre_uses_genre_name_key(pool: PgPool) {
    let id = insert_named(&pool, "genres", "Sci-Fi").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/genre/{id}")).await).await;
    assert_eq!(json, json!({"id": id, "genre_name": "Sci-Fi"}));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_then_get_reflects_new_name(pool: PgPool) {
    let id = create_director(&pool, "Villeneuve").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/director/{id}"),
        json!({"director_name": "Denis Villeneuve"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/director/{id}")).await).await;
    assert_eq!(json["director_name"], "Denis Villeneuve");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/genre/999", json!({"genre_name": "Noir"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_name_returns_400(pool: PgPool) {
    let id = insert_named(&pool, "genres", "Drama").await;

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/genre/{id}"), json!({"genre_name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_get_returns_404(pool: PgPool) {
    let id = create_director(&pool, "Lynch").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/director/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/director/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_repeatable(pool: PgPool) {
    let id = insert_named(&pool, "genres", "Western").await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = delete(app, &format!("/genre/{id}")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_referenced_genre_returns_409(pool: PgPool) {
    let genre_id = insert_named(&pool, "genres", "Sci-Fi").await;
    let director_id = insert_named(&pool, "directors", "Nolan").await;
    let movie_id = insert_movie(&pool, "Inception", 2010, Some(genre_id), Some(director_id)).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/genre/{genre_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONSTRAINT_VIOLATION");

    // The movie still resolves its genre.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/{movie_id}")).await).await;
    assert_eq!(json["genre_name"], "Sci-Fi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_name_with_nul_character_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/director/", json!({"director_name": "No\u{0}lan"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let id = insert_named(&pool, "genres", "Drama").await;
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/genre/{id}"), json!({"genre_name": "a\u{0}b"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Stored name is untouched.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/genre/{id}")).await).await;
    assert_eq!(json["genre_name"], "Drama");
}
