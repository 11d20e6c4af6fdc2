//! HTTP-level integration tests for the admin dashboard counters.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_json, seed_user};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_counts_pending_reviews_exactly(pool: PgPool) {
    let (_, admin_token) = seed_user(&pool, "dash-admin", "admin").await;

    // Three reviews: one approved, one rejected, one untouched.
    for _ in 0..3 {
        let response = post_json(
            build_test_app(pool.clone()),
            "/api/v1/reviews",
            json!({ "rating": 5, "comment": "excellent craftsmanship" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let ids: Vec<String> =
        sqlx::query_scalar::<_, uuid::Uuid>("SELECT id FROM reviews ORDER BY created_at")
            .fetch_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|id| id.to_string())
            .collect();

    let response = common::post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/reviews/{}/approve", ids[0]),
        json!({}),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = common::post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/reviews/{}/reject", ids[1]),
        json!({}),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/dashboard",
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // A rejected review is not pending.
    assert_eq!(json["data"]["reviews"]["total"], 3);
    assert_eq!(json["data"]["reviews"]["pending"], 1);
    assert_eq!(json["data"]["reviews"]["approved"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_tolerates_a_missing_table(pool: PgPool) {
    let (_, admin_token) = seed_user(&pool, "tolerant-admin", "admin").await;

    // Simulate one section's table being absent. The section must render
    // null while the others still populate.
    sqlx::query("DROP TABLE contact_messages")
        .execute(&pool)
        .await
        .unwrap();

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/dashboard",
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["contacts"], serde_json::Value::Null);
    assert!(json["data"]["projects"].is_object());
    assert!(json["data"]["reviews"].is_object());
    assert!(json["data"]["meetings"].is_object());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_requires_admin(pool: PgPool) {
    let (_, user_token) = seed_user(&pool, "plain-user", "user").await;
    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/dashboard",
        &user_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
