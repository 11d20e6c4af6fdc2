//! HTTP-level integration tests for the notification flow: a signed-in
//! author is notified when their review is moderated.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_json_auth, seed_user};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_moderation_notifies_the_author(pool: PgPool) {
    let (_, admin_token) = seed_user(&pool, "moderator", "admin").await;
    let (author, author_token) = seed_user(&pool, "author", "user").await;

    // Author submits a review while signed in; their identity is attached.
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/reviews",
        json!({ "rating": 5, "comment": "flawless installation" }),
        &author_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(
        created["data"]["user_id"].as_str().unwrap(),
        author.id.to_string()
    );
    let review_id = created["data"]["id"].as_str().unwrap().to_string();

    // Admin approves it.
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/reviews/{review_id}/approve"),
        json!({}),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The author now has one unread notification.
    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &author_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["unread"], 1);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/notifications?unread_only=true",
        &author_token,
    )
    .await;
    let json = body_json(response).await;
    let notifications = json["data"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0]["title"],
        "Your review has been published"
    );
    let notification_id = notifications[0]["id"].as_str().unwrap().to_string();

    // Marking it read clears the badge.
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/notifications/{notification_id}/read"),
        json!({}),
        &author_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &author_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["unread"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_anonymous_review_notifies_nobody(pool: PgPool) {
    let (_, admin_token) = seed_user(&pool, "quiet-moderator", "admin").await;

    let response = common::post_json(
        build_test_app(pool.clone()),
        "/api/v1/reviews",
        json!({ "rating": 3, "comment": "decent" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let review_id = created["data"]["id"].as_str().unwrap().to_string();

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/reviews/{review_id}/reject"),
        json!({}),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
