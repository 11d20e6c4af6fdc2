//! HTTP-level integration tests for meeting registration capacity and the
//! contact mailbox.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, post_json_auth, put_json_auth, seed_user};
use serde_json::json;
use sqlx::PgPool;

async fn create_meeting(pool: &PgPool, admin_token: &str, spots: i32) -> String {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/meetings",
        json!({
            "title": "Atelier open day",
            "date": "2030-05-02",
            "time": "10:00:00",
            "location": "Workshop hall",
            "address": "Industrieweg 12",
            "spots": spots,
            "description": "Tour of the fabrication floor"
        }),
        admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}

async fn register(pool: &PgPool, meeting_id: &str, name: &str) -> axum::response::Response {
    post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/meetings/{meeting_id}/register"),
        json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase())
        }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Capacity over HTTP
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_full_meeting_returns_conflict(pool: PgPool) {
    let (_, admin_token) = seed_user(&pool, "capacity-admin", "admin").await;
    let meeting_id = create_meeting(&pool, &admin_token, 1).await;

    let response = register(&pool, &meeting_id, "Ada").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let registration_id = created["data"]["id"].as_str().unwrap().to_string();

    // Approve the only registration, consuming the single spot.
    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/registrations/{registration_id}/status"),
        json!({ "status": "approved" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = register(&pool, &meeting_id, "Ben").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MEETING_FULL");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_registration_email_is_validated(pool: PgPool) {
    let (_, admin_token) = seed_user(&pool, "email-admin", "admin").await;
    let meeting_id = create_meeting(&pool, &admin_token, 5).await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/meetings/{meeting_id}/register"),
        json!({ "name": "Ada", "email": "not-an-address" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Contact mailbox over HTTP
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_archiving_twice_is_a_noop_success(pool: PgPool) {
    let (_, admin_token) = seed_user(&pool, "mailbox-admin", "admin").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/contact",
        json!({
            "name": "T. Jansen",
            "email": "tjansen@example.com",
            "message": "Looking for a steel pergola quote."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let response = put_json_auth(
            build_test_app(pool.clone()),
            &format!("/api/v1/admin/contact-messages/{id}/status"),
            json!({ "status": "archived" }),
            &admin_token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "archived");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_mailbox_status_is_rejected(pool: PgPool) {
    let (_, admin_token) = seed_user(&pool, "status-admin", "admin").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/contact",
        json!({
            "name": "T. Jansen",
            "email": "tjansen@example.com",
            "message": "Ping"
        }),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/contact-messages/{id}/status"),
        json!({ "status": "deleted" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
