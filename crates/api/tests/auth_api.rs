//! HTTP-level integration tests for signup, login, token refresh, and the
//! session endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn signup(pool: &PgPool, username: &str) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/signup",
        json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "forge-and-weld-2024"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_returns_tokens(pool: PgPool) {
    let json = signup(&pool, "mvermeer").await;
    assert!(json["access_token"].as_str().is_some());
    assert!(json["refresh_token"].as_str().is_some());
    assert_eq!(json["user"]["username"], "mvermeer");
    assert_eq!(json["user"]["role"], "user");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_rejects_weak_password(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/signup",
        json!({
            "username": "shortpw",
            "email": "shortpw@example.com",
            "password": "short"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_rejects_duplicate_username(pool: PgPool) {
    signup(&pool, "dupuser").await;
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/signup",
        json!({
            "username": "dupuser",
            "email": "other@example.com",
            "password": "forge-and-weld-2024"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Login and the lazy profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_is_created_on_first_login(pool: PgPool) {
    let signup_body = signup(&pool, "jdevries").await;
    let token = signup_body["access_token"].as_str().unwrap();

    // Straight after signup there is no profile row yet.
    let response = get_auth(build_test_app(pool.clone()), "/api/v1/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = body_json(response).await;
    assert_eq!(me["profile"], serde_json::Value::Null);

    // First login creates it.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({ "username": "jdevries", "password": "forge-and-weld-2024" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let login = body_json(response).await;
    let token = login["access_token"].as_str().unwrap();

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/auth/me", token).await;
    let me = body_json(response).await;
    assert_eq!(me["profile"]["username"], "jdevries");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_with_wrong_password_fails(pool: PgPool) {
    signup(&pool, "wrongpw").await;
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({ "username": "wrongpw", "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Refresh rotation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_the_token(pool: PgPool) {
    let signup_body = signup(&pool, "rotator").await;
    let refresh_token = signup_body["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert_ne!(refreshed["refresh_token"].as_str().unwrap(), refresh_token);

    // The old token was revoked by the rotation.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Guarded routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_requires_a_token(pool: PgPool) {
    let response = common::get(build_test_app(pool.clone()), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_routes_reject_regular_users(pool: PgPool) {
    let signup_body = signup(&pool, "visitor").await;
    let token = signup_body["access_token"].as_str().unwrap();

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/dashboard",
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
