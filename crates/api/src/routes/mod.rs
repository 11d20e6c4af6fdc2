pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                     signup (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current user + profile
///
/// /projects                                        published listing (paged)
/// /projects/mine                                   own projects (requires auth)
/// /projects/{id}                                   detail with review aggregates
/// /projects/{id}/consultations                     consultation request (POST)
///
/// /gallery                                         listing (paged)
/// /gallery/{id}                                    detail
///
/// /reviews                                         approved listing (paged), submit (POST)
///
/// /meetings/upcoming                               upcoming with availability
/// /meetings/{id}                                   detail with availability
/// /meetings/{id}/register                          register (POST)
///
/// /contact                                         submit message (POST)
/// /search                                          substring search
/// /profiles/{username}                             public profile
/// /profile                                         update own profile (PUT)
/// /uploads                                         image upload (POST, requires auth)
///
/// /notifications                                   list (requires auth)
/// /notifications/unread-count                      badge count
/// /notifications/{id}/read                         mark read (POST)
/// /notifications/read-all                          mark all read (POST)
///
/// /admin/dashboard                                 per-table counters (admin)
/// /admin/projects                                  list any status, create
/// /admin/projects/{id}                             update
/// /admin/projects/{id}/status                      set status (PUT)
/// /admin/projects/{id}/toggle-featured             toggle flag (POST)
/// /admin/gallery                                   create
/// /admin/gallery/{id}                              update, delete
/// /admin/gallery/{id}/toggle-featured              toggle flag (POST)
/// /admin/reviews/pending                           moderation queue
/// /admin/reviews/{id}/approve                      approve (POST)
/// /admin/reviews/{id}/reject                       reject (POST)
/// /admin/meetings                                  create
/// /admin/meetings/{id}                             update
/// /admin/meetings/{id}/registrations               attendee list
/// /admin/registrations                             list (paged, status filter)
/// /admin/registrations/{id}/status                 approve/reject (PUT)
/// /admin/contact-messages                          mailbox (paged, status filter)
/// /admin/contact-messages/{id}/status              transition (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // --- Auth ---
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        // --- Projects ---
        .route("/projects", get(handlers::project::list))
        .route("/projects/mine", get(handlers::project::list_mine))
        .route("/projects/{id}", get(handlers::project::get_by_id))
        .route(
            "/projects/{id}/consultations",
            post(handlers::project::request_consultation),
        )
        // --- Gallery ---
        .route("/gallery", get(handlers::gallery::list))
        .route("/gallery/{id}", get(handlers::gallery::get_by_id))
        // --- Reviews ---
        .route(
            "/reviews",
            get(handlers::review::list_approved).post(handlers::review::create),
        )
        // --- Meetings ---
        .route("/meetings/upcoming", get(handlers::meeting::upcoming))
        .route("/meetings/{id}", get(handlers::meeting::get_by_id))
        .route("/meetings/{id}/register", post(handlers::meeting::register))
        // --- Contact / search / profiles / uploads ---
        .route("/contact", post(handlers::contact::create))
        .route("/search", get(handlers::search::search))
        .route("/profiles/{username}", get(handlers::profile::get_by_username))
        .route("/profile", put(handlers::profile::update_own))
        .route("/uploads", post(handlers::uploads::upload))
        // --- Notifications ---
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            post(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            post(handlers::notification::mark_all_read),
        )
        // --- Admin ---
        .route("/admin/dashboard", get(handlers::dashboard::stats))
        .route(
            "/admin/projects",
            get(handlers::project::admin_list).post(handlers::project::create),
        )
        .route("/admin/projects/{id}", put(handlers::project::update))
        .route(
            "/admin/projects/{id}/status",
            put(handlers::project::set_status),
        )
        .route(
            "/admin/projects/{id}/toggle-featured",
            post(handlers::project::toggle_featured),
        )
        .route("/admin/gallery", post(handlers::gallery::create))
        .route(
            "/admin/gallery/{id}",
            put(handlers::gallery::update).delete(handlers::gallery::remove),
        )
        .route(
            "/admin/gallery/{id}/toggle-featured",
            post(handlers::gallery::toggle_featured),
        )
        .route("/admin/reviews/pending", get(handlers::review::list_pending))
        .route(
            "/admin/reviews/{id}/approve",
            post(handlers::review::approve),
        )
        .route("/admin/reviews/{id}/reject", post(handlers::review::reject))
        .route("/admin/meetings", post(handlers::meeting::create))
        .route("/admin/meetings/{id}", put(handlers::meeting::update))
        .route(
            "/admin/meetings/{id}/registrations",
            get(handlers::meeting::list_registrations),
        )
        .route(
            "/admin/registrations",
            get(handlers::registration::admin_list),
        )
        .route(
            "/admin/registrations/{id}/status",
            put(handlers::registration::set_status),
        )
        .route(
            "/admin/contact-messages",
            get(handlers::contact::admin_list),
        )
        .route(
            "/admin/contact-messages/{id}/status",
            put(handlers::contact::set_status),
        )
}
