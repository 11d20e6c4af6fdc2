//! Tests for the review moderation queue and the contact mailbox.

use forgeline_db::models::contact::CreateContactMessage;
use forgeline_db::models::review::CreateReview;
use forgeline_db::repositories::{ContactRepo, ReviewRepo};
use sqlx::PgPool;

fn sample_review(rating: i32) -> CreateReview {
    CreateReview {
        user_id: None,
        project_id: None,
        rating,
        comment: Some("sturdy work, delivered on time".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tri-state approval
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_new_review_is_pending(pool: PgPool) {
    let review = ReviewRepo::create(&pool, &sample_review(5))
        .await
        .expect("create should succeed");
    assert_eq!(review.is_approved, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pending_count_excludes_rejected(pool: PgPool) {
    let a = ReviewRepo::create(&pool, &sample_review(5))
        .await
        .expect("create should succeed");
    let b = ReviewRepo::create(&pool, &sample_review(4))
        .await
        .expect("create should succeed");
    let _c = ReviewRepo::create(&pool, &sample_review(1))
        .await
        .expect("create should succeed");

    ReviewRepo::set_approval(&pool, a.id, true)
        .await
        .expect("approve should succeed");
    ReviewRepo::set_approval(&pool, b.id, false)
        .await
        .expect("reject should succeed");

    // One approved, one rejected, one untouched: pending is exactly 1.
    let pending = ReviewRepo::pending_count(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(pending, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_approved_listing_ignores_pending_and_rejected(pool: PgPool) {
    let a = ReviewRepo::create(&pool, &sample_review(5))
        .await
        .expect("create should succeed");
    let b = ReviewRepo::create(&pool, &sample_review(2))
        .await
        .expect("create should succeed");
    ReviewRepo::create(&pool, &sample_review(3))
        .await
        .expect("create should succeed");

    ReviewRepo::set_approval(&pool, a.id, true)
        .await
        .expect("approve should succeed");
    ReviewRepo::set_approval(&pool, b.id, false)
        .await
        .expect("reject should succeed");

    let (approved, total) = ReviewRepo::list_approved(&pool, 0, 8)
        .await
        .expect("list should succeed");
    assert_eq!(total, 1);
    assert_eq!(approved[0].id, a.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rating_outside_range_is_rejected_by_schema(pool: PgPool) {
    let result = ReviewRepo::create(&pool, &sample_review(6)).await;
    assert!(result.is_err(), "rating 6 must violate the CHECK constraint");

    let result = ReviewRepo::create(&pool, &sample_review(0)).await;
    assert!(result.is_err(), "rating 0 must violate the CHECK constraint");
}

// ---------------------------------------------------------------------------
// Contact mailbox
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_contact_message_starts_new(pool: PgPool) {
    let message = ContactRepo::create(
        &pool,
        &CreateContactMessage {
            name: "R. de Vries".to_string(),
            email: "rdevries@example.com".to_string(),
            message: "Quote for a glass canopy?".to_string(),
        },
    )
    .await
    .expect("create should succeed");
    assert_eq!(message.status, "new");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_status_transition_is_repeatable(pool: PgPool) {
    let message = ContactRepo::create(
        &pool,
        &CreateContactMessage {
            name: "J. Bakker".to_string(),
            email: "jbakker@example.com".to_string(),
            message: "Do you fabricate stainless handrails?".to_string(),
        },
    )
    .await
    .expect("create should succeed");

    let archived = ContactRepo::set_status(&pool, message.id, "archived")
        .await
        .expect("set_status should succeed")
        .expect("message should exist");
    assert_eq!(archived.status, "archived");

    // Archiving again succeeds and leaves the status unchanged.
    let archived_again = ContactRepo::set_status(&pool, message.id, "archived")
        .await
        .expect("repeat set_status should succeed")
        .expect("message should exist");
    assert_eq!(archived_again.status, "archived");
}
