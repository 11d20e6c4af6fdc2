//! Tests for meeting registration and derived availability.

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};
use forgeline_db::models::meeting::CreateMeeting;
use forgeline_db::models::registration::CreateRegistration;
use forgeline_db::repositories::{MeetingRepo, RegisterOutcome, RegistrationRepo};
use sqlx::PgPool;
use uuid::Uuid;

fn sample_meeting(spots: i32) -> CreateMeeting {
    CreateMeeting {
        title: "Workshop open house".to_string(),
        date: NaiveDate::from_ymd_opt(2030, 3, 14).unwrap(),
        time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        location: "Main workshop".to_string(),
        address: Some("Industrieweg 12".to_string()),
        spots,
        description: None,
    }
}

fn sample_registration(name: &str) -> CreateRegistration {
    CreateRegistration {
        meeting_id: None,
        project_id: None,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        company: None,
        message: None,
    }
}

// ---------------------------------------------------------------------------
// Capacity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_register_until_full(pool: PgPool) {
    let meeting = MeetingRepo::create(&pool, &sample_meeting(2))
        .await
        .expect("create should succeed");

    // Two registrations fit; capacity counts approved ones.
    for name in ["Ada", "Ben"] {
        let outcome = MeetingRepo::register(&pool, meeting.id, &sample_registration(name))
            .await
            .expect("register should succeed");
        let registration = assert_matches!(outcome, RegisterOutcome::Registered(r) => r);
        assert_eq!(registration.status, "pending");
        RegistrationRepo::set_status(&pool, registration.id, "approved")
            .await
            .expect("approve should succeed");
    }

    let outcome = MeetingRepo::register(&pool, meeting.id, &sample_registration("Cas"))
        .await
        .expect("register should succeed");
    assert_matches!(outcome, RegisterOutcome::Full);

    let remaining = MeetingRepo::remaining_spots(&pool, meeting.id)
        .await
        .expect("query should succeed")
        .expect("meeting should exist");
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pending_registrations_do_not_consume_spots(pool: PgPool) {
    let meeting = MeetingRepo::create(&pool, &sample_meeting(1))
        .await
        .expect("create should succeed");

    let outcome = MeetingRepo::register(&pool, meeting.id, &sample_registration("Ada"))
        .await
        .expect("register should succeed");
    assert_matches!(outcome, RegisterOutcome::Registered(_));

    // The first registration is still pending, so the spot is not taken.
    let remaining = MeetingRepo::remaining_spots(&pool, meeting.id)
        .await
        .expect("query should succeed")
        .expect("meeting should exist");
    assert_eq!(remaining, 1);

    let outcome = MeetingRepo::register(&pool, meeting.id, &sample_registration("Ben"))
        .await
        .expect("register should succeed");
    assert_matches!(outcome, RegisterOutcome::Registered(_));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_against_missing_meeting(pool: PgPool) {
    let outcome = MeetingRepo::register(&pool, Uuid::new_v4(), &sample_registration("Ada"))
        .await
        .expect("register should succeed");
    assert_matches!(outcome, RegisterOutcome::MeetingNotFound);
}

// ---------------------------------------------------------------------------
// Upcoming listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_upcoming_orders_ascending_and_skips_past(pool: PgPool) {
    let mut early = sample_meeting(10);
    early.date = NaiveDate::from_ymd_opt(2030, 1, 10).unwrap();
    let mut late = sample_meeting(10);
    late.date = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();
    let mut past = sample_meeting(10);
    past.date = NaiveDate::from_ymd_opt(2029, 1, 1).unwrap();

    MeetingRepo::create(&pool, &late).await.expect("create");
    MeetingRepo::create(&pool, &early).await.expect("create");
    MeetingRepo::create(&pool, &past).await.expect("create");

    let today = NaiveDate::from_ymd_opt(2029, 12, 31).unwrap();
    let upcoming = MeetingRepo::upcoming(&pool, today)
        .await
        .expect("upcoming should succeed");

    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].meeting.date, early.date);
    assert_eq!(upcoming[1].meeting.date, late.date);
    assert_eq!(upcoming[0].remaining_spots, 10);
}

// ---------------------------------------------------------------------------
// Registration target XOR
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_registration_requires_exactly_one_target(pool: PgPool) {
    // Neither meeting nor project: the schema rejects it.
    let result = sqlx::query(
        "INSERT INTO meeting_registrations (name, email) VALUES ('X', 'x@example.com')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "target-less registration must be rejected");
}
