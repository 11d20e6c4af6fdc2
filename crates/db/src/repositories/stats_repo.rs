//! Per-table counters for the admin dashboard.
//!
//! Every method is a single-table query and an independent point-in-time
//! snapshot; the dashboard handler fans them out concurrently and tolerates
//! individual failures. Rolling-window cutoffs are computed by the caller
//! and bound as parameters so "this month" means the same instant across a
//! section's queries.

use chrono::NaiveDate;
use forgeline_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::stats::{
    ContactStats, MeetingStats, ProjectStats, RegistrationStats, ReviewStats,
};

/// Provides aggregate counters, one table per method.
pub struct StatsRepo;

impl StatsRepo {
    /// Project counters. `active` means not archived.
    pub async fn projects(pool: &PgPool, month_cutoff: Timestamp) -> Result<ProjectStats, sqlx::Error> {
        let (total, active, featured, this_month): (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE status <> 'archived'),
                    COUNT(*) FILTER (WHERE featured = true),
                    COUNT(*) FILTER (WHERE created_at >= $1)
             FROM projects",
        )
        .bind(month_cutoff)
        .fetch_one(pool)
        .await?;
        Ok(ProjectStats {
            total,
            active,
            featured,
            this_month,
        })
    }

    /// Review counters. `pending` counts `is_approved IS NULL` exactly;
    /// rejected reviews are excluded.
    pub async fn reviews(pool: &PgPool, month_cutoff: Timestamp) -> Result<ReviewStats, sqlx::Error> {
        let (total, pending, approved, this_month): (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE is_approved IS NULL),
                    COUNT(*) FILTER (WHERE is_approved = true),
                    COUNT(*) FILTER (WHERE created_at >= $1)
             FROM reviews",
        )
        .bind(month_cutoff)
        .fetch_one(pool)
        .await?;
        Ok(ReviewStats {
            total,
            pending,
            approved,
            this_month,
        })
    }

    /// Registration counters.
    pub async fn registrations(
        pool: &PgPool,
        month_cutoff: Timestamp,
    ) -> Result<RegistrationStats, sqlx::Error> {
        let (total, pending, this_month): (i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE status = 'pending'),
                    COUNT(*) FILTER (WHERE created_at >= $1)
             FROM meeting_registrations",
        )
        .bind(month_cutoff)
        .fetch_one(pool)
        .await?;
        Ok(RegistrationStats {
            total,
            pending,
            this_month,
        })
    }

    /// Contact-message counters.
    pub async fn contacts(pool: &PgPool, week_cutoff: Timestamp) -> Result<ContactStats, sqlx::Error> {
        let (total, new, this_week): (i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE status = 'new'),
                    COUNT(*) FILTER (WHERE created_at >= $1)
             FROM contact_messages",
        )
        .bind(week_cutoff)
        .fetch_one(pool)
        .await?;
        Ok(ContactStats {
            total,
            new,
            this_week,
        })
    }

    /// Meeting counters. `upcoming` counts meetings on or after `today`.
    pub async fn meetings(pool: &PgPool, today: NaiveDate) -> Result<MeetingStats, sqlx::Error> {
        let (total, upcoming): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE date >= $1)
             FROM meetings",
        )
        .bind(today)
        .fetch_one(pool)
        .await?;
        Ok(MeetingStats { total, upcoming })
    }
}
