//! Dashboard counter models.

use serde::Serialize;

/// Counters for one dashboard section.
///
/// Each section is an independent point-in-time snapshot; no consistency is
/// guaranteed across sections (they are fetched concurrently and a failed
/// section surfaces as `None` at the API layer without aborting the rest).
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStats {
    pub total: i64,
    /// Not archived.
    pub active: i64,
    pub featured: i64,
    /// Created within the rolling 30-day window.
    pub this_month: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewStats {
    pub total: i64,
    /// `is_approved IS NULL` exactly -- a rejected review is not pending.
    pub pending: i64,
    pub approved: i64,
    pub this_month: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationStats {
    pub total: i64,
    pub pending: i64,
    pub this_month: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactStats {
    pub total: i64,
    pub new: i64,
    pub this_week: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeetingStats {
    pub total: i64,
    pub upcoming: i64,
}
