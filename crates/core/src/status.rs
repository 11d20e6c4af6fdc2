//! Closed string-backed enums for entity statuses and categories.
//!
//! The database stores these as TEXT; parsing happens at ingress so unknown
//! values are rejected before they reach a query.

use crate::error::CoreError;

/// Category of a fabrication project or gallery item.
///
/// This is a closed set; free-form categories are rejected at ingress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Residential,
    Commercial,
    Custom,
    Industrial,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Residential,
        Category::Commercial,
        Category::Custom,
        Category::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Commercial => "commercial",
            Category::Custom => "custom",
            Category::Industrial => "industrial",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "residential" => Ok(Category::Residential),
            "commercial" => Ok(Category::Commercial),
            "custom" => Ok(Category::Custom),
            "industrial" => Ok(Category::Industrial),
            other => Err(CoreError::Validation(format!(
                "Unknown category: {other}. Must be one of residential, commercial, custom, industrial"
            ))),
        }
    }
}

/// Publication status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Draft,
    Published,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "draft" => Ok(ProjectStatus::Draft),
            "published" => Ok(ProjectStatus::Published),
            "archived" => Ok(ProjectStatus::Archived),
            other => Err(CoreError::Validation(format!(
                "Unknown project status: {other}. Must be one of draft, published, archived"
            ))),
        }
    }
}

/// Status of a meeting registration or project consultation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Approved => "approved",
            RegistrationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "pending" => Ok(RegistrationStatus::Pending),
            "approved" => Ok(RegistrationStatus::Approved),
            "rejected" => Ok(RegistrationStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Unknown registration status: {other}. Must be one of pending, approved, rejected"
            ))),
        }
    }
}

/// Mailbox state of a contact message.
///
/// Transitions are unrestricted and repeatable: setting an already-archived
/// message to `archived` again is a no-op success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "new" => Ok(ContactStatus::New),
            "read" => Ok(ContactStatus::Read),
            "replied" => Ok(ContactStatus::Replied),
            "archived" => Ok(ContactStatus::Archived),
            other => Err(CoreError::Validation(format!(
                "Unknown contact status: {other}. Must be one of new, read, replied, archived"
            ))),
        }
    }
}

/// Moderation state of a review, derived from the stored nullable flag.
///
/// Reviews persist approval as `BOOLEAN NULL`: `NULL` is pending, `true` is
/// approved, `false` is rejected. The nullable flag is the storage format;
/// this enum is the edge representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Derive the moderation state from the stored flag.
    pub fn from_flag(is_approved: Option<bool>) -> Self {
        match is_approved {
            None => ApprovalStatus::Pending,
            Some(true) => ApprovalStatus::Approved,
            Some(false) => ApprovalStatus::Rejected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.as_str()).unwrap(), *cat);
        }
    }

    #[test]
    fn category_rejects_unknown() {
        assert!(Category::parse("marine").is_err());
        assert!(Category::parse("").is_err());
        assert!(Category::parse("Residential").is_err());
    }

    #[test]
    fn approval_from_flag_maps_all_three_states() {
        assert_eq!(ApprovalStatus::from_flag(None), ApprovalStatus::Pending);
        assert_eq!(
            ApprovalStatus::from_flag(Some(true)),
            ApprovalStatus::Approved
        );
        assert_eq!(
            ApprovalStatus::from_flag(Some(false)),
            ApprovalStatus::Rejected
        );
    }

    #[test]
    fn contact_status_parses_all_states() {
        for s in ["new", "read", "replied", "archived"] {
            assert_eq!(ContactStatus::parse(s).unwrap().as_str(), s);
        }
        assert!(ContactStatus::parse("deleted").is_err());
    }

    #[test]
    fn registration_status_rejects_unknown() {
        assert!(RegistrationStatus::parse("waitlisted").is_err());
    }
}
