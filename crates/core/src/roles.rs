/// Role name for back-office administrators.
pub const ROLE_ADMIN: &str = "admin";

/// Role name for regular authenticated visitors.
pub const ROLE_USER: &str = "user";
