//! Safe access layer between repositories and the database driver.
//!
//! Two jobs: malformed identifiers fail fast before any query is issued, and
//! driver errors are classified into a small, stable taxonomy so callers
//! never see a raw provider error shape.

use uuid::Uuid;

/// The closed set of tables this service touches.
///
/// Repositories name tables through this enum so a typo is a compile error,
/// not a runtime `Column` failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    UserSessions,
    Profiles,
    Projects,
    Gallery,
    Reviews,
    Meetings,
    MeetingRegistrations,
    ContactMessages,
    Notifications,
}

impl Table {
    pub const ALL: &'static [Table] = &[
        Table::Users,
        Table::UserSessions,
        Table::Profiles,
        Table::Projects,
        Table::Gallery,
        Table::Reviews,
        Table::Meetings,
        Table::MeetingRegistrations,
        Table::ContactMessages,
        Table::Notifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::UserSessions => "user_sessions",
            Table::Profiles => "profiles",
            Table::Projects => "projects",
            Table::Gallery => "gallery",
            Table::Reviews => "reviews",
            Table::Meetings => "meetings",
            Table::MeetingRegistrations => "meeting_registrations",
            Table::ContactMessages => "contact_messages",
            Table::Notifications => "notifications",
        }
    }
}

/// Classified store failure. Every database error surfaces as exactly one of
/// these; nothing is silently swallowed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A field with an identifier-shaped name held a malformed value.
    /// Raised before any query is issued.
    #[error("Invalid identifier in field '{field}'")]
    Validation { field: String },

    /// A by-id lookup matched zero rows.
    #[error("No matching row")]
    NotFound,

    /// The query referenced a column or table the live schema does not have.
    #[error("Schema mismatch: {0}")]
    Column(String),

    /// A row decoded into an unexpected shape.
    #[error("Row format mismatch: {0}")]
    Format(String),

    /// Network or connection-level failure talking to the database.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Anything not classified above. Always logged with context at the
    /// point of classification.
    #[error("Unclassified store error: {0}")]
    Unknown(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// PostgreSQL error code for "undefined column".
const PG_UNDEFINED_COLUMN: &str = "42703";
/// PostgreSQL error code for "undefined table".
const PG_UNDEFINED_TABLE: &str = "42P01";

/// Classify a driver error into a [`StoreError`].
///
/// - `RowNotFound` maps to [`StoreError::NotFound`].
/// - Undefined column/table codes map to [`StoreError::Column`].
/// - Decode failures map to [`StoreError::Format`].
/// - Connection/IO/TLS/pool failures map to [`StoreError::Transport`].
/// - Everything else maps to [`StoreError::Unknown`] and is logged.
pub fn classify(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned());
            match code.as_deref() {
                Some(PG_UNDEFINED_COLUMN) | Some(PG_UNDEFINED_TABLE) => {
                    StoreError::Column(db_err.message().to_string())
                }
                _ => {
                    tracing::error!(error = %db_err, code = ?code, "Unclassified database error");
                    StoreError::Unknown(db_err.message().to_string())
                }
            }
        }
        sqlx::Error::ColumnNotFound(name) => StoreError::Column(name),
        sqlx::Error::ColumnDecode { index, source } => {
            StoreError::Format(format!("column {index}: {source}"))
        }
        sqlx::Error::Decode(source) => StoreError::Format(source.to_string()),
        sqlx::Error::TypeNotFound { type_name } => StoreError::Format(type_name),
        sqlx::Error::Io(e) => StoreError::Transport(e.to_string()),
        sqlx::Error::Tls(e) => StoreError::Transport(e.to_string()),
        sqlx::Error::Protocol(msg) => StoreError::Transport(msg),
        sqlx::Error::PoolTimedOut => StoreError::Transport("connection pool timed out".into()),
        sqlx::Error::PoolClosed => StoreError::Transport("connection pool closed".into()),
        other => {
            tracing::error!(error = %other, "Unclassified store error");
            StoreError::Unknown(other.to_string())
        }
    }
}

/// Build a case-insensitive substring pattern for `ILIKE`, escaping the
/// wildcard characters so user input is matched literally.
pub fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Validate every identifier-shaped field of a payload before it is sent.
///
/// Any key whose name contains `id` must hold a well-formed UUID string (or
/// null). Fails with [`StoreError::Validation`] naming the offending field,
/// without touching the database.
pub fn guard_id_fields(payload: &serde_json::Value) -> StoreResult<()> {
    let serde_json::Value::Object(map) = payload else {
        return Ok(());
    };

    for (key, value) in map {
        if !key.to_ascii_lowercase().contains("id") {
            continue;
        }
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) if Uuid::parse_str(s).is_ok() => {}
            _ => {
                return Err(StoreError::Validation { field: key.clone() });
            }
        }
    }
    Ok(())
}
