//! Shared domain types for the forgeline workspace.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the API, and any future CLI tooling alike.

pub mod error;
pub mod media;
pub mod pagination;
pub mod roles;
pub mod status;
pub mod types;
