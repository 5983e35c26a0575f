//! Remote notes API client.
//!
//! # Responsibility
//! - Wrap list/get/create/update/delete HTTP calls behind `NotesApi`.
//! - Normalize transport and HTTP failures into `ApiError`.
//!
//! # Invariants
//! - Every call is a single attempt; retry policy belongs to callers.
//!
//! # See also
//! - crates/notedesk_core/src/config/base_url.rs

pub mod client;
pub mod error;
pub mod payload;
