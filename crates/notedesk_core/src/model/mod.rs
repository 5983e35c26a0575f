//! Client-side domain model for notes.
//!
//! # Responsibility
//! - Define the note, draft and editor-mode types shared by the API client,
//!   page controller and views.
//!
//! # Invariants
//! - Note identity is owned by the server; the client only echoes ids back.
//!
//! # See also
//! - crates/notedesk_core/src/page/controller.rs

pub mod note;
