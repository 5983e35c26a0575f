//! Page-level state and orchestration.
//!
//! # Responsibility
//! - Drive list/create/update/delete flows through `NotesApi`.
//! - Keep UI layers decoupled from transport details.

pub mod controller;
