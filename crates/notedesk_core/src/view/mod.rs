//! Presentational projections of page state.
//!
//! # Responsibility
//! - Turn controller state into list rows, editor form state, header and
//!   alert view-models.
//! - Keep display-only transforms (placeholder titles, previews) out of the
//!   stored data.

pub mod chrome;
pub mod editor;
pub mod list;
