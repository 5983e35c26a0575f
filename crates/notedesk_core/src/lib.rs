//! Core logic for the notedesk notes client.
//! Owns the API client, configuration and page-state reconciliation; front
//! ends only render what the page controller exposes.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod page;
pub mod view;

pub use api::client::{list_notes, HttpNotesApi, NotesApi};
pub use api::error::{ApiError, ApiResult, HttpError};
pub use api::payload::{build_http_error, normalize_notes_list, parse_body, NoteEcho};
pub use config::base_url::{resolve_base_url, DEFAULT_BASE_URL};
pub use config::{ClientConfig, ConfigError, BASE_URL_ENV_VAR};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::note::{
    DraftField, DraftRules, DraftValidationError, EditorMode, Note, NoteDraft, NoteId,
};
pub use page::controller::{LoadState, NotesPage, Outcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
