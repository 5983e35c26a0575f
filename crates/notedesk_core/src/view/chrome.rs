//! Header, panel subtitle and alert projections.

use crate::api::client::NotesApi;
use crate::config::BASE_URL_ENV_VAR;
use crate::page::controller::NotesPage;

pub const HEADER_TITLE: &str = "Notes";
pub const HEADER_SUBTITLE: &str = "Simple, fast, and organized";
pub const NEW_NOTE_ACTION: &str = "New note";
pub const PANEL_TITLE: &str = "Your notes";

/// `"1 note"`, `"3 notes"`.
pub fn panel_subtitle(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} note{suffix}")
}

/// Which panel an alert belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertScope {
    Load,
    Delete,
    Save,
}

/// Error alert scoped to one concern; it clears when that operation retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub scope: AlertScope,
    pub title: &'static str,
    pub body: String,
    pub hint: Option<String>,
}

/// Collects the alerts to render, in page order: load, delete, save.
pub fn page_alerts<A: NotesApi>(page: &NotesPage<A>, base_url: &str) -> Vec<Alert> {
    let mut alerts = Vec::new();
    if let Some(message) = page.load_error() {
        alerts.push(Alert {
            scope: AlertScope::Load,
            title: "Couldn't load notes",
            body: message.to_string(),
            hint: Some(format!(
                "Ensure the backend is reachable at {base_url} (or set {BASE_URL_ENV_VAR})."
            )),
        });
    }
    if let Some(message) = page.delete_error() {
        alerts.push(Alert {
            scope: AlertScope::Delete,
            title: "Couldn't delete",
            body: message.to_string(),
            hint: None,
        });
    }
    if let Some(message) = page.save_error() {
        alerts.push(Alert {
            scope: AlertScope::Save,
            title: "Couldn't save",
            body: message.to_string(),
            hint: None,
        });
    }
    alerts
}
