//! Notes page controller.
//!
//! # Responsibility
//! - Own all mutable page state: notes, selection, editor mode, per-concern
//!   progress flags and error messages.
//! - Reconcile that state with asynchronous API results.
//!
//! # Invariants
//! - Load, save and delete are tracked independently; each error is cleared
//!   when its operation starts again.
//! - A refresh that drops the selected note clears the selection and returns
//!   the editor to `Create`.
//! - Progress flags are cleared when their operation settles, unless the page
//!   was unmounted while the request was in flight.
//! - Nothing is committed after `unmount()`; in-flight requests are dropped.
//!
//! # See also
//! - crates/notedesk_core/src/api/client.rs

use crate::api::client::NotesApi;
use crate::api::error::ApiResult;
use crate::api::payload::normalize_notes_list;
use crate::model::note::{DraftRules, DraftValidationError, EditorMode, Note, NoteDraft, NoteId};
use log::{info, warn};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Derived load status of the notes list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// How a controller operation settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// The API call failed; the message is stored on the matching concern.
    Failed,
    /// The page was unmounted before the call settled; nothing was committed.
    Cancelled,
    /// Client-side validation blocked submission; the server was not called.
    Rejected(DraftValidationError),
}

/// Page-level state machine over a `NotesApi`.
pub struct NotesPage<A: NotesApi> {
    api: A,
    rules: DraftRules,
    lifetime: CancellationToken,

    notes: Vec<Note>,
    selected_id: Option<NoteId>,
    mode: EditorMode,

    is_loading: bool,
    load_error: Option<String>,

    is_saving: bool,
    save_error: Option<String>,

    deleting_id: Option<NoteId>,
    delete_error: Option<String>,
}

impl<A: NotesApi> NotesPage<A> {
    /// Creates a page in the loading state; call `mount()` to fetch notes.
    pub fn new(api: A, rules: DraftRules) -> Self {
        Self {
            api,
            rules,
            lifetime: CancellationToken::new(),
            notes: Vec::new(),
            selected_id: None,
            mode: EditorMode::Create,
            is_loading: true,
            load_error: None,
            is_saving: false,
            save_error: None,
            deleting_id: None,
            delete_error: None,
        }
    }

    /// Initial load, keeping any selection.
    pub async fn mount(&mut self) -> Outcome {
        self.refresh(true).await
    }

    /// Cancels every in-flight and future request of this page.
    pub fn unmount(&self) {
        if !self.lifetime.is_cancelled() {
            info!("event=page_unmount module=page status=ok");
        }
        self.lifetime.cancel();
    }

    /// Handle that unmounts the page when cancelled.
    ///
    /// Lets a host cancel from outside while an operation holds `&mut self`.
    pub fn cancel_handle(&self) -> CancellationToken {
        self.lifetime.clone()
    }

    pub fn is_mounted(&self) -> bool {
        !self.lifetime.is_cancelled()
    }

    /// Reloads the notes list.
    ///
    /// With `keep_selection == false` the selection is always cleared;
    /// otherwise it is cleared only when the selected note disappeared.
    /// A failed load empties the list.
    pub async fn refresh(&mut self, keep_selection: bool) -> Outcome {
        let token = self.lifetime.child_token();
        self.load_error = None;
        self.is_loading = true;

        let Some(result) = settle(&token, self.api.list()).await else {
            info!("event=notes_refresh module=page status=cancelled");
            return Outcome::Cancelled;
        };

        let outcome = match result {
            Ok(payload) => {
                self.notes = normalize_notes_list(payload.as_ref());
                let selection_dropped = self
                    .selected_id
                    .as_ref()
                    .is_some_and(|id| !self.notes.iter().any(|note| &note.id == id));
                if !keep_selection || selection_dropped {
                    self.clear_selection();
                }
                info!(
                    "event=notes_refresh module=page status=ok count={} keep_selection={}",
                    self.notes.len(),
                    keep_selection
                );
                Outcome::Succeeded
            }
            Err(err) => {
                warn!(
                    "event=notes_refresh module=page status=error code={}",
                    status_label(err.status())
                );
                self.load_error = Some(err.to_string());
                self.notes.clear();
                self.clear_selection();
                Outcome::Failed
            }
        };

        self.is_loading = false;
        outcome
    }

    /// Switches the editor to a blank new note.
    pub fn start_create(&mut self) {
        self.mode = EditorMode::Create;
        self.selected_id = None;
        self.save_error = None;
    }

    /// Selects a note for editing.
    pub fn select(&mut self, id: NoteId) {
        self.selected_id = Some(id);
        self.mode = EditorMode::Edit;
        self.save_error = None;
        self.delete_error = None;
    }

    /// Deletes one note, then refreshes the list.
    ///
    /// Deleting the selected note returns the editor to `Create`; deleting
    /// any other note keeps the selection.
    pub async fn delete(&mut self, id: NoteId) -> Outcome {
        let token = self.lifetime.child_token();
        self.delete_error = None;
        self.deleting_id = Some(id.clone());

        let Some(result) = settle(&token, self.api.delete(&id)).await else {
            info!("event=note_delete module=page status=cancelled id={id}");
            return Outcome::Cancelled;
        };

        let outcome = match result {
            Ok(()) => {
                info!("event=note_delete module=page status=ok id={id}");
                let was_selected = self.selected_id.as_ref() == Some(&id);
                if self.refresh(!was_selected).await == Outcome::Cancelled {
                    return Outcome::Cancelled;
                }
                if was_selected {
                    self.clear_selection();
                }
                Outcome::Succeeded
            }
            Err(err) => {
                warn!(
                    "event=note_delete module=page status=error id={id} code={}",
                    status_label(err.status())
                );
                self.delete_error = Some(err.to_string());
                Outcome::Failed
            }
        };

        self.deleting_id = None;
        outcome
    }

    /// Validates and saves the editor draft.
    ///
    /// In `Edit` mode with a selection this updates the selected note in
    /// place. Otherwise it creates a note, refreshes the list and selects the
    /// created note when the server echoed its id and the refreshed list
    /// contains it.
    pub async fn submit(&mut self, draft: &NoteDraft) -> Outcome {
        let draft = match self.rules.validate(draft) {
            Ok(draft) => draft,
            Err(err) => {
                info!(
                    "event=note_submit module=page status=rejected missing={}",
                    err.missing.len()
                );
                return Outcome::Rejected(err);
            }
        };

        let token = self.lifetime.child_token();
        self.is_saving = true;
        self.save_error = None;

        let outcome = match (self.mode, self.selected_id.clone()) {
            (EditorMode::Edit, Some(id)) => {
                let Some(result) = settle(&token, self.api.update(&id, &draft)).await else {
                    info!("event=note_update module=page status=cancelled id={id}");
                    return Outcome::Cancelled;
                };
                match result {
                    Ok(echo) => {
                        let updated = echo
                            .note()
                            .filter(|note| note.id == id)
                            .unwrap_or_else(|| Note::new(id.clone(), draft.title, draft.content));
                        if let Some(slot) = self.notes.iter_mut().find(|note| note.id == id) {
                            *slot = updated;
                        }
                        info!("event=note_update module=page status=ok id={id}");
                        Outcome::Succeeded
                    }
                    Err(err) => {
                        warn!(
                            "event=note_update module=page status=error id={id} code={}",
                            status_label(err.status())
                        );
                        self.save_error = Some(err.to_string());
                        Outcome::Failed
                    }
                }
            }
            _ => {
                let Some(result) = settle(&token, self.api.create(&draft)).await else {
                    info!("event=note_create module=page status=cancelled");
                    return Outcome::Cancelled;
                };
                match result {
                    Ok(echo) => {
                        let created_id = echo.note_id();
                        let refreshed = self.refresh(true).await;
                        if refreshed == Outcome::Cancelled {
                            return Outcome::Cancelled;
                        }
                        let listed_id = created_id.filter(|id| {
                            refreshed == Outcome::Succeeded
                                && self.notes.iter().any(|note| &note.id == id)
                        });
                        match listed_id {
                            Some(id) => {
                                info!("event=note_create module=page status=ok id={id}");
                                self.selected_id = Some(id);
                                self.mode = EditorMode::Edit;
                            }
                            None => {
                                info!("event=note_create module=page status=ok id=unlisted");
                                self.clear_selection();
                            }
                        }
                        Outcome::Succeeded
                    }
                    Err(err) => {
                        warn!(
                            "event=note_create module=page status=error code={}",
                            status_label(err.status())
                        );
                        self.save_error = Some(err.to_string());
                        Outcome::Failed
                    }
                }
            }
        };

        self.is_saving = false;
        outcome
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected_id(&self) -> Option<&NoteId> {
        self.selected_id.as_ref()
    }

    /// Selected note, when it is present in the current list.
    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_id.as_ref()?;
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Note that seeds the editor form: the selection in `Edit` mode only.
    pub fn editor_note(&self) -> Option<&Note> {
        match self.mode {
            EditorMode::Edit => self.selected_note(),
            EditorMode::Create => None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn load_state(&self) -> LoadState {
        if self.is_loading {
            LoadState::Loading
        } else if let Some(message) = &self.load_error {
            LoadState::Failed(message.clone())
        } else {
            LoadState::Loaded
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    pub fn deleting_id(&self) -> Option<&NoteId> {
        self.deleting_id.as_ref()
    }

    pub fn is_deleting(&self, id: &NoteId) -> bool {
        self.deleting_id.as_ref() == Some(id)
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }

    pub fn draft_rules(&self) -> DraftRules {
        self.rules
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn clear_selection(&mut self) {
        self.selected_id = None;
        self.mode = EditorMode::Create;
    }
}

/// Awaits `request` unless `token` fires first.
///
/// Returns `None` when cancelled, including a cancellation that lands in the
/// same poll as the response.
async fn settle<T, F>(token: &CancellationToken, request: F) -> Option<ApiResult<T>>
where
    F: Future<Output = ApiResult<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => None,
        result = request => (!token.is_cancelled()).then_some(result),
    }
}

fn status_label(status: Option<u16>) -> String {
    status.map_or_else(|| "none".to_string(), |code| code.to_string())
}
