use async_trait::async_trait;
use notedesk_core::{
    build_http_error, ApiResult, HttpError, Note, NoteDraft, NoteEcho, NoteId, NotesApi,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Call the fake should never settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hang {
    None,
    List,
    Delete,
    Create,
    Update,
}

#[derive(Debug)]
struct FakeState {
    notes: Vec<Note>,
    next_id: i64,
    echo_ids: bool,
    envelope: bool,
    fail_list: Option<HttpError>,
    fail_write: Option<HttpError>,
    hang: Hang,
    frozen_listing: Option<Vec<Note>>,
    calls: Vec<String>,
}

/// In-memory `NotesApi` backed by a shared note list.
#[derive(Debug, Clone)]
pub struct FakeNotesApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeNotesApi {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                notes,
                next_id: 100,
                echo_ids: true,
                envelope: false,
                fail_list: None,
                fail_write: None,
                hang: Hang::None,
                frozen_listing: None,
                calls: Vec::new(),
            })),
        }
    }

    pub fn seeded() -> Self {
        Self::with_notes(vec![
            Note::new(1_i64, "First", "alpha"),
            Note::new(2_i64, "Second", "beta"),
            Note::new(3_i64, "Third", "gamma"),
        ])
    }

    pub fn set_echo_ids(&self, echo: bool) {
        self.state.lock().unwrap().echo_ids = echo;
    }

    pub fn set_envelope(&self, envelope: bool) {
        self.state.lock().unwrap().envelope = envelope;
    }

    pub fn fail_list_with(&self, status: u16, payload: Option<Value>) {
        self.state.lock().unwrap().fail_list = Some(build_http_error(status, payload));
    }

    pub fn fail_writes_with(&self, status: u16, payload: Option<Value>) {
        self.state.lock().unwrap().fail_write = Some(build_http_error(status, payload));
    }

    pub fn clear_failures(&self) {
        let mut state = self.state.lock().unwrap();
        state.fail_list = None;
        state.fail_write = None;
    }

    pub fn hang_on(&self, hang: Hang) {
        self.state.lock().unwrap().hang = hang;
    }

    /// Makes `list` keep returning the current notes, ignoring later writes.
    pub fn freeze_listing(&self) {
        let mut state = self.state.lock().unwrap();
        state.frozen_listing = Some(state.notes.clone());
    }

    pub fn stored(&self) -> Vec<Note> {
        self.state.lock().unwrap().notes.clone()
    }

    /// Drops a note server-side without the client knowing.
    pub fn remove_behind_the_scenes(&self, id: &NoteId) {
        self.state.lock().unwrap().notes.retain(|note| &note.id != id);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: &str) -> (Hang, Option<HttpError>, Option<HttpError>) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.to_string());
        (state.hang, state.fail_list.clone(), state.fail_write.clone())
    }
}

#[async_trait]
impl NotesApi for FakeNotesApi {
    async fn list(&self) -> ApiResult<Option<Value>> {
        let (hang, fail_list, _) = self.record("list");
        if hang == Hang::List {
            std::future::pending::<()>().await;
        }
        if let Some(err) = fail_list {
            return Err(err.into());
        }
        let state = self.state.lock().unwrap();
        let listed = state.frozen_listing.as_ref().unwrap_or(&state.notes);
        let items = serde_json::to_value(listed).unwrap();
        Ok(Some(if state.envelope {
            json!({ "items": items })
        } else {
            items
        }))
    }

    async fn get(&self, id: &NoteId) -> ApiResult<Option<Note>> {
        self.record("get");
        let state = self.state.lock().unwrap();
        Ok(state.notes.iter().find(|note| &note.id == id).cloned())
    }

    async fn create(&self, draft: &NoteDraft) -> ApiResult<NoteEcho> {
        let (hang, _, fail_write) = self.record("create");
        if hang == Hang::Create {
            std::future::pending::<()>().await;
        }
        if let Some(err) = fail_write {
            return Err(err.into());
        }
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let note = Note::new(id, draft.title.clone(), draft.content.clone());
        state.notes.push(note.clone());
        let echo = if state.echo_ids {
            serde_json::to_value(&note).unwrap()
        } else {
            json!({ "ok": true })
        };
        Ok(NoteEcho::new(Some(echo)))
    }

    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> ApiResult<NoteEcho> {
        let (hang, _, fail_write) = self.record("update");
        if hang == Hang::Update {
            std::future::pending::<()>().await;
        }
        if let Some(err) = fail_write {
            return Err(err.into());
        }
        let mut state = self.state.lock().unwrap();
        if let Some(note) = state.notes.iter_mut().find(|note| &note.id == id) {
            note.title = draft.title.clone();
            note.content = draft.content.clone();
        }
        Ok(NoteEcho::new(None))
    }

    async fn delete(&self, id: &NoteId) -> ApiResult<()> {
        let (hang, _, fail_write) = self.record("delete");
        if hang == Hang::Delete {
            std::future::pending::<()>().await;
        }
        if let Some(err) = fail_write {
            return Err(err.into());
        }
        self.state
            .lock()
            .unwrap()
            .notes
            .retain(|note| &note.id != id);
        Ok(())
    }
}
