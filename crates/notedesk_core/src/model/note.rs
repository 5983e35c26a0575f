//! Note domain model.
//!
//! # Responsibility
//! - Define the note record exchanged with the remote notes API.
//! - Define the draft shape submitted by create/update flows.
//! - Own client-side draft validation rules.
//!
//! # Invariants
//! - `NoteId` is server-assigned; the client never generates one.
//! - `NoteId` equality is exact: numeric `1` and text `"1"` are different ids.
//! - A valid draft always has a non-empty trimmed title.
//!
//! # See also
//! - crates/notedesk_core/src/api/payload.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque note identifier as sent by the server.
///
/// The backend may use either numeric or string ids; both are carried as-is.
/// Numbers keep their JSON form, so unsigned and fractional ids survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Number(Number),
    Text(String),
}

impl NoteId {
    /// Reads an id from a JSON value, accepting numbers and strings only.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => Some(Self::Number(number.clone())),
            Value::String(text) => Some(Self::Text(text.clone())),
            _ => None,
        }
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Persisted note as listed by the server.
///
/// Missing, null or non-string `title`/`content` values are read as empty
/// text. Extra server fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
}

impl Note {
    pub fn new(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns the editable `{title, content}` pair of this note.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.clone(), self.content.clone())
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        _ => String::new(),
    })
}

/// User-edited note body submitted to create/update endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from both fields.
    pub fn trimmed(&self) -> Self {
        Self::new(self.title.trim(), self.content.trim())
    }
}

/// Editor mode: decides whether submission creates or updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Create,
    Edit,
}

/// Field that failed client-side validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Content,
}

impl DraftField {
    /// Inline message rendered next to the offending field.
    pub fn required_message(self) -> &'static str {
        match self {
            Self::Title => "Title is required.",
            Self::Content => "Content is required.",
        }
    }
}

/// Client-side validation failure. Never sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftValidationError {
    pub missing: Vec<DraftField>,
}

impl DraftValidationError {
    pub fn is_missing(&self, field: DraftField) -> bool {
        self.missing.contains(&field)
    }
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .missing
            .iter()
            .map(|field| field.required_message())
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join(" "))
    }
}

impl Error for DraftValidationError {}

/// Draft validation rules.
///
/// Title is always required. Whether content is required is configurable
/// because backends differ on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftRules {
    pub require_content: bool,
}

impl Default for DraftRules {
    fn default() -> Self {
        Self {
            require_content: true,
        }
    }
}

impl DraftRules {
    /// Validates a draft and returns its trimmed form.
    ///
    /// # Errors
    /// - Returns every missing field, in form order.
    pub fn validate(&self, draft: &NoteDraft) -> Result<NoteDraft, DraftValidationError> {
        let trimmed = draft.trimmed();
        let mut missing = Vec::new();
        if trimmed.title.is_empty() {
            missing.push(DraftField::Title);
        }
        if self.require_content && trimmed.content.is_empty() {
            missing.push(DraftField::Content);
        }

        if missing.is_empty() {
            Ok(trimmed)
        } else {
            Err(DraftValidationError { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftField, DraftRules, Note, NoteDraft, NoteId};
    use serde_json::json;

    #[test]
    fn note_id_keeps_numeric_and_text_ids_distinct() {
        let numeric: NoteId = serde_json::from_value(json!(1)).unwrap();
        let text: NoteId = serde_json::from_value(json!("1")).unwrap();
        assert_eq!(numeric, NoteId::from(1_i64));
        assert_eq!(text, NoteId::Text("1".to_string()));
        assert_ne!(numeric, text);
        assert_eq!(numeric.to_string(), text.to_string());
    }

    #[test]
    fn note_id_accepts_unsigned_and_fractional_numbers() {
        let big: NoteId = serde_json::from_value(json!(u64::MAX)).unwrap();
        assert_eq!(big, NoteId::from(u64::MAX));
        assert_eq!(big.to_string(), "18446744073709551615");

        let fractional = NoteId::from_json(&json!(1.5)).unwrap();
        assert_eq!(fractional.to_string(), "1.5");

        let note: Note = serde_json::from_value(json!({"id": 7.25, "title": "t"})).unwrap();
        assert_eq!(serde_json::to_value(&note.id).unwrap(), json!(7.25));
    }

    #[test]
    fn note_reads_missing_or_null_fields_as_empty_text() {
        let note: Note =
            serde_json::from_value(json!({"id": "a", "title": null, "extra": true})).unwrap();
        assert_eq!(note.title, "");
        assert_eq!(note.content, "");
    }

    #[test]
    fn rules_always_require_title() {
        let rules = DraftRules {
            require_content: false,
        };
        let error = rules
            .validate(&NoteDraft::new("   ", ""))
            .expect_err("blank title must be rejected");
        assert_eq!(error.missing, vec![DraftField::Title]);
    }

    #[test]
    fn rules_require_content_when_configured() {
        let error = DraftRules::default()
            .validate(&NoteDraft::new("", " \n"))
            .expect_err("blank draft must be rejected");
        assert!(error.is_missing(DraftField::Title));
        assert!(error.is_missing(DraftField::Content));
        assert_eq!(error.to_string(), "Title is required. Content is required.");
    }

    #[test]
    fn valid_draft_is_returned_trimmed() {
        let draft = DraftRules::default()
            .validate(&NoteDraft::new("  Groceries ", "\teggs\n"))
            .expect("draft should be valid");
        assert_eq!(draft, NoteDraft::new("Groceries", "eggs"));
    }
}
