//! Notes list projection.
//!
//! Pure display transforms; nothing here touches stored note data.

use crate::api::client::NotesApi;
use crate::model::note::{Note, NoteId};
use crate::page::controller::NotesPage;
use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder shown for notes with a blank title.
pub const UNTITLED: &str = "Untitled";
/// Maximum preview length in characters, before the ellipsis.
pub const PREVIEW_CHARS: usize = 120;
pub const EMPTY_TITLE: &str = "No notes yet";
pub const EMPTY_BODY: &str = "Create your first note to get started.";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Title as rendered in the list.
pub fn display_title(note: &Note) -> &str {
    if note.title.is_empty() {
        UNTITLED
    } else {
        note.title.as_str()
    }
}

/// One-line content preview.
///
/// Whitespace runs collapse to a single space, the result is trimmed and cut
/// to `PREVIEW_CHARS` characters with `…` appended when longer.
pub fn format_preview(content: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(content, " ");
    let text = collapsed.trim();
    if text.chars().count() > PREVIEW_CHARS {
        let mut preview = text.chars().take(PREVIEW_CHARS).collect::<String>();
        preview.push('…');
        preview
    } else {
        text.to_string()
    }
}

/// Row view-model for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub is_selected: bool,
    pub is_deleting: bool,
}

impl NoteRow {
    /// Label of the row's delete action.
    pub fn delete_label(&self) -> &'static str {
        if self.is_deleting {
            "Deleting…"
        } else {
            "Delete"
        }
    }
}

/// Builds list rows from page state, in server order.
pub fn note_rows<A: NotesApi>(page: &NotesPage<A>) -> Vec<NoteRow> {
    page.notes()
        .iter()
        .map(|note| NoteRow {
            id: note.id.clone(),
            title: display_title(note).to_string(),
            preview: format_preview(note.content.as_str()),
            is_selected: page.selected_id() == Some(&note.id),
            is_deleting: page.is_deleting(&note.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{display_title, format_preview, PREVIEW_CHARS, UNTITLED};
    use crate::model::note::Note;

    #[test]
    fn blank_title_renders_placeholder_without_touching_note() {
        let note = Note::new(1_i64, "", "body");
        assert_eq!(display_title(&note), UNTITLED);
        assert_eq!(note.title, "");
    }

    #[test]
    fn preview_collapses_whitespace_and_trims() {
        assert_eq!(format_preview("  line one\n\n\tline   two  "), "line one line two");
        assert_eq!(format_preview(""), "");
    }

    #[test]
    fn preview_truncates_long_content_with_ellipsis() {
        let long = "é".repeat(PREVIEW_CHARS + 5);
        let preview = format_preview(&long);
        assert!(preview.ends_with('…'));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 1);

        let exact = "a".repeat(PREVIEW_CHARS);
        assert_eq!(format_preview(&exact), exact);
    }
}
