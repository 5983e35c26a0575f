//! Editor form state.
//!
//! # Responsibility
//! - Hold the title/content inputs for both creating and editing.
//! - Report inline field errors once the form has been touched.
//! - Produce a trimmed draft on submit, or the field errors blocking it.
//!
//! # Invariants
//! - Field errors are hidden until the form is touched (blur or submit).
//! - The form is re-seeded whenever the seeding note changes.

use crate::model::note::{DraftField, DraftRules, DraftValidationError, EditorMode, Note, NoteDraft};

/// Controlled editor inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    mode: EditorMode,
    rules: DraftRules,
    pub title: String,
    pub content: String,
    touched: bool,
}

impl EditorForm {
    /// Seeds the form from the note being edited, or blank for `Create`.
    pub fn new(mode: EditorMode, note: Option<&Note>, rules: DraftRules) -> Self {
        let seed = match mode {
            EditorMode::Edit => note.map(Note::to_draft).unwrap_or_default(),
            EditorMode::Create => NoteDraft::default(),
        };
        Self {
            mode,
            rules,
            title: seed.title,
            content: seed.content,
            touched: false,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            EditorMode::Edit => "Edit note",
            EditorMode::Create => "New note",
        }
    }

    /// Submit button label; `is_saving` comes from the page controller.
    pub fn submit_label(&self, is_saving: bool) -> &'static str {
        match (is_saving, self.mode) {
            (true, _) => "Saving…",
            (false, EditorMode::Edit) => "Save changes",
            (false, EditorMode::Create) => "Create note",
        }
    }

    /// Marks the form as touched, as a field blur does.
    pub fn touch(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_valid(&self) -> bool {
        self.rules.validate(&self.draft()).is_ok()
    }

    /// Inline error for one field; `None` until touched.
    pub fn field_error(&self, field: DraftField) -> Option<&'static str> {
        if !self.touched {
            return None;
        }
        match self.rules.validate(&self.draft()) {
            Err(err) if err.is_missing(field) => Some(field.required_message()),
            _ => None,
        }
    }

    /// Marks the form touched and returns the trimmed draft when valid.
    ///
    /// # Errors
    /// - Returns the missing fields; the caller must not contact the server.
    pub fn submit(&mut self) -> Result<NoteDraft, DraftValidationError> {
        self.touched = true;
        self.rules.validate(&self.draft())
    }

    fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.clone(), self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::EditorForm;
    use crate::model::note::{DraftField, DraftRules, EditorMode, Note, NoteDraft};

    #[test]
    fn edit_mode_seeds_from_note_and_create_mode_starts_blank() {
        let note = Note::new("n1", "Title", "Body");
        let edit = EditorForm::new(EditorMode::Edit, Some(&note), DraftRules::default());
        assert_eq!(edit.title, "Title");
        assert_eq!(edit.content, "Body");
        assert_eq!(edit.heading(), "Edit note");
        assert_eq!(edit.submit_label(false), "Save changes");

        let create = EditorForm::new(EditorMode::Create, Some(&note), DraftRules::default());
        assert_eq!(create.title, "");
        assert_eq!(create.heading(), "New note");
        assert_eq!(create.submit_label(true), "Saving…");
    }

    #[test]
    fn field_errors_appear_only_after_touch() {
        let mut form = EditorForm::new(EditorMode::Create, None, DraftRules::default());
        assert_eq!(form.field_error(DraftField::Title), None);
        assert!(!form.is_valid());

        form.touch();
        assert_eq!(form.field_error(DraftField::Title), Some("Title is required."));
        assert_eq!(
            form.field_error(DraftField::Content),
            Some("Content is required.")
        );
    }

    #[test]
    fn optional_content_rule_accepts_title_only_draft() {
        let rules = DraftRules {
            require_content: false,
        };
        let mut form = EditorForm::new(EditorMode::Create, None, rules);
        form.title = "  Just a title ".to_string();

        let draft = form.submit().expect("title-only draft should be valid");
        assert_eq!(draft, NoteDraft::new("Just a title", ""));
        assert_eq!(form.field_error(DraftField::Content), None);
    }

    #[test]
    fn submit_marks_touched_and_reports_missing_fields() {
        let mut form = EditorForm::new(EditorMode::Create, None, DraftRules::default());
        form.title = "Title".to_string();
        let err = form.submit().expect_err("missing content must block submit");
        assert!(form.is_touched());
        assert!(err.is_missing(DraftField::Content));
        assert!(!err.is_missing(DraftField::Title));
    }
}
