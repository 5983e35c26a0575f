//! Plain-text rendering of the notes page.
//!
//! Layout follows the page top to bottom: header, notes panel (alerts, then
//! loading/empty/list), editor pane.

use notedesk_core::view::chrome::{
    page_alerts, panel_subtitle, Alert, HEADER_SUBTITLE, HEADER_TITLE, NEW_NOTE_ACTION,
    PANEL_TITLE,
};
use notedesk_core::view::editor::EditorForm;
use notedesk_core::view::list::{note_rows, NoteRow, EMPTY_BODY, EMPTY_TITLE};
use notedesk_core::{DraftField, NotesApi, NotesPage};

pub fn render_page<A: NotesApi>(
    page: &NotesPage<A>,
    form: Option<&EditorForm>,
    base_url: &str,
) -> String {
    let mut out = String::new();
    line(
        &mut out,
        format!("{HEADER_TITLE} - {HEADER_SUBTITLE}  [{NEW_NOTE_ACTION}]"),
    );
    line(&mut out, "");
    line(
        &mut out,
        format!("{PANEL_TITLE} ({})", panel_subtitle(page.notes().len())),
    );

    for alert in page_alerts(page, base_url) {
        render_alert(&mut out, &alert);
    }

    if page.is_loading() {
        line(&mut out, "  Loading…");
    } else {
        let rows = note_rows(page);
        if rows.is_empty() {
            line(&mut out, format!("  {EMPTY_TITLE}"));
            line(&mut out, format!("  {EMPTY_BODY}"));
        }
        for row in &rows {
            render_row(&mut out, row);
        }
    }

    if let Some(form) = form {
        line(&mut out, "");
        render_editor(&mut out, form, page.is_saving());
    }
    out
}

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

fn render_alert(out: &mut String, alert: &Alert) {
    line(out, format!("  ! {}: {}", alert.title, alert.body));
    if let Some(hint) = &alert.hint {
        line(out, format!("    {hint}"));
    }
}

fn render_row(out: &mut String, row: &NoteRow) {
    let marker = if row.is_selected { '>' } else { ' ' };
    line(out, format!("{marker} [{}] {}", row.id, row.title));
    if !row.preview.is_empty() {
        line(out, format!("      {}", row.preview));
    }
    if row.is_deleting {
        line(out, format!("      {}", row.delete_label()));
    }
}

fn render_editor(out: &mut String, form: &EditorForm, is_saving: bool) {
    line(out, format!("== {} ==", form.heading()));
    line(out, format!("Title:   {}", form.title));
    if let Some(message) = form.field_error(DraftField::Title) {
        line(out, format!("         ^ {message}"));
    }
    line(out, "Content:");
    for text in form.content.lines() {
        line(out, format!("  {text}"));
    }
    if let Some(message) = form.field_error(DraftField::Content) {
        line(out, format!("  ^ {message}"));
    }
    line(out, format!("[{}]", form.submit_label(is_saving)));
}
