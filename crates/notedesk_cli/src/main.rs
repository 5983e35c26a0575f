//! Terminal front end for the notes page.
//!
//! # Responsibility
//! - Parse flags, resolve configuration once, and mount the page controller.
//! - Run one page action per invocation and print the rendered page.
//! - Map outcomes to exit codes: 0 ok, 1 request failed, 2 usage or validation.

mod args;
mod render;

use args::{Cli, Command};
use clap::Parser;
use log::info;
use notedesk_core::view::editor::EditorForm;
use notedesk_core::{
    default_log_level, init_logging, ClientConfig, DraftRules, HttpNotesApi, NoteId, NotesApi,
    NotesPage, Outcome,
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.clone().unwrap_or_else(|| {
        if cli.log_dir.is_some() {
            default_log_level().to_string()
        } else {
            "warn".to_string()
        }
    });
    if let Err(err) = init_logging(level.as_str(), cli.log_dir.as_deref()) {
        eprintln!("Error: {err}");
        return ExitCode::from(2);
    }

    let rules = DraftRules {
        require_content: !cli.allow_empty_content,
    };
    let config = match ClientConfig::from_env(cli.base_url.as_deref(), None, rules) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    };
    info!(
        "event=cli_start module=cli status=ok base_url={}",
        config.base_url
    );

    let base_url = config.base_url.to_string();
    let mut page = NotesPage::new(HttpNotesApi::new(config.base_url), config.draft_rules);

    let cancel = page.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let code = run(&mut page, cli.command, &base_url).await;
    page.unmount();
    code
}

async fn run(page: &mut NotesPage<HttpNotesApi>, command: Command, base_url: &str) -> ExitCode {
    match page.mount().await {
        Outcome::Succeeded => {}
        Outcome::Cancelled => return ExitCode::FAILURE,
        _ => {
            print!("{}", render::render_page(page, None, base_url));
            return ExitCode::FAILURE;
        }
    }

    match command {
        Command::List => {
            print!("{}", render::render_page(page, None, base_url));
            ExitCode::SUCCESS
        }
        Command::Show { id } => {
            let Some(id) = resolve_id(page, &id) else {
                eprintln!("Error: note `{id}` not found");
                return ExitCode::FAILURE;
            };
            page.select(id);
            let form = EditorForm::new(page.mode(), page.editor_note(), page.draft_rules());
            print!("{}", render::render_page(page, Some(&form), base_url));
            ExitCode::SUCCESS
        }
        Command::New { title, content } => {
            page.start_create();
            let mut form = EditorForm::new(page.mode(), None, page.draft_rules());
            form.title = title;
            form.content = content;
            submit_form(page, form, base_url).await
        }
        Command::Edit { id, title, content } => {
            let Some(id) = resolve_id(page, &id) else {
                eprintln!("Error: note `{id}` not found");
                return ExitCode::FAILURE;
            };
            page.select(id);
            let mut form = EditorForm::new(page.mode(), page.editor_note(), page.draft_rules());
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(content) = content {
                form.content = content;
            }
            submit_form(page, form, base_url).await
        }
        Command::Delete { id } => {
            let id = resolve_id(page, &id).unwrap_or_else(|| NoteId::Text(id));
            let outcome = page.delete(id).await;
            print!("{}", render::render_page(page, None, base_url));
            outcome_code(&outcome)
        }
    }
}

async fn submit_form(
    page: &mut NotesPage<HttpNotesApi>,
    mut form: EditorForm,
    base_url: &str,
) -> ExitCode {
    let draft = match form.submit() {
        Ok(draft) => draft,
        Err(_) => {
            print!("{}", render::render_page(page, Some(&form), base_url));
            return ExitCode::from(2);
        }
    };

    let outcome = page.submit(&draft).await;
    if outcome == Outcome::Succeeded {
        form = EditorForm::new(page.mode(), page.editor_note(), page.draft_rules());
    }
    print!("{}", render::render_page(page, Some(&form), base_url));
    outcome_code(&outcome)
}

/// Matches a user-typed id against the listed notes by display form.
fn resolve_id<A: NotesApi>(page: &NotesPage<A>, raw: &str) -> Option<NoteId> {
    page.notes()
        .iter()
        .find(|note| note.id.to_string() == raw.trim())
        .map(|note| note.id.clone())
}

fn outcome_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Succeeded => ExitCode::SUCCESS,
        Outcome::Rejected(_) => ExitCode::from(2),
        Outcome::Failed | Outcome::Cancelled => ExitCode::FAILURE,
    }
}
