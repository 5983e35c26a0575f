//! Response payload helpers for the notes API.
//!
//! # Responsibility
//! - Parse raw response bodies into optional JSON payloads.
//! - Build normalized HTTP errors from status + payload.
//! - Normalize list responses (bare array or `{items: [...]}` envelope).
//!
//! # Invariants
//! - An empty body is `None`, never an error.
//! - A non-JSON body is kept as a JSON string with the raw text.
//! - List normalization never fails; unknown shapes yield an empty list.

use crate::api::error::HttpError;
use crate::model::note::{Note, NoteId};
use log::warn;
use serde_json::Value;

const ERROR_DETAIL_FIELDS: [&str; 3] = ["detail", "message", "error"];

/// Parses a response body as JSON.
///
/// Returns `None` for an empty body. Invalid JSON is preserved as
/// `Value::String` so callers can still surface it.
pub fn parse_body(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(text.to_string())),
    }
}

/// Builds the uniform HTTP error for a non-success response.
///
/// Message priority: `detail`, `message`, `error` fields of an object payload
/// (first non-empty string wins), else `Request failed with status <code>`.
pub fn build_http_error(status: u16, payload: Option<Value>) -> HttpError {
    let detail = payload
        .as_ref()
        .and_then(Value::as_object)
        .and_then(|object| {
            ERROR_DETAIL_FIELDS
                .iter()
                .filter_map(|field| object.get(*field).and_then(Value::as_str))
                .find(|text| !text.is_empty())
                .map(str::to_string)
        });

    HttpError {
        message: detail.unwrap_or_else(|| format!("Request failed with status {status}")),
        status,
        payload,
    }
}

/// Normalizes a list payload into notes.
///
/// - bare array -> its elements
/// - object with an `items` array -> the inner elements
/// - anything else (null, scalar, object without `items`) -> empty
///
/// Elements that do not decode as a note are skipped.
pub fn normalize_notes_list(payload: Option<&Value>) -> Vec<Note> {
    let items: &[Value] = match payload {
        Some(Value::Array(items)) => items.as_slice(),
        Some(Value::Object(object)) => match object.get("items") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<Note>(item.clone()) {
            Ok(note) => Some(note),
            Err(err) => {
                warn!("event=notes_normalize module=api status=skipped reason={err}");
                None
            }
        })
        .collect()
}

/// Payload echoed by create/update calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteEcho {
    pub payload: Option<Value>,
}

impl NoteEcho {
    pub fn new(payload: Option<Value>) -> Self {
        Self { payload }
    }

    /// Returns the echoed note id, when the payload is an object carrying one.
    pub fn note_id(&self) -> Option<NoteId> {
        self.payload
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|object| object.get("id"))
            .and_then(NoteId::from_json)
    }

    /// Returns the echoed note, when the payload decodes as one.
    pub fn note(&self) -> Option<Note> {
        self.payload
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}
