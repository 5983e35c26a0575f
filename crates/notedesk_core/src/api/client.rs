//! Notes API contract and HTTP implementation.
//!
//! # Responsibility
//! - Define the `NotesApi` seam used by the page controller.
//! - Issue exactly one HTTP request per call against the configured base URL.
//!
//! # Invariants
//! - No retries and no client-side timeout.
//! - Non-success responses become `ApiError::Http`; missing responses become
//!   `ApiError::Transport` carrying the client error unchanged.
//! - Note ids are percent-encoded as one path segment.

use crate::api::error::{ApiError, ApiResult};
use crate::api::payload::{build_http_error, normalize_notes_list, parse_body, NoteEcho};
use crate::model::note::{Note, NoteDraft, NoteId};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

const NOTES_PATH_SEGMENT: &str = "notes";

/// CRUD contract consumed by the page controller.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// `GET /notes`. Returns the raw payload; see `normalize_notes_list`.
    async fn list(&self) -> ApiResult<Option<Value>>;
    /// `GET /notes/{id}`.
    async fn get(&self, id: &NoteId) -> ApiResult<Option<Note>>;
    /// `POST /notes`.
    async fn create(&self, draft: &NoteDraft) -> ApiResult<NoteEcho>;
    /// `PUT /notes/{id}`.
    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> ApiResult<NoteEcho>;
    /// `DELETE /notes/{id}`.
    async fn delete(&self, id: &NoteId) -> ApiResult<()>;
}

/// `reqwest`-backed notes API client.
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    client: Client,
    base_url: Url,
}

impl HttpNotesApi {
    /// Creates a client bound to an already resolved base URL.
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `<base>/notes[/<id>]`, appending to any base path.
    fn notes_url(&self, id: Option<&NoteId>) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ApiError::InvalidUrl(format!("`{}` cannot be a base url", self.base_url))
            })?;
            segments.pop_if_empty().push(NOTES_PATH_SEGMENT);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    async fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<&NoteDraft>,
    ) -> ApiResult<Option<Value>> {
        debug!("event=api_request module=api method={method} path={}", url.path());

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");
        if let Some(draft) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(draft);
        }

        let response = builder.send().await.map_err(|err| {
            warn!(
                "event=api_request module=api status=transport_error method={method} path={}",
                url.path()
            );
            ApiError::Transport(err)
        })?;

        let status = response.status();
        let text = response.text().await?;
        let payload = parse_body(text.as_str());

        if !status.is_success() {
            warn!(
                "event=api_request module=api status=http_error method={method} path={} code={}",
                url.path(),
                status.as_u16()
            );
            return Err(build_http_error(status.as_u16(), payload).into());
        }

        debug!(
            "event=api_request module=api status=ok method={method} path={} code={}",
            url.path(),
            status.as_u16()
        );
        Ok(payload)
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list(&self) -> ApiResult<Option<Value>> {
        let url = self.notes_url(None)?;
        self.request(Method::GET, url, None).await
    }

    async fn get(&self, id: &NoteId) -> ApiResult<Option<Note>> {
        let url = self.notes_url(Some(id))?;
        let payload = self.request(Method::GET, url, None).await?;
        Ok(payload.and_then(|value| serde_json::from_value(value).ok()))
    }

    async fn create(&self, draft: &NoteDraft) -> ApiResult<NoteEcho> {
        let url = self.notes_url(None)?;
        let payload = self.request(Method::POST, url, Some(draft)).await?;
        Ok(NoteEcho::new(payload))
    }

    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> ApiResult<NoteEcho> {
        let url = self.notes_url(Some(id))?;
        let payload = self.request(Method::PUT, url, Some(draft)).await?;
        Ok(NoteEcho::new(payload))
    }

    async fn delete(&self, id: &NoteId) -> ApiResult<()> {
        let url = self.notes_url(Some(id))?;
        self.request(Method::DELETE, url, None).await?;
        Ok(())
    }
}

/// Convenience wrapper returning normalized notes from any API.
pub async fn list_notes<A: NotesApi + ?Sized>(api: &A) -> ApiResult<Vec<Note>> {
    let payload = api.list().await?;
    Ok(normalize_notes_list(payload.as_ref()))
}
