//! Uniform error type for notes API calls.
//!
//! # Invariants
//! - HTTP failures always carry the numeric status and a non-empty message.
//! - Transport failures wrap the underlying client error unchanged.

use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

/// Notes API failure.
#[derive(Debug)]
pub enum ApiError {
    /// No response reached the client.
    Transport(reqwest::Error),
    /// Server answered with a non-success status.
    Http(HttpError),
    /// Request URL could not be built from the configured base URL.
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => Some(err.status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Http(err) => write!(f, "{err}"),
            Self::InvalidUrl(details) => write!(f, "invalid request url: {details}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Http(err) => Some(err),
            Self::InvalidUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<HttpError> for ApiError {
    fn from(value: HttpError) -> Self {
        Self::Http(value)
    }
}

/// Non-success HTTP response, normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpError {
    /// Server-provided detail when present, synthesized otherwise.
    pub message: String,
    pub status: u16,
    /// Parsed response body; `None` when the body was empty.
    pub payload: Option<Value>,
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for HttpError {}
