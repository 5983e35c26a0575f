//! Client configuration resolved once at startup.
//!
//! # Responsibility
//! - Resolve the API base URL from flag/env override, page origin or default.
//! - Carry draft validation rules to the page controller.
//!
//! # Invariants
//! - Request code never reads ambient configuration; it receives a
//!   `ClientConfig` (or its `Url`) at construction.
//! - `base_url` is always an absolute `http`/`https` URL.

pub mod base_url;

use crate::config::base_url::resolve_base_url;
use crate::model::note::DraftRules;
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

/// Environment variable holding the API base-URL override.
pub const BASE_URL_ENV_VAR: &str = "NOTEDESK_API_BASE_URL";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBaseUrl { value: String, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl { value, reason } => {
                write!(f, "invalid API base url `{value}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub draft_rules: DraftRules,
}

impl ClientConfig {
    /// Resolves configuration from an explicit override and page location.
    ///
    /// # Errors
    /// - Returns `ConfigError::InvalidBaseUrl` when the resolved value is not
    ///   an absolute `http`/`https` URL.
    pub fn resolve(
        override_url: Option<&str>,
        page: Option<&Url>,
        draft_rules: DraftRules,
    ) -> Result<Self, ConfigError> {
        let raw = resolve_base_url(override_url, page);
        let base_url = parse_base_url(raw.as_str())?;
        Ok(Self {
            base_url,
            draft_rules,
        })
    }

    /// Resolves configuration, letting `flag_override` take precedence over
    /// `NOTEDESK_API_BASE_URL`.
    pub fn from_env(
        flag_override: Option<&str>,
        page: Option<&Url>,
        draft_rules: DraftRules,
    ) -> Result<Self, ConfigError> {
        let env_override = std::env::var(BASE_URL_ENV_VAR).ok();
        let override_url = flag_override
            .filter(|value| !value.trim().is_empty())
            .or(env_override.as_deref());
        Self::resolve(override_url, page, draft_rules)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("url cannot be a base".to_string()));
    }
    Ok(url)
}
