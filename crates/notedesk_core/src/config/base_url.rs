//! API base-URL resolution.
//!
//! Resolution order, first match wins:
//! 1. explicit override (non-empty after trimming), used verbatim;
//! 2. the page origin with the backend port substituted, only when the page
//!    is served on an explicit non-default port;
//! 3. `DEFAULT_BASE_URL`.

use url::Url;

/// Local-development backend origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
/// Port the backend listens on next to a development front end.
pub const BACKEND_PORT: u16 = 3001;

/// Resolves the API base URL.
///
/// `page` is the location the client is hosted on, when there is one.
pub fn resolve_base_url(override_url: Option<&str>, page: Option<&Url>) -> String {
    if let Some(value) = override_url.filter(|value| !value.trim().is_empty()) {
        return value.to_string();
    }
    page.and_then(infer_from_page)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Suggests `<scheme>://<host>:BACKEND_PORT` for a page on an explicit port.
///
/// Returns `None` for pages on default ports (production domains) and for
/// non-http(s) locations.
pub fn infer_from_page(page: &Url) -> Option<String> {
    if !matches!(page.scheme(), "http" | "https") {
        return None;
    }
    // `Url::port` is `None` both when absent and when equal to the scheme default.
    page.port()?;

    let mut origin = page.clone();
    origin.set_port(Some(BACKEND_PORT)).ok()?;
    Some(origin.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::{infer_from_page, resolve_base_url, DEFAULT_BASE_URL};
    use url::Url;

    fn page(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn override_wins_verbatim() {
        let location = page("http://host:4000/notes");
        assert_eq!(
            resolve_base_url(Some("https://api.example.com"), Some(&location)),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_base_url(Some("https://api.example.com"), None),
            "https://api.example.com"
        );
    }

    #[test]
    fn blank_override_is_ignored() {
        assert_eq!(resolve_base_url(Some("   "), None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some(""), None), DEFAULT_BASE_URL);
    }

    #[test]
    fn page_on_explicit_port_swaps_in_backend_port() {
        let location = page("http://host:4000/some/path?q=1");
        assert_eq!(resolve_base_url(None, Some(&location)), "http://host:3001");
    }

    #[test]
    fn page_without_explicit_port_is_not_inferred() {
        assert_eq!(infer_from_page(&page("https://notes.example.com/")), None);
        assert_eq!(infer_from_page(&page("http://notes.example.com:80/")), None);
        assert_eq!(
            resolve_base_url(None, Some(&page("https://notes.example.com/"))),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn missing_page_context_falls_back_to_default() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        assert_eq!(infer_from_page(&page("file:///tmp/index.html")), None);
    }
}
