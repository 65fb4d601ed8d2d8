//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, ORIGIN, REFERER, USER_AGENT,
};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

/// Per-request timeout applied to every upstream call.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// ESPN rejects requests that do not look like they came from its own web app.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ESPN_ORIGIN: &str = "https://fantasy.espn.com";
const ESPN_REFERER: &str = "https://fantasy.espn.com/basketball/";

/// Session cookies used to authenticate against ESPN.
///
/// Never serialized and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    swid: String,
    espn_s2: String,
}

impl Credentials {
    pub fn new(swid: impl Into<String>, espn_s2: impl Into<String>) -> Self {
        Self {
            swid: swid.into(),
            espn_s2: espn_s2.into(),
        }
    }

    /// `Cookie` header carrying the session identifier under both the current
    /// `SWID` name and the legacy lowercase `swid` name, plus `espn_s2`.
    pub fn cookie_header(&self) -> Result<HeaderValue> {
        let cookie = format!(
            "SWID={swid}; swid={swid}; espn_s2={s2}",
            swid = self.swid,
            s2 = self.espn_s2
        );
        let mut value = HeaderValue::from_str(&cookie)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("swid", &"<redacted>")
            .field("espn_s2", &"<redacted>")
            .finish()
    }
}

/// Headers every upstream request carries, cookies excluded.
pub fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(REFERER, HeaderValue::from_static(ESPN_REFERER));
    h.insert(ORIGIN, HeaderValue::from_static(ESPN_ORIGIN));
    h
}

/// Browser headers plus the session cookie.
pub fn authenticated_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut h = browser_headers();
    h.insert(COOKIE, credentials.cookie_header()?);
    Ok(h)
}

/// Shared client with connection pooling and a fixed per-request timeout.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_header_sets_both_identifier_names() {
        let creds = Credentials::new("{ABC-123}", "AEBsecret");
        let value = creds.cookie_header().unwrap();
        let cookie = value.to_str().unwrap();

        assert!(cookie.contains("SWID={ABC-123}"));
        assert!(cookie.contains("swid={ABC-123}"));
        assert!(cookie.contains("espn_s2=AEBsecret"));
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_cookie_header_rejects_invalid_characters() {
        let creds = Credentials::new("bad\nswid", "s2");
        assert!(creds.cookie_header().is_err());
    }

    #[test]
    fn test_browser_headers() {
        let headers = browser_headers();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert!(headers
            .get(USER_AGENT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("Mozilla/5.0"));
        assert_eq!(headers.get(ORIGIN).unwrap(), ESPN_ORIGIN);
        assert_eq!(headers.get(REFERER).unwrap(), ESPN_REFERER);
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
        assert!(!headers.contains_key(COOKIE));
    }

    #[test]
    fn test_authenticated_headers_include_cookie() {
        let creds = Credentials::new("{ABC}", "AEB");
        let headers = authenticated_headers(&creds).unwrap();
        assert!(headers.contains_key(COOKIE));
        assert!(headers.contains_key(USER_AGENT));
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials::new("{TOP-SECRET}", "AEBTOPSECRET");
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("TOP-SECRET"));
        assert!(!rendered.contains("AEBTOPSECRET"));
    }

    #[test]
    fn test_client_builds_with_timeout() {
        assert!(create_http_client_with_timeout(DEFAULT_HTTP_TIMEOUT_SECONDS).is_ok());
    }
}
