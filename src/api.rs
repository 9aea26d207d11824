// ABOUTME: Blocking HTTP client for the Todoist sync API
// ABOUTME: Single full sync of projects and items with fail-fast errors

use crate::model::TodoistState;
use crate::{Error, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_API_BASE: &str = "https://api.todoist.com/sync/v8";

const SYNC_ENDPOINT: &str = "/sync";

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.len() <= max_chars {
        return s.to_string();
    }

    // Find a valid UTF-8 boundary at or before max_chars
    let mut boundary = max_chars;
    while boundary > 0 && !s.is_char_boundary(boundary) {
        boundary -= 1;
    }

    if boundary == 0 {
        return String::new();
    }

    format!("{}...", &s[..boundary])
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(token: String, base_url: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(ApiClient {
            client,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.into()),
            token,
        })
    }

    /// Performs a full sync and returns every project and item the account has.
    pub fn sync(&self) -> Result<TodoistState> {
        let url = format!("{}{}", self.base_url, SYNC_ENDPOINT);
        debug!(%url, "requesting full sync");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .header("User-Agent", concat!("org-todoist/", env!("CARGO_PKG_VERSION")))
            .form(&[
                ("sync_token", "*"),
                ("resource_types", r#"["projects","items"]"#),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(Error::Api {
                endpoint: SYNC_ENDPOINT.into(),
                status: status.as_u16(),
                message: truncate_str(&message, 100),
            });
        }

        let body = response.text()?;
        let state: TodoistState = serde_json::from_str(&body).map_err(|e| {
            debug!(
                body = %truncate_str(&body, 500),
                "failed to parse sync response"
            );
            Error::Parse(e)
        })?;

        info!(
            projects = state.projects.len(),
            items = state.items.len(),
            "sync complete"
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short() {
        assert_eq!(truncate_str("hello", 100), "hello");
    }

    #[test]
    fn test_truncate_str_long() {
        let result = truncate_str("hello world", 7);
        assert_eq!(result, "hello w...");
    }

    #[test]
    fn test_truncate_str_utf8() {
        // "ä" is two bytes; cutting inside it must back off to the boundary
        let result = truncate_str("aä bcdef", 2);
        assert_eq!(result, "a...");
    }

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("test_token".into(), None).unwrap();
        assert_eq!(client.base_url, DEFAULT_API_BASE);
        assert_eq!(client.token, "test_token");
    }

    #[test]
    fn test_api_client_custom_base_trims_slash() {
        let client = ApiClient::new("token".into(), Some("https://custom.api/v9/".into())).unwrap();
        assert_eq!(client.base_url, "https://custom.api/v9");
    }
}
