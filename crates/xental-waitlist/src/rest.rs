//! Hosted waitlist table reached over a PostgREST-style HTTP API.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::store::{StoreError, UNIQUE_VIOLATION, WaitlistEntry, WaitlistStore};

/// Error body returned by the REST layer (partial - only fields we need).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Waitlist table behind a REST endpoint.
pub struct RestStore {
    agent: ureq::Agent,
    /// Full URL of the table endpoint.
    endpoint: String,
    api_key: String,
}

impl RestStore {
    /// `base_url` is the project URL; rows go to `{base_url}/rest/v1/{table}`.
    pub fn new(base_url: &str, table: &str, api_key: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();

        Self {
            agent,
            endpoint: table_endpoint(base_url, table),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for RestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestStore")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl WaitlistStore for RestStore {
    fn insert(&self, entry: &WaitlistEntry) -> Result<(), StoreError> {
        debug!(endpoint = %self.endpoint, "inserting waitlist entry");
        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .send_json([entry])?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.body_mut().read_to_string()?;
        let err = classify_failure(status, &body);
        warn!(status, error = %err, "waitlist insert failed");
        Err(err)
    }
}

/// Join a project URL and table name into the row endpoint.
fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

/// Map a non-success response to a store error.
fn classify_failure(status: u16, body: &str) -> StoreError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let code = parsed.as_ref().and_then(|b| b.code.clone());
    let message = parsed
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.trim().to_string());

    if code.as_deref() == Some(UNIQUE_VIOLATION) {
        StoreError::Conflict { message }
    } else {
        StoreError::Rejected {
            status,
            code,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_endpoint() {
        assert_eq!(
            table_endpoint("https://abc.supabase.co/", "waitlist_emails"),
            "https://abc.supabase.co/rest/v1/waitlist_emails"
        );
        let store = RestStore::new(
            "https://abc.supabase.co",
            "waitlist_emails",
            "key",
            Duration::from_secs(5),
        );
        assert_eq!(
            store.endpoint(),
            "https://abc.supabase.co/rest/v1/waitlist_emails"
        );
    }

    #[test]
    fn test_classify_unique_violation() {
        let body = r#"{"code":"23505","details":"Key (email)=(a@b.co) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"waitlist_emails_email_key\""}"#;
        match classify_failure(409, body) {
            StoreError::Conflict { message } => assert!(message.starts_with("duplicate key")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_classify_other_errors() {
        let body = r#"{"code":"42501","message":"permission denied for table waitlist_emails"}"#;
        match classify_failure(401, body) {
            StoreError::Rejected { status, code, .. } => {
                assert_eq!(status, 401);
                assert_eq!(code.as_deref(), Some("42501"));
            }
            other => panic!("unexpected {other:?}"),
        }

        match classify_failure(502, "Bad Gateway\n") {
            StoreError::Rejected { code, message, .. } => {
                assert_eq!(code, None);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_conflict_status_without_code_is_not_duplicate() {
        assert!(matches!(
            classify_failure(409, "{}"),
            StoreError::Rejected { status: 409, .. }
        ));
    }
}
