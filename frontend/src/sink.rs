use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;

use crate::config;

const UNIQUE_VIOLATION: &str = "23505";
const UNDEFINED_TABLE: &str = "42P01";
const POSTGREST_TABLE_NOT_FOUND: &str = "PGRST205";
const INSUFFICIENT_PRIVILEGE: &str = "42501";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SinkError {
    /// The store answered with a structured error.
    #[error("{message}")]
    Rejected { code: String, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl SinkError {
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        SinkError::Rejected {
            code: code.into(),
            message: message.into(),
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            SinkError::Rejected { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        self.code() == Some(UNIQUE_VIOLATION)
    }

    pub fn is_missing_relation(&self) -> bool {
        matches!(self.code(), Some(UNDEFINED_TABLE) | Some(POSTGREST_TABLE_NOT_FOUND))
    }

    // Row level security failures don't always carry 42501, so the message is checked too.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            SinkError::Rejected { code, message } => {
                code == INSUFFICIENT_PRIVILEGE
                    || message.to_lowercase().contains("permission denied")
            }
            _ => false,
        }
    }
}

#[derive(Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Turns a non-2xx PostgREST response body into a `SinkError`.
pub fn decode_error_body(status_text: &str, body: &str) -> SinkError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => SinkError::rejected(
            err.code.unwrap_or_default(),
            err.message.unwrap_or_default(),
        ),
        Err(_) => SinkError::rejected("", status_text),
    }
}

#[allow(async_fn_in_trait)]
pub trait DataSink {
    async fn insert<R: Serialize>(&self, table: &str, record: &R) -> Result<(), SinkError>;
}

impl<S: DataSink> DataSink for &S {
    async fn insert<R: Serialize>(&self, table: &str, record: &R) -> Result<(), SinkError> {
        (**self).insert(table, record).await
    }
}

/// Resolves to `insert`'s result, or to `SinkError::Timeout` if `timer` fires first.
async fn within_timeout<F, T>(insert: F, timer: T, timeout_ms: u32) -> Result<(), SinkError>
where
    F: Future<Output = Result<(), SinkError>>,
    T: Future<Output = ()>,
{
    match select(Box::pin(insert), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SinkError::Timeout(timeout_ms)),
    }
}

#[derive(Clone, PartialEq)]
pub struct SupabaseClient {
    base_url: Rc<str>,
    anon_key: Rc<str>,
    timeout_ms: u32,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            anon_key: Rc::from(anon_key),
            timeout_ms: config::REQUEST_TIMEOUT_MS,
        }
    }

    pub fn from_config() -> Self {
        let anon_key = config::get_supabase_anon_key();
        if anon_key.is_empty() {
            log::warn!("SUPABASE_ANON_KEY was not set at build time, inserts will be rejected");
        }
        Self::new(config::get_supabase_url(), anon_key)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn send_insert<R: Serialize>(&self, table: &str, record: &R) -> Result<(), SinkError> {
        let request = Request::post(&self.table_url(table))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=minimal")
            .json(&[record])
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        Err(decode_error_body(&status_text, &body))
    }
}

impl DataSink for SupabaseClient {
    async fn insert<R: Serialize>(&self, table: &str, record: &R) -> Result<(), SinkError> {
        let result = within_timeout(
            self.send_insert(table, record),
            TimeoutFuture::new(self.timeout_ms),
            self.timeout_ms,
        )
        .await;

        if let Err(e) = &result {
            gloo_console::error!("Supabase error:", format!("{:?}", e));
        }
        result
    }
}
