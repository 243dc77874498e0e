use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::observability;
use crate::prompt;
use crate::types::{ChatCompletion, CompletionRequest, JournalConfig, MessageParam};

const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/";

/// Static identifying headers sent with every request.
const REFERER: &str = "https://mindful-journal.streamlit.app";
const TITLE: &str = "AI Mental Health Companion";

/// Fixed request timeout. Timeouts are handled like any other failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Number of trailing session messages sent with each request.
pub const HISTORY_WINDOW: usize = 4;

/// Client for the OpenRouter chat completions endpoint.
///
/// The client holds no credential; the caller supplies it per request
/// through [`JournalConfig`]. One invocation of [`OpenRouter::complete`]
/// makes exactly one outbound call, with no retry.
#[derive(Debug, Clone)]
pub struct OpenRouter {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl OpenRouter {
    /// Create a new OpenRouter client with the fixed endpoint and timeout.
    pub fn new() -> Result<Self> {
        Self::with_options(None, None)
    }

    /// Create a new client with custom settings, for tests and proxies.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Url::parse(&base_url)?;

        let timeout = timeout.unwrap_or(REQUEST_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Create and return the headers for one API request.
    fn default_headers(&self, api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
                Error::authentication("credential contains characters not allowed in a header")
            })?,
        );
        headers.insert("HTTP-Referer", HeaderValue::from_static(REFERER));
        headers.insert("X-Title", HeaderValue::from_static(TITLE));
        Ok(headers)
    }

    /// Assemble the request body for one turn: the system instruction
    /// followed by the trailing [`HISTORY_WINDOW`] session messages,
    /// oldest first.
    pub fn build_request(config: &JournalConfig, history: &[MessageParam]) -> CompletionRequest {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        let mut messages = Vec::with_capacity(1 + history.len() - start);
        messages.push(MessageParam::system(prompt::system_instruction(
            config.mood,
            config.depth,
        )));
        messages.extend_from_slice(&history[start..]);
        CompletionRequest::new(config.model.clone(), messages)
    }

    /// Process API response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        // Try to parse error response body
        #[derive(Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let error_message = serde_json::from_str::<ErrorResponse>(&error_body)
            .ok()
            .and_then(|e| e.error)
            .and_then(|e| e.message)
            .unwrap_or_else(|| error_body.clone());

        match status_code {
            401 => Error::authentication(error_message),
            408 => Error::timeout(error_message, None),
            _ => Error::api(status_code, error_message),
        }
    }

    /// Send one completion request and return the reply text.
    ///
    /// On HTTP success, extracts the first completion choice's message
    /// content. Any failure (connection error, timeout, non-2xx status,
    /// malformed payload, missing field) comes back as a typed error;
    /// nothing panics.
    pub async fn complete(
        &self,
        config: &JournalConfig,
        history: &[MessageParam],
    ) -> Result<String> {
        observability::CLIENT_REQUESTS.click();
        let start = Instant::now();
        let result = self.complete_inner(config, history).await;
        observability::CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());
        if result.is_err() {
            observability::CLIENT_REQUEST_ERRORS.click();
        }
        result
    }

    async fn complete_inner(
        &self,
        config: &JournalConfig,
        history: &[MessageParam],
    ) -> Result<String> {
        let url = format!("{}chat/completions", self.base_url);
        let request = Self::build_request(config, history);

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers(&config.api_key)?)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    observability::CLIENT_TIMEOUTS.click();
                    Error::timeout(
                        format!("Request timed out: {}", e),
                        Some(self.timeout.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                }
            })?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }

        let completion = response.json::<ChatCompletion>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })?;
        completion.into_text()
    }
}
