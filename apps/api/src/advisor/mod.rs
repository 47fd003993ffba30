//! Advisor — the single point of entry for all LLM calls in Tailor.
//!
//! ARCHITECTURAL RULE: the analysis engine never calls the advisor. It is a
//! strictly additive Q&A collaborator; with no credential configured the
//! rest of the service works unchanged.
//!
//! Wraps the Gemini `generateContent` REST API with retry logic, behind the
//! `AdvisorBackend` trait so the backend can be swapped without touching
//! handlers.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;
pub mod prompts;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Gemini API keys carry a fixed prefix. This prefix plus a minimum length
/// is the only shape-checking performed before use.
const API_KEY_PREFIX: &str = "AIza";
const MIN_API_KEY_LEN: usize = 30;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("no API key configured")]
    NotConfigured,

    #[error("API key is malformed")]
    MalformedKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("advisor returned empty content")]
    EmptyContent,
}

/// Credential shape check: fixed prefix plus minimum length, nothing more.
pub fn is_plausible_api_key(key: &str) -> bool {
    key.starts_with(API_KEY_PREFIX) && key.len() >= MIN_API_KEY_LEN
}

/// Summary of a prior analysis embedded into the advisor prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisContext {
    pub overall_score: u32,
    pub ats_compatibility: u32,
    pub missing_keywords: Vec<String>,
}

/// The advisor backend seam. Carried in `AppState` as
/// `Arc<dyn AdvisorBackend>`.
#[async_trait]
pub trait AdvisorBackend: Send + Sync {
    async fn ask(&self, prompt: &str) -> Result<String, AdvisorError>;

    /// Whether a usable credential is configured.
    fn is_configured(&self) -> bool;
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

impl GeminiResponse {
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini-backed advisor. Retries on 429 and 5xx with exponential backoff.
pub struct GeminiAdvisor {
    client: Client,
    api_key: Option<String>,
}

impl GeminiAdvisor {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    fn credential(&self) -> Result<&str, AdvisorError> {
        let key = self.api_key.as_deref().ok_or(AdvisorError::NotConfigured)?;
        if !is_plausible_api_key(key) {
            return Err(AdvisorError::MalformedKey);
        }
        Ok(key)
    }
}

#[async_trait]
impl AdvisorBackend for GeminiAdvisor {
    async fn ask(&self, prompt: &str) -> Result<String, AdvisorError> {
        let key = self.credential()?;

        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let mut last_error: Option<AdvisorError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Advisor call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(GEMINI_API_URL)
                .query(&[("key", key)])
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(AdvisorError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Advisor API returned {}: {}", status, body);
                last_error = Some(AdvisorError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(AdvisorError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: GeminiResponse = response.json().await?;
            let text = parsed.text().ok_or(AdvisorError::EmptyContent)?;

            debug!("Advisor call succeeded: {} chars", text.len());
            return Ok(text.to_string());
        }

        Err(last_error.unwrap_or(AdvisorError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(is_plausible_api_key)
            .unwrap_or(false)
    }
}
