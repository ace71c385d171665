//! Outbound boundary to the external text-generation service.
//!
//! The service is opaque: a role-tagged message sequence and a token
//! budget go out, text or a typed failure comes back. Transport errors,
//! non-2xx statuses, and malformed bodies are all normalized into
//! [`Error::Generation`]; nothing raises past this boundary. No retries,
//! no caching, no timeout.

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::Error;

// ---

/// Chat-style client for the generation capability.
#[derive(Clone)]
pub struct AdvisoryGateway {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl AdvisoryGateway {
    // ---
    pub fn new(cfg: &Config) -> AdvisoryGateway {
        // ---
        AdvisoryGateway {
            client: Client::new(),
            api_url: cfg.ai_api_url.clone(),
            api_key: cfg.ai_api_key.clone(),
            model: cfg.ai_model.clone(),
        }
    }

    /// Send one prompt and return the generated text.
    ///
    /// `max_tokens` is the response budget. Callers choose it per use case:
    /// the short budget for free-form operator prompts, the long budget for
    /// structured neighborhood analyses.
    pub async fn generate(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, Error> {
        // ---
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
            "max_tokens": max_tokens,
        });

        tracing::debug!(
            "Requesting completion ({} prompt chars, budget {} tokens)",
            prompt.len(),
            max_tokens
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Generation(format!("request failed: {e}")))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("invalid response body: {e}")))?;

        if !status.is_success() {
            let detail = payload
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("unknown service error");
            return Err(Error::Generation(format!("service returned {status}: {detail}")));
        }

        let text = payload
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Generation("response missing completion text".to_string()))?;

        tracing::debug!("Received completion ({} chars)", text.len());
        Ok(text.to_string())
    }
}
