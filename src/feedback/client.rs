//! Chat-completion API client for resume feedback

use crate::config::FeedbackConfig;
use crate::error::{AnalyzerError, Result};
use crate::feedback::prompts::feedback_prompt;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

/// Client for the external completion service. One best-effort request per
/// analysis, bounded by a timeout; no retries.
pub struct FeedbackClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl FeedbackClient {
    pub fn new(config: &FeedbackConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Feedback(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Request improvement suggestions for the raw (non-normalized) resume
    /// against the raw job description. Returns the trimmed text of the
    /// first completion choice.
    pub async fn generate_feedback(&self, resume: &str, job_description: &str) -> Result<String> {
        let prompt = feedback_prompt(resume, job_description);
        debug!("Feedback prompt length: {} characters", prompt.len());

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AnalyzerError::Feedback(format!("Completion request failed: {}", e)))?;

        let completion: ChatCompletionResponse = response.json().await?;

        completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| {
                AnalyzerError::Feedback("Completion response contained no choices".to_string())
            })
    }
}
