use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use draftsmith_types::api::GenerationOptions;
use draftsmith_types::models::GeneratedDesignResponse;
use draftsmith_types::validation::kind_of;

use crate::prompt::{SYSTEM_PROMPT, build_prompt};
use crate::{DesignGenerator, GenerateError};

const TEMPERATURE: f32 = 0.7;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

// ── Wire types ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ── Generator ───────────────────────────────────────────────────────────

/// Generator backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiGenerator {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiGenerator {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn request(&self, instruction: &str) -> Result<GeneratedDesignResponse, GenerateError> {
        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: instruction },
            ],
            temperature: TEMPERATURE,
            response_format: ResponseFormat { kind: "json_object" },
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(GenerateError::Provider(format!(
                "{} {}",
                status,
                provider_message(&text)
            )));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| GenerateError::Provider(format!("Unreadable completion body: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(GenerateError::EmptyResponse)?;

        parse_design(&content)
    }
}

#[async_trait]
impl DesignGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GeneratedDesignResponse, GenerateError> {
        let instruction = build_prompt(prompt, &options.resolve());

        info!("Sending design request to provider (model={})", self.config.model);
        let design = self.request(&instruction).await?;
        info!(
            "Received design from provider ({} suggestions)",
            design.suggestions.len()
        );
        Ok(design)
    }
}

/// Parses the assistant's message content into a design. Missing fields come
/// back empty; anything other than a JSON object is rejected.
pub fn parse_design(content: &str) -> Result<GeneratedDesignResponse, GenerateError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| GenerateError::Provider(format!("Provider returned invalid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(GenerateError::Malformed(format!(
            "expected object, received {}",
            kind_of(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| GenerateError::Malformed(e.to_string()))
}

/// Pulls `error.message` out of an OpenAI-style error body, falling back to
/// the raw text.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
