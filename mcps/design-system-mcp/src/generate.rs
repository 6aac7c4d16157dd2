//! AI-assisted code generation
//!
//! A thin passthrough to an LLM: build a prompt from the request and the
//! relevant part of the component index, send it, return the text. Failures
//! are reported as upstream errors and never retried.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::LlmConfig;
use crate::error::{DesignSystemError, Result};
use crate::types::ComponentIndexEntry;

/// What the caller wants generated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Component,
    Page,
}

impl GenerationKind {
    fn noun(self) -> &'static str {
        match self {
            Self::Component => "a reusable React component",
            Self::Page => "a complete page",
        }
    }
}

/// Fully assembled prompt
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    pub system: String,
    pub prompt: String,
}

impl GenerationRequest {
    /// Build a prompt that grounds the model in the given components
    pub fn new(
        kind: GenerationKind,
        description: &str,
        components: &[&ComponentIndexEntry],
        import_path: &str,
    ) -> Self {
        let system = format!(
            "You are an expert React and TypeScript engineer working with the design system \
             published as '{import_path}'. Only use components listed in the context, import \
             them from '{import_path}', and only pass props they declare. Reply with a single \
             TSX code block and nothing else."
        );

        let mut prompt = format!("Generate {} in TSX.\n\nRequest:\n{}\n", kind.noun(), description.trim());

        if !components.is_empty() {
            prompt.push_str("\nAvailable components:\n");
            for entry in components {
                prompt.push_str(&describe(entry));
            }
        }

        Self {
            kind,
            system,
            prompt,
        }
    }
}

fn describe(entry: &ComponentIndexEntry) -> String {
    let mut out = format!("\n### {}\n", entry.name());
    if let Some(description) = entry.description() {
        out.push_str(description);
        out.push('\n');
    }
    for prop in &entry.info.props {
        out.push_str(&format!(
            "- {}{}: {}",
            prop.name,
            if prop.required { "" } else { "?" },
            prop.prop_type
        ));
        if let Some(description) = &prop.description {
            out.push_str(&format!(" ({})", description));
        }
        out.push('\n');
    }
    if let Some(example) = entry.examples.first() {
        out.push_str(&format!("Example:\n```{}\n{}\n```\n", example.language, example.code));
    }
    out
}

/// Backend that turns a prompt into code
#[async_trait]
pub trait CodeGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    fn model(&self) -> &str;
}

/// Anthropic Messages API backend
pub struct ClaudeGenerator {
    config: LlmConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ClaudeGenerator {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}

#[async_trait]
impl CodeGenerator for ClaudeGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(DesignSystemError::upstream(
                "AI generation unavailable: no API key configured",
                "Set ANTHROPIC_API_KEY and restart the server",
            ));
        };

        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": request.system,
            "messages": [{ "role": "user", "content": request.prompt }],
        });

        info!(kind = ?request.kind, model = %self.config.model, "Requesting code generation");

        let response = self
            .client
            .post(&self.config.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("LLM request failed: {}", e);
                upstream_failure(format!("LLM request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!("LLM API returned {}: {}", status, text);
            return Err(upstream_failure(format!("LLM API error {}: {}", status, text)));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| upstream_failure(format!("Invalid LLM response: {}", e)))?;

        extract_text(parsed).ok_or_else(|| upstream_failure("LLM response contained no text"))
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn upstream_failure(message: impl Into<String>) -> DesignSystemError {
    DesignSystemError::upstream(
        message,
        "Try again later, or write the code by hand using get_component_info",
    )
}

fn extract_text(response: MessagesResponse) -> Option<String> {
    let text: Vec<String> = response
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text.join("\n"))
    }
}
