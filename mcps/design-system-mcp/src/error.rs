//! Error taxonomy for the design-system server

use mcp_common::{tool_error, CallToolResult, McpResult};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DesignSystemError>;

#[derive(Debug, Error)]
pub enum DesignSystemError {
    /// A data file or secret the server needs is missing or malformed
    #[error("Component data unavailable: {0}")]
    Config(String),

    #[error("Component '{name}' not found")]
    NotFound { name: String },

    /// The LLM API refused, failed, or isn't configured
    #[error("{message}")]
    Upstream { message: String, suggestion: String },
}

impl DesignSystemError {
    /// Wrap a loader failure, keeping the whole context chain
    pub fn config(err: anyhow::Error) -> Self {
        Self::Config(format!("{:#}", err))
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn upstream(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(_) => Some(
                "Check that the props file exists and is valid JSON, then call refresh_index"
                    .to_string(),
            ),
            Self::NotFound { .. } => {
                Some("Use list_components to see all available components".to_string())
            }
            Self::Upstream { suggestion, .. } => Some(suggestion.clone()),
        }
    }

    /// Render as a tool error result for `tool`
    pub fn into_tool_result(self, tool: &str) -> McpResult<CallToolResult> {
        tool_error(tool, self.to_string(), self.suggestion())
    }
}
