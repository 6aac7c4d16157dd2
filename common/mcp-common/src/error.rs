//! Error handling for MCP tools
//!
//! Two levels of failure exist at the tool boundary:
//!
//! - **Protocol errors** (`McpError`): the call itself is malformed, or a
//!   response could not be serialized. These abort the request.
//! - **Tool errors** ([`ToolErrorPayload`]): the tool ran and the domain
//!   said no (unknown component, missing data file, upstream failure).
//!   These come back as a normal result with `is_error = true` and a JSON
//!   body the calling agent can read and act on.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::{Deserialize, Serialize};

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Body of a failed tool call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolErrorPayload {
    /// Human-readable failure message
    pub error: String,
    /// Name of the tool that failed
    pub tool: String,
    /// What the caller can do about it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ToolErrorPayload {
    pub fn new(tool: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            tool: tool.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Render as an error `CallToolResult`
    pub fn into_result(self) -> McpResult<CallToolResult> {
        let json = serde_json::to_string_pretty(&self).to_mcp_err()?;
        Ok(CallToolResult::error(vec![Content::text(json)]))
    }
}

/// Build an error result for `tool`
///
/// ```rust,ignore
/// return tool_error(
///     "get_component_info",
///     "Component 'Foo' not found",
///     Some("Use list_components to see what exists".into()),
/// );
/// ```
pub fn tool_error(
    tool: &str,
    error: impl Into<String>,
    suggestion: Option<String>,
) -> McpResult<CallToolResult> {
    let payload = ToolErrorPayload::new(tool, error);
    match suggestion {
        Some(suggestion) => payload.with_suggestion(suggestion),
        None => payload,
    }
    .into_result()
}

/// Conversion into protocol-level MCP errors
///
/// Implement this for error types that should abort a request rather than
/// produce a tool error payload.
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

/// `to_mcp_err()` for any `Result` whose error implements [`IntoMcpError`]
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(|e| e.into_mcp_error())
    }
}
