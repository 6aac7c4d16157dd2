//! In-process tool calls
//!
//! [`EmbeddableMcp`] lets a host (or a test) call a server's tools directly
//! with JSON arguments, without a transport in between.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let server = DesignSystemMcpServer::new(config);
//! let result = server
//!     .call_tool("get_component_info", serde_json::json!({ "name": "Button" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("invalid parameters for {tool}: {message}")]
    InvalidParams { tool: String, message: String },

    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Deserialize tool arguments, tagging failures with the tool name
pub fn parse_params<T: DeserializeOwned>(tool: &str, params: Value) -> EmbeddableResult<T> {
    // Tools without arguments are commonly called with `null`
    let params = if params.is_null() {
        Value::Object(Default::default())
    } else {
        params
    };
    serde_json::from_value(params).map_err(|e| EmbeddableError::InvalidParams {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

/// An MCP server whose tools can be executed in-process
///
/// Servers built on rmcp's `#[tool_router]` implement `list_tools` by
/// delegating to their router and `call_tool` by matching on the tool name.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name as used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All tools with their descriptions and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Run tool `name` with JSON arguments `params`
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }
}
