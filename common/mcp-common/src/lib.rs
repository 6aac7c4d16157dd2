//! MCP Common - Shared plumbing for the workspace's MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging (stdout belongs to the protocol)
//! - **Results**: [`json_success`] / [`text_success`] for `CallToolResult` responses
//! - **Errors**: [`ToolErrorPayload`] and [`tool_error`] for the structured
//!   `{error, tool, suggestion}` payload returned when a tool fails
//! - **Embeddable**: [`EmbeddableMcp`] for calling tools in-process
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{json_success, tool_error};
//!
//! fn get_thing(&self, name: &str) -> Result<CallToolResult, McpError> {
//!     match self.lookup(name) {
//!         Some(thing) => json_success(&thing),
//!         None => tool_error("get_thing", format!("{name} not found"), None),
//!     }
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{parse_params, EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{tool_error, IntoMcpError, McpResult, ResultExt, ToolErrorPayload};
pub use init::init_tracing;
pub use result::{json_success, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
