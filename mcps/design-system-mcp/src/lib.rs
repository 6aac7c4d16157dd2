//! Design System MCP Library
//!
//! Component metadata for a React design system, served over MCP.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use design_system_mcp::{DesignSystemConfig, DesignSystemMcpServer};
//!
//! let server = DesignSystemMcpServer::new(DesignSystemConfig::load(None)?);
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! - Props come from a JSON file keyed by component name
//! - Examples, best practices and accessibility notes come from MDX docs
//! - Both are merged into an in-memory index, built on first use and
//!   rebuilt only on `refresh_index`

pub mod config;
pub mod docs;
pub mod error;
pub mod generate;
pub mod handlers;
pub mod index;
pub mod params;
pub mod props;
pub mod query;
pub mod server;
pub mod types;

pub use config::DesignSystemConfig;
pub use error::DesignSystemError;
pub use index::{ComponentIndex, IndexCache};
pub use server::DesignSystemMcpServer;

pub use params::*;
