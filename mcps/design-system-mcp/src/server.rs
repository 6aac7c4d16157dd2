//! MCP Server implementation for design-system component metadata
//!
//! Exposes the component index through query tools and wraps an LLM for
//! code generation grounded in real component props.

use mcp_common::{
    async_trait, parse_params, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;
use std::sync::Arc;

use crate::config::DesignSystemConfig;
use crate::docs::MdxDocsLoader;
use crate::generate::{ClaudeGenerator, CodeGenerator, GenerationKind};
use crate::handlers;
use crate::index::IndexCache;
use crate::params::*;
use crate::props::PropsLoader;

/// The main Design System MCP Server
#[derive(Clone)]
pub struct DesignSystemMcpServer {
    index: Arc<IndexCache>,
    generator: Arc<dyn CodeGenerator>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl DesignSystemMcpServer {
    /// Server reading props and MDX docs from the configured paths
    pub fn new(config: DesignSystemConfig) -> Self {
        let index = IndexCache::new(
            PropsLoader::new(&config.data.props_path),
            MdxDocsLoader::new(&config.data.docs_dir),
            config.data.package_name.clone(),
        );
        Self::with_parts(Arc::new(index), Arc::new(ClaudeGenerator::new(config.llm)))
    }

    /// Server over an existing cache and generator
    pub fn with_parts(index: Arc<IndexCache>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            index,
            generator,
            tool_router: Self::tool_router(),
        }
    }

    pub fn index(&self) -> &Arc<IndexCache> {
        &self.index
    }

    // ========================================================================
    // Query Tools
    // ========================================================================

    #[tool(
        description = "List design-system components with prop and example counts, sorted by name. Optionally filter by category and/or status. Also returns every category in the system."
    )]
    async fn list_components(
        &self,
        Parameters(params): Parameters<ListComponentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_components(&self.index, params)
    }

    #[tool(
        description = "Search components by case-insensitive substring over name, description and category. Returns matching component names."
    )]
    async fn search_components(
        &self,
        Parameters(params): Parameters<SearchComponentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_components(&self.index, params)
    }

    #[tool(
        description = "Get full details for one component: props, examples, best practices, accessibility notes and the import statement."
    )]
    async fn get_component_info(
        &self,
        Parameters(params): Parameters<GetComponentInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_component_info(&self.index, params)
    }

    #[tool(
        description = "Reload component props and documentation from disk. Use after the design system's data files change."
    )]
    async fn refresh_index(&self) -> Result<CallToolResult, McpError> {
        handlers::refresh_index(&self.index)
    }

    // ========================================================================
    // Generation Tools
    // ========================================================================

    #[tool(
        description = "Generate a React component in TSX from a description, built from design-system components. Requires an Anthropic API key on the server."
    )]
    async fn generate_component(
        &self,
        Parameters(params): Parameters<GenerateCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::generate(
            &self.index,
            self.generator.as_ref(),
            GenerationKind::Component,
            params,
        )
        .await
    }

    #[tool(
        description = "Generate a full page in TSX from a description, composed of design-system components. Requires an Anthropic API key on the server."
    )]
    async fn generate_page(
        &self,
        Parameters(params): Parameters<GenerateCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::generate(
            &self.index,
            self.generator.as_ref(),
            GenerationKind::Page,
            params,
        )
        .await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for DesignSystemMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Design-system MCP server. Use list_components or search_components to \
                 discover components, get_component_info for props and examples, and \
                 generate_component / generate_page to draft code with them."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Embeddable Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for DesignSystemMcpServer {
    fn server_name(&self) -> &str {
        "design-system"
    }

    fn server_description(&self) -> Option<&str> {
        Some("Design-system component metadata and AI-assisted code generation")
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "list_components" => {
                let params = parse_params(name, params)?;
                self.list_components(Parameters(params)).await.map_err(Into::into)
            }
            "search_components" => {
                let params = parse_params(name, params)?;
                self.search_components(Parameters(params)).await.map_err(Into::into)
            }
            "get_component_info" => {
                let params = parse_params(name, params)?;
                self.get_component_info(Parameters(params)).await.map_err(Into::into)
            }
            "refresh_index" => self.refresh_index().await.map_err(Into::into),
            "generate_component" => {
                let params = parse_params(name, params)?;
                self.generate_component(Parameters(params)).await.map_err(Into::into)
            }
            "generate_page" => {
                let params = parse_params(name, params)?;
                self.generate_page(Parameters(params)).await.map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
