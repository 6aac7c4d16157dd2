//! Tool handlers
//!
//! Each handler takes the index cache (and generator, for generation tools)
//! plus params. Domain failures become `{error, tool, suggestion}` tool
//! errors; only serialization problems surface as protocol errors.

use mcp_common::{json_success, text_success, tool_error, CallToolResult, McpResult};
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::generate::{CodeGenerator, GenerationKind, GenerationRequest};
use crate::index::IndexCache;
use crate::params::*;
use crate::query::{self, ListFilter};
use crate::types::{ComponentIndexEntry, IndexStatus, SearchResults};

fn respond<T: Serialize>(tool: &str, result: Result<T>) -> McpResult<CallToolResult> {
    match result {
        Ok(value) => json_success(&value),
        Err(e) => {
            warn!(tool, "{}", e);
            e.into_tool_result(tool)
        }
    }
}

pub fn list_components(cache: &IndexCache, params: ListComponentsParams) -> McpResult<CallToolResult> {
    let filter = ListFilter {
        category: params.category,
        status: params.status,
    };
    let result = cache.get().map(|index| query::list(&index, &filter));
    respond("list_components", result)
}

pub fn search_components(
    cache: &IndexCache,
    params: SearchComponentsParams,
) -> McpResult<CallToolResult> {
    let result = cache.get().map(|index| {
        let components = query::search(&index, &params.query);
        SearchResults {
            total: components.len(),
            query: params.query,
            components,
        }
    });
    respond("search_components", result)
}

pub fn get_component_info(
    cache: &IndexCache,
    params: GetComponentInfoParams,
) -> McpResult<CallToolResult> {
    let result = cache.get().and_then(|index| {
        let detail = query::get_info(&index, &params.name)?.detail();
        Ok(detail)
    });
    respond("get_component_info", result)
}

pub fn refresh_index(cache: &IndexCache) -> McpResult<CallToolResult> {
    let result = cache.rebuild().map(|index| IndexStatus {
        components: index.len(),
        built_at: index.built_at(),
    });
    respond("refresh_index", result)
}

pub async fn generate(
    cache: &IndexCache,
    generator: &dyn CodeGenerator,
    kind: GenerationKind,
    params: GenerateCodeParams,
) -> McpResult<CallToolResult> {
    let tool = match kind {
        GenerationKind::Component => "generate_component",
        GenerationKind::Page => "generate_page",
    };

    if params.description.trim().is_empty() {
        return tool_error(
            tool,
            "description must not be empty",
            Some("Describe what to build in plain language".to_string()),
        );
    }

    let index = match cache.get() {
        Ok(index) => index,
        Err(e) => return e.into_tool_result(tool),
    };

    let components: Result<Vec<&ComponentIndexEntry>> = match &params.components {
        Some(names) => names.iter().map(|name| query::get_info(&index, name)).collect(),
        None => Ok(index.entries().iter().collect()),
    };
    let components = match components {
        Ok(components) => components,
        Err(e) => return e.into_tool_result(tool),
    };

    let request = GenerationRequest::new(kind, &params.description, &components, cache.import_path());

    match generator.generate(&request).await {
        Ok(code) => Ok(text_success(code)),
        Err(e) => {
            warn!(tool, model = generator.model(), "{}", e);
            e.into_tool_result(tool)
        }
    }
}
