//! Tool parameter types for design-system-mcp

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct ListComponentsParams {
    #[schemars(description = "Only components in this category (case-insensitive)")]
    #[serde(default)]
    pub category: Option<String>,

    #[schemars(description = "Only components with this status, e.g. 'stable' or 'beta' (case-insensitive)")]
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchComponentsParams {
    #[schemars(description = "Text to look for in component names, descriptions and categories")]
    #[serde(default)]
    pub query: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetComponentInfoParams {
    #[schemars(description = "Component name, e.g. 'Button' (exact match preferred, case-insensitive fallback)")]
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct GenerateCodeParams {
    #[schemars(description = "Natural-language description of what to build")]
    pub description: String,

    #[schemars(description = "Components to build with (default: every component in the index)")]
    #[serde(default)]
    pub components: Option<Vec<String>>,
}
