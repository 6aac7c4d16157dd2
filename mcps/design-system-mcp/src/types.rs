//! Core types for the component index
//!
//! Field names serialize in camelCase so tool output reads the same as the
//! props source file (`defaultValue`, `bestPractices`, `importPath`).

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One property of a UI component
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProp {
    /// Prop name (e.g., "variant")
    pub name: String,
    /// TypeScript type as written in the source (e.g., "'primary' | 'secondary'")
    #[serde(rename = "type")]
    pub prop_type: String,
    /// Whether the prop must be supplied
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value, kept as raw JSON (strings, booleans and numbers all occur)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

/// Prop data for a single component
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentInfo {
    pub name: String,
    #[serde(default)]
    pub props: Vec<ComponentProp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Code sample taken from a component's documentation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CodeExample {
    pub title: String,
    /// Fence language, "tsx" when the fence doesn't say
    pub language: String,
    pub code: String,
}

/// Everything the docs source knows about one component
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDocs {
    pub description: Option<String>,
    pub examples: Vec<CodeExample>,
    pub best_practices: Vec<String>,
    pub accessibility: Vec<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Merged props + docs record for one component
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentIndexEntry {
    pub info: ComponentInfo,
    pub examples: Vec<CodeExample>,
    pub best_practices: Vec<String>,
    pub accessibility: Vec<String>,
    pub import_path: String,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ComponentIndexEntry {
    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn description(&self) -> Option<&str> {
        self.info.description.as_deref()
    }

    pub fn summary(&self) -> ComponentSummary {
        ComponentSummary {
            name: self.info.name.clone(),
            description: self.info.description.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            props_count: self.info.props.len(),
            examples_count: self.examples.len(),
        }
    }

    pub fn detail(&self) -> ComponentDetail {
        ComponentDetail {
            name: self.info.name.clone(),
            description: self.info.description.clone(),
            props: self.info.props.clone(),
            examples: self.examples.clone(),
            best_practices: self.best_practices.clone(),
            accessibility: self.accessibility.clone(),
            import_path: self.import_path.clone(),
            import_statement: format!(
                "import {{ {} }} from '{}';",
                self.info.name, self.import_path
            ),
            category: self.category.clone(),
            status: self.status.clone(),
        }
    }
}

/// Row in the `list_components` output
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub props_count: usize,
    pub examples_count: usize,
}

/// `list_components` response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentList {
    pub components: Vec<ComponentSummary>,
    pub total: usize,
    /// Distinct categories across the whole index, not just the filtered rows
    pub categories: Vec<String>,
}

/// `search_components` response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResults {
    pub query: String,
    pub components: Vec<String>,
    pub total: usize,
}

/// `get_component_info` response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetail {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub props: Vec<ComponentProp>,
    pub examples: Vec<CodeExample>,
    pub best_practices: Vec<String>,
    pub accessibility: Vec<String>,
    pub import_path: String,
    pub import_statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `refresh_index` response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndexStatus {
    pub components: usize,
    pub built_at: DateTime<Utc>,
}
