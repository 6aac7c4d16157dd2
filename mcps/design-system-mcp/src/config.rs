//! Configuration loading for design-system-mcp
//!
//! Layers, lowest priority first:
//! 1. Defaults
//! 2. TOML file from `DESIGN_SYSTEM_MCP_CONFIG` or `~/.design-system-mcp/config.toml`
//! 3. Environment variables
//! 4. Command line flags (applied in `main`)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignSystemConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Where component data comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file of per-component prop definitions
    #[serde(default = "default_props_path")]
    pub props_path: PathBuf,
    /// Directory of per-component MDX documentation
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,
    /// Package components are imported from
    #[serde(default = "default_package_name")]
    pub package_name: String,
}

/// LLM settings for code generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Anthropic API key; generation tools fail without it
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_props_path() -> PathBuf {
    PathBuf::from("data/component-props.json")
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs/components")
}

fn default_package_name() -> String {
    "@design-system/components".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_api_url() -> String {
    "https://api.anthropic.com/v1/messages".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            props_path: default_props_path(),
            docs_dir: default_docs_dir(),
            package_name: default_package_name(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_url: default_api_url(),
        }
    }
}

impl DesignSystemConfig {
    /// Load from the config file (if any) and the process environment
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(Self::find_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            }
            Some(path) => {
                tracing::info!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("DESIGN_SYSTEM_PROPS_PATH") {
            self.data.props_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("DESIGN_SYSTEM_DOCS_DIR") {
            self.data.docs_dir = PathBuf::from(dir);
        }
        if let Some(package) = lookup("DESIGN_SYSTEM_PACKAGE") {
            self.data.package_name = package;
        }
        if let Some(key) = lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(model) = lookup("DESIGN_SYSTEM_LLM_MODEL") {
            self.llm.model = model;
        }
        if let Some(tokens) = lookup("DESIGN_SYSTEM_LLM_MAX_TOKENS") {
            match tokens.parse() {
                Ok(n) => self.llm.max_tokens = n,
                Err(_) => tracing::warn!(
                    "Ignoring DESIGN_SYSTEM_LLM_MAX_TOKENS={}: not a number",
                    tokens
                ),
            }
        }
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("DESIGN_SYSTEM_MCP_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".design-system-mcp").join("config.toml"))
    }
}
