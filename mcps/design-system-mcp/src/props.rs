//! Props source loading
//!
//! The props file is a JSON object keyed by component name:
//!
//! ```json
//! {
//!   "Button": {
//!     "description": "Clickable action",
//!     "props": [{ "name": "variant", "type": "'primary' | 'ghost'", "required": false }]
//!   }
//! }
//! ```
//!
//! Components come back in file order. Every entry is validated up front so
//! a malformed file fails the whole load instead of leaking into queries.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::types::{ComponentInfo, ComponentProp};

#[derive(Debug, Deserialize)]
struct RawComponent {
    #[serde(default)]
    props: Vec<RawProp>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProp {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    prop_type: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    default_value: Option<Value>,
}

/// Reads the props file
#[derive(Clone, Debug)]
pub struct PropsLoader {
    path: PathBuf,
}

impl PropsLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the props file
    pub fn load(&self) -> Result<Vec<ComponentInfo>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read props file: {}", self.path.display()))?;
        parse_props(&content)
            .with_context(|| format!("Invalid props file: {}", self.path.display()))
    }
}

/// Parse props JSON into component records, in source order
pub fn parse_props(source: &str) -> Result<Vec<ComponentInfo>> {
    let root: Value = serde_json::from_str(source).context("Failed to parse props JSON")?;
    let Value::Object(entries) = root else {
        bail!("expected a JSON object keyed by component name");
    };

    entries
        .into_iter()
        .map(|(name, value)| {
            validate_component(&name, value).with_context(|| format!("component '{}'", name))
        })
        .collect()
}

fn validate_component(name: &str, value: Value) -> Result<ComponentInfo> {
    if name.trim().is_empty() {
        bail!("component name must not be empty");
    }
    if !value.is_object() {
        bail!("expected an object with a 'props' array");
    }

    let raw: RawComponent = serde_json::from_value(value)?;

    let props = raw
        .props
        .into_iter()
        .enumerate()
        .map(|(i, prop)| {
            if prop.name.trim().is_empty() {
                bail!("prop #{} has no name", i);
            }
            if prop.prop_type.trim().is_empty() {
                bail!("prop '{}' has no type", prop.name);
            }
            Ok(ComponentProp {
                name: prop.name,
                prop_type: prop.prop_type,
                required: prop.required,
                description: prop.description,
                default_value: prop.default_value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ComponentInfo {
        name: name.to_string(),
        props,
        description: raw.description,
    })
}
