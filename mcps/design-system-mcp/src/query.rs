//! Read-only queries over a [`ComponentIndex`]

use std::collections::BTreeSet;

use crate::error::{DesignSystemError, Result};
use crate::index::ComponentIndex;
use crate::types::{ComponentIndexEntry, ComponentList, ComponentSummary};

/// Optional filters for [`list`]; both compare case-insensitively
#[derive(Clone, Debug, Default)]
pub struct ListFilter {
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Names of components whose name, description or category contains `query`
///
/// Case-insensitive substring match, results in index order. An empty query
/// matches everything.
pub fn search(index: &ComponentIndex, query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    index
        .entries()
        .iter()
        .filter(|entry| haystack(entry).contains(&needle))
        .map(|entry| entry.name().to_string())
        .collect()
}

fn haystack(entry: &ComponentIndexEntry) -> String {
    format!(
        "{} {} {}",
        entry.name(),
        entry.description().unwrap_or_default(),
        entry.category.as_deref().unwrap_or_default()
    )
    .to_lowercase()
}

/// Summaries sorted by name, plus every category in the unfiltered index
pub fn list(index: &ComponentIndex, filter: &ListFilter) -> ComponentList {
    let categories: BTreeSet<String> = index
        .entries()
        .iter()
        .filter_map(|e| e.category.as_deref())
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
        .collect();

    let mut components: Vec<ComponentSummary> = index
        .entries()
        .iter()
        .filter(|e| matches_filter(e.category.as_deref(), filter.category.as_deref()))
        .filter(|e| matches_filter(e.status.as_deref(), filter.status.as_deref()))
        .map(ComponentIndexEntry::summary)
        .collect();
    components.sort_by(|a, b| a.name.cmp(&b.name));

    ComponentList {
        total: components.len(),
        components,
        categories: categories.into_iter().collect(),
    }
}

fn matches_filter(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value.is_some_and(|v| v.to_lowercase() == wanted.to_lowercase()),
    }
}

/// Look a component up by name
///
/// Exact match first; otherwise the first entry in index order whose name
/// matches ignoring case.
pub fn get_info<'a>(index: &'a ComponentIndex, name: &str) -> Result<&'a ComponentIndexEntry> {
    if let Some(entry) = index.get(name) {
        return Ok(entry);
    }

    let lowered = name.to_lowercase();
    index
        .names()
        .find(|candidate| candidate.to_lowercase() == lowered)
        .and_then(|matched| index.get(matched))
        .ok_or_else(|| DesignSystemError::not_found(name))
}
