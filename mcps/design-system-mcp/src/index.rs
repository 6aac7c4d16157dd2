//! Component index: props and docs merged into one record per component
//!
//! The index is the union of both sources. Props-file components come first
//! in file order, followed by components only the docs know about, in docs
//! order. A docs-only component gets an empty prop list; a props-only
//! component gets empty examples, best practices and accessibility notes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::docs::DocsSource;
use crate::error::{DesignSystemError, Result};
use crate::props::PropsLoader;
use crate::types::{ComponentDocs, ComponentIndexEntry, ComponentInfo};

/// Immutable snapshot of every known component
#[derive(Clone, Debug)]
pub struct ComponentIndex {
    entries: Vec<ComponentIndexEntry>,
    positions: HashMap<String, usize>,
    built_at: DateTime<Utc>,
}

impl ComponentIndex {
    /// Merge props and docs into an index
    pub fn build(
        props: Vec<ComponentInfo>,
        docs: Vec<(String, ComponentDocs)>,
        import_path: &str,
    ) -> Self {
        let mut docs_order = Vec::with_capacity(docs.len());
        let mut docs_by_name: HashMap<String, ComponentDocs> = HashMap::with_capacity(docs.len());
        for (name, component_docs) in docs {
            if !docs_by_name.contains_key(&name) {
                docs_order.push(name.clone());
                docs_by_name.insert(name, component_docs);
            }
        }

        let mut index = Self {
            entries: Vec::with_capacity(props.len() + docs_order.len()),
            positions: HashMap::new(),
            built_at: Utc::now(),
        };

        for info in props {
            let component_docs = docs_by_name.remove(&info.name).unwrap_or_default();
            index.push(merge(info, component_docs, import_path));
        }

        for name in docs_order {
            if let Some(component_docs) = docs_by_name.remove(&name) {
                let info = ComponentInfo {
                    name,
                    props: Vec::new(),
                    description: None,
                };
                index.push(merge(info, component_docs, import_path));
            }
        }

        index
    }

    fn push(&mut self, entry: ComponentIndexEntry) {
        if self.positions.contains_key(entry.name()) {
            return;
        }
        self.positions
            .insert(entry.name().to_string(), self.entries.len());
        self.entries.push(entry);
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&ComponentIndexEntry> {
        self.positions.get(name).map(|&i| &self.entries[i])
    }

    /// Entries in index order
    pub fn entries(&self) -> &[ComponentIndexEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}

fn merge(mut info: ComponentInfo, docs: ComponentDocs, import_path: &str) -> ComponentIndexEntry {
    if info.description.is_none() {
        info.description = docs.description;
    }
    ComponentIndexEntry {
        info,
        examples: docs.examples,
        best_practices: docs.best_practices,
        accessibility: docs.accessibility,
        import_path: import_path.to_string(),
        category: docs.category,
        status: docs.status,
    }
}

/// Lazily built, memoized component index
///
/// The first [`get`](Self::get) builds from the loaders; later calls reuse
/// that result until [`refresh`](Self::refresh) drops it. A failed build
/// leaves nothing cached.
pub struct IndexCache {
    props: PropsLoader,
    docs: Box<dyn DocsSource>,
    import_path: String,
    cached: RwLock<Option<Arc<ComponentIndex>>>,
}

impl IndexCache {
    pub fn new(
        props: PropsLoader,
        docs: impl DocsSource + 'static,
        import_path: impl Into<String>,
    ) -> Self {
        Self {
            props,
            docs: Box::new(docs),
            import_path: import_path.into(),
            cached: RwLock::new(None),
        }
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// The cached index, building it first if needed
    pub fn get(&self) -> Result<Arc<ComponentIndex>> {
        if let Some(index) = self.cached.read().as_ref() {
            debug!("Component index cache hit");
            return Ok(Arc::clone(index));
        }

        let mut cached = self.cached.write();
        // Another caller may have built it while we waited for the lock
        if let Some(index) = cached.as_ref() {
            return Ok(Arc::clone(index));
        }

        let index = Arc::new(self.build()?);
        *cached = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Drop the cached index; the next `get` rebuilds from disk
    pub fn refresh(&self) {
        *self.cached.write() = None;
        info!("Component index invalidated");
    }

    /// Drop the cached index and build a new one now
    pub fn rebuild(&self) -> Result<Arc<ComponentIndex>> {
        self.refresh();
        self.get()
    }

    pub fn is_built(&self) -> bool {
        self.cached.read().is_some()
    }

    fn build(&self) -> Result<ComponentIndex> {
        let props = self.props.load().map_err(DesignSystemError::config)?;
        let docs = self.docs.load().map_err(DesignSystemError::config)?;

        let (props_count, docs_count) = (props.len(), docs.len());
        let index = ComponentIndex::build(props, docs, &self.import_path);

        info!(
            components = index.len(),
            with_props = props_count,
            with_docs = docs_count,
            "Built component index from {}",
            self.props.path().display()
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CodeExample, ComponentProp};

    fn info(name: &str, props: &[&str]) -> ComponentInfo {
        ComponentInfo {
            name: name.to_string(),
            props: props
                .iter()
                .map(|p| ComponentProp {
                    name: p.to_string(),
                    prop_type: "string".to_string(),
                    required: false,
                    description: None,
                    default_value: None,
                })
                .collect(),
            description: None,
        }
    }

    fn docs(category: &str) -> ComponentDocs {
        ComponentDocs {
            description: Some(format!("{} docs", category)),
            examples: vec![CodeExample {
                title: "Basic".to_string(),
                language: "tsx".to_string(),
                code: "<X />".to_string(),
            }],
            best_practices: vec!["Do it".to_string()],
            accessibility: vec!["Label it".to_string()],
            category: Some(category.to_string()),
            status: Some("stable".to_string()),
        }
    }

    #[test]
    fn test_union_order_props_then_docs_only() {
        let index = ComponentIndex::build(
            vec![info("Button", &["size"]), info("Card", &[])],
            vec![
                ("Tooltip".to_string(), docs("Overlay")),
                ("Button".to_string(), docs("Actions")),
                ("Alert".to_string(), docs("Feedback")),
            ],
            "@ds/ui",
        );

        let names: Vec<&str> = index.names().collect();
        assert_eq!(names, vec!["Button", "Card", "Tooltip", "Alert"]);
    }

    #[test]
    fn test_props_only_entry_has_empty_docs() {
        let index = ComponentIndex::build(vec![info("Card", &["padding"])], vec![], "@ds/ui");
        let card = index.get("Card").unwrap();

        assert_eq!(card.info.props.len(), 1);
        assert!(card.examples.is_empty());
        assert!(card.best_practices.is_empty());
        assert!(card.accessibility.is_empty());
        assert!(card.category.is_none());
        assert!(card.status.is_none());
        assert_eq!(card.import_path, "@ds/ui");
    }

    #[test]
    fn test_docs_only_entry_has_empty_props() {
        let index = ComponentIndex::build(vec![], vec![("Tooltip".to_string(), docs("Overlay"))], "@ds/ui");
        let tooltip = index.get("Tooltip").unwrap();

        assert!(tooltip.info.props.is_empty());
        assert_eq!(tooltip.examples.len(), 1);
        assert_eq!(tooltip.best_practices, vec!["Do it".to_string()]);
        assert_eq!(tooltip.description(), Some("Overlay docs"));
    }

    #[test]
    fn test_props_description_wins() {
        let mut button = info("Button", &[]);
        button.description = Some("From props".to_string());
        let index = ComponentIndex::build(vec![button], vec![("Button".to_string(), docs("Actions"))], "x");

        let entry = index.get("Button").unwrap();
        assert_eq!(entry.description(), Some("From props"));
        assert_eq!(entry.category.as_deref(), Some("Actions"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let index = ComponentIndex::build(vec![info("Button", &[])], vec![], "x");
        assert!(index.get("Button").is_some());
        assert!(index.get("button").is_none());
    }

    struct NoDocs;

    impl DocsSource for NoDocs {
        fn load(&self) -> anyhow::Result<Vec<(String, ComponentDocs)>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_cache_memoizes_until_refresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("props.json");
        std::fs::write(&path, r#"{ "Button": { "props": [] } }"#).unwrap();

        let cache = IndexCache::new(PropsLoader::new(&path), NoDocs, "@ds/ui");
        assert!(!cache.is_built());
        assert_eq!(cache.get().unwrap().len(), 1);
        assert!(cache.is_built());

        std::fs::write(&path, r#"{ "Button": { "props": [] }, "Card": { "props": [] } }"#).unwrap();
        assert_eq!(cache.get().unwrap().len(), 1);

        cache.refresh();
        assert!(!cache.is_built());
        assert_eq!(cache.get().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_build_caches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("props.json");
        std::fs::write(&path, "{ not json").unwrap();

        let cache = IndexCache::new(PropsLoader::new(&path), NoDocs, "@ds/ui");
        assert!(matches!(cache.get(), Err(DesignSystemError::Config(_))));
        assert!(!cache.is_built());

        std::fs::write(&path, r#"{ "Card": {} }"#).unwrap();
        assert_eq!(cache.get().unwrap().len(), 1);
    }
}
