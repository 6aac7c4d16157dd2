//! Mock fixture store
//!
//! Fixtures are JSON files in a single directory, addressed by stem
//! (`contacts` reads `contacts.json`). Parsed documents are kept in memory
//! until their TTL runs out.

use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid fixture name '{0}'")]
    InvalidName(String),

    #[error("Fixture {name}.json not found")]
    NotFound { name: String },

    #[error("Failed to read fixture {name}.json: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Fixture {name}.json is not valid JSON: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

struct CachedFixture {
    value: Arc<Value>,
    loaded_at: Instant,
}

/// TTL cache over a fixture directory
pub struct FixtureStore {
    dir: PathBuf,
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedFixture>>,
}

impl FixtureStore {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fixture by stem, served from cache while fresh
    pub fn load(&self, name: &str) -> Result<Arc<Value>, FixtureError> {
        if !is_valid_name(name) {
            return Err(FixtureError::InvalidName(name.to_string()));
        }

        if let Some(cached) = self.entries.lock().get(name) {
            if cached.loaded_at.elapsed() < self.ttl {
                tracing::debug!("Fixture cache hit: {}", name);
                return Ok(cached.value.clone());
            }
        }

        let value = Arc::new(self.read(name)?);
        self.entries.lock().insert(
            name.to_string(),
            CachedFixture {
                value: value.clone(),
                loaded_at: Instant::now(),
            },
        );
        Ok(value)
    }

    /// Drop every cached fixture
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn cached_count(&self) -> usize {
        self.entries.lock().len()
    }

    fn read(&self, name: &str) -> Result<Value, FixtureError> {
        let path = self.dir.join(format!("{}.json", name));
        let content = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FixtureError::NotFound {
                    name: name.to_string(),
                }
            } else {
                FixtureError::Read {
                    name: name.to_string(),
                    source,
                }
            }
        })?;

        tracing::debug!("Loaded fixture {:?}", path);
        serde_json::from_str(&content).map_err(|source| FixtureError::Parse {
            name: name.to_string(),
            source,
        })
    }
}

// Names come from query strings; keep them inside the fixture directory
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
