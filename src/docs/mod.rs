//! Read-only documentation dataset.
//!
//! Loaded once at startup from a JSON file mapping component name to its
//! documentation record. The ask path never consults this store; subjects
//! stay opaque strings there, and an unknown subject is answered like any
//! other. Only the documentation endpoints read from it.

pub mod models;

pub use models::{CodeExample, ComponentDoc, Preview, Variant};

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// In-memory component documentation, keyed by component name.
#[derive(Debug, Default)]
pub struct DocumentationStore {
    components: HashMap<String, ComponentDoc>,
}

impl DocumentationStore {
    /// Load the dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let components: HashMap<String, ComponentDoc> = serde_json::from_str(&raw)?;
        Ok(Self { components })
    }

    /// A store with no components, used when the dataset file is missing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDoc> {
        self.components.get(name)
    }

    /// Component names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn all(&self) -> &HashMap<String, ComponentDoc> {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
