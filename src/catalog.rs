//! Pack catalog: the already-discovered packs and the host's selection.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::pack::Pack;
use crate::runtime::Runtime;

/// JSON description of every available pack plus the ids the host asks to enable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PackCatalog {
    #[serde(default)]
    pub packs: Vec<Pack>,
    /// Requested enabled pack ids, in host order
    #[serde(default)]
    pub selected: Vec<String>,
}

impl PackCatalog {
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read pack catalog from {}", path.display()))?;
        let catalog: PackCatalog = serde_json::from_str(&content)
            .with_context(|| format!("Invalid pack catalog {}", path.display()))?;
        Ok(catalog)
    }

    /// Available packs keyed by id. Empty or repeated ids are rejected.
    pub fn available(&self) -> Result<HashMap<String, Pack>> {
        let mut available = HashMap::with_capacity(self.packs.len());
        for pack in &self.packs {
            if pack.id.trim().is_empty() {
                anyhow::bail!("Pack catalog contains a pack with an empty id");
            }
            if available.insert(pack.id.clone(), pack.clone()).is_some() {
                anyhow::bail!("Pack '{}' is listed more than once in the catalog", pack.id);
            }
        }
        Ok(available)
    }
}
