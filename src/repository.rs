//! Pack repository: the "rebuild selected packs" entry point.

use anyhow::Result;
use log::{debug, warn};
use std::collections::HashMap;

use crate::catalog::PackCatalog;
use crate::merge::{merge, unknown_ids};
use crate::order::LoadOrder;
use crate::pack::Pack;

/// Available packs plus the optional user load order.
#[derive(Debug, Clone)]
pub struct PackRepository {
    available: HashMap<String, Pack>,
    load_order: Option<LoadOrder>,
}

impl PackRepository {
    pub fn new(available: HashMap<String, Pack>) -> Self {
        Self {
            available,
            load_order: None,
        }
    }

    pub fn from_catalog(catalog: &PackCatalog) -> Result<Self> {
        Ok(Self::new(catalog.available()?))
    }

    pub fn with_load_order(mut self, load_order: LoadOrder) -> Self {
        self.load_order = Some(load_order);
        self
    }

    pub fn available(&self) -> &HashMap<String, Pack> {
        &self.available
    }

    /// Preferred ids from the load order; empty when there is none.
    pub fn preferred_ids(&self) -> &[String] {
        self.load_order
            .as_ref()
            .map(|o| o.load_order.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve requested ids to available packs, in order. Unknown ids are dropped.
    pub fn resolve_names(&self, names: &[String]) -> Vec<Pack> {
        names
            .iter()
            .filter_map(|name| match self.available.get(name) {
                Some(pack) => Some(pack.clone()),
                None => {
                    debug!("Requested pack {} is not available", name);
                    None
                }
            })
            .collect()
    }

    /// Compute the final enabled pack list for the requested ids.
    #[tracing::instrument(skip(self, enabled_names))]
    pub fn rebuild_selected(&self, enabled_names: &[String]) -> Result<Vec<Pack>> {
        let default_enabled = self.resolve_names(enabled_names);
        let preferred = self.preferred_ids();

        for id in unknown_ids(&self.available, preferred) {
            warn!("Load order names unknown pack '{}', skipping", id);
        }

        let enabled = merge(&self.available, &default_enabled, preferred)?;
        debug!(
            "Enabled {} pack(s) from {} requested, {} preferred",
            enabled.len(),
            enabled_names.len(),
            preferred.len()
        );
        Ok(enabled)
    }
}
