//! Splices a preferred load order into the default enabled pack list.

use log::debug;
use std::collections::HashMap;

use crate::pack::{Pack, UnresolvedAnchorError, contains_id};

/// Build the final enabled pack order.
///
/// - `available`: every discoverable pack, keyed by id
/// - `default_enabled`: the packs the host would enable, in host order
/// - `preferred_ids`: the user's load order
///
/// Preferred packs are taken out of the default list and spliced back in
/// preference order, each at its default position. Only required preferred
/// packs are re-added; optional ones stay out even when the host enabled
/// them. Every other required pack is then added in sorted id order.
/// Unknown preferred ids are skipped; see [`unknown_ids`].
///
/// Neither input is modified.
#[tracing::instrument(skip(available, default_enabled, preferred_ids))]
pub fn merge(
    available: &HashMap<String, Pack>,
    default_enabled: &[Pack],
    preferred_ids: &[String],
) -> Result<Vec<Pack>, UnresolvedAnchorError> {
    let mut enabled: Vec<Pack> = Vec::with_capacity(available.len().max(default_enabled.len()));
    for pack in default_enabled {
        if !contains_id(&enabled, &pack.id) {
            enabled.push(pack.clone());
        }
    }

    let preferred: Vec<&Pack> = preferred_ids
        .iter()
        .filter_map(|id| available.get(id))
        .collect();

    enabled.retain(|p| !preferred.iter().any(|q| q.id == p.id));

    for pack in &preferred {
        if pack.required && !contains_id(&enabled, &pack.id) {
            let index = pack.position.insert(&mut enabled, (*pack).clone())?;
            debug!("Placed preferred pack {} at {} ({})", pack.id, index, pack.position);
        }
    }

    let mut ids: Vec<&String> = available.keys().collect();
    ids.sort();
    for id in ids {
        let pack = &available[id];
        if pack.required && !contains_id(&enabled, &pack.id) {
            let index = pack.position.insert(&mut enabled, pack.clone())?;
            debug!("Placed required pack {} at {} ({})", pack.id, index, pack.position);
        }
    }

    Ok(enabled)
}

/// The ids in `ids` that do not name an available pack, in order.
pub fn unknown_ids<'a>(available: &HashMap<String, Pack>, ids: &'a [String]) -> Vec<&'a str> {
    ids.iter()
        .filter(|id| !available.contains_key(id.as_str()))
        .map(String::as_str)
        .collect()
}
