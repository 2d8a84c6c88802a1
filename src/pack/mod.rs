//! Pack model: identity, required flag and default position.

mod position;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use position::{PackPosition, Placement, UnresolvedAnchorError};

/// A toggleable bundle of game assets or data.
///
/// Two packs are the same pack when their ids match; the other fields only
/// describe how the pack is enabled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    pub id: String,
    /// Required packs cannot be disabled by the user.
    #[serde(default)]
    pub required: bool,
    /// Where the pack is spliced into the enabled list when it is not already there.
    #[serde(default)]
    pub position: PackPosition,
}

impl Pack {
    pub fn new(id: impl Into<String>, required: bool, position: PackPosition) -> Self {
        Pack {
            id: id.into(),
            required,
            position,
        }
    }

    pub fn required(id: impl Into<String>, position: PackPosition) -> Self {
        Self::new(id, true, position)
    }

    pub fn optional(id: impl Into<String>, position: PackPosition) -> Self {
        Self::new(id, false, position)
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Returns true when a pack with `id` is in `packs`.
pub fn contains_id(packs: &[Pack], id: &str) -> bool {
    packs.iter().any(|p| p.id == id)
}
