//! Default-position directives and how they splice a pack into a list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Pack;

/// Where a pack goes when it is inserted into an enabled list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PackPosition {
    /// Index 0
    BeforeAll,
    /// End of the list
    #[default]
    AfterAll,
    /// Immediately before the first pack with this id
    Before(String),
    /// Immediately after the first pack with this id
    After(String),
}

impl PackPosition {
    /// Insert `pack` into `packs` as this directive dictates and return the
    /// index it landed at.
    ///
    /// The caller is responsible for checking that `pack` is not already in
    /// `packs`.
    pub fn insert(&self, packs: &mut Vec<Pack>, pack: Pack) -> Result<usize, UnresolvedAnchorError> {
        let index = match self {
            PackPosition::BeforeAll => 0,
            PackPosition::AfterAll => packs.len(),
            PackPosition::Before(anchor) => anchor_index(packs, &pack, anchor, Placement::Before)?,
            PackPosition::After(anchor) => {
                anchor_index(packs, &pack, anchor, Placement::After)? + 1
            }
        };
        packs.insert(index, pack);
        Ok(index)
    }
}

impl fmt::Display for PackPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackPosition::BeforeAll => write!(f, "before-all"),
            PackPosition::AfterAll => write!(f, "after-all"),
            PackPosition::Before(id) => write!(f, "before({})", id),
            PackPosition::After(id) => write!(f, "after({})", id),
        }
    }
}

fn anchor_index(
    packs: &[Pack],
    pack: &Pack,
    anchor: &str,
    placement: Placement,
) -> Result<usize, UnresolvedAnchorError> {
    packs
        .iter()
        .position(|p| p.id == anchor)
        .ok_or_else(|| UnresolvedAnchorError {
            pack: pack.id.clone(),
            anchor: anchor.to_string(),
            placement,
        })
}

/// Side of the anchor a relative directive targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Before => write!(f, "before"),
            Placement::After => write!(f, "after"),
        }
    }
}

/// A relative position directive named a pack that is not in the working list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedAnchorError {
    /// The pack being inserted
    pub pack: String,
    /// The missing anchor pack
    pub anchor: String,
    pub placement: Placement,
}

impl fmt::Display for UnresolvedAnchorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot place pack '{}' {} '{}': '{}' is not enabled",
            self.pack, self.placement, self.anchor, self.anchor
        )
    }
}

impl std::error::Error for UnresolvedAnchorError {}
