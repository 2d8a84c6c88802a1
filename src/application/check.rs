//! Check action - validates a load order against a pack catalog.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::open_repository;
use crate::merge::unknown_ids;
use crate::pack::Pack;
use crate::runtime::Runtime;

/// Findings for a load order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckReport {
    /// Load-order ids that name no available pack
    pub unknown_ids: Vec<String>,
    /// Optional load-order packs; only required packs are placed from the load
    /// order, so these end up disabled
    pub skipped_ids: Vec<String>,
    /// The enabled order the load order produces
    pub resolved: Vec<Pack>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_ids.is_empty() && self.skipped_ids.is_empty()
    }
}

pub struct CheckAction<'a, R: Runtime> {
    runtime: &'a R,
    order_file: PathBuf,
}

impl<'a, R: Runtime> CheckAction<'a, R> {
    pub fn new(runtime: &'a R, order_file: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            order_file: order_file.into(),
        }
    }

    /// Unresolved anchors are returned as errors, not findings.
    #[tracing::instrument(skip(self))]
    pub fn check(&self, catalog_path: &Path) -> Result<CheckReport> {
        let (catalog, repository) = open_repository(self.runtime, catalog_path, &self.order_file)?;
        let preferred = repository.preferred_ids();

        let unknown = unknown_ids(repository.available(), preferred)
            .into_iter()
            .map(str::to_string)
            .collect();

        let skipped = preferred
            .iter()
            .filter_map(|id| repository.available().get(id))
            .filter(|p| !p.required)
            .map(|p| p.id.clone())
            .collect();

        let resolved = repository.rebuild_selected(&catalog.selected)?;

        Ok(CheckReport {
            unknown_ids: unknown,
            skipped_ids: skipped,
            resolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{catalog_path, order_path, runtime_with};
    use crate::pack::contains_id;

    #[test]
    fn test_check_clean_order() {
        let runtime = runtime_with(Some(r#"{"loadOrder": ["paxi/a", "mod/core"]}"#));
        let report = CheckAction::new(&runtime, order_path())
            .check(&catalog_path())
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(report.resolved.len(), 5);
    }

    #[test]
    fn test_check_reports_unknown_and_skipped() {
        let runtime = runtime_with(Some(
            r#"{"loadOrder": ["ghost", "file/unused", "paxi/a", "other"]}"#,
        ));
        let report = CheckAction::new(&runtime, order_path())
            .check(&catalog_path())
            .unwrap();

        assert!(!report.is_clean());
        assert_eq!(report.unknown_ids, vec!["ghost".to_string(), "other".to_string()]);
        assert_eq!(report.skipped_ids, vec!["file/unused".to_string()]);
        assert!(!contains_id(&report.resolved, "file/unused"));
    }

    #[test]
    fn test_check_reports_selected_optional_pack_as_skipped() {
        // file/user is selected by the host, but listing it in the load order
        // takes it out of the enabled list.
        let runtime = runtime_with(Some(r#"{"loadOrder": ["file/user", "paxi/b"]}"#));
        let report = CheckAction::new(&runtime, order_path())
            .check(&catalog_path())
            .unwrap();

        assert_eq!(report.skipped_ids, vec!["file/user".to_string()]);
        assert!(!contains_id(&report.resolved, "file/user"));
        assert!(contains_id(&report.resolved, "paxi/b"));
    }

    #[test]
    fn test_check_without_order_file() {
        let runtime = runtime_with(None);
        let report = CheckAction::new(&runtime, order_path())
            .check(&catalog_path())
            .unwrap();

        assert!(report.is_clean());
        assert!(contains_id(&report.resolved, "mod/core"));
    }
}
