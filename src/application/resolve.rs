//! Resolve action - computes the final enabled pack order.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::open_repository;
use crate::pack::Pack;
use crate::runtime::Runtime;

pub struct ResolveAction<'a, R: Runtime> {
    runtime: &'a R,
    order_file: PathBuf,
}

impl<'a, R: Runtime> ResolveAction<'a, R> {
    pub fn new(runtime: &'a R, order_file: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            order_file: order_file.into(),
        }
    }

    /// Enabled packs for the catalog's selection, with the load order applied.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, catalog_path: &Path) -> Result<Vec<Pack>> {
        let (catalog, repository) = open_repository(self.runtime, catalog_path, &self.order_file)?;
        repository.rebuild_selected(&catalog.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{catalog_path, order_path, runtime_with};
    use crate::pack::UnresolvedAnchorError;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    fn ids(packs: &[Pack]) -> Vec<&str> {
        packs.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_resolve_without_order_file() {
        let runtime = runtime_with(None);
        let action = ResolveAction::new(&runtime, order_path());

        let packs = action.resolve(&catalog_path()).unwrap();
        assert_eq!(
            ids(&packs),
            vec!["vanilla", "file/user", "mod/core", "paxi/a", "paxi/b"]
        );
    }

    #[test]
    fn test_resolve_with_order_file() {
        let runtime = runtime_with(Some(r#"{"loadOrder": ["paxi/b", "paxi/a"]}"#));
        let action = ResolveAction::new(&runtime, order_path());

        let packs = action.resolve(&catalog_path()).unwrap();
        assert_eq!(
            ids(&packs),
            vec!["vanilla", "file/user", "paxi/b", "paxi/a", "mod/core"]
        );
    }

    #[test]
    fn test_resolve_unresolved_anchor() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .with(eq(catalog_path()))
            .returning(|_| {
                Ok(r#"{"packs": [{"id": "a", "required": true, "position": {"before": "b"}}]}"#
                    .to_string())
            });
        runtime.expect_exists().returning(|_| false);

        let action = ResolveAction::new(&runtime, order_path());
        let err = action.resolve(&catalog_path()).unwrap_err();
        assert!(err.downcast_ref::<UnresolvedAnchorError>().is_some());
    }
}
