//! User-editable load-order files.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::runtime::Runtime;

/// Which pack list a load order applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum PackKind {
    #[default]
    Data,
    Resource,
}

impl PackKind {
    /// File name of the load order for this kind of pack.
    pub fn order_file_name(&self) -> &'static str {
        match self {
            PackKind::Data => "datapack_load_order.json",
            PackKind::Resource => "resourcepack_load_order.json",
        }
    }
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackKind::Data => write!(f, "data"),
            PackKind::Resource => write!(f, "resource"),
        }
    }
}

/// Ordered pack ids as stored in a load-order file:
/// `{"loadOrder": ["first", "second"]}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoadOrder {
    #[serde(default)]
    pub load_order: Vec<String>,
}

impl LoadOrder {
    pub fn new(ids: Vec<String>) -> Self {
        LoadOrder { load_order: ids }
    }

    pub fn is_empty(&self) -> bool {
        self.load_order.is_empty()
    }

    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read load order from {}", path.display()))?;
        let order: LoadOrder = serde_json::from_str(&content)
            .with_context(|| format!("Invalid load order file {}", path.display()))?;
        debug!("Loaded {} id(s) from {}", order.load_order.len(), path.display());
        Ok(order)
    }

    /// Like [`LoadOrder::load`], but a missing file is an empty order.
    #[tracing::instrument(skip(runtime))]
    pub fn load_or_default<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        if !runtime.exists(path) {
            debug!("No load order at {}, using default ordering", path.display());
            return Ok(Self::default());
        }
        Self::load(runtime, path)
    }

    #[tracing::instrument(skip(self, runtime))]
    pub fn save<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !runtime.exists(parent) {
                runtime.create_dir_all(parent)?;
            }
        }
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        runtime
            .write(path, json.as_bytes())
            .with_context(|| format!("Failed to write load order to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    #[test]
    fn test_order_file_names() {
        assert_eq!(PackKind::Data.order_file_name(), "datapack_load_order.json");
        assert_eq!(
            PackKind::Resource.order_file_name(),
            "resourcepack_load_order.json"
        );
    }

    #[test]
    fn test_load_order_json_shape() {
        let order = LoadOrder::new(vec!["file/a".into(), "file/b".into()]);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"loadOrder":["file/a","file/b"]}"#);
    }

    #[test]
    fn test_load_order_ignores_unknown_fields() {
        let json = r#"{"description": "my packs", "loadOrder": ["x"]}"#;
        let order: LoadOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.load_order, vec!["x".to_string()]);
    }

    #[test]
    fn test_load() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/game/config/packorder/datapack_load_order.json");

        runtime
            .expect_read_to_string()
            .with(eq(path.clone()))
            .returning(|_| Ok(r#"{"loadOrder": ["b", "a"]}"#.to_string()));

        let order = LoadOrder::load(&runtime, &path).unwrap();
        assert_eq!(order.load_order, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/game/order.json");

        runtime
            .expect_read_to_string()
            .returning(|_| Ok(r#"{"loadOrder": "not a list"}"#.to_string()));

        let err = LoadOrder::load(&runtime, &path).unwrap_err();
        assert!(err.to_string().contains("Invalid load order file"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/game/order.json");

        runtime
            .expect_exists()
            .with(eq(path.clone()))
            .returning(|_| false);
        runtime.expect_read_to_string().never();

        let order = LoadOrder::load_or_default(&runtime, &path).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let mut runtime = MockRuntime::new();
        let dir = PathBuf::from("/game/config/packorder");
        let path = dir.join("datapack_load_order.json");

        runtime
            .expect_exists()
            .with(eq(dir.clone()))
            .returning(|_| false);
        runtime
            .expect_create_dir_all()
            .with(eq(dir))
            .times(1)
            .returning(|_| Ok(()));
        runtime
            .expect_write()
            .withf(|p, contents| {
                p.ends_with("datapack_load_order.json")
                    && String::from_utf8_lossy(contents).contains("\"loadOrder\"")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        LoadOrder::new(vec!["a".into()]).save(&runtime, &path).unwrap();
    }

    #[test]
    fn test_save_and_load_on_disk() {
        let runtime = crate::runtime::RealRuntime;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/resourcepack_load_order.json");

        let order = LoadOrder::new(vec!["z".into(), "y".into()]);
        order.save(&runtime, &path).unwrap();

        assert_eq!(LoadOrder::load(&runtime, &path).unwrap(), order);
    }
}
