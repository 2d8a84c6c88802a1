//! Application layer - actions behind each CLI command.
//!
//! Actions return data; printing is left to the `commands` layer.

mod check;
mod init;
mod resolve;

use anyhow::Result;
use std::path::Path;

use crate::catalog::PackCatalog;
use crate::order::LoadOrder;
use crate::repository::PackRepository;
use crate::runtime::Runtime;

pub use check::{CheckAction, CheckReport};
pub use init::{InitAction, InitOutcome};
pub use resolve::ResolveAction;

/// Load the catalog and the load order (if any) into a repository.
fn open_repository<R: Runtime>(
    runtime: &R,
    catalog_path: &Path,
    order_file: &Path,
) -> Result<(PackCatalog, PackRepository)> {
    let catalog = PackCatalog::load(runtime, catalog_path)?;
    let load_order = LoadOrder::load_or_default(runtime, order_file)?;
    let repository = PackRepository::from_catalog(&catalog)?.with_load_order(load_order);
    Ok((catalog, repository))
}
