use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::order::PackKind;
use crate::runtime::Runtime;

/// Directory under the game dir that holds load-order files
pub const CONFIG_DIR: &str = "config/packorder";

/// Default load-order file for a kind of pack: `<game_dir>/config/packorder/<file>`
pub fn default_order_file(game_dir: &Path, kind: PackKind) -> PathBuf {
    game_dir.join(CONFIG_DIR).join(kind.order_file_name())
}

/// Game directory, defaulting to the current directory.
#[tracing::instrument(skip(runtime))]
pub fn resolve_game_dir<R: Runtime>(runtime: &R, game_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match game_dir {
        Some(path) => path,
        None => runtime.current_dir()?,
    };

    if !runtime.is_dir(&dir) {
        info!("Game directory {} does not exist yet", dir.display());
    }

    Ok(dir)
}
