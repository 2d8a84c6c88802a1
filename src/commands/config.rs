use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use super::paths::{default_order_file, resolve_game_dir};
use crate::order::PackKind;
use crate::runtime::Runtime;

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub order_file: PathBuf,
}

impl<R: Runtime> Config<R> {
    pub fn new(
        runtime: R,
        game_dir: Option<PathBuf>,
        kind: PackKind,
        order_file: Option<PathBuf>,
    ) -> Result<Self> {
        let game_dir = resolve_game_dir(&runtime, game_dir)?;
        let order_file = order_file.unwrap_or_else(|| default_order_file(&game_dir, kind));
        debug!("Using {} pack load order {}", kind, order_file.display());

        Ok(Self {
            runtime,
            order_file,
        })
    }
}
