use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    application::{CheckAction, InitAction, InitOutcome, ResolveAction},
    order::PackKind,
    runtime::Runtime,
};

pub mod config;
mod paths;

pub use paths::{CONFIG_DIR, default_order_file};

use config::Config;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub game_dir: Option<PathBuf>,
    pub kind: PackKind,
    pub order_file: Option<PathBuf>,
}

impl GlobalOptions {
    fn into_config<R: Runtime>(self, runtime: R) -> Result<Config<R>> {
        Config::new(runtime, self.game_dir, self.kind, self.order_file)
    }
}

/// Print the final enabled pack order
#[tracing::instrument(skip(runtime, options))]
pub fn resolve<R: Runtime>(
    runtime: R,
    catalog: &Path,
    json: bool,
    options: GlobalOptions,
) -> Result<()> {
    let config = options.into_config(runtime)?;
    let packs = ResolveAction::new(&config.runtime, &config.order_file).resolve(catalog)?;
    debug!("Resolved {} enabled pack(s)", packs.len());

    if json {
        let ids: Vec<&str> = packs.iter().map(|p| p.id.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else {
        for pack in &packs {
            println!("{}", pack.id);
        }
    }
    Ok(())
}

/// Report problems in the load order
#[tracing::instrument(skip(runtime, options))]
pub fn check<R: Runtime>(runtime: R, catalog: &Path, options: GlobalOptions) -> Result<()> {
    let config = options.into_config(runtime)?;
    let report = CheckAction::new(&config.runtime, &config.order_file).check(catalog)?;

    for id in &report.unknown_ids {
        println!("unknown: {}", id);
    }
    for id in &report.skipped_ids {
        println!("skipped (optional): {}", id);
    }

    if report.is_clean() {
        println!(
            "Load order {} is OK ({} pack(s) enabled)",
            config.order_file.display(),
            report.resolved.len()
        );
    } else {
        println!(
            "Load order {} has {} unknown and {} skipped pack(s)",
            config.order_file.display(),
            report.unknown_ids.len(),
            report.skipped_ids.len()
        );
    }
    Ok(())
}

/// Create the load-order file
#[tracing::instrument(skip(runtime, options))]
pub fn init<R: Runtime>(runtime: R, force: bool, options: GlobalOptions) -> Result<()> {
    let config = options.into_config(runtime)?;
    let action = InitAction::new(&config.runtime, &config.order_file);

    match action.init(force)? {
        InitOutcome::Created => println!("Created {}", action.order_file().display()),
        InitOutcome::Overwritten => println!("Overwrote {}", action.order_file().display()),
        InitOutcome::AlreadyExists => println!(
            "{} already exists. Use --force to overwrite it.",
            action.order_file().display()
        ),
    }
    Ok(())
}
