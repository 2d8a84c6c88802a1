//! Init action - creates an empty load-order file.

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::order::LoadOrder;
use crate::runtime::Runtime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    AlreadyExists,
}

pub struct InitAction<'a, R: Runtime> {
    runtime: &'a R,
    order_file: PathBuf,
}

impl<'a, R: Runtime> InitAction<'a, R> {
    pub fn new(runtime: &'a R, order_file: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            order_file: order_file.into(),
        }
    }

    pub fn order_file(&self) -> &Path {
        &self.order_file
    }

    /// Write an empty load order. An existing file is only replaced with `force`.
    #[tracing::instrument(skip(self))]
    pub fn init(&self, force: bool) -> Result<InitOutcome> {
        let exists = self.runtime.exists(&self.order_file);
        if exists && !force {
            info!("Load order {} already exists", self.order_file.display());
            return Ok(InitOutcome::AlreadyExists);
        }

        LoadOrder::default().save(self.runtime, &self.order_file)?;
        info!("Wrote empty load order to {}", self.order_file.display());

        Ok(if exists {
            InitOutcome::Overwritten
        } else {
            InitOutcome::Created
        })
    }
}
