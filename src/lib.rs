pub mod application;
pub mod catalog;
pub mod commands;
pub mod merge;
pub mod order;
pub mod pack;
pub mod repository;
pub mod runtime;

pub use merge::merge;
pub use pack::{Pack, PackPosition, UnresolvedAnchorError};
