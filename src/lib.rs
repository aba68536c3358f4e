//! Personal records for students and workers, kept in a local JSON file.
//!
//! - [`models`]: the [`Record`](models::Record) variants and their derived metrics.
//! - [`codec`]: the tag-free JSON array format used on disk.
//! - [`repository`]: the in-memory roster and its backing file.
//! - [`menu`]: the interactive console menu.

pub mod codec;
pub mod config;
pub mod menu;
pub mod models;
pub mod render;
pub mod repository;
