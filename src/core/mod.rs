// LogSift - core/mod.rs
//
// Core business logic layer: extraction, level resolution, cataloguing,
// filtering, statistics and export.
// Must NOT depend on: app or platform, and never touches the filesystem.

pub mod catalog;
pub mod export;
pub mod extractor;
pub mod filter;
pub mod level;
pub mod model;
pub mod summary;
