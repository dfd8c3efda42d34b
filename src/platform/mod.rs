// LogSift - platform/mod.rs
//
// Platform layer: file reading, config loading, platform directories.

pub mod config;
pub mod fs;
