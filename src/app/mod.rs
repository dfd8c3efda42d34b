// LogSift - app/mod.rs
//
// Application layer: owns session state and drives the core on each
// load or filter change.

pub mod state;
