//! CortexFlow CLI - terminal front end for the CortexFlow dashboard.
//!
//! The binary in `main.rs` is a thin argument parser; everything it
//! dispatches to lives here so integration tests can drive the dashboard
//! rendering against a test backend.

pub mod commands;
pub mod error;
pub mod tui_app;
pub mod ui;
