//! Application orchestration and main event loop.
//!
//! This module owns the core application lifecycle:
//! - Initialization (terminal setup, config, saved state)
//! - The scheduling loop driving input, handoffs and callbacks
//! - State management (filer, overlay, subprocesses)
//! - UI rendering delegation
//!
//! The app is structured around a single `App` struct that holds
//! all UI state. Only the loop thread ever touches it.
//!
//! Submodules:
//! - state: App struct, resizing and menus
//! - runner: terminal setup and the loop frontend
//! - input: key routing and actions
//! - render: frame composition

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
