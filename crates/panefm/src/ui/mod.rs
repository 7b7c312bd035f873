//! UI rendering and layout utilities.
//!
//! Pure rendering helpers shared by overlays. Functions here take data
//! and draw ratatui widgets without touching application state.
//!
//! Submodules:
//! - layout: helpers for rect manipulation and centering
//! - widgets: reusable widget builders

mod layout;
mod widgets;

pub use widgets::{render_input_overlay, render_list_overlay};
