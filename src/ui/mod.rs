//! UI module for TMan
//!
//! This module handles the widgets, the host form and the terminal loop.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use layout::LayoutManager;
pub use renderer::run_app;
