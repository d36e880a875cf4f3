//! TMan - a terminal form built around an interactive dropdown widget
//!
//! The library provides the [`Dropdown`](ui::components::Dropdown) widget, a
//! small text input, and the host form that wires them together on top of
//! Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`constants`] - Glyphs, colours and UI strings
//! * [`logger`] - File logging setup
//! * [`ui`] - Widgets, host form and terminal loop

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;
