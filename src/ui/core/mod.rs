//! Core UI functionality for TMan.
//!
//! This module contains the building blocks every widget and the host form
//! share: the [`Component`] trait, the [`Action`] values components hand back
//! to their host, and the [`EventHandler`] that turns terminal input into
//! [`EventType`]s.
//!
//! # Architecture
//!
//! 1. **Components** implement [`Component`] for input handling and rendering
//! 2. **Actions** are returned synchronously from every handler; a component
//!    never calls back into its host
//! 3. **Events** are polled by the [`EventHandler`] and routed by the host

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, FormField, SelectionChanged};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
