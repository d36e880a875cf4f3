//! Reusable UI components

pub mod dropdown;
pub mod text_input;

// Component exports
pub use dropdown::{Dropdown, DropdownError, DropdownInput, DropdownOption, DropdownRow, DropdownView};
pub use text_input::TextInput;
