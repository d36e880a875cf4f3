//! Constants used throughout the application
//!
//! This module centralizes glyphs, colours, UI text and layout bounds so the
//! widgets and the host form stay visually consistent.

use ratatui::style::Color;

/// Application name, used for directory resolution and window titles
pub const APP_NAME: &str = "tman";

/// Display name shown in the header bar
pub const APP_DISPLAY_NAME: &str = "🗂️ TMan";

// Dropdown glyphs
/// Shown on the first row of an open dropdown
pub const DROPDOWN_OPEN_MARKER: &str = "▼";
/// Shown next to the value of a closed dropdown
pub const DROPDOWN_CLOSED_MARKER: &str = "◀";

// Colours
pub const HOVER_BACKGROUND: Color = Color::Rgb(98, 98, 98);
pub const BORDER_COLOR: Color = Color::Blue;
pub const FOCUSED_BORDER_COLOR: Color = Color::LightBlue;
pub const BAR_BACKGROUND: Color = Color::Rgb(98, 98, 98);
pub const PLACEHOLDER_COLOR: Color = Color::DarkGray;

// Form titles
pub const TITLE_USERNAME: &str = "Username";
pub const TITLE_CHOICE: &str = "Choose something";
pub const TITLE_AGE: &str = "Age";
pub const TITLE_REPORT: &str = "Report";

// Form placeholders
pub const PLACEHOLDER_USERNAME: &str = "enter your username...";
pub const PLACEHOLDER_AGE: &str = "enter your age...";

// Footer key hints
pub const FOOTER_HINTS: &str = " q Quit │ Enter Submit │ Tab/Shift+Tab Move │ Esc Unfocus ";

// Status messages
pub const STATUS_SUBMITTED: &str = "✅ Form submitted";

/// Name of the log file written inside the log directory
pub const LOG_FILE_NAME: &str = "tman.log";

/// Name of the config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "tman.toml";

// UI Layout Constants
/// Minimum report panel width in columns
pub const REPORT_MIN_WIDTH: u16 = 20;
/// Maximum report panel width in columns
pub const REPORT_MAX_WIDTH: u16 = 120;
/// Default report panel width in columns
pub const REPORT_DEFAULT_WIDTH: u16 = 40;
/// Fastest accepted tick rate in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 10;
/// Slowest accepted tick rate in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default tick rate in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
/// Rows used by a bordered block around its content
pub const BORDER_CHROME: u16 = 2;
