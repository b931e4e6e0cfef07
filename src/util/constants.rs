// SettingsPanel - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name (also the header bar title).
pub const APP_NAME: &str = "Settings";

/// Application identifier used for config directories.
pub const APP_ID: &str = "SettingsPanel";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Window layout
// =============================================================================

/// Default window width in points.
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;

/// Default window height in points.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Smallest window the config may request.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Largest window the config may request.
pub const MAX_WINDOW_WIDTH: f32 = 7_680.0;
pub const MAX_WINDOW_HEIGHT: f32 = 4_320.0;

// =============================================================================
// Page stack
// =============================================================================

/// Default slide transition duration between stack pages (ms).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Maximum configurable transition duration (ms). 0 disables animation.
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Suffix appended to a page title to form its heading.
pub const PAGE_HEADING_SUFFIX: &str = "Settings";

// =============================================================================
// Search
// =============================================================================

/// Placeholder text shown in the empty search entry.
pub const SEARCH_PLACEHOLDER: &str = "Search settings...";

/// Delay between the last keystroke and the search handler firing (ms).
/// Matches the `search-changed` delay of a toolkit search entry.
pub const SEARCH_DEBOUNCE_MS: u64 = 150;

/// Width of the search entry in the header bar.
pub const SEARCH_ENTRY_WIDTH: f32 = 220.0;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Stylesheet
// =============================================================================

/// Stylesheet file name, looked up next to the program executable.
pub const STYLESHEET_FILE_NAME: &str = "style.toml";

/// Maximum size of a stylesheet in bytes.
pub const MAX_STYLESHEET_FILE_SIZE: u64 = 64 * 1024; // 64 KB

/// Smallest and largest font size a style class may request (points).
pub const MIN_STYLE_FONT_SIZE: f32 = 6.0;
pub const MAX_STYLE_FONT_SIZE: f32 = 96.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted from config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
