// SettingsPanel - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for SettingsPanel configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/settingspanel/)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[window]` section.
    pub window: WindowSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[window]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct WindowSection {
    /// Initial inner width in points.
    pub width: Option<f32>,
    /// Initial inner height in points.
    pub height: Option<f32>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
    /// Page slide duration in ms (0 disables). Signed: negatives are
    /// range-checked like any other bad value.
    pub transition_ms: Option<i64>,
    /// Page shown at startup.
    pub initial_page: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    pub font_size: f32,
    pub transition_ms: u64,
    /// Page shown at startup. Checked against the catalogue by the app layer.
    pub initial_page: Option<String>,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: constants::DEFAULT_WINDOW_WIDTH,
            window_height: constants::DEFAULT_WINDOW_HEIGHT,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            transition_ms: constants::DEFAULT_TRANSITION_MS,
            initial_page: None,
            log_level: None,
            log_file: None,
        }
    }
}

fn out_of_range(field: &str, value: impl ToString, expected: String) -> String {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    }
    .to_string()
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with one warning.
///
/// Called before logging is initialised, so warnings are returned rather
/// than logged; the caller logs them once tracing is up.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let (config, mut field_warnings) = validate(raw);
    warnings.append(&mut field_warnings);
    (config, warnings)
}

/// Validate each field against named constants, accumulating all warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut warnings = Vec::new();
    let mut config = AppConfig::default();

    // -- Window --
    if let Some(w) = raw.window.width {
        if (constants::MIN_WINDOW_WIDTH..=constants::MAX_WINDOW_WIDTH).contains(&w) {
            config.window_width = w;
        } else {
            warnings.push(out_of_range(
                "window.width",
                w,
                format!(
                    "{}-{} (default {})",
                    constants::MIN_WINDOW_WIDTH,
                    constants::MAX_WINDOW_WIDTH,
                    constants::DEFAULT_WINDOW_WIDTH
                ),
            ));
        }
    }
    if let Some(h) = raw.window.height {
        if (constants::MIN_WINDOW_HEIGHT..=constants::MAX_WINDOW_HEIGHT).contains(&h) {
            config.window_height = h;
        } else {
            warnings.push(out_of_range(
                "window.height",
                h,
                format!(
                    "{}-{} (default {})",
                    constants::MIN_WINDOW_HEIGHT,
                    constants::MAX_WINDOW_HEIGHT,
                    constants::DEFAULT_WINDOW_HEIGHT
                ),
            ));
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(out_of_range(
                "ui.theme",
                other,
                "\"dark\" or \"light\" (default dark)".to_string(),
            )),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(out_of_range(
                "ui.font_size",
                size,
                format!(
                    "{}-{} (default {})",
                    constants::MIN_FONT_SIZE,
                    constants::MAX_FONT_SIZE,
                    constants::DEFAULT_FONT_SIZE
                ),
            ));
        }
    }

    // -- UI: transition_ms --
    if let Some(ms) = raw.ui.transition_ms {
        match u64::try_from(ms) {
            Ok(ms) if ms <= constants::MAX_TRANSITION_MS => config.transition_ms = ms,
            _ => warnings.push(out_of_range(
                "ui.transition_ms",
                ms,
                format!(
                    "0-{} (default {})",
                    constants::MAX_TRANSITION_MS,
                    constants::DEFAULT_TRANSITION_MS
                ),
            )),
        }
    }

    // -- UI: initial_page --
    if let Some(page) = raw.ui.initial_page {
        if !page.trim().is_empty() {
            config.initial_page = Some(page);
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(out_of_range(
                "logging.level",
                level,
                format!(
                    "one of {} (default {})",
                    constants::VALID_LOG_LEVELS.join(", "),
                    constants::DEFAULT_LOG_LEVEL
                ),
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(PathBuf::from(file));
        }
    }

    (config, warnings)
}
