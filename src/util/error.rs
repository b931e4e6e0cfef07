// SettingsPanel - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SettingsPanel operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SettingsPanelError {
    /// Page stack construction or page switching failed.
    Stack(StackError),

    /// Stylesheet loading or validation failed.
    Stylesheet(StylesheetError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for SettingsPanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack(e) => write!(f, "Page stack error: {e}"),
            Self::Stylesheet(e) => write!(f, "Stylesheet error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for SettingsPanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stack(e) => Some(e),
            Self::Stylesheet(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Stack errors
// ---------------------------------------------------------------------------

/// Errors raised by the page stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// A page with this name is already in the stack.
    DuplicateName { name: String },

    /// No page with this name exists.
    UnknownPage { name: String },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "A page named '{name}' already exists in the stack")
            }
            Self::UnknownPage { name } => write!(f, "No page named '{name}'"),
        }
    }
}

impl std::error::Error for StackError {}

impl From<StackError> for SettingsPanelError {
    fn from(e: StackError) -> Self {
        Self::Stack(e)
    }
}

// ---------------------------------------------------------------------------
// Stylesheet errors
// ---------------------------------------------------------------------------

/// Errors related to loading `style.toml`.
#[derive(Debug)]
pub enum StylesheetError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Stylesheet exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A colour value is not `#rrggbb` or `#rrggbbaa`.
    InvalidColour {
        class: &'static str,
        field: &'static str,
        value: String,
    },

    /// A font size is outside the accepted range.
    InvalidSize {
        class: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// I/O error reading the stylesheet.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse stylesheet '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Stylesheet '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::InvalidColour {
                class,
                field,
                value,
            } => write!(
                f,
                "[{class}] {field} = \"{value}\" is not a colour. Expected \"#rrggbb\" or \"#rrggbbaa\""
            ),
            Self::InvalidSize {
                class,
                value,
                min,
                max,
            } => write!(
                f,
                "[{class}] size = {value} is out of range ({min}-{max})"
            ),
            Self::Io { path, source } => {
                write!(
                    f,
                    "Cannot read stylesheet '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StylesheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StylesheetError> for SettingsPanelError {
    fn from(e: StylesheetError) -> Self {
        Self::Stylesheet(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for SettingsPanelError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for SettingsPanel results.
pub type Result<T> = std::result::Result<T, SettingsPanelError>;
