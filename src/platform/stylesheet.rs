// SettingsPanel - platform/stylesheet.rs
//
// Locates and reads the optional `style.toml` that sits next to the
// program executable. A missing stylesheet is not an error: the caller
// logs a warning and keeps the built-in look.

use crate::core::stylesheet::StyleSheet;
use crate::util::constants;
use crate::util::error::StylesheetError;
use std::path::{Path, PathBuf};

/// Outcome of a stylesheet lookup.
#[derive(Debug)]
pub enum StylesheetLoad {
    /// The file was found and is valid.
    Loaded { path: PathBuf, sheet: StyleSheet },
    /// No file at the expected location; styling is skipped.
    Missing { path: PathBuf },
}

/// Default stylesheet location: the directory containing the executable.
///
/// Falls back to the current directory if the executable path is unknown.
pub fn default_path() -> PathBuf {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(constants::STYLESHEET_FILE_NAME)
}

/// Read and validate the stylesheet at `path`.
pub fn load(path: &Path) -> Result<StylesheetLoad, StylesheetError> {
    if !path.exists() {
        return Ok(StylesheetLoad::Missing {
            path: path.to_path_buf(),
        });
    }

    let meta = std::fs::metadata(path).map_err(|e| StylesheetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if meta.len() > constants::MAX_STYLESHEET_FILE_SIZE {
        return Err(StylesheetError::FileTooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            max_size: constants::MAX_STYLESHEET_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| StylesheetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let sheet = StyleSheet::parse(&content, path)?;

    tracing::debug!(
        path = %path.display(),
        classes = sheet.class_count(),
        "Stylesheet parsed"
    );

    Ok(StylesheetLoad::Loaded {
        path: path.to_path_buf(),
        sheet,
    })
}

/// Load the stylesheet, reporting every problem as a warning.
///
/// Returns `None` when styling should be skipped.
pub fn load_or_warn(path: &Path) -> Option<StyleSheet> {
    match load(path) {
        Ok(StylesheetLoad::Loaded { path, sheet }) => {
            tracing::info!(path = %path.display(), "Loaded stylesheet");
            Some(sheet)
        }
        Ok(StylesheetLoad::Missing { path }) => {
            tracing::warn!(
                path = %path.display(),
                "{} not found. Skipping stylesheet.",
                constants::STYLESHEET_FILE_NAME
            );
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Stylesheet could not be loaded. Skipping stylesheet.");
            None
        }
    }
}
