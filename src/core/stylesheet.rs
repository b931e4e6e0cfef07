// SettingsPanel - core/stylesheet.rs
//
// Stylesheet model: style classes read from `style.toml`.
//
// Each class is a TOML table with optional `color`, `background`
// ("#rrggbb" or "#rrggbbaa") and `size` (points). Unknown keys and
// unknown tables are ignored so older binaries accept newer stylesheets.
//
// Core layer: parses text only; locating and reading the file is done by
// platform::stylesheet.

use crate::util::constants::{MAX_STYLE_FONT_SIZE, MIN_STYLE_FONT_SIZE};
use crate::util::error::StylesheetError;
use std::path::Path;

/// An sRGB colour with straight (unmultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is required).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: 255,
            }),
            8 => Some(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }
}

/// Raw shape of one style class table.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawClass {
    color: Option<String>,
    background: Option<String>,
    size: Option<f32>,
}

/// Raw deserialisable shape of `style.toml`.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawStyleSheet {
    sidebar: RawClass,
    sidebar_title: RawClass,
    sidebar_button: RawClass,
    selected: RawClass,
    settings_title: RawClass,
}

/// Validated properties of one style class. `None` means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleClass {
    pub color: Option<Rgba>,
    pub background: Option<Rgba>,
    pub size: Option<f32>,
}

impl StyleClass {
    fn validate(class: &'static str, raw: RawClass) -> Result<Self, StylesheetError> {
        let colour = |field: &'static str, value: Option<String>| match value {
            None => Ok(None),
            Some(v) => Rgba::from_hex(&v)
                .map(Some)
                .ok_or(StylesheetError::InvalidColour {
                    class,
                    field,
                    value: v,
                }),
        };

        let size = match raw.size {
            Some(s) if !(MIN_STYLE_FONT_SIZE..=MAX_STYLE_FONT_SIZE).contains(&s) => {
                return Err(StylesheetError::InvalidSize {
                    class,
                    value: s,
                    min: MIN_STYLE_FONT_SIZE,
                    max: MAX_STYLE_FONT_SIZE,
                });
            }
            other => other,
        };

        Ok(Self {
            color: colour("color", raw.color)?,
            background: colour("background", raw.background)?,
            size,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.background.is_none() && self.size.is_none()
    }
}

/// All style classes the window knows about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    /// The sidebar container.
    pub sidebar: StyleClass,
    /// Section title labels in the sidebar.
    pub sidebar_title: StyleClass,
    /// Category buttons in the sidebar.
    pub sidebar_button: StyleClass,
    /// The selected category button.
    pub selected: StyleClass,
    /// The placeholder heading on each page.
    pub settings_title: StyleClass,
}

impl StyleSheet {
    /// Parse and validate stylesheet text. `path` is used for error context.
    pub fn parse(content: &str, path: &Path) -> Result<Self, StylesheetError> {
        let raw: RawStyleSheet =
            toml::from_str(content).map_err(|e| StylesheetError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self {
            sidebar: StyleClass::validate("sidebar", raw.sidebar)?,
            sidebar_title: StyleClass::validate("sidebar_title", raw.sidebar_title)?,
            sidebar_button: StyleClass::validate("sidebar_button", raw.sidebar_button)?,
            selected: StyleClass::validate("selected", raw.selected)?,
            settings_title: StyleClass::validate("settings_title", raw.settings_title)?,
        })
    }

    /// Number of classes with at least one property set.
    pub fn class_count(&self) -> usize {
        [
            &self.sidebar,
            &self.sidebar_title,
            &self.sidebar_button,
            &self.selected,
            &self.settings_title,
        ]
        .iter()
        .filter(|c| !c.is_empty())
        .count()
    }
}
