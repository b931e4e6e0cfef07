// SettingsPanel - ui/theme.rs
//
// Colour scheme, layout constants, and resolution of stylesheet classes
// into concrete egui colours and sizes.
// No dependencies on app state or business logic.

use crate::core::stylesheet::{Rgba, StyleSheet};
use egui::{Color32, FontFamily, FontId, TextStyle};

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 250.0;
pub const SIDEBAR_SPACING: f32 = 10.0;
pub const SIDEBAR_BUTTON_HEIGHT: f32 = 30.0;
pub const HEADER_BAR_HEIGHT: f32 = 40.0;

/// Built-in accent for the selected sidebar button.
pub const SELECTED_BG_DARK: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600
pub const SELECTED_BG_LIGHT: Color32 = Color32::from_rgb(191, 219, 254); // Blue 200

/// Built-in size of section titles and page headings (points).
pub const SIDEBAR_TITLE_SIZE: f32 = 12.0;
pub const SETTINGS_TITLE_SIZE: f32 = 24.0;

pub fn colour(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Resolved look of the window. Starts from the built-in palette and is
/// overridden class by class from a stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub sidebar_bg: Option<Color32>,
    pub sidebar_title_colour: Option<Color32>,
    pub sidebar_title_size: f32,
    pub button_colour: Option<Color32>,
    pub button_bg: Option<Color32>,
    pub button_size: Option<f32>,
    pub selected_colour: Option<Color32>,
    pub selected_bg: Color32,
    pub settings_title_colour: Option<Color32>,
    pub settings_title_size: f32,
}

impl Theme {
    pub fn builtin(dark_mode: bool) -> Self {
        Self {
            sidebar_bg: None,
            sidebar_title_colour: None,
            sidebar_title_size: SIDEBAR_TITLE_SIZE,
            button_colour: None,
            button_bg: None,
            button_size: None,
            selected_colour: None,
            selected_bg: if dark_mode {
                SELECTED_BG_DARK
            } else {
                SELECTED_BG_LIGHT
            },
            settings_title_colour: None,
            settings_title_size: SETTINGS_TITLE_SIZE,
        }
    }

    /// Overlay every property the stylesheet sets.
    pub fn with_stylesheet(mut self, sheet: &StyleSheet) -> Self {
        if let Some(bg) = sheet.sidebar.background {
            self.sidebar_bg = Some(colour(bg));
        }

        if let Some(c) = sheet.sidebar_title.color {
            self.sidebar_title_colour = Some(colour(c));
        }
        if let Some(size) = sheet.sidebar_title.size {
            self.sidebar_title_size = size;
        }

        if let Some(c) = sheet.sidebar_button.color {
            self.button_colour = Some(colour(c));
        }
        if let Some(bg) = sheet.sidebar_button.background {
            self.button_bg = Some(colour(bg));
        }
        self.button_size = sheet.sidebar_button.size.or(self.button_size);

        if let Some(c) = sheet.selected.color {
            self.selected_colour = Some(colour(c));
        }
        if let Some(bg) = sheet.selected.background {
            self.selected_bg = colour(bg);
        }

        if let Some(c) = sheet.settings_title.color {
            self.settings_title_colour = Some(colour(c));
        }
        if let Some(size) = sheet.settings_title.size {
            self.settings_title_size = size;
        }
        self
    }
}

/// Apply dark/light visuals and the body font size to the whole context.
pub fn apply_global(ctx: &egui::Context, dark_mode: bool, font_size: f32, theme: &Theme) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    style.visuals.selection.bg_fill = theme.selected_bg;
    style.text_styles.insert(
        TextStyle::Body,
        FontId::new(font_size, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Button,
        FontId::new(font_size, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Heading,
        FontId::new(font_size + 4.0, FontFamily::Proportional),
    );
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_builtin_selected_bg_follows_mode() {
        assert_eq!(Theme::builtin(true).selected_bg, SELECTED_BG_DARK);
        assert_eq!(Theme::builtin(false).selected_bg, SELECTED_BG_LIGHT);
    }

    #[test]
    fn test_stylesheet_overrides_only_what_it_sets() {
        let sheet = StyleSheet::parse(
            "[selected]\nbackground = \"#ff000080\"\n[settings_title]\nsize = 32.0\n",
            Path::new("style.toml"),
        )
        .unwrap();
        let theme = Theme::builtin(true).with_stylesheet(&sheet);
        assert_eq!(
            theme.selected_bg,
            Color32::from_rgba_unmultiplied(255, 0, 0, 0x80)
        );
        assert_eq!(theme.settings_title_size, 32.0);
        assert_eq!(theme.sidebar_title_size, SIDEBAR_TITLE_SIZE);
        assert!(theme.sidebar_bg.is_none());
    }

    #[test]
    fn test_empty_stylesheet_is_identity() {
        let base = Theme::builtin(false);
        assert_eq!(base.clone().with_stylesheet(&StyleSheet::default()), base);
    }
}
