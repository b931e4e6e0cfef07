// SettingsPanel - ui/icons.rs
//
// Maps freedesktop icon names to glyphs that egui's bundled fonts can
// draw. Unknown names fall back to a bullet so a button never renders an
// empty icon slot.

/// Glyph used when no mapping exists.
pub const FALLBACK_GLYPH: &str = "\u{2022}";

/// Glyph for a freedesktop icon name.
pub fn glyph(icon_name: &str) -> &'static str {
    match icon_name {
        "preferences-desktop-wallpaper" => "\u{1f5bc}",
        "preferences-desktop-effects" => "\u{2728}",
        "preferences-desktop-font" => "\u{1f524}",
        "preferences-desktop-theme" => "\u{1f3a8}",
        "preferences-desktop-accessibility" => "\u{267f}",
        "user-info" => "\u{1f464}",
        "system-run" => "\u{25b6}",
        "applications-applets" => "\u{1f4ce}",
        "applications-desklets" => "\u{1f4cc}",
        "preferences-system-time" => "\u{1f552}",
        "preferences-desktop" => "\u{1f5a5}",
        "preferences-plugin" => "\u{1f50c}",
        "preferences-system" => "\u{2699}",
        "input-touchpad" => "\u{270b}",
        "preferences-desktop-screensaver" => "\u{1f319}",
        "preferences-desktop-keyboard" | "input-keyboard" => "\u{2328}",
        "preferences-desktop-locale" => "\u{1f310}",
        "preferences-system-night-light" => "\u{1f506}",
        "preferences-desktop-notification" => "\u{1f514}",
        "preferences-system-network" => "\u{1f5a7}",
        "preferences-desktop-panel" => "\u{1f4cb}",
        "preferences-desktop-default-applications" => "\u{2b50}",
        "preferences-desktop-privacy" => "\u{1f512}",
        "preferences-system-startup" => "\u{1f680}",
        "preferences-system-windows" => "\u{1f5d6}",
        "preferences-desktop-window-tiling" => "\u{229e}",
        "preferences-desktop-workspaces" => "\u{25a3}",
        "preferences-system-bluetooth" => "\u{1f4f6}",
        "preferences-desktop-color" => "\u{1f308}",
        "preferences-system-disk-utility" => "\u{1f5b4}",
        "preferences-system-display" => "\u{1f4bb}",
        "input-tablet" => "\u{270f}",
        "input-mouse" => "\u{1f5b1}",
        "preferences-system-power-management" => "\u{1f50b}",
        "preferences-system-printer" => "\u{1f5b6}",
        "preferences-desktop-sound" => "\u{1f50a}",
        "system-information" => "\u{2139}",
        "preferences-system-driver-manager" => "\u{1f527}",
        "preferences-system-firewall" => "\u{1f6e1}",
        "preferences-system-login" => "\u{1f511}",
        "preferences-system-software-sources" => "\u{1f4e6}",
        "preferences-system-users" => "\u{1f465}",
        _ => FALLBACK_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;

    #[test]
    fn test_every_catalogue_icon_has_a_glyph() {
        let missing: Vec<_> = catalog::options()
            .map(|(_, o)| o.icon)
            .filter(|icon| glyph(icon) == FALLBACK_GLYPH)
            .collect();
        assert!(missing.is_empty(), "icons without glyphs: {missing:?}");
    }

    #[test]
    fn test_every_glyph_is_in_the_default_fonts() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |_| {});
        let font = egui::FontId::proportional(14.0);

        let mut icons: Vec<_> = catalog::options().map(|(_, o)| o.icon).collect();
        icons.push("no-such-icon");
        let missing: Vec<_> = icons
            .into_iter()
            .filter(|icon| !ctx.fonts(|f| f.has_glyphs(&font, glyph(icon))))
            .collect();
        assert!(missing.is_empty(), "glyphs egui cannot draw: {missing:?}");
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(glyph("no-such-icon"), FALLBACK_GLYPH);
    }
}
