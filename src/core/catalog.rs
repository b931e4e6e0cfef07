// SettingsPanel - core/catalog.rs
//
// The static catalogue of settings sections and their options.
// Declaration order is display order. Option labels double as page names
// and must be unique across the whole catalogue.

/// One sidebar option: a label and a freedesktop icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingOption {
    pub label: &'static str,
    pub icon: &'static str,
}

/// A titled group of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub options: &'static [SettingOption],
}

const fn opt(label: &'static str, icon: &'static str) -> SettingOption {
    SettingOption { label, icon }
}

static SECTIONS: &[Section] = &[
    Section {
        title: "Appearance",
        options: &[
            opt("Backgrounds", "preferences-desktop-wallpaper"),
            opt("Effects", "preferences-desktop-effects"),
            opt("Font Selection", "preferences-desktop-font"),
            opt("Themes", "preferences-desktop-theme"),
        ],
    },
    Section {
        title: "Preferences",
        options: &[
            opt("Accessibility", "preferences-desktop-accessibility"),
            opt("Account Details", "user-info"),
            opt("Actions", "system-run"),
            opt("Applets", "applications-applets"),
            opt("Date & Time", "preferences-system-time"),
            opt("Desklets", "applications-desklets"),
            opt("Desktop", "preferences-desktop"),
            opt("Extensions", "preferences-plugin"),
            opt("General", "preferences-system"),
            opt("Gestures", "input-touchpad"),
            opt("Hot Corners", "preferences-desktop-screensaver"),
            opt("Input Method", "preferences-desktop-keyboard"),
            opt("Languages", "preferences-desktop-locale"),
            opt("Night Light", "preferences-system-night-light"),
            opt("Notifications", "preferences-desktop-notification"),
            opt("Online Accounts", "preferences-system-network"),
            opt("Panel", "preferences-desktop-panel"),
            opt(
                "Preferred Applications",
                "preferences-desktop-default-applications",
            ),
            opt("Privacy", "preferences-desktop-privacy"),
            opt("Screensaver", "preferences-desktop-screensaver"),
            opt("Startup Applications", "preferences-system-startup"),
            opt("Windows", "preferences-system-windows"),
            opt("Window Tiling", "preferences-desktop-window-tiling"),
            opt("Workspaces", "preferences-desktop-workspaces"),
        ],
    },
    Section {
        title: "Hardware",
        options: &[
            opt("Bluetooth", "preferences-system-bluetooth"),
            opt("Color", "preferences-desktop-color"),
            opt("Disks", "preferences-system-disk-utility"),
            opt("Display", "preferences-system-display"),
            opt("Graphics Tablet", "input-tablet"),
            opt("Keyboard", "input-keyboard"),
            opt("Mouse and Touchpad", "input-mouse"),
            opt("Network", "preferences-system-network"),
            opt("Power Management", "preferences-system-power-management"),
            opt("Printers", "preferences-system-printer"),
            opt("Sound", "preferences-desktop-sound"),
            opt("System Info", "system-information"),
        ],
    },
    Section {
        title: "Administration",
        options: &[
            opt("Driver Manager", "preferences-system-driver-manager"),
            opt("Firewall", "preferences-system-firewall"),
            opt("Login Window", "preferences-system-login"),
            opt("Software Sources", "preferences-system-software-sources"),
            opt("Users and Groups", "preferences-system-users"),
        ],
    },
];

/// All sections in display order.
pub fn sections() -> &'static [Section] {
    SECTIONS
}

/// Every option paired with its section title, in display order.
pub fn options() -> impl Iterator<Item = (&'static str, &'static SettingOption)> {
    SECTIONS
        .iter()
        .flat_map(|s| s.options.iter().map(move |o| (s.title, o)))
}

/// Total number of options across all sections.
pub fn option_count() -> usize {
    SECTIONS.iter().map(|s| s.options.len()).sum()
}
