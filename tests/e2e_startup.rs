// SettingsPanel - tests/e2e_startup.rs
//
// End-to-end tests for the startup path and the window's event handlers.
//
// These tests exercise real files on disk (config.toml, style.toml), the
// real catalogue, and the same AppState handlers the GUI calls, without
// opening a window.

use settings_panel::app::state::AppState;
use settings_panel::core::catalog;
use settings_panel::platform::config::{load_config, AppConfig};
use settings_panel::platform::stylesheet::{self, StylesheetLoad};
use settings_panel::ui::theme::Theme;
use std::fs;

// =============================================================================
// Helpers
// =============================================================================

/// Type into the search entry and let the debounce delay run out.
fn search(state: &mut AppState, text: &str, now: f64) {
    state.search_text = text.to_string();
    state.edit_search(now);
    assert!(state.poll_search(now + 1.0), "search did not fire");
}

/// Page names currently listed in the sidebar.
fn listed(state: &AppState) -> Vec<String> {
    state
        .sidebar
        .filtered(&state.active_query)
        .into_iter()
        .flat_map(|(_, entries)| entries.into_iter().map(|e| e.page_name.clone()))
        .collect()
}

// =============================================================================
// Startup
// =============================================================================

/// Every catalogue option becomes one sidebar button and one stack page,
/// in catalogue order.
#[test]
fn e2e_every_option_has_button_and_page() {
    let state = AppState::from_catalog(300).unwrap();
    let expected: Vec<_> = catalog::options().map(|(_, o)| o.label.to_string()).collect();

    let pages: Vec<_> = state.stack.pages().iter().map(|p| p.name.clone()).collect();
    assert_eq!(pages, expected);
    assert_eq!(listed(&state), expected);

    for page in state.stack.pages() {
        assert_eq!(page.heading(), format!("{} Settings", page.title));
    }
}

/// A config file on disk drives window size, theme and the first page.
#[test]
fn e2e_config_file_selects_initial_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[window]\nwidth = 1000.0\n[ui]\ntheme = \"light\"\ninitial_page = \"Keyboard\"\n",
    )
    .unwrap();

    let (config, warnings) = load_config(&path);
    assert!(warnings.is_empty(), "{warnings:?}");
    assert_eq!(config.window_width, 1000.0);
    assert_eq!(config.window_height, AppConfig::default().window_height);

    let mut state = AppState::from_catalog(config.transition_ms).unwrap();
    state
        .set_initial_page(config.initial_page.as_deref().unwrap())
        .unwrap();
    assert_eq!(state.stack.visible_child_name(), Some("Keyboard"));
}

/// A stylesheet next to the program is picked up; without one the
/// built-in theme is used unchanged.
#[test]
fn e2e_stylesheet_present_and_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");

    assert!(matches!(
        stylesheet::load(&path).unwrap(),
        StylesheetLoad::Missing { .. }
    ));
    let plain = Theme::builtin(true);

    fs::write(
        &path,
        "[sidebar]\nbackground = \"#101010\"\n[sidebar_title]\nsize = 14.0\n",
    )
    .unwrap();
    let sheet = stylesheet::load_or_warn(&path).expect("stylesheet should load");
    let styled = Theme::builtin(true).with_stylesheet(&sheet);
    assert_ne!(styled, plain);
    assert_eq!(styled.sidebar_title_size, 14.0);
    assert!(styled.sidebar_bg.is_some());
}

/// A broken stylesheet is skipped rather than stopping startup.
#[test]
fn e2e_invalid_stylesheet_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    fs::write(&path, "[selected]\ncolor = \"not-a-colour\"\n").unwrap();
    assert!(stylesheet::load(&path).is_err());
    assert!(stylesheet::load_or_warn(&path).is_none());
}

// =============================================================================
// Interaction
// =============================================================================

/// Clicking through the sidebar keeps exactly one button selected and the
/// stack showing the clicked page.
#[test]
fn e2e_clicking_buttons_moves_selection() {
    let mut state = AppState::from_catalog(300).unwrap();
    let mut now = 0.0;
    for (_, option) in catalog::options() {
        state.select_category(option.label, now).unwrap();
        now += 1.0;
        state.tick(now);

        assert_eq!(state.stack.visible_child_name(), Some(option.label));
        let selected: Vec<_> = catalog::options()
            .filter(|(_, o)| state.is_selected(o.label))
            .collect();
        assert_eq!(selected.len(), 1);
    }
    assert!(state.transition.is_none());
}

/// Searching filters the sidebar, jumps to the first match, and clearing
/// the entry brings every button back.
#[test]
fn e2e_search_filters_and_switches() {
    let mut state = AppState::from_catalog(300).unwrap();

    search(&mut state, "app", 0.0);
    assert_eq!(state.stack.visible_child_name(), Some("Applets"));
    assert_eq!(
        listed(&state),
        vec!["Applets", "Preferred Applications", "Startup Applications"]
    );

    search(&mut state, "WINDOW", 2.0);
    assert_eq!(state.stack.visible_child_name(), Some("Windows"));
    assert_eq!(listed(&state), vec!["Windows", "Window Tiling", "Login Window"]);

    state.clear_search(4.0);
    assert_eq!(state.stack.visible_child_name(), Some("Windows"));
    assert_eq!(listed(&state).len(), catalog::option_count());
}

/// The sample stylesheet shipped in assets/ is valid and sets every class.
#[test]
fn e2e_sample_stylesheet_loads() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("style.toml");
    let sheet = stylesheet::load_or_warn(&path).expect("sample stylesheet should load");
    assert_eq!(sheet.class_count(), 5);
}
