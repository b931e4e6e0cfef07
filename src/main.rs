// SettingsPanel - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Stylesheet loading (optional, next to the executable)
// 4. Sidebar and page stack population
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use settings_panel::app;
pub use settings_panel::core;
pub use settings_panel::platform;
pub use settings_panel::ui;
pub use settings_panel::util;

use clap::Parser;
use std::path::PathBuf;

/// SettingsPanel - desktop settings window.
///
/// Browse settings categories from the sidebar or jump to one by searching.
#[derive(Parser, Debug)]
#[command(name = "settings-panel", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Stylesheet to use instead of style.toml next to the executable.
    #[arg(short = 's', long = "style")]
    style: Option<PathBuf>,

    /// Page to show at startup (e.g. "Display").
    #[arg(short = 'p', long = "page")]
    page: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Config comes first: it may choose the log level and log file.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_file());

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SettingsPanel starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    let style_path = cli
        .style
        .clone()
        .unwrap_or_else(platform::stylesheet::default_path);
    let theme = match platform::stylesheet::load_or_warn(&style_path) {
        Some(sheet) => ui::theme::Theme::builtin(config.dark_mode).with_stylesheet(&sheet),
        None => ui::theme::Theme::builtin(config.dark_mode),
    };

    let mut state = match app::state::AppState::from_catalog(config.transition_ms) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build settings pages");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // CLI override > config
    if let Some(page) = cli.page.as_deref().or(config.initial_page.as_deref()) {
        if let Err(e) = state.set_initial_page(page) {
            tracing::warn!(error = %e, "Ignoring unknown initial page");
        }
    }

    tracing::info!(
        pages = state.stack.len(),
        visible = state.stack.visible_child_name().unwrap_or("-"),
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::APP_NAME)
            .with_app_id(util::constants::APP_ID)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([
                util::constants::MIN_WINDOW_WIDTH,
                util::constants::MIN_WINDOW_HEIGHT,
            ]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply_global(&cc.egui_ctx, dark_mode, font_size, &theme);
            Ok(Box::new(gui::SettingsApp::new(state, theme)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch settings window: {e}");
        std::process::exit(1);
    }
}
