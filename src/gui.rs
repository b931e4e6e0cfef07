// SettingsPanel - gui.rs
//
// Top-level eframe::App implementation.
// Wires the header bar, sidebar and page stack together and drives the
// time-based parts of the state (search debounce, page slides).

use crate::app::state::AppState;
use crate::ui;
use crate::ui::theme::Theme;

/// The settings window.
pub struct SettingsApp {
    pub state: AppState,
    pub theme: Theme,
}

impl SettingsApp {
    /// Create a new application instance with the given state and theme.
    pub fn new(state: AppState, theme: Theme) -> Self {
        Self { state, theme }
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // Ctrl+F (Cmd+F on macOS) jumps to the search entry.
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::F)) {
            self.state.request_search_focus = true;
        }

        self.state.poll_search(now);
        self.state.tick(now);

        // Header bar
        egui::TopBottomPanel::top("header_bar")
            .exact_height(ui::theme::HEADER_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::header::render(ui, &mut self.state, now);
            });

        // Sidebar: fixed width, scrolls vertically only.
        let mut sidebar_frame = egui::Frame::side_top_panel(&ctx.style());
        if let Some(bg) = self.theme.sidebar_bg {
            sidebar_frame = sidebar_frame.fill(bg);
        }
        egui::SidePanel::left("sidebar")
            .exact_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(sidebar_frame)
            .show(ctx, |ui| {
                ui::panels::sidebar::render(ui, &mut self.state, &self.theme, now);
            });

        // Page stack
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::page::render(ui, &self.state, &self.theme, now);
        });

        // Keep frames coming while a slide runs, and wake up in time for a
        // pending search even if the user stops typing.
        match self.state.next_wakeup(now) {
            Some(0.0) => ctx.request_repaint(),
            Some(left) => ctx.request_repaint_after(std::time::Duration::from_secs_f64(left)),
            None => {}
        }
    }
}
