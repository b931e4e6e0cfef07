// SettingsPanel - ui/panels/header.rs
//
// Header bar: window title in the middle, search entry packed at the end.
//
// Keys handled by the entry:
//   Enter   apply the pending search immediately
//   Escape  clear the entry (egui also drops focus)

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, SEARCH_ENTRY_WIDTH, SEARCH_PLACEHOLDER};

/// Render the header bar contents.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, now: f64) {
    let bar = ui.max_rect();
    ui.painter().text(
        bar.center(),
        egui::Align2::CENTER_CENTER,
        APP_NAME,
        egui::FontId::proportional(16.0),
        ui.visuals().strong_text_color(),
    );

    ui.with_layout(
        egui::Layout::right_to_left(egui::Align::Center),
        |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.search_text)
                    .hint_text(format!("\u{1f50d} {SEARCH_PLACEHOLDER}"))
                    .desired_width(SEARCH_ENTRY_WIDTH),
            );

            if state.request_search_focus {
                state.request_search_focus = false;
                response.request_focus();
            }

            if response.changed() {
                state.edit_search(now);
            }

            if response.lost_focus() {
                let (enter, escape) =
                    ui.input(|i| (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::Escape)));
                if escape {
                    state.clear_search(now);
                } else if enter {
                    state.commit_search(now);
                }
            }
        },
    );
}
