// SettingsPanel - ui/panels/page.rs
//
// Content area: the visible stack page, or two pages sliding past each
// other while a transition is running.

use crate::app::state::AppState;
use crate::core::stack::Page;
use crate::ui::theme::Theme;

/// Render the page stack into the remaining space.
pub fn render(ui: &mut egui::Ui, state: &AppState, theme: &Theme, now: f64) {
    let rect = ui.available_rect_before_wrap();
    ui.set_clip_rect(rect);

    let Some(current) = state.stack.visible_child() else {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("No settings pages").weak());
        });
        return;
    };

    match &state.transition {
        Some(t) => {
            let (out_x, in_x) = t.offsets(rect.width(), now);
            if let Some(previous) = state.stack.get(t.from) {
                draw_page(ui, previous, rect.translate(egui::vec2(out_x, 0.0)), theme);
            }
            draw_page(ui, current, rect.translate(egui::vec2(in_x, 0.0)), theme);
        }
        None => draw_page(ui, current, rect, theme),
    }
}

/// A placeholder page: its heading centred in `rect`.
fn draw_page(ui: &mut egui::Ui, page: &Page, rect: egui::Rect, theme: &Theme) {
    let mut text = egui::RichText::new(page.heading())
        .size(theme.settings_title_size)
        .strong();
    if let Some(c) = theme.settings_title_colour {
        text = text.color(c);
    }
    ui.put(rect, egui::Label::new(text).selectable(false));
}
