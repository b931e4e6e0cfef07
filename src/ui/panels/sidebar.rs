// SettingsPanel - ui/panels/sidebar.rs
//
// Category sidebar: section titles followed by icon + label buttons.
// While a search is active only matching buttons are listed and empty
// sections are hidden.

use crate::app::populate::SidebarEntry;
use crate::app::state::AppState;
use crate::ui::icons;
use crate::ui::theme::{self, Theme};

/// Render the sidebar. The caller provides the scrollable side panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, theme: &Theme, now: f64) {
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.with_layout(
                egui::Layout::top_down_justified(egui::Align::Min),
                |ui| {
                    ui.spacing_mut().item_spacing.y = theme::SIDEBAR_SPACING;

                    let shown = state.sidebar.filtered(&state.active_query);
                    if shown.is_empty() {
                        ui.label(egui::RichText::new("No matching settings").weak());
                    }

                    for (section, entries) in shown {
                        ui.label(section_title(&section.title, theme));
                        for entry in entries {
                            let selected = state.is_selected(&entry.page_name);
                            if category_button(ui, entry, selected, theme).clicked() {
                                clicked = Some(entry.page_name.clone());
                            }
                        }
                    }
                },
            );
        });

    if let Some(name) = clicked {
        if let Err(e) = state.select_category(&name, now) {
            tracing::warn!(error = %e, "Sidebar button points at a missing page");
        }
    }
}

fn section_title(title: &str, theme: &Theme) -> egui::RichText {
    let text = egui::RichText::new(title)
        .size(theme.sidebar_title_size)
        .strong();
    match theme.sidebar_title_colour {
        Some(c) => text.color(c),
        None => text,
    }
}

fn category_button(
    ui: &mut egui::Ui,
    entry: &SidebarEntry,
    selected: bool,
    theme: &Theme,
) -> egui::Response {
    let mut text = egui::RichText::new(format!("{}  {}", icons::glyph(&entry.icon), entry.label));
    if let Some(size) = theme.button_size {
        text = text.size(size);
    }
    let colour = if selected {
        theme.selected_colour.or(theme.button_colour)
    } else {
        theme.button_colour
    };
    if let Some(c) = colour {
        text = text.color(c);
    }

    let mut button = egui::Button::new(text)
        .selected(selected)
        .min_size(egui::vec2(0.0, theme::SIDEBAR_BUTTON_HEIGHT));
    if selected {
        button = button.fill(theme.selected_bg);
    } else if let Some(bg) = theme.button_bg {
        button = button.fill(bg);
    }

    ui.add(button).on_hover_text(format!("Open {} settings", entry.label))
}
