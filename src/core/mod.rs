// SettingsPanel - core/mod.rs
//
// Core layer: settings catalogue, page stack, search, transitions and the
// stylesheet model.
// Dependencies: util only.
// Must NOT depend on: app, ui, platform, egui.

pub mod catalog;
pub mod search;
pub mod stack;
pub mod stylesheet;
pub mod transition;
