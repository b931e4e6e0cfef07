// SettingsPanel - platform/mod.rs
//
// Platform abstraction layer: config directories and on-disk files.
// Dependencies: core (stylesheet model), util, directories crate.
// Must NOT depend on: app, ui.

pub mod config;
pub mod stylesheet;
