// SettingsPanel - app/mod.rs
//
// Application layer: sidebar/stack population and event handling state.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod populate;
pub mod state;
