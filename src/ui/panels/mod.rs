// SettingsPanel - ui/panels/mod.rs

pub mod header;
pub mod page;
pub mod sidebar;
