// src/gui/components/mod.rs
pub mod confirm;
pub mod history_chart;
pub mod status_bar;
pub mod table;
pub mod tabs;
pub mod team_panel;
