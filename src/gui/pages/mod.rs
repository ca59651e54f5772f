// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::app::App;

pub mod add;
pub mod standings;
pub mod team;
pub mod teams;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Add,
    Standings,
    Team,
    Teams,
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body below the tabs.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

/// Shared "nothing yet" line for read-only pages. Returns true if the page
/// has something to draw.
pub fn ready(ui: &mut egui::Ui, app: &App) -> bool {
    if app.loaded {
        return true;
    }
    ui.add_space(12.0);
    if app.loading {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new().size(16.0));
            ui.label("Loading…");
        });
    } else {
        ui.label("No data loaded. Press Refresh.");
    }
    false
}
