// src/gui/components/status_bar.rs
use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        ui.label(app.status_text());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let snap = &app.snapshot;
            ui.label(
                RichText::new(format!("{} task(s) · {} entr(ies)", snap.tasks.len(), snap.entries.len())).weak(),
            );
        });
    });
}
