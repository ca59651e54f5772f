// src/gui/components/tabs.rs
//
// Top tabs plus the Refresh button. Switching tabs never reloads; every
// page renders from the same snapshot.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.current_page_kind(), page.kind());
                app.set_current_index(idx);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!app.loading, egui::Button::new("Refresh")).clicked() {
                actions::refresh(app, ui.ctx(), true);
            }
            if app.loading {
                ui.add(Spinner::new().size(16.0));
            }
        });
    });
}
