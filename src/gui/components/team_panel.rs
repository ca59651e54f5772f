// src/gui/components/team_panel.rs
//
// Left team list for the Team tab. Clicking a name selects it.

use eframe::egui;
use crate::gui::app::App;
use crate::league::history::team_color;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Teams");
    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let teams = app.teams();
    if teams.is_empty() {
        ui.label(if app.loading { "Loading…" } else { "No teams yet" });
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("teams_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for (idx, name) in teams.iter().enumerate() {
                let selected = app.state.gui.selected_team.as_deref() == Some(name.as_str());
                let [r, g, b] = team_color(name, idx);
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, egui::Color32::from_rgb(r, g, b));
                    if ui.selectable_label(selected, name).clicked() && !selected {
                        logf!("UI: team → {name}");
                        app.state.gui.selected_team = Some(name.clone());
                    }
                });
            }
        });
}
