// src/gui/pages/standings.rs
use eframe::egui;

use crate::csv::Delim;
use crate::gui::{actions, app::App, components::table};
use crate::league::{
    RankPolicy,
    standings::{self, TABLE_HEADERS},
};

use super::{Page, PageKind};

pub struct StandingsPage;
pub static PAGE: StandingsPage = StandingsPage;

impl Page for StandingsPage {
    fn kind(&self) -> PageKind { PageKind::Standings }
    fn title(&self) -> &'static str { "Standings" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let policy = &mut app.state.options.view.rank_policy;
        let before = *policy;
        ui.horizontal(|ui| {
            ui.label("Rank by:");
            egui::ComboBox::from_id_salt("rank_policy")
                .selected_text(policy.label())
                .show_ui(ui, |ui| {
                    for p in RankPolicy::ALL {
                        ui.selectable_value(policy, p, p.label());
                    }
                });
        });
        if *policy != before {
            logf!("UI: rank policy {:?} → {:?}", before, policy);
        }

        if !super::ready(ui, app) {
            return;
        }

        let policy = app.state.options.view.rank_policy;
        let ranked = standings::standings(&app.snapshot.entries, &app.snapshot.tasks, policy);
        let rows = standings::table_rows(&ranked);

        ui.horizontal(|ui| {
            if ui.button("Copy CSV").clicked() {
                actions::copy_table(app, ui.ctx(), &TABLE_HEADERS, &rows, Delim::Csv);
            }
            if ui.button("Copy TSV").clicked() {
                actions::copy_table(app, ui.ctx(), &TABLE_HEADERS, &rows, Delim::Tsv);
            }
        });
        ui.add_space(4.0);

        if rows.is_empty() {
            ui.label("No entries yet.");
            return;
        }
        // Team column is clickable: jump to the drill-down.
        if let Some(team) = table::draw(ui, "standings_table", &TABLE_HEADERS, &rows, Some(1)) {
            app.state.gui.selected_team = Some(team);
            app.set_current_index(crate::gui::router::index_of(PageKind::Team));
        }
    }
}
