// src/gui/pages/teams.rs
//
// Every team at a glance (games by week length, completions, maxes), ordered
// fewest games first, then the position history chart.

use eframe::egui;

use crate::csv::Delim;
use crate::gui::{actions, app::App, components::{history_chart, table}};
use crate::league::{
    RankPolicy, history,
    standings::{self, SUMMARY_HEADERS},
};

use super::{Page, PageKind};

pub struct TeamsPage;
pub static PAGE: TeamsPage = TeamsPage;

impl Page for TeamsPage {
    fn kind(&self) -> PageKind { PageKind::Teams }
    fn title(&self) -> &'static str { "Teams" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if !super::ready(ui, app) {
            return;
        }

        let ranked = standings::standings(&app.snapshot.entries, &app.snapshot.tasks, RankPolicy::FewestGames);
        let rows = standings::summary_rows(&ranked);

        ui.horizontal(|ui| {
            if ui.button("Copy CSV").clicked() {
                actions::copy_table(app, ui.ctx(), &SUMMARY_HEADERS, &rows, Delim::Csv);
            }
            if ui.button("Copy TSV").clicked() {
                actions::copy_table(app, ui.ctx(), &SUMMARY_HEADERS, &rows, Delim::Tsv);
            }
        });

        egui::ScrollArea::vertical().id_salt("teams_page_scroll").show(ui, |ui| {
            if rows.is_empty() {
                ui.label("No entries yet.");
            } else if let Some(team) = table::draw(ui, "teams_table", &SUMMARY_HEADERS, &rows, Some(0)) {
                app.state.gui.selected_team = Some(team);
                app.set_current_index(crate::gui::router::index_of(PageKind::Team));
            }

            ui.add_space(12.0);
            ui.heading("Standings history");
            let h = history::build(&app.snapshot.entries);
            history_chart::draw(ui, &h);
        });
    }
}
