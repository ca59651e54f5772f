// src/gui/pages/team.rs
//
// One team's drill-down. The team comes from the side panel (or a click on
// the standings table).

use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::league::team_detail::{TaskStats, team_detail};

use super::{Page, PageKind};

pub struct TeamPage;
pub static PAGE: TeamPage = TeamPage;

impl Page for TeamPage {
    fn kind(&self) -> PageKind { PageKind::Team }
    fn title(&self) -> &'static str { "Team" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if !super::ready(ui, app) {
            return;
        }
        let Some(team) = app.state.gui.selected_team.clone() else {
            ui.label("Pick a team on the left.");
            return;
        };

        let policy = app.state.options.view.rank_policy;
        let detail = team_detail(&team, &app.snapshot.entries, &app.snapshot.tasks, policy);

        ui.horizontal(|ui| {
            ui.heading(&detail.team);
            let rank = detail.rank.map(|r| format!("#{r}")).unwrap_or_else(|| s!("unranked"));
            ui.label(RichText::new(rank).strong());
        });
        ui.label(format!(
            "{:.2} points over {} round(s), ranked by {}",
            detail.total_points,
            detail.rounds,
            policy.label().to_lowercase(),
        ));
        ui.separator();

        if detail.tasks.is_empty() {
            ui.label("No scored tasks yet.");
            return;
        }

        egui::ScrollArea::vertical().id_salt("team_cards").show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for st in &detail.tasks {
                    task_card(ui, st);
                }
            });
        });
    }
}

fn task_card(ui: &mut egui::Ui, st: &TaskStats) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(240.0);
        ui.label(RichText::new(&st.name).strong());
        ui.label(format!("Completed {}/{}   Maxed {}/{}", st.completed, st.total, st.maxed, st.total));
        ui.label(format!("{:.2} earned", st.earned));

        ui.add(
            egui::ProgressBar::new((st.target_percent() / 100.0) as f32)
                .text(format!("{:.0}% of target ({:.2})", st.target_percent(), st.target_available)),
        );
        ui.add(
            egui::ProgressBar::new((st.max_percent() / 100.0) as f32)
                .text(format!("{:.0}% of max ({:.2})", st.max_percent(), st.max_available)),
        );
    });
}
