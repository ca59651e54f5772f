// src/gui/components/confirm.rs
//
// Submit confirmation. Submits are final, so the window repeats what is
// about to be sent.

use eframe::egui::{self, RichText};
use crate::gui::{actions, app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.confirm_submit {
        return;
    }

    let total = app.form.live_total(&app.snapshot.tasks);
    let team = if app.form.team.is_empty() { s!("(no team)") } else { app.form.team.clone() };
    let mut answer: Option<bool> = None;

    egui::Window::new("Submit entry?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Team: {team}"));
            ui.label(format!("Week of {} ({} days)", app.form.starting_date, app.form.short_week));
            ui.label(RichText::new(format!("Total: {total:.2}")).strong());
            ui.label("Submitted entries can't be edited here afterwards.");
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Submit").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });

    if let Some(yes) = answer {
        logd!("UI: submit confirm → {yes}");
        actions::submit(app, ctx, yes);
    }
}
