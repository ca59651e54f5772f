// src/gui/pages/add.rs
//
// The add-entry form. Edits go straight into `app.form`; Save and Submit hand
// a payload to the write worker and stay disabled until it reports back.

use eframe::egui::{self, Color32, DragValue, RichText, widgets::Spinner};

use crate::gui::{actions, app::App};
use crate::league::{
    DraftState, history,
    scoring::{points, progress_percent},
};

use super::{Page, PageKind};

pub struct AddPage;
pub static PAGE: AddPage = AddPage;

impl Page for AddPage {
    fn kind(&self) -> PageKind { PageKind::Add }
    fn title(&self) -> &'static str { "Add" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.heading(format!("Round {}", app.form.round_id));
            ui.label(RichText::new(state_label(app.form.state())).weak());
        });
        ui.add_space(6.0);

        draw_header_fields(ui, app);
        ui.separator();

        let avail_h = (ui.available_height() - 48.0).max(120.0);
        egui::ScrollArea::vertical()
            .id_salt("add_tasks_scroll")
            .max_height(avail_h)
            .show(ui, |ui| draw_tasks(ui, app));

        ui.separator();
        draw_footer(ui, app);
    }
}

fn state_label(state: DraftState) -> &'static str {
    match state {
        DraftState::Empty => "new",
        DraftState::Editing => "unsaved changes",
        DraftState::Saved => "draft saved",
        DraftState::Submitted => "submitted",
    }
}

fn draw_header_fields(ui: &mut egui::Ui, app: &mut App) {
    // Known codes first, then anything else that has played.
    let mut teams: Vec<String> = history::known_codes().map(|c| s!(c)).collect();
    for t in app.teams() {
        if !teams.contains(&t) {
            teams.push(t);
        }
    }

    egui::Grid::new("add_header").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
        ui.label("Team:");
        let shown = if app.form.team.is_empty() { s!("Pick team") } else { app.form.team.clone() };
        let mut picked: Option<String> = None;
        egui::ComboBox::from_id_salt("add_team")
            .selected_text(shown)
            .show_ui(ui, |ui| {
                for t in &teams {
                    if ui.selectable_label(*t == app.form.team, t).clicked() {
                        picked = Some(t.clone());
                    }
                }
            });
        if let Some(t) = picked {
            logd!("UI: team → {t}");
            app.form.set_team(&t);
        }
        ui.end_row();

        ui.label("Starting date:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.form.starting_date)
                .hint_text("YYYY-MM-DD")
                .desired_width(110.0),
        );
        // Normalise once the user leaves the field; unparseable text clears it.
        if resp.lost_focus() {
            let raw = app.form.starting_date.clone();
            app.form.set_starting_date(&raw);
        }
        ui.end_row();

        ui.label("Short week:");
        ui.horizontal(|ui| {
            let mut days = app.form.short_week;
            for d in [7u8, 6, 5, 4] {
                ui.radio_value(&mut days, d, format!("{d} days"));
            }
            if days != app.form.short_week {
                app.form.set_short_week(days);
            }
        });
        ui.end_row();

        ui.label("Comments:");
        let mut comments = app.form.comments.clone();
        if ui
            .add(egui::TextEdit::multiline(&mut comments).desired_rows(2).desired_width(360.0))
            .changed()
        {
            app.form.set_comments(&comments);
        }
        ui.end_row();
    });
}

fn draw_tasks(ui: &mut egui::Ui, app: &mut App) {
    if app.snapshot.tasks.is_empty() {
        ui.label(if app.loading { "Loading tasks…" } else { "Task metadata unavailable." });
        return;
    }

    // Clone so the grid can mutate the form while walking the table.
    let tasks = app.snapshot.tasks.clone();

    egui::Grid::new("add_tasks").num_columns(5).striped(true).spacing([10.0, 4.0]).show(ui, |ui| {
        ui.label(RichText::new("Task").strong());
        ui.label(RichText::new("Score").strong());
        ui.label(RichText::new("Target").strong());
        ui.label(RichText::new("Points").strong());
        ui.label("");
        ui.end_row();

        for def in tasks.iter() {
            let key = def.key();
            let current = app.form.score(&key);

            let name = if def.is_avoidance {
                RichText::new(format!("{} (avoid)", def.name)).italics()
            } else {
                RichText::new(&def.name)
            };
            ui.label(name);

            ui.horizontal(|ui| {
                if ui.small_button("−").clicked() {
                    app.form.step(&tasks, &key, false);
                }
                let max = def.input_max();
                let mut v = current.unwrap_or(0.0);
                let drag = DragValue::new(&mut v).range(0.0..=max).speed(0.1).max_decimals(2);
                if ui.add(drag).changed() {
                    app.form.set_score(&tasks, &key, Some(v));
                }
                if ui.small_button("+").clicked() {
                    app.form.step(&tasks, &key, true);
                }
                if current.is_some() && ui.small_button("×").on_hover_text("Clear").clicked() {
                    app.form.set_score(&tasks, &key, None);
                }
            });

            ui.label(match (def.target, def.max) {
                (Some(t), Some(m)) => format!("{t} / {m}"),
                (Some(t), None) => format!("{t}"),
                _ => s!("-"),
            });

            match current {
                Some(score) => {
                    let pts = points(score, def);
                    let color = if pts < 0.0 { Color32::from_rgb(0xDC, 0x61, 0x49) } else { ui.visuals().text_color() };
                    ui.label(RichText::new(format!("{pts:.2}")).color(color));
                }
                None => {
                    ui.label(RichText::new("-").weak());
                }
            }

            let pct = current.map(|s| progress_percent(s, def)).unwrap_or(0.0);
            ui.add(egui::ProgressBar::new((pct / 100.0) as f32).desired_width(80.0));
            ui.end_row();
        }
    });
}

fn draw_footer(ui: &mut egui::Ui, app: &mut App) {
    let total = app.form.live_total(&app.snapshot.tasks);
    let can_write = app.loaded && !app.writing && !app.snapshot.tasks.is_empty();

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Total: {total:.2}")).strong().size(16.0));
        ui.add_space(24.0);

        if ui.add_enabled(can_write, egui::Button::new("Save Draft")).clicked() {
            actions::save(app, ui.ctx());
        }

        let submit = egui::Button::new(RichText::new("SUBMIT").color(Color32::BLACK).strong())
            .fill(Color32::from_rgb(0x3c, 0xb4, 0x4b));
        if ui.add_enabled(can_write, submit).clicked() {
            app.confirm_submit = true;
        }

        if app.writing {
            ui.add(Spinner::new().size(16.0));
        }
    });
}
