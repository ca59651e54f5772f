// src/gui/actions/write.rs
use std::thread;

use eframe::egui;

use crate::gui::app::{App, Msg};
use crate::league::{Mode, Payload};

fn spawn_write(app: &mut App, ctx: &egui::Context, mode: Mode, payload: Payload) {
    app.writing = true;

    let source = app.source.clone();
    let tx = app.tx.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let result = source.write(&payload);
        let _ = tx.send(Msg::Wrote { mode, result });
        ctx.request_repaint();
    });
}

pub fn save(app: &mut App, ctx: &egui::Context) {
    if app.writing {
        return;
    }
    let key = app.state.options.source.write_key.clone();
    match app.form.save(&app.snapshot.tasks, &key) {
        Ok(payload) => {
            app.status("Saving draft…");
            spawn_write(app, ctx, Mode::Save, payload);
        }
        Err(e) => {
            logd!("Write: save rejected: {e}");
            app.status(e.to_string());
        }
    }
}

/// `confirmed` comes from the confirm dialog; false just closes it.
pub fn submit(app: &mut App, ctx: &egui::Context, confirmed: bool) {
    app.confirm_submit = false;
    if app.writing {
        return;
    }
    let key = app.state.options.source.write_key.clone();
    match app.form.submit(&app.snapshot.tasks, &key, confirmed) {
        Some(payload) => {
            app.status("Submitting…");
            spawn_write(app, ctx, Mode::Submit, payload);
        }
        None => app.status("Submit cancelled"),
    }
}
