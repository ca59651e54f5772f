// src/gui/actions/load.rs
use std::thread;

use eframe::egui;

use crate::gui::app::{App, Msg};
use crate::gui::progress::GuiProgress;
use crate::remote::load_snapshot;

/// Reload tasks and entries. With `restore_draft`, also fetch the pending
/// draft afterwards (start-up and the Refresh button, not after a submit).
pub fn refresh(app: &mut App, ctx: &egui::Context, restore_draft: bool) {
    if app.loading {
        logd!("Load: already running, ignoring refresh");
        return;
    }
    app.loading = true;
    app.status("Loading…");
    logf!("Load: begin (draft={restore_draft})");

    let source = app.source.clone();
    let tx = app.tx.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let snap = load_snapshot(source.as_ref(), Some(&mut prog));
        let ok = snap.is_ok();
        let _ = tx.send(Msg::Loaded(snap));
        ctx.request_repaint();

        if ok && restore_draft {
            let _ = tx.send(Msg::Draft(source.draft()));
            ctx.request_repaint();
        }
    });
}
