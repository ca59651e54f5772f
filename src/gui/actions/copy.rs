// src/gui/actions/copy.rs
use eframe::egui;

use crate::csv::{self, Delim};
use crate::gui::app::App;

pub fn copy_table(app: &App, ui_ctx: &egui::Context, headers: &[&str], rows: &[Vec<String>], delim: Delim) {
    if rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let headers: Vec<String> = headers.iter().map(|h| s!(*h)).collect();
    let txt = csv::rows_to_string(Some(headers.as_slice()), rows, delim);
    logf!("Copy: rows={}, headers={}, delim={:?}", rows.len(), headers.len(), delim);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
