// src/gui/components/table.rs
//
// Read-only striped table. Numeric-looking cells are centred.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

fn looks_numeric(s: &str) -> bool {
    let t = s.trim_start_matches('#');
    !t.is_empty() && t.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '/'))
}

/// Draw `rows` under `headers`. If `link_col` is set, that column's cells are
/// links; the clicked cell's text is returned.
pub fn draw(
    ui: &mut egui::Ui,
    id: &str,
    headers: &[&str],
    rows: &[Vec<String>],
    link_col: Option<usize>,
) -> Option<String> {
    let mut clicked = None;

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut table = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .min_scrolled_height(0.0);
    for (ci, h) in headers.iter().enumerate() {
        let w = if ci == 0 && h.len() <= 1 { 32.0 } else { 90.0 };
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(24.0));
    }

    table
        .header(24.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(*h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                for ci in 0..headers.len() {
                    let cell = r.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if link_col == Some(ci) {
                            if ui.link(cell).clicked() {
                                clicked = Some(s!(cell));
                            }
                        } else if looks_numeric(cell) {
                            ui.centered_and_justified(|ui| { ui.label(cell); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });

    clicked
}
