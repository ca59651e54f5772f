// src/gui/components/history_chart.rs
//
// League position per completed round, one line per team. Position 1 is at
// the top.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, vec2};

use crate::league::history::{History, team_color};

const HEIGHT: f32 = 280.0;
const MARGIN_L: f32 = 36.0;
const MARGIN_R: f32 = 64.0;
const MARGIN_Y: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, h: &History) {
    if h.is_empty() {
        ui.label("No fully completed rounds yet.");
        return;
    }

    let width = ui.available_width().max(240.0);
    let (rect, _) = ui.allocate_exact_size(vec2(width, HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();
    painter.rect_filled(rect, 4.0, visuals.extreme_bg_color);

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + MARGIN_L, rect.top() + MARGIN_Y),
        Pos2::new(rect.right() - MARGIN_R, rect.bottom() - MARGIN_Y),
    );
    let rounds = h.labels.len();
    let teams = h.teams.len().max(1);

    let x_at = |i: usize| -> f32 {
        if rounds <= 1 { plot.center().x } else { plot.left() + plot.width() * i as f32 / (rounds - 1) as f32 }
    };
    let y_at = |pos: usize| -> f32 {
        if teams <= 1 { plot.center().y } else { plot.top() + plot.height() * (pos - 1) as f32 / (teams - 1) as f32 }
    };

    let grid = Stroke::new(1.0, visuals.weak_text_color().linear_multiply(0.3));
    let font = FontId::proportional(11.0);
    let text_color = visuals.text_color();

    for pos in 1..=teams {
        let y = y_at(pos);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], grid);
        painter.text(Pos2::new(rect.left() + 6.0, y), Align2::LEFT_CENTER, format!("#{pos}"), font.clone(), text_color);
    }
    for (i, label) in h.labels.iter().enumerate() {
        painter.text(Pos2::new(x_at(i), rect.bottom() - 4.0), Align2::CENTER_BOTTOM, label, font.clone(), text_color);
    }

    for (ti, team) in h.teams.iter().enumerate() {
        let Some(series) = h.series(team) else { continue };
        let [r, g, b] = team_color(team, ti);
        let color = Color32::from_rgb(r, g, b);

        let pts: Vec<Pos2> = series.iter().enumerate().map(|(i, &p)| Pos2::new(x_at(i), y_at(p))).collect();
        painter.add(egui::Shape::line(pts.clone(), Stroke::new(2.0, color)));
        for p in &pts {
            painter.circle_filled(*p, 3.0, color);
        }
        if let Some(last) = pts.last() {
            painter.text(Pos2::new(last.x + 8.0, last.y), Align2::LEFT_CENTER, team, font.clone(), color);
        }
    }
}
