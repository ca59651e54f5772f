// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use challenge_tracker::config::{options::AppOptions, state::AppState};
use challenge_tracker::gui;
use eframe::egui::{IconData, ViewportBuilder};

const ICON_SIZE: u32 = 64;

/// Three rising bars on a dark tile.
fn app_icon() -> IconData {
    let bars = [(10, 26, 36), (27, 43, 22), (44, 60, 8)];
    let rgba = image::RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let lit = bars.iter().any(|&(x0, x1, top)| x >= x0 && x < x1 && y >= top && y < 56);
        if lit {
            image::Rgba([240, 180, 40, 255])
        } else {
            image::Rgba([32, 36, 44, 255])
        }
    });
    IconData { rgba: rgba.into_raw(), width: ICON_SIZE, height: ICON_SIZE }
}

fn main() {
    let state = AppState::with_options(AppOptions::from_env());
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
