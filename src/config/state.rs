// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Team shown on the Team tab
    pub selected_team: Option<String>,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            selected_team: None,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}

impl AppState {
    pub fn with_options(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
