// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender},
    },
};

use chrono::Local;
use eframe::egui;

use crate::{
    config::state::AppState,
    league::{DraftState, EntryForm, Mode, entry::NormalizedRow, standings},
    remote::{HttpSource, LeagueSource, Snapshot},
};

use super::{
    actions,
    pages::{Page, PageKind},
    router,
};

/// What the worker thread hands back to the UI thread.
pub enum Msg {
    Loaded(crate::Result<Snapshot>),
    Draft(crate::Result<Option<NormalizedRow>>),
    Wrote { mode: Mode, result: crate::Result<()> },
}

pub type SharedSource = Arc<dyn LeagueSource + Send + Sync>;

pub fn run(native: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    let source: SharedSource = Arc::new(HttpSource::new(state.options.source.clone()));
    eframe::run_native(
        "Challenge Tracker",
        native,
        Box::new(move |cc| {
            let mut app = App::new(state, source);
            actions::refresh(&mut app, &cc.egui_ctx, true);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub source: SharedSource,

    // last successful load
    pub snapshot: Snapshot,
    pub loaded: bool,

    // Add tab
    pub form: EntryForm,
    pub confirm_submit: bool,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub loading: bool,
    pub writing: bool,

    pub tx: Sender<Msg>,
    rx: Receiver<Msg>,
}

impl App {
    pub fn new(state: AppState, source: SharedSource) -> Self {
        let (tx, rx) = mpsc::channel();
        let form = EntryForm::today(&state.options.source.round_id);
        logf!("Init: round={} policy={:?}", form.round_id, state.options.view.rank_policy);

        Self {
            state,
            source,
            snapshot: Snapshot::default(),
            loaded: false,
            form,
            confirm_submit: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            loading: false,
            writing: false,
            tx,
            rx,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Team names seen in the loaded entries, sorted.
    pub fn teams(&self) -> Vec<String> {
        standings::aggregate(&self.snapshot.entries, &self.snapshot.tasks)
            .into_iter()
            .map(|t| t.team)
            .collect()
    }

    /// Drain worker results. Called once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                Msg::Loaded(Ok(snap)) => {
                    self.snapshot = snap;
                    self.loaded = true;
                    self.loading = false;
                    if self.state.gui.selected_team.is_none() {
                        self.state.gui.selected_team = self.teams().into_iter().next();
                    }
                    self.status("Ready");
                }
                Msg::Loaded(Err(e)) => {
                    self.loading = false;
                    loge!("Load: {e}");
                    self.status(format!("Load failed: {e}"));
                }
                Msg::Draft(Ok(Some(row))) => {
                    // Never clobber a form the user is already editing.
                    if self.form.state() == DraftState::Empty {
                        self.form.restore(&row, &self.snapshot.tasks);
                        self.status("Draft restored");
                    } else {
                        logd!("Draft: pending row ignored, form state {:?}", self.form.state());
                    }
                }
                Msg::Draft(Ok(None)) => logd!("Draft: none pending"),
                Msg::Draft(Err(e)) => logw!("Draft: load failed: {e}"),
                Msg::Wrote { mode, result } => {
                    self.writing = false;
                    match (mode, result) {
                        (Mode::Save, Ok(())) => self.status("Draft saved."),
                        (Mode::Submit, Ok(())) => {
                            self.form.finish_submit(Local::now().date_naive());
                            actions::refresh(self, ctx, false);
                            self.status("Submitted!");
                        }
                        (Mode::Save, Err(e)) => {
                            loge!("Write: save failed: {e}");
                            self.status("Save failed.");
                        }
                        (Mode::Submit, Err(e)) => {
                            loge!("Write: submit failed: {e}");
                            self.status("Submission failed.");
                        }
                    }
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            super::components::status_bar::draw(ui, self);
        });

        if self.current_page_kind() == PageKind::Team {
            egui::SidePanel::left("teams")
                .resizable(false)
                .show(ctx, |ui| {
                    super::components::team_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });

        super::components::confirm::draw(ctx, self);
    }
}
