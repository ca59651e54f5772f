// tests/gui_app.rs
//
// Worker results as the UI thread sees them through `App::poll`.
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use challenge_tracker::config::state::AppState;
use challenge_tracker::gui::actions;
use challenge_tracker::gui::app::{App, Msg, SharedSource};
use challenge_tracker::league::{DraftState, Mode};
use eframe::egui;

mod common;
use common::{FakeSource, row, tasks};

fn source_with_draft() -> Arc<FakeSource> {
    let mut src = FakeSource::new(tasks(), vec![]);
    src.draft = Some(row(r#"{"Team":"HST","StartingDate":"2025-03-03","T1_Score":"7"}"#));
    Arc::new(src)
}

/// Poll until `done` holds or two seconds pass.
fn poll_until(app: &mut App, ctx: &egui::Context, done: impl Fn(&App) -> bool) {
    let start = Instant::now();
    while !done(app) && start.elapsed() < Duration::from_secs(2) {
        app.poll(ctx);
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn refresh_restores_pending_draft() {
    let src = source_with_draft();
    let shared: SharedSource = src.clone();
    let mut app = App::new(AppState::default(), shared);
    let ctx = egui::Context::default();

    actions::refresh(&mut app, &ctx, true);
    poll_until(&mut app, &ctx, |a| a.form.state() != DraftState::Empty);

    assert_eq!(app.form.state(), DraftState::Saved);
    assert_eq!(app.form.team, "HST");
    assert_eq!(app.form.score("T1_Score"), Some(7.0));
}

#[test]
fn submit_resets_form_and_reload_skips_draft() {
    let src = source_with_draft();
    let shared: SharedSource = src.clone();
    let mut app = App::new(AppState::default(), shared);
    let ctx = egui::Context::default();

    app.form.set_team("AMC");
    app.writing = true;
    app.tx.send(Msg::Wrote { mode: Mode::Submit, result: Ok(()) }).unwrap();
    app.poll(&ctx);

    assert!(!app.writing);
    assert!(app.loading, "a successful submit reloads the league");
    assert_eq!(app.form.state(), DraftState::Empty);

    // The reload started by the submit lands; give a stray draft time to arrive.
    poll_until(&mut app, &ctx, |a| a.loaded && !a.loading);
    thread::sleep(Duration::from_millis(100));
    app.poll(&ctx);

    assert!(app.loaded);
    assert_eq!(app.form.state(), DraftState::Empty);
    assert!(app.form.team.is_empty());
    assert_eq!(app.form.score("T1_Score"), None);
    assert_eq!(src.draft_reads(), 0);
}

#[test]
fn failed_submit_keeps_input() {
    let mut app = App::new(AppState::default(), source_with_draft());
    let ctx = egui::Context::default();

    app.form.set_team("AMC");
    app.tx
        .send(Msg::Wrote {
            mode: Mode::Submit,
            result: Err(challenge_tracker::Error::Status { status: 500, url: "x".into() }),
        })
        .unwrap();
    app.poll(&ctx);

    assert_eq!(app.form.team, "AMC");
    assert_eq!(app.status_text(), "Submission failed.");
    assert!(!app.loading);
}
