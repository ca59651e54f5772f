// tests/draft.rs
//
// The add-entry form: validation, payload shape, restore and reset.
use chrono::NaiveDate;

use challenge_tracker::Error;
use challenge_tracker::league::{DraftState, EntryForm, Mode, TaskDefinition, TaskTable};

mod common;
use common::{row, tasks};

fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
}

fn form() -> EntryForm {
    EntryForm::new("4", sunday())
}

#[test]
fn fresh_form_defaults() {
    let f = form();
    assert_eq!(f.state(), DraftState::Empty);
    // Sunday 16th → Monday of the last full week is the 3rd
    assert_eq!(f.starting_date, "2025-03-03");
    assert_eq!(f.short_week, 7);
    assert!(f.team.is_empty());
    assert!(f.scores().is_empty());

    let monday = EntryForm::new("4", NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    assert_eq!(monday.starting_date, "2025-03-03");
}

#[test]
fn save_needs_team_and_date() {
    let t = tasks();
    let mut f = form();
    f.set_score(&t, "T1_Score", Some(3.0));
    let err = f.save(&t, "k").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(f.state(), DraftState::Editing);

    f.set_team("AMC");
    f.set_starting_date("not a date");
    assert!(f.starting_date.is_empty());
    assert!(f.save(&t, "k").is_err());

    f.set_starting_date("3/10/2025");
    let p = f.save(&t, "k").unwrap();
    assert_eq!(f.state(), DraftState::Saved);
    assert_eq!(p.mode(), Some("save"));
    assert_eq!(p.get("StartingDate"), Some("2025-03-10"));
}

#[test]
fn payload_field_order_and_total() {
    let t = tasks();
    let mut f = form();
    f.set_team("BOS");
    f.set_short_week(5);
    f.set_comments("rainy");
    f.set_score(&t, "T1_Score", Some(9.0));

    let p = f.payload(&t, Mode::Submit, "secret");
    let names: Vec<&str> = p.fields().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        names,
        ["Mode", "RoundID", "StartingDate", "Team", "Player", "ShortWeek", "Comments", "TotalPoints", "T1_Score", "T2_Score", "key"]
    );
    assert_eq!(p.get("RoundID"), Some("4"));
    assert_eq!(p.get("Player"), Some(""));
    assert_eq!(p.get("ShortWeek"), Some("5"));
    // blank T2 goes out as 0 and is scored as 0 (a clean avoidance week)
    assert_eq!(p.get("T2_Score"), Some("0"));
    assert_eq!(p.get("TotalPoints"), Some("43.00"));
    assert_eq!(p.total_points(), f.live_total(&t));
    assert_eq!(p.get("key"), Some("secret"));
}

#[test]
fn payload_total_matches_points_sum() {
    let t = tasks();
    let mut f = form();
    f.set_team("AMC");
    for (k, v) in [("T1_Score", 13.5), ("T2_Score", 7.0)] {
        f.set_score(&t, k, Some(v));
    }
    let p = f.payload(&t, Mode::Save, "");
    let expected = t.total_points(f.scores());
    assert_eq!(p.get("TotalPoints").unwrap(), format!("{expected:.2}"));
}

#[test]
fn scores_are_clamped_and_stepped() {
    let t = tasks();
    let mut f = form();
    f.set_score(&t, "T1_Score", Some(99.0));
    assert_eq!(f.score("T1_Score"), Some(20.0));
    f.set_score(&t, "T1_Score", Some(-4.0));
    assert_eq!(f.score("T1_Score"), Some(0.0));

    f.step(&t, "T1_Score", false);
    assert_eq!(f.score("T1_Score"), Some(0.0));
    f.step(&t, "T2_Score", true);
    f.step(&t, "T2_Score", true);
    assert_eq!(f.score("T2_Score"), Some(2.0));

    f.set_score(&t, "T2_Score", None);
    assert_eq!(f.score("T2_Score"), None);
    f.set_score(&t, "T2_Score", Some(f64::NAN));
    assert_eq!(f.score("T2_Score"), None);
}

#[test]
fn submit_needs_confirmation() {
    let t = tasks();
    let mut f = form();
    f.set_team("AMC");
    assert!(f.submit(&t, "k", false).is_none());
    assert_eq!(f.state(), DraftState::Editing);

    let p = f.submit(&t, "k", true).unwrap();
    assert_eq!(p.mode(), Some("submit"));
    assert_eq!(f.state(), DraftState::Submitted);

    f.finish_submit(sunday());
    assert_eq!(f, form());
}

#[test]
fn restore_from_draft_row() {
    let t = tasks();
    let mut f = form();
    let draft = row(r#"{"Team ":"HST","Starting Date":45726,"ShortWeek":"4",
        "Notes":"from notes","T1_Score":"7","T2_Score":"","T9_Score":"3"}"#);
    f.restore(&draft, &t);

    assert_eq!(f.state(), DraftState::Saved);
    assert_eq!(f.team, "HST");
    assert_eq!(f.starting_date, "2025-03-10");
    assert_eq!(f.short_week, 4);
    assert_eq!(f.comments, "from notes");
    assert_eq!(f.score("T1_Score"), Some(7.0));
    assert_eq!(f.score("T2_Score"), None);
    assert_eq!(f.score("T9_Score"), None);

    f.set_comments("edited");
    assert_eq!(f.state(), DraftState::Editing);
}

#[test]
fn blank_max_caps_inputs_at_100() {
    let mut open = TaskDefinition::normal(5, "Open ended", 10.0, 5.0, 1.0, 0.0);
    open.max = None;
    let t = TaskTable::new(vec![open]);
    let mut f = form();
    f.set_score(&t, "T5_Score", Some(250.0));
    assert_eq!(f.score("T5_Score"), Some(100.0));
    f.step(&t, "T5_Score", true);
    assert_eq!(f.score("T5_Score"), Some(100.0));
}

#[test]
fn legacy_true_short_week_restores_as_six_days() {
    let t = tasks();
    let mut f = form();
    f.restore(&row(r#"{"Team":"HST","ShortWeek":"TRUE"}"#), &t);
    assert_eq!(f.short_week, 6);
    assert_eq!(f.payload(&t, Mode::Save, "").get("ShortWeek"), Some("6"));
}
