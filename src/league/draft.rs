// src/league/draft.rs
//
// The add-entry form: one team-week being edited, saved as a draft or
// submitted. Both writes carry the full score set and a TotalPoints that is
// recomputed from it right before the payload is built.
//
//   Empty ──edit──▶ Editing ──save──▶ Saved ──edit──▶ Editing
//                      │                 │
//                      └─────submit──────┴──▶ Submitted ──finish──▶ Empty

use chrono::{Local, NaiveDate};

use crate::config::consts::{DEFAULT_SCORE_MAX, DEFAULT_SHORT_WEEK};
use crate::core::dates::{last_full_week_monday, to_ymd};
use crate::error::{Error, Result};

use super::Scores;
use super::entry::{NormalizedRow, normalize_short_week, value_date, value_num, value_text};
use super::tasks::{TaskDefinition, TaskTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Save,
    Submit,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self { Mode::Save => "save", Mode::Submit => "submit" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    Editing,
    Saved,
    Submitted,
}

/// Form fields in the order the script endpoint expects them.
#[derive(Clone, Debug, PartialEq)]
pub struct Payload {
    fields: Vec<(String, String)>,
}

impl Payload {
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn mode(&self) -> Option<&str> {
        self.get("Mode")
    }

    pub fn total_points(&self) -> f64 {
        self.get("TotalPoints").and_then(|v| v.parse().ok()).unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntryForm {
    pub round_id: String,
    pub team: String,
    /// "YYYY-MM-DD"
    pub starting_date: String,
    pub short_week: u8,
    pub comments: String,
    /// Blank fields are absent.
    scores: Scores,
    state: DraftState,
}

fn round6(n: f64) -> f64 {
    (n * 1e6).round() / 1e6
}

impl EntryForm {
    /// Fresh form for `round_id`, dated from `today`.
    pub fn new(round_id: &str, today: NaiveDate) -> Self {
        Self {
            round_id: s!(round_id),
            team: s!(),
            starting_date: last_full_week_monday(today).format("%Y-%m-%d").to_string(),
            short_week: DEFAULT_SHORT_WEEK,
            comments: s!(),
            scores: Scores::new(),
            state: DraftState::Empty,
        }
    }

    pub fn today(round_id: &str) -> Self {
        Self::new(round_id, Local::now().date_naive())
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn score(&self, key: &str) -> Option<f64> {
        self.scores.get(key).copied()
    }

    fn touch(&mut self) {
        self.state = DraftState::Editing;
    }

    pub fn set_team(&mut self, team: &str) {
        self.team = team.trim().to_string();
        self.touch();
    }

    pub fn set_starting_date(&mut self, date: &str) {
        self.starting_date = to_ymd(date);
        self.touch();
    }

    pub fn set_short_week(&mut self, days: u8) {
        self.short_week = if (4..=7).contains(&days) { days } else { DEFAULT_SHORT_WEEK };
        self.touch();
    }

    pub fn set_comments(&mut self, text: &str) {
        self.comments = s!(text);
        self.touch();
    }

    /// Set or clear a score. Values are clamped to `[0, max]` for the task.
    pub fn set_score(&mut self, tasks: &TaskTable, key: &str, value: Option<f64>) {
        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                let max = tasks.get(key).map(TaskDefinition::input_max).unwrap_or(DEFAULT_SCORE_MAX);
                self.scores.insert(s!(key), round6(v.clamp(0.0, max)));
            }
            None => {
                self.scores.remove(key);
            }
        }
        self.touch();
    }

    /// The -/+ buttons: always one unit, clamped.
    pub fn step(&mut self, tasks: &TaskTable, key: &str, up: bool) {
        let current = self.score(key).unwrap_or(0.0);
        let next = if up { current + 1.0 } else { current - 1.0 };
        self.set_score(tasks, key, Some(next));
    }

    /// Running total shown under the form.
    pub fn live_total(&self, tasks: &TaskTable) -> f64 {
        tasks.total_points(&self.scores)
    }

    /// Build the write payload. Every task gets a score (blank → 0) and the
    /// total is recomputed from exactly those values.
    pub fn payload(&self, tasks: &TaskTable, mode: Mode, write_key: &str) -> Payload {
        let mut sent = Scores::new();
        for def in tasks.iter() {
            let key = def.key();
            let v = self.score(&key).unwrap_or(0.0);
            sent.insert(key, v);
        }
        let total = tasks.total_points(&sent);

        let mut fields: Vec<(String, String)> = vec![
            (s!("Mode"), s!(mode.as_str())),
            (s!("RoundID"), self.round_id.clone()),
            (s!("StartingDate"), self.starting_date.clone()),
            (s!("Team"), self.team.clone()),
            (s!("Player"), s!()),
            (s!("ShortWeek"), self.short_week.to_string()),
            (s!("Comments"), self.comments.clone()),
            (s!("TotalPoints"), format!("{:.2}", total)),
        ];
        for def in tasks.iter() {
            let key = def.key();
            let v = sent.get(&key).copied().unwrap_or(0.0);
            fields.push((key, v.to_string()));
        }
        fields.push((s!("key"), s!(write_key)));

        Payload { fields }
    }

    /// Draft save. Needs a team and a starting date.
    pub fn save(&mut self, tasks: &TaskTable, write_key: &str) -> Result<Payload> {
        if self.team.is_empty() || self.starting_date.is_empty() {
            return Err(Error::validation("Pick Team and Starting Date before saving."));
        }
        let payload = self.payload(tasks, Mode::Save, write_key);
        self.state = DraftState::Saved;
        logf!("Draft: saved team={} date={} total={}", self.team, self.starting_date, payload.get("TotalPoints").unwrap_or(""));
        Ok(payload)
    }

    /// Final submit. Does nothing unless the user confirmed.
    pub fn submit(&mut self, tasks: &TaskTable, write_key: &str, confirmed: bool) -> Option<Payload> {
        if !confirmed {
            logd!("Draft: submit cancelled");
            return None;
        }
        let payload = self.payload(tasks, Mode::Submit, write_key);
        self.state = DraftState::Submitted;
        logf!("Draft: submitted team={} date={} total={}", self.team, self.starting_date, payload.get("TotalPoints").unwrap_or(""));
        Some(payload)
    }

    /// After a submit went through: back to a fresh form for the same round.
    pub fn finish_submit(&mut self, today: NaiveDate) {
        *self = Self::new(&self.round_id, today);
    }

    /// Load the pending draft row. Only tasks in `tasks` are restored;
    /// unreadable scores become 0.
    pub fn restore(&mut self, row: &NormalizedRow, tasks: &TaskTable) {
        if let Some(d) = row.get("StartingDate").map(value_date).filter(|d| !d.is_empty()) {
            self.starting_date = d;
        }
        if let Some(t) = row.text("Team").map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
            self.team = t;
        }
        self.short_week = normalize_short_week(&row.text("ShortWeek").unwrap_or_default());
        self.comments = row
            .text("Comments")
            .or_else(|| row.text("Notes"))
            .unwrap_or_default();

        for def in tasks.iter() {
            let key = def.key();
            let Some(raw) = row.get(&key) else { continue };
            if value_text(raw).trim().is_empty() {
                continue;
            }
            let v = value_num(raw).filter(|v| v.is_finite()).unwrap_or(0.0);
            self.scores.insert(key, v);
        }

        self.state = DraftState::Saved;
        logf!("Draft: restored team={} date={} scores={}", self.team, self.starting_date, self.scores.len());
    }
}
