// tests/common/mod.rs
//
// Shared fixtures: a small task sheet, entry builders and an in-memory
// LeagueSource.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use challenge_tracker::league::entry::NormalizedRow;
use challenge_tracker::league::{Entry, Payload, Scores, TaskDefinition, TaskTable};
use challenge_tracker::remote::LeagueSource;
use challenge_tracker::{Error, Result};

/// T1 normal (target 10, +5, x2, max 20), T2 avoidance (target 5, +10, x3, max 10).
pub fn tasks() -> TaskTable {
    TaskTable::new(vec![
        TaskDefinition::normal(1, "Steps", 10.0, 5.0, 2.0, 20.0),
        TaskDefinition::avoidance(2, "Snacks", 5.0, 10.0, 3.0, 10.0),
    ])
}

pub fn scores(pairs: &[(&str, f64)]) -> Scores {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub fn entry(team: &str, round: &str, total: f64) -> Entry {
    Entry {
        team: team.to_string(),
        round_id: Some(round.to_string()).filter(|r| !r.is_empty()),
        starting_date: String::new(),
        short_week: 7,
        scores: Scores::new(),
        total_points: total,
        comments: String::new(),
    }
}

pub fn scored(team: &str, round: &str, pairs: &[(&str, f64)]) -> Entry {
    let s = scores(pairs);
    let total = tasks().total_points(&s);
    Entry { scores: s, total_points: total, ..entry(team, round, total) }
}

pub fn row(json: &str) -> NormalizedRow {
    let v: serde_json::Value = serde_json::from_str(json).expect("fixture json");
    NormalizedRow::new(v.as_object().expect("fixture object"))
}

#[derive(Default)]
pub struct FakeSource {
    pub tasks: TaskTable,
    pub entries: Vec<Entry>,
    pub draft: Option<NormalizedRow>,
    pub fail_tasks: bool,
    pub fail_write: bool,
    pub writes: Mutex<Vec<Payload>>,
    pub draft_reads: AtomicUsize,
}

impl FakeSource {
    pub fn new(tasks: TaskTable, entries: Vec<Entry>) -> Self {
        Self { tasks, entries, ..Self::default() }
    }

    pub fn written(&self) -> Vec<Payload> {
        self.writes.lock().unwrap().clone()
    }

    pub fn draft_reads(&self) -> usize {
        self.draft_reads.load(Ordering::SeqCst)
    }
}

impl LeagueSource for FakeSource {
    fn tasks(&self) -> Result<TaskTable> {
        if self.fail_tasks {
            return Err(Error::metadata("sheet offline"));
        }
        Ok(self.tasks.clone())
    }

    fn entries(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn draft(&self) -> Result<Option<NormalizedRow>> {
        self.draft_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.draft.clone())
    }

    fn write(&self, payload: &Payload) -> Result<()> {
        if self.fail_write {
            return Err(Error::Status { status: 500, url: "fake".into() });
        }
        self.writes.lock().unwrap().push(payload.clone());
        Ok(())
    }
}
