// src/league/mod.rs
//
// Everything the pages compute: task sheet, points, standings, team
// drill-down, history and the add-entry form. No I/O in here.

use std::collections::BTreeMap;

pub mod draft;
pub mod entry;
pub mod history;
pub mod scoring;
pub mod standings;
pub mod tasks;
pub mod team_detail;

/// Raw score per task key (`T<id>_Score`).
pub type Scores = BTreeMap<String, f64>;

pub use draft::{DraftState, EntryForm, Mode, Payload};
pub use entry::Entry;
pub use standings::{RankPolicy, TeamAggregate};
pub use tasks::{TaskDefinition, TaskTable};
