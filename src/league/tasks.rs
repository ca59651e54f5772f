// src/league/tasks.rs
//
// Task metadata from the published task sheet (CSV).
// Columns: TaskID, Task, Target, CompletionPoint, FractionPoint, IsAvoidance, Max
// Columns are found by header name; unknown headers fall back to that order.

use crate::config::consts::DEFAULT_SCORE_MAX;
use crate::core::sanitize::{is_true, normalize_key, normalize_ws, parse_finite};
use crate::csv::parse_rows;
use crate::error::{Error, Result};

use super::Scores;

#[derive(Clone, Debug, PartialEq)]
pub struct TaskDefinition {
    pub id: u32,
    pub name: String,
    pub target: Option<f64>,
    pub completion: Option<f64>,
    pub fraction: Option<f64>,
    pub is_avoidance: bool,
    pub max: Option<f64>,
}

impl TaskDefinition {
    /// Score field name, e.g. `T3_Score`.
    pub fn key(&self) -> String {
        task_key!(self.id)
    }

    /// Normal task with every number present; handy in tests and benches.
    pub fn normal(id: u32, name: &str, target: f64, completion: f64, fraction: f64, max: f64) -> Self {
        Self {
            id,
            name: s!(name),
            target: Some(target),
            completion: Some(completion),
            fraction: Some(fraction),
            is_avoidance: false,
            max: Some(max),
        }
    }

    /// Upper bound for score inputs: the sheet's Max, or 100 when blank.
    pub fn input_max(&self) -> f64 {
        self.max.filter(|m| m.is_finite()).unwrap_or(DEFAULT_SCORE_MAX).max(0.0)
    }

    pub fn avoidance(id: u32, name: &str, target: f64, completion: f64, fraction: f64, max: f64) -> Self {
        Self { is_avoidance: true, ..Self::normal(id, name, target, completion, fraction, max) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Col { Id, Name, Target, Completion, Fraction, Avoidance, Max }

const COLS: [(Col, &[&str]); 7] = [
    (Col::Id,         &["taskid", "id"]),
    (Col::Name,       &["taskname", "task", "name"]),
    (Col::Target,     &["target"]),
    (Col::Completion, &["completionpoint", "completionpoints", "completion"]),
    (Col::Fraction,   &["fractionpoint", "fractionpoints", "fraction"]),
    (Col::Avoidance,  &["isavoidance", "avoidance"]),
    (Col::Max,        &["max"]),
];

/// Column index per field, resolved once from the header row.
struct ColumnMap([usize; 7]);

impl ColumnMap {
    fn from_headers(headers: &[String]) -> Self {
        let norm: Vec<String> = headers.iter().map(|h| normalize_key(h)).collect();
        let mut ix = [0usize; 7];
        for (pos, (_, aliases)) in COLS.iter().enumerate() {
            ix[pos] = aliases
                .iter()
                .find_map(|a| norm.iter().position(|h| h == a))
                .unwrap_or(pos);
        }
        ColumnMap(ix)
    }

    fn cell<'r>(&self, row: &'r [String], col: Col) -> &'r str {
        let pos = COLS.iter().position(|(c, _)| *c == col).unwrap_or(0);
        row.get(self.0[pos]).map(|s| s.trim()).unwrap_or("")
    }
}

/// Ordered task definitions (sheet order), looked up by score key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskTable {
    tasks: Vec<TaskDefinition>,
}

impl TaskTable {
    pub fn new(tasks: Vec<TaskDefinition>) -> Self {
        Self { tasks }
    }

    /// Parse the task sheet. Bad numbers become `None`; rows without an
    /// integer TaskID are skipped. Only a missing header row is an error.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut rows = parse_rows(text.trim(), ',').into_iter();
        let headers = rows
            .next()
            .ok_or_else(|| Error::metadata("task sheet is empty"))?;
        let cols = ColumnMap::from_headers(&headers);

        let mut tasks = Vec::new();
        for row in rows {
            let raw_id = cols.cell(&row, Col::Id);
            if raw_id.is_empty() {
                continue;
            }
            let id = match raw_id.parse::<u32>() {
                Ok(id) => id,
                Err(_) => {
                    logw!("Tasks: skipping row with TaskID {:?}", raw_id);
                    continue;
                }
            };
            tasks.push(TaskDefinition {
                id,
                name: normalize_ws(cols.cell(&row, Col::Name)),
                target: parse_finite(cols.cell(&row, Col::Target)),
                completion: parse_finite(cols.cell(&row, Col::Completion)),
                fraction: parse_finite(cols.cell(&row, Col::Fraction)),
                is_avoidance: is_true(cols.cell(&row, Col::Avoidance)),
                max: parse_finite(cols.cell(&row, Col::Max)),
            });
        }

        logd!("Tasks: parsed {} definition(s)", tasks.len());
        Ok(Self { tasks })
    }

    pub fn len(&self) -> usize { self.tasks.len() }
    pub fn is_empty(&self) -> bool { self.tasks.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.iter()
    }

    /// Lookup by score key (`T<id>_Score`).
    pub fn get(&self, key: &str) -> Option<&TaskDefinition> {
        self.tasks.iter().find(|t| t.key() == key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.tasks.iter().map(TaskDefinition::key).collect()
    }

    /// Sum of points over every task; a missing score counts as 0.
    pub fn total_points(&self, scores: &Scores) -> f64 {
        self.tasks
            .iter()
            .map(|t| super::scoring::points(scores.get(&t.key()).copied().unwrap_or(0.0), t))
            .sum()
    }
}
