// src/league/entry.rs
//
// Submitted team-week rows from the script endpoint. The sheet behind it is
// hand-edited, so keys are matched loosely (see `normalize_key`) and every
// value may arrive as a string or a number.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::config::consts::DEFAULT_SHORT_WEEK;
use crate::core::dates::{serial_to_ymd, to_ymd};
use crate::core::sanitize::{normalize_key, parse_num};
use crate::error::Result;

use super::Scores;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Entry {
    pub team: String,
    pub round_id: Option<String>,
    /// "YYYY-MM-DD" when readable, otherwise the raw cell.
    pub starting_date: String,
    /// 7 for a full week, 4..=6 for a short week.
    pub short_week: u8,
    pub scores: Scores,
    pub total_points: f64,
    pub comments: String,
}

impl Entry {
    /// Round grouping key: RoundID, else the starting date.
    pub fn round_key(&self) -> &str {
        match self.round_id.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => &self.starting_date,
        }
    }

    pub fn score(&self, key: &str) -> Option<f64> {
        self.scores.get(key).copied()
    }
}

/// Days active in the week. Legacy sheets stored a boolean:
/// TRUE meant a 6-day week, FALSE a full one.
pub fn normalize_short_week(raw: &str) -> u8 {
    let s = raw.trim();
    if s.is_empty() {
        return DEFAULT_SHORT_WEEK;
    }
    if let Ok(n) = s.parse::<u8>() {
        if (4..=7).contains(&n) {
            return n;
        }
    }
    if s.eq_ignore_ascii_case("true") {
        return 6;
    }
    DEFAULT_SHORT_WEEK
}

/// Flatten a JSON cell to text the way the sheet would display it.
pub fn value_text(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Numeric reading of a JSON cell; strings go through the lenient parser.
pub fn value_num(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_num(s),
        _ => None,
    }
}

/// Dates can come back as text or as a spreadsheet serial number.
pub fn value_date(v: &Value) -> String {
    match v {
        Value::Number(n) => n.as_f64().map(serial_to_ymd).unwrap_or_default(),
        Value::String(s) => {
            let ymd = to_ymd(s);
            if ymd.is_empty() { s.trim().to_string() } else { ymd }
        }
        _ => s!(),
    }
}

/// `t12_score` → `Some(12)`.
fn task_id_of(norm_key: &str) -> Option<u32> {
    norm_key
        .strip_prefix('t')?
        .strip_suffix("_score")?
        .parse()
        .ok()
}

/// Row object keyed by normalised column name.
#[derive(Clone, Debug, Default)]
pub struct NormalizedRow(HashMap<String, Value>);

impl NormalizedRow {
    pub fn new(obj: &serde_json::Map<String, Value>) -> Self {
        Self(obj.iter().map(|(k, v)| (normalize_key(k), v.clone())).collect())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(&normalize_key(name))
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(value_text)
    }

    /// Every `T<n>_Score` column with a numeric value, under its canonical key.
    pub fn scores(&self) -> Scores {
        self.0
            .iter()
            .filter_map(|(k, v)| {
                let id = task_id_of(k)?;
                let n = value_num(v).filter(|n| n.is_finite())?;
                Some((task_key!(id), n))
            })
            .collect()
    }
}

impl From<&NormalizedRow> for Entry {
    fn from(row: &NormalizedRow) -> Self {
        Entry {
            team: row.text("Team").map(|t| t.trim().to_string()).unwrap_or_default(),
            round_id: row
                .text("RoundID")
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            starting_date: row.get("StartingDate").map(value_date).unwrap_or_default(),
            short_week: normalize_short_week(&row.text("ShortWeek").unwrap_or_default()),
            scores: row.scores(),
            total_points: row
                .get("TotalPoints")
                .and_then(value_num)
                .filter(|n| n.is_finite())
                .unwrap_or(0.0),
            comments: row
                .text("Comments")
                .or_else(|| row.text("Notes"))
                .unwrap_or_default(),
        }
    }
}

/// Raw JSON objects from an endpoint body; non-object items are dropped.
pub fn parse_rows(json: &str) -> Result<Vec<NormalizedRow>> {
    let items: Vec<Value> = serde_json::from_str(json)?;
    Ok(items
        .iter()
        .filter_map(Value::as_object)
        .map(NormalizedRow::new)
        .collect())
}

/// Entries from the entries endpoint body. Rows without a team are dropped.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = parse_rows(json)?
        .iter()
        .map(Entry::from)
        .filter(|e| !e.team.is_empty())
        .collect();
    logd!("Entries: parsed {} row(s)", entries.len());
    Ok(entries)
}

