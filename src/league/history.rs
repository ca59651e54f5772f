// src/league/history.rs
//
// League position after each fully played round, for the history chart.
// A round only counts once every team has an entry for it.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::dates::parse_date;

use super::entry::Entry;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    /// "R1", "R2", ...
    pub labels: Vec<String>,
    /// Team names, sorted.
    pub teams: Vec<String>,
    /// Position per label for each team, same order as `teams`.
    pub positions: Vec<Vec<usize>>,
}

impl History {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn series(&self, team: &str) -> Option<&[usize]> {
        let i = self.teams.iter().position(|t| t == team)?;
        self.positions.get(i).map(|v| v.as_slice())
    }
}

/// Numeric keys compare as numbers, dates as dates, everything else as text.
pub fn compare_round_keys(a: &str, b: &str) -> Ordering {
    if let (Some(na), Some(nb)) = (strict_num(a), strict_num(b)) {
        return na.partial_cmp(&nb).unwrap_or(Ordering::Equal);
    }
    if let (Some(da), Some(db)) = (parse_date(a), parse_date(b)) {
        return da.cmp(&db);
    }
    a.cmp(b)
}

/// Whole-string number (`"10"`), unlike the lenient prefix parser.
fn strict_num(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn build(entries: &[Entry]) -> History {
    let teams: Vec<String> = entries
        .iter()
        .filter(|e| !e.team.is_empty())
        .map(|e| e.team.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // round key -> team -> round points
    let mut rounds: BTreeMap<&str, HashMap<&str, f64>> = BTreeMap::new();
    for e in entries {
        let rk = e.round_key();
        if rk.is_empty() || e.team.is_empty() {
            continue;
        }
        *rounds.entry(rk).or_default().entry(e.team.as_str()).or_insert(0.0) += e.total_points;
    }

    let mut completed: Vec<(&str, HashMap<&str, f64>)> = rounds
        .into_iter()
        .filter(|(_, m)| teams.iter().all(|t| m.contains_key(t.as_str())))
        .collect();
    completed.sort_by(|a, b| compare_round_keys(a.0, b.0));

    if completed.is_empty() {
        logd!("History: no fully completed rounds ({} team(s))", teams.len());
        return History { teams, ..History::default() };
    }

    let mut cum: Vec<f64> = vec![0.0; teams.len()];
    let mut positions: Vec<Vec<usize>> = vec![Vec::with_capacity(completed.len()); teams.len()];

    for (_, round) in &completed {
        for (i, t) in teams.iter().enumerate() {
            cum[i] += round.get(t.as_str()).copied().unwrap_or(0.0);
        }
        let mut order: Vec<usize> = (0..teams.len()).collect();
        order.sort_by(|&a, &b| {
            cum[b]
                .partial_cmp(&cum[a])
                .unwrap_or(Ordering::Equal)
                .then_with(|| teams[a].cmp(&teams[b]))
        });
        for (pos, &ti) in order.iter().enumerate() {
            positions[ti].push(pos + 1);
        }
    }

    let labels = (1..=completed.len()).map(|i| format!("R{i}")).collect();
    History { labels, teams, positions }
}

/// Fixed team colours (RGB); unknown teams take the fallback palette by index.
const TEAM_COLORS: [(&str, [u8; 3]); 10] = [
    ("AMC", [0x00, 0x00, 0xff]),
    ("BIS", [0x3c, 0xb4, 0x4b]),
    ("BOS", [0xff, 0xe1, 0x19]),
    ("CAR", [0x43, 0x63, 0xd8]),
    ("FRE", [0xf5, 0x82, 0x31]),
    ("HST", [0x91, 0x1e, 0xb4]),
    ("GRE", [0x46, 0xf0, 0xf0]),
    ("OTT", [0xf0, 0x32, 0xe6]),
    ("PNX", [0xbc, 0xf6, 0x0c]),
    ("ZDG", [0xfa, 0xbe, 0xbe]),
];

const FALLBACK: [[u8; 3]; 10] = [
    [0xe6, 0x19, 0x4b], [0x3c, 0xb4, 0x4b], [0xff, 0xe1, 0x19], [0x43, 0x63, 0xd8], [0xf5, 0x82, 0x31],
    [0x91, 0x1e, 0xb4], [0x46, 0xf0, 0xf0], [0xf0, 0x32, 0xe6], [0xbc, 0xf6, 0x0c], [0xfa, 0xbe, 0xbe],
];

pub fn team_color(team: &str, index: usize) -> [u8; 3] {
    TEAM_COLORS
        .iter()
        .find(|(code, _)| *code == team)
        .map(|(_, c)| *c)
        .unwrap_or(FALLBACK[index % FALLBACK.len()])
}

/// Team codes with a fixed colour, in palette order.
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    let colors: &'static [(&str, [u8; 3])] = &TEAM_COLORS;
    colors.iter().map(|(code, _)| *code)
}
