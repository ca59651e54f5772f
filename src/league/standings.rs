// src/league/standings.rs
//
// Per-team aggregates and the league table order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use super::entry::Entry;
use super::scoring::{is_completion, is_max};
use super::tasks::TaskTable;

/// How the league table is ordered. Name ascending always breaks ties last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RankPolicy {
    /// Total points, high to low.
    Points,
    /// Fewest games first, then lowest points: "who plays next".
    FewestGames,
    /// Points per game high to low, then points, then games.
    #[default]
    PerGameAverage,
}

impl RankPolicy {
    pub const ALL: [RankPolicy; 3] = [RankPolicy::PerGameAverage, RankPolicy::Points, RankPolicy::FewestGames];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pa" | "average" | "per-game" => Some(RankPolicy::PerGameAverage),
            "points" | "pts" => Some(RankPolicy::Points),
            "games" | "fewest-games" => Some(RankPolicy::FewestGames),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankPolicy::PerGameAverage => "Points per game",
            RankPolicy::Points => "Total points",
            RankPolicy::FewestGames => "Fewest games first",
        }
    }
}

/// Games played per week length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WeekBuckets {
    pub d7: u32,
    pub d6: u32,
    pub d5: u32,
    pub d4: u32,
}

impl WeekBuckets {
    fn count(&mut self, days: u8) {
        match days {
            6 => self.d6 += 1,
            5 => self.d5 += 1,
            4 => self.d4 += 1,
            _ => self.d7 += 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TeamAggregate {
    pub team: String,
    pub games_played: u32,
    pub total_points: f64,
    /// Scored task slots that met their target.
    pub completions: u32,
    /// Scored task slots that hit the max.
    pub maxes: u32,
    /// Scored task slots (denominator for the two counts above).
    pub scored_tasks: u32,
    pub weeks: WeekBuckets,
}

impl TeamAggregate {
    fn new(team: &str) -> Self {
        Self { team: s!(team), ..Self::default() }
    }

    /// Points per game; 0 before the first game.
    pub fn per_game(&self) -> f64 {
        if self.games_played == 0 { 0.0 } else { self.total_points / self.games_played as f64 }
    }
}

/// Group entries by team. Output is in team-name order; call `rank` for the table.
pub fn aggregate(entries: &[Entry], tasks: &TaskTable) -> Vec<TeamAggregate> {
    let mut by_team: BTreeMap<&str, TeamAggregate> = BTreeMap::new();

    for e in entries {
        if e.team.is_empty() {
            continue;
        }
        let agg = by_team
            .entry(e.team.as_str())
            .or_insert_with(|| TeamAggregate::new(&e.team));

        agg.games_played += 1;
        agg.total_points += e.total_points;
        agg.weeks.count(e.short_week);

        for def in tasks.iter() {
            let Some(score) = e.score(&def.key()) else { continue };
            agg.scored_tasks += 1;
            if is_completion(score, def) { agg.completions += 1; }
            if is_max(score, def) { agg.maxes += 1; }
        }
    }

    by_team.into_values().collect()
}

fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn asc(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Table comparator for `policy`.
pub fn compare(a: &TeamAggregate, b: &TeamAggregate, policy: RankPolicy) -> Ordering {
    let primary = match policy {
        RankPolicy::Points => desc(a.total_points, b.total_points),
        RankPolicy::FewestGames => a
            .games_played
            .cmp(&b.games_played)
            .then_with(|| asc(a.total_points, b.total_points)),
        RankPolicy::PerGameAverage => desc(a.per_game(), b.per_game())
            .then_with(|| desc(a.total_points, b.total_points))
            .then_with(|| b.games_played.cmp(&a.games_played)),
    };
    primary.then_with(|| a.team.cmp(&b.team))
}

pub fn rank(teams: &mut [TeamAggregate], policy: RankPolicy) {
    teams.sort_by(|a, b| compare(a, b, policy));
    logd!("Standings: ranked {} team(s) by {:?}", teams.len(), policy);
}

/// Aggregate + rank in one go.
pub fn standings(entries: &[Entry], tasks: &TaskTable, policy: RankPolicy) -> Vec<TeamAggregate> {
    let mut teams = aggregate(entries, tasks);
    rank(&mut teams, policy);
    teams
}

/// 1-based table position of `team` in an already ranked slice.
pub fn rank_of(ranked: &[TeamAggregate], team: &str) -> Option<usize> {
    ranked.iter().position(|t| t.team == team).map(|i| i + 1)
}

pub const TABLE_HEADERS: [&str; 7] = ["#", "Team", "Games", "Points", "PA", "Completions", "Maxes"];
pub const SUMMARY_HEADERS: [&str; 9] = ["Team", "Games", "7d", "6d", "5d", "4d", "Completions", "Maxes", "Points"];

/// League table rows for display/export.
pub fn table_rows(ranked: &[TeamAggregate]) -> Vec<Vec<String>> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, t)| vec![
            (i + 1).to_string(),
            t.team.clone(),
            t.games_played.to_string(),
            format!("{:.2}", t.total_points),
            format!("{:.2}", t.per_game()),
            format!("{}/{}", t.completions, t.scored_tasks),
            format!("{}/{}", t.maxes, t.scored_tasks),
        ])
        .collect()
}

/// Team summary rows (games by week length, completions, maxes).
pub fn summary_rows(ranked: &[TeamAggregate]) -> Vec<Vec<String>> {
    ranked
        .iter()
        .map(|t| vec![
            t.team.clone(),
            t.games_played.to_string(),
            t.weeks.d7.to_string(),
            t.weeks.d6.to_string(),
            t.weeks.d5.to_string(),
            t.weeks.d4.to_string(),
            format!("{}/{}", t.completions, t.scored_tasks),
            format!("{}/{}", t.maxes, t.scored_tasks),
            format!("{:.2}", t.total_points),
        ])
        .collect()
}

pub fn headers(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|h| s!(*h)).collect()
}
