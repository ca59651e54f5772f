// src/league/team_detail.rs
//
// One team's drill-down: summary line plus a card per task.

use serde::Serialize;

use super::entry::Entry;
use super::scoring::{is_completion, is_max, max_points, points, target_points};
use super::standings::{RankPolicy, rank_of, standings};
use super::tasks::TaskTable;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskStats {
    pub key: String,
    pub name: String,
    /// Entries with a numeric score for this task.
    pub total: u32,
    pub completed: u32,
    pub maxed: u32,
    pub earned: f64,
    pub target_available: f64,
    pub max_available: f64,
}

impl TaskStats {
    /// Earned as a share of the target points, capped at 100.
    pub fn target_percent(&self) -> f64 {
        pct(self.earned, self.target_available)
    }

    /// Earned as a share of the max points, capped at 100.
    pub fn max_percent(&self) -> f64 {
        pct(self.earned, self.max_available)
    }
}

fn pct(earned: f64, available: f64) -> f64 {
    let denom = if available == 0.0 { 1.0 } else { available };
    (earned / denom * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamDetail {
    pub team: String,
    /// 1-based; `None` when the team has no entries.
    pub rank: Option<usize>,
    pub total_points: f64,
    pub rounds: usize,
    pub tasks: Vec<TaskStats>,
}

/// Per-task stats for `team`'s entries, in task-sheet order.
/// Tasks the team never scored are left out.
pub fn task_stats(team_entries: &[&Entry], tasks: &TaskTable) -> Vec<TaskStats> {
    tasks
        .iter()
        .filter_map(|def| {
            let key = def.key();
            let mut st = TaskStats { key: key.clone(), name: def.name.clone(), ..TaskStats::default() };

            for e in team_entries {
                let Some(score) = e.score(&key) else { continue };
                st.total += 1;
                if is_completion(score, def) { st.completed += 1; }
                if is_max(score, def) { st.maxed += 1; }
                st.earned += points(score, def);
                st.target_available += target_points(def);
                st.max_available += max_points(def);
            }

            (st.total > 0).then_some(st)
        })
        .collect()
}

pub fn team_detail(team: &str, entries: &[Entry], tasks: &TaskTable, policy: RankPolicy) -> TeamDetail {
    let ranked = standings(entries, tasks, policy);
    let own: Vec<&Entry> = entries.iter().filter(|e| e.team == team).collect();

    TeamDetail {
        team: s!(team),
        rank: rank_of(&ranked, team),
        total_points: own.iter().map(|e| e.total_points).sum(),
        rounds: own.len(),
        tasks: task_stats(&own, tasks),
    }
}
