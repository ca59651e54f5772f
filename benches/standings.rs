// benches/standings.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use challenge_tracker::league::{Entry, RankPolicy, Scores, TaskDefinition, TaskTable, history, standings};

const TEAMS: [&str; 10] = ["AMC", "BIS", "BOS", "CAR", "FRE", "HST", "GRE", "OTT", "PNX", "ZDG"];

fn sample_tasks() -> TaskTable {
    TaskTable::new(
        (1..=24)
            .map(|id| {
                let t = (id % 7 + 3) as f64;
                if id % 5 == 0 {
                    TaskDefinition::avoidance(id, "avoid", t, 10.0, 2.0, t * 2.0)
                } else {
                    TaskDefinition::normal(id, "task", t, 5.0, 1.5, t * 3.0)
                }
            })
            .collect(),
    )
}

/// Ten teams, `rounds` rounds each, deterministic scores.
fn sample_entries(tasks: &TaskTable, rounds: u32) -> Vec<Entry> {
    let mut out = Vec::new();
    for r in 1..=rounds {
        for (ti, team) in TEAMS.iter().enumerate() {
            let scores: Scores = tasks
                .iter()
                .map(|d| (d.key(), ((d.id as usize * 7 + ti * 3 + r as usize) % 12) as f64))
                .collect();
            out.push(Entry {
                team: team.to_string(),
                round_id: Some(r.to_string()),
                starting_date: String::new(),
                short_week: 4 + (r % 4) as u8,
                total_points: tasks.total_points(&scores),
                scores,
                comments: String::new(),
            });
        }
    }
    out
}

fn bench_standings(c: &mut Criterion) {
    let tasks = sample_tasks();
    let entries = sample_entries(&tasks, 52);

    for policy in RankPolicy::ALL {
        c.bench_function(&format!("standings_{policy:?}"), |b| {
            b.iter(|| {
                let ranked = standings::standings(black_box(&entries), black_box(&tasks), policy);
                black_box(ranked.len())
            })
        });
    }

    c.bench_function("history_build", |b| {
        b.iter(|| {
            let h = history::build(black_box(&entries));
            black_box(h.labels.len())
        })
    });
}

criterion_group!(benches, bench_standings);
criterion_main!(benches);
