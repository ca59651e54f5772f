// tests/standings.rs
//
// Aggregation and the three table orders.
use challenge_tracker::league::RankPolicy;
use challenge_tracker::league::standings::{aggregate, rank_of, standings, summary_rows, table_rows};

mod common;
use common::{entry, scored, tasks};

fn order(policy: RankPolicy, es: &[challenge_tracker::league::Entry]) -> Vec<String> {
    standings(es, &tasks(), policy).into_iter().map(|t| t.team).collect()
}

#[test]
fn fewest_games_vs_points() {
    // A: 2 games, 60 pts. B: 1 game, 50 pts.
    let es = vec![entry("A", "1", 30.0), entry("A", "2", 30.0), entry("B", "1", 50.0)];
    assert_eq!(order(RankPolicy::FewestGames, &es), ["B", "A"]);
    assert_eq!(order(RankPolicy::Points, &es), ["A", "B"]);
    // 30 vs 50 per game
    assert_eq!(order(RankPolicy::PerGameAverage, &es), ["B", "A"]);
}

#[test]
fn coincidental_agreement() {
    let es = vec![entry("A", "1", 5.0), entry("A", "2", 5.0), entry("B", "1", 50.0)];
    assert_eq!(order(RankPolicy::FewestGames, &es), ["B", "A"]);
    assert_eq!(order(RankPolicy::Points, &es), ["B", "A"]);
}

#[test]
fn fewest_games_breaks_ties_on_lower_points() {
    let es = vec![entry("A", "1", 40.0), entry("B", "1", 10.0)];
    assert_eq!(order(RankPolicy::FewestGames, &es), ["B", "A"]);
}

#[test]
fn per_game_ties_fall_through_to_points_then_games_then_name() {
    let es = vec![
        entry("C", "1", 20.0),
        entry("B", "1", 10.0),
        entry("B", "2", 10.0),
        entry("A", "1", 10.0),
        entry("A", "2", 10.0),
    ];
    // All average 10 or 20; C leads, then A/B tie on everything but name.
    assert_eq!(order(RankPolicy::PerGameAverage, &es), ["C", "A", "B"]);
}

#[test]
fn aggregate_counts_weeks_completions_and_maxes() {
    let mut short = scored("AMC", "2", &[("T1_Score", 20.0), ("T2_Score", 7.0)]);
    short.short_week = 5;
    let es = vec![
        scored("AMC", "1", &[("T1_Score", 10.0), ("T2_Score", 0.0)]),
        short,
        entry("AMC", "3", 0.0),
    ];
    let aggs = aggregate(&es, &tasks());
    assert_eq!(aggs.len(), 1);
    let a = &aggs[0];
    assert_eq!(a.games_played, 3);
    assert_eq!((a.weeks.d7, a.weeks.d5), (2, 1));
    assert_eq!(a.scored_tasks, 4);
    // T1=10 hit target, T2=0 under target, T1=20 hit target; T2=7 missed.
    assert_eq!(a.completions, 3);
    // T2=0 perfect, T1=20 at max.
    assert_eq!(a.maxes, 2);
    assert_eq!(a.total_points, 25.0 + 25.0 + 45.0 - 6.0);
}

#[test]
fn zero_games_means_zero_average() {
    let t = challenge_tracker::league::TeamAggregate::default();
    assert_eq!(t.per_game(), 0.0);
}

#[test]
fn rank_of_is_one_based() {
    let es = vec![entry("A", "1", 1.0), entry("B", "1", 2.0)];
    let ranked = standings(&es, &tasks(), RankPolicy::Points);
    assert_eq!(rank_of(&ranked, "B"), Some(1));
    assert_eq!(rank_of(&ranked, "A"), Some(2));
    assert_eq!(rank_of(&ranked, "Z"), None);
}

#[test]
fn rows_for_display() {
    let es = vec![entry("A", "1", 10.0), entry("A", "2", 5.0)];
    let ranked = standings(&es, &tasks(), RankPolicy::Points);
    assert_eq!(table_rows(&ranked)[0], ["1", "A", "2", "15.00", "7.50", "0/0", "0/0"]);
    assert_eq!(summary_rows(&ranked)[0], ["A", "2", "2", "0", "0", "0", "0/0", "0/0", "15.00"]);
}
