// tests/scoring.rs
//
// Points formula, target/max helpers and completion checks.
use challenge_tracker::league::TaskDefinition;
use challenge_tracker::league::scoring::{is_completion, is_max, max_points, points, progress_percent, target_points};

fn normal() -> TaskDefinition {
    TaskDefinition::normal(1, "Steps", 10.0, 5.0, 2.0, 20.0)
}

fn avoid() -> TaskDefinition {
    TaskDefinition::avoidance(2, "Snacks", 5.0, 10.0, 3.0, 10.0)
}

#[test]
fn normal_worked_example() {
    let d = normal();
    assert_eq!(points(10.0, &d), 25.0);
    assert_eq!(points(9.0, &d), 18.0);
    assert_eq!(points(0.0, &d), 0.0);
}

#[test]
fn avoidance_worked_example() {
    let d = avoid();
    assert_eq!(points(0.0, &d), 25.0);
    assert_eq!(points(5.0, &d), 10.0);
    assert_eq!(points(6.0, &d), -3.0);
}

#[test]
fn bonus_steps_in_exactly_at_target() {
    let d = normal();
    let just_below = points(9.999, &d);
    let at = points(10.0, &d);
    assert!(at - just_below > 5.0 - 1e-6, "jump at target should include the bonus");
    assert!(points(10.5, &d) > at);
}

#[test]
fn avoidance_is_decreasing_on_both_sides() {
    let d = avoid();
    let below: Vec<f64> = (0..=5).map(|s| points(s as f64, &d)).collect();
    assert!(below.windows(2).all(|w| w[0] > w[1]), "{below:?}");
    let above: Vec<f64> = (6..=10).map(|s| points(s as f64, &d)).collect();
    assert!(above.windows(2).all(|w| w[0] > w[1]), "{above:?}");
    assert_eq!(points(5.0, &d), 10.0);
}

#[test]
fn zero_for_bad_score_or_missing_policy() {
    let d = normal();
    assert_eq!(points(f64::NAN, &d), 0.0);
    assert_eq!(points(f64::INFINITY, &d), 0.0);

    let mut no_fraction = normal();
    no_fraction.fraction = None;
    assert_eq!(points(10.0, &no_fraction), 0.0);

    let mut no_completion = normal();
    no_completion.completion = None;
    assert_eq!(points(10.0, &no_completion), 0.0);
    assert_eq!(points(3.0, &no_completion), 0.0);

    let mut no_target = avoid();
    no_target.target = None;
    assert_eq!(points(0.0, &no_target), 0.0);
}

#[test]
fn target_and_max_points() {
    assert_eq!(target_points(&normal()), 25.0);
    assert_eq!(max_points(&normal()), 45.0);
    assert_eq!(target_points(&avoid()), 10.0);
    assert_eq!(max_points(&avoid()), 15.0);
}

#[test]
fn progress_is_capped() {
    let d = normal();
    assert_eq!(progress_percent(5.0, &d), 50.0);
    assert_eq!(progress_percent(30.0, &d), 100.0);
    assert_eq!(progress_percent(f64::NAN, &d), 0.0);
}

#[test]
fn completion_and_max_follow_direction() {
    let n = normal();
    assert!(is_completion(10.0, &n));
    assert!(!is_completion(9.0, &n));
    assert!(is_max(20.0, &n));
    assert!(!is_max(19.0, &n));

    let a = avoid();
    assert!(is_completion(5.0, &a));
    assert!(!is_completion(6.0, &a));
    assert!(is_max(0.0, &a));
    assert!(!is_max(1.0, &a));
}
