// src/league/scoring.rs
//
// Points for one raw score against one task definition.
//
// normal:    score * fraction + (score >= target ? completion : 0)
// avoidance: (target - score) * fraction + (score <= target ? completion : 0)
//
// The formula does not clamp to [0, max]; input widgets do that.

use super::tasks::TaskDefinition;

/// The three numbers the formula needs, or `None` when any is missing.
fn policy(def: &TaskDefinition) -> Option<(f64, f64, f64)> {
    let target = def.target.filter(|v| v.is_finite())?;
    let completion = def.completion.filter(|v| v.is_finite())?;
    let fraction = def.fraction.filter(|v| v.is_finite())?;
    Some((target, completion, fraction))
}

/// Earned points. 0 for a non-finite score or a task without a full policy.
pub fn points(score: f64, def: &TaskDefinition) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    let Some((target, completion, fraction)) = policy(def) else {
        return 0.0;
    };

    if def.is_avoidance {
        let bonus = if score <= target { completion } else { 0.0 };
        (target - score) * fraction + bonus
    } else {
        let bonus = if score >= target { completion } else { 0.0 };
        score * fraction + bonus
    }
}

/// Points a single entry earns by landing exactly on target.
pub fn target_points(def: &TaskDefinition) -> f64 {
    let Some((target, completion, fraction)) = policy(def) else {
        return 0.0;
    };
    if def.is_avoidance {
        completion
    } else {
        target * fraction + completion
    }
}

/// Ceiling used by the team view's "available" bar.
/// Avoidance tasks use target * fraction, the swing between a clean week and
/// hitting the target.
pub fn max_points(def: &TaskDefinition) -> f64 {
    let Some((target, completion, fraction)) = policy(def) else {
        return 0.0;
    };
    if def.is_avoidance {
        target * fraction
    } else {
        def.max.filter(|m| m.is_finite()).unwrap_or(0.0) * fraction + completion
    }
}

/// Progress toward target, 0..=100. 0 when the target is missing or zero.
pub fn progress_percent(score: f64, def: &TaskDefinition) -> f64 {
    let safe = if score.is_finite() { score } else { 0.0 };
    match def.target {
        Some(t) if t.is_finite() && t != 0.0 => ((safe / t) * 100.0).min(100.0),
        _ => 0.0,
    }
}

/// Normal: reached target. Avoidance: stayed at or under it.
pub fn is_completion(score: f64, def: &TaskDefinition) -> bool {
    let Some(target) = def.target.filter(|v| v.is_finite()) else {
        return false;
    };
    if def.is_avoidance { score <= target } else { score >= target }
}

/// Normal: reached max. Avoidance: a perfect zero.
pub fn is_max(score: f64, def: &TaskDefinition) -> bool {
    if def.is_avoidance {
        return score == 0.0;
    }
    match def.max.filter(|v| v.is_finite()) {
        Some(max) => score >= max,
        None => false,
    }
}
