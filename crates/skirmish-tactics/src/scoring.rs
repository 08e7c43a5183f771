//! Trajectory scoring.
//!
//! A trajectory is scored against a linearly extrapolated target and a set of
//! linearly extrapolated hazards. The score is the sum of five terms; only the
//! hazard term is independent of the scoring weights. Scores are unbounded
//! and never clamped.

use skirmish_core::config::{ArenaConfig, ScoringWeights, TacticsTuning};
use skirmish_core::types::{bearing, normalize_angle, HazardProjection, TargetProjection};

use crate::fire_control::lead_angle;
use crate::trajectory::Trajectory;

/// Per-term contributions of one trajectory's score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Collision penalty, or the graduated danger-zone penalty if no collision.
    pub hazard: f64,
    pub distance: f64,
    pub aim: f64,
    pub closing: f64,
    pub fire: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.hazard + self.distance + self.aim + self.closing + self.fire
    }
}

/// Center distance at which the vessel touches `hazard`.
pub fn collision_distance(hazard: &HazardProjection, arena: &ArenaConfig) -> f64 {
    hazard.radius + arena.vessel_radius
}

/// Index of the first step (1..=N) at which the trajectory overlaps a hazard.
pub fn first_collision(
    trajectory: &Trajectory,
    hazards: &[HazardProjection],
    dt: f64,
    arena: &ArenaConfig,
) -> Option<usize> {
    trajectory
        .points()
        .iter()
        .enumerate()
        .skip(1)
        .find(|(step, point)| {
            let t = *step as f64 * dt;
            hazards.iter().any(|hazard| {
                point.position.distance(hazard.position_at(t)) < collision_distance(hazard, arena)
            })
        })
        .map(|(step, _)| step)
}

/// Score a trajectory. Higher is better.
pub fn score(
    trajectory: &Trajectory,
    target: &TargetProjection,
    hazards: &[HazardProjection],
    dt: f64,
    weights: &ScoringWeights,
    arena: &ArenaConfig,
    tuning: &TacticsTuning,
) -> f64 {
    score_breakdown(trajectory, target, hazards, dt, weights, arena, tuning).total()
}

/// Score a trajectory, keeping each term separate.
pub fn score_breakdown(
    trajectory: &Trajectory,
    target: &TargetProjection,
    hazards: &[HazardProjection],
    dt: f64,
    weights: &ScoringWeights,
    arena: &ArenaConfig,
    tuning: &TacticsTuning,
) -> ScoreBreakdown {
    let points = trajectory.points();
    let target_at = |step: usize| target.position_at(step as f64 * dt);

    let distances: Vec<f64> = points
        .iter()
        .enumerate()
        .map(|(step, p)| p.position.distance(target_at(step)))
        .collect();
    let initial_distance = distances[0];
    let final_distance = distances[distances.len() - 1];
    let min_distance = distances.iter().copied().fold(f64::INFINITY, f64::min);

    let hazard = hazard_term(trajectory, hazards, dt, arena, tuning);

    // Distance: urgency grows linearly beyond engage range
    let urgency = 1.0 + (initial_distance - tuning.engage_range).max(0.0) / tuning.engage_range;
    let distance = weights.distance * min_distance * urgency;

    // Aim: averaged over every sample
    let alignment_sum: f64 = points
        .iter()
        .enumerate()
        .map(|(step, p)| {
            normalize_angle(bearing(p.position, target_at(step)) - p.heading).cos()
        })
        .sum();
    let alignment = alignment_sum / points.len() as f64;
    let proximity =
        1.0 + tuning.aim_proximity_scale * (1.0 - min_distance / arena.max_fire_range).max(0.0);
    let aim = weights.aim * alignment * proximity;

    // Closing: net distance closed over simulated time
    let sim_time = trajectory.steps() as f64 * dt;
    let closing = if sim_time > 0.0 {
        let rate = (initial_distance - final_distance) / sim_time;
        let engage = if initial_distance < tuning.engage_range {
            1.0 + tuning.engage_closing_scale * (1.0 - initial_distance / tuning.engage_range)
        } else {
            1.0
        };
        weights.closing_speed * rate * engage
    } else {
        0.0
    };

    let fire = if weights.fire_opportunity == 0.0 {
        0.0
    } else {
        fire_term(trajectory, target, &distances, dt, weights, arena)
    };

    ScoreBreakdown {
        hazard,
        distance,
        aim,
        closing,
        fire,
    }
}

/// Collision penalty for the first collision, else the worst danger-zone
/// penalty over all steps and hazards.
fn hazard_term(
    trajectory: &Trajectory,
    hazards: &[HazardProjection],
    dt: f64,
    arena: &ArenaConfig,
    tuning: &TacticsTuning,
) -> f64 {
    let mut max_danger: f64 = 0.0;

    for (step, point) in trajectory.points().iter().enumerate().skip(1) {
        let t = step as f64 * dt;
        for hazard in hazards {
            let distance = point.position.distance(hazard.position_at(t));
            let collision = collision_distance(hazard, arena);
            if distance < collision {
                // A dead vessel cannot be hit again
                return tuning.collision_base + tuning.collision_early_bonus * step as f64;
            }
            let zone_edge = tuning.danger_zone_factor * collision;
            if distance < zone_edge {
                let danger = ((zone_edge - distance) / (zone_edge - collision)).powi(2);
                max_danger = max_danger.max(danger);
            }
        }
    }

    tuning.danger_zone_base * max_danger
}

/// Reward each in-range sample whose heading lies inside the lead-angle cone.
fn fire_term(
    trajectory: &Trajectory,
    target: &TargetProjection,
    distances: &[f64],
    dt: f64,
    weights: &ScoringWeights,
    arena: &ArenaConfig,
) -> f64 {
    let mut total = 0.0;
    for (step, point) in trajectory.points().iter().enumerate() {
        let distance = distances[step];
        if distance > arena.max_fire_range {
            continue;
        }
        let aim_point = target.position_at(step as f64 * dt);
        let Some(solution) = lead_angle(
            point.position,
            point.velocity,
            aim_point,
            target.velocity,
            arena.projectile_speed,
        ) else {
            continue;
        };
        if normalize_angle(solution.angle - point.heading).abs() <= arena.fire_cone {
            total += weights.fire_opportunity * (1.0 - distance / arena.max_fire_range);
        }
    }
    total
}
