//! Evasion waypoint sampling.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

/// Pick a destination within `radius` of `vessel`, away from `pursuer`.
///
/// Samples are uniform over the disk. Samples in the pursuer's hemisphere
/// are rejected; if all are rejected the sample farthest from the pursuer is
/// returned. `num_candidates == 0` returns the vessel position.
pub fn select_waypoint(
    rng: &mut impl Rng,
    vessel: DVec2,
    pursuer: DVec2,
    radius: f64,
    num_candidates: usize,
) -> DVec2 {
    let to_pursuer = pursuer - vessel;
    let mut accepted = Vec::with_capacity(num_candidates);
    let mut fallback = vessel;
    let mut fallback_distance = f64::NEG_INFINITY;

    for _ in 0..num_candidates {
        let r = rng.gen::<f64>().sqrt() * radius;
        let theta = rng.gen_range(0.0..TAU);
        let candidate = vessel + DVec2::new(theta.cos(), theta.sin()) * r;

        let distance = candidate.distance(pursuer);
        if distance > fallback_distance {
            fallback_distance = distance;
            fallback = candidate;
        }

        if (candidate - vessel).dot(to_pursuer) <= 0.0 {
            accepted.push(candidate);
        }
    }

    if accepted.is_empty() {
        fallback
    } else {
        accepted[rng.gen_range(0..accepted.len())]
    }
}
