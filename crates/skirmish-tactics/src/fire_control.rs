//! Lead-angle fire control.
//!
//! Projectiles inherit the shooter's velocity, so the lead is computed from
//! the target's velocity relative to the shooter. One first-order pass; not
//! iterated to convergence.

use glam::DVec2;

use skirmish_core::config::ArenaConfig;
use skirmish_core::constants::MIN_LEAD_DISTANCE;
use skirmish_core::types::{bearing, normalize_angle, VesselState};

/// Aim direction and projectile flight time for a lead shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadSolution {
    pub angle: f64,
    pub travel_time: f64,
}

/// Compute the lead angle from a shooter to a moving target.
///
/// Returns `None` when the projectile speed is not positive.
pub fn lead_angle(
    shooter_pos: DVec2,
    shooter_vel: DVec2,
    target_pos: DVec2,
    target_vel: DVec2,
    projectile_speed: f64,
) -> Option<LeadSolution> {
    if projectile_speed <= 0.0 {
        return None;
    }

    let distance = shooter_pos.distance(target_pos);
    if distance < MIN_LEAD_DISTANCE {
        return Some(LeadSolution {
            angle: bearing(shooter_pos, target_pos),
            travel_time: 0.0,
        });
    }

    let relative_vel = target_vel - shooter_vel;
    let travel_time = distance / projectile_speed;
    let predicted = target_pos + relative_vel * travel_time;

    Some(LeadSolution {
        angle: bearing(shooter_pos, predicted),
        travel_time,
    })
}

/// Snap fire decision for the current tick: in range and the heading is
/// inside the cone around the lead angle.
pub fn should_fire(vessel: &VesselState, target: &VesselState, arena: &ArenaConfig) -> bool {
    if !vessel.alive || !target.alive {
        return false;
    }
    if vessel.position.distance(target.position) > arena.max_fire_range {
        return false;
    }
    match lead_angle(
        vessel.position,
        vessel.velocity,
        target.position,
        target.velocity,
        arena.projectile_speed,
    ) {
        Some(solution) => normalize_angle(solution.angle - vessel.heading).abs() <= arena.fire_cone,
        None => false,
    }
}
