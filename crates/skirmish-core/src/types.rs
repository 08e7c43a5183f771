//! Fundamental geometric and vessel types.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Normalize an angle to (-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Bearing from `from` to `to` in radians (0 = +x, counter-clockwise).
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector for a heading.
pub fn heading_vector(heading: f64) -> DVec2 {
    DVec2::new(heading.cos(), heading.sin())
}

/// The four control flags in effect on a vessel.
///
/// `rotate_left` increases heading, `rotate_right` decreases it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub brake: bool,
}

impl Action {
    pub const COAST: Action = Action::new(false, false, false, false);

    pub const fn new(thrust: bool, rotate_left: bool, rotate_right: bool, brake: bool) -> Self {
        Self {
            thrust,
            rotate_left,
            rotate_right,
            brake,
        }
    }

    /// True when no flag is set.
    pub fn is_coast(&self) -> bool {
        *self == Self::COAST
    }
}

/// A vessel as owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselState {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Heading in radians (0 = +x, counter-clockwise).
    pub heading: f64,
    /// Thrust acceleration at full intensity (px/s²).
    pub thrust_power: f64,
    /// Thrust multiplier in [0, 1].
    pub thrust_intensity: f64,
    pub controls: Action,
    pub fire: bool,
    pub alive: bool,
}

impl Default for VesselState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            heading: 0.0,
            thrust_power: crate::constants::THRUST_POWER,
            thrust_intensity: 1.0,
            controls: Action::COAST,
            fire: false,
            alive: true,
        }
    }
}

impl VesselState {
    pub fn new(position: DVec2, velocity: DVec2, heading: f64) -> Self {
        Self {
            position,
            velocity,
            heading,
            ..Default::default()
        }
    }

    /// Disposable copy of the physics-relevant fields.
    pub fn body(&self) -> ShipBody {
        ShipBody {
            position: self.position,
            velocity: self.velocity,
            heading: self.heading,
            thrust_power: self.thrust_power,
            thrust_intensity: self.thrust_intensity,
            controls: self.controls,
            alive: self.alive,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Clear every control flag and the fire flag.
    pub fn clear_flags(&mut self) {
        self.controls = Action::COAST;
        self.fire = false;
    }
}

/// Physics-only clone of a vessel. Mutating it never touches the original.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipBody {
    pub position: DVec2,
    pub velocity: DVec2,
    pub heading: f64,
    pub thrust_power: f64,
    pub thrust_intensity: f64,
    pub controls: Action,
    pub alive: bool,
}

impl ShipBody {
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// A drifting circular hazard, extrapolated linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardProjection {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
}

impl HazardProjection {
    pub fn new(position: DVec2, velocity: DVec2, radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Estimated position after `t` seconds.
    pub fn position_at(&self, t: f64) -> DVec2 {
        self.position + self.velocity * t
    }
}

/// Point the scorer steers toward (or away from), extrapolated linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProjection {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl TargetProjection {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self { position, velocity }
    }

    /// A fixed point, e.g. an evasion waypoint.
    pub fn stationary(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
        }
    }

    pub fn position_at(&self, t: f64) -> DVec2 {
        self.position + self.velocity * t
    }
}

impl From<&VesselState> for TargetProjection {
    fn from(vessel: &VesselState) -> Self {
        Self::new(vessel.position, vessel.velocity)
    }
}
