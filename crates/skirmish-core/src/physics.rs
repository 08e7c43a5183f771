//! Vessel kinematics.
//!
//! The tactics engine only talks to `Integrator`; `ArcadeIntegrator` is the
//! reference model used by the arena and by tests.

use crate::config::ArenaConfig;
use crate::types::{heading_vector, normalize_angle, ShipBody};

/// Advances a body by one step using the control flags already set on it.
pub trait Integrator {
    fn advance(&self, body: &mut ShipBody, dt: f64);
}

/// Fixed-rate rotation, thrust along heading, multiplicative brake and drag,
/// hard speed cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcadeIntegrator {
    arena: ArenaConfig,
}

impl ArcadeIntegrator {
    pub fn new(arena: ArenaConfig) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &ArenaConfig {
        &self.arena
    }
}

impl Integrator for ArcadeIntegrator {
    fn advance(&self, body: &mut ShipBody, dt: f64) {
        if !body.alive || dt <= 0.0 {
            return;
        }
        let controls = body.controls;

        // Both rotate flags cancel out
        let mut turn = 0.0;
        if controls.rotate_left {
            turn += self.arena.rotation_speed;
        }
        if controls.rotate_right {
            turn -= self.arena.rotation_speed;
        }
        body.heading = normalize_angle(body.heading + turn * dt);

        if controls.thrust {
            let accel = body.thrust_power * body.thrust_intensity.clamp(0.0, 1.0);
            body.velocity += heading_vector(body.heading) * accel * dt;
        }
        if controls.brake {
            body.velocity *= self.arena.brake_retention.powf(dt);
        }
        body.velocity *= self.arena.drag_retention.powf(dt);

        let speed = body.velocity.length();
        if speed > self.arena.max_speed {
            body.velocity *= self.arena.max_speed / speed;
        }

        body.position += body.velocity * dt;
    }
}
