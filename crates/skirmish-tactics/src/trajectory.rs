//! Forward roll-outs of a vessel under a fixed action or a closed-loop policy.
//!
//! Every roll-out works on a `ShipBody` copy; the caller's vessel is never
//! touched.

use glam::DVec2;

use skirmish_core::config::TacticsTuning;
use skirmish_core::enums::PursuitSign;
use skirmish_core::physics::Integrator;
use skirmish_core::types::{bearing, normalize_angle, Action, ShipBody, TargetProjection};

/// One recorded sample of a roll-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub position: DVec2,
    pub velocity: DVec2,
    pub heading: f64,
}

impl From<&ShipBody> for TrajectoryPoint {
    fn from(body: &ShipBody) -> Self {
        Self {
            position: body.position,
            velocity: body.velocity,
            heading: body.heading,
        }
    }
}

/// Ordered samples of a roll-out; the first is the starting state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Build from explicit samples. Returns `None` for an empty list.
    pub fn from_points(points: Vec<TrajectoryPoint>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Number of integrator steps (samples minus one).
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    pub fn start(&self) -> &TrajectoryPoint {
        &self.points[0]
    }

    pub fn end(&self) -> &TrajectoryPoint {
        &self.points[self.points.len() - 1]
    }
}

/// Roll-out of the pursuit policy together with the action it took first.
#[derive(Debug, Clone, PartialEq)]
pub struct PursuitPlan {
    pub trajectory: Trajectory,
    pub first_action: Action,
}

/// Apply `action` once, then advance `steps` times.
pub fn simulate(
    integrator: &impl Integrator,
    mut body: ShipBody,
    action: Action,
    steps: usize,
    dt: f64,
) -> Trajectory {
    let mut points = Vec::with_capacity(steps + 1);
    points.push(TrajectoryPoint::from(&body));
    body.controls = action;
    for _ in 0..steps {
        integrator.advance(&mut body, dt);
        points.push(TrajectoryPoint::from(&body));
    }
    Trajectory { points }
}

/// Roll out the closed-loop pursuit (or flight) policy.
///
/// During the first `brake_steps` steps the policy only decelerates.
#[allow(clippy::too_many_arguments)]
pub fn simulate_pursuit(
    integrator: &impl Integrator,
    mut body: ShipBody,
    target: &TargetProjection,
    steps: usize,
    dt: f64,
    brake_steps: usize,
    sign: PursuitSign,
    tuning: &TacticsTuning,
) -> PursuitPlan {
    let mut points = Vec::with_capacity(steps + 1);
    points.push(TrajectoryPoint::from(&body));
    let mut first_action = None;

    for step in 0..steps {
        let t = step as f64 * dt;
        let action = pursuit_action(&body, target.position_at(t), step < brake_steps, sign, tuning);
        first_action.get_or_insert(action);
        body.controls = action;
        integrator.advance(&mut body, dt);
        points.push(TrajectoryPoint::from(&body));
    }

    // Zero-step roll-out: report what the policy would do now
    let first_action = first_action.unwrap_or_else(|| {
        pursuit_action(&body, target.position, brake_steps > 0, sign, tuning)
    });

    PursuitPlan {
        trajectory: Trajectory { points },
        first_action,
    }
}

/// One step of the pursuit policy.
fn pursuit_action(
    body: &ShipBody,
    aim_point: DVec2,
    braking_phase: bool,
    sign: PursuitSign,
    tuning: &TacticsTuning,
) -> Action {
    let toward = bearing(body.position, aim_point);
    let desired = match sign {
        PursuitSign::Toward => toward,
        PursuitSign::Away => toward + std::f64::consts::PI,
    };
    let error = normalize_angle(desired - body.heading);
    let moving = body.speed() > tuning.pursuit_brake_speed;

    let rotate_left = error > tuning.pursuit_rotate_deadzone;
    let rotate_right = error < -tuning.pursuit_rotate_deadzone;

    if braking_phase {
        return Action::new(false, rotate_left, rotate_right, moving);
    }

    let facing = error.abs() < tuning.pursuit_facing_cone;
    Action::new(facing, rotate_left, rotate_right, !facing && moving)
}
