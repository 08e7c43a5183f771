//! Arena constants and tactics tuning parameters.
//!
//! These are the defaults behind `ArenaConfig` and `TacticsTuning`. Values
//! that other collaborators must agree on (projectile speed, vessel radius)
//! live in `ArenaConfig` at runtime; the literals here only seed it.

use std::f64::consts::PI;

// --- Arena / shared with collaborators ---

/// Projectile muzzle speed (px/s). Projectiles also inherit shooter velocity.
pub const PROJECTILE_SPEED: f64 = 500.0;

/// Vessel collision radius (px).
pub const VESSEL_RADIUS: f64 = 15.0;

/// Half-angle of the firing cone around the lead angle (radians).
pub const FIRE_CONE: f64 = 0.12;

/// Maximum range at which firing is considered (px).
pub const MAX_FIRE_RANGE: f64 = 600.0;

/// Below this separation the lead solution degenerates to direct aim (px).
pub const MIN_LEAD_DISTANCE: f64 = 1.0;

// --- Reference integrator ---

/// Turn rate while a rotate flag is held (rad/s).
pub const ROTATION_SPEED: f64 = 3.5;

/// Default thrust acceleration at full intensity (px/s²).
pub const THRUST_POWER: f64 = 200.0;

/// Speed cap (px/s).
pub const MAX_SPEED: f64 = 300.0;

/// Fraction of velocity kept per second while braking.
pub const BRAKE_RETENTION: f64 = 0.05;

/// Fraction of velocity kept per second from passive drag.
pub const DRAG_RETENTION: f64 = 0.9;

// --- Decision cadence ---

/// Default minimum commitment time for a chosen action (s).
pub const DEFAULT_HOLD_TIME: f64 = 0.25;

/// Default look-ahead depth in integrator steps.
pub const DEFAULT_SIM_STEPS: usize = 15;

/// Default integrator step used during look-ahead (s).
pub const DEFAULT_SIM_DT: f64 = 0.1;

/// Upper bound on look-ahead depth. Keeps
/// `COLLISION_BASE + COLLISION_EARLY_BONUS * steps` well below the worst
/// danger-zone penalty. The distance term is unbounded, so against a very
/// distant target a colliding candidate can still outscore a safe one.
pub const MAX_SIM_STEPS: usize = 60;

/// Steps rolled out when checking whether a committed action became lethal.
pub const EMERGENCY_LOOKAHEAD_STEPS: usize = 3;

// --- Scoring ---

/// Penalty for a trajectory that collides with a hazard.
pub const COLLISION_BASE: f64 = -10_000.0;

/// Added per step index at the first collision. Tie-break only.
pub const COLLISION_EARLY_BONUS: f64 = 50.0;

/// Danger annulus outer edge as a multiple of the collision distance.
pub const DANGER_ZONE_FACTOR: f64 = 2.0;

/// Penalty at the inner edge of the danger annulus.
pub const DANGER_ZONE_BASE: f64 = -600.0;

/// Distance below which the engagement terms are amplified (px).
pub const ENGAGE_RANGE: f64 = 300.0;

/// Closing-rate amplification at zero distance inside engage range.
pub const ENGAGE_CLOSING_SCALE: f64 = 2.0;

/// Aim amplification at zero distance.
pub const AIM_PROXIMITY_SCALE: f64 = 3.0;

/// Bonus for re-choosing the committed action.
pub const HYSTERESIS_BONUS: f64 = 15.0;

// --- Pursuit policy ---

/// Heading error tolerated before the pursuit policy rotates (rad).
pub const PURSUIT_ROTATE_DEADZONE: f64 = 0.05;

/// Heading error under which the pursuit policy considers itself facing (rad).
pub const PURSUIT_FACING_CONE: f64 = PI / 4.0;

/// Speed above which the pursuit policy brakes when not facing (px/s).
pub const PURSUIT_BRAKE_SPEED: f64 = 20.0;

/// Steps of forced deceleration for the brake-then-pursue candidate.
pub const BRAKE_PURSUIT_STEPS: usize = 5;

/// Vessel speed required before brake-then-pursue is evaluated (px/s).
pub const BRAKE_PURSUIT_MIN_SPEED: f64 = 60.0;

// --- Evasion ---

/// Radius of the disk sampled for evasion waypoints (px).
pub const EVASION_WAYPOINT_RADIUS: f64 = 400.0;

/// Distance at which a waypoint counts as reached (px).
pub const EVASION_ARRIVAL_DIST: f64 = 40.0;

/// Maximum time a waypoint is held before re-selection (s).
pub const EVASION_MAX_HOLD_TIME: f64 = 3.0;

/// Samples drawn per waypoint selection.
pub const EVASION_CANDIDATES: usize = 12;

/// Default waypoint RNG seed.
pub const DEFAULT_SEED: u64 = 42;
