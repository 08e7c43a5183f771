//! Configuration records and their validation.
//!
//! `ArenaConfig` is the one place the values shared with collaborators
//! (projectile speed, vessel radius, fire cone) are declared at runtime.
//! `StrategyConfig` is per agent and is validated before any decision runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::PursuitSign;

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("hold_time must be finite and non-negative, got {0}")]
    InvalidHoldTime(f64),
    #[error("sim_steps must be in 1..={max}, got {got}")]
    InvalidSimSteps { got: usize, max: usize },
    #[error("sim_dt must be finite and positive, got {0}")]
    InvalidSimDt(f64),
    #[error("scoring weight `{name}` must be finite, got {value}")]
    NonFiniteWeight { name: &'static str, value: f64 },
    #[error("pursuit sign must be 1 or -1, got {0}")]
    InvalidPursuitSign(i8),
    #[error("evasion parameter `{name}` is invalid: {value}")]
    InvalidEvasion { name: &'static str, value: f64 },
    #[error("arena parameter `{name}` must be finite and positive, got {value}")]
    InvalidArena { name: &'static str, value: f64 },
    #[error("tactics tuning parameter `{name}` is invalid: {value}")]
    InvalidTuning { name: &'static str, value: f64 },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Values shared between the engine and the physics / projectile owners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub projectile_speed: f64,
    pub vessel_radius: f64,
    pub fire_cone: f64,
    pub max_fire_range: f64,
    pub rotation_speed: f64,
    pub max_speed: f64,
    pub brake_retention: f64,
    pub drag_retention: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            projectile_speed: PROJECTILE_SPEED,
            vessel_radius: VESSEL_RADIUS,
            fire_cone: FIRE_CONE,
            max_fire_range: MAX_FIRE_RANGE,
            rotation_speed: ROTATION_SPEED,
            max_speed: MAX_SPEED,
            brake_retention: BRAKE_RETENTION,
            drag_retention: DRAG_RETENTION,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("projectile_speed", self.projectile_speed),
            ("vessel_radius", self.vessel_radius),
            ("fire_cone", self.fire_cone),
            ("max_fire_range", self.max_fire_range),
            ("rotation_speed", self.rotation_speed),
            ("max_speed", self.max_speed),
            ("brake_retention", self.brake_retention),
            ("drag_retention", self.drag_retention),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidArena { name, value });
            }
        }
        Ok(())
    }
}

/// Hand-tuned scoring and pursuit constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsTuning {
    pub collision_base: f64,
    pub collision_early_bonus: f64,
    pub danger_zone_factor: f64,
    pub danger_zone_base: f64,
    pub engage_range: f64,
    pub engage_closing_scale: f64,
    pub aim_proximity_scale: f64,
    pub hysteresis_bonus: f64,
    pub pursuit_rotate_deadzone: f64,
    pub pursuit_facing_cone: f64,
    pub pursuit_brake_speed: f64,
    pub brake_pursuit_steps: usize,
    pub brake_pursuit_min_speed: f64,
    pub emergency_lookahead_steps: usize,
}

impl Default for TacticsTuning {
    fn default() -> Self {
        Self {
            collision_base: COLLISION_BASE,
            collision_early_bonus: COLLISION_EARLY_BONUS,
            danger_zone_factor: DANGER_ZONE_FACTOR,
            danger_zone_base: DANGER_ZONE_BASE,
            engage_range: ENGAGE_RANGE,
            engage_closing_scale: ENGAGE_CLOSING_SCALE,
            aim_proximity_scale: AIM_PROXIMITY_SCALE,
            hysteresis_bonus: HYSTERESIS_BONUS,
            pursuit_rotate_deadzone: PURSUIT_ROTATE_DEADZONE,
            pursuit_facing_cone: PURSUIT_FACING_CONE,
            pursuit_brake_speed: PURSUIT_BRAKE_SPEED,
            brake_pursuit_steps: BRAKE_PURSUIT_STEPS,
            brake_pursuit_min_speed: BRAKE_PURSUIT_MIN_SPEED,
            emergency_lookahead_steps: EMERGENCY_LOOKAHEAD_STEPS,
        }
    }
}

impl TacticsTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("collision_base", self.collision_base),
            ("collision_early_bonus", self.collision_early_bonus),
            ("danger_zone_factor", self.danger_zone_factor),
            ("danger_zone_base", self.danger_zone_base),
            ("engage_range", self.engage_range),
            ("engage_closing_scale", self.engage_closing_scale),
            ("aim_proximity_scale", self.aim_proximity_scale),
            ("hysteresis_bonus", self.hysteresis_bonus),
            ("pursuit_rotate_deadzone", self.pursuit_rotate_deadzone),
            ("pursuit_facing_cone", self.pursuit_facing_cone),
            ("pursuit_brake_speed", self.pursuit_brake_speed),
            ("brake_pursuit_min_speed", self.brake_pursuit_min_speed),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::InvalidTuning { name, value });
            }
        }
        // Urgency and closing amplification divide by it
        if self.engage_range <= 0.0 {
            return Err(ConfigError::InvalidTuning {
                name: "engage_range",
                value: self.engage_range,
            });
        }
        // The danger band is [collision, factor * collision]
        if self.danger_zone_factor <= 1.0 {
            return Err(ConfigError::InvalidTuning {
                name: "danger_zone_factor",
                value: self.danger_zone_factor,
            });
        }
        if self.emergency_lookahead_steps == 0 {
            return Err(ConfigError::InvalidTuning {
                name: "emergency_lookahead_steps",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Coefficients of the four weighted scoring terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub distance: f64,
    pub aim: f64,
    pub closing_speed: f64,
    pub fire_opportunity: f64,
}

impl ScoringWeights {
    pub fn new(distance: f64, aim: f64, closing_speed: f64, fire_opportunity: f64) -> Self {
        Self {
            distance,
            aim,
            closing_speed,
            fire_opportunity,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("distance", self.distance),
            ("aim", self.aim),
            ("closing_speed", self.closing_speed),
            ("fire_opportunity", self.fire_opportunity),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Waypoint navigation parameters for evasion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvasionConfig {
    pub waypoint_radius: f64,
    pub arrival_dist: f64,
    pub max_hold_time: f64,
    pub candidates: usize,
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self {
            waypoint_radius: EVASION_WAYPOINT_RADIUS,
            arrival_dist: EVASION_ARRIVAL_DIST,
            max_hold_time: EVASION_MAX_HOLD_TIME,
            candidates: EVASION_CANDIDATES,
        }
    }
}

impl EvasionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.waypoint_radius.is_finite() || self.waypoint_radius <= 0.0 {
            return Err(ConfigError::InvalidEvasion {
                name: "waypoint_radius",
                value: self.waypoint_radius,
            });
        }
        if !self.arrival_dist.is_finite() || self.arrival_dist < 0.0 {
            return Err(ConfigError::InvalidEvasion {
                name: "arrival_dist",
                value: self.arrival_dist,
            });
        }
        if !self.max_hold_time.is_finite() || self.max_hold_time <= 0.0 {
            return Err(ConfigError::InvalidEvasion {
                name: "max_hold_time",
                value: self.max_hold_time,
            });
        }
        if self.candidates == 0 {
            return Err(ConfigError::InvalidEvasion {
                name: "candidates",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Per-agent strategy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Minimum commitment time for a chosen action (s).
    pub hold_time: f64,
    /// Look-ahead depth in integrator steps.
    pub sim_steps: usize,
    /// Integrator step used during look-ahead (s).
    pub sim_dt: f64,
    pub scoring_weights: ScoringWeights,
    pub pursuit_sign: PursuitSign,
    pub can_fire: bool,
    /// Waypoint navigation; `None` steers relative to the target itself.
    pub evasion: Option<EvasionConfig>,
    /// Seed for waypoint sampling.
    pub seed: u64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            hold_time: DEFAULT_HOLD_TIME,
            sim_steps: DEFAULT_SIM_STEPS,
            sim_dt: DEFAULT_SIM_DT,
            scoring_weights: ScoringWeights::default(),
            pursuit_sign: PursuitSign::Toward,
            can_fire: true,
            evasion: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl StrategyConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StrategyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hold_time.is_finite() || self.hold_time < 0.0 {
            return Err(ConfigError::InvalidHoldTime(self.hold_time));
        }
        if self.sim_steps == 0 || self.sim_steps > MAX_SIM_STEPS {
            return Err(ConfigError::InvalidSimSteps {
                got: self.sim_steps,
                max: MAX_SIM_STEPS,
            });
        }
        if !self.sim_dt.is_finite() || self.sim_dt <= 0.0 {
            return Err(ConfigError::InvalidSimDt(self.sim_dt));
        }
        self.scoring_weights.validate()?;
        if let Some(evasion) = &self.evasion {
            evasion.validate()?;
        }
        Ok(())
    }
}
