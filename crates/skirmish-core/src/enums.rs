//! Enumeration types used by the tactics engine.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// High-level behavior a strategy is configured for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Close on the target and shoot.
    #[default]
    Attack,
    /// Open distance from the target.
    Flee,
    /// Navigate between waypoints away from the pursuer.
    Evade,
}

/// Direction the closed-loop pursuit policy steers relative to its target.
///
/// Serialized as the integer `1` or `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum PursuitSign {
    #[default]
    Toward,
    Away,
}

impl PursuitSign {
    /// +1.0 for `Toward`, -1.0 for `Away`.
    pub fn value(self) -> f64 {
        match self {
            PursuitSign::Toward => 1.0,
            PursuitSign::Away => -1.0,
        }
    }
}

impl TryFrom<i8> for PursuitSign {
    type Error = ConfigError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PursuitSign::Toward),
            -1 => Ok(PursuitSign::Away),
            other => Err(ConfigError::InvalidPursuitSign(other)),
        }
    }
}

impl From<PursuitSign> for i8 {
    fn from(sign: PursuitSign) -> Self {
        match sign {
            PursuitSign::Toward => 1,
            PursuitSign::Away => -1,
        }
    }
}
