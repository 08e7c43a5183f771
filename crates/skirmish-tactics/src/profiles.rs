//! Behavior presets.
//!
//! Attack, flee and evade share one decision core; a preset only changes the
//! weight values, the pursuit sign, fire permission and waypoint navigation.

use skirmish_core::config::{EvasionConfig, ScoringWeights, StrategyConfig};
use skirmish_core::enums::{Behavior, PursuitSign};

/// Scoring weights for a behavior.
pub fn weights_for(behavior: Behavior) -> ScoringWeights {
    match behavior {
        Behavior::Attack => ScoringWeights {
            distance: -1.0,
            aim: 60.0,
            closing_speed: 0.5,
            fire_opportunity: 25.0,
        },
        // Inverted: reward separation and opening rate, ignore aim
        Behavior::Flee => ScoringWeights {
            distance: 1.0,
            aim: 0.0,
            closing_speed: -0.5,
            fire_opportunity: 0.0,
        },
        // Steer onto the waypoint; aim here means facing the waypoint
        Behavior::Evade => ScoringWeights {
            distance: -1.0,
            aim: 20.0,
            closing_speed: 0.5,
            fire_opportunity: 0.0,
        },
    }
}

/// Full strategy configuration for a behavior, other fields at defaults.
pub fn preset(behavior: Behavior) -> StrategyConfig {
    let base = StrategyConfig {
        scoring_weights: weights_for(behavior),
        ..Default::default()
    };
    match behavior {
        Behavior::Attack => StrategyConfig {
            pursuit_sign: PursuitSign::Toward,
            can_fire: true,
            ..base
        },
        Behavior::Flee => StrategyConfig {
            pursuit_sign: PursuitSign::Away,
            can_fire: false,
            ..base
        },
        Behavior::Evade => StrategyConfig {
            pursuit_sign: PursuitSign::Toward,
            can_fire: false,
            evasion: Some(EvasionConfig::default()),
            ..base
        },
    }
}
