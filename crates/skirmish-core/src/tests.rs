#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use glam::DVec2;

    use crate::config::*;
    use crate::enums::*;
    use crate::physics::{ArcadeIntegrator, Integrator};
    use crate::types::*;

    // ---- Angles ----

    #[test]
    fn test_normalize_angle_range() {
        assert_relative_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(PI), PI);
        assert_relative_eq!(normalize_angle(-PI), PI);
        assert_relative_eq!(normalize_angle(1.5 * PI), -PI / 2.0, epsilon = 1e-9);
        assert_relative_eq!(normalize_angle(PI / 2.0 + 4.0 * PI), PI / 2.0, epsilon = 1e-9);
        assert_relative_eq!(normalize_angle(-PI / 2.0), -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bearing() {
        assert_relative_eq!(bearing(DVec2::ZERO, DVec2::new(10.0, 0.0)), 0.0);
        assert_relative_eq!(bearing(DVec2::ZERO, DVec2::new(0.0, 10.0)), PI / 2.0);
        assert_relative_eq!(bearing(DVec2::ZERO, DVec2::new(-10.0, 0.0)), PI);
    }

    // ---- Vessel / body ----

    #[test]
    fn test_body_is_detached_copy() {
        let vessel = VesselState::new(DVec2::new(5.0, 5.0), DVec2::new(1.0, 0.0), 0.3);
        let mut body = vessel.body();
        body.position.x += 100.0;
        body.controls.thrust = true;
        assert_eq!(vessel.position, DVec2::new(5.0, 5.0));
        assert!(!vessel.controls.thrust);
    }

    #[test]
    fn test_clear_flags() {
        let mut vessel = VesselState::default();
        vessel.controls = Action::new(true, true, false, true);
        vessel.fire = true;
        vessel.clear_flags();
        assert!(vessel.controls.is_coast());
        assert!(!vessel.fire);
    }

    #[test]
    fn test_action_equality_is_all_flags() {
        let a = Action::new(true, false, true, false);
        assert_eq!(a, Action::new(true, false, true, false));
        assert_ne!(a, Action::new(true, false, true, true));
        assert_ne!(a, Action::new(true, true, true, false));
    }

    #[test]
    fn test_hazard_extrapolation() {
        let hazard = HazardProjection::new(DVec2::new(10.0, 0.0), DVec2::new(-2.0, 4.0), 5.0);
        assert_eq!(hazard.position_at(0.0), DVec2::new(10.0, 0.0));
        assert_eq!(hazard.position_at(2.5), DVec2::new(5.0, 10.0));
    }

    // ---- Integrator ----

    #[test]
    fn test_integrator_thrust_accelerates_along_heading() {
        let integrator = ArcadeIntegrator::default();
        let mut body = VesselState::default().body();
        body.controls.thrust = true;
        for _ in 0..10 {
            integrator.advance(&mut body, 0.1);
        }
        assert!(body.velocity.x > 0.0);
        assert_relative_eq!(body.velocity.y, 0.0);
        assert!(body.position.x > 0.0);
    }

    #[test]
    fn test_integrator_rotate_left_increases_heading() {
        let integrator = ArcadeIntegrator::default();
        let mut body = VesselState::default().body();
        body.controls.rotate_left = true;
        integrator.advance(&mut body, 0.1);
        assert!(body.heading > 0.0);

        let mut body = VesselState::default().body();
        body.controls.rotate_right = true;
        integrator.advance(&mut body, 0.1);
        assert!(body.heading < 0.0);
    }

    #[test]
    fn test_integrator_brake_slows() {
        let integrator = ArcadeIntegrator::default();
        let mut coasting = VesselState::new(DVec2::ZERO, DVec2::new(200.0, 0.0), 0.0).body();
        let mut braking = coasting;
        braking.controls.brake = true;
        integrator.advance(&mut coasting, 0.1);
        integrator.advance(&mut braking, 0.1);
        assert!(braking.speed() < coasting.speed());
    }

    #[test]
    fn test_integrator_speed_cap() {
        let arena = ArenaConfig::default();
        let integrator = ArcadeIntegrator::new(arena);
        let mut body = VesselState::default().body();
        body.controls.thrust = true;
        for _ in 0..500 {
            integrator.advance(&mut body, 0.1);
        }
        assert!(body.speed() <= arena.max_speed + 1e-9);
    }

    #[test]
    fn test_integrator_ignores_dead_body() {
        let integrator = ArcadeIntegrator::default();
        let mut body = VesselState::new(DVec2::ZERO, DVec2::new(50.0, 0.0), 0.0).body();
        body.alive = false;
        integrator.advance(&mut body, 0.1);
        assert_eq!(body.position, DVec2::ZERO);
    }

    // ---- Config ----

    #[test]
    fn test_default_configs_validate() {
        assert!(StrategyConfig::default().validate().is_ok());
        assert!(ArenaConfig::default().validate().is_ok());
        assert!(EvasionConfig::default().validate().is_ok());
        assert!(TacticsTuning::default().validate().is_ok());
    }

    #[test]
    fn test_collision_floor_below_danger_zone() {
        let tuning = TacticsTuning::default();
        let latest_collision =
            tuning.collision_base + tuning.collision_early_bonus * crate::constants::MAX_SIM_STEPS as f64;
        assert!(latest_collision < tuning.danger_zone_base);
    }

    #[test]
    fn test_tuning_rejects_bad_values() {
        let tuning = TacticsTuning {
            engage_range: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning { name: "engage_range", .. })
        ));

        let tuning = TacticsTuning {
            danger_zone_factor: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning { name: "danger_zone_factor", .. })
        ));

        let tuning = TacticsTuning {
            hysteresis_bonus: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning { name: "hysteresis_bonus", .. })
        ));

        let tuning = TacticsTuning {
            emergency_lookahead_steps: 0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning { name: "emergency_lookahead_steps", .. })
        ));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let config = StrategyConfig {
            sim_steps: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSimSteps { .. })));

        let config = StrategyConfig {
            hold_time: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHoldTime(_))));

        let config = StrategyConfig {
            scoring_weights: ScoringWeights::new(f64::NAN, 0.0, 0.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteWeight { name: "distance", .. })
        ));

        let config = StrategyConfig {
            evasion: Some(EvasionConfig {
                candidates: 0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEvasion { .. })));

        let arena = ArenaConfig {
            projectile_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            arena.validate(),
            Err(ConfigError::InvalidArena { name: "projectile_speed", .. })
        ));
    }

    #[test]
    fn test_config_from_json_partial() {
        let json = r#"{
            "hold_time": 0.5,
            "pursuit_sign": -1,
            "scoring_weights": { "distance": 1.0, "aim": 0.0, "closing_speed": -0.5, "fire_opportunity": 0.0 },
            "evasion": { "waypoint_radius": 250.0 }
        }"#;
        let config = StrategyConfig::from_json(json).unwrap();
        assert_relative_eq!(config.hold_time, 0.5);
        assert_eq!(config.pursuit_sign, PursuitSign::Away);
        assert_eq!(config.sim_steps, crate::constants::DEFAULT_SIM_STEPS);
        let evasion = config.evasion.unwrap();
        assert_relative_eq!(evasion.waypoint_radius, 250.0);
        assert_eq!(evasion.candidates, crate::constants::EVASION_CANDIDATES);
    }

    #[test]
    fn test_config_rejects_bad_pursuit_sign() {
        let json = r#"{ "pursuit_sign": 0 }"#;
        assert!(matches!(
            StrategyConfig::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_pursuit_sign_serde() {
        for sign in [PursuitSign::Toward, PursuitSign::Away] {
            let json = serde_json::to_string(&sign).unwrap();
            let back: PursuitSign = serde_json::from_str(&json).unwrap();
            assert_eq!(sign, back);
        }
        assert_eq!(serde_json::to_string(&PursuitSign::Away).unwrap(), "-1");
        assert_relative_eq!(PursuitSign::Away.value(), -1.0);
    }

    #[test]
    fn test_behavior_serde() {
        let json = serde_json::to_string(&Behavior::Evade).unwrap();
        assert_eq!(json, "\"evade\"");
        let back: Behavior = serde_json::from_str("\"flee\"").unwrap();
        assert_eq!(back, Behavior::Flee);
    }

    #[test]
    fn test_vessel_state_partial_json() {
        let json = r#"{ "position": [100.0, -20.0], "heading": 1.5 }"#;
        let vessel: VesselState = serde_json::from_str(json).unwrap();
        assert_eq!(vessel.position, DVec2::new(100.0, -20.0));
        assert_eq!(vessel.velocity, DVec2::ZERO);
        assert!(vessel.alive);
        assert!(vessel.controls.is_coast());
        assert_relative_eq!(vessel.thrust_intensity, 1.0);
    }
}
