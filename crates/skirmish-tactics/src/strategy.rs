//! Per-agent strategy state and the hold-timer state machine.
//!
//! A committed action stays in effect for `hold_time` seconds. It is
//! re-evaluated early only when its short roll-out now ends in a collision.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::config::{ConfigError, EvasionConfig, ScoringWeights, StrategyConfig};
use skirmish_core::enums::PursuitSign;
use skirmish_core::physics::Integrator;
use skirmish_core::types::{Action, HazardProjection, ShipBody, TargetProjection};

use crate::engine::TacticalEngine;
use crate::scoring::first_collision;
use crate::selector::{select_best_action, DecisionInput, DecisionTrace};
use crate::trajectory::simulate;
use crate::waypoint::select_waypoint;

/// Current evasion destination and how long it has been held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub position: DVec2,
    pub age: f64,
}

/// Mutable per-agent record. Created at episode start, discarded at the end.
#[derive(Debug, Clone)]
pub struct StrategyState {
    config: StrategyConfig,
    committed: Option<Action>,
    hold_timer: f64,
    waypoint: Option<Waypoint>,
    rng: ChaCha8Rng,
    last_trace: Option<DecisionTrace>,
}

impl StrategyState {
    /// Validate `config` and build a fresh state with nothing committed.
    pub fn new(config: StrategyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            committed: None,
            hold_timer: 0.0,
            waypoint: None,
            last_trace: None,
        })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn weights(&self) -> ScoringWeights {
        self.config.scoring_weights
    }

    pub fn pursuit_sign(&self) -> PursuitSign {
        self.config.pursuit_sign
    }

    pub fn can_fire(&self) -> bool {
        self.config.can_fire
    }

    /// Action currently in effect, if any was ever committed.
    pub fn committed(&self) -> Option<Action> {
        self.committed
    }

    /// Seconds remaining before a scheduled re-evaluation.
    pub fn hold_timer(&self) -> f64 {
        self.hold_timer
    }

    pub fn waypoint(&self) -> Option<Waypoint> {
        self.waypoint
    }

    /// Trace of the most recent fresh decision.
    pub fn last_trace(&self) -> Option<&DecisionTrace> {
        self.last_trace.as_ref()
    }

    /// Run the hold-timer state machine for one tick.
    ///
    /// Returns the action in effect and, when a fresh decision was made, its
    /// trace.
    pub(crate) fn decide<I: Integrator>(
        &mut self,
        engine: &TacticalEngine<I>,
        body: ShipBody,
        nav_target: TargetProjection,
        hazards: &[HazardProjection],
        dt: f64,
    ) -> (Action, Option<DecisionTrace>) {
        self.hold_timer = (self.hold_timer - dt).max(0.0);

        if let Some(action) = self.committed {
            if self.hold_timer > 0.0 {
                if !self.committed_action_collides(engine, body, action, hazards) {
                    return (action, None);
                }
                log::debug!(
                    "committed action became lethal with {:.3}s hold remaining",
                    self.hold_timer
                );
            }
        }

        let input = DecisionInput {
            body,
            target: nav_target,
            hazards,
            steps: self.config.sim_steps,
            dt: self.config.sim_dt,
            weights: self.config.scoring_weights,
            sign: self.config.pursuit_sign,
            previous: self.committed,
        };
        let selection = select_best_action(engine.integrator(), &input, engine.arena(), engine.tuning());

        self.committed = Some(selection.action);
        self.hold_timer = self.config.hold_time;
        self.last_trace = Some(selection.trace.clone());
        (selection.action, Some(selection.trace))
    }

    fn committed_action_collides<I: Integrator>(
        &self,
        engine: &TacticalEngine<I>,
        body: ShipBody,
        action: Action,
        hazards: &[HazardProjection],
    ) -> bool {
        if hazards.is_empty() {
            return false;
        }
        let steps = engine.tuning().emergency_lookahead_steps;
        let trajectory = simulate(engine.integrator(), body, action, steps, self.config.sim_dt);
        first_collision(&trajectory, hazards, self.config.sim_dt, engine.arena()).is_some()
    }

    /// Keep the evasion waypoint fresh and return it as the navigation
    /// target. `None` when evasion is not configured.
    pub(crate) fn evasion_target(
        &mut self,
        vessel: DVec2,
        pursuer: DVec2,
        dt: f64,
    ) -> Option<TargetProjection> {
        let evasion: EvasionConfig = self.config.evasion?;

        if let Some(waypoint) = self.waypoint.as_mut() {
            waypoint.age += dt;
        }

        let stale = match self.waypoint {
            None => true,
            Some(waypoint) => {
                vessel.distance(waypoint.position) < evasion.arrival_dist
                    || waypoint.age >= evasion.max_hold_time
            }
        };

        if stale {
            let position = select_waypoint(
                &mut self.rng,
                vessel,
                pursuer,
                evasion.waypoint_radius,
                evasion.candidates,
            );
            log::debug!("new evasion waypoint ({:.1}, {:.1})", position.x, position.y);
            self.waypoint = Some(Waypoint { position, age: 0.0 });
        }

        self.waypoint
            .map(|waypoint| TargetProjection::stationary(waypoint.position))
    }
}
