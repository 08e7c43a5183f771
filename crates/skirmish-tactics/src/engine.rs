//! Tactical engine: the per-tick entry point.
//!
//! `TacticalEngine` owns the integrator and the shared arena / tuning
//! configuration. It holds no per-agent state, so one engine can drive any
//! number of agents, each with its own `StrategyState`.

use skirmish_core::config::{ArenaConfig, ConfigError, TacticsTuning};
use skirmish_core::physics::{ArcadeIntegrator, Integrator};
use skirmish_core::types::{Action, HazardProjection, TargetProjection, VesselState};

use crate::fire_control::should_fire;
use crate::selector::{select_best_action, DecisionInput, DecisionTrace, Selection};
use crate::strategy::StrategyState;

/// What happened on one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Action written onto the vessel.
    pub action: Action,
    /// Fire flag written onto the vessel.
    pub fire: bool,
    /// Present only when a fresh decision was made this tick.
    pub trace: Option<DecisionTrace>,
}

pub struct TacticalEngine<I = ArcadeIntegrator> {
    integrator: I,
    arena: ArenaConfig,
    tuning: TacticsTuning,
}

impl TacticalEngine<ArcadeIntegrator> {
    /// Engine over the reference integrator, sharing `arena` with it.
    pub fn with_arena(arena: ArenaConfig) -> Result<Self, ConfigError> {
        Self::new(ArcadeIntegrator::new(arena), arena, TacticsTuning::default())
    }
}

impl Default for TacticalEngine<ArcadeIntegrator> {
    fn default() -> Self {
        let arena = ArenaConfig::default();
        Self {
            integrator: ArcadeIntegrator::new(arena),
            arena,
            tuning: TacticsTuning::default(),
        }
    }
}

impl<I: Integrator> TacticalEngine<I> {
    pub fn new(integrator: I, arena: ArenaConfig, tuning: TacticsTuning) -> Result<Self, ConfigError> {
        arena.validate()?;
        tuning.validate()?;
        Ok(Self {
            integrator,
            arena,
            tuning,
        })
    }

    pub fn integrator(&self) -> &I {
        &self.integrator
    }

    pub fn arena(&self) -> &ArenaConfig {
        &self.arena
    }

    pub fn tuning(&self) -> &TacticsTuning {
        &self.tuning
    }

    /// One decision without hold-timer bookkeeping.
    pub fn select_best_action(&self, input: &DecisionInput<'_>) -> Selection {
        select_best_action(&self.integrator, input, &self.arena, &self.tuning)
    }

    /// Decide this tick's controls and fire flag and write them onto `vessel`.
    ///
    /// If either vessel or target is dead, all flags are cleared.
    pub fn update(
        &self,
        state: &mut StrategyState,
        vessel: &mut VesselState,
        target: &VesselState,
        hazards: &[HazardProjection],
        dt: f64,
    ) -> TickOutcome {
        if !vessel.alive || !target.alive {
            vessel.clear_flags();
            return TickOutcome::default();
        }

        let nav_target = state
            .evasion_target(vessel.position, target.position, dt)
            .unwrap_or_else(|| TargetProjection::from(target));

        let (action, trace) = state.decide(self, vessel.body(), nav_target, hazards, dt);
        vessel.controls = action;

        let fire = state.can_fire() && should_fire(vessel, target, &self.arena);
        vessel.fire = fire;

        TickOutcome {
            action,
            fire,
            trace,
        }
    }
}
