//! Action selection: simulate and score every candidate, keep the best.

use serde::Serialize;

use skirmish_core::config::{ArenaConfig, ScoringWeights, TacticsTuning};
use skirmish_core::enums::PursuitSign;
use skirmish_core::physics::Integrator;
use skirmish_core::types::{Action, HazardProjection, ShipBody, TargetProjection};

use crate::candidates::{static_candidates, BRAKE_PURSUIT, PURSUIT};
use crate::scoring::score;
use crate::trajectory::{simulate, simulate_pursuit, Trajectory};

/// Score of one evaluated candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateScore {
    pub name: &'static str,
    pub action: Action,
    pub score: f64,
}

/// Every candidate evaluated in one decision, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecisionTrace {
    pub candidates: Vec<CandidateScore>,
    pub winner: &'static str,
}

impl DecisionTrace {
    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.candidates
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.score)
    }
}

/// Result of one decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub action: Action,
    pub trace: DecisionTrace,
}

/// Everything one decision looks at.
#[derive(Debug, Clone, Copy)]
pub struct DecisionInput<'a> {
    pub body: ShipBody,
    pub target: TargetProjection,
    pub hazards: &'a [HazardProjection],
    pub steps: usize,
    pub dt: f64,
    pub weights: ScoringWeights,
    pub sign: PursuitSign,
    /// Committed action used for the hysteresis bonus.
    pub previous: Option<Action>,
}

/// Score a trajectory and add the hysteresis bonus if `action` matches the
/// previously committed action.
pub fn score_candidate(
    trajectory: &Trajectory,
    action: Action,
    input: &DecisionInput<'_>,
    arena: &ArenaConfig,
    tuning: &TacticsTuning,
) -> f64 {
    let base = score(
        trajectory,
        &input.target,
        input.hazards,
        input.dt,
        &input.weights,
        arena,
        tuning,
    );
    if input.previous == Some(action) {
        base + tuning.hysteresis_bonus
    } else {
        base
    }
}

/// Evaluate the static candidates, then the pursuit candidates, and return
/// the first highest-scoring action.
pub fn select_best_action(
    integrator: &impl Integrator,
    input: &DecisionInput<'_>,
    arena: &ArenaConfig,
    tuning: &TacticsTuning,
) -> Selection {
    let mut evaluated = Vec::with_capacity(static_candidates().len() + 2);

    for candidate in static_candidates() {
        let trajectory = simulate(integrator, input.body, candidate.action, input.steps, input.dt);
        let score = score_candidate(&trajectory, candidate.action, input, arena, tuning);
        evaluated.push(CandidateScore {
            name: candidate.name,
            action: candidate.action,
            score,
        });
    }

    let mut pursuit_variants = vec![(PURSUIT, 0)];
    // Below the gate the brake phase is pure coast and would mislead the caller
    if input.body.speed() > tuning.brake_pursuit_min_speed {
        pursuit_variants.push((BRAKE_PURSUIT, tuning.brake_pursuit_steps));
    }
    for (name, brake_steps) in pursuit_variants {
        let plan = simulate_pursuit(
            integrator,
            input.body,
            &input.target,
            input.steps,
            input.dt,
            brake_steps,
            input.sign,
            tuning,
        );
        let score = score_candidate(&plan.trajectory, plan.first_action, input, arena, tuning);
        evaluated.push(CandidateScore {
            name,
            action: plan.first_action,
            score,
        });
    }

    let mut best = evaluated[0];
    for entry in &evaluated[1..] {
        if entry.score > best.score {
            best = *entry;
        }
    }

    for entry in &evaluated {
        log::trace!("candidate {:<14} score {:>12.3}", entry.name, entry.score);
    }
    log::debug!("selected {} (score {:.3})", best.name, best.score);

    Selection {
        action: best.action,
        trace: DecisionTrace {
            candidates: evaluated,
            winner: best.name,
        },
    }
}
