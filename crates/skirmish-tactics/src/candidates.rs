//! Static candidate actions evaluated on every decision.

use skirmish_core::types::Action;

/// A named action under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub name: &'static str,
    pub action: Action,
}

impl Candidate {
    pub const fn new(name: &'static str, action: Action) -> Self {
        Self { name, action }
    }
}

pub const PURSUIT: &str = "pursuit";
pub const BRAKE_PURSUIT: &str = "brake_pursuit";

const STATIC_CANDIDATES: [Candidate; 7] = [
    Candidate::new("thrust", Action::new(true, false, false, false)),
    Candidate::new("thrust_left", Action::new(true, true, false, false)),
    Candidate::new("thrust_right", Action::new(true, false, true, false)),
    Candidate::new("coast", Action::new(false, false, false, false)),
    Candidate::new("coast_left", Action::new(false, true, false, false)),
    Candidate::new("coast_right", Action::new(false, false, true, false)),
    Candidate::new("brake", Action::new(false, false, false, true)),
];

/// Thrust and coast crossed with {straight, left, right}, plus brake-only.
pub fn static_candidates() -> &'static [Candidate] {
    &STATIC_CANDIDATES
}
