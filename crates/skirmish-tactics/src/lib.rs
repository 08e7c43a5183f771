//! Tactical decision engine for SKIRMISH.
//!
//! Chooses a vessel's control action each tick by rolling candidate actions
//! forward through the physics integrator and scoring the results, holds the
//! choice for a minimum time, and makes an independent lead-angle fire
//! decision. Pure computation over plain data; no I/O.

pub mod candidates;
pub mod engine;
pub mod fire_control;
pub mod profiles;
pub mod scoring;
pub mod selector;
pub mod strategy;
pub mod trajectory;
pub mod waypoint;

pub use engine::{TacticalEngine, TickOutcome};
pub use strategy::StrategyState;
