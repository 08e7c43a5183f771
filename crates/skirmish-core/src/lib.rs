//! Core types and definitions for the SKIRMISH arena.
//!
//! This crate defines the vocabulary shared by the tactics engine and its
//! collaborators: vessel and hazard types, actions, configuration, constants
//! and the physics integrator interface. It contains no decision logic.

pub mod config;
pub mod constants;
pub mod enums;
pub mod physics;
pub mod types;

#[cfg(test)]
mod tests;
