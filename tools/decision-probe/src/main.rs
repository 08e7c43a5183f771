//! decision-probe: run one tactical decision against a JSON scenario and
//! print the scored candidates.
//!
//! Usage:
//!   decision-probe run --scenario duel.json --behavior attack
//!   decision-probe preset flee

use std::path::PathBuf;
use std::process;

use serde::{Deserialize, Serialize};

use skirmish_core::config::{ArenaConfig, StrategyConfig};
use skirmish_core::enums::Behavior;
use skirmish_core::types::{Action, HazardProjection, VesselState};
use skirmish_tactics::profiles::preset;
use skirmish_tactics::selector::DecisionTrace;
use skirmish_tactics::{StrategyState, TacticalEngine};

/// One frozen moment of an engagement.
#[derive(Debug, Deserialize)]
struct Scenario {
    vessel: VesselState,
    target: VesselState,
    #[serde(default)]
    hazards: Vec<HazardProjection>,
    #[serde(default = "default_dt")]
    dt: f64,
    /// Full strategy config; takes precedence over `behavior`.
    #[serde(default)]
    config: Option<StrategyConfig>,
    #[serde(default)]
    behavior: Option<Behavior>,
    #[serde(default)]
    arena: Option<ArenaConfig>,
}

fn default_dt() -> f64 {
    1.0 / 60.0
}

#[derive(Debug, Serialize)]
struct Report {
    action: Action,
    fire: bool,
    trace: Option<DecisionTrace>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "preset" => cmd_preset(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "decision-probe: SKIRMISH tactical decision inspector\n\
         \n\
         Commands:\n\
         \n\
         run       Run one decision and print the candidate scores as JSON\n\
         \n\
           --scenario <path>   Scenario JSON file\n\
           --behavior <name>   attack | flee | evade (optional, default: attack)\n\
         \n\
         preset    Print a behavior preset as JSON\n\
         \n\
           <name>              attack | flee | evade\n\
         \n\
         Examples:\n\
         \n\
           decision-probe run --scenario scenarios/duel.json\n\
           decision-probe run --scenario scenarios/duel.json --behavior flee\n\
           decision-probe preset evade\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_behavior(name: &str) -> Option<Behavior> {
    match name {
        "attack" => Some(Behavior::Attack),
        "flee" => Some(Behavior::Flee),
        "evade" => Some(Behavior::Evade),
        _ => None,
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let path = match parse_flag(args, "--scenario") {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Error: --scenario <path> is required");
            process::exit(1);
        }
    };

    let flag_behavior = match parse_flag(args, "--behavior") {
        Some(name) => match parse_behavior(name) {
            Some(b) => Some(b),
            None => {
                eprintln!("Error: unknown behavior '{name}'");
                process::exit(1);
            }
        },
        None => None,
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };

    let scenario: Scenario = match serde_json::from_str(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing scenario: {e}");
            process::exit(1);
        }
    };

    let config = match (scenario.config, flag_behavior.or(scenario.behavior)) {
        (Some(config), _) => config,
        (None, behavior) => preset(behavior.unwrap_or_default()),
    };

    let engine = match scenario.arena {
        Some(arena) => match TacticalEngine::with_arena(arena) {
            Ok(e) => e,
            Err(e) => {
                eprintln!("Error: invalid arena: {e}");
                process::exit(1);
            }
        },
        None => TacticalEngine::default(),
    };

    let mut state = match StrategyState::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: invalid strategy config: {e}");
            process::exit(1);
        }
    };

    eprintln!(
        "Scenario: {} hazard(s), dt={}s, {} steps of {}s",
        scenario.hazards.len(),
        scenario.dt,
        state.config().sim_steps,
        state.config().sim_dt,
    );

    let mut vessel = scenario.vessel;
    let outcome = engine.update(&mut state, &mut vessel, &scenario.target, &scenario.hazards, scenario.dt);

    if let Some(waypoint) = state.waypoint() {
        eprintln!(
            "Evasion waypoint: ({:.1}, {:.1})",
            waypoint.position.x, waypoint.position.y
        );
    }

    let report = Report {
        action: outcome.action,
        fire: outcome.fire,
        trace: outcome.trace,
    };
    print_json(&report);
}

// --- Preset command ---

fn cmd_preset(args: &[String]) {
    let behavior = match args.first().map(|s| parse_behavior(s)) {
        Some(Some(b)) => b,
        _ => {
            eprintln!("Error: preset requires one of attack | flee | evade");
            process::exit(1);
        }
    };
    print_json(&preset(behavior));
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            process::exit(1);
        }
    }
}
