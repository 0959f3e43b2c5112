//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each explicitly-placed body
//! - [`RandomConfig`]     – seeded random initial conditions
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   gravitational_constant: 1.0
//!   dt: 0.01                   # fixed step size
//!   collision_distance: 1.0e-3 # merge threshold
//!   timesteps: 10000           # total steps to run
//!   sample_rate: 100           # expose positions every Nth step
//!
//! bodies:
//!   - x: [ -0.5, 0.0, 0.0 ]
//!     v: [  0.0, 0.7071, 0.0 ]
//!     m: 1.0
//!   - x: [  0.5, 0.0, 0.0 ]
//!     v: [  0.0, -0.7071, 0.0 ]
//!     m: 1.0
//! ```
//!
//! or, with random initial conditions instead of a `bodies` list:
//!
//! ```yaml
//! random:
//!   number_of_particles: 8
//!   max_mass: 10.0
//!   max_distance: 5.0
//!   max_speed: 0.5
//!   seed: 42
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation and validates every value.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub gravitational_constant: f64, // G
    pub dt: f64,                     // fixed step size
    pub collision_distance: f64,     // merge threshold
    pub timesteps: u64,              // total steps to run
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u64, // positions exposed every Nth step
}

fn default_sample_rate() -> u64 {
    1
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 3], // initial position in simulation units
    pub v: [f64; 3], // initial velocity in simulation units per time unit
    pub m: f64,      // mass of the body
}

/// Seeded random initial conditions (alternative to an explicit body list)
#[derive(Deserialize, Debug, Clone)]
pub struct RandomConfig {
    pub number_of_particles: usize,
    pub max_mass: f64,
    pub max_distance: f64,
    pub max_speed: f64,
    pub seed: u64,
}

/// Top-level scenario configuration loaded from YAML.
/// Exactly one of `bodies` or `random` must be given.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub random: Option<RandomConfig>,
}
