//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle: validated `Parameters`, the initial `System` (explicit body
//! list or seeded random factory), and the active force set, wrapped in
//! a bootstrapped [`Simulation`].

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::setup::{random_particles, SetupBounds};
use crate::simulation::states::{NVec3, Particle, System};

/// Map `BodyConfig` entries to validated runtime particles, ids in
/// listing order.
fn explicit_particles(bodies: &[BodyConfig]) -> Result<Vec<Particle>, SimError> {
    bodies
        .iter()
        .enumerate()
        .map(|(id, bc)| {
            Particle::new(
                id as u32,
                bc.m,
                NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
            )
        })
        .collect()
}

/// Build a ready-to-run [`Simulation`] from a loaded scenario.
pub fn build_scenario(cfg: ScenarioConfig) -> Result<Simulation, SimError> {
    let parameters = Parameters {
        g: cfg.parameters.gravitational_constant,
        dt: cfg.parameters.dt,
        collision_distance: cfg.parameters.collision_distance,
        timesteps: cfg.parameters.timesteps,
        sample_rate: cfg.parameters.sample_rate,
    };

    let particles = match (&cfg.bodies[..], &cfg.random) {
        (bodies @ [_, ..], None) => {
            if bodies.len() > crate::simulation::setup::MAX_PARTICLES {
                return Err(SimError::ParticleCountOutOfRange(bodies.len()));
            }
            explicit_particles(bodies)?
        }
        ([], Some(random)) => random_particles(&SetupBounds {
            number_of_particles: random.number_of_particles,
            max_mass: random.max_mass,
            max_distance: random.max_distance,
            max_speed: random.max_speed,
            seed: random.seed,
        })?,
        _ => return Err(SimError::AmbiguousScenario),
    };

    Simulation::new(parameters, System::new(particles)?)
}
