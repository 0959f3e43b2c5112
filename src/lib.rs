pub mod simulation;
pub mod configuration;

pub use simulation::states::{NVec3, Particle, System};
pub use simulation::params::Parameters;
pub use simulation::error::SimError;
pub use simulation::pairwise::PairTable;
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::collisions::{qualifying_pairs, resolve_collisions, Resolution};
pub use simulation::integrator::{initialise, verlet_step};
pub use simulation::energy::{is_bound, kinetic_energy, potential_energy, total_energy};
pub use simulation::setup::{random_particles, SetupBounds, MAX_PARTICLES};
pub use simulation::scenario::build_scenario;
pub use simulation::engine::Simulation;

pub use configuration::config::{BodyConfig, ParametersConfig, RandomConfig, ScenarioConfig};
