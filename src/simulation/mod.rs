pub mod states;
pub mod params;
pub mod error;
pub mod pairwise;
pub mod engine;
pub mod forces;
pub mod collisions;
pub mod integrator;
pub mod energy;
pub mod setup;
pub mod scenario;
