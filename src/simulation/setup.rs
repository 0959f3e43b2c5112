//! Seeded random particle factory
//!
//! Generates a deterministic initial particle set from a seed and the
//! configured bounds: masses uniform in (0, max_mass], positions and
//! velocities as uniform random directions scaled to max_distance and
//! max_speed. Bounds are validated up front, never clamped.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::SimError;
use super::states::{NVec3, Particle};

/// How many bodies one simulation supports.
pub const MAX_PARTICLES: usize = 16;

#[derive(Debug, Clone)]
pub struct SetupBounds {
    pub number_of_particles: usize,
    pub max_mass: f64,
    pub max_distance: f64,
    pub max_speed: f64,
    pub seed: u64,
}

impl SetupBounds {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.number_of_particles == 0 || self.number_of_particles > MAX_PARTICLES {
            return Err(SimError::ParticleCountOutOfRange(self.number_of_particles));
        }
        if !self.max_mass.is_finite() || self.max_mass <= 0.0 {
            return Err(SimError::InvalidSetupBound {
                name: "max_mass",
                value: self.max_mass,
            });
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(SimError::InvalidSetupBound {
                name: "max_distance",
                value: self.max_distance,
            });
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(SimError::InvalidSetupBound {
                name: "max_speed",
                value: self.max_speed,
            });
        }
        Ok(())
    }
}

/// Mass uniform in (0, max_mass]; resample the measure-zero 0 draw.
fn random_mass(rng: &mut StdRng, max_mass: f64) -> f64 {
    loop {
        let m = rng.gen::<f64>() * max_mass;
        if m > 0.0 {
            return m;
        }
    }
}

/// Uniform random direction scaled to `radius`.
fn random_vector(rng: &mut StdRng, radius: f64) -> NVec3 {
    if radius == 0.0 {
        return NVec3::zeros();
    }
    loop {
        let v = NVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let norm = v.norm();
        if norm > 1e-9 {
            return v * (radius / norm);
        }
    }
}

/// Build the initial particle set, ids 0..n.
pub fn random_particles(bounds: &SetupBounds) -> Result<Vec<Particle>, SimError> {
    bounds.validate()?;
    let mut rng = StdRng::seed_from_u64(bounds.seed);

    (0..bounds.number_of_particles as u32)
        .map(|id| {
            Particle::new(
                id,
                random_mass(&mut rng, bounds.max_mass),
                random_vector(&mut rng, bounds.max_distance),
                random_vector(&mut rng, bounds.max_speed),
            )
        })
        .collect()
}
