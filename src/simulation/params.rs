//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g` and step size `dt`,
//! - merge threshold `collision_distance`,
//! - step count and position sampling rate

use super::error::SimError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,                  // gravitational constant
    pub dt: f64,                 // step size
    pub collision_distance: f64, // merge threshold
    pub timesteps: u64,          // total steps to run
    pub sample_rate: u64,        // positions exposed every Nth step
}

impl Parameters {
    /// Range-check every field. Out-of-range values are rejected here,
    /// never clamped.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.g.is_finite() || self.g <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "g",
                value: self.g,
            });
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "dt",
                value: self.dt,
            });
        }
        if !self.collision_distance.is_finite() || self.collision_distance < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "collision_distance",
                value: self.collision_distance,
            });
        }
        if self.timesteps == 0 {
            return Err(SimError::InvalidParameter {
                name: "timesteps",
                value: 0.0,
            });
        }
        if self.sample_rate == 0 {
            return Err(SimError::InvalidParameter {
                name: "sample_rate",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Precomputed `dt²/2` used by the position update.
    pub fn half_dtsq(&self) -> f64 {
        0.5 * self.dt * self.dt
    }
}
