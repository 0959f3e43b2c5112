//! Simulation driver
//!
//! `Simulation` owns the validated parameters, the live system, and the
//! active force set, and runs the fixed-step loop: resolve collisions,
//! integrate, expose positions to the caller's observer every Nth step.
//! The loop is single-threaded and never recovers from errors; they
//! propagate to the caller, who owns the abort-or-retry decision.

use log::{debug, info};

use super::error::SimError;
use super::forces::{AccelSet, NewtonianGravity};
use super::integrator::{initialise, verlet_step};
use super::params::Parameters;
use super::states::System;

pub struct Simulation {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Simulation {
    /// Validate parameters, register gravity, and run the bootstrap
    /// pass so every particle carries its initial acceleration.
    pub fn new(parameters: Parameters, mut system: System) -> Result<Self, SimError> {
        parameters.validate()?;

        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });
        initialise(&mut system, &forces, &parameters)?;

        info!(
            "simulation initialised: {} bodies, dt = {}, {} steps",
            system.len(),
            parameters.dt,
            parameters.timesteps
        );
        Ok(Self {
            parameters,
            system,
            forces,
        })
    }

    /// Advance one timestep.
    pub fn step(&mut self) -> Result<(), SimError> {
        verlet_step(&mut self.system, &self.forces, &self.parameters)
    }

    /// Run the configured number of steps. `observe` is called with the
    /// step index and the live system at step 0 and after every
    /// `sample_rate`-th step; the caller accumulates whatever history
    /// it wants, the core keeps none.
    pub fn run<F>(&mut self, mut observe: F) -> Result<(), SimError>
    where
        F: FnMut(u64, &System),
    {
        observe(0, &self.system);
        for step in 1..=self.parameters.timesteps {
            debug!("running timestep {} (t = {:.6})", step, self.system.t());
            self.step()?;
            if step % self.parameters.sample_rate == 0 {
                observe(step, &self.system);
            }
        }
        Ok(())
    }
}
