//! Core state types for the N-body simulation.
//!
//! Defines the `Particle` body struct and the `System` collection:
//! - `Particle` holds mass, position, velocity, acceleration for one body
//! - `System` holds the ordered list of live particles and the clock `t`
//!
//! State is read-only from outside the crate; only the integrator and the
//! collision resolver mutate particles, through `pub(crate)` updaters.

use std::collections::BTreeMap;

use nalgebra::Vector3;

use super::error::SimError;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    id: u32,  // stable identity, unique among live particles
    m: f64,   // mass, grows only via merge
    x: NVec3, // position
    v: NVec3, // velocity
    a: NVec3, // acceleration, assigned by the bootstrap pass
}

impl Particle {
    /// Create a particle, rejecting non-positive mass and non-finite
    /// state vectors. Acceleration starts at zero and is only meaningful
    /// after the bootstrap pass has run.
    pub fn new(id: u32, mass: f64, position: NVec3, velocity: NVec3) -> Result<Self, SimError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::NonPositiveMass { id, mass });
        }
        if !position.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFinite { id, what: "position" });
        }
        if !velocity.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFinite { id, what: "velocity" });
        }
        Ok(Self {
            id,
            m: mass,
            x: position,
            v: velocity,
            a: NVec3::zeros(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    pub fn acceleration(&self) -> NVec3 {
        self.a
    }

    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    // Mutation is reserved to the integrator and collision resolver.

    pub(crate) fn drift(&mut self, dx: NVec3) {
        self.x += dx;
    }

    pub(crate) fn set_velocity(&mut self, v: NVec3) {
        self.v = v;
    }

    pub(crate) fn set_acceleration(&mut self, a: NVec3) {
        self.a = a;
    }

    /// Overwrite mass/position/velocity with the merged cluster state.
    pub(crate) fn absorb(&mut self, mass: f64, position: NVec3, velocity: NVec3) {
        self.m = mass;
        self.x = position;
        self.v = velocity;
    }
}

/// Ordered collection of live particles plus the simulation clock.
/// Particle count only ever decreases, through merges.
#[derive(Debug, Clone)]
pub struct System {
    particles: Vec<Particle>,
    t: f64,
}

impl System {
    /// Build a system at `t = 0`, sorted by id. Duplicate ids are
    /// rejected.
    pub fn new(mut particles: Vec<Particle>) -> Result<Self, SimError> {
        particles.sort_by_key(|p| p.id);
        for w in particles.windows(2) {
            if w[0].id == w[1].id {
                return Err(SimError::DuplicateId(w[0].id));
            }
        }
        Ok(Self { particles, t: 0.0 })
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Current position of every live particle, keyed by id. This is the
    /// snapshot the external position logger accumulates; the core keeps
    /// no history itself.
    pub fn positions(&self) -> BTreeMap<u32, NVec3> {
        self.particles.iter().map(|p| (p.id, p.x)).collect()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub(crate) fn get_mut(&mut self, id: u32) -> Option<&mut Particle> {
        self.particles.iter_mut().find(|p| p.id == id)
    }

    pub(crate) fn remove(&mut self, id: u32) {
        self.particles.retain(|p| p.id != id);
    }

    pub(crate) fn advance_clock(&mut self, dt: f64) {
        self.t += dt;
    }
}
