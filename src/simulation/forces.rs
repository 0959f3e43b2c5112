//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and direct pairwise Newtonian gravity.
//! Terms read positions through the precomputed `PairTable`; the
//! collision resolver runs before every evaluation, so an exactly-zero
//! separation reaching gravity is a fatal invariant violation rather
//! than something to soften away.

use std::collections::HashMap;

use super::error::SimError;
use super::pairwise::PairTable;
use super::states::{NVec3, System};

/// Collection of acceleration terms (gravity today, drag etc. later)
/// Each term implements [`Acceleration`] and their contributions are
/// summed into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` is set to the sum of contributions from all terms,
    ///   indexed in the system's id order
    pub fn accumulate_accels(
        &self,
        sys: &System,
        pairs: &PairTable,
        out: &mut [NVec3],
    ) -> Result<(), SimError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, pairs, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(
        &self,
        sys: &System,
        pairs: &PairTable,
        out: &mut [NVec3],
    ) -> Result<(), SimError>;
}

/// Direct n² Newtonian gravity, no softening
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(
        &self,
        sys: &System,
        pairs: &PairTable,
        out: &mut [NVec3],
    ) -> Result<(), SimError> {
        if sys.is_empty() {
            return Ok(());
        }

        // Buffer slots follow the system's id order
        let mut index = HashMap::with_capacity(sys.len());
        let mut masses = Vec::with_capacity(sys.len());
        for (i, p) in sys.iter().enumerate() {
            index.insert(p.id(), i);
            masses.push(p.mass());
        }

        // One evaluation per unordered pair (lo, hi), lo < hi
        for ((lo, hi), disp, dist, d3) in pairs.geometry() {
            // Coincident unmerged bodies would divide by zero here.
            // The collision resolver owns preventing this state. The
            // check is on the distance, not its cube: dist³ underflows
            // to zero for tiny separations that are still nonzero.
            if dist == 0.0 {
                return Err(SimError::DegenerateSeparation(lo, hi));
            }

            let (i, j) = match (index.get(&lo), index.get(&hi)) {
                (Some(&i), Some(&j)) => (i, j),
                _ => return Err(SimError::UnknownPairId(lo, hi)),
            };

            // r points from lo to hi: lo feels a pull along +r,
            // hi feels a pull along -r
            let r = -disp;

            // coef = G / |r|^3
            let coef = self.g / d3;

            // Newton's third law, applied equal and opposite:
            // a_lo +=  G * m_hi * r / |r|^3
            // a_hi += -G * m_lo * r / |r|^3
            out[i] += coef * masses[j] * r;
            out[j] -= coef * masses[i] * r;
        }
        Ok(())
    }
}
