//! System energy accounting
//!
//! Pure diagnostic functions over a system snapshot. These are consumed
//! by tests and external callers for validation; the simulation loop
//! never branches on them, and they never fail. Energy drift is a
//! test-time concern, not a runtime error.

use super::pairwise::PairTable;
use super::states::System;

/// Total kinetic energy: Σ ½ m |v|².
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.iter()
        .map(|p| 0.5 * p.mass() * p.velocity().norm_squared())
        .sum()
}

/// Total gravitational potential energy: Σ over unordered pairs of
/// `-G m_a m_b / d`, each pair counted once.
pub fn potential_energy(sys: &System, g: f64) -> f64 {
    let pairs = PairTable::build(sys);
    let mut total = 0.0;
    for ((a, b), dist) in pairs.distances() {
        let (ma, mb) = match (sys.get(a), sys.get(b)) {
            (Some(pa), Some(pb)) => (pa.mass(), pb.mass()),
            _ => continue,
        };
        total -= g * ma * mb / dist;
    }
    total
}

/// Kinetic plus potential energy.
pub fn total_energy(sys: &System, g: f64) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, g)
}

/// A system with non-positive total energy is gravitationally bound.
pub fn is_bound(sys: &System, g: f64) -> bool {
    total_energy(sys, g) <= 0.0
}
