//! Error taxonomy for the simulation core
//!
//! Configuration/input errors are rejected at construction time and
//! degenerate numeric states are fatal; nothing here is recovered
//! internally, everything propagates to the caller of the driver

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Mass must be strictly positive, never clamped
    #[error("particle {id}: mass must be positive, got {mass}")]
    NonPositiveMass { id: u32, mass: f64 },

    /// Position/velocity components must all be finite
    #[error("particle {id}: non-finite {what}")]
    NonFinite { id: u32, what: &'static str },

    /// No two live particles may share an id
    #[error("duplicate particle id {0}")]
    DuplicateId(u32),

    /// A runtime parameter failed its range check
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Bad initial-condition bounds for the random particle factory
    #[error("invalid setup bound `{name}`: {value}")]
    InvalidSetupBound { name: &'static str, value: f64 },

    /// Particle count outside the supported range
    #[error("particle count {0} out of range (1..=16)")]
    ParticleCountOutOfRange(usize),

    /// Two unmerged particles at exactly zero separation feeding into
    /// the acceleration division. The collision resolver must prevent
    /// this; seeing it means a resolver invariant was violated
    #[error("zero separation between unmerged particles {0} and {1}")]
    DegenerateSeparation(u32, u32),

    /// The merge cascade failed to reach a fixed point within the
    /// bounded number of rounds
    #[error("collision cascade did not settle after {0} rounds")]
    CascadeOverflow(usize),

    /// A collision cluster resolved to a conflicting or missing
    /// survivor id
    #[error("collision cluster produced an inconsistent survivor id")]
    ClusterIdConflict,

    /// A surviving particle had no pre-step snapshot to integrate from
    #[error("particle {0} has no prior state to integrate from")]
    MissingPriorState(u32),

    /// A pair table referenced an id absent from the live set
    #[error("pair ({0}, {1}) references an id absent from the live set")]
    UnknownPairId(u32, u32),

    /// Scenario must define exactly one initial-condition source
    #[error("scenario must define exactly one of `bodies` or `random`")]
    AmbiguousScenario,
}
