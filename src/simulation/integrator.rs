//! Fixed-step velocity-Verlet integration with merge interleave
//!
//! One step advances positions from each particle's own state, resolves
//! collisions on the updated positions, recomputes accelerations for
//! the survivors, then finishes the velocity half-update against the
//! pre-step snapshot. Collisions are resolved strictly between the
//! position and acceleration updates: acceleration is undefined for
//! coincident bodies, so the merge must happen first.

use std::collections::HashMap;

use super::collisions::resolve_collisions;
use super::error::SimError;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec3, System};

/// Bootstrap pass, required once before the first step: resolve any
/// initial overlaps, then compute and assign starting accelerations.
pub fn initialise(sys: &mut System, forces: &AccelSet, params: &Parameters) -> Result<(), SimError> {
    let resolution = resolve_collisions(sys, params.collision_distance)?;

    let mut a = vec![NVec3::zeros(); sys.len()];
    forces.accumulate_accels(sys, &resolution.pairs, &mut a)?;

    for (p, a) in sys.iter_mut().zip(a.iter()) {
        p.set_acceleration(*a);
    }
    Ok(())
}

/// Advance the system by one step.
///
/// The update is synchronous: every "next" value is derived from the
/// pre-step snapshot, so no particle observes another particle's
/// already-updated state within the same step.
pub fn verlet_step(sys: &mut System, forces: &AccelSet, params: &Parameters) -> Result<(), SimError> {
    if sys.is_empty() {
        sys.advance_clock(params.dt);
        return Ok(());
    }

    let dt = params.dt;
    let half_dtsq = params.half_dtsq();

    // Pre-step snapshot of (v_n, a_n) keyed by id. Particles merged
    // away during this step are simply absent from the velocity update.
    let saved: HashMap<u32, (NVec3, NVec3)> = sys
        .iter()
        .map(|p| (p.id(), (p.velocity(), p.acceleration())))
        .collect();

    // Drift: x_n+1 = x_n + v_n dt + a_n dt²/2, each particle from its
    // own attributes only
    for p in sys.iter_mut() {
        let dx = p.velocity() * dt + p.acceleration() * half_dtsq;
        p.drift(dx);
    }

    // Merge anything the drift brought under threshold, then evaluate
    // a_n+1 on the surviving set at the new positions
    let resolution = resolve_collisions(sys, params.collision_distance)?;

    let mut a_new = vec![NVec3::zeros(); sys.len()];
    forces.accumulate_accels(sys, &resolution.pairs, &mut a_new)?;

    // Kick: v_n+1 = v_n + (a_n + a_n+1) dt/2, matching survivors to
    // the snapshot by id, then commit a_n+1. A survivor the resolver
    // reports as having absorbed a cluster keeps its momentum-conserving
    // merge velocity as the kick base instead of the stale pre-merge
    // snapshot.
    for (p, a_next) in sys.iter_mut().zip(a_new.iter()) {
        let &(v_old, a_old) = saved
            .get(&p.id())
            .ok_or(SimError::MissingPriorState(p.id()))?;
        let v_base = if resolution.merged.contains(&p.id()) {
            p.velocity()
        } else {
            v_old
        };
        p.set_velocity(v_base + 0.5 * (a_old + *a_next) * dt);
        p.set_acceleration(*a_next);
    }

    sys.advance_clock(dt);
    Ok(())
}
