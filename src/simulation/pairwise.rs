//! Pairwise displacement/distance table for the live particle set
//!
//! `PairTable` stores displacement, distance, and distance³ for every
//! unordered pair of live ids, keyed canonically by `(lo, hi)`. The
//! accessors apply the sign flip, so callers see the full ordered-pair
//! view while each quantity is computed exactly once per pair. Tables
//! are rebuilt from current positions every time they are needed and
//! never persisted across steps.

use std::collections::HashMap;

use super::states::{NVec3, System};

#[derive(Debug, Clone, Copy)]
struct PairEntry {
    disp: NVec3, // x_lo - x_hi
    dist: f64,
    dist_cubed: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PairTable {
    entries: HashMap<(u32, u32), PairEntry>,
    // canonical keys in id order, so iteration (and therefore float
    // accumulation) is deterministic across runs
    order: Vec<(u32, u32)>,
}

fn canonical(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl PairTable {
    /// Compute all pairwise quantities for the current positions.
    /// O(n²); empty for zero- or one-particle systems.
    pub fn build(sys: &System) -> Self {
        let bodies: Vec<_> = sys.iter().collect();
        let n = bodies.len();
        let pair_count = n * n.saturating_sub(1) / 2;
        let mut entries = HashMap::with_capacity(pair_count);
        let mut order = Vec::with_capacity(pair_count);

        for i in 0..n {
            for j in (i + 1)..n {
                let (lo, hi) = (bodies[i], bodies[j]);
                // bodies are sorted by id, so lo.id < hi.id here
                let disp = lo.position() - hi.position();
                let dist = disp.norm();
                let key = (lo.id(), hi.id());
                entries.insert(
                    key,
                    PairEntry {
                        disp,
                        dist,
                        dist_cubed: dist * dist * dist,
                    },
                );
                order.push(key);
            }
        }
        Self { entries, order }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Displacement `x_a - x_b`, antisymmetric in its arguments.
    pub fn displacement(&self, a: u32, b: u32) -> Option<NVec3> {
        let e = self.entries.get(&canonical(a, b))?;
        Some(if a <= b { e.disp } else { -e.disp })
    }

    /// Separation distance, symmetric in its arguments.
    pub fn distance(&self, a: u32, b: u32) -> Option<f64> {
        self.entries.get(&canonical(a, b)).map(|e| e.dist)
    }

    pub fn distance_cubed(&self, a: u32, b: u32) -> Option<f64> {
        self.entries.get(&canonical(a, b)).map(|e| e.dist_cubed)
    }

    /// Iterate over every canonical `(lo, hi)` pair and its distance,
    /// in id order.
    pub fn distances(&self) -> impl Iterator<Item = ((u32, u32), f64)> + '_ {
        self.order.iter().map(|&k| (k, self.entries[&k].dist))
    }

    /// Iterate over every canonical pair with its displacement
    /// `x_lo - x_hi`, distance, and distance³, in id order.
    pub fn geometry(&self) -> impl Iterator<Item = ((u32, u32), NVec3, f64, f64)> + '_ {
        self.order.iter().map(|&k| {
            let e = &self.entries[&k];
            (k, e.disp, e.dist, e.dist_cubed)
        })
    }
}
