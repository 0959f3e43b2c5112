//! Collision detection and inelastic merging
//!
//! Finds all pairs closer than the merge threshold, groups them into
//! maximal transitively-connected clusters with a union-find over live
//! ids, and merges each cluster into its most massive member. Merging
//! conserves mass and momentum; the merged position is the plain
//! average of the cluster members. Cascades (a merge bringing a new
//! pair under threshold) are resolved by repeating to a fixed point.

use log::{debug, info};

use super::error::SimError;
use super::pairwise::PairTable;
use super::states::{NVec3, System};

/// Union-find over particle-list indices.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[rb] = ra;
        }
    }
}

/// Unordered id pairs at or under the merge threshold. An empty result
/// is the normal terminal case, not an error.
pub fn qualifying_pairs(pairs: &PairTable, collision_distance: f64) -> Vec<(u32, u32)> {
    pairs
        .distances()
        .filter(|&(_, d)| d <= collision_distance)
        .map(|(ids, _)| ids)
        .collect()
}

/// Group qualifying pairs into maximal mutually-connected clusters.
/// Returns one id list per cluster of size >= 2.
fn collision_clusters(ids: &[u32], qualifying: &[(u32, u32)]) -> Vec<Vec<u32>> {
    let index_of = |id: u32| ids.iter().position(|&x| x == id);

    let mut sets = DisjointSet::new(ids.len());
    for &(a, b) in qualifying {
        if let (Some(i), Some(j)) = (index_of(a), index_of(b)) {
            sets.union(i, j);
        }
    }

    // Read groups out by root, keeping id order within each cluster
    let mut clusters: Vec<Vec<u32>> = vec![Vec::new(); ids.len()];
    for (i, &id) in ids.iter().enumerate() {
        let root = sets.find(i);
        clusters[root].push(id);
    }
    clusters.retain(|c| c.len() >= 2);
    clusters
}

/// Outcome of a resolver pass: the pair table of the settled set plus
/// the ids of survivors that absorbed a cluster along the way.
#[derive(Debug)]
pub struct Resolution {
    pub pairs: PairTable,
    pub merged: Vec<u32>,
}

/// Merge one cluster in place: the most massive member keeps its id and
/// absorbs the total mass, the combined momentum, and the average
/// position; the rest are removed from the system. Returns the
/// surviving id.
fn merge_cluster(sys: &mut System, cluster: &[u32]) -> Result<u32, SimError> {
    if cluster.len() < 2 {
        return Err(SimError::ClusterIdConflict);
    }

    let mut total_mass = 0.0;
    let mut net_position = NVec3::zeros();
    let mut net_momentum = NVec3::zeros();
    let mut survivor: Option<(u32, f64)> = None;

    for &id in cluster {
        let p = sys.get(id).ok_or(SimError::ClusterIdConflict)?;
        total_mass += p.mass();
        net_position += p.position();
        net_momentum += p.momentum();
        match survivor {
            Some((_, best)) if best >= p.mass() => {}
            _ => survivor = Some((id, p.mass())),
        }
    }

    let (keep_id, _) = survivor.ok_or(SimError::ClusterIdConflict)?;
    let position = net_position / cluster.len() as f64;
    let velocity = net_momentum / total_mass;

    info!(
        "merging cluster {:?} into particle {} (mass {:.6e})",
        cluster, keep_id, total_mass
    );

    sys.get_mut(keep_id)
        .ok_or(SimError::ClusterIdConflict)?
        .absorb(total_mass, position, velocity);
    for &id in cluster {
        if id != keep_id {
            sys.remove(id);
        }
    }
    Ok(keep_id)
}

/// Resolve all collisions at the current positions, repeating until no
/// qualifying pair remains (merges can cascade). Returns the pair table
/// of the settled set, so the caller can reuse it for the acceleration
/// pass, together with the ids that absorbed a cluster. Each round
/// removes at least one particle, so more rounds than initial particles
/// means the cascade is not converging.
pub fn resolve_collisions(
    sys: &mut System,
    collision_distance: f64,
) -> Result<Resolution, SimError> {
    let max_rounds = sys.len() + 1;
    let mut merged = Vec::new();
    for _ in 0..max_rounds {
        let pairs = PairTable::build(sys);
        let qualifying = qualifying_pairs(&pairs, collision_distance);
        if qualifying.is_empty() {
            return Ok(Resolution { pairs, merged });
        }

        debug!("qualifying collision pairs: {:?}", qualifying);
        let ids: Vec<u32> = sys.iter().map(|p| p.id()).collect();
        for cluster in collision_clusters(&ids, &qualifying) {
            let keep_id = merge_cluster(sys, &cluster)?;
            if !merged.contains(&keep_id) {
                merged.push(keep_id);
            }
        }
    }
    Err(SimError::CascadeOverflow(max_rounds))
}
