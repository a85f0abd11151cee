//! Aromatic ring perception.
//!
//! The engine takes a Kekulé-form molecule (explicit bond orders, ring
//! membership already marked), asks an [`ElectronDonation`] model for a
//! per-atom pi-electron contribution, and marks every atom and bond that
//! lies on a ring whose contribution sum satisfies the Hückel rule.
//!
//! Isolated simple rings are resolved by a direct walk. Fused systems
//! fall back to a depth-first cycle search run in three passes of
//! increasing ring-size limit, with only the final pass bounded by a
//! global state ceiling so pathological fused systems terminate.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::atom::Atom;
use crate::bond::Bond;
use crate::donation::ElectronDonation;
use crate::mol::Mol;

/// State ceiling for the final bounded search pass.
pub const MAX_STATES: u64 = 1 << 20;

/// How the engine enumerates candidate rings.
#[derive(Debug, Clone)]
pub enum CycleStrategy {
    /// Search all cycles up to `max_ring_size` atoms. May give up on
    /// pathological fused systems once the state ceiling is hit.
    Exhaustive { max_ring_size: usize },
    /// Test exactly the given cycles (each a closed atom walk, first
    /// atom implicitly following the last). Never gives up.
    FixedBasis { cycles: Vec<Vec<NodeIndex>> },
}

/// Hückel rule on a ring's electron sum: aromatic when the sum is
/// `4n + 2` for some `n >= 0`.
pub fn huckel_sum_valid(sum: i32) -> bool {
    sum >= 2 && (sum - 2) % 4 == 0
}

/// Clear aromaticity flags on every atom and bond.
pub fn clear_aromatic_flags(mol: &mut Mol<Atom, Bond>) {
    for idx in mol.atoms().collect::<Vec<_>>() {
        mol.atom_mut(idx).is_aromatic = false;
    }
    for idx in mol.bonds().collect::<Vec<_>>() {
        mol.bond_mut(idx).is_aromatic = false;
    }
}

/// True when any atom carries the aromatic flag.
pub fn is_aromatic(mol: &Mol<Atom, Bond>) -> bool {
    mol.atoms().any(|idx| mol.atom(idx).is_aromatic)
}

/// Perception engine: a donation model plus a cycle strategy.
pub struct Aromaticity<M> {
    model: M,
    strategy: CycleStrategy,
}

// Search bookkeeping shared by the complex-system DFS.
const UNSEEN: u8 = 0;
const ON_PATH: u8 = 1;
const CANDIDATE: u8 = 2;

impl<M: ElectronDonation> Aromaticity<M> {
    pub fn new(model: M, strategy: CycleStrategy) -> Self {
        Self { model, strategy }
    }

    /// Perceive aromaticity in place: flags every atom and bond on a
    /// Hückel-satisfying ring and returns whether perception fully
    /// resolved. `false` means the bounded search gave up on some fused
    /// system; rings resolved before that remain marked.
    ///
    /// Re-running on already-perceived input gives the same answer: all
    /// flags are cleared first.
    pub fn perceive(&self, mol: &mut Mol<Atom, Bond>) -> bool {
        clear_aromatic_flags(mol);
        let mut contrib = self.model.contribution(mol);
        match &self.strategy {
            CycleStrategy::Exhaustive { max_ring_size } => {
                perceive_exhaustive(mol, &mut contrib, *max_ring_size)
            }
            CycleStrategy::FixedBasis { cycles } => {
                perceive_fixed(mol, &contrib, cycles);
                true
            }
        }
    }

    /// Aromatic bond set of `mol` without mutating it.
    pub fn aromatic_bonds(&self, mol: &Mol<Atom, Bond>) -> Vec<EdgeIndex> {
        let mut scratch = mol.clone();
        self.perceive(&mut scratch);
        scratch
            .bonds()
            .filter(|&e| scratch.bond(e).is_aromatic)
            .collect()
    }
}

fn mark_bond(mol: &mut Mol<Atom, Bond>, edge: EdgeIndex) {
    mol.bond_mut(edge).is_aromatic = true;
    if let Some((a, b)) = mol.bond_endpoints(edge) {
        mol.atom_mut(a).is_aromatic = true;
        mol.atom_mut(b).is_aromatic = true;
    }
}

fn candidate_ring_neighbors(
    mol: &Mol<Atom, Bond>,
    contrib: &[i8],
    idx: NodeIndex,
) -> Vec<(NodeIndex, EdgeIndex)> {
    mol.ring_neighbors_of(idx)
        .filter(|(nb, _)| contrib[nb.index()] >= 0)
        .collect()
}

fn perceive_exhaustive(
    mol: &mut Mol<Atom, Bond>,
    contrib: &mut [i8],
    max_ring_size: usize,
) -> bool {
    prune_terminal(mol, contrib);

    let n = mol.atom_count();
    let mut visit = vec![UNSEEN; n];
    let mut fusion: Vec<NodeIndex> = Vec::new();
    for idx in mol.atoms() {
        if contrib[idx.index()] < 0 {
            continue;
        }
        if candidate_ring_neighbors(mol, contrib, idx).len() >= 3 {
            fusion.push(idx);
            if visit[idx.index()] == UNSEEN {
                flood_fill(mol, contrib, &mut visit, idx);
            }
        }
    }

    // anything still unseen is at worst a disjoint union of simple rings
    for idx in mol.atoms().collect::<Vec<_>>() {
        if visit[idx.index()] == UNSEEN && contrib[idx.index()] >= 0 {
            walk_simple_ring(mol, contrib, &mut visit, idx, max_ring_size);
        }
    }

    if fusion.is_empty() {
        true
    } else {
        search_fused(mol, contrib, &mut visit, &fusion, max_ring_size)
    }
}

/// Remove atoms that cannot lie on any candidate ring: fewer than two
/// candidate ring neighbors. Exclusion cascades down dangling chains.
fn prune_terminal(mol: &Mol<Atom, Bond>, contrib: &mut [i8]) {
    let mut stack: Vec<NodeIndex> = mol.atoms().collect();
    while let Some(idx) = stack.pop() {
        if contrib[idx.index()] < 0 {
            continue;
        }
        let cands = candidate_ring_neighbors(mol, contrib, idx);
        if cands.len() < 2 {
            contrib[idx.index()] = -1;
            for (nb, _) in cands {
                stack.push(nb);
            }
        }
    }
}

/// Mark every candidate atom reachable from a fusion atom over ring
/// bonds as part of a fused component.
fn flood_fill(mol: &Mol<Atom, Bond>, contrib: &[i8], visit: &mut [u8], start: NodeIndex) {
    let mut stack = vec![start];
    visit[start.index()] = CANDIDATE;
    while let Some(idx) = stack.pop() {
        for (nb, _) in mol.ring_neighbors_of(idx) {
            if contrib[nb.index()] >= 0 && visit[nb.index()] == UNSEEN {
                visit[nb.index()] = CANDIDATE;
                stack.push(nb);
            }
        }
    }
}

/// Follow the unique closed walk through a 2-regular candidate
/// component, summing contributions, and mark it if Hückel holds.
fn walk_simple_ring(
    mol: &mut Mol<Atom, Bond>,
    contrib: &[i8],
    visit: &mut [u8],
    start: NodeIndex,
    max_ring_size: usize,
) {
    visit[start.index()] = ON_PATH;
    let first = candidate_ring_neighbors(mol, contrib, start);
    if first.len() != 2 {
        return;
    }
    let mut sum = contrib[start.index()] as i32;
    let mut edges = vec![first[0].1];
    let mut prev = start;
    let mut cur = first[0].0;
    while cur != start {
        visit[cur.index()] = ON_PATH;
        sum += contrib[cur.index()] as i32;
        let cands = candidate_ring_neighbors(mol, contrib, cur);
        if cands.len() != 2 {
            return;
        }
        let &(next, edge) = cands
            .iter()
            .find(|(nb, _)| *nb != prev)
            .unwrap_or(&cands[0]);
        edges.push(edge);
        prev = cur;
        cur = next;
    }
    if edges.len() >= 3 && edges.len() <= max_ring_size && huckel_sum_valid(sum) {
        for edge in edges {
            mark_bond(mol, edge);
        }
    }
}

/// Cycle search over fused ring systems. Runs in passes of increasing
/// ring-size limit so small rings resolve before the expensive full
/// search; only the final pass is bounded by [`MAX_STATES`]. Returns
/// `false` when the final pass hit the ceiling.
fn search_fused(
    mol: &mut Mol<Atom, Bond>,
    contrib: &[i8],
    visit: &mut [u8],
    fusion: &[NodeIndex],
    max_ring_size: usize,
) -> bool {
    for (limit, max_states) in ring_size_passes(max_ring_size) {
        for &seed in fusion {
            let starts: Vec<(NodeIndex, EdgeIndex)> = mol
                .ring_neighbors_of(seed)
                .filter(|&(nb, edge)| {
                    !mol.bond(edge).is_aromatic && contrib[nb.index()] >= 0
                })
                .collect();
            for (nb, edge) in starts {
                if mol.bond(edge).is_aromatic {
                    continue;
                }
                let mut states = 0u64;
                let mut overflow = false;
                visit[nb.index()] = ON_PATH;
                let sum = contrib[seed.index()] as i32 + contrib[nb.index()] as i32;
                let found = dfs_cycle(
                    mol,
                    contrib,
                    visit,
                    seed,
                    nb,
                    edge,
                    sum,
                    2,
                    limit,
                    max_states,
                    &mut states,
                    &mut overflow,
                );
                visit[nb.index()] = CANDIDATE;
                if found {
                    mark_bond(mol, edge);
                }
                if overflow {
                    // outcome is already "not fully resolved"
                    return false;
                }
            }
        }
    }
    true
}

/// Ring-size limits for the fused search, smallest first. Earlier
/// passes run unbounded; the final pass always carries the
/// [`MAX_STATES`] ceiling, even when a small limit collapses the
/// schedule to fewer passes.
fn ring_size_passes(max_ring_size: usize) -> Vec<(usize, u64)> {
    let mut limits = vec![6.min(max_ring_size), 10.min(max_ring_size), max_ring_size];
    limits.dedup();
    let last = limits.len() - 1;
    limits
        .into_iter()
        .enumerate()
        .map(|(i, limit)| (limit, if i == last { MAX_STATES } else { u64::MAX }))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn dfs_cycle(
    mol: &mut Mol<Atom, Bond>,
    contrib: &[i8],
    visit: &mut [u8],
    seed: NodeIndex,
    cur: NodeIndex,
    came: EdgeIndex,
    sum: i32,
    depth: usize,
    limit: usize,
    max_states: u64,
    states: &mut u64,
    overflow: &mut bool,
) -> bool {
    *states += 1;
    if *states > max_states {
        *overflow = true;
        return false;
    }
    if depth > limit {
        return false;
    }
    let nbrs: Vec<(NodeIndex, EdgeIndex)> = mol.ring_neighbors_of(cur).collect();
    for (next, edge) in nbrs {
        if edge == came {
            continue;
        }
        if next == seed {
            if depth >= 3 && huckel_sum_valid(sum) {
                mark_bond(mol, edge);
                return true;
            }
            continue;
        }
        if contrib[next.index()] < 0 || visit[next.index()] != CANDIDATE {
            continue;
        }
        visit[next.index()] = ON_PATH;
        let found = dfs_cycle(
            mol,
            contrib,
            visit,
            seed,
            next,
            edge,
            sum + contrib[next.index()] as i32,
            depth + 1,
            limit,
            max_states,
            states,
            overflow,
        );
        visit[next.index()] = CANDIDATE;
        if found {
            // unwinding a successful closure: each frame marks the edge
            // it descended through
            mark_bond(mol, edge);
            return true;
        }
        if *overflow {
            return false;
        }
    }
    false
}

/// Test caller-supplied cycles directly, ignoring connectivity beyond
/// the bonds closing each cycle.
fn perceive_fixed(mol: &mut Mol<Atom, Bond>, contrib: &[i8], cycles: &[Vec<NodeIndex>]) {
    for cycle in cycles {
        if cycle.len() < 3 {
            continue;
        }
        if cycle.iter().any(|idx| contrib[idx.index()] < 0) {
            continue;
        }
        let sum: i32 = cycle.iter().map(|idx| contrib[idx.index()] as i32).sum();
        if !huckel_sum_valid(sum) {
            continue;
        }
        let edges: Vec<EdgeIndex> = (0..cycle.len())
            .filter_map(|i| mol.bond_between(cycle[i], cycle[(i + 1) % cycle.len()]))
            .collect();
        if edges.len() != cycle.len() {
            continue;
        }
        for edge in edges {
            mark_bond(mol, edge);
        }
    }
}
