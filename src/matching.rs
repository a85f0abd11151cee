//! Maximum matching in general graphs.
//!
//! Edmonds' blossom algorithm over a plain adjacency-list view, kept
//! free of any chemistry so the Kekulizer can hand it an induced
//! subgraph as an eligibility mask. Vertices are dense `usize` indices;
//! ineligible vertices are simply never touched.

use std::collections::VecDeque;

/// Maximum matching over the eligible vertices. Returns the mate of
/// each vertex, `None` for unmatched or ineligible vertices.
///
/// `adjacency[v]` lists the neighbors of `v`; edges to ineligible
/// vertices are skipped rather than rejected.
pub fn maximum_matching(adjacency: &[Vec<usize>], eligible: &[bool]) -> Vec<Option<usize>> {
    let n = adjacency.len();
    let mut mate: Vec<Option<usize>> = vec![None; n];

    // greedy seed matching cuts down the number of augmentation rounds
    for v in 0..n {
        if !eligible[v] || mate[v].is_some() {
            continue;
        }
        for &u in &adjacency[v] {
            if eligible[u] && mate[u].is_none() {
                mate[v] = Some(u);
                mate[u] = Some(v);
                break;
            }
        }
    }

    for v in 0..n {
        if eligible[v] && mate[v].is_none() {
            augment(v, adjacency, eligible, &mut mate);
        }
    }
    mate
}

/// Perfect matching over the eligible vertices, or `None` if some
/// eligible vertex cannot be matched.
pub fn perfect_matching(adjacency: &[Vec<usize>], eligible: &[bool]) -> Option<Vec<Option<usize>>> {
    let mate = maximum_matching(adjacency, eligible);
    for (v, &e) in eligible.iter().enumerate() {
        if e && mate[v].is_none() {
            return None;
        }
    }
    Some(mate)
}

/// One round of BFS-based augmentation from an exposed root, with
/// blossom contraction tracked through the `base` array.
fn augment(
    root: usize,
    adjacency: &[Vec<usize>],
    eligible: &[bool],
    mate: &mut [Option<usize>],
) -> bool {
    let n = adjacency.len();
    let mut used = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut base: Vec<usize> = (0..n).collect();
    let mut queue = VecDeque::new();
    used[root] = true;
    queue.push_back(root);

    while let Some(v) = queue.pop_front() {
        for &to in &adjacency[v] {
            if !eligible[to] {
                continue;
            }
            if base[v] == base[to] || mate[v] == Some(to) {
                continue;
            }
            if to == root || mate[to].is_some_and(|m| parent[m].is_some()) {
                // odd cycle: contract the blossom at its base
                let cur_base = lowest_common_base(mate, &parent, &base, v, to);
                let mut in_blossom = vec![false; n];
                mark_path(mate, &mut parent, &base, &mut in_blossom, v, cur_base, to);
                mark_path(mate, &mut parent, &base, &mut in_blossom, to, cur_base, v);
                for i in 0..n {
                    if in_blossom[base[i]] {
                        base[i] = cur_base;
                        if !used[i] {
                            used[i] = true;
                            queue.push_back(i);
                        }
                    }
                }
            } else if parent[to].is_none() {
                parent[to] = Some(v);
                match mate[to] {
                    None => {
                        // exposed vertex reached: flip the path
                        let mut cur = Some(to);
                        while let Some(x) = cur {
                            let p = parent[x].expect("augmenting path is rooted");
                            let next = mate[p];
                            mate[x] = Some(p);
                            mate[p] = Some(x);
                            cur = next;
                        }
                        return true;
                    }
                    Some(m) => {
                        used[m] = true;
                        queue.push_back(m);
                    }
                }
            }
        }
    }
    false
}

fn mark_path(
    mate: &[Option<usize>],
    parent: &mut [Option<usize>],
    base: &[usize],
    in_blossom: &mut [bool],
    mut v: usize,
    blossom_base: usize,
    mut child: usize,
) {
    while base[v] != blossom_base {
        in_blossom[base[v]] = true;
        let m = mate[v].expect("interior blossom vertex is matched");
        in_blossom[base[m]] = true;
        parent[v] = Some(child);
        child = m;
        v = parent[m].expect("blossom path reaches the base");
    }
}

fn lowest_common_base(
    mate: &[Option<usize>],
    parent: &[Option<usize>],
    base: &[usize],
    mut a: usize,
    mut b: usize,
) -> usize {
    let mut seen = vec![false; base.len()];
    loop {
        a = base[a];
        seen[a] = true;
        match mate[a].and_then(|m| parent[m]) {
            Some(p) => a = p,
            None => break,
        }
    }
    loop {
        b = base[b];
        if seen[b] {
            return b;
        }
        b = parent[mate[b].expect("alternating tree edge is matched")]
            .expect("alternating tree reaches the root");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); n];
        for &(a, b) in edges {
            adj[a].push(b);
            adj[b].push(a);
        }
        adj
    }

    fn cycle_edges(n: usize) -> Vec<(usize, usize)> {
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    }

    fn matched_count(mate: &[Option<usize>]) -> usize {
        mate.iter().filter(|m| m.is_some()).count()
    }

    fn assert_consistent(mate: &[Option<usize>]) {
        for (v, m) in mate.iter().enumerate() {
            if let Some(u) = m {
                assert_eq!(mate[*u], Some(v));
            }
        }
    }

    #[test]
    fn even_cycle_is_perfect() {
        let adj = adjacency(6, &cycle_edges(6));
        let mate = perfect_matching(&adj, &[true; 6]).unwrap();
        assert_consistent(&mate);
        assert_eq!(matched_count(&mate), 6);
    }

    #[test]
    fn odd_cycle_is_not_perfect() {
        let adj = adjacency(5, &cycle_edges(5));
        assert!(perfect_matching(&adj, &[true; 5]).is_none());
        let mate = maximum_matching(&adj, &[true; 5]);
        assert_consistent(&mate);
        assert_eq!(matched_count(&mate), 4);
    }

    #[test]
    fn path_graph() {
        let adj = adjacency(4, &[(0, 1), (1, 2), (2, 3)]);
        let mate = perfect_matching(&adj, &[true; 4]).unwrap();
        assert_eq!(mate[0], Some(1));
        assert_eq!(mate[2], Some(3));
    }

    #[test]
    fn eligibility_mask_restricts() {
        // 6-cycle with one vertex masked out: the rest is a 5-path
        let adj = adjacency(6, &cycle_edges(6));
        let mut eligible = [true; 6];
        eligible[0] = false;
        assert!(perfect_matching(&adj, &eligible).is_none());
        let mate = maximum_matching(&adj, &eligible);
        assert_consistent(&mate);
        assert_eq!(matched_count(&mate), 4);
        assert_eq!(mate[0], None);
    }

    #[test]
    fn blossom_requires_contraction() {
        // triangle pair joined by a path: greedy matching can strand
        // the augmenting path inside a blossom
        let adj = adjacency(
            8,
            &[
                (0, 1),
                (1, 2),
                (2, 0),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 5),
            ],
        );
        let mate = perfect_matching(&adj, &[true; 8]).unwrap();
        assert_consistent(&mate);
        assert_eq!(matched_count(&mate), 8);
    }

    #[test]
    fn petersen_graph_is_perfect() {
        let mut edges = Vec::new();
        for i in 0..5 {
            edges.push((i, (i + 1) % 5)); // outer cycle
            edges.push((i, i + 5)); // spokes
            edges.push((i + 5, ((i + 2) % 5) + 5)); // inner star
        }
        let adj = adjacency(10, &edges);
        let mate = perfect_matching(&adj, &[true; 10]).unwrap();
        assert_consistent(&mate);
        assert_eq!(matched_count(&mate), 10);
    }

    #[test]
    fn empty_and_isolated() {
        let mate = maximum_matching(&[], &[]);
        assert!(mate.is_empty());
        let adj = adjacency(3, &[(0, 1)]);
        assert!(perfect_matching(&adj, &[true; 3]).is_none());
    }
}
