use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::traits::HasRingMembership;

/// Molecular graph: atoms on nodes, bonds on edges.
///
/// Thin wrapper over a petgraph `UnGraph` keeping atom indices dense,
/// stable and 0-based. The atom and bond payloads are generic; the
/// perception engine and the Kekulizer work on the concrete
/// [`Mol<Atom, Bond>`](crate::Atom) instantiation because they mutate
/// flags and bond orders in place.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
        }
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// Degree of the atom counting only explicit neighbors.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.neighbors(idx).count()
    }

    /// The endpoint of `edge` that is not `from`.
    pub fn other_endpoint(&self, edge: EdgeIndex, from: NodeIndex) -> Option<NodeIndex> {
        let (a, b) = self.bond_endpoints(edge)?;
        if a == from {
            Some(b)
        } else if b == from {
            Some(a)
        } else {
            None
        }
    }
}

impl<A, B: HasRingMembership> Mol<A, B> {
    /// Bonds of `idx` flagged as ring bonds by the external ring pass.
    pub fn ring_bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph
            .edges(idx)
            .filter(|e| e.weight().in_ring())
            .map(|e| e.id())
    }

    /// Neighbors of `idx` reached over ring bonds, paired with the
    /// connecting edge.
    pub fn ring_neighbors_of(
        &self,
        idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, EdgeIndex)> + '_ {
        self.graph
            .edges(idx)
            .filter(|e| e.weight().in_ring())
            .map(move |e| (if e.source() == idx { e.target() } else { e.source() }, e.id()))
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        for idx in self.atoms() {
            if self.atom(idx) != other.atom(idx) {
                return false;
            }
        }
        for idx in self.bonds() {
            if self.bond(idx) != other.bond(idx)
                || self.bond_endpoints(idx) != other.bond_endpoints(idx)
            {
                return false;
            }
        }
        true
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};

    #[test]
    fn ring_neighbors_skip_acyclic_bonds() {
        let mut mol: Mol<Atom, Bond> = Mol::new();
        let a = mol.add_atom(Atom::new(6).in_ring());
        let b = mol.add_atom(Atom::new(6).in_ring());
        let c = mol.add_atom(Atom::new(6));
        mol.add_bond(a, b, Bond::new(BondOrder::Single).in_ring());
        mol.add_bond(a, c, Bond::new(BondOrder::Single));

        let ring: Vec<_> = mol.ring_neighbors_of(a).map(|(n, _)| n).collect();
        assert_eq!(ring, vec![b]);
        assert_eq!(mol.degree(a), 2);
    }

    #[test]
    fn other_endpoint() {
        let mut mol: Mol<Atom, Bond> = Mol::new();
        let a = mol.add_atom(Atom::new(6));
        let b = mol.add_atom(Atom::new(8));
        let e = mol.add_bond(a, b, Bond::new(BondOrder::Double));
        assert_eq!(mol.other_endpoint(e, a), Some(b));
        assert_eq!(mol.other_endpoint(e, b), Some(a));
    }
}
