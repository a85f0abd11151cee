//! Kekulization: assign alternating single and double bonds to a
//! perceived aromatic system.
//!
//! Every aromatic atom that still needs a double bond (decided by a
//! small per-element valence table) goes into a perfect-matching
//! problem over the aromatic subgraph; matched pairs get double bonds,
//! everything else aromatic defaults to single. Failure leaves no
//! guarantee about partially assigned orders, so callers must treat an
//! error as "not Kekulized".

use std::error::Error;
use std::fmt;

use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::matching;
use crate::mol::Mol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KekulizeError {
    /// An atom has no element assigned (atomic number 0).
    MissingElement(NodeIndex),
    /// An atom has no formal charge assigned.
    MissingCharge(NodeIndex),
    /// An atom has no implicit hydrogen count assigned.
    MissingHydrogenCount(NodeIndex),
    /// No assignment of alternating orders exists; carries the atoms
    /// left without a double bond.
    Unkekulizable(Vec<NodeIndex>),
    /// The matching paired two atoms across a bond that already carries
    /// a higher order. Indicates an internal fault, not bad input.
    InconsistentMatch(NodeIndex, NodeIndex),
}

impl fmt::Display for KekulizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KekulizeError::MissingElement(idx) => {
                write!(f, "atom {} has no element assigned", idx.index())
            }
            KekulizeError::MissingCharge(idx) => {
                write!(f, "atom {} has no formal charge assigned", idx.index())
            }
            KekulizeError::MissingHydrogenCount(idx) => {
                write!(f, "atom {} has no hydrogen count assigned", idx.index())
            }
            KekulizeError::Unkekulizable(atoms) => {
                write!(
                    f,
                    "cannot assign Kekulé structure, {} atom(s) left unmatched",
                    atoms.len()
                )
            }
            KekulizeError::InconsistentMatch(a, b) => {
                write!(
                    f,
                    "matching paired atoms {} and {} across a higher-order bond",
                    a.index(),
                    b.index()
                )
            }
        }
    }
}

impl Error for KekulizeError {}

/// Whether an aromatic atom still needs a double bond assigned.
///
/// Valence is the explicit degree plus implicit hydrogens plus one per
/// existing double bond; the per-element table below says which
/// valences leave room for one more pi bond. Any bond of order three or
/// higher disqualifies the atom outright.
fn needs_double_bond(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    let atom = mol.atom(idx);
    let mut pi = 0u8;
    for edge in mol.bonds_of(idx) {
        match mol.bond(edge).order {
            BondOrder::Double => pi += 1,
            BondOrder::Triple | BondOrder::Quadruple => return false,
            BondOrder::Single | BondOrder::Unset => {}
        }
    }
    let valence = mol.degree(idx) as u8 + atom.hydrogens() + pi;
    let charge = atom.charge();
    match atom.atomic_num {
        // boron
        5 => (charge == 0 && valence <= 2) || (charge == -1 && valence <= 3),
        // carbon group
        6 | 14 | 32 | 50 => charge == 0 && valence <= 3,
        // nitrogen group
        7 | 15 | 33 | 51 => {
            (charge == 0 && (valence <= 2 || valence == 4)) || (charge == 1 && valence <= 3)
        }
        // oxygen group
        8 | 16 | 34 | 52 => {
            (charge == 0 && matches!(valence, 1 | 3 | 5))
                || (charge == 1 && (valence <= 2 || valence == 4))
        }
        _ => false,
    }
}

/// Assign single and double bond orders across every aromatic system.
///
/// Preconditions: each atom must have an element, a formal charge, and
/// an implicit hydrogen count. Bond orders are only written after a
/// complete matching is found, so precondition and matching failures
/// leave the molecule untouched.
pub fn kekulize(mol: &mut Mol<Atom, Bond>) -> Result<(), KekulizeError> {
    for idx in mol.atoms() {
        let atom = mol.atom(idx);
        if atom.atomic_num == 0 {
            return Err(KekulizeError::MissingElement(idx));
        }
        if atom.formal_charge.is_none() {
            return Err(KekulizeError::MissingCharge(idx));
        }
        if atom.hydrogen_count.is_none() {
            return Err(KekulizeError::MissingHydrogenCount(idx));
        }
    }

    let n = mol.atom_count();
    let mut needs: Vec<bool> = vec![false; n];
    for idx in mol.atoms() {
        needs[idx.index()] = mol.atom(idx).is_aromatic && needs_double_bond(mol, idx);
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            if needs[a.index()] && needs[b.index()] {
                adjacency[a.index()].push(b.index());
                adjacency[b.index()].push(a.index());
            }
        }
    }

    let mate = matching::maximum_matching(&adjacency, &needs);
    let unmatched: Vec<NodeIndex> = (0..n)
        .filter(|&v| needs[v] && mate[v].is_none())
        .map(NodeIndex::new)
        .collect();
    if !unmatched.is_empty() {
        return Err(KekulizeError::Unkekulizable(unmatched));
    }

    // unresolved aromatic orders default to single
    for edge in mol.bonds().collect::<Vec<_>>() {
        let bond = mol.bond(edge);
        if bond.is_aromatic && bond.order == BondOrder::Unset {
            mol.bond_mut(edge).order = BondOrder::Single;
        }
    }

    for v in 0..n {
        let Some(u) = mate[v] else { continue };
        if u < v {
            continue;
        }
        let (a, b) = (NodeIndex::new(v), NodeIndex::new(u));
        let Some(edge) = mol.bond_between(a, b) else {
            return Err(KekulizeError::InconsistentMatch(a, b));
        };
        if mol.bond(edge).order.numeric() > 1 {
            return Err(KekulizeError::InconsistentMatch(a, b));
        }
        mol.bond_mut(edge).order = BondOrder::Double;
    }
    Ok(())
}
