//! Atom aromatic-type classification.
//!
//! Maps an atom's local bonding pattern — element, formal charge, and a
//! packed profile of single / cyclic-double / acyclic-double / other bond
//! counts — to one of a fixed set of named aromatic types. The tags are
//! lookup keys for the table-driven electron donation presets in
//! [`tables`](crate::tables); nothing here decides aromaticity by itself.

use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::element::Element;
use crate::mol::Mol;
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount, HasRingMembership,
};

/// Per-atom bond profile: four small counts, compared against literal
/// profiles during dispatch. Implicit hydrogens count as single bonds.
/// Triple, quadruple and unset bonds all land in `other`, which forces
/// [`AromaticType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondProfile {
    pub single: u8,
    pub cyclic_double: u8,
    pub acyclic_double: u8,
    pub other: u8,
}

impl BondProfile {
    pub const fn counts(single: u8, cyclic_double: u8, acyclic_double: u8, other: u8) -> Self {
        Self {
            single,
            cyclic_double,
            acyclic_double,
            other,
        }
    }

    fn of<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> Self
    where
        A: HasHydrogenCount,
        B: HasBondOrder + HasRingMembership,
    {
        let mut profile = BondProfile::counts(mol.atom(idx).hydrogen_count(), 0, 0, 0);
        for edge in mol.bonds_of(idx) {
            let bond = mol.bond(edge);
            match bond.bond_order() {
                BondOrder::Single => profile.single += 1,
                BondOrder::Double if bond.in_ring() => profile.cyclic_double += 1,
                BondOrder::Double => profile.acyclic_double += 1,
                BondOrder::Triple | BondOrder::Quadruple | BondOrder::Unset => profile.other += 1,
            }
        }
        profile
    }
}

/// Named element/charge/bonding-pattern tags.
///
/// The naming scheme is element, charge state, then the dominant feature
/// of the bond profile. `3Single` style suffixes count implicit hydrogens
/// as singles, so a pyrrole nitrogen (two ring singles plus one H) is
/// `NNeutral3Single`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AromaticType {
    Unknown,
    // boron
    BNeutral2Single,
    BNeutral3Single,
    BNeutralCyclicDouble,
    BAnion3Single,
    // carbon
    CNeutral2Single,
    CNeutral3Single,
    CNeutralCyclicDouble,
    CNeutralExoDoubleToCarbon,
    CNeutralExoDoubleToHetero,
    CAnion3Single,
    CAnionCyclicDouble,
    CCation3Single,
    CCationCyclicDouble,
    // nitrogen
    NNeutral2Single,
    NNeutral3Single,
    NNeutralCyclicDouble,
    NNeutralExoDouble,
    NNeutralExoDoubleOxide,
    NCation3Single,
    NCationOxide,
    NCationCyclicDouble,
    NAnion2Single,
    // oxygen
    ONeutral2Single,
    OCation2Single,
    OCationCyclicDouble,
    // phosphorus
    PNeutral3Single,
    PNeutralCyclicDouble,
    PNeutralExoDoubleOxide,
    PCation3Single,
    PCationOxide,
    // sulfur
    SNeutral2Single,
    SNeutralCyclicDouble,
    SNeutralExoDoubleOxide,
    SCation2Single,
    SCation3Single,
    SCationOxide,
    // selenium
    SeNeutral2Single,
    SeNeutralCyclicDouble,
    SeNeutralExoDoubleOxide,
    SeCation2Single,
    SeCationCyclicDouble,
    // tellurium
    TeNeutral2Single,
    TeCation2Single,
    // arsenic
    AsNeutral3Single,
    AsNeutralCyclicDouble,
    AsCation3Single,
}

/// True when `idx` has an exocyclic double bond to a non-carbon atom.
pub fn has_exocyclic_double_to_hetero<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> bool
where
    A: HasAtomicNum,
    B: HasBondOrder + HasRingMembership,
{
    mol.bonds_of(idx).any(|edge| {
        let bond = mol.bond(edge);
        bond.bond_order() == BondOrder::Double
            && !bond.in_ring()
            && mol
                .other_endpoint(edge, idx)
                .map(|nb| mol.atom(nb).atomic_num() != 6)
                .unwrap_or(false)
    })
}

/// True when `idx` carries an oxide: either an exocyclic `*=O` double
/// bond, or the charge-separated `[*+]-[O-]` form.
pub fn has_oxide<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> bool
where
    A: HasAtomicNum + HasFormalCharge,
    B: HasBondOrder + HasRingMembership,
{
    let charge = mol.atom(idx).formal_charge();
    mol.bonds_of(idx).any(|edge| {
        let bond = mol.bond(edge);
        if bond.in_ring() {
            return false;
        }
        let Some(nb) = mol.other_endpoint(edge, idx) else {
            return false;
        };
        if mol.atom(nb).atomic_num() != 8 {
            return false;
        }
        match bond.bond_order() {
            BondOrder::Double => true,
            BondOrder::Single => charge > 0 && mol.atom(nb).formal_charge() == -1,
            _ => false,
        }
    })
}

/// Classify an atom's aromatic type from its local bonding pattern.
///
/// Fast rejects: the atom must be in a ring, carry at most one implicit
/// hydrogen, and have degree at most three — phosphorus alone may reach
/// degree four (legacy valence model: ring phosphine oxides).
pub fn aromatic_type<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> AromaticType
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasRingMembership,
    B: HasBondOrder + HasRingMembership,
{
    use AromaticType::*;

    let atom = mol.atom(idx);
    if !atom.in_ring() || atom.hydrogen_count() > 1 {
        return Unknown;
    }
    let Some(elem) = Element::from_atomic_num(atom.atomic_num()) else {
        return Unknown;
    };
    let degree = mol.degree(idx);
    let max_degree = if elem == Element::P { 4 } else { 3 };
    if degree > max_degree {
        return Unknown;
    }

    let profile = BondProfile::of(mol, idx);
    if profile.other > 0 {
        return Unknown;
    }
    let charge = atom.formal_charge();
    let pattern = (profile.single, profile.cyclic_double, profile.acyclic_double);

    match (elem, charge) {
        (Element::B, 0) => match pattern {
            (2, 0, 0) => BNeutral2Single,
            (3, 0, 0) => BNeutral3Single,
            (_, 1, 0) => BNeutralCyclicDouble,
            _ => Unknown,
        },
        (Element::B, -1) => match pattern {
            (3, 0, 0) => BAnion3Single,
            _ => Unknown,
        },
        (Element::C, 0) => match pattern {
            (2, 0, 0) => CNeutral2Single,
            (3, 0, 0) => CNeutral3Single,
            (_, 1, 0) => CNeutralCyclicDouble,
            (_, 0, 1) => {
                if has_exocyclic_double_to_hetero(mol, idx) {
                    CNeutralExoDoubleToHetero
                } else {
                    CNeutralExoDoubleToCarbon
                }
            }
            _ => Unknown,
        },
        (Element::C, -1) => match pattern {
            (3, 0, 0) => CAnion3Single,
            (_, 1, 0) => CAnionCyclicDouble,
            _ => Unknown,
        },
        (Element::C, 1) => match pattern {
            (3, 0, 0) => CCation3Single,
            (_, 1, 0) => CCationCyclicDouble,
            _ => Unknown,
        },
        (Element::N, 0) => match pattern {
            (2, 0, 0) => NNeutral2Single,
            (3, 0, 0) => NNeutral3Single,
            (_, 1, 0) => NNeutralCyclicDouble,
            (_, 0, 1) => {
                if has_oxide(mol, idx) {
                    NNeutralExoDoubleOxide
                } else {
                    NNeutralExoDouble
                }
            }
            _ => Unknown,
        },
        (Element::N, 1) => match pattern {
            (3, 0, 0) => {
                if has_oxide(mol, idx) {
                    NCationOxide
                } else {
                    NCation3Single
                }
            }
            (_, 1, 0) => NCationCyclicDouble,
            _ => Unknown,
        },
        (Element::N, -1) => match pattern {
            (2, 0, 0) => NAnion2Single,
            _ => Unknown,
        },
        (Element::O, 0) => match pattern {
            (2, 0, 0) => ONeutral2Single,
            _ => Unknown,
        },
        (Element::O, 1) => match pattern {
            (2, 0, 0) => OCation2Single,
            (_, 1, 0) => OCationCyclicDouble,
            _ => Unknown,
        },
        (Element::P, 0) => match pattern {
            (3, 0, 0) => PNeutral3Single,
            (_, 1, 0) => PNeutralCyclicDouble,
            (3, 0, 1) if has_oxide(mol, idx) => PNeutralExoDoubleOxide,
            _ => Unknown,
        },
        (Element::P, 1) => match pattern {
            (3, 0, 0) => {
                if has_oxide(mol, idx) {
                    PCationOxide
                } else {
                    PCation3Single
                }
            }
            _ => Unknown,
        },
        (Element::S, 0) => match pattern {
            (2, 0, 0) => SNeutral2Single,
            (_, 1, 0) => SNeutralCyclicDouble,
            (2, 0, 1) if has_oxide(mol, idx) => SNeutralExoDoubleOxide,
            _ => Unknown,
        },
        (Element::S, 1) => match pattern {
            (2, 0, 0) => SCation2Single,
            (3, 0, 0) => {
                if has_oxide(mol, idx) {
                    SCationOxide
                } else {
                    SCation3Single
                }
            }
            _ => Unknown,
        },
        (Element::Se, 0) => match pattern {
            (2, 0, 0) => SeNeutral2Single,
            (_, 1, 0) => SeNeutralCyclicDouble,
            (2, 0, 1) if has_oxide(mol, idx) => SeNeutralExoDoubleOxide,
            _ => Unknown,
        },
        (Element::Se, 1) => match pattern {
            (2, 0, 0) => SeCation2Single,
            (_, 1, 0) => SeCationCyclicDouble,
            _ => Unknown,
        },
        (Element::Te, 0) => match pattern {
            (2, 0, 0) => TeNeutral2Single,
            _ => Unknown,
        },
        (Element::Te, 1) => match pattern {
            (2, 0, 0) => TeCation2Single,
            _ => Unknown,
        },
        (Element::As, 0) => match pattern {
            (3, 0, 0) => AsNeutral3Single,
            (_, 1, 0) => AsNeutralCyclicDouble,
            _ => Unknown,
        },
        (Element::As, 1) => match pattern {
            (3, 0, 0) => AsCation3Single,
            _ => Unknown,
        },
        _ => Unknown,
    }
}
