//! Electron donation models.
//!
//! A model turns a molecule into one pi-electron contribution per atom.
//! The engine only ever sees that array: a non-negative entry is the
//! number of electrons the atom donates to a ring system it sits on, and
//! [`EXCLUDED`] means the atom can never be part of an aromatic ring.

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::element::{outer_shell_electrons, Element};
use crate::mol::Mol;
use crate::tables::TablePreset;
use crate::typer::{aromatic_type, AromaticType};

/// Contribution value marking an atom as never aromatic.
pub const EXCLUDED: i8 = -1;

/// One pi-electron contribution per atom, indexed by node index.
pub trait ElectronDonation {
    fn contribution(&self, mol: &Mol<Atom, Bond>) -> Vec<i8>;
}

/// Pure pi-bond model: an atom donates one electron when it sits on
/// exactly one cyclic double bond, and is excluded otherwise. Lone
/// pairs never count, so furan-style heteroatoms do not donate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiBondModel;

impl ElectronDonation for PiBondModel {
    fn contribution(&self, mol: &Mol<Atom, Bond>) -> Vec<i8> {
        mol.atoms()
            .map(|idx| {
                let cyclic_doubles = mol
                    .bonds_of(idx)
                    .filter(|&e| {
                        let bond = mol.bond(e);
                        bond.in_ring && bond.order == BondOrder::Double
                    })
                    .count();
                if cyclic_doubles == 1 {
                    1
                } else {
                    EXCLUDED
                }
            })
            .collect()
    }
}

/// Table-driven model: classify each atom's aromatic type, then look the
/// contribution up in the configured preset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AromaticTypeModel {
    preset: TablePreset,
}

impl AromaticTypeModel {
    pub fn new(preset: TablePreset) -> Self {
        Self { preset }
    }
}

impl ElectronDonation for AromaticTypeModel {
    fn contribution(&self, mol: &Mol<Atom, Bond>) -> Vec<i8> {
        mol.atoms()
            .map(|idx| match aromatic_type(mol, idx) {
                AromaticType::Unknown => EXCLUDED,
                kind => self
                    .preset
                    .contribution(kind)
                    .map(|c| c as i8)
                    .unwrap_or(EXCLUDED),
            })
            .collect()
    }
}

/// Rule-based model following the Daylight aromaticity conventions:
/// hypervalence excludes, exactly one double bond donates one electron
/// (with special-cased exocyclic partners), and otherwise a lone pair
/// donates two.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaylightModel;

impl DaylightModel {
    fn contribution_of(mol: &Mol<Atom, Bond>, idx: petgraph::graph::NodeIndex) -> i8 {
        let atom = mol.atom(idx);
        if !atom.in_ring {
            return EXCLUDED;
        }
        let Some(elem) = Element::from_atomic_num(atom.atomic_num) else {
            return EXCLUDED;
        };
        if !matches!(
            elem,
            Element::C
                | Element::N
                | Element::O
                | Element::P
                | Element::S
                | Element::As
                | Element::Se
        ) {
            return EXCLUDED;
        }
        let charge = atom.charge();
        if !(-1..=1).contains(&charge) {
            return EXCLUDED;
        }
        if mol.degree(idx) > 3 {
            return EXCLUDED;
        }

        let mut cyclic_double = 0usize;
        let mut exo_partner = None;
        let mut order_sum = atom.hydrogens() as i32;
        for edge in mol.bonds_of(idx) {
            let bond = mol.bond(edge);
            order_sum += bond.order.numeric() as i32;
            if bond.order == BondOrder::Double {
                if bond.in_ring {
                    cyclic_double += 1;
                } else {
                    exo_partner = match exo_partner {
                        None => mol.other_endpoint(edge, idx),
                        // two exocyclic doubles never donate
                        Some(_) => return EXCLUDED,
                    };
                }
            }
        }
        if cyclic_double > 1 {
            return EXCLUDED;
        }

        if let Some(partner) = exo_partner {
            if cyclic_double > 0 {
                return EXCLUDED;
            }
            // intentionally hypervalent cases (S=O, N-oxide) come first
            let partner_num = mol.atom(partner).atomic_num;
            return match elem {
                Element::C => {
                    if partner_num == 6 {
                        1
                    } else {
                        0
                    }
                }
                Element::N | Element::P => {
                    if partner_num == 8 {
                        1
                    } else {
                        EXCLUDED
                    }
                }
                Element::S | Element::Se => {
                    if partner_num == 8 {
                        2
                    } else {
                        EXCLUDED
                    }
                }
                _ => EXCLUDED,
            };
        }

        let Some(normal) = elem.normal_valence(charge) else {
            return EXCLUDED;
        };
        if order_sum > normal as i32 {
            return EXCLUDED;
        }

        if cyclic_double == 1 {
            return if elem == Element::As { EXCLUDED } else { 1 };
        }

        let free = outer_shell_electrons(atom.atomic_num) as i32 - charge as i32 - order_sum;
        if charge <= 0 && free >= 2 {
            return 2;
        }
        if elem == Element::C && charge == 1 {
            // carbocation: empty orbital, zero electrons
            return 0;
        }
        EXCLUDED
    }
}

impl ElectronDonation for DaylightModel {
    fn contribution(&self, mol: &Mol<Atom, Bond>) -> Vec<i8> {
        mol.atoms()
            .map(|idx| Self::contribution_of(mol, idx))
            .collect()
    }
}

/// Contribution per externally assigned atom type name.
///
/// The names follow the planar/sp2 type vocabulary of common perception
/// toolkits; anything not in the dictionary is excluded.
fn named_type_contribution(name: &str) -> Option<i8> {
    match name {
        "N.planar3" | "N.minus.planar3" | "N.amide" => Some(2),
        "S.2" | "S.planar3" => Some(2),
        "C.minus.planar" => Some(2),
        "O.planar3" => Some(2),
        "N.sp2.3" | "C.sp2" | "N.sp2" => Some(1),
        _ => None,
    }
}

/// Model driven by atom type names assigned by an external typing pass,
/// supplied at construction in node-index order.
///
/// With `exocyclic_contribution` disabled (the default for strict
/// perception), both endpoints of any exocyclic double or triple bond
/// are excluded, except the acyclic `N.sp2.3`=`O.sp2` pair which keeps
/// its ring nitrogen.
#[derive(Debug, Clone)]
pub struct AssignedTypeModel {
    types: Vec<String>,
    exocyclic_contribution: bool,
}

impl AssignedTypeModel {
    pub fn new(types: Vec<String>) -> Self {
        Self {
            types,
            exocyclic_contribution: true,
        }
    }

    pub fn without_exocyclic(mut self) -> Self {
        self.exocyclic_contribution = false;
        self
    }
}

impl ElectronDonation for AssignedTypeModel {
    fn contribution(&self, mol: &Mol<Atom, Bond>) -> Vec<i8> {
        let mut out: Vec<i8> = mol
            .atoms()
            .map(|idx| {
                let atom = mol.atom(idx);
                if !atom.in_ring {
                    return EXCLUDED;
                }
                self.types
                    .get(idx.index())
                    .and_then(|name| named_type_contribution(name))
                    .unwrap_or(EXCLUDED)
            })
            .collect();
        if !self.exocyclic_contribution {
            for edge in mol.bonds() {
                let bond = mol.bond(edge);
                if bond.in_ring
                    || !matches!(bond.order, BondOrder::Double | BondOrder::Triple)
                {
                    continue;
                }
                let Some((a, b)) = mol.bond_endpoints(edge) else {
                    continue;
                };
                let name_a = self.types.get(a.index()).map(String::as_str);
                let name_b = self.types.get(b.index()).map(String::as_str);
                // nitroso-style N=O keeps the ring nitrogen in play
                if matches!(
                    (name_a, name_b),
                    (Some("N.sp2.3"), Some("O.sp2")) | (Some("O.sp2"), Some("N.sp2.3"))
                ) {
                    continue;
                }
                out[a.index()] = EXCLUDED;
                out[b.index()] = EXCLUDED;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mol::Mol;
    use petgraph::graph::NodeIndex;

    fn ring_atom(atomic_num: u8, h: u8) -> Atom {
        Atom::new(atomic_num).with_hydrogens(h).in_ring()
    }

    fn ring_bond(order: BondOrder) -> Bond {
        Bond::new(order).in_ring()
    }

    fn benzene() -> Mol<Atom, Bond> {
        let mut mol = Mol::new();
        let nodes: Vec<NodeIndex> = (0..6).map(|_| mol.add_atom(ring_atom(6, 1))).collect();
        for i in 0..6 {
            let order = if i % 2 == 0 {
                BondOrder::Double
            } else {
                BondOrder::Single
            };
            mol.add_bond(nodes[i], nodes[(i + 1) % 6], ring_bond(order));
        }
        mol
    }

    fn five_ring(hetero: Atom) -> Mol<Atom, Bond> {
        let mut mol = Mol::new();
        let x = mol.add_atom(hetero);
        let c1 = mol.add_atom(ring_atom(6, 1));
        let c2 = mol.add_atom(ring_atom(6, 1));
        let c3 = mol.add_atom(ring_atom(6, 1));
        let c4 = mol.add_atom(ring_atom(6, 1));
        mol.add_bond(x, c1, ring_bond(BondOrder::Single));
        mol.add_bond(c1, c2, ring_bond(BondOrder::Double));
        mol.add_bond(c2, c3, ring_bond(BondOrder::Single));
        mol.add_bond(c3, c4, ring_bond(BondOrder::Double));
        mol.add_bond(c4, x, ring_bond(BondOrder::Single));
        mol
    }

    #[test]
    fn pi_bond_benzene() {
        let mol = benzene();
        assert_eq!(PiBondModel.contribution(&mol), vec![1; 6]);
    }

    #[test]
    fn pi_bond_excludes_lone_pairs() {
        let mol = five_ring(ring_atom(8, 0));
        let contrib = PiBondModel.contribution(&mol);
        assert_eq!(contrib[0], EXCLUDED); // furan oxygen
        assert_eq!(&contrib[1..], &[1, 1, 1, 1]);
    }

    #[test]
    fn daylight_furan() {
        let mol = five_ring(ring_atom(8, 0));
        assert_eq!(DaylightModel.contribution(&mol), vec![2, 1, 1, 1, 1]);
    }

    #[test]
    fn daylight_pyrrole_and_thiophene() {
        let pyrrole = five_ring(ring_atom(7, 1));
        assert_eq!(DaylightModel.contribution(&pyrrole)[0], 2);
        let thiophene = five_ring(ring_atom(16, 0));
        assert_eq!(DaylightModel.contribution(&thiophene)[0], 2);
    }

    #[test]
    fn daylight_hypervalent_nitrogen_excluded() {
        // N with a cyclic double and an H on top of two ring bonds
        // exceeds its normal valence
        let mut mol = five_ring(ring_atom(7, 1));
        let n = NodeIndex::new(0);
        let edge = mol.bond_between(n, NodeIndex::new(1)).unwrap();
        mol.bond_mut(edge).order = BondOrder::Double;
        assert_eq!(DaylightModel.contribution(&mol)[0], EXCLUDED);
    }

    #[test]
    fn daylight_exocyclic_ketone() {
        let mut mol = five_ring(ring_atom(6, 0));
        let o = mol.add_atom(Atom::new(8));
        mol.add_bond(NodeIndex::new(0), o, Bond::new(BondOrder::Double));
        let contrib = DaylightModel.contribution(&mol);
        assert_eq!(contrib[0], 0); // C=O carbon donates nothing but stays
        assert_eq!(contrib[5], EXCLUDED); // exocyclic O is not in a ring
    }

    #[test]
    fn daylight_fulvene_exocyclic_carbon() {
        let mut mol = five_ring(ring_atom(6, 0));
        let c = mol.add_atom(Atom::new(6).with_hydrogens(2));
        mol.add_bond(NodeIndex::new(0), c, Bond::new(BondOrder::Double));
        assert_eq!(DaylightModel.contribution(&mol)[0], 1);
    }

    #[test]
    fn daylight_thiophene_oxide_quirk() {
        let mut mol = five_ring(ring_atom(16, 0));
        let o = mol.add_atom(Atom::new(8));
        mol.add_bond(NodeIndex::new(0), o, Bond::new(BondOrder::Double));
        assert_eq!(DaylightModel.contribution(&mol)[0], 2);
    }

    #[test]
    fn daylight_carbocation() {
        // tropylium-like: C+ with all-single bonds and no free pair
        let mut mol = Mol::new();
        let nodes: Vec<NodeIndex> = (0..7)
            .map(|i| {
                let a = if i == 0 {
                    ring_atom(6, 1).with_charge(1)
                } else {
                    ring_atom(6, 1)
                };
                mol.add_atom(a)
            })
            .collect();
        for i in 0..7 {
            let order = if i < 6 && i % 2 == 1 {
                BondOrder::Double
            } else {
                BondOrder::Single
            };
            mol.add_bond(nodes[i], nodes[(i + 1) % 7], ring_bond(order));
        }
        assert_eq!(DaylightModel.contribution(&mol)[0], 0);
    }

    #[test]
    fn daylight_arsenic_double_excluded() {
        let mut mol = five_ring(ring_atom(33, 0));
        let edge = mol
            .bond_between(NodeIndex::new(0), NodeIndex::new(1))
            .unwrap();
        mol.bond_mut(edge).order = BondOrder::Double;
        mol.atom_mut(NodeIndex::new(0)).hydrogen_count = Some(0);
        assert_eq!(DaylightModel.contribution(&mol)[0], EXCLUDED);
    }

    #[test]
    fn type_model_pyridine_and_pyrrole() {
        let pyrrole = five_ring(ring_atom(7, 1));
        let contrib = AromaticTypeModel::new(TablePreset::Daylight).contribution(&pyrrole);
        assert_eq!(contrib, vec![2, 1, 1, 1, 1]);
    }

    #[test]
    fn type_model_minimal_excludes_anions() {
        let mut mol = five_ring(ring_atom(6, 1).with_charge(-1));
        mol.atom_mut(NodeIndex::new(0)).hydrogen_count = Some(1);
        let minimal = AromaticTypeModel::new(TablePreset::Minimal).contribution(&mol);
        assert_eq!(minimal[0], EXCLUDED);
        let daylight = AromaticTypeModel::new(TablePreset::Daylight).contribution(&mol);
        assert_eq!(daylight[0], 2);
    }

    #[test]
    fn assigned_types_lookup() {
        let mol = five_ring(ring_atom(7, 1));
        let model = AssignedTypeModel::new(vec![
            "N.planar3".into(),
            "C.sp2".into(),
            "C.sp2".into(),
            "C.sp2".into(),
            "C.sp2".into(),
        ]);
        assert_eq!(model.contribution(&mol), vec![2, 1, 1, 1, 1]);
    }

    #[test]
    fn assigned_types_exocyclic_switch() {
        let mut mol = five_ring(ring_atom(6, 0));
        let o = mol.add_atom(Atom::new(8));
        mol.add_bond(NodeIndex::new(0), o, Bond::new(BondOrder::Double));
        let types = vec![
            "C.sp2".into(),
            "C.sp2".into(),
            "C.sp2".into(),
            "C.sp2".into(),
            "C.sp2".into(),
            "O.sp2".into(),
        ];
        let permissive = AssignedTypeModel::new(types.clone());
        assert_eq!(permissive.contribution(&mol)[0], 1);
        let strict = AssignedTypeModel::new(types).without_exocyclic();
        assert_eq!(strict.contribution(&mol)[0], EXCLUDED);
    }

    #[test]
    fn assigned_types_nitroso_survives_exocyclic_switch() {
        let mut mol = five_ring(ring_atom(7, 0));
        let o = mol.add_atom(Atom::new(8));
        mol.add_bond(NodeIndex::new(0), o, Bond::new(BondOrder::Double));
        let types: Vec<String> = vec![
            "N.sp2.3".into(),
            "C.sp2".into(),
            "C.sp2".into(),
            "C.sp2".into(),
            "C.sp2".into(),
            "O.sp2".into(),
        ];
        let strict = AssignedTypeModel::new(types).without_exocyclic();
        assert_eq!(strict.contribution(&mol)[0], 1);
    }
}
