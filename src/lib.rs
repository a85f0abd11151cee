//! Aromatic ring perception and Kekulization over molecular graphs.
//!
//! The input is a molecule in Kekulé form: explicit bond orders, formal
//! charges, implicit hydrogen counts, and ring membership already marked
//! by an external ring perception pass. [`Aromaticity`] combines a
//! pluggable [`ElectronDonation`] model with a cycle strategy to flag
//! aromatic atoms and bonds; [`kekulize`] goes the other way, assigning
//! alternating orders to a flagged aromatic system via maximum matching.
//!
//! ```
//! use kekule::{kekulize, Aromaticity, Atom, Bond, BondOrder, CycleStrategy, Mol, PiBondModel};
//!
//! // benzene, Kekulé form
//! let mut mol = Mol::new();
//! let c: Vec<_> = (0..6)
//!     .map(|_| mol.add_atom(Atom::new(6).with_hydrogens(1).in_ring()))
//!     .collect();
//! for i in 0..6 {
//!     let order = if i % 2 == 0 { BondOrder::Double } else { BondOrder::Single };
//!     mol.add_bond(c[i], c[(i + 1) % 6], Bond::new(order).in_ring());
//! }
//!
//! let engine = Aromaticity::new(PiBondModel, CycleStrategy::Exhaustive { max_ring_size: 12 });
//! assert!(engine.perceive(&mut mol));
//! assert!(mol.atom(c[0]).is_aromatic);
//!
//! // and back again
//! kekulize(&mut mol).unwrap();
//! ```

pub mod aromaticity;
pub mod atom;
pub mod bond;
pub mod donation;
pub mod element;
pub mod kekulize;
pub mod matching;
pub mod mol;
pub mod tables;
pub mod traits;
pub mod typer;

pub use aromaticity::{
    clear_aromatic_flags, huckel_sum_valid, is_aromatic, Aromaticity, CycleStrategy, MAX_STATES,
};
pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use donation::{
    AromaticTypeModel, AssignedTypeModel, DaylightModel, ElectronDonation, PiBondModel, EXCLUDED,
};
pub use element::{outer_shell_electrons, Element};
pub use kekulize::{kekulize, KekulizeError};
pub use mol::Mol;
pub use tables::TablePreset;
pub use typer::{aromatic_type, AromaticType, BondProfile};
