/// Default atom type for a molecular graph node.
///
/// `Atom` stores the intrinsic properties perception reads plus the two
/// flags this crate is allowed to write: ring membership (an input,
/// precomputed by an external ring-marking pass) and aromaticity (an
/// output). Formal charge and implicit hydrogen count are `Option` so
/// that "never assigned" is distinguishable from an explicit zero —
/// Kekulization treats a missing value as a fatal precondition violation
/// while perception reads it as zero.
///
/// # Examples
///
/// ```
/// use kekule::Atom;
///
/// let carbon = Atom::new(6).with_hydrogens(1).in_ring();
/// assert_eq!(carbon.atomic_num, 6);
/// assert_eq!(carbon.charge(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). `0` means undefined.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units. `None` = unset.
    pub formal_charge: Option<i8>,
    /// Implicit (suppressed) hydrogen count. `None` = unset.
    pub hydrogen_count: Option<u8>,
    /// Whether an external ring-marking pass placed this atom in a ring.
    pub in_ring: bool,
    /// Whether this atom is part of a perceived aromatic system. Output.
    pub is_aromatic: bool,
}

impl Atom {
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            formal_charge: Some(0),
            hydrogen_count: Some(0),
            in_ring: false,
            is_aromatic: false,
        }
    }

    pub fn with_charge(mut self, charge: i8) -> Self {
        self.formal_charge = Some(charge);
        self
    }

    pub fn with_hydrogens(mut self, count: u8) -> Self {
        self.hydrogen_count = Some(count);
        self
    }

    pub fn in_ring(mut self) -> Self {
        self.in_ring = true;
        self
    }

    /// Formal charge, reading an unset value as neutral.
    pub fn charge(&self) -> i8 {
        self.formal_charge.unwrap_or(0)
    }

    /// Implicit hydrogen count, reading an unset value as zero.
    pub fn hydrogens(&self) -> u8 {
        self.hydrogen_count.unwrap_or(0)
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.charge()
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogens()
    }
}

impl crate::traits::HasRingMembership for Atom {
    fn in_ring(&self) -> bool {
        self.in_ring
    }
}
