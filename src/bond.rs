#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Quadruple,
    /// Order not yet assigned — the usual input state of an aromatic bond
    /// before Kekulization.
    #[default]
    Unset,
}

impl BondOrder {
    /// Numeric order used in valence sums. `Unset` counts as 1: an
    /// unresolved aromatic bond occupies at least a single bond's worth
    /// of valence.
    pub fn numeric(self) -> u8 {
        match self {
            BondOrder::Single | BondOrder::Unset => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Quadruple => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bond {
    pub order: BondOrder,
    /// Whether an external ring-marking pass placed this bond in a ring.
    pub in_ring: bool,
    /// Whether this bond is part of a perceived aromatic system. Output.
    pub is_aromatic: bool,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self {
            order,
            in_ring: false,
            is_aromatic: false,
        }
    }

    pub fn in_ring(mut self) -> Self {
        self.in_ring = true;
        self
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasRingMembership for Bond {
    fn in_ring(&self) -> bool {
        self.in_ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_orders() {
        assert_eq!(BondOrder::Single.numeric(), 1);
        assert_eq!(BondOrder::Double.numeric(), 2);
        assert_eq!(BondOrder::Triple.numeric(), 3);
        assert_eq!(BondOrder::Quadruple.numeric(), 4);
        assert_eq!(BondOrder::Unset.numeric(), 1);
    }
}
