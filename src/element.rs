/// Number of outer-shell (valence) electrons for a main-group element.
///
/// Transition metals are never aromatic candidates here, so the table only
/// needs to be accurate for the main-group block; anything else returns 0.
pub fn outer_shell_electrons(atomic_num: u8) -> u8 {
    match atomic_num {
        1 => 1,                      // H
        2 => 2,                      // He
        3..=10 => atomic_num - 2,    // Li..Ne
        11..=18 => atomic_num - 10,  // Na..Ar
        31..=36 => atomic_num - 28,  // Ga..Kr
        49..=54 => atomic_num - 46,  // In..Xe
        81..=86 => atomic_num - 78,  // Tl..Rn
        _ => 0,
    }
}

/// Elements this crate dispatches on.
///
/// Perception and Kekulization only ever branch on the elements below;
/// every other atomic number is treated uniformly as "not a candidate".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Element {
    H = 1,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    Si = 14,
    P = 15,
    S = 16,
    Ge = 32,
    As = 33,
    Se = 34,
    Sn = 50,
    Sb = 51,
    Te = 52,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        match n {
            1 => Some(Element::H),
            5 => Some(Element::B),
            6 => Some(Element::C),
            7 => Some(Element::N),
            8 => Some(Element::O),
            14 => Some(Element::Si),
            15 => Some(Element::P),
            16 => Some(Element::S),
            32 => Some(Element::Ge),
            33 => Some(Element::As),
            34 => Some(Element::Se),
            50 => Some(Element::Sn),
            51 => Some(Element::Sb),
            52 => Some(Element::Te),
            _ => None,
        }
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    /// Normal valence for the element at the given formal charge, or
    /// `None` when no normal valence is defined for that combination.
    /// Atoms exceeding their normal valence are hypervalent and are
    /// excluded from Daylight-style donation.
    pub fn normal_valence(self, charge: i8) -> Option<u8> {
        match (self, charge) {
            (Element::B, 0) => Some(3),
            (Element::B, -1) => Some(4),
            (Element::C, 0) => Some(4),
            (Element::C, -1) | (Element::C, 1) => Some(3),
            (Element::N, 0) => Some(3),
            (Element::N, 1) => Some(4),
            (Element::N, -1) => Some(2),
            (Element::O, 0) => Some(2),
            (Element::O, 1) => Some(3),
            (Element::O, -1) => Some(1),
            (Element::P, 0) => Some(3),
            (Element::P, 1) => Some(4),
            (Element::S, 0) => Some(2),
            (Element::S, 1) => Some(3),
            (Element::S, -1) => Some(1),
            (Element::As, 0) => Some(3),
            (Element::As, 1) => Some(4),
            (Element::Se, 0) => Some(2),
            (Element::Se, 1) => Some(3),
            _ => None,
        }
    }
}
