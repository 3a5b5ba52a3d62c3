//! The four-letter DNA alphabet accepted by the calculator.
//!
//! [`Base`] is the typed form of a symbol. Sequence bytes stay uppercase ASCII
//! so that downstream `&[u8]` APIs can consume them directly; [`Base`]
//! converts in both directions.

use std::fmt;

/// Valid uppercase bytes, in canonical `A, C, G, T` order.
pub const VALID_BYTES: &[u8] = b"ACGT";

/// One nucleotide of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// All bases in canonical order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Map an uppercase byte to a base. Lowercase and any other byte give `None`.
    pub fn from_byte(b: u8) -> Option<Base> {
        match b {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            _ => None,
        }
    }

    /// Parse a base letter, case-insensitively.
    pub fn from_char(c: char) -> Option<Base> {
        if c.is_ascii() {
            Base::from_byte((c as u8).to_ascii_uppercase())
        } else {
            None
        }
    }

    /// Uppercase ASCII byte for this base.
    pub fn as_byte(self) -> u8 {
        VALID_BYTES[self.index()]
    }

    /// Dense index 0..4, used for fixed-size per-base tables.
    pub fn index(self) -> usize {
        match self {
            Base::A => 0,
            Base::C => 1,
            Base::G => 2,
            Base::T => 3,
        }
    }

    /// Nucleobase name.
    pub fn full_name(self) -> &'static str {
        match self {
            Base::A => "Adenine",
            Base::C => "Cytosine",
            Base::G => "Guanine",
            Base::T => "Thymine",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

/// Check whether a byte (assumed already uppercased) is in the alphabet.
pub fn is_valid(b: u8) -> bool {
    VALID_BYTES.contains(&b)
}
