//! Per-base composition counts.

use crate::alphabet::Base;

/// Count of each base in a sequence. All four bases are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Composition {
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a: usize,
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    pub c: usize,
    #[cfg_attr(feature = "serde", serde(rename = "G"))]
    pub g: usize,
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    pub t: usize,
}

impl Composition {
    /// Count for one base.
    pub fn get(&self, base: Base) -> usize {
        match base {
            Base::A => self.a,
            Base::C => self.c,
            Base::G => self.g,
            Base::T => self.t,
        }
    }

    fn slot(&mut self, base: Base) -> &mut usize {
        match base {
            Base::A => &mut self.a,
            Base::C => &mut self.c,
            Base::G => &mut self.g,
            Base::T => &mut self.t,
        }
    }

    /// `(base, count)` pairs in `A, C, G, T` order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Base, usize)> + '_ {
        Base::ALL.into_iter().map(move |b| (b, self.get(b)))
    }

    /// Number of counted bases.
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    /// Fraction of counted bases that are `base`, in [0.0, 1.0].
    ///
    /// Returns 0.0 when nothing was counted.
    pub fn fraction(&self, base: Base) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(base) as f64 / total as f64
    }
}

/// Tally each base in `seq` in a single pass.
///
/// Bytes that are not uppercase `A`, `C`, `G` or `T` are skipped rather than
/// rejected, so this accepts any byte slice.
pub fn composition(seq: &[u8]) -> Composition {
    let mut counts = Composition::default();
    for base in seq.iter().filter_map(|&b| Base::from_byte(b)) {
        *counts.slot(base) += 1;
    }
    counts
}
