//! Building-block weights and full-sequence molecular weight.
//!
//! An oligo of `n` residues is formed by `n - 1` condensation reactions, each
//! releasing one water molecule:
//!
//! ```text
//! MW = Σ weight(seq[i]) − (n − 1) × 18.015
//! ```
//!
//! [`molecular_weight`] applies the formula as-is and never inspects the
//! table. Whether a table is fit for use is decided separately by
//! [`BuildingBlockTable::check`].

use oligo_core::{OligoError, Result};

use crate::alphabet::Base;

/// Molecular weight of water (g/mol), lost once per bond formed.
pub const WATER_LOSS: f64 = 18.015;

/// Per-base building-block weights in g/mol.
///
/// Entries may be absent. [`weight`](Self::weight) looks absent entries up as
/// 0.0; [`check`](Self::check) reports them as invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct BuildingBlockTable {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "A", alias = "a", default, skip_serializing_if = "Option::is_none")
    )]
    a: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "C", alias = "c", default, skip_serializing_if = "Option::is_none")
    )]
    c: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "G", alias = "g", default, skip_serializing_if = "Option::is_none")
    )]
    g: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "T", alias = "t", default, skip_serializing_if = "Option::is_none")
    )]
    t: Option<f64>,
}

impl Default for BuildingBlockTable {
    fn default() -> Self {
        Self::new(331.2, 307.2, 347.2, 322.2)
    }
}

impl BuildingBlockTable {
    /// Table with a weight for every base.
    pub fn new(a: f64, c: f64, g: f64, t: f64) -> Self {
        Self {
            a: Some(a),
            c: Some(c),
            g: Some(g),
            t: Some(t),
        }
    }

    /// Table with no entries.
    pub fn empty() -> Self {
        Self {
            a: None,
            c: None,
            g: None,
            t: None,
        }
    }

    fn slot(&mut self, base: Base) -> &mut Option<f64> {
        match base {
            Base::A => &mut self.a,
            Base::C => &mut self.c,
            Base::G => &mut self.g,
            Base::T => &mut self.t,
        }
    }

    /// Return a copy with `base` set to `mw`.
    pub fn with(mut self, base: Base, mw: f64) -> Self {
        self.set(base, mw);
        self
    }

    /// Set the weight for `base`.
    pub fn set(&mut self, base: Base, mw: f64) {
        *self.slot(base) = Some(mw);
    }

    /// Remove the entry for `base`, returning the previous value.
    pub fn remove(&mut self, base: Base) -> Option<f64> {
        self.slot(base).take()
    }

    /// The configured entry, if any.
    pub fn get(&self, base: Base) -> Option<f64> {
        match base {
            Base::A => self.a,
            Base::C => self.c,
            Base::G => self.g,
            Base::T => self.t,
        }
    }

    /// Weight used in calculations: the entry, or 0.0 when absent.
    pub fn weight(&self, base: Base) -> f64 {
        self.get(base).unwrap_or(0.0)
    }

    /// Bases whose entry is absent, non-positive, NaN or infinite, in
    /// canonical order.
    pub fn invalid_bases(&self) -> Vec<Base> {
        Base::ALL
            .into_iter()
            .filter(|&b| !matches!(self.get(b), Some(mw) if mw.is_finite() && mw > 0.0))
            .collect()
    }

    /// Verify every entry is a finite positive number.
    ///
    /// The error message lists all offending bases, not just the first.
    pub fn check(&self) -> Result<()> {
        let invalid = self.invalid_bases();
        if invalid.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = invalid.iter().map(Base::to_string).collect();
        Err(OligoError::InvalidBuildingBlock(format!(
            "invalid molecular weight values for: {}",
            names.join(", ")
        )))
    }
}

/// Molecular weight of `seq` in g/mol.
///
/// Returns 0.0 for an empty sequence. Bytes outside the alphabet and bases
/// missing from `table` contribute 0.0. Weights are summed left to right in
/// `f64` before the water loss is subtracted.
pub fn molecular_weight(seq: &[u8], table: &BuildingBlockTable) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let sum = seq
        .iter()
        .filter_map(|&b| Base::from_byte(b))
        .fold(0.0_f64, |acc, base| acc + table.weight(base));
    sum - (seq.len() as f64 - 1.0) * WATER_LOSS
}
