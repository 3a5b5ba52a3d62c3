//! Single-base deletion variants.
//!
//! A sequence of length `n` has exactly `n` single-deletion variants, one per
//! position. Every position is assumed equally likely to be lost during
//! synthesis, so each variant carries probability `1 / n`. Variants that
//! happen to produce the same sequence (e.g. deleting either base of `AA`)
//! are kept as separate entries.

use crate::alphabet::Base;
use crate::seq::Oligo;
use crate::weight::{molecular_weight, BuildingBlockTable};

/// The result of deleting one base from a parent sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeletionVariant {
    /// 1-based position of the deleted base in the parent sequence.
    pub position: usize,
    /// The base that was removed.
    pub deleted_base: Base,
    /// Parent sequence with that base removed (length `n - 1`).
    pub sequence: Oligo,
    /// Molecular weight of `sequence` in g/mol.
    pub molecular_weight: f64,
    /// Probability of this deletion, `1 / n`.
    pub probability: f64,
}

impl DeletionVariant {
    /// Reinsert the deleted base, recovering the parent sequence.
    pub fn reconstruct(&self) -> Oligo {
        let idx = self.position - 1;
        let mut data = Vec::with_capacity(self.sequence.len() + 1);
        data.extend_from_slice(&self.sequence[..idx]);
        data.push(self.deleted_base.as_byte());
        data.extend_from_slice(&self.sequence[idx..]);
        Oligo::from_validated(data)
    }
}

/// Lazy iterator over the deletion variants of a sequence, in position order.
///
/// Each step allocates the variant sequence and weighs it, so a full pass is
/// O(n²).
pub struct DeletionIter<'a> {
    seq: &'a Oligo,
    table: &'a BuildingBlockTable,
    next: usize,
    probability: f64,
}

impl<'a> DeletionIter<'a> {
    /// Create an iterator over the variants of `seq` weighed with `table`.
    pub fn new(seq: &'a Oligo, table: &'a BuildingBlockTable) -> Self {
        let probability = if seq.is_empty() {
            0.0
        } else {
            1.0 / seq.len() as f64
        };
        Self {
            seq,
            table,
            next: 0,
            probability,
        }
    }
}

impl Iterator for DeletionIter<'_> {
    type Item = DeletionVariant;

    fn next(&mut self) -> Option<DeletionVariant> {
        let i = self.next;
        let deleted_base = self.seq.base(i)?;
        self.next += 1;

        let mut data = Vec::with_capacity(self.seq.len() - 1);
        data.extend_from_slice(&self.seq[..i]);
        data.extend_from_slice(&self.seq[i + 1..]);
        let molecular_weight = molecular_weight(&data, self.table);

        Some(DeletionVariant {
            position: i + 1,
            deleted_base,
            sequence: Oligo::from_validated(data),
            molecular_weight,
            probability: self.probability,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DeletionIter<'_> {}

impl std::iter::FusedIterator for DeletionIter<'_> {}

/// All single-base deletion variants of `seq`, ordered by position `1..=n`.
///
/// Returns an empty vector for an empty sequence.
pub fn deletion_variants(seq: &Oligo, table: &BuildingBlockTable) -> Vec<DeletionVariant> {
    DeletionIter::new(seq, table).collect()
}
