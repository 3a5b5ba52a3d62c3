//! Whole-sequence calculation: weight, length, composition and deletions.
//!
//! [`calculate`] is the pure engine and trusts its inputs. [`analyze`] is the
//! checked entry point for callers holding raw text and a user-edited table.

use oligo_core::Result;

use crate::composition::{composition, Composition};
use crate::deletion::{deletion_variants, DeletionVariant};
use crate::seq::Oligo;
use crate::weight::{molecular_weight, BuildingBlockTable};

/// Everything computed for one sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalculationResult {
    /// Molecular weight of the full sequence (g/mol).
    pub molecular_weight: f64,
    /// Sequence length in bases.
    pub length: usize,
    /// Per-base counts.
    pub composition: Composition,
    /// One variant per position, in position order.
    pub deletion_variants: Vec<DeletionVariant>,
}

/// Run every calculation on an already-validated sequence.
///
/// The table is used as given; see [`analyze`] for the checked path.
pub fn calculate(seq: &Oligo, table: &BuildingBlockTable) -> CalculationResult {
    CalculationResult {
        molecular_weight: molecular_weight(seq, table),
        length: seq.len(),
        composition: composition(seq),
        deletion_variants: deletion_variants(seq, table),
    }
}

/// Validate raw text and the table, then [`calculate`].
///
/// Fails with [`OligoError::InvalidSequence`](oligo_core::OligoError::InvalidSequence)
/// before looking at the table, then with
/// [`OligoError::InvalidBuildingBlock`](oligo_core::OligoError::InvalidBuildingBlock)
/// if any entry is not a finite positive weight.
pub fn analyze(raw: &str, table: &BuildingBlockTable) -> Result<CalculationResult> {
    let seq = Oligo::parse(raw)?;
    table.check()?;
    Ok(calculate(&seq, table))
}
