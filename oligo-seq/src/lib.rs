//! Oligonucleotide molecular weight and single-deletion analysis.
//!
//! Given a short DNA sequence and per-base building-block weights, computes
//! the full-sequence molecular weight, base composition, and every
//! single-base deletion variant with its weight and probability:
//!
//! - **Alphabet** — [`Base`], the four bases `A`, `C`, `G`, `T`
//! - **Validation** — [`validate`], [`Oligo::parse`], [`normalize`]
//! - **Composition** — [`composition`] into a four-key [`Composition`]
//! - **Molecular weight** — [`molecular_weight`] with a [`BuildingBlockTable`]
//! - **Deletions** — [`deletion_variants`] / [`DeletionIter`]
//! - **Calculation** — [`calculate`] (unchecked) and [`analyze`] (checked)
//!
//! All functions are pure and synchronous.
//!
//! # Example
//!
//! ```
//! use oligo_seq::{analyze, BuildingBlockTable, Base};
//!
//! let table = BuildingBlockTable::default();
//! let result = analyze("acgt", &table).unwrap();
//! assert!((result.molecular_weight - 1253.755).abs() < 1e-9);
//! assert_eq!(result.composition.get(Base::A), 1);
//!
//! let first = &result.deletion_variants[0];
//! assert_eq!(first.position, 1);
//! assert_eq!(first.sequence.as_str(), "CGT");
//! assert_eq!(first.probability, 0.25);
//! ```

pub mod alphabet;
pub mod calculation;
pub mod composition;
pub mod deletion;
pub mod seq;
pub mod weight;

pub use alphabet::Base;
pub use calculation::{analyze, calculate, CalculationResult};
pub use composition::{composition, Composition};
pub use deletion::{deletion_variants, DeletionIter, DeletionVariant};
pub use seq::{normalize, validate, Oligo};
pub use weight::{molecular_weight, BuildingBlockTable, WATER_LOSS};
