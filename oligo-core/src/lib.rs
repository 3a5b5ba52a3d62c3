//! Shared primitives for the oligo molecular weight workspace.
//!
//! `oligo-core` provides the foundation the other crates build on:
//!
//! - **Error types** — [`OligoError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`] and [`Summarizable`], implemented by sequence types

pub mod error;
pub mod traits;

pub use error::{OligoError, Result};
pub use traits::*;
