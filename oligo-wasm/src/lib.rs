//! JSON boundary and browser runtime for the oligo calculator.
//!
//! This crate wraps `oligo-seq` for environments that exchange plain strings
//! (browsers, sandboxed workers). Every public function accepts `&str` and
//! returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>"}`
//!
//! Sequence text and building-block tables are validated here; the engine
//! underneath performs no checks of its own. Enable the `wasm` feature to
//! export the entry points with `wasm-bindgen`.
//!
//! # Modules
//!
//! - [`oligo`] — validation, weight, composition, deletions, reports
//! - [`config`] — building-block tables and calculator settings from JSON
//! - [`format`] — display formatting of weights and probabilities
//!
//! # Example
//!
//! ```
//! let json = oligo_wasm::oligo_weight("ACGT", r#"{"A": 331.2, "C": 307.2, "G": 347.2, "T": 322.2}"#);
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert!((v["ok"].as_f64().unwrap() - 1253.755).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod oligo;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{parse_building_blocks, CalculatorConfig};
pub use format::{format_number, format_percentage, mark_deletion, MarkedSequence};
pub use oligo::{
    oligo_calculate, oligo_composition, oligo_deletions, oligo_report, oligo_weight,
    validate_sequence, JsCompositionEntry, JsDeletionRow, JsOligoReport,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn root_entry_points_succeed_on_valid_input() {
        for json in [
            validate_sequence("ACGT"),
            oligo_weight("ACGT", ""),
            oligo_composition("ACGT"),
            oligo_deletions("ACGT", ""),
            oligo_calculate("ACGT", ""),
            oligo_report("ACGT", ""),
        ] {
            let v: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(v.get("ok").is_some(), "{json}");
            assert!(v.get("error").is_none(), "{json}");
        }
        assert_eq!(format_number(1.0, 2), "1.00");
    }
}
