//! Oligo calculator JSON entry points.
//!
//! Each function takes the raw sequence text exactly as typed and, where
//! needed, a JSON building-block table or calculator config. Input and
//! configuration are validated here before the pure engine in `oligo-seq`
//! runs.

use serde::Serialize;
use tracing::{debug, warn};

use oligo_core::{Result, Summarizable};
use oligo_seq::{
    calculate, composition, deletion_variants, molecular_weight, BuildingBlockTable, Oligo,
};

use crate::config::{parse_building_blocks, CalculatorConfig};
use crate::error::result_json;
use crate::format::{format_number, format_percentage, mark_deletion, MarkedSequence};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// ── Wrapper types ────────────────────────────────────────────────────────

/// One non-zero composition entry.
#[derive(Debug, Serialize)]
pub struct JsCompositionEntry {
    pub base: String,
    pub count: usize,
}

/// One formatted row of the deletion table.
#[derive(Debug, Serialize)]
pub struct JsDeletionRow {
    pub position: usize,
    pub marked: MarkedSequence,
    pub sequence: String,
    pub molecular_weight: String,
    pub probability: String,
}

/// Display-ready calculation report.
#[derive(Debug, Serialize)]
pub struct JsOligoReport {
    pub sequence: String,
    pub molecular_weight: String,
    pub length: usize,
    pub composition: Vec<JsCompositionEntry>,
    pub deletions: Vec<JsDeletionRow>,
}

// ── Input handling ───────────────────────────────────────────────────────

fn parse_sequence(raw: &str) -> Result<Oligo> {
    let seq = Oligo::parse(raw).inspect_err(|e| warn!(error = %e, "rejected sequence input"))?;
    debug!(length = seq.len(), sequence = %seq.summary(), "sequence accepted");
    Ok(seq)
}

fn checked_inputs(raw: &str, blocks_json: &str) -> Result<(Oligo, BuildingBlockTable)> {
    let seq = parse_sequence(raw)?;
    let table = parse_building_blocks(blocks_json)
        .and_then(|t| t.check().map(|()| t))
        .inspect_err(|e| warn!(error = %e, "rejected building blocks"))?;
    debug!(length = seq.len(), "building blocks accepted");
    Ok((seq, table))
}

fn build_report(raw: &str, config_json: &str) -> Result<JsOligoReport> {
    let seq = parse_sequence(raw)?;
    let config = CalculatorConfig::from_json(config_json)
        .and_then(|c| c.check().map(|()| c))
        .inspect_err(|e| warn!(error = %e, "rejected calculator config"))?;
    debug!(length = seq.len(), decimals = config.decimals, "building report");

    let result = calculate(&seq, &config.building_blocks);
    let decimals = config.decimals;
    Ok(JsOligoReport {
        sequence: seq.to_string(),
        molecular_weight: format_number(result.molecular_weight, decimals),
        length: result.length,
        composition: result
            .composition
            .iter()
            .filter(|&(_, count)| count > 0)
            .map(|(base, count)| JsCompositionEntry {
                base: base.to_string(),
                count,
            })
            .collect(),
        deletions: result
            .deletion_variants
            .iter()
            .map(|v| JsDeletionRow {
                position: v.position,
                marked: mark_deletion(&seq, v.position),
                sequence: v.sequence.to_string(),
                molecular_weight: format_number(v.molecular_weight, decimals),
                probability: format_percentage(v.probability, decimals),
            })
            .collect(),
    })
}

// ── JSON boundary functions ──────────────────────────────────────────────

/// Normalize and validate a sequence; returns the canonical form as JSON.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn validate_sequence(raw: &str) -> String {
    result_json(parse_sequence(raw))
}

/// Full-sequence molecular weight as JSON.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn oligo_weight(raw: &str, blocks_json: &str) -> String {
    result_json(checked_inputs(raw, blocks_json).map(|(seq, table)| molecular_weight(&seq, &table)))
}

/// Base composition as a JSON object with all four bases.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn oligo_composition(raw: &str) -> String {
    result_json(parse_sequence(raw).map(|seq| composition(&seq)))
}

/// All single-deletion variants as a JSON array, in position order.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn oligo_deletions(raw: &str, blocks_json: &str) -> String {
    result_json(
        checked_inputs(raw, blocks_json).map(|(seq, table)| deletion_variants(&seq, &table)),
    )
}

/// Complete unformatted calculation result as JSON.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn oligo_calculate(raw: &str, blocks_json: &str) -> String {
    result_json(checked_inputs(raw, blocks_json).map(|(seq, table)| calculate(&seq, &table)))
}

/// Display-ready report: formatted numbers, non-zero composition entries and
/// highlight segments for each deletion.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn oligo_report(raw: &str, config_json: &str) -> String {
    result_json(build_report(raw, config_json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    const BLOCKS: &str = r#"{"A": 331.2, "C": 307.2, "G": 347.2, "T": 322.2}"#;

    #[test]
    fn validate_canonicalizes() {
        let v = parse(&validate_sequence(" ac gt "));
        assert_eq!(v["ok"], "ACGT");
    }

    #[test]
    fn validate_reports_bad_character() {
        let v = parse(&validate_sequence("ACGX"));
        let msg = v["error"].as_str().unwrap();
        assert!(msg.starts_with("invalid sequence:"), "{msg}");
        assert!(msg.contains("'X'"), "{msg}");
    }

    #[test]
    fn weight_of_acgt() {
        let v = parse(&oligo_weight("acgt", BLOCKS));
        assert!((v["ok"].as_f64().unwrap() - 1253.755).abs() < 1e-9);
    }

    #[test]
    fn weight_with_blank_table_uses_defaults() {
        let v = parse(&oligo_weight("ACGT", ""));
        assert!((v["ok"].as_f64().unwrap() - 1253.755).abs() < 1e-9);
    }

    #[test]
    fn weight_rejects_invalid_blocks() {
        let v = parse(&oligo_weight("ACGT", r#"{"A": 331.2, "C": 0, "G": 347.2}"#));
        assert_eq!(
            v["error"],
            "invalid building block: invalid molecular weight values for: C, T"
        );
    }

    #[test]
    fn error_kind_separates_sequence_from_table() {
        let v = parse(&oligo_calculate("ACGU", BLOCKS));
        assert_eq!(v["kind"], "invalid_sequence");
        let v = parse(&oligo_calculate("ACGT", r#"{"A": 1, "C": 1, "G": 1, "T": 0}"#));
        assert_eq!(v["kind"], "invalid_building_block");
        let v = parse(&oligo_report("A", r#"{"decimals": 50}"#));
        assert_eq!(v["kind"], "invalid_input");
    }

    #[test]
    fn weight_rejects_malformed_json() {
        let v = parse(&oligo_weight("ACGT", "{not json"));
        assert!(v["error"].as_str().unwrap().starts_with("parse error:"));
    }

    #[test]
    fn sequence_error_wins_over_table_error() {
        let v = parse(&oligo_weight("", r#"{"A": -1}"#));
        assert_eq!(v["error"], "invalid sequence: empty sequence");
    }

    #[test]
    fn composition_has_all_keys() {
        let v = parse(&oligo_composition("aacgt"));
        assert_eq!(v["ok"]["A"], 2);
        assert_eq!(v["ok"]["C"], 1);
        assert_eq!(v["ok"]["G"], 1);
        assert_eq!(v["ok"]["T"], 1);

        let v = parse(&oligo_composition("AAA"));
        assert_eq!(v["ok"]["G"], 0);
        assert_eq!(v["ok"].as_object().unwrap().len(), 4);
    }

    #[test]
    fn deletions_json_shape() {
        let v = parse(&oligo_deletions("ACGT", BLOCKS));
        let rows = v["ok"].as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["position"], 1);
        assert_eq!(rows[0]["deleted_base"], "A");
        assert_eq!(rows[0]["sequence"], "CGT");
        assert_eq!(rows[0]["probability"], 0.25);
        let expected = 307.2 + 347.2 + 322.2 - 2.0 * 18.015;
        assert!((rows[0]["molecular_weight"].as_f64().unwrap() - expected).abs() < 1e-9);
        assert_eq!(rows[3]["sequence"], "ACG");
    }

    #[test]
    fn calculate_json_shape() {
        let v = parse(&oligo_calculate("GGA", BLOCKS));
        let ok = &v["ok"];
        assert_eq!(ok["length"], 3);
        assert_eq!(ok["composition"]["G"], 2);
        assert_eq!(ok["deletion_variants"].as_array().unwrap().len(), 3);
        assert!(ok["molecular_weight"].as_f64().is_some());
    }

    #[test]
    fn report_formats_for_display() {
        let v = parse(&oligo_report("acgt", ""));
        let ok = &v["ok"];
        assert_eq!(ok["sequence"], "ACGT");
        assert_eq!(ok["molecular_weight"], "1253.75");
        assert_eq!(ok["length"], 4);
        let row = &ok["deletions"][1];
        assert_eq!(row["position"], 2);
        assert_eq!(row["marked"]["before"], "A");
        assert_eq!(row["marked"]["deleted"], "C");
        assert_eq!(row["marked"]["after"], "GT");
        assert_eq!(row["sequence"], "AGT");
        assert_eq!(row["probability"], "25.00%");
    }

    #[test]
    fn report_rounds_halfway_percentages_up() {
        let v = parse(&oligo_report(&"ACGT".repeat(8), ""));
        let rows = v["ok"]["deletions"].as_array().unwrap();
        assert_eq!(rows.len(), 32);
        assert!(rows.iter().all(|r| r["probability"] == "3.13%"));
    }

    #[test]
    fn report_omits_zero_counts() {
        let v = parse(&oligo_report("AAT", ""));
        let entries = v["ok"]["composition"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["base"], "A");
        assert_eq!(entries[0]["count"], 2);
        assert_eq!(entries[1]["base"], "T");
    }

    #[test]
    fn report_honours_decimals() {
        let v = parse(&oligo_report("A", r#"{"decimals": 0}"#));
        assert_eq!(v["ok"]["molecular_weight"], "331");
        assert_eq!(v["ok"]["deletions"][0]["probability"], "100%");
        assert_eq!(v["ok"]["deletions"][0]["molecular_weight"], "0");
    }

    #[test]
    fn report_rejects_bad_config() {
        let v = parse(&oligo_report("A", r#"{"decimals": 50}"#));
        assert!(v["error"].as_str().unwrap().contains("decimals"));
        let v = parse(&oligo_report("A", r#"{"building_blocks": {"A": 1}}"#));
        assert!(v["error"].as_str().unwrap().contains("C, G, T"));
    }

    #[test]
    fn every_entry_point_logs_the_accepted_sequence() {
        let logs = capture_debug_logs(|| {
            let _ = oligo_composition("acgt");
        });
        assert!(logs.contains("sequence accepted"), "{logs}");
        assert!(logs.contains("oligo (4 nt): ACGT"), "{logs}");

        let logs = capture_debug_logs(|| {
            let _ = oligo_weight("ACGT", r#"{"A": -1}"#);
        });
        assert!(logs.contains("rejected building blocks"), "{logs}");
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_debug_logs(f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }
}
