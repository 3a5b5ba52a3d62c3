//! The JSON envelope every entry point returns.
//!
//! ```text
//! {"ok": <value>}
//! {"error": "invalid sequence: empty sequence", "kind": "invalid_sequence"}
//! ```
//!
//! `kind` is [`OligoError::kind`], so a caller can tell a bad sequence from a
//! bad building-block table without parsing the message. Failing to serialize
//! a success value is reported with kind `"internal"`.

use serde::Serialize;

use oligo_core::{OligoError, Result};

const INTERNAL: &str = "internal";

#[derive(Serialize)]
#[serde(untagged)]
enum Envelope<'a, T: Serialize> {
    Ok { ok: &'a T },
    Error { error: String, kind: &'static str },
}

fn failure(error: String, kind: &'static str) -> String {
    let envelope: Envelope<'_, ()> = Envelope::Error { error, kind };
    serde_json::to_string(&envelope)
        .unwrap_or_else(|_| r#"{"error":"serialization failed","kind":"internal"}"#.into())
}

/// Serialize a success value as `{"ok": val}`.
pub fn ok_json<T: Serialize>(val: &T) -> String {
    serde_json::to_string(&Envelope::Ok { ok: val })
        .unwrap_or_else(|e| failure(format!("serialization failed: {e}"), INTERNAL))
}

/// Serialize an error as `{"error": message, "kind": tag}`.
pub fn error_json(err: &OligoError) -> String {
    failure(err.to_string(), err.kind())
}

/// Map a calculation result into the envelope.
pub fn result_json<T: Serialize>(r: Result<T>) -> String {
    match r {
        Ok(val) => ok_json(&val),
        Err(e) => error_json(&e),
    }
}
