//! Validated oligonucleotide sequence and the raw-input validator.
//!
//! [`Oligo`] is a newtype over `Vec<u8>` whose bytes are always uppercase
//! members of the alphabet, so `Deref<Target=[u8]>` and `as_bytes()` can be
//! handed straight to the `&[u8]` calculators.
//!
//! Raw text goes through [`normalize`] (strip all whitespace, uppercase) and
//! is then checked byte by byte. [`validate`] reports rejection as `None`;
//! [`Oligo::parse`] reports it as an [`OligoError::InvalidSequence`] that says
//! which character was at fault.

use std::fmt;
use std::ops::Deref;

use oligo_core::{OligoError, Result, Sequence, Summarizable};

use crate::alphabet::{self, Base};

/// Strip every whitespace character and uppercase the rest.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validate raw input, returning the canonical sequence or `None`.
///
/// Empty input, whitespace-only input, and input containing anything other
/// than `A`, `C`, `G`, `T` (in either case) after normalization are invalid.
pub fn validate(raw: &str) -> Option<Oligo> {
    Oligo::parse(raw).ok()
}

/// A validated oligonucleotide. The inner bytes are always uppercase `ACGT`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Oligo {
    data: Vec<u8>,
}

impl Oligo {
    /// Normalize and validate raw sequence text.
    ///
    /// Fails on an empty result or on the first character outside the
    /// alphabet; the reported position is 1-based within the normalized text.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(OligoError::InvalidSequence("empty sequence".into()));
        }
        for (i, c) in normalized.chars().enumerate() {
            if !c.is_ascii() || !alphabet::is_valid(c as u8) {
                return Err(OligoError::InvalidSequence(format!(
                    "unexpected character '{}' at position {}; only A, C, G, T are allowed",
                    c,
                    i + 1
                )));
            }
        }
        Ok(Self {
            data: normalized.into_bytes(),
        })
    }

    /// Build a sequence from typed bases. Never fails; may be empty.
    pub fn from_bases(bases: impl IntoIterator<Item = Base>) -> Self {
        Self {
            data: bases.into_iter().map(Base::as_byte).collect(),
        }
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are uppercase `ACGT`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Base at `index`, or `None` past the end.
    pub fn base(&self, index: usize) -> Option<Base> {
        self.data.get(index).copied().and_then(Base::from_byte)
    }

    /// Iterate over the typed bases.
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        self.data.iter().filter_map(|&b| Base::from_byte(b))
    }

    /// Borrow as `&str`. Always succeeds since the bytes are ASCII.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.data).unwrap_or_default()
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for Oligo {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Oligo {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for Oligo {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Summarizable for Oligo {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = &self.as_str()[..preview_len];
        if self.data.len() > 20 {
            format!("oligo ({} nt): {}...", self.data.len(), preview)
        } else {
            format!("oligo ({} nt): {}", self.data.len(), preview)
        }
    }
}

impl fmt::Debug for Oligo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oligo(\"{}\")", self.as_str())
    }
}

impl fmt::Display for Oligo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Oligo {
    type Err = OligoError;

    fn from_str(s: &str) -> Result<Self> {
        Oligo::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Oligo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Oligo {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
