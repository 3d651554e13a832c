//! Identifier types shared by the lookup stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A CAS registry number as read from input.
///
/// Opaque: only trimmed and checked for emptiness, never validated against
/// the CAS check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CasNumber(String);

impl CasNumber {
    /// Trim `raw`; returns `None` if nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CasNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CasNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// PubChem compound identifier (CID).
///
/// PubChem returns CIDs as JSON integers. Strings are accepted too and kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CompoundId {
    Numeric(u64),
    Text(String),
}

impl CompoundId {
    /// An identifier that renders to an empty string cannot address a record.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Numeric(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for CompoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(cid) => write!(f, "{cid}"),
            Self::Text(cid) => f.write_str(cid),
        }
    }
}

impl From<u64> for CompoundId {
    fn from(cid: u64) -> Self {
        Self::Numeric(cid)
    }
}
