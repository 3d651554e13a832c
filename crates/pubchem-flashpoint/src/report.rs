//! Result mapping from CAS number to flash-point values.

use crate::types::CasNumber;
use indexmap::IndexMap;
use serde::Serialize;

/// Flash points per CAS number, in first-seen input order.
///
/// Serializes as a JSON object. Note that equality compares entries only,
/// not their order; use [`FlashPointReport::cas_numbers`] to check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlashPointReport {
    entries: IndexMap<CasNumber, Vec<String>>,
}

impl FlashPointReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the values for `cas`.
    ///
    /// A CAS number that is already present keeps its position and takes the
    /// new values; the previous values are returned.
    pub fn insert(&mut self, cas: CasNumber, values: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(cas, values)
    }

    pub fn get(&self, cas: &CasNumber) -> Option<&[String]> {
        self.entries.get(cas).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cas_numbers(&self) -> impl Iterator<Item = &CasNumber> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CasNumber, &[String])> {
        self.entries
            .iter()
            .map(|(cas, values)| (cas, values.as_slice()))
    }
}
