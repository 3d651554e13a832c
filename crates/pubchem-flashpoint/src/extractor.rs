//! Flash-point extraction from PUG View records.
//!
//! The values live at a fixed place in the section tree:
//!
//! ```text
//! Record.Section["Chemical and Physical Properties"]
//!     .Section["Experimental Properties"]
//!         .Section["Flash Point"]
//!             .Information[*].Value.StringWithMarkup[0].String
//! ```
//!
//! A missing link anywhere on that path means "no flash points", never an
//! error.

use crate::client::PubChemClient;
use crate::document::{Information, Record, Section, find_by_heading};
use crate::types::CompoundId;
use tracing::{debug, warn};

pub const CHEMICAL_AND_PHYSICAL_PROPERTIES: &str = "Chemical and Physical Properties";
pub const EXPERIMENTAL_PROPERTIES: &str = "Experimental Properties";
pub const FLASH_POINT: &str = "Flash Point";

/// Outcome of extracting flash points for one compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// At least one value, in document order
    Extracted(Vec<String>),
    Empty,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn values(&self) -> &[String] {
        match self {
            Self::Extracted(values) => values,
            Self::Empty => &[],
        }
    }

    pub fn into_values(self) -> Vec<String> {
        match self {
            Self::Extracted(values) => values,
            Self::Empty => Vec::new(),
        }
    }
}

impl From<Vec<String>> for Extraction {
    fn from(values: Vec<String>) -> Self {
        if values.is_empty() {
            Self::Empty
        } else {
            Self::Extracted(values)
        }
    }
}

/// The "Flash Point" section of a record, if the full heading path exists.
pub fn flash_point_section(record: &Record) -> Option<&Section> {
    find_by_heading(&record.sections, CHEMICAL_AND_PHYSICAL_PROPERTIES)?
        .subsection(EXPERIMENTAL_PROPERTIES)?
        .subsection(FLASH_POINT)
}

/// All flash-point strings of a record, in document order, duplicates kept.
pub fn flash_points(record: &Record) -> Vec<String> {
    flash_point_section(record)
        .map(|section| {
            section
                .information
                .iter()
                .filter_map(Information::text)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Fetches PUG View records and extracts their flash points.
///
/// Never fails: transport errors, non-200 statuses and undecodable bodies
/// are logged and reported as [`Extraction::Empty`].
#[derive(Debug, Clone)]
pub struct PropertyExtractor {
    client: PubChemClient,
}

impl PropertyExtractor {
    pub fn new(client: PubChemClient) -> Self {
        Self { client }
    }

    pub async fn extract(&self, cid: &CompoundId) -> Extraction {
        let response = match self.client.record(cid).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Record lookup for CID {} failed: {}", cid, e);
                return Extraction::Empty;
            }
        };

        let extraction = response
            .record
            .as_ref()
            .map(flash_points)
            .map_or(Extraction::Empty, Extraction::from);

        debug!(
            "CID {} has {} flash point value(s)",
            cid,
            extraction.values().len()
        );
        extraction
    }
}
