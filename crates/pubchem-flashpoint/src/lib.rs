//! Batch lookup of flash-point data from PubChem.
//!
//! Given CAS registry numbers, each one is resolved to a PubChem compound
//! identifier (CID) through PUG REST, the compound's PUG View record is
//! fetched, and the values under
//! *Chemical and Physical Properties → Experimental Properties → Flash Point*
//! are collected.
//!
//! Lookups fail soft: a CAS number that cannot be resolved, or whose record
//! cannot be fetched or has no flash-point section, maps to an empty list.
//! Nothing about one CAS number affects another.
//!
//! # Architecture
//!
//! - `client`: HTTP transport for the two PubChem endpoints
//! - `document`: serde model of the responses and `find_by_heading`
//! - `resolver`: CAS number → CID
//! - `extractor`: CID → flash-point strings
//! - `lookup`: the `CompoundLookup` seam joining the two steps
//! - `batch`: sequential processing into a `FlashPointReport`
//! - `input` / `output`: stdin parsing and JSON rendering
//! - `config` / `error`: configuration and error types
//!
//! # Example
//!
//! ```no_run
//! use pubchem_flashpoint::{
//!     BatchProcessor, LookupConfig, OutputStyle, PubChemClient, PubChemLookup,
//!     parse_cas_numbers, write_report,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = LookupConfig::default();
//!     let client = PubChemClient::new(&config)?;
//!     let processor = BatchProcessor::new(PubChemLookup::new(client));
//!
//!     let report = processor
//!         .process(&parse_cas_numbers("50-00-0\n64-17-5\n"))
//!         .await;
//!     write_report(std::io::stdout().lock(), &report, OutputStyle::Line)?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod batch;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod extractor;
pub mod input;
pub mod lookup;
pub mod output;
pub mod report;
pub mod resolver;
pub mod types;

pub use batch::{BatchProcessor, BatchStats};
pub use client::PubChemClient;
pub use config::LookupConfig;
pub use document::{IdentifierListResponse, PugViewResponse, Record, Section, find_by_heading};
pub use error::{ConfigError, LookupError, Result};
pub use extractor::{Extraction, PropertyExtractor, flash_points};
pub use input::{parse_cas_numbers, read_cas_numbers};
pub use lookup::{CompoundLookup, PubChemLookup};
pub use output::{OutputStyle, write_report};
pub use report::FlashPointReport;
pub use resolver::{IdentifierResolver, Resolution};
pub use types::{CasNumber, CompoundId};
