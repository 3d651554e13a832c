//! The two-step compound lookup used by the batch processor.

use crate::client::PubChemClient;
use crate::extractor::{Extraction, PropertyExtractor};
use crate::resolver::{IdentifierResolver, Resolution};
use crate::types::{CasNumber, CompoundId};
use async_trait::async_trait;

/// Name-to-identifier and identifier-to-flash-point lookups.
///
/// Both steps are infallible by contract: failures surface as
/// [`Resolution::Unresolvable`] and [`Extraction::Empty`].
#[async_trait]
pub trait CompoundLookup: Send + Sync {
    async fn resolve(&self, cas: &CasNumber) -> Resolution;

    async fn extract(&self, cid: &CompoundId) -> Extraction;
}

/// [`CompoundLookup`] backed by the PubChem web service.
#[derive(Debug, Clone)]
pub struct PubChemLookup {
    resolver: IdentifierResolver,
    extractor: PropertyExtractor,
}

impl PubChemLookup {
    pub fn new(client: PubChemClient) -> Self {
        Self {
            resolver: IdentifierResolver::new(client.clone()),
            extractor: PropertyExtractor::new(client),
        }
    }
}

#[async_trait]
impl CompoundLookup for PubChemLookup {
    async fn resolve(&self, cas: &CasNumber) -> Resolution {
        self.resolver.resolve(cas).await
    }

    async fn extract(&self, cid: &CompoundId) -> Extraction {
        self.extractor.extract(cid).await
    }
}
