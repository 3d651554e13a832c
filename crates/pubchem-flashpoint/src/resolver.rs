//! CAS number to compound identifier resolution.

use crate::client::PubChemClient;
use crate::document::IdentifierListResponse;
use crate::types::{CasNumber, CompoundId};
use tracing::{debug, warn};

/// Outcome of resolving one CAS number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(CompoundId),
    Unresolvable,
}

impl Resolution {
    pub fn compound_id(&self) -> Option<&CompoundId> {
        match self {
            Self::Resolved(cid) => Some(cid),
            Self::Unresolvable => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl From<IdentifierListResponse> for Resolution {
    /// The first identifier of the list wins; an empty or missing list, or a
    /// blank identifier, is unresolvable.
    fn from(response: IdentifierListResponse) -> Self {
        response
            .identifier_list
            .and_then(|list| list.cids.into_iter().next())
            .filter(|cid| !cid.is_blank())
            .map_or(Self::Unresolvable, Self::Resolved)
    }
}

/// Resolves CAS numbers through the PUG REST name endpoint.
///
/// Never fails: transport errors, non-200 statuses and undecodable bodies
/// are logged and reported as [`Resolution::Unresolvable`].
#[derive(Debug, Clone)]
pub struct IdentifierResolver {
    client: PubChemClient,
}

impl IdentifierResolver {
    pub fn new(client: PubChemClient) -> Self {
        Self { client }
    }

    pub async fn resolve(&self, cas: &CasNumber) -> Resolution {
        match self.client.identifiers(cas).await {
            Ok(response) => {
                let resolution = Resolution::from(response);
                match &resolution {
                    Resolution::Resolved(cid) => debug!("Resolved {} to CID {}", cas, cid),
                    Resolution::Unresolvable => debug!("No identifiers listed for {}", cas),
                }
                resolution
            }
            Err(e) if e.is_not_found() => {
                debug!("PubChem has no compound named {}", cas);
                Resolution::Unresolvable
            }
            Err(e) => {
                warn!("Identifier lookup for {} failed: {}", cas, e);
                Resolution::Unresolvable
            }
        }
    }
}
