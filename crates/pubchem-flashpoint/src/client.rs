//! HTTP client for the PubChem PUG REST and PUG View endpoints

use crate::config::LookupConfig;
use crate::document::{IdentifierListResponse, PugViewResponse};
use crate::error::{LookupError, Result};
use crate::types::{CasNumber, CompoundId};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Once;
use url::Url;

/// Install the ring crypto provider for rustls once per process.
fn ensure_crypto_provider() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        // Err means another provider is already installed, which is fine
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// PubChem HTTP client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PubChemClient {
    client: Client,
    base_url: Url,
}

impl PubChemClient {
    /// Create a client from validated configuration.
    pub fn new(config: &LookupConfig) -> Result<Self> {
        ensure_crypto_provider();

        let base_url = config
            .parsed_base_url()
            .map_err(|e| LookupError::InvalidUrl(e.to_string()))?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Create a client around an existing reqwest client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/pug/compound/name/{cas}/cids/JSON`
    pub fn identifiers_url(&self, cas: &CasNumber) -> Result<Url> {
        self.endpoint(&["pug", "compound", "name", cas.as_str(), "cids", "JSON"])
    }

    /// `<base>/pug_view/data/compound/{cid}/JSON`
    pub fn record_url(&self, cid: &CompoundId) -> Result<Url> {
        let cid = cid.to_string();
        self.endpoint(&["pug_view", "data", "compound", &cid, "JSON"])
    }

    /// Look up the compound identifiers registered under a CAS number.
    pub async fn identifiers(&self, cas: &CasNumber) -> Result<IdentifierListResponse> {
        let url = self.identifiers_url(cas)?;
        self.get_json(url).await
    }

    /// Fetch the PUG View record of a compound.
    pub async fn record(&self, cid: &CompoundId) -> Result<PugViewResponse> {
        let url = self.record_url(cid)?;
        self.get_json(url).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("PubChem request URL: {}", url);

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
            status => Err(LookupError::HttpStatus(status)),
        }
    }
}
