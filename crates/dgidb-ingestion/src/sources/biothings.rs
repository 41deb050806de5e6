//! BioThings API client (MyGene.info + MyChem.info).
//!
//! Every lookup is a single blocking GET. Any failure (transport error,
//! non-200 status, malformed JSON, missing field) reads as "no result": it is
//! logged at debug level and never retried.

use std::time::Duration;

use dgidb_common::{Result, SandboxClient};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::mychem::{chembl_id_from_response, drug_query_url, MYCHEM_QUERY_URL};
use super::mygene::{entrez_id_from_response, gene_query_url, MYGENE_QUERY_URL};
use super::IdentifierLookup;

/// Blocking client for the two BioThings query endpoints.
#[derive(Debug, Clone)]
pub struct BioThingsClient {
    client: SandboxClient,
    mygene_url: String,
    mychem_url: String,
}

impl BioThingsClient {
    /// Client for the public MyGene.info and MyChem.info endpoints.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(MYGENE_QUERY_URL, MYCHEM_QUERY_URL, None)
    }

    /// Client for custom endpoints; their hosts are added to the allowlist.
    pub fn with_endpoints(
        mygene_url: &str,
        mychem_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut client = SandboxClient::new(timeout)?;
        client.allow_url_host(mygene_url)?;
        client.allow_url_host(mychem_url)?;

        Ok(Self {
            client,
            mygene_url: mygene_url.to_string(),
            mychem_url: mychem_url.to_string(),
        })
    }

    /// Find the Entrez id of a human gene symbol through MyGene.info.
    #[instrument(skip(self))]
    pub fn query_entrez_id(&self, gene_symbol: &str) -> Result<Option<String>> {
        let url = gene_query_url(&self.mygene_url, gene_symbol)?;
        Ok(self.fetch_json(&url)?.as_ref().and_then(entrez_id_from_response))
    }

    /// Find the ChEMBL id of a drug preferred name through MyChem.info.
    #[instrument(skip(self))]
    pub fn query_chembl_id(&self, drug_name: &str) -> Result<Option<String>> {
        let url = drug_query_url(&self.mychem_url, drug_name)?;
        Ok(self.fetch_json(&url)?.as_ref().and_then(chembl_id_from_response))
    }

    /// GET `url` and parse the body, or `None` for any status but 200.
    fn fetch_json(&self, url: &Url) -> Result<Option<Value>> {
        debug!(url = %url, "BioThings query");

        let resp = self.client.get(url.as_str())?.send()?;
        if resp.status() != StatusCode::OK {
            debug!(status = %resp.status(), "BioThings query returned no body");
            return Ok(None);
        }

        Ok(Some(resp.json::<Value>()?))
    }
}

impl IdentifierLookup for BioThingsClient {
    fn entrez_id(&self, gene_symbol: &str) -> Option<String> {
        self.query_entrez_id(gene_symbol).unwrap_or_else(|e| {
            debug!(gene = gene_symbol, error = %e, "MyGene lookup failed");
            None
        })
    }

    fn chembl_id(&self, drug_name: &str) -> Option<String> {
        self.query_chembl_id(drug_name).unwrap_or_else(|e| {
            debug!(drug = drug_name, error = %e, "MyChem lookup failed");
            None
        })
    }
}
