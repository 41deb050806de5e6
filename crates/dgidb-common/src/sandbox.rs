use std::collections::HashSet;
use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder, RequestBuilder};
use url::Url;

use crate::error::{IngestError, Result};

/// Hosts reachable without any extra configuration.
const DEFAULT_ALLOWLIST: &[&str] = &[
    "mygene.info", // MyGene.info gene catalog
    "mychem.info", // MyChem.info compound catalog
];

/// A blocking HTTP client that only issues requests to approved hosts.
///
/// Lookup endpoints are configurable, so every configured endpoint host has
/// to be added with [`SandboxClient::allow_url_host`] before it can be used.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client with the default allowlist.
    ///
    /// With `timeout = None` the underlying client keeps its own default.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| IngestError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let allowlist = DEFAULT_ALLOWLIST.iter().map(|d| d.to_string()).collect();
        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Appends the host of `url` to the allowlist.
    pub fn allow_url_host(&mut self, url: &str) -> Result<()> {
        let parsed = Url::parse(url)?;
        let host = parsed
            .host_str()
            .ok_or_else(|| IngestError::Config(format!("URL has no host: {}", url)))?;
        self.allow_domain(host);
        Ok(())
    }

    /// Validates if a URL is permitted under the current policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or a subdomain of an allowed host
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Builds a GET request, refusing hosts outside the allowlist.
    pub fn get(&self, url: &str) -> Result<RequestBuilder> {
        if !self.is_allowed(url) {
            return Err(IngestError::SecurityError(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
