use std::sync::Arc;

use serde_json::Value;

use sajeon_config::ClientConfig;
use sajeon_types::entry::DictEntry;
use sajeon_types::error::DictError;
use sajeon_types::types::{DictType, SearchMode};

use crate::fetch::{Fetch, HttpFetcher};
use crate::parse::parse_response;
use crate::request::{base_url, build_search_request};

/// Auto-complete client for one dictionary endpoint.
///
/// Holds no per-call state; cloning is cheap and concurrent lookups are
/// fine as long as the transport allows them.
#[derive(Clone)]
pub struct DictClient {
    dict_type: DictType,
    search_mode: SearchMode,
    fetcher: Arc<dyn Fetch>,
}

impl DictClient {
    pub fn new(config: ClientConfig) -> Self {
        let fetcher = HttpFetcher::new(&config.impersonate);
        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Swap the transport, mainly for tests.
    pub fn with_fetcher(config: ClientConfig, fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            dict_type: config.dict_type,
            search_mode: config.search_mode,
            fetcher,
        }
    }

    pub fn dict_type(&self) -> DictType {
        self.dict_type
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Endpoint this client sends lookups to.
    pub fn base_url(&self) -> String {
        base_url(self.dict_type)
    }

    /// Look up `query`, returning the first match or `None` when the
    /// service has nothing for it.
    pub async fn search(&self, query: &str) -> Result<Option<DictEntry>, DictError> {
        let request = build_search_request(query, self.dict_type, self.search_mode);
        tracing::debug!(url = %request.url, query, "dictionary lookup");

        let body = self.fetcher.get(&request).await?;

        let raw: Value =
            serde_json::from_str(&body).map_err(|e| DictError::Parse(e.to_string()))?;

        let entry = parse_response(&raw)?;
        match &entry {
            Some(entry) => tracing::debug!(word = %entry.word, "match found"),
            None => tracing::debug!(query, "no match"),
        }
        Ok(entry)
    }
}

/// One-shot lookup with the given configuration.
///
/// ```no_run
/// # async fn run() -> Result<(), sajeon_types::error::DictError> {
/// use sajeon_client::client::search_dict;
/// use sajeon_config::ClientConfig;
///
/// let entry = search_dict("偀", ClientConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_dict(
    query: &str,
    config: ClientConfig,
) -> Result<Option<DictEntry>, DictError> {
    let fetcher = Arc::new(HttpFetcher::new(&config.impersonate));
    search_dict_with(query, config, fetcher).await
}

/// [`search_dict`] with a caller-supplied transport.
pub async fn search_dict_with(
    query: &str,
    config: ClientConfig,
    fetcher: Arc<dyn Fetch>,
) -> Result<Option<DictEntry>, DictError> {
    DictClient::with_fetcher(config, fetcher).search(query).await
}
