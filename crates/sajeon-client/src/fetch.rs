use async_trait::async_trait;

use sajeon_types::error::DictError;

use crate::request::SearchRequest;

/// Transport seam: given a prepared request, return the raw response body.
///
/// The client never talks to the network directly; tests substitute their
/// own implementation here.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, request: &SearchRequest) -> Result<String, DictError>;
}

/// Default transport backed by reqwest.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    /// `impersonate` is a browser identity string such as `chrome136`; its
    /// numeric part picks the Chrome major version advertised to the server.
    pub fn new(impersonate: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent(impersonate),
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, request: &SearchRequest) -> Result<String, DictError> {
        let mut builder = self
            .client
            .get(&request.url)
            .query(&request.params)
            .header("user-agent", &self.user_agent);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %request.url, error = %e, "fetch failed");
                DictError::Network(e.to_string())
            })?
            .error_for_status()
            .map_err(|e| {
                tracing::warn!(url = %request.url, status = ?e.status(), "server rejected request");
                DictError::Network(e.to_string())
            })?;

        response.text().await.map_err(|e| {
            tracing::warn!(url = %request.url, error = %e, "failed to read response body");
            DictError::Network(e.to_string())
        })
    }
}

fn user_agent(impersonate: &str) -> String {
    let major: String = impersonate.chars().filter(char::is_ascii_digit).collect();
    let major = if major.is_empty() {
        "136".to_string()
    } else {
        major
    };
    format!(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/{major}.0.0.0 Safari/537.36"
    )
}
