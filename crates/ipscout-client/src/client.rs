//! Main client implementation.

use crate::api::{GeoApi, InternetDbApi, MinecraftApi};
use crate::config::Endpoints;
use ipscout_core::{ReconError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Client for the geolocation, host-intel and Minecraft status services
#[derive(Clone)]
pub struct ReconClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    endpoints: Endpoints,
    ipinfo_token: Option<String>,
}

impl ReconClient {
    /// Create a client with default endpoints and no ipinfo token
    pub fn new() -> Result<Self> {
        ReconClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> ReconClientBuilder {
        ReconClientBuilder::new()
    }

    /// Access the ipinfo.io geolocation endpoint
    #[must_use]
    pub fn geo(&self) -> GeoApi<'_> {
        GeoApi::new(self)
    }

    /// Access the Shodan `InternetDB` endpoint
    #[must_use]
    pub fn internetdb(&self) -> InternetDbApi<'_> {
        InternetDbApi::new(self)
    }

    /// Access the mcstatus.io endpoint
    #[must_use]
    pub fn minecraft(&self) -> MinecraftApi<'_> {
        MinecraftApi::new(self)
    }

    /// Base URLs in use
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    pub(crate) fn ipinfo_token(&self) -> Option<&str> {
        self.inner.ipinfo_token.as_deref()
    }

    /// Perform a GET request and decode the JSON body
    pub(crate) async fn get<T: DeserializeOwned>(&self, base: &str, segments: &[&str]) -> Result<T> {
        self.get_with_query(base, segments, &[]).await
    }

    /// Perform a GET request with query parameters
    ///
    /// Parameter values are not logged; the ipinfo token travels this way.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        base: &str,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<T> {
        let mut url = build_url(base, segments)?;
        debug!(url = %url, "GET request");

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ReconError::Http(e.without_url().to_string()))?;

        handle_response(response).await
    }
}

/// Append path segments to a base URL
///
/// Each segment is percent-encoded as a whole, so a `/` or `..` inside a
/// target cannot move the request to another path.
fn build_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| ReconError::Config(format!("invalid URL {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ReconError::Config(format!("{base} cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Decode a success body, or convert an error response
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| ReconError::Http(e.without_url().to_string()))?;
        serde_json::from_str(&body).map_err(ReconError::Json)
    } else {
        handle_error(status.as_u16(), response).await
    }
}

/// Convert an error response to a [`ReconError`]
async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or(body);

    match status {
        404 => Err(ReconError::NotFound(message)),
        429 => {
            warn!("Rate limited by remote service");
            Err(ReconError::Api {
                code: status,
                message,
            })
        }
        _ => Err(ReconError::Api {
            code: status,
            message,
        }),
    }
}

/// Pull a human-readable message out of the error bodies the services return
///
/// ipinfo: `{"error": {"title": .., "message": ..}}` or `{"error": ".."}`;
/// `InternetDB`: `{"detail": ".."}`.
fn error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let error = value.get("error");

    error
        .and_then(|e| e.as_str())
        .or_else(|| error.and_then(|e| e.get("message")).and_then(|m| m.as_str()))
        .or_else(|| value.get("detail").and_then(|d| d.as_str()))
        .map(String::from)
}

/// Builder for configuring a [`ReconClient`]
pub struct ReconClientBuilder {
    endpoints: Endpoints,
    ipinfo_token: Option<String>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ReconClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconClientBuilder {
    /// Create a new builder with default endpoints
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::default(),
            ipinfo_token: None,
            timeout: None,
            user_agent: format!("ipscout/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set every service base URL
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set the ipinfo.io token; `None` or a blank string leaves it unset
    #[must_use]
    pub fn ipinfo_token(mut self, token: Option<String>) -> Self {
        self.ipinfo_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Set a request timeout (none by default)
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ReconClient> {
        let mut http = HttpClient::builder().user_agent(&self.user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| ReconError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(ReconClient {
            inner: Arc::new(ClientInner {
                http,
                endpoints: self.endpoints,
                ipinfo_token: self.ipinfo_token,
            }),
        })
    }
}
