//! ipinfo.io geolocation endpoint.

use crate::config::IPINFO_TOKEN_VAR;
use crate::ReconClient;
use ipscout_core::{GeoInfo, ReconError, Result};

/// Geolocation endpoint
pub struct GeoApi<'a> {
    client: &'a ReconClient,
}

impl<'a> GeoApi<'a> {
    pub(crate) const fn new(client: &'a ReconClient) -> Self {
        Self { client }
    }

    /// Look up the location and owner of an address
    ///
    /// Fails with [`ReconError::MissingApiKey`] before any request is sent
    /// when the client has no token.
    pub async fn lookup(&self, ip: &str) -> Result<GeoInfo> {
        let token = self
            .client
            .ipinfo_token()
            .ok_or(ReconError::MissingApiKey { var: IPINFO_TOKEN_VAR })?;

        self.client
            .get_with_query(&self.client.endpoints().ipinfo, &[ip], &[("token", token)])
            .await
    }
}
