//! Shodan `InternetDB` endpoint.

use crate::ReconClient;
use ipscout_core::{HostIntel, Result};

/// `InternetDB` endpoint (no key required)
pub struct InternetDbApi<'a> {
    client: &'a ReconClient,
}

impl<'a> InternetDbApi<'a> {
    pub(crate) const fn new(client: &'a ReconClient) -> Self {
        Self { client }
    }

    /// Fetch the passive scan record for an address
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let intel = client.internetdb().host("1.1.1.1").await?;
    /// println!("Ports: {}", intel.ports_display());
    /// ```
    pub async fn host(&self, ip: &str) -> Result<HostIntel> {
        self.client
            .get(&self.client.endpoints().internetdb, &[ip])
            .await
    }
}
