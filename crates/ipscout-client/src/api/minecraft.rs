//! mcstatus.io Java server status endpoint.

use crate::ReconClient;
use ipscout_core::{McStatus, Result};

/// Minecraft status endpoint
pub struct MinecraftApi<'a> {
    client: &'a ReconClient,
}

impl<'a> MinecraftApi<'a> {
    pub(crate) const fn new(client: &'a ReconClient) -> Self {
        Self { client }
    }

    /// Query the status of a Java edition server
    pub async fn java_status(&self, address: &str) -> Result<McStatus> {
        let raw: serde_json::Value = self
            .client
            .get(&self.client.endpoints().mcstatus, &["v2", "status", "java", address])
            .await?;
        Ok(McStatus::new(raw))
    }
}
