//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use ipscout_client::Endpoints;
use ipscout_scan::{PortSpec, ScanConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
///
/// Every key is optional; a missing file means all defaults. The ipinfo token
/// is deliberately not a key here: it only comes from `IPINFO_API_KEY`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ipinfo.io base URL.
    pub ipinfo_url: Option<String>,

    /// `InternetDB` base URL.
    pub internetdb_url: Option<String>,

    /// mcstatus.io base URL.
    pub mcstatus_url: Option<String>,

    /// nmap binary; `~` is expanded.
    pub nmap_path: Option<String>,

    /// masscan binary; `~` is expanded.
    pub masscan_path: Option<String>,

    /// masscan packets per second.
    pub masscan_rate: Option<u32>,

    /// Number of top ports nmap scans.
    pub top_ports: Option<u16>,

    /// HTTP timeout in seconds. Unset means requests may block indefinitely.
    pub http_timeout_secs: Option<u64>,

    /// User-Agent sent with HTTP requests.
    pub user_agent: Option<String>,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "ipscout", "ipscout")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;

        Ok(config)
    }

    /// Service base URLs, falling back to the public endpoints.
    pub fn endpoints(&self) -> Endpoints {
        let defaults = Endpoints::default();
        Endpoints {
            ipinfo: self.ipinfo_url.clone().unwrap_or(defaults.ipinfo),
            internetdb: self.internetdb_url.clone().unwrap_or(defaults.internetdb),
            mcstatus: self.mcstatus_url.clone().unwrap_or(defaults.mcstatus),
        }
    }

    /// Scanner settings.
    pub fn scan_config(&self) -> ScanConfig {
        let mut scan = ScanConfig::default();
        if let Some(path) = &self.nmap_path {
            scan.nmap_path = shellexpand::tilde(path).into_owned();
        }
        if let Some(path) = &self.masscan_path {
            scan.masscan_path = shellexpand::tilde(path).into_owned();
        }
        if let Some(rate) = self.masscan_rate {
            scan.masscan_rate = rate;
        }
        if let Some(top) = self.top_ports {
            scan.nmap_ports = PortSpec::Top(top);
        }
        scan
    }

    /// HTTP timeout, if configured.
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }
}
