//! Client configuration types.

/// Default ipinfo.io base URL
pub const DEFAULT_IPINFO_URL: &str = "https://ipinfo.io";

/// Default Shodan `InternetDB` base URL
pub const DEFAULT_INTERNETDB_URL: &str = "https://internetdb.shodan.io";

/// Default mcstatus.io base URL
pub const DEFAULT_MCSTATUS_URL: &str = "https://api.mcstatus.io";

/// Environment variable holding the ipinfo.io token
pub const IPINFO_TOKEN_VAR: &str = "IPINFO_API_KEY";

/// Base URLs of the remote services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// ipinfo.io geolocation service
    pub ipinfo: String,

    /// Shodan `InternetDB`
    pub internetdb: String,

    /// mcstatus.io
    pub mcstatus: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ipinfo: DEFAULT_IPINFO_URL.to_string(),
            internetdb: DEFAULT_INTERNETDB_URL.to_string(),
            mcstatus: DEFAULT_MCSTATUS_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Point every service at the same base URL (useful for testing)
    #[must_use]
    pub fn all(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            ipinfo: base.clone(),
            internetdb: base.clone(),
            mcstatus: base,
        }
    }
}

/// Read the ipinfo.io token from the environment
///
/// An empty value counts as unset.
#[must_use]
pub fn ipinfo_token_from_env() -> Option<String> {
    std::env::var(IPINFO_TOKEN_VAR)
        .ok()
        .filter(|token| !token.trim().is_empty())
}
