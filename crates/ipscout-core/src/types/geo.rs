use serde::{Deserialize, Serialize};

/// Geolocation record returned by ipinfo.io
///
/// Every field defaults to an empty string so partial answers (for example
/// bogon addresses, which only carry `ip` and `bogon`) still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoInfo {
    /// Queried IP address
    #[serde(default)]
    pub ip: String,

    /// Reverse DNS hostname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// City name
    #[serde(default)]
    pub city: String,

    /// Region or state
    #[serde(default)]
    pub region: String,

    /// Two-letter country code
    #[serde(default)]
    pub country: String,

    /// "latitude,longitude"
    #[serde(default)]
    pub loc: String,

    /// Owning organization, prefixed with its AS number
    #[serde(default)]
    pub org: String,

    /// Postal code
    #[serde(default)]
    pub postal: String,

    /// IANA time zone name
    #[serde(default)]
    pub timezone: String,

    /// Set for private or reserved addresses
    #[serde(default)]
    pub bogon: bool,
}
