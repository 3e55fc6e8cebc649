use serde::{Deserialize, Serialize};

/// Passive scan record returned by Shodan `InternetDB`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostIntel {
    /// Queried IP address
    #[serde(default)]
    pub ip: String,

    /// Hostnames seen for the address
    #[serde(default)]
    pub hostnames: Vec<String>,

    /// Open ports observed by the crawlers
    #[serde(default)]
    pub ports: Vec<u16>,

    /// Classification tags (e.g. "cloud", "vpn")
    #[serde(default)]
    pub tags: Vec<String>,

    /// CVE identifiers
    #[serde(default)]
    pub vulns: Vec<String>,

    /// CPE identifiers of detected software
    #[serde(default)]
    pub cpes: Vec<String>,
}

impl HostIntel {
    /// Ports as a bracketed, space-separated list: `[22 80]`
    #[must_use]
    pub fn ports_display(&self) -> String {
        let ports: Vec<String> = self.ports.iter().map(ToString::to_string).collect();
        format!("[{}]", ports.join(" "))
    }

    /// Field label and rendered value, in display order
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("IP", self.ip.clone()),
            ("Hostnames", self.hostnames.join(", ")),
            ("Ports", self.ports_display()),
            ("Tags", self.tags.join(", ")),
            ("Vulnerabilities", self.vulns.join(", ")),
            ("CPEs", self.cpes.join(", ")),
        ]
    }
}
