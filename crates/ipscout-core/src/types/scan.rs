use super::Protocol;
use serde::{Deserialize, Serialize};

/// Parsed nmap run (`-oX` output)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Hosts reported in the run
    pub hosts: Vec<ScannedHost>,
}

/// A single `<host>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedHost {
    /// Addresses (IPv4, IPv6, MAC) attached to the host
    pub addresses: Vec<HostAddress>,
    /// Ports listed under `<ports>`
    pub ports: Vec<ScannedPort>,
}

impl ScannedHost {
    /// Ports whose state is `open`
    pub fn open_ports(&self) -> impl Iterator<Item = &ScannedPort> {
        self.ports.iter().filter(|p| p.is_open())
    }

    /// First IP address of the host, if any
    #[must_use]
    pub fn primary_address(&self) -> Option<&str> {
        self.addresses
            .iter()
            .find(|a| a.addr_type != "mac")
            .map(|a| a.addr.as_str())
    }
}

/// An `<address>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostAddress {
    /// Address text
    pub addr: String,
    /// "ipv4", "ipv6" or "mac"
    pub addr_type: String,
}

/// A `<port>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedPort {
    /// Transport protocol
    pub protocol: Protocol,
    /// Port number
    pub port_id: u16,
    /// Raw state string ("open", "closed", "filtered", "open|filtered", ...)
    pub state: String,
    /// Service name guessed by nmap
    pub service: Option<String>,
}

impl ScannedPort {
    /// Returns true if nmap reported the port as open
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

impl std::fmt::Display for ScannedPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.port_id, self.protocol)
    }
}
