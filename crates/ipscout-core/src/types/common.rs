use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Transport protocol reported for a scanned port
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// TCP protocol
    #[default]
    Tcp,
    /// UDP protocol
    Udp,
    /// SCTP protocol
    Sctp,
    /// IP protocol scan (`-sO`)
    Ip,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
            Self::Udp => write!(f, "udp"),
            Self::Sctp => write!(f, "sctp"),
            Self::Ip => write!(f, "ip"),
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            "sctp" => Ok(Self::Sctp),
            "ip" => Ok(Self::Ip),
            other => Err(format!("unknown protocol: {other}")),
        }
    }
}
