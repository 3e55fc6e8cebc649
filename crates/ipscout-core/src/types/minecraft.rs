use crate::error::ReconError;
use serde_json::{Map, Value};

/// Java server status returned by mcstatus.io
///
/// The payload shape varies between online and offline servers, so the body
/// is kept as an untyped tree and each section is looked up on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McStatus {
    raw: Value,
}

/// A status section that is absent or not an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingSection(pub &'static str);

impl std::fmt::Display for MissingSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing or malformed `{}` section", self.0)
    }
}

impl std::error::Error for MissingSection {}

impl From<MissingSection> for ReconError {
    fn from(missing: MissingSection) -> Self {
        Self::MissingField(missing.0)
    }
}

/// `version` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McVersion {
    /// Version name without formatting codes
    pub name: String,
}

/// `players` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McPlayers {
    /// Players currently online
    pub online: String,
    /// Player slots
    pub max: String,
}

impl std::fmt::Display for McPlayers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.online, self.max)
    }
}

/// `motd` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McMotd {
    /// Message of the day without formatting codes
    pub clean: String,
}

impl McStatus {
    /// Wrap a decoded JSON body
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Top-level `online` flag, when present
    #[must_use]
    pub fn online(&self) -> Option<bool> {
        self.raw.get("online").and_then(Value::as_bool)
    }

    /// Extract the `version` section
    pub fn version(&self) -> Result<McVersion, MissingSection> {
        let section = self.section("version")?;
        Ok(McVersion {
            name: render(section.get("name_clean")),
        })
    }

    /// Extract the `players` section
    pub fn players(&self) -> Result<McPlayers, MissingSection> {
        let section = self.section("players")?;
        Ok(McPlayers {
            online: render(section.get("online")),
            max: render(section.get("max")),
        })
    }

    /// Extract the `motd` section
    pub fn motd(&self) -> Result<McMotd, MissingSection> {
        let section = self.section("motd")?;
        Ok(McMotd {
            clean: render(section.get("clean")),
        })
    }

    fn section(&self, name: &'static str) -> Result<&Map<String, Value>, MissingSection> {
        self.raw
            .get(name)
            .and_then(Value::as_object)
            .ok_or(MissingSection(name))
    }
}

/// Render a leaf value for display; strings lose their quotes
fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "n/a".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
