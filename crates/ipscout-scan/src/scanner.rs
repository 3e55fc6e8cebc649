//! Subprocess execution shared by the scanner wrappers.

use ipscout_core::{ReconError, Result};
use std::ffi::OsStr;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// nmap binary name or path
    pub nmap_path: String,
    /// masscan binary name or path
    pub masscan_path: String,
    /// Ports handed to nmap
    pub nmap_ports: PortSpec,
    /// Ports handed to masscan
    pub masscan_ports: PortSpec,
    /// masscan packets per second
    pub masscan_rate: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            nmap_path: "nmap".to_string(),
            masscan_path: "masscan".to_string(),
            nmap_ports: PortSpec::Top(1000),
            masscan_ports: PortSpec::Range(0..=65535),
            masscan_rate: 1000,
        }
    }
}

/// Port specification for a scanner command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSpec {
    /// The N most common ports (`--top-ports N`)
    Top(u16),
    /// Inclusive port range (`-pA-B`)
    Range(std::ops::RangeInclusive<u16>),
}

impl PortSpec {
    /// Render as scanner arguments
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Self::Top(n) => vec!["--top-ports".to_string(), n.to_string()],
            Self::Range(r) => vec![format!("-p{}-{}", r.start(), r.end())],
        }
    }
}

/// Captured output of a scanner that exited successfully
#[derive(Debug, Clone)]
pub struct ScanOutput {
    /// Raw standard output
    pub stdout: Vec<u8>,
    /// Raw standard error
    pub stderr: Vec<u8>,
}

impl ScanOutput {
    /// Standard output as text
    #[must_use]
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Standard output followed by standard error
    #[must_use]
    pub fn combined(&self) -> String {
        combine(&self.stdout, &self.stderr)
    }
}

fn combine(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(stderr));
    text
}

/// Run `tool` with `args` and wait for it to exit
///
/// Nothing is written to the child's stdin. A spawn failure maps to
/// [`ReconError::Spawn`]; a non-zero exit maps to [`ReconError::ScannerFailed`]
/// carrying the combined output.
pub async fn run_tool<I, S>(tool: &str, args: I) -> Result<ScanOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(tool);
    cmd.args(args).stdin(Stdio::null());
    debug!(command = ?cmd.as_std(), "spawning scanner");

    let output = cmd.output().await.map_err(|source| ReconError::Spawn {
        tool: tool.to_string(),
        source,
    })?;
    debug!(tool, status = %output.status, "scanner exited");

    if !output.status.success() {
        return Err(ReconError::ScannerFailed {
            tool: tool.to_string(),
            status: output.status.to_string(),
            output: combine(&output.stdout, &output.stderr),
        });
    }

    Ok(ScanOutput {
        stdout: output.stdout,
        stderr: output.stderr,
    })
}
