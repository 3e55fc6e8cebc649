//! Handler implementations and the dispatcher.

pub mod geo;
pub mod intel;
pub mod masscan;
pub mod minecraft;
pub mod nmap;

use ipscout_client::ReconClient;
use ipscout_scan::ScanConfig;
use std::io::{self, Write};
use tracing::debug;

use super::args::{Invocation, Mode};
use crate::output::Console;

/// Shared context for all handlers.
#[derive(Clone)]
pub struct Context {
    /// HTTP client for the remote services
    pub client: ReconClient,

    /// Scanner binaries and fixed arguments
    pub scan: ScanConfig,

    /// Whether to print explanations before each step
    pub explain: bool,

    /// Whether to show a spinner while scanners run
    pub progress: bool,
}

/// Run geolocation, then exactly one handler selected by the mode token.
///
/// Handler failures are reported on the console and never returned; only a
/// console write error escapes.
pub async fn dispatch<W: Write>(
    ctx: &Context,
    console: &mut Console<W>,
    invocation: &Invocation,
) -> io::Result<()> {
    let ip = invocation.ip.as_str();
    geo::execute(ctx, console, ip).await?;

    let mode = match invocation.mode.as_deref() {
        None => Mode::HostIntel,
        Some(token) => match Mode::from_token(token) {
            Some(mode) => mode,
            None => {
                debug!(token, "unrecognised mode token");
                console.warning("Invalid option. Using default option (-s for internetdb).")?;
                Mode::HostIntel
            }
        },
    };

    if mode != Mode::Nmap && !invocation.extra.is_empty() {
        debug!(extra = ?invocation.extra, "extra arguments are only forwarded to nmap");
    }

    match mode {
        Mode::HostIntel => intel::execute(ctx, console, ip).await?,
        Mode::Nmap => nmap::execute(ctx, console, ip, &invocation.extra).await?,
        Mode::Masscan => masscan::execute(ctx, console, ip).await?,
        Mode::Minecraft => minecraft::execute(ctx, console, ip).await?,
    }

    console.flush()
}
