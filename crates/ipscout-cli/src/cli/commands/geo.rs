//! Geolocation: country and organization from ipinfo.io.

use ipscout_core::ReconError;
use std::io::{self, Write};

use super::Context;
use crate::education::Explain;
use crate::output::Console;

pub async fn execute<W: Write>(ctx: &Context, console: &mut Console<W>, ip: &str) -> io::Result<()> {
    console.title(ip)?;

    if ctx.explain {
        Explain::geo(&ctx.client.endpoints().ipinfo, ip).render(console)?;
    }

    match ctx.client.geo().lookup(ip).await {
        Ok(geo) => {
            console.key_value("Country", &geo.country)?;
            console.key_value("Organization", &geo.org)?;
            if geo.bogon {
                console.info("Bogon address: private or reserved, no public location")?;
            }
        }
        Err(ReconError::MissingApiKey { var }) => print_remediation(console, var)?,
        Err(e) => console.error(&format!("ipinfo query failed: {e}"))?,
    }

    Ok(())
}

/// How to set the token, for the three common shells
fn print_remediation<W: Write>(console: &mut Console<W>, var: &str) -> io::Result<()> {
    console.error(&format!("Error: {var} is not set."))?;
    console.warning(&format!("Please set the {var} environment variable:"))?;
    console.plain("  For Bash (Linux/macOS):")?;
    console.plain(&format!("    export {var}=your_api_key_here"))?;
    console.plain("  For Command Prompt (Windows):")?;
    console.plain(&format!("    set {var}=your_api_key_here"))?;
    console.plain("  For PowerShell (Windows):")?;
    console.plain(&format!("    $env:{var}=\"your_api_key_here\""))
}
