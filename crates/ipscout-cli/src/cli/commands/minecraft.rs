//! Minecraft Java server status from mcstatus.io.

use ipscout_core::MissingSection;
use std::io::{self, Write};

use super::Context;
use crate::education::Explain;
use crate::output::Console;

pub async fn execute<W: Write>(ctx: &Context, console: &mut Console<W>, ip: &str) -> io::Result<()> {
    if ctx.explain {
        Explain::minecraft(&ctx.client.endpoints().mcstatus, ip).render(console)?;
    }

    console.title("Running mc...")?;

    let status = match ctx.client.minecraft().java_status(ip).await {
        Ok(status) => status,
        Err(e) if e.is_decode_error() => {
            return console.error(&format!("Failed to parse mc output: {e}"));
        }
        Err(e) => return console.error(&format!("mc command failed: {e}")),
    };

    if status.online() == Some(false) {
        console.warning("Server reports offline")?;
    }

    // Sections are read in order and the first missing one ends the report.
    let Some(version) = section(console, status.version())? else {
        return Ok(());
    };
    console.key_value("Version", &version.name)?;

    let Some(players) = section(console, status.players())? else {
        return Ok(());
    };
    console.key_value("Players", &players.to_string())?;

    let Some(motd) = section(console, status.motd())? else {
        return Ok(());
    };
    console.key_value("MOTD", &motd.clean)
}

/// Report a missing section; `Ok(None)` tells the caller to stop
fn section<T, W: Write>(
    console: &mut Console<W>,
    extracted: Result<T, MissingSection>,
) -> io::Result<Option<T>> {
    match extracted {
        Ok(value) => Ok(Some(value)),
        Err(MissingSection(name)) => {
            console.error(&format!("Failed to parse {name} information"))?;
            Ok(None)
        }
    }
}
