//! Host intel: passive scan data from Shodan `InternetDB`.

use std::io::{self, Write};

use super::Context;
use crate::education::Explain;
use crate::output::Console;

pub async fn execute<W: Write>(ctx: &Context, console: &mut Console<W>, ip: &str) -> io::Result<()> {
    if ctx.explain {
        Explain::host_intel(&ctx.client.endpoints().internetdb, ip).render(console)?;
    }

    console.title("Querying...")?;

    let intel = match ctx.client.internetdb().host(ip).await {
        Ok(intel) => intel,
        Err(e) => return console.error(&format!("InternetDB query failed: {e}")),
    };

    for (key, value) in intel.fields() {
        console.key_value(key, &value)?;
    }

    Ok(())
}
