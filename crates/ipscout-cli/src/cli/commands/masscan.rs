//! Active scan with masscan; output is printed unchanged.

use ipscout_scan::Masscan;
use std::io::{self, Write};

use super::nmap::report_failure;
use super::Context;
use crate::education::Explain;
use crate::output::{spinner, Console};

pub async fn execute<W: Write>(ctx: &Context, console: &mut Console<W>, ip: &str) -> io::Result<()> {
    let masscan = Masscan::new(&ctx.scan);

    if ctx.explain {
        Explain::masscan(&ctx.scan.masscan_path, &masscan.args(ip)).render(console)?;
    }

    console.title("Running masscan...")?;

    let progress = spinner("masscan is scanning", ctx.progress);
    let outcome = masscan.run(ip).await;
    progress.finish_and_clear();

    match outcome {
        Ok(output) => console.plain(&output.combined()),
        Err(e) => report_failure(console, "masscan", &e),
    }
}
