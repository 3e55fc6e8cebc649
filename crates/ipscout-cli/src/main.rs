//! ipscout - IP reconnaissance from the command line.

use anyhow::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    ipscout_cli::run().await
}
