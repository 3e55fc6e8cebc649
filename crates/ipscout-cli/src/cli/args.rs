//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when the IP address is missing
pub const USAGE: &str =
    "Usage: ipscout <ip address> [options: -n (nmap), -ma (masscan), -m (minecraft), -s (internetdb), default: -s]";

/// Quick IP reconnaissance from the command line
///
/// Always shows geolocation first (needs `IPINFO_API_KEY`), then runs one mode:
///
///   -s   `InternetDB` host intel (default)
///   -n   nmap top-1000 port scan; further arguments go to nmap
///   -ma  masscan full port range
///   -m   Minecraft server status
#[derive(Parser, Debug)]
#[command(name = "ipscout")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Disable colored output (also honoured: `NO_COLOR`)
    #[arg(long)]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Explain what each step does before running it
    #[arg(long)]
    pub explain: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// IP address (or hostname) to investigate
    pub ip: Option<String>,

    /// Mode token followed by extra scanner arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "MODE [ARGS]")]
    pub rest: Vec<String>,
}

/// What to run after geolocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `InternetDB` lookup (`-s`)
    HostIntel,
    /// nmap scan (`-n`)
    Nmap,
    /// masscan scan (`-ma`)
    Masscan,
    /// Minecraft status (`-m`)
    Minecraft,
}

impl Mode {
    /// Map a mode token; `None` for anything unrecognised
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "-s" | "" => Some(Self::HostIntel),
            "-n" => Some(Self::Nmap),
            "-ma" => Some(Self::Masscan),
            "-m" => Some(Self::Minecraft),
            _ => None,
        }
    }
}

/// The resolved invocation: target, requested mode token and extra args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Target address, forwarded without validation
    pub ip: String,
    /// Raw mode token, if one was given
    pub mode: Option<String>,
    /// Arguments after the mode token
    pub extra: Vec<String>,
}

impl Invocation {
    /// Split the positional arguments; `None` when the IP address is missing
    #[must_use]
    pub fn from_cli(ip: Option<String>, rest: Vec<String>) -> Option<Self> {
        let ip = ip?;
        let mut rest = rest.into_iter();
        let mode = rest.next();
        Some(Self {
            ip,
            mode,
            extra: rest.collect(),
        })
    }
}
