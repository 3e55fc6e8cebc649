//! # ipscout-cli
//!
//! Command-line IP reconnaissance.
//!
//! ## Features
//!
//! - **Geolocation**: country and organization from ipinfo.io, shown for every run
//! - **Host intel**: open ports, tags, CVEs and CPEs from Shodan `InternetDB`
//! - **Minecraft status**: version, players and MOTD from mcstatus.io
//! - **Active scans**: nmap (top 1000 ports) and masscan (all ports)
//! - **Explain mode**: `--explain` describes each step before it runs

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
