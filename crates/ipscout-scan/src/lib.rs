//! Local scanner integration for ipscout.
//!
//! Runs nmap or masscan as a subprocess and turns the captured output into
//! [`ScanOutput`] or, for nmap, a parsed [`ipscout_core::ScanResult`].

#![doc(html_root_url = "https://docs.rs/ipscout-scan/0.3.0")]

pub mod masscan;
pub mod nmap;
mod scanner;

pub use masscan::Masscan;
pub use nmap::{parse_nmap_xml, Nmap};
pub use scanner::{run_tool, PortSpec, ScanConfig, ScanOutput};
