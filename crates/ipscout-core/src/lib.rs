//! Core types and errors shared across the ipscout crates.
//!
//! - **Types**: response records for ipinfo, `InternetDB` and mcstatus, plus the
//!   host/port model decoded from nmap XML output
//! - **Errors**: the [`ReconError`] taxonomy used by every handler
//!
//! # Example
//!
//! ```rust,ignore
//! use ipscout_core::{HostIntel, Result};
//!
//! fn show(intel: &HostIntel) -> Result<()> {
//!     println!("Ports: {}", intel.ports_display());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/ipscout-core/0.3.0")]

mod error;
pub mod types;

pub use error::{ReconError, Result};
pub use types::*;
