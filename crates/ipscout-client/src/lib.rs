//! HTTP client for the services ipscout queries.
//!
//! [`ReconClient`] wraps one `reqwest` client and exposes one accessor per
//! service: [`ReconClient::geo`], [`ReconClient::internetdb`] and
//! [`ReconClient::minecraft`].

#![doc(html_root_url = "https://docs.rs/ipscout-client/0.3.0")]

mod client;
mod config;
pub mod api;

pub use client::{ReconClient, ReconClientBuilder};
pub use config::*;
pub use ipscout_core::{ReconError, Result};
