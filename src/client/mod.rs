//! HTTP client and service layer for the Battle.net Profile API.
//!
//! This module provides the main entry point [`BlizzardClient`] for
//! interacting with the Profile API.
//!
//! # Example
//!
//! ```no_run
//! use battlenet_rs::{BlizzardClient, Credentials, Region};
//!
//! # async fn example() -> battlenet_rs::Result<()> {
//! let client = BlizzardClient::authenticate(
//!     Credentials::from_file("client.toml")?,
//!     Region::Eu,
//! ).await?;
//!
//! let raids = client.encounters()
//!     .raids(&"argent-dawn".into(), &"thrall".into())
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, RetryConfig};
pub use http::BlizzardClient;
pub(crate) use http::ClientInner;
