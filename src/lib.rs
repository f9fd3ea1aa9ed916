//! # battlenet-rs
//!
//! An async Rust client for the Blizzard Battle.net World of Warcraft
//! Profile API, with helpers for the checks a raid leader actually wants:
//! weekly raid-lockout status and an enchant/gem audit of equipped gear.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 client-credentials grant with automatic
//!   token refresh; credentials from a TOML file or the environment
//! - **Profile API**: character summary, raid encounters, equipped items
//! - **Audit helpers**: "saved this reset" evaluation against the regional
//!   weekly reset, and enchant/gem checks against a seasonal baseline
//! - **Type Safety**: strongly-typed models for the API's wire formats
//! - **Async-first**: built on Tokio
//! - **Discord bot** (feature `bot`): prefix commands over the audit helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use battlenet_rs::{BlizzardClient, Credentials, Region};
//! use battlenet_rs::audit::audit_equipment;
//!
//! #[tokio::main]
//! async fn main() -> battlenet_rs::Result<()> {
//!     let client = BlizzardClient::authenticate(
//!         Credentials::from_file("client.toml")?,
//!         Region::Eu,
//!     ).await?;
//!
//!     let equipment = client.equipment()
//!         .get(&"argent-dawn".into(), &"thrall".into())
//!         .await?;
//!
//!     println!("{}", audit_equipment(&equipment).report());
//!     Ok(())
//! }
//! ```
//!
//! ## Lockout Check
//!
//! ```rust,no_run
//! use battlenet_rs::{BlizzardClient, Credentials, Region};
//! use battlenet_rs::audit::{lockout_status, no_data_message};
//! use battlenet_rs::models::Difficulty;
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> battlenet_rs::Result<()> {
//!     let client = BlizzardClient::authenticate(
//!         Credentials::from_env()?,
//!         Region::Eu,
//!     ).await?;
//!
//!     let raids = client.encounters()
//!         .raids(&"argent-dawn".into(), &"thrall".into())
//!         .await?;
//!
//!     let report = lockout_status(
//!         &raids,
//!         "The War Within",
//!         "Nerub-ar Palace",
//!         Difficulty::Heroic,
//!         client.region(),
//!         Utc::now(),
//!     )
//!     .map(|status| status.report())
//!     .unwrap_or_else(|| no_data_message("Nerub-ar Palace", Difficulty::Heroic));
//!
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod audit;
pub mod auth;
#[cfg(feature = "bot")]
pub mod bot;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session};
pub use client::{BlizzardClient, ClientConfig, RetryConfig};
pub use error::{Error, Result};
pub use models::{CharacterName, Locale, RealmSlug, Region};

/// Prelude module for convenient imports.
///
/// ```rust
/// use battlenet_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::audit::{
        audit_equipment, last_weekly_reset, lockout_status, no_data_message, FindingKind,
        GearAudit, LockoutStatus,
    };
    pub use crate::auth::{Credentials, Session};
    pub use crate::client::{BlizzardClient, ClientConfig, RetryConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        CharacterEquipment, CharacterName, CharacterSummary, Difficulty, Locale, RaidEncounters,
        RealmSlug, Region, SlotType,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_urls() {
        assert_eq!(Region::Eu.api_base_url(), "https://eu.api.blizzard.com");
        assert_eq!(Region::Us.profile_namespace(), "profile-us");
    }

    #[test]
    fn test_realm_slug_from_display_name() {
        let realm = RealmSlug::new("Twisting Nether");
        assert_eq!(realm.as_str(), "twisting-nether");
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials::new("id", "secret-value");
        assert!(!format!("{:?}", creds).contains("secret-value"));
    }
}
