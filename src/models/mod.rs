//! Data models for the Battle.net Profile API.
//!
//! This module contains all the strongly-typed data structures used to
//! interact with the Profile API. Models are organized by domain:
//!
//! - [`primitives`] - Core types like `Region`, `RealmSlug`, `CharacterName`
//! - [`enums`] - Enumeration types for difficulties, slots, qualities
//! - [`character`] - Character profile summary models
//! - [`encounters`] - Raid encounter and kill-progress models
//! - [`equipment`] - Equipped item, enchantment and socket models

pub mod primitives;
pub mod enums;
pub mod character;
pub mod encounters;
pub mod equipment;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use character::*;
pub use encounters::*;
pub use equipment::*;
