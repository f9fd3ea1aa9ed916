//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around the region, locale,
//! and character identifiers used in Profile API paths, so realm slugs and
//! character names cannot be mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Battle.net API region.
///
/// Determines both the API hostname and the profile namespace. The China
/// region uses a separate gateway and is not supported.
///
/// # Example
///
/// ```
/// use battlenet_rs::Region;
///
/// let region = Region::Eu;
/// assert_eq!(region.api_base_url(), "https://eu.api.blizzard.com");
/// assert_eq!(region.profile_namespace(), "profile-eu");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// North America
    Us,
    /// Europe
    #[default]
    Eu,
    /// Korea
    Kr,
    /// Taiwan
    Tw,
}

impl Region {
    /// Get the base URL for Profile API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Region::Us => "https://us.api.blizzard.com",
            Region::Eu => "https://eu.api.blizzard.com",
            Region::Kr => "https://kr.api.blizzard.com",
            Region::Tw => "https://tw.api.blizzard.com",
        }
    }

    /// Get the OAuth token endpoint for this region.
    ///
    /// Blizzard serves the client-credentials grant from a single global
    /// host for all supported regions.
    pub fn token_url(&self) -> &'static str {
        "https://oauth.battle.net/token"
    }

    /// Get the `namespace` query value for profile endpoints.
    pub fn profile_namespace(&self) -> &'static str {
        match self {
            Region::Us => "profile-us",
            Region::Eu => "profile-eu",
            Region::Kr => "profile-kr",
            Region::Tw => "profile-tw",
        }
    }

    /// Parse a region from its short code ("us", "eu", "kr", "tw").
    pub fn parse(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "kr" => Ok(Region::Kr),
            "tw" => Ok(Region::Tw),
            other => Err(crate::Error::InvalidInput(format!(
                "Unknown region: {}. Expected us, eu, kr or tw",
                other
            ))),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Us => write!(f, "us"),
            Region::Eu => write!(f, "eu"),
            Region::Kr => write!(f, "kr"),
            Region::Tw => write!(f, "tw"),
        }
    }
}

/// Response locale for localized field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// British English (the crate default)
    #[default]
    #[serde(rename = "en_GB")]
    EnGb,
    /// American English
    #[serde(rename = "en_US")]
    EnUs,
    /// German
    #[serde(rename = "de_DE")]
    DeDe,
    /// French
    #[serde(rename = "fr_FR")]
    FrFr,
    /// Korean
    #[serde(rename = "ko_KR")]
    KoKr,
    /// Traditional Chinese
    #[serde(rename = "zh_TW")]
    ZhTw,
}

impl Locale {
    /// Get the locale as the query-parameter string the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnGb => "en_GB",
            Locale::EnUs => "en_US",
            Locale::DeDe => "de_DE",
            Locale::FrFr => "fr_FR",
            Locale::KoKr => "ko_KR",
            Locale::ZhTw => "zh_TW",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A realm slug as used in Profile API paths.
///
/// Realm display names are normalized to the slug form the API expects:
/// lowercase, spaces and apostrophes collapsed to dashes
/// (`"Argent Dawn"` becomes `"argent-dawn"`).
///
/// # Example
///
/// ```
/// use battlenet_rs::RealmSlug;
///
/// let realm = RealmSlug::new("Argent Dawn");
/// assert_eq!(realm.as_str(), "argent-dawn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealmSlug(String);

impl RealmSlug {
    /// Create a realm slug, normalizing a display name if necessary.
    pub fn new(s: impl AsRef<str>) -> Self {
        let slug: String = s
            .as_ref()
            .trim()
            .to_lowercase()
            .chars()
            .filter_map(|c| match c {
                ' ' => Some('-'),
                '\'' => None,
                c => Some(c),
            })
            .collect();
        Self(slug)
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RealmSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RealmSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RealmSlug {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RealmSlug {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A character name as used in Profile API paths.
///
/// The API requires lowercase names in the URL path; display casing is
/// normalized on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a character name, lowercasing it for path use.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_lowercase())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CharacterName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
