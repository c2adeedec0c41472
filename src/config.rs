//! Static endpoint configuration and icon-URL templates.
//!
//! The build site and the asset catalog are independently versioned; only
//! catalog icon paths carry a catalog version token. Avatar tiles live
//! outside the versioned namespace and never take one. Everything here is
//! fixed configuration shared read-only across extractions.

use std::time::Duration;

use crate::domain::Subject;

/// Base URL for champion build pages.
pub const BUILD_PAGE_BASE: &str = "https://www.leagueofgraphs.com/champions/builds";

/// Base URL for the DDragon asset catalog.
pub const DDRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";

/// Last-known-good catalog version, used when the version endpoint fails.
pub const FALLBACK_CATALOG_VERSION: &str = "14.23.1";

/// Bounded wait enforced on the primary document fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// The build site rejects default client user agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub fn item_icon_url(version: &str, item_id: &str) -> String {
    format!("{DDRAGON_BASE}/cdn/{version}/img/item/{item_id}.png")
}

/// Rune icons are addressed by catalog-relative path, not by version.
pub fn rune_icon_url(icon_path: &str) -> String {
    format!("{DDRAGON_BASE}/cdn/img/{icon_path}")
}

pub fn stat_shard_icon_url(file_name: &str) -> String {
    format!("{DDRAGON_BASE}/cdn/img/perk-images/StatMods/{file_name}")
}

pub fn spell_icon_url(version: &str, file_name: &str) -> String {
    format!("{DDRAGON_BASE}/cdn/{version}/img/spell/{file_name}")
}

pub fn portrait_icon_url(version: &str, catalog_key: &str) -> String {
    format!("{DDRAGON_BASE}/cdn/{version}/img/champion/{catalog_key}.png")
}

/// Avatar tiles are keyed by the capitalized site key, outside the versioned
/// catalog namespace.
pub fn avatar_icon_url(subject: &Subject) -> String {
    format!(
        "{DDRAGON_BASE}/cdn/img/champion/tiles/{}_0.jpg",
        subject.capitalized()
    )
}
