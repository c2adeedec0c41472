//! Subject identity and name normalization.
//!
//! Two independent naming schemes are in play: the build site keys its pages
//! by a lowercase, punctuation-stripped name, while the asset catalog keys
//! champion data by a case-sensitive identifier that sometimes differs
//! entirely (Wukong's catalog entry is `MonkeyKing`). Both alias tables live
//! here so every lookup goes through the same mapping.

use serde::{Deserialize, Serialize};

/// Build-site aliases applied after lowercasing and punctuation stripping.
static SITE_ALIASES: &[(&str, &str)] = &[
    ("nunu&willump", "nunu"),
    ("renataglasc", "renata"),
];

/// Catalog aliases keyed by the normalized site key. Entries absent from this
/// table fall back to simple first-letter capitalization.
static CATALOG_ALIASES: &[(&str, &str)] = &[
    ("wukong", "MonkeyKing"),
    ("kogmaw", "KogMaw"),
    ("reksai", "RekSai"),
];

/// Catalog aliases keyed by a punctuation-stripped display name, used when
/// the name comes from page content (matchup lists) rather than the query.
static DISPLAY_NAME_ALIASES: &[(&str, &str)] = &[
    ("Wukong", "MonkeyKing"),
    ("RenataGlasc", "Renata"),
    ("Nunu&Willump", "Nunu"),
    ("KogMaw", "KogMaw"),
    ("RekSai", "RekSai"),
];

/// Canonical lowercase key identifying the champion being queried.
///
/// Construction always goes through [`Subject::normalize`], so a `Subject`
/// holds the exact key both the build site and the avatar path expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    /// Normalize free-form user input into the canonical site key.
    ///
    /// Total function: lowercases, strips spaces/apostrophes/periods, then
    /// applies the site alias table. Idempotent — normalizing an already
    /// normalized key returns it unchanged.
    pub fn normalize(raw: &str) -> Self {
        let stripped: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '\'' | '.'))
            .collect();
        let key = SITE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == stripped)
            .map(|(_, canonical)| (*canonical).to_string())
            .unwrap_or(stripped);
        Subject(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The case-sensitive key the asset catalog uses for this champion.
    pub fn catalog_key(&self) -> String {
        CATALOG_ALIASES
            .iter()
            .find(|(site, _)| *site == self.0)
            .map(|(_, catalog)| (*catalog).to_string())
            .unwrap_or_else(|| capitalize(&self.0))
    }

    /// First-letter-capitalized form, used by the unversioned avatar tiles.
    pub fn capitalized(&self) -> String {
        capitalize(&self.0)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build a catalog key from a display name found in page content.
///
/// Matchup entries carry their own names ("Kog'Maw", "Nunu & Willump"),
/// which are not the query subject, so this applies the catalog mapping
/// independently: strip punctuation keeping case, then alias.
pub fn catalog_key_for_name(display_name: &str) -> String {
    let stripped: String = display_name
        .chars()
        .filter(|c| !matches!(c, ' ' | '\'' | '.'))
        .collect();
    DISPLAY_NAME_ALIASES
        .iter()
        .find(|(name, _)| *name == stripped)
        .map(|(_, catalog)| (*catalog).to_string())
        .unwrap_or(stripped)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(Subject::normalize("Kog'Maw").as_str(), "kogmaw");
        assert_eq!(Subject::normalize("Dr. Mundo").as_str(), "drmundo");
        assert_eq!(Subject::normalize("AHRI").as_str(), "ahri");
    }

    #[test]
    fn test_normalize_applies_site_aliases() {
        assert_eq!(Subject::normalize("Nunu & Willump").as_str(), "nunu");
        assert_eq!(Subject::normalize("Renata Glasc").as_str(), "renata");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Nunu & Willump", "Kog'Maw", "Wukong", "renata", "x Y z"] {
            let once = Subject::normalize(raw);
            let twice = Subject::normalize(once.as_str());
            assert_eq!(once, twice, "normalization not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_catalog_key_aliases() {
        assert_eq!(Subject::normalize("Wukong").catalog_key(), "MonkeyKing");
        assert_eq!(Subject::normalize("Kog'Maw").catalog_key(), "KogMaw");
        assert_eq!(Subject::normalize("Rek'Sai").catalog_key(), "RekSai");
    }

    #[test]
    fn test_catalog_key_default_capitalization() {
        assert_eq!(Subject::normalize("ahri").catalog_key(), "Ahri");
        assert_eq!(Subject::normalize("Miss Fortune").catalog_key(), "Missfortune");
    }

    #[test]
    fn test_display_name_catalog_keys() {
        assert_eq!(catalog_key_for_name("Wukong"), "MonkeyKing");
        assert_eq!(catalog_key_for_name("Kog'Maw"), "KogMaw");
        assert_eq!(catalog_key_for_name("Nunu & Willump"), "Nunu");
        assert_eq!(catalog_key_for_name("Ahri"), "Ahri");
    }

    #[test]
    fn test_capitalized_for_avatar() {
        assert_eq!(Subject::normalize("wukong").capitalized(), "Wukong");
        assert_eq!(Subject::normalize("").capitalized(), "");
    }
}
