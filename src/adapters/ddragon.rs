//! DDragon asset-catalog resolver.
//!
//! DDragon serves versioned JSON snapshots: a version list, the full rune
//! catalog (`runesReforged.json`, tree → slot → rune), and per-champion data
//! keyed by the catalog's case-sensitive champion key.

use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::AssetCatalog;
use crate::config;
use crate::domain::Asset;

/// HTTP resolver backed by the DDragon CDN.
pub struct DdragonCatalog {
    client: reqwest::Client,
    base_url: String,
}

/// One rune tree from `runesReforged.json`.
#[derive(Debug, Deserialize)]
struct RuneTree {
    slots: Vec<RuneSlot>,
}

#[derive(Debug, Deserialize)]
struct RuneSlot {
    runes: Vec<RuneNode>,
}

#[derive(Debug, Deserialize)]
struct RuneNode {
    id: i64,
    icon: String,
}

/// Wrapper shape of a per-champion data file.
#[derive(Debug, Deserialize)]
struct ChampionFile {
    data: HashMap<String, ChampionData>,
}

#[derive(Debug, Deserialize)]
struct ChampionData {
    spells: Vec<Spell>,
}

#[derive(Debug, Deserialize)]
struct Spell {
    name: String,
    image: SpellImage,
}

#[derive(Debug, Deserialize)]
struct SpellImage {
    full: String,
}

impl Default for DdragonCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DdragonCatalog {
    /// Create a resolver pointed at the production CDN.
    pub fn new() -> Self {
        Self::with_base_url(config::DDRAGON_BASE)
    }

    /// Create a resolver with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AssetCatalog for DdragonCatalog {
    async fn current_version(&self) -> Result<String> {
        let url = format!("{}/api/versions.json", self.base_url);
        let versions: Vec<String> = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch catalog version list")?
            .json()
            .await
            .context("Failed to parse catalog version list")?;

        versions
            .into_iter()
            .next()
            .context("Catalog version list is empty")
    }

    async fn rune_catalog(&self, version: &str) -> Result<HashMap<String, String>> {
        let url = format!(
            "{}/cdn/{}/data/en_US/runesReforged.json",
            self.base_url, version
        );
        let trees: Vec<RuneTree> = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch rune catalog")?
            .json()
            .await
            .context("Failed to parse rune catalog")?;

        let mut map = HashMap::new();
        for tree in trees {
            for slot in tree.slots {
                for rune in slot.runes {
                    map.insert(rune.id.to_string(), rune.icon);
                }
            }
        }
        debug!(runes = map.len(), version, "loaded rune catalog");
        Ok(map)
    }

    async fn ability_data(&self, version: &str, catalog_key: &str) -> Result<Vec<Asset>> {
        let url = format!(
            "{}/cdn/{}/data/en_US/champion/{}.json",
            self.base_url, version, catalog_key
        );
        let file: ChampionFile = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch champion data for '{catalog_key}'"))?
            .json()
            .await
            .with_context(|| format!("Failed to parse champion data for '{catalog_key}'"))?;

        let champion = file
            .data
            .get(catalog_key)
            .with_context(|| format!("Champion key '{catalog_key}' missing from data file"))?;

        anyhow::ensure!(
            champion.spells.len() >= 4,
            "Champion '{catalog_key}' has {} spells, expected 4",
            champion.spells.len()
        );

        // Spells arrive in fixed Q/W/E/R order, independent of level-up order.
        Ok(champion
            .spells
            .iter()
            .take(4)
            .map(|spell| {
                Asset::new(
                    spell.name.clone(),
                    config::spell_icon_url(version, &spell.image.full),
                )
            })
            .collect())
    }
}
