//! Adapter interfaces for the engine's external collaborators.
//!
//! The extraction engine consumes two capabilities: a document fetcher for
//! the build page and an asset catalog resolver for icon references. Both
//! are traits so tests can substitute fixtures for the network.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Asset;

pub mod ddragon;
pub mod leagueofgraphs;

pub use ddragon::DdragonCatalog;
pub use leagueofgraphs::LeagueOfGraphsFetcher;

/// Failure modes of the primary document fetch.
///
/// Any of these is terminal for the whole extraction — no partial report is
/// produced when the build page cannot be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("document not found (HTTP {0})")]
    NotFound(u16),

    #[error("document fetch timed out")]
    Timeout,

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Retrieves raw build-page markup for a normalized subject key.
///
/// Implementations own URL templating, request headers, and the transport
/// timeout; callers assume a bounded wait.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, subject_key: &str) -> Result<String, FetchError>;
}

/// Resolves catalog versions and icon references.
///
/// Every method here feeds a degraded-mode fallback: a failed lookup caps
/// out as empty icon fields in the report, never as an extraction error.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// Current catalog version token.
    async fn current_version(&self) -> Result<String>;

    /// Full rune catalog for a version, flattened to an id → icon-path map.
    async fn rune_catalog(&self, version: &str) -> Result<HashMap<String, String>>;

    /// A champion's four abilities in fixed Q/W/E/R order, icons resolved.
    async fn ability_data(&self, version: &str, catalog_key: &str) -> Result<Vec<Asset>>;
}
