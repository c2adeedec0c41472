//! The extraction engine: one build page in, one report out.
//!
//! Control flow per call: normalize the query, fetch the build page (the
//! only fatal step), resolve one catalog version for the whole report,
//! fetch the rune catalog and ability data concurrently (each with its own
//! degraded-mode fallback), then run the four section extractors over the
//! parsed document and assemble.
//!
//! Nothing here is cached or shared between calls; every input is read-only
//! once constructed and every output is fresh.

pub mod dom;
pub mod items;
pub mod matchups;
pub mod runes;
pub mod skills;

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::{AssetCatalog, DocumentFetcher, FetchError};
use crate::config;
use crate::domain::{Asset, BuildReport, Subject};
use dom::DomDocument;

/// Fatal extraction failures. Degraded catalog lookups and absent page
/// sections never surface here; they show up as empty fields in the report.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no build page found for '{0}'")]
    SubjectNotFound(String),

    #[error("transport failure fetching build page: {0}")]
    Transport(String),
}

/// The structured-extraction engine.
///
/// Holds the two external collaborators; all per-call state lives on the
/// stack of [`Extractor::extract`], so one instance serves concurrent calls.
pub struct Extractor {
    fetcher: Arc<dyn DocumentFetcher>,
    catalog: Arc<dyn AssetCatalog>,
}

impl Extractor {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, catalog: Arc<dyn AssetCatalog>) -> Self {
        Self { fetcher, catalog }
    }

    /// Produce a build report for a free-form champion query.
    ///
    /// Returns an error only when the build page itself cannot be
    /// retrieved; an extraction finding nothing on a retrieved page is a
    /// valid (if degenerate) success with empty sections.
    pub async fn extract(&self, raw_query: &str) -> Result<BuildReport, ExtractError> {
        let subject = Subject::normalize(raw_query);
        info!(subject = %subject, "extracting build report");

        let raw = self
            .fetcher
            .fetch(subject.as_str())
            .await
            .map_err(|e| match e {
                FetchError::NotFound(status) => {
                    warn!(status, subject = %subject, "build page not found");
                    ExtractError::SubjectNotFound(subject.as_str().to_string())
                }
                FetchError::Timeout => ExtractError::Transport("request timed out".to_string()),
                FetchError::Transport(message) => ExtractError::Transport(message),
            })?;

        if raw.trim().is_empty() {
            return Err(ExtractError::SubjectNotFound(subject.as_str().to_string()));
        }

        // One catalog version per report; icon URLs never mix versions.
        let version = match self.catalog.current_version().await {
            Ok(version) => version,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = config::FALLBACK_CATALOG_VERSION,
                    "catalog version lookup failed"
                );
                config::FALLBACK_CATALOG_VERSION.to_string()
            }
        };

        let (rune_icons, abilities) = self.catalog_data(&version, &subject).await;

        // The document parse is deliberately kept after the last await;
        // extractors then share the read-only tree.
        let doc = DomDocument::parse(&raw);
        let items = items::extract_items(&doc, &version);
        let runes = runes::extract_runes(&doc, &rune_icons);
        let skills = skills::extract_skills(&doc, &abilities);
        let matchups = matchups::extract_matchups(&doc, &version);

        let avatar_icon = config::avatar_icon_url(&subject);
        Ok(BuildReport {
            subject,
            avatar_icon,
            items,
            runes,
            skills,
            matchups,
        })
    }

    /// Fetch the rune catalog and the subject's ability data concurrently.
    ///
    /// Both depend only on the subject and version, not on the parsed page.
    /// A failure on either side degrades to an empty collection; the item
    /// and matchup extractors never wait on catalog availability anyway.
    async fn catalog_data(
        &self,
        version: &str,
        subject: &Subject,
    ) -> (HashMap<String, String>, Vec<Asset>) {
        let catalog_key = subject.catalog_key();
        let (rune_icons, abilities) = tokio::join!(
            self.catalog.rune_catalog(version),
            self.catalog.ability_data(version, &catalog_key),
        );

        let rune_icons = rune_icons.unwrap_or_else(|e| {
            warn!(error = %e, "rune catalog unavailable, rune icons will be empty");
            HashMap::new()
        });
        let abilities = abilities.unwrap_or_else(|e| {
            warn!(
                error = %e,
                key = %catalog_key,
                "ability data unavailable, skill icons will be empty"
            );
            Vec::new()
        });

        (rune_icons, abilities)
    }
}
