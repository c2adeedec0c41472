//! buildscout - structured champion-build extraction
//!
//! Turns a loosely-structured, versioned build page into a normalized,
//! strongly-typed [`BuildReport`]: recommended items, selected runes,
//! skill level-up order, and matchup lists.
//!
//! # Architecture
//!
//! The engine consumes two external collaborators behind traits:
//! - [`DocumentFetcher`]: retrieves raw build-page markup
//! - [`AssetCatalog`]: resolves catalog versions and icon references
//!
//! Failure handling is three-tiered:
//! - Fatal: the build page is unreachable or absent; no report is produced
//! - Degraded: a catalog lookup failed; icons are empty strings
//! - Absent section: a markup pattern was not found; the section is empty
//!
//! # Modules
//!
//! - `adapters`: HTTP implementations of the collaborator traits
//! - `domain`: Subject normalization and report types
//! - `extract`: DOM query engine and the four section extractors
//! - `cli`: Command-line interface

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod extract;

// Re-export main types at crate root for convenience
pub use adapters::{AssetCatalog, DocumentFetcher, FetchError};
pub use domain::{
    AbilityKey, Asset, BuildReport, ItemSet, MatchupList, Phase, RuneEntry, RuneSelection,
    SkillEntry, Subject,
};
pub use extract::{ExtractError, Extractor};
