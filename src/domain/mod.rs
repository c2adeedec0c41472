//! Data structures: subject identity and the build report.

pub mod report;
pub mod subject;

pub use report::{
    AbilityKey, Asset, BuildReport, ItemSet, MatchupList, Phase, RuneEntry, RuneSelection,
    SkillEntry,
};
pub use subject::{catalog_key_for_name, Subject};
