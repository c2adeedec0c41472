//! Report types produced by one extraction.
//!
//! A [`BuildReport`] is assembled fresh per `extract()` call and never
//! mutated afterwards. Unresolved icons are the empty string, never null —
//! callers can rely on every `icon` field being a (possibly empty) string.

use serde::{Deserialize, Serialize};

use super::subject::Subject;

/// A named, optionally icon-resolved reference.
///
/// `icon` is empty when resolution failed; that is a valid state, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Purchase-order bucket for recommended items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Early,
    Core,
    Final,
    Boots,
}

impl Phase {
    /// Maximum number of items kept per phase.
    pub fn cap(self) -> usize {
        match self {
            Phase::Boots => 1,
            _ => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Starting => "starting",
            Phase::Early => "early",
            Phase::Core => "core",
            Phase::Final => "final",
            Phase::Boots => "boots",
        }
    }
}

/// Recommended items grouped by phase, in page order (purchase priority).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemSet {
    pub starting: Vec<Asset>,
    /// Synthetic phase: a cheap component listed ahead of the true core
    /// items. Omitted from serialization when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub early: Vec<Asset>,
    pub core: Vec<Asset>,
    #[serde(rename = "final")]
    pub final_items: Vec<Asset>,
    pub boots: Vec<Asset>,
}

impl ItemSet {
    pub fn phase(&self, phase: Phase) -> &[Asset] {
        match phase {
            Phase::Starting => &self.starting,
            Phase::Early => &self.early,
            Phase::Core => &self.core,
            Phase::Final => &self.final_items,
            Phase::Boots => &self.boots,
        }
    }

    fn phase_mut(&mut self, phase: Phase) -> &mut Vec<Asset> {
        match phase {
            Phase::Starting => &mut self.starting,
            Phase::Early => &mut self.early,
            Phase::Core => &mut self.core,
            Phase::Final => &mut self.final_items,
            Phase::Boots => &mut self.boots,
        }
    }

    pub fn is_full(&self, phase: Phase) -> bool {
        self.phase(phase).len() >= phase.cap()
    }

    /// Append an item to a phase, enforcing the phase cap and rejecting
    /// duplicate display names within the phase.
    pub fn push(&mut self, phase: Phase, asset: Asset) {
        if self.is_full(phase) {
            return;
        }
        let slot = self.phase_mut(phase);
        if slot.iter().any(|a| a.name == asset.name) {
            return;
        }
        slot.push(asset);
    }

    pub fn is_empty(&self) -> bool {
        self.starting.is_empty()
            && self.early.is_empty()
            && self.core.is_empty()
            && self.final_items.is_empty()
            && self.boots.is_empty()
    }
}

/// One selected rune: the asset plus its raw numeric id.
///
/// The id is kept for the stat-shard fallback lookup and is `None` when the
/// page markup carried no parseable `perk-<id>` class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneEntry {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub id: Option<String>,
}

/// Selected runes partitioned by page position.
///
/// `stats` is present only when at least nine selected candidates were found
/// (a full primary path, secondary pair, and shard row).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuneSelection {
    pub primary: Vec<RuneEntry>,
    pub secondary: Vec<RuneEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<RuneEntry>>,
}

/// The four ability slots, in the catalog's fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityKey {
    Q,
    W,
    E,
    R,
}

impl AbilityKey {
    /// Parse an exact single-letter token; anything else is not an ability.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "Q" => Some(AbilityKey::Q),
            "W" => Some(AbilityKey::W),
            "E" => Some(AbilityKey::E),
            "R" => Some(AbilityKey::R),
            _ => None,
        }
    }

    /// Position of this key in the catalog's ability list (always Q/W/E/R).
    pub fn slot(self) -> usize {
        match self {
            AbilityKey::Q => 0,
            AbilityKey::W => 1,
            AbilityKey::E => 2,
            AbilityKey::R => 3,
        }
    }
}

/// One step of the level-up order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub key: AbilityKey,
    #[serde(default)]
    pub icon: String,
}

/// Favorable and unfavorable matchups, each capped at five entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupList {
    pub favorable: Vec<Asset>,
    pub unfavorable: Vec<Asset>,
}

/// The normalized result of one extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub subject: Subject,
    #[serde(rename = "avatarIcon")]
    pub avatar_icon: String,
    pub items: ItemSet,
    pub runes: RuneSelection,
    pub skills: Vec<SkillEntry>,
    pub matchups: MatchupList,
}
