//! Rune extraction: opacity-selected icons partitioned by page position.

use std::collections::HashMap;

use scraper::ElementRef;
use tracing::debug;

use super::dom::{self, DomDocument};
use crate::config;
use crate::domain::{RuneEntry, RuneSelection};

/// Icons whose containing element is rendered above this opacity are the
/// selected runes; dimmer ones are the unpicked alternatives.
const SELECTED_OPACITY_THRESHOLD: f32 = 0.5;

const PRIMARY_CAP: usize = 4;
const SECONDARY_CAP: usize = 2;
const STATS_CAP: usize = 3;

/// A stats partition is emitted only when the page yields a full selection:
/// primary path, secondary pair, and shard row.
const STATS_MIN_TOTAL: usize = 9;

/// Stat shards are absent from the rune catalog; their icon files are fixed.
static STAT_SHARD_ICONS: &[(&str, &str)] = &[
    ("5008", "StatModsAdaptiveForceIcon.png"),
    ("5005", "StatModsAttackSpeedIcon.png"),
    ("5002", "StatModsArmorIcon.png"),
    ("5003", "StatModsMagicResIcon.png"),
    ("5001", "StatModsHealthScalingIcon.png"),
    ("5007", "StatModsCDRScalingIcon.png"),
];

/// Extract the selected runes from every overview table.
///
/// `rune_icons` is the catalog's id → icon-path map; when the catalog fetch
/// failed upstream it arrives empty, and every entry degrades to an empty
/// icon while names and ids stay populated.
///
/// The positional primary/secondary/stats split assumes the page lists
/// primary-path runes before secondary-path runes before stat shards in
/// document order. That ordering is an observed property of the source, not
/// a structural guarantee.
pub fn extract_runes(doc: &DomDocument, rune_icons: &HashMap<String, String>) -> RuneSelection {
    let mut candidates = Vec::new();

    for table in doc.select_all(".perksTableOverview") {
        for icon in dom::select_within(table, "img.requireTooltip") {
            if !is_selected(icon) {
                continue;
            }
            let name = dom::attr_or(icon, "alt", "Unknown").trim().to_string();
            let id = perk_id(icon);
            let resolved = id
                .as_deref()
                .map(|id| resolve_icon(id, rune_icons))
                .unwrap_or_default();
            candidates.push(RuneEntry {
                name,
                icon: resolved,
                id,
            });
        }
    }

    debug!(selected = candidates.len(), "selected rune candidates");
    partition(candidates)
}

/// Opacity of the icon's containing element read as selection state.
fn is_selected(icon: ElementRef<'_>) -> bool {
    let opacity = icon
        .parent()
        .and_then(ElementRef::wrap)
        .map(dom::opacity)
        .unwrap_or(1.0);
    opacity > SELECTED_OPACITY_THRESHOLD
}

/// Numeric rune id from a `perk-<id>-...` class name.
fn perk_id(icon: ElementRef<'_>) -> Option<String> {
    icon.value().classes().find_map(|class| {
        let rest = class.strip_prefix("perk-")?;
        let id = rest.split('-').next()?;
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    })
}

fn resolve_icon(id: &str, rune_icons: &HashMap<String, String>) -> String {
    if let Some(path) = rune_icons.get(id) {
        return config::rune_icon_url(path);
    }
    STAT_SHARD_ICONS
        .iter()
        .find(|(shard_id, _)| *shard_id == id)
        .map(|(_, file)| config::stat_shard_icon_url(file))
        .unwrap_or_default()
}

/// Positional split: first ≤4 primary, next ≤2 secondary, next ≤3 stats
/// (stats only when the total reaches [`STATS_MIN_TOTAL`]).
fn partition(candidates: Vec<RuneEntry>) -> RuneSelection {
    let total = candidates.len();
    let mut rest = candidates.into_iter();

    let primary: Vec<_> = rest.by_ref().take(PRIMARY_CAP).collect();
    let secondary: Vec<_> = rest.by_ref().take(SECONDARY_CAP).collect();
    let stats = if total >= STATS_MIN_TOTAL {
        Some(rest.take(STATS_CAP).collect())
    } else {
        None
    };

    RuneSelection {
        primary,
        secondary,
        stats,
    }
}
