//! Item extraction: icon rows classified into purchase phases.

use scraper::ElementRef;
use tracing::debug;

use super::dom::{self, DomDocument};
use crate::config;
use crate::domain::{Asset, ItemSet, Phase};

/// Case-insensitive heading keywords mapped to phases. Headings matching
/// none of these are skipped.
static PHASE_KEYWORDS: &[(&str, Phase)] = &[
    ("starting", Phase::Starting),
    ("core", Phase::Core),
    ("end game", Phase::Final),
    ("final", Phase::Final),
    ("boots", Phase::Boots),
];

/// Minimum icon count at which a core row's first icon is treated as an
/// early component rather than a true core item.
const CORE_EARLY_SPLIT_AT: usize = 4;

/// Extract recommended items from every recognized icon row.
///
/// Never fails: a page with no recognizable rows yields an [`ItemSet`] with
/// every phase empty.
pub fn extract_items(doc: &DomDocument, version: &str) -> ItemSet {
    let mut items = ItemSet::default();

    let rows = doc.select_all("div.iconsRow");
    debug!(rows = rows.len(), "scanning item rows");

    for row in rows {
        let Some(heading) = dom::nearest_preceding_heading(row) else {
            continue;
        };
        let heading_text = dom::text_of(heading).to_lowercase();
        let Some(phase) = classify(&heading_text) else {
            debug!(heading = %heading_text, "unrecognized item row heading");
            continue;
        };

        let mut icons = dom::select_within(row, "img.requireTooltip");

        // A core row listing four or more icons leads with a cheap component;
        // reclassify that first icon into the synthetic early phase.
        if phase == Phase::Core && icons.len() >= CORE_EARLY_SPLIT_AT {
            let first = icons.remove(0);
            if let Some(asset) = item_asset(first, version) {
                items.push(Phase::Early, asset);
            }
        }

        for icon in icons {
            if let Some(asset) = item_asset(icon, version) {
                items.push(phase, asset);
                if items.is_full(phase) {
                    break;
                }
            }
        }
    }

    items
}

fn classify(heading: &str) -> Option<Phase> {
    PHASE_KEYWORDS
        .iter()
        .find(|(keyword, _)| heading.contains(keyword))
        .map(|(_, phase)| *phase)
}

/// Read one icon's tooltip-encoded item id and display name. Icons lacking
/// either are skipped.
fn item_asset(icon: ElementRef<'_>, version: &str) -> Option<Asset> {
    let tooltip = icon.value().attr("tooltip-var")?;
    if !tooltip.contains("item-") {
        return None;
    }
    let item_id = tooltip.replace("item-", "");

    let name = icon.value().attr("alt")?.trim();
    if name.is_empty() {
        return None;
    }

    Some(Asset::new(name, config::item_icon_url(version, &item_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "14.23.1";

    fn img(id: u32, name: &str) -> String {
        format!(r#"<img class="requireTooltip" tooltip-var="item-{id}" alt="{name}">"#)
    }

    #[test]
    fn test_no_rows_yields_all_phases_empty() {
        let doc = DomDocument::parse("<html><body><p>nothing here</p></body></html>");
        let items = extract_items(&doc, VERSION);
        assert!(items.is_empty());
        assert!(items.starting.is_empty());
        assert!(items.boots.is_empty());
    }

    #[test]
    fn test_rows_classified_by_nearest_heading() {
        let html = format!(
            r#"<h3>Starting Items</h3><div class="iconsRow">{}{}</div>
               <h3>Boots</h3><div class="iconsRow">{}</div>
               <h3>End game items</h3><div class="iconsRow">{}</div>"#,
            img(1055, "Doran's Blade"),
            img(2003, "Health Potion"),
            img(3006, "Berserker's Greaves"),
            img(3031, "Infinity Edge"),
        );
        let items = extract_items(&DomDocument::parse(&html), VERSION);

        assert_eq!(items.starting.len(), 2);
        assert_eq!(items.starting[0].name, "Doran's Blade");
        assert_eq!(
            items.starting[0].icon,
            "https://ddragon.leagueoflegends.com/cdn/14.23.1/img/item/1055.png"
        );
        assert_eq!(items.boots.len(), 1);
        assert_eq!(items.final_items.len(), 1);
        assert!(items.core.is_empty());
        assert!(items.early.is_empty());
    }

    #[test]
    fn test_core_row_with_four_icons_reclassifies_first_as_early() {
        let html = format!(
            r#"<h3>Core Items</h3><div class="iconsRow">{}{}{}{}</div>"#,
            img(3057, "Sheen"),
            img(3078, "Trinity Force"),
            img(3074, "Ravenous Hydra"),
            img(6333, "Death's Dance"),
        );
        let items = extract_items(&DomDocument::parse(&html), VERSION);

        assert_eq!(items.early.len(), 1);
        assert_eq!(items.early[0].name, "Sheen");
        let core_names: Vec<_> = items.core.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            core_names,
            vec!["Trinity Force", "Ravenous Hydra", "Death's Dance"]
        );
    }

    #[test]
    fn test_core_row_with_three_icons_is_not_split() {
        let html = format!(
            r#"<h3>Core Items</h3><div class="iconsRow">{}{}{}</div>"#,
            img(3078, "Trinity Force"),
            img(3074, "Ravenous Hydra"),
            img(6333, "Death's Dance"),
        );
        let items = extract_items(&DomDocument::parse(&html), VERSION);
        assert!(items.early.is_empty());
        assert_eq!(items.core.len(), 3);
    }

    #[test]
    fn test_phase_cap_truncates_remaining_icons() {
        let html = format!(
            r#"<h3>Final build</h3><div class="iconsRow">{}{}{}{}{}</div>"#,
            img(1, "One"),
            img(2, "Two"),
            img(3, "Three"),
            img(4, "Four"),
            img(5, "Five"),
        );
        let items = extract_items(&DomDocument::parse(&html), VERSION);
        assert_eq!(items.final_items.len(), 3);
        assert_eq!(items.final_items[2].name, "Three");
    }

    #[test]
    fn test_icons_without_id_or_name_are_skipped() {
        let html = format!(
            r#"<h3>Starting Items</h3><div class="iconsRow">
                 <img class="requireTooltip" alt="No Tooltip">
                 <img class="requireTooltip" tooltip-var="champion-12" alt="Wrong Kind">
                 <img class="requireTooltip" tooltip-var="item-2003" alt="">
                 {}
               </div>"#,
            img(1055, "Doran's Blade"),
        );
        let items = extract_items(&DomDocument::parse(&html), VERSION);
        assert_eq!(items.starting.len(), 1);
        assert_eq!(items.starting[0].name, "Doran's Blade");
    }

    #[test]
    fn test_duplicate_names_deduplicated_within_phase() {
        let html = format!(
            r#"<h3>Starting Items</h3><div class="iconsRow">{}{}</div>
               <h3>Starting Items</h3><div class="iconsRow">{}</div>"#,
            img(2003, "Health Potion"),
            img(2003, "Health Potion"),
            img(2003, "Health Potion"),
        );
        let items = extract_items(&DomDocument::parse(&html), VERSION);
        assert_eq!(items.starting.len(), 1);
    }

    #[test]
    fn test_unrecognized_heading_is_skipped() {
        let html = format!(
            r#"<h3>Situational picks</h3><div class="iconsRow">{}</div>"#,
            img(3031, "Infinity Edge"),
        );
        let items = extract_items(&DomDocument::parse(&html), VERSION);
        assert!(items.is_empty());
    }
}
