//! Matchup extraction: counter lists keyed by header text.

use tracing::debug;

use super::dom::{self, DomDocument};
use crate::config;
use crate::domain::{catalog_key_for_name, Asset, MatchupList};

const FAVORABLE_HEADING: &str = "Counters";
const UNFAVORABLE_HEADING: &str = "Is countered by";

const MATCHUP_CAP: usize = 5;

/// Extract both counter lists. Each header lookup restarts from the
/// document root; a missing header yields an empty list for that side.
pub fn extract_matchups(doc: &DomDocument, version: &str) -> MatchupList {
    MatchupList {
        favorable: matchups_under(doc, FAVORABLE_HEADING, version),
        unfavorable: matchups_under(doc, UNFAVORABLE_HEADING, version),
    }
}

fn matchups_under(doc: &DomDocument, heading_text: &str, version: &str) -> Vec<Asset> {
    let Some(heading) = doc.find_heading_containing(heading_text) else {
        debug!(heading = heading_text, "no matchup section found");
        return Vec::new();
    };
    let Some(container) = dom::first_following(heading, "div") else {
        return Vec::new();
    };

    let mut matchups = Vec::new();
    for img in dom::select_within(container, "img") {
        let Some(alt) = img.value().attr("alt") else {
            continue;
        };
        let name = alt.trim();
        if name.is_empty() {
            continue;
        }

        // The listed names are not the query subject; each gets its own
        // catalog-key mapping before the portrait URL is built.
        let catalog_key = catalog_key_for_name(name);
        matchups.push(Asset::new(
            name,
            config::portrait_icon_url(version, &catalog_key),
        ));

        if matchups.len() >= MATCHUP_CAP {
            break;
        }
    }
    matchups
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "14.23.1";

    fn section(heading: &str, names: &[&str]) -> String {
        let imgs: String = names
            .iter()
            .map(|n| format!(r#"<img alt="{n}" src="x.png">"#))
            .collect();
        format!(r#"<h4>{heading}</h4><div>{imgs}</div>"#)
    }

    #[test]
    fn test_both_lists_extracted_independently() {
        let html = format!(
            "{}{}",
            section("Counters", &["Ahri", "Zed"]),
            section("Is countered by", &["Malzahar"]),
        );
        let matchups = extract_matchups(&DomDocument::parse(&html), VERSION);

        let favorable: Vec<_> = matchups.favorable.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(favorable, vec!["Ahri", "Zed"]);
        assert_eq!(matchups.unfavorable.len(), 1);
        assert_eq!(matchups.unfavorable[0].name, "Malzahar");
    }

    #[test]
    fn test_capped_at_five_entries() {
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let html = section("Counters", &names);
        let matchups = extract_matchups(&DomDocument::parse(&html), VERSION);
        assert_eq!(matchups.favorable.len(), 5);
        assert_eq!(matchups.favorable[4].name, "E");
    }

    #[test]
    fn test_display_names_get_their_own_catalog_mapping() {
        let html = section("Counters", &["Wukong", "Kog'Maw"]);
        let matchups = extract_matchups(&DomDocument::parse(&html), VERSION);

        assert_eq!(matchups.favorable[0].name, "Wukong");
        assert_eq!(
            matchups.favorable[0].icon,
            "https://ddragon.leagueoflegends.com/cdn/14.23.1/img/champion/MonkeyKing.png"
        );
        assert_eq!(
            matchups.favorable[1].icon,
            "https://ddragon.leagueoflegends.com/cdn/14.23.1/img/champion/KogMaw.png"
        );
    }

    #[test]
    fn test_images_without_names_are_skipped() {
        let html = r#"<h4>Counters</h4><div>
            <img src="decoration.png">
            <img alt="  " src="blank.png">
            <img alt="Ahri" src="ahri.png">
        </div>"#;
        let matchups = extract_matchups(&DomDocument::parse(html), VERSION);
        assert_eq!(matchups.favorable.len(), 1);
    }

    #[test]
    fn test_missing_sections_yield_empty_lists() {
        let doc = DomDocument::parse("<html><body><h4>Overview</h4></body></html>");
        let matchups = extract_matchups(&doc, VERSION);
        assert!(matchups.favorable.is_empty());
        assert!(matchups.unfavorable.is_empty());
    }
}
