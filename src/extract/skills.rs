//! Skill-order extraction: level-up key tokens paired with ability icons.

use tracing::debug;

use super::dom::{self, DomDocument};
use crate::domain::{AbilityKey, Asset, SkillEntry};

/// Heading text marking the level-up order section.
const SKILL_ORDER_HEADING: &str = "Skill Order";

/// Tokens are taken positionally, first four in document order, repeats
/// included.
const SKILL_ORDER_CAP: usize = 4;

/// Extract the level-up order and pair each key with its ability icon.
///
/// `abilities` is the catalog's fixed Q/W/E/R list for the subject; when the
/// catalog lookup failed upstream it arrives empty and every entry carries
/// an empty icon. A page without the section yields an empty order.
pub fn extract_skills(doc: &DomDocument, abilities: &[Asset]) -> Vec<SkillEntry> {
    let Some(heading) = doc.find_heading_containing(SKILL_ORDER_HEADING) else {
        debug!("no skill order section found");
        return Vec::new();
    };
    let Some(container) = dom::first_following(heading, "div") else {
        return Vec::new();
    };

    let mut order = Vec::new();
    for spell in dom::select_within(container, ".championSpell") {
        if order.len() >= SKILL_ORDER_CAP {
            break;
        }
        let token = dom::text_of(spell);
        if let Some(key) = AbilityKey::parse(token.as_str()) {
            let icon = abilities
                .get(key.slot())
                .map(|ability| ability.icon.clone())
                .unwrap_or_default();
            order.push(SkillEntry { key, icon });
        }
    }
    order
}
