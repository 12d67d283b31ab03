//! Links to third-party card reference sites, derived from the card name and faction.

use crate::model::{Card, ExternalInfoProvider};

const HEARTHHEAD_ICON: &str = "https://imgur.com/axxMNuA.png";
const HEARTHHEAD_CARDS: &str = "https://www.hearthhead.com/cards";
const ICY_VEINS_ICON: &str = "https://i.imgur.com/Q634fnZ.png";
const ICY_VEINS_CARDS: &str = "https://icy-veins.com/hearthstone/cards";
const NEUTRAL: &str = "neutral";

/// Returns the Hearthhead and Icy Veins entries for `card`, in that order.
#[must_use]
pub fn external_info_providers(card: &Card) -> [ExternalInfoProvider; 2] {
    let faction = card.faction_id.as_deref().unwrap_or(NEUTRAL).to_lowercase();

    [
        ExternalInfoProvider {
            name: "Hearthhead".to_owned(),
            icon: HEARTHHEAD_ICON.to_owned(),
            url: format!("{HEARTHHEAD_CARDS}/{}", whitespace_slug(&card.name)),
        },
        ExternalInfoProvider {
            name: "Icy Veins".to_owned(),
            icon: ICY_VEINS_ICON.to_owned(),
            url: format!("{ICY_VEINS_CARDS}/{faction}/{}", alphanumeric_slug(&card.name)),
        },
    ]
}

/// Each run of whitespace becomes a single `-`.
fn whitespace_slug(name: &str) -> String {
    let init = (String::with_capacity(name.len()), false);
    let (slug, _) = name.chars().fold(init, |(mut slug, in_run), c| {
        let is_space = c.is_whitespace();
        if !is_space {
            slug.push(c);
        } else if !in_run {
            slug.push('-');
        }
        (slug, is_space)
    });
    slug.to_lowercase()
}

/// Each character outside `[A-Za-z0-9]` becomes one `-`.
fn alphanumeric_slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}
