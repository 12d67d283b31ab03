//! The fixed set of playable factions.

use crate::model::Faction;
use std::borrow::Cow;

const fn faction(id: &'static str, name: &'static str) -> Faction {
    Faction { id: Cow::Borrowed(id), name: Cow::Borrowed(name) }
}

/// Every faction, in display order.
pub static FACTIONS: [Faction; 9] = [
    faction("DRUID", "Druid"),
    faction("HUNTER", "Hunter"),
    faction("MAGE", "Mage"),
    faction("PALADIN", "Paladin"),
    faction("PRIEST", "Priest"),
    faction("ROGUE", "Rogue"),
    faction("SHAMAN", "Shaman"),
    faction("WARLOCK", "Warlock"),
    faction("WARRIOR", "Warrior"),
];

#[must_use]
pub fn factions() -> &'static [Faction] {
    &FACTIONS
}

/// Looks up a faction by its canonical upper-case id.
#[must_use]
pub fn faction_by_id(id: &str) -> Option<&'static Faction> {
    FACTIONS.iter().find(|faction| faction.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_factions_in_order() {
        let ids: Vec<&str> = factions().iter().map(|f| f.id.as_ref()).collect();

        assert_eq!(
            ids,
            [
                "DRUID", "HUNTER", "MAGE", "PALADIN", "PRIEST", "ROGUE", "SHAMAN", "WARLOCK",
                "WARRIOR"
            ]
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(faction_by_id("WARLOCK").map(|f| f.name.as_ref()), Some("Warlock"));
        assert!(faction_by_id("warlock").is_none());
        assert!(faction_by_id("NEUTRAL").is_none());
    }
}
