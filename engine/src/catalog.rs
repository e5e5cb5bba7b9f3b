// ═══════════════════════════════════════════════════════════════════════
// Demo catalog — code-defined cards and ready decks
//
// The engine accepts any injected card list; this module is the built-in
// set used by the runner, the tournament and the test suite. Copy ids are
// suffixed so two copies of one named card stay distinct.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;

// ── Neutral specials and weather ───────────────────────────────────────

pub fn biting_frost(copy: u32) -> Card {
    Card::weather(&format!("wx-frost-{copy}"), "Biting Frost")
}

pub fn impenetrable_fog(copy: u32) -> Card {
    Card::weather(&format!("wx-fog-{copy}"), "Impenetrable Fog")
}

pub fn torrential_rain(copy: u32) -> Card {
    Card::weather(&format!("wx-rain-{copy}"), "Torrential Rain")
}

pub fn skellige_storm(copy: u32) -> Card {
    Card::weather(&format!("wx-storm-{copy}"), "Skellige Storm")
}

pub fn clear_weather(copy: u32) -> Card {
    Card::weather(&format!("wx-clear-{copy}"), "Clear Weather")
}

pub fn commanders_horn(copy: u32) -> Card {
    Card::special(&format!("sp-horn-{copy}"), "Commander's Horn", Ability::Horn)
}

pub fn scorch(copy: u32) -> Card {
    Card::special(&format!("sp-scorch-{copy}"), "Scorch", Ability::Scorch)
}

pub fn decoy(copy: u32) -> Card {
    Card::special(&format!("sp-decoy-{copy}"), "Decoy", Ability::Decoy)
}

pub fn mardroeme(copy: u32) -> Card {
    Card::special(&format!("sp-mardroeme-{copy}"), "Mardroeme", Ability::Mardroeme)
}

// ── Northern Realms ────────────────────────────────────────────────────

pub fn northern_realms_deck() -> Vec<Card> {
    use Faction::NorthernRealms as NR;
    let mut deck = vec![
        // Bond infantry
        Card::unit("nr-commando-1", "Blue Stripes Commando", NR, Row::Melee, 4)
            .with_ability(Ability::TightBond),
        Card::unit("nr-commando-2", "Blue Stripes Commando", NR, Row::Melee, 4)
            .with_ability(Ability::TightBond),
        Card::unit("nr-commando-3", "Blue Stripes Commando", NR, Row::Melee, 4)
            .with_ability(Ability::TightBond),
        Card::unit("nr-reaver-1", "Crinfrid Reavers Dragon Hunter", NR, Row::Ranged, 5)
            .with_ability(Ability::TightBond),
        Card::unit("nr-reaver-2", "Crinfrid Reavers Dragon Hunter", NR, Row::Ranged, 5)
            .with_ability(Ability::TightBond),
        // Siege line
        Card::unit("nr-catapult-1", "Catapult", NR, Row::Siege, 8).with_ability(Ability::TightBond),
        Card::unit("nr-catapult-2", "Catapult", NR, Row::Siege, 8).with_ability(Ability::TightBond),
        Card::unit("nr-siege-tower", "Siege Tower", NR, Row::Siege, 6),
        Card::unit("nr-trebuchet", "Trebuchet", NR, Row::Siege, 6),
        Card::unit("nr-siege-expert-1", "Kaedweni Siege Expert", NR, Row::Siege, 1)
            .with_ability(Ability::MoraleBoost),
        Card::unit("nr-siege-expert-2", "Kaedweni Siege Expert", NR, Row::Siege, 1)
            .with_ability(Ability::MoraleBoost),
        // Spies
        Card::unit("nr-stennis", "Prince Stennis", NR, Row::Melee, 5).with_ability(Ability::Spy),
        Card::unit("nr-thaler", "Thaler", NR, Row::Siege, 1).with_ability(Ability::Spy),
        Card::unit("nr-dijkstra", "Sigismund Dijkstra", NR, Row::Melee, 4).with_ability(Ability::Spy),
        // Medics
        Card::unit("nr-banner-medic", "Dun Banner Medic", NR, Row::Siege, 5)
            .with_ability(Ability::Medic),
        Card::unit("nr-nenneke", "Mother Nenneke", NR, Row::Melee, 3).with_ability(Ability::Medic),
        // Agile cavalry
        Card::unit("nr-banner-nausicaa", "Nausicaa Cavalry Rider", NR, Row::Melee, 2)
            .agile(&[Row::Melee, Row::Ranged]),
        Card::unit("nr-sabrina", "Sabrina Glevissig", NR, Row::Ranged, 4)
            .agile(&[Row::Ranged, Row::Melee]),
        // Plain line infantry
        Card::unit("nr-redanian-1", "Redanian Foot Soldier", NR, Row::Melee, 1),
        Card::unit("nr-redanian-2", "Redanian Foot Soldier", NR, Row::Melee, 1),
        Card::unit("nr-ballista", "Ballista", NR, Row::Siege, 6),
        Card::unit("nr-archer", "Kaedweni Archer", NR, Row::Ranged, 4),
        // Heroes
        Card::unit("nr-roche", "Vernon Roche", NR, Row::Melee, 10).as_hero(),
        Card::unit("nr-natalis", "John Natalis", NR, Row::Melee, 10).as_hero(),
        Card::unit("nr-philippa", "Philippa Eilhart", NR, Row::Ranged, 10).as_hero(),
    ];
    deck.extend([
        biting_frost(1),
        impenetrable_fog(1),
        clear_weather(1),
        commanders_horn(1),
        scorch(1),
        decoy(1),
    ]);
    deck
}

pub fn foltest() -> Card {
    Card::leader(
        "ld-foltest",
        "Foltest, Lord Commander of the North",
        Faction::NorthernRealms,
        "Clear any weather effects in play",
    )
}

// ── Skellige ───────────────────────────────────────────────────────────

pub fn skellige_deck() -> Vec<Card> {
    use Faction::Skellige as SK;
    let mut deck = vec![
        // An Craite muster pack
        Card::unit("sk-ancraite-1", "Clan an Craite Warrior", SK, Row::Melee, 6)
            .with_ability(Ability::Muster)
            .in_group("An Craite"),
        Card::unit("sk-ancraite-2", "Clan an Craite Warrior", SK, Row::Melee, 6)
            .with_ability(Ability::Muster)
            .in_group("An Craite"),
        Card::unit("sk-ancraite-3", "Clan an Craite Warrior", SK, Row::Melee, 6)
            .with_ability(Ability::Muster)
            .in_group("An Craite"),
        // Berserkers and their mushrooms
        Card::unit("sk-berserker-1", "Berserker", SK, Row::Melee, 4).with_ability(Ability::Berserker),
        Card::unit("sk-berserker-2", "Young Berserker", SK, Row::Ranged, 2)
            .with_ability(Ability::Berserker),
        mardroeme(1),
        mardroeme(2),
        // Avenger
        Card::unit("sk-kambi", "Kambi", SK, Row::Melee, 0).with_ability(Ability::Avenger),
        // Bond longships
        Card::unit("sk-longship-1", "War Longship", SK, Row::Siege, 4).with_ability(Ability::TightBond),
        Card::unit("sk-longship-2", "War Longship", SK, Row::Siege, 4).with_ability(Ability::TightBond),
        Card::unit("sk-longship-3", "War Longship", SK, Row::Siege, 4).with_ability(Ability::TightBond),
        // Support
        Card::unit("sk-shield-maiden-1", "Shield Maiden", SK, Row::Melee, 5)
            .with_ability(Ability::TightBond),
        Card::unit("sk-shield-maiden-2", "Shield Maiden", SK, Row::Melee, 5)
            .with_ability(Ability::TightBond),
        Card::unit("sk-priestess", "Priestess of Freya", SK, Row::Ranged, 2)
            .with_ability(Ability::Medic),
        Card::unit("sk-spy", "Birna Bran", SK, Row::Melee, 2).with_ability(Ability::Spy),
        // Agile raiders
        Card::unit("sk-raider-1", "Light Longship", SK, Row::Ranged, 4)
            .agile(&[Row::Ranged, Row::Siege]),
        Card::unit("sk-raider-2", "Dimun Pirate", SK, Row::Melee, 6)
            .agile(&[Row::Melee, Row::Ranged]),
        Card::unit("sk-archer-1", "Clan Drummond Shield Maiden", SK, Row::Ranged, 4),
        Card::unit("sk-archer-2", "Clan Drummond Shield Maiden", SK, Row::Ranged, 4),
        Card::unit("sk-warrior", "Clan Dimun Pirate", SK, Row::Melee, 6),
        Card::unit("sk-catapult", "Clan Tordarroch Shieldsmith", SK, Row::Siege, 4),
        // Heroes
        Card::unit("sk-hjalmar", "Hjalmar an Craite", SK, Row::Melee, 10).as_hero(),
        Card::unit("sk-cerys", "Cerys an Craite", SK, Row::Melee, 10).as_hero(),
        Card::unit("sk-ermion", "Ermion", SK, Row::Ranged, 8).as_hero(),
    ];
    deck.extend([
        skellige_storm(1),
        torrential_rain(1),
        clear_weather(2),
        commanders_horn(2),
        scorch(2),
        decoy(2),
    ]);
    deck
}

pub fn crach_an_craite() -> Card {
    Card::leader(
        "ld-crach",
        "Crach an Craite",
        Faction::Skellige,
        "Play Skellige Storm from your deck",
    )
}

pub fn bran_tuirseach() -> Card {
    Card::leader(
        "ld-bran",
        "Bran Tuirseach",
        Faction::Skellige,
        "Doubles the strength of your siege units as a commander's horn",
    )
}
