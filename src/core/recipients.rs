//! Delivery targets — the easy and hard rosters and their lookup.

use crate::core::types::Difficulty;

/// Targets with the short (360 s) delivery window.
pub const EASY: &[&str] = &[
    "Burkor",
    "Brimstall",
    "Captain Errdo",
    "Coach",
    "Dalila",
    "Damwin",
    "Eebel",
    "Ermin",
    "Femi",
    "Froono",
    "Guard Vemmeldo",
    "Gulluck",
    "His Royal Highness King Narnode",
    "Meegle",
    "Perrdur",
    "Rometti",
    "Sarble",
    "Trainer Nacklepen",
    "Wurbel",
    "Heckel Funch",
];

/// Targets with the long (660 s) delivery window.
pub const HARD: &[&str] = &[
    "Ambassador Ferrnook",
    "Ambassador Gimblewap",
    "Ambassador Spanfipple",
    "Brambickle",
    "Captain Bleemadge",
    "Captain Daerkin",
    "Captain Dalbur",
    "Captain Klemfoodle",
    "Captain Ninto",
    "G.L.O Caranock",
    "Garkor",
    "Gnormadium Avlafrim",
    "Hazelmere",
    "King Bolren",
    "Lieutenant Schepbur",
    "Penwie",
    "Professor Imblewyn",
    "Professor Manglethorp",
    "Professor Onglewip",
    "Wingstone",
];

/// Recipient used for practice runs.
pub const PRACTICE_RECIPIENT: &str = "Gnormadium Avlafrim";

/// Exact-match roster lookup.
pub fn difficulty(name: &str) -> Option<Difficulty> {
    if EASY.contains(&name) {
        Some(Difficulty::Easy)
    } else if HARD.contains(&name) {
        Some(Difficulty::Hard)
    } else {
        None
    }
}
