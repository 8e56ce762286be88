use serde::Serialize;

use crate::slot::{Slot, SLOT_COUNT};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct TileTemplate {
    pub id: u32,
    pub text: &'static str,
    pub correct_slot: Slot,
}

/// A fixed puzzle set. `tiles[0]` is always the anchor (correct slot `Top`)
/// and the six correct slots cover the six slots bijectively.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct WordSet {
    pub label: &'static str,
    pub slug: &'static str,
    pub tiles: [TileTemplate; SLOT_COUNT],
}

pub const DEFAULT_SET_SLUG: &str = "baby-days";

pub const WORD_SETS: &[WordSet] = &[
    WordSet {
        label: "Baby Days",
        slug: "baby-days",
        tiles: [
            TileTemplate { id: 1, text: "Noisy", correct_slot: Slot::Top },
            TileTemplate { id: 2, text: "Puppy", correct_slot: Slot::Left },
            TileTemplate { id: 3, text: "Toddler", correct_slot: Slot::Right },
            TileTemplate { id: 4, text: "Squicky", correct_slot: Slot::BottomLeft },
            TileTemplate { id: 5, text: "Diaper", correct_slot: Slot::BottomRight },
            TileTemplate { id: 6, text: "Stinky", correct_slot: Slot::Side },
        ],
    },
    WordSet {
        label: "Celebrity Edition",
        slug: "celebrity",
        tiles: [
            TileTemplate { id: 1, text: "Loved", correct_slot: Slot::Top },
            TileTemplate { id: 2, text: "Nelly Furtado", correct_slot: Slot::Left },
            TileTemplate { id: 3, text: "Michael Jackson", correct_slot: Slot::Right },
            TileTemplate { id: 4, text: "Christina Aguilera", correct_slot: Slot::BottomLeft },
            TileTemplate { id: 5, text: "Kim Kardashian", correct_slot: Slot::BottomRight },
            TileTemplate { id: 6, text: "Famous", correct_slot: Slot::Side },
        ],
    },
];

pub fn word_set_by_slug(slug: &str) -> Option<&'static WordSet> {
    let trimmed = slug.trim();
    WORD_SETS
        .iter()
        .find(|set| set.slug.eq_ignore_ascii_case(trimmed))
}

pub fn word_set_by_label(label: &str) -> Option<&'static WordSet> {
    let trimmed = label.trim();
    WORD_SETS
        .iter()
        .find(|set| set.label.eq_ignore_ascii_case(trimmed))
}

pub fn word_set_index(slug: &str) -> Option<usize> {
    let trimmed = slug.trim();
    WORD_SETS
        .iter()
        .position(|set| set.slug.eq_ignore_ascii_case(trimmed))
}
