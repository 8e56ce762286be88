use serde::Serialize;

use crate::catalog::WordSet;
use crate::game::{derange_slots, LIVES_START, SHUFFLED_TILES};
use crate::slot::Slot;

#[derive(Clone, Debug, Serialize)]
pub struct Tile {
    pub id: u32,
    pub text: String,
    pub correct_slot: Slot,
    pub slot: Slot,
}

impl Tile {
    pub fn placed(&self) -> bool {
        self.slot == self.correct_slot
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectOutcome {
    Selected,
    Deselected,
    Swapped,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "outcome")]
pub enum CheckOutcome {
    Solved,
    IncorrectRetry { lives_remaining: u8 },
    LivesExhausted,
}

#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    pub set_index: usize,
    pub tiles: Vec<Tile>,
    pub selected: Option<u32>,
    pub lives: u8,
    pub over: bool,
}

impl GameState {
    /// Build a fresh board for `set`. The anchor tile stays on `Top`; the
    /// rest get a derangement of the remaining slots, so no tile starts on
    /// its own correct slot.
    pub fn new(set: &WordSet, set_index: usize, seed: u32) -> Self {
        let mut correct = [Slot::Top; SHUFFLED_TILES];
        for (slot, template) in correct.iter_mut().zip(set.tiles.iter().skip(1)) {
            *slot = template.correct_slot;
        }
        let assigned = derange_slots(seed, &correct);

        let tiles = set
            .tiles
            .iter()
            .enumerate()
            .map(|(i, template)| Tile {
                id: template.id,
                text: template.text.to_string(),
                correct_slot: template.correct_slot,
                slot: if i == 0 { Slot::Top } else { assigned[i - 1] },
            })
            .collect();

        Self {
            set_index,
            tiles,
            selected: None,
            lives: LIVES_START,
            over: false,
        }
    }

    pub fn tile(&self, id: u32) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    pub fn tile_at(&self, slot: Slot) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.slot == slot)
    }

    pub fn solved(&self) -> bool {
        self.tiles.iter().all(Tile::placed)
    }

    /// First click selects, second click swaps. Clicks on the anchor slot,
    /// unknown ids, or a finished game are ignored; re-clicking the selected
    /// tile deselects it.
    pub fn select_or_swap(&mut self, tile_id: u32) -> SelectOutcome {
        if self.over {
            return SelectOutcome::Ignored;
        }
        let clicked_slot = match self.tile(tile_id) {
            Some(tile) => tile.slot,
            None => return SelectOutcome::Ignored,
        };
        if clicked_slot == Slot::Top {
            return SelectOutcome::Ignored;
        }

        let selected_id = match self.selected {
            None => {
                self.selected = Some(tile_id);
                return SelectOutcome::Selected;
            }
            Some(id) => id,
        };
        if selected_id == tile_id {
            self.selected = None;
            return SelectOutcome::Deselected;
        }

        let selected_slot = match self.tile(selected_id) {
            Some(tile) => tile.slot,
            None => {
                // Stale selection; treat the click as a fresh selection.
                self.selected = Some(tile_id);
                return SelectOutcome::Selected;
            }
        };
        for tile in &mut self.tiles {
            if tile.id == selected_id {
                tile.slot = clicked_slot;
            } else if tile.id == tile_id {
                tile.slot = selected_slot;
            }
        }
        self.selected = None;
        SelectOutcome::Swapped
    }

    /// Compare every tile against its correct slot. A wrong arrangement
    /// costs a life; the board locks once solved or out of lives.
    pub fn check_solution(&mut self) -> CheckOutcome {
        if self.over {
            return if self.solved() {
                CheckOutcome::Solved
            } else {
                CheckOutcome::LivesExhausted
            };
        }
        if self.solved() {
            self.over = true;
            return CheckOutcome::Solved;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.over = true;
            CheckOutcome::LivesExhausted
        } else {
            CheckOutcome::IncorrectRetry {
                lives_remaining: self.lives,
            }
        }
    }
}
