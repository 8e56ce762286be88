use serde::Serialize;

use crate::action::{ApplyOutcome, GameAction};
use crate::catalog::{WordSet, WORD_SETS};
use crate::game::set_seed;
use crate::state::{CheckOutcome, GameState, SelectOutcome};
use crate::store::{LastPlayedStore, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "outcome")]
pub enum AdvanceOutcome {
    NextSet { set_index: usize },
    Finished,
    AlreadyFinished,
}

/// A run through an ordered list of word sets. Owns the current board, the
/// base seed every board is derived from, and the storage port that records
/// completion of the final set.
pub struct GameSession<S> {
    sets: Vec<WordSet>,
    base_seed: u32,
    state: GameState,
    store: S,
    finished: bool,
}

impl<S: LastPlayedStore> GameSession<S> {
    pub fn new(sets: &[WordSet], base_seed: u32, store: S) -> Self {
        let sets: Vec<WordSet> = if sets.is_empty() {
            WORD_SETS.to_vec()
        } else {
            sets.to_vec()
        };
        let state = GameState::new(&sets[0], 0, set_seed(base_seed, 0));
        Self {
            sets,
            base_seed,
            state,
            store,
            finished: false,
        }
    }

    /// Start at a specific set instead of the first one.
    pub fn starting_at(sets: &[WordSet], start_index: usize, base_seed: u32, store: S) -> Self {
        let mut session = Self::new(sets, base_seed, store);
        let index = start_index.min(session.sets.len() - 1);
        if index > 0 {
            session.state = GameState::new(&session.sets[index], index, set_seed(base_seed, index));
        }
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn set(&self) -> &WordSet {
        &self.sets[self.state.set_index]
    }

    pub fn sets_remaining(&self) -> usize {
        self.sets.len() - self.state.set_index - 1
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn select_or_swap(&mut self, tile_id: u32) -> SelectOutcome {
        self.state.select_or_swap(tile_id)
    }

    pub fn check_solution(&mut self) -> CheckOutcome {
        self.state.check_solution()
    }

    /// Move on after a finished board. With sets left, loads a fresh board
    /// (new derangement, lives reset). On the last set, records `today`
    /// through the storage port once and enters the terminal state.
    pub fn advance(&mut self, today: &str) -> Result<AdvanceOutcome, StoreError> {
        if self.finished {
            return Ok(AdvanceOutcome::AlreadyFinished);
        }
        let next_index = self.state.set_index + 1;
        if next_index < self.sets.len() {
            self.state = GameState::new(
                &self.sets[next_index],
                next_index,
                set_seed(self.base_seed, next_index),
            );
            return Ok(AdvanceOutcome::NextSet {
                set_index: next_index,
            });
        }
        self.store.record_last_played(today)?;
        self.state.over = true;
        self.finished = true;
        Ok(AdvanceOutcome::Finished)
    }

    pub fn apply(&mut self, action: GameAction) -> Result<ApplyOutcome, StoreError> {
        match action {
            GameAction::SelectTile { tile_id } => {
                Ok(ApplyOutcome::Select(self.select_or_swap(tile_id)))
            }
            GameAction::Check => Ok(ApplyOutcome::Check(self.check_solution())),
            GameAction::Advance { today } => Ok(ApplyOutcome::Advance(self.advance(&today)?)),
        }
    }
}
