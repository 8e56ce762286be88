pub mod action;
pub mod catalog;
pub mod game;
pub mod session;
pub mod slot;
pub mod state;
pub mod store;

pub use action::{ApplyOutcome, GameAction};
pub use catalog::{
    word_set_by_label, word_set_by_slug, word_set_index, TileTemplate, WordSet, DEFAULT_SET_SLUG,
    WORD_SETS,
};
pub use game::{derange_slots, set_seed, LIVES_START, SHUFFLED_TILES};
pub use session::{AdvanceOutcome, GameSession};
pub use slot::{Slot, SLOT_COUNT};
pub use state::{CheckOutcome, GameState, SelectOutcome, Tile};
pub use store::{
    decode_record, encode_record, CompletionRecord, LastPlayedStore, MemoryStore, StoreError,
    COMPLETION_RECORD_VERSION, LAST_PLAYED_KEY,
};
