use wordaxis_core::{
    decode_record, encode_record, AdvanceOutcome, ApplyOutcome, CheckOutcome, CompletionRecord,
    GameAction, GameSession, MemoryStore, SelectOutcome, Slot, LIVES_START, WORD_SETS,
};

const TODAY: &str = "Thu Aug 07 2025";

#[test]
fn advance_loads_the_next_set_with_fresh_lives() {
    let mut session = GameSession::new(WORD_SETS, 0x1234, MemoryStore::new());
    assert_eq!(session.state().set_index, 0);

    let outcome = session.advance(TODAY).unwrap();
    assert_eq!(outcome, AdvanceOutcome::NextSet { set_index: 1 });

    let state = session.state();
    assert_eq!(state.set_index, 1);
    assert_eq!(state.lives, LIVES_START);
    assert!(!state.over);
    assert_eq!(state.selected, None);
    for tile in state.tiles.iter().filter(|tile| tile.slot != Slot::Top) {
        assert_ne!(tile.slot, tile.correct_slot);
    }
    assert!(session.store().writes.is_empty(), "no marker before the final set");
}

#[test]
fn finishing_the_final_set_writes_the_marker_exactly_once() {
    let last = WORD_SETS.len() - 1;
    let mut session = GameSession::starting_at(WORD_SETS, last, 0x1234, MemoryStore::new());

    assert_eq!(session.advance(TODAY).unwrap(), AdvanceOutcome::Finished);
    assert!(session.is_finished());
    assert!(session.state().over);
    assert_eq!(session.store().writes, vec![TODAY.to_string()]);

    assert_eq!(session.advance(TODAY).unwrap(), AdvanceOutcome::AlreadyFinished);
    assert_eq!(session.store().writes.len(), 1);
}

#[test]
fn apply_dispatches_the_three_gestures() {
    let mut session = GameSession::new(WORD_SETS, 99, MemoryStore::new());

    let outcome = session
        .apply(GameAction::SelectTile { tile_id: 2 })
        .unwrap();
    assert_eq!(outcome, ApplyOutcome::Select(SelectOutcome::Selected));

    let outcome = session.apply(GameAction::Check).unwrap();
    assert_eq!(
        outcome,
        ApplyOutcome::Check(CheckOutcome::IncorrectRetry { lives_remaining: 2 })
    );

    let outcome = session
        .apply(GameAction::Advance {
            today: TODAY.to_string(),
        })
        .unwrap();
    assert_eq!(
        outcome,
        ApplyOutcome::Advance(AdvanceOutcome::NextSet { set_index: 1 })
    );
}

#[test]
fn empty_set_slice_falls_back_to_the_catalog() {
    let session = GameSession::new(&[], 7, MemoryStore::new());
    assert_eq!(session.set().slug, WORD_SETS[0].slug);
}

#[test]
fn starting_index_is_clamped_to_the_catalog() {
    let session = GameSession::starting_at(WORD_SETS, 99, 7, MemoryStore::new());
    assert_eq!(session.state().set_index, WORD_SETS.len() - 1);
}

#[test]
fn completion_record_round_trips() {
    let record = CompletionRecord::new(TODAY);
    let bytes = encode_record(&record).unwrap();
    assert_eq!(decode_record(&bytes), Some(record));
}

#[test]
fn stale_record_version_reads_as_absent() {
    let stale = CompletionRecord {
        version: 0,
        last_played: TODAY.to_string(),
    };
    let bytes = encode_record(&stale).unwrap();
    assert_eq!(decode_record(&bytes), None);
}

#[test]
fn garbage_bytes_read_as_absent() {
    assert_eq!(decode_record(b"not a record"), None);
}
