use std::collections::HashSet;

use wordaxis_core::{CheckOutcome, GameState, SelectOutcome, Slot, LIVES_START, WORD_SETS};

fn fresh_board(seed: u32) -> GameState {
    GameState::new(&WORD_SETS[0], 0, seed)
}

fn slots_of(state: &GameState) -> Vec<Slot> {
    state.tiles.iter().map(|tile| tile.slot).collect()
}

#[test]
fn init_is_a_derangement_for_many_seeds() {
    for seed in 0..200 {
        let state = fresh_board(seed);
        let occupied: HashSet<Slot> = state.tiles.iter().map(|tile| tile.slot).collect();
        assert_eq!(occupied.len(), 6, "seed {seed}: slots must be a bijection");
        let anchor = state.tile_at(Slot::Top).expect("top slot occupied");
        assert_eq!(anchor.id, 1);
        assert_eq!(anchor.correct_slot, Slot::Top);
        for tile in state.tiles.iter().filter(|tile| tile.slot != Slot::Top) {
            assert_ne!(
                tile.slot, tile.correct_slot,
                "seed {seed}: tile {} started pre-solved",
                tile.id
            );
        }
    }
}

#[test]
fn init_is_deterministic_per_seed() {
    let a = fresh_board(0x5EED);
    let b = fresh_board(0x5EED);
    assert_eq!(slots_of(&a), slots_of(&b));
}

#[test]
fn anchor_tile_is_never_selectable_or_swappable() {
    let mut state = fresh_board(7);
    let before = slots_of(&state);

    assert_eq!(state.select_or_swap(1), SelectOutcome::Ignored);
    assert_eq!(state.selected, None);

    assert_eq!(state.select_or_swap(2), SelectOutcome::Selected);
    assert_eq!(state.select_or_swap(1), SelectOutcome::Ignored);
    assert_eq!(state.selected, Some(2), "anchor click must not consume the selection");
    assert_eq!(slots_of(&state), before);
}

#[test]
fn swap_exchanges_slots_and_clears_selection() {
    let mut state = fresh_board(7);
    let slot_a = state.tile(2).unwrap().slot;
    let slot_b = state.tile(3).unwrap().slot;

    assert_eq!(state.select_or_swap(2), SelectOutcome::Selected);
    assert_eq!(state.select_or_swap(3), SelectOutcome::Swapped);

    assert_eq!(state.tile(2).unwrap().slot, slot_b);
    assert_eq!(state.tile(3).unwrap().slot, slot_a);
    assert_eq!(state.selected, None);
}

#[test]
fn double_swap_restores_every_slot() {
    let mut state = fresh_board(11);
    let before = slots_of(&state);

    state.select_or_swap(4);
    state.select_or_swap(5);
    state.select_or_swap(4);
    state.select_or_swap(5);

    assert_eq!(slots_of(&state), before);
}

#[test]
fn reclicking_the_selected_tile_deselects() {
    let mut state = fresh_board(3);
    assert_eq!(state.select_or_swap(6), SelectOutcome::Selected);
    assert_eq!(state.select_or_swap(6), SelectOutcome::Deselected);
    assert_eq!(state.selected, None);
}

#[test]
fn unknown_tile_id_is_ignored() {
    let mut state = fresh_board(3);
    let before = slots_of(&state);
    assert_eq!(state.select_or_swap(99), SelectOutcome::Ignored);
    assert_eq!(state.selected, None);
    assert_eq!(slots_of(&state), before);
}

#[test]
fn solved_board_reports_solved_without_spending_lives() {
    let mut state = fresh_board(1);
    for tile in &mut state.tiles {
        tile.slot = tile.correct_slot;
    }
    assert_eq!(state.check_solution(), CheckOutcome::Solved);
    assert_eq!(state.lives, LIVES_START);
    assert!(state.over);
}

#[test]
fn three_failed_checks_exhaust_lives() {
    let mut state = fresh_board(42);
    assert!(!state.solved(), "fresh boards are guaranteed unsolved");

    assert_eq!(
        state.check_solution(),
        CheckOutcome::IncorrectRetry { lives_remaining: 2 }
    );
    assert!(!state.over);
    assert_eq!(
        state.check_solution(),
        CheckOutcome::IncorrectRetry { lives_remaining: 1 }
    );
    assert!(!state.over);
    assert_eq!(state.check_solution(), CheckOutcome::LivesExhausted);
    assert!(state.over);
    assert_eq!(state.lives, 0);
}

#[test]
fn checks_after_game_over_do_not_decrement() {
    let mut state = fresh_board(42);
    for _ in 0..3 {
        state.check_solution();
    }
    assert_eq!(state.check_solution(), CheckOutcome::LivesExhausted);
    assert_eq!(state.lives, 0);
}

#[test]
fn interaction_is_ignored_once_over() {
    let mut state = fresh_board(42);
    for _ in 0..3 {
        state.check_solution();
    }
    assert_eq!(state.select_or_swap(2), SelectOutcome::Ignored);
}

#[test]
fn swapping_the_last_misplaced_pair_solves() {
    let mut state = fresh_board(9);
    // Everything correct except "Puppy" (2) and "Squicky" (4) exchanged.
    for tile in &mut state.tiles {
        tile.slot = tile.correct_slot;
    }
    let left = state.tile(2).unwrap().correct_slot;
    let bottom_left = state.tile(4).unwrap().correct_slot;
    state.tiles.iter_mut().for_each(|tile| match tile.id {
        2 => tile.slot = bottom_left,
        4 => tile.slot = left,
        _ => {}
    });

    assert_eq!(state.select_or_swap(2), SelectOutcome::Selected);
    assert_eq!(state.select_or_swap(4), SelectOutcome::Swapped);
    assert_eq!(state.tile(2).unwrap().slot, Slot::Left);
    assert_eq!(state.check_solution(), CheckOutcome::Solved);
    assert_eq!(state.lives, LIVES_START);
}
