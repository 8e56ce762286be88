use crate::slot::{Slot, SLOT_COUNT};

pub const SHUFFLED_TILES: usize = SLOT_COUNT - 1;
pub const LIVES_START: u8 = 3;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

/// Per-set seed: the same base seed arranges every set differently.
pub fn set_seed(base: u32, set_index: usize) -> u32 {
    base ^ (set_index as u32).wrapping_mul(0x9E37_79B9) ^ 0x0A7E_5107
}

fn attempt_seed(seed: u32, attempt: u32) -> u32 {
    seed ^ attempt.wrapping_mul(0x144C_BC89)
}

fn shuffle_slots(seed: u32) -> [Slot; SHUFFLED_TILES] {
    let mut slots = Slot::SHUFFLED;
    for i in (1..slots.len()).rev() {
        let salt = 0xC0DE_u32 + i as u32;
        let j = (rand_unit(seed, salt) * (i as f32 + 1.0)) as usize;
        slots.swap(i, j);
    }
    slots
}

/// Assign the five shuffled slots so that no tile lands on its own correct
/// slot. Rejection-samples permutations; each attempt has acceptance
/// probability near 1/e, so the loop terminates after a few rounds.
pub fn derange_slots(seed: u32, correct: &[Slot; SHUFFLED_TILES]) -> [Slot; SHUFFLED_TILES] {
    let mut attempt = 0u32;
    loop {
        let assigned = shuffle_slots(attempt_seed(seed, attempt));
        let clash = assigned
            .iter()
            .zip(correct.iter())
            .any(|(slot, own)| slot == own);
        if !clash {
            return assigned;
        }
        attempt = attempt.wrapping_add(1);
    }
}
