use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six fixed anchor points a tile can occupy. `Top` is the
/// anchor slot: the tile placed there never moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    Top,
    Left,
    Right,
    BottomLeft,
    BottomRight,
    Side,
}

pub const SLOT_COUNT: usize = 6;

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::Top,
        Slot::Left,
        Slot::Right,
        Slot::BottomLeft,
        Slot::BottomRight,
        Slot::Side,
    ];

    /// The five slots that take part in shuffling, in canonical order.
    pub const SHUFFLED: [Slot; SLOT_COUNT - 1] = [
        Slot::Left,
        Slot::Right,
        Slot::BottomLeft,
        Slot::BottomRight,
        Slot::Side,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Top => "top",
            Slot::Left => "left",
            Slot::Right => "right",
            Slot::BottomLeft => "bottom-left",
            Slot::BottomRight => "bottom-right",
            Slot::Side => "side",
        }
    }

    /// Normalized screen anchor for renderers, as fractions of the board.
    pub fn anchor(self) -> (f32, f32) {
        match self {
            Slot::Top => (0.5, 0.06),
            Slot::Left => (0.25, 0.25),
            Slot::Right => (0.75, 0.25),
            Slot::BottomLeft => (0.25, 0.75),
            Slot::BottomRight => (0.75, 0.75),
            Slot::Side => (0.95, 0.5),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
