use serde::Serialize;

use crate::session::AdvanceOutcome;
use crate::state::{CheckOutcome, SelectOutcome};

/// The three gestures a presentation layer can forward into the engine.
#[derive(Clone, Debug)]
pub enum GameAction {
    SelectTile { tile_id: u32 },
    Check,
    Advance { today: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyOutcome {
    Select(SelectOutcome),
    Check(CheckOutcome),
    Advance(AdvanceOutcome),
}
