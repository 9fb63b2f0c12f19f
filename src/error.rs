use thiserror::Error;

use crate::position::{Orientation, Player, Position};

/// Legality rejections for board commands.
///
/// These are expected, caller-recoverable outcomes: UI code probes move and
/// placement legality at high frequency and treats them as "no". Coordinates
/// outside the fixed grids passed to low-level slot accessors are a caller
/// bug, not a rules rejection, and fault via a bounds panic instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    #[error("invalid move target {target} for {pawn}")]
    InvalidMove { pawn: Player, target: Position },

    #[error("illegal {orientation:?} wall placement at {position}")]
    IllegalPlacement {
        orientation: Orientation,
        position: Position,
    },
}
