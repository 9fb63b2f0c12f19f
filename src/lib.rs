//! Rules engine for two-player Quoridor on a 9x9 grid.
//!
//! [`Board`] owns the authoritative grid state and answers legality queries:
//! pawn moves (single steps, straight jumps over the opponent, lateral jumps
//! when the straight jump is blocked), wall passability, and wall placement
//! geometry. [`Game`] layers turn sequencing, per-player wall budgets, win
//! detection, and the path-availability invariant on top: a wall may never
//! leave either pawn without a route to its goal row.
//!
//! The engine is a synchronous state machine driven by a presentation layer
//! through the [`Game`] command/query API. Rendering, input mapping, and
//! event loops live outside this crate.

pub mod board;
pub mod error;
pub mod game;
pub mod pathfinding;
pub mod position;

pub use board::{Board, Pawn};
pub use error::RulesError;
pub use game::{Game, GameState, WALLS_PER_PLAYER};
pub use pathfinding::{distance_to_row, has_path_to_row};
pub use position::{Direction, Orientation, Player, Position, BOARD_SIZE};
