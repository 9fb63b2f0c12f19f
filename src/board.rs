use std::fmt;

use ndarray::Array2;
use tracing::error;

use crate::error::RulesError;
use crate::position::{Direction, Orientation, Player, Position, BOARD_SIZE};

/// A player's movable token.
///
/// Owned by [`Board`]; the stored position is the single source of truth for
/// field occupancy and is only updated through [`Board::move_pawn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pawn {
    pub player: Player,
    pub position: Position,
}

/// Authoritative grid state: pawn locations and wall-slot occupancy.
///
/// Wall slots are anchored at their upper-left cell and span two board cells
/// along their own axis. The horizontal slot grid is 8x9 and the vertical
/// slot grid is 9x8; anchors whose two-cell span would leave the board can
/// never be occupied, but keeping the full grids lets the passability check
/// probe both straddling slots of an edge without special-casing.
///
/// Legality rejections are returned as [`RulesError`]. Slot coordinates
/// outside the fixed grids passed to the low-level accessors are a caller
/// bug and panic instead.
#[derive(Clone, Debug)]
pub struct Board {
    horizontal_walls: Array2<bool>,
    vertical_walls: Array2<bool>,
    pawns: [Pawn; 2],
}

impl Board {
    pub fn new() -> Self {
        let size = BOARD_SIZE as usize;
        Self {
            horizontal_walls: Array2::from_elem((size - 1, size), false),
            vertical_walls: Array2::from_elem((size, size - 1), false),
            pawns: [
                Pawn {
                    player: Player::One,
                    position: Player::One.start_position(),
                },
                Pawn {
                    player: Player::Two,
                    position: Player::Two.start_position(),
                },
            ],
        }
    }

    pub fn pawn(&self, player: Player) -> Pawn {
        self.pawns[player.index()]
    }

    /// The player occupying `position`, if any. Derived from the two pawn
    /// records, so it can never disagree with them.
    pub fn pawn_at(&self, position: Position) -> Option<Player> {
        self.pawns
            .iter()
            .find(|pawn| pawn.position == position)
            .map(|pawn| pawn.player)
    }

    /// Whether the slot at (row, col) in the given orientation's grid holds a
    /// wall. Coordinates outside the slot grid read as unoccupied, which is
    /// what the straddle and neighbor probes below rely on.
    fn slot_occupied(&self, orientation: Orientation, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let grid = match orientation {
            Orientation::Horizontal => &self.horizontal_walls,
            Orientation::Vertical => &self.vertical_walls,
        };
        grid.get([row as usize, col as usize]).copied().unwrap_or(false)
    }

    /// Mark one wall slot. Panics on coordinates outside the slot grid;
    /// callers are expected to have validated placement already.
    fn set_slot(&mut self, orientation: Orientation, position: Position, occupied: bool) {
        let grid = match orientation {
            Orientation::Horizontal => &mut self.horizontal_walls,
            Orientation::Vertical => &mut self.vertical_walls,
        };
        grid[[position.row as usize, position.col as usize]] = occupied;
    }

    /// True iff no wall lies on the edge between two grid-adjacent cells.
    ///
    /// The step direction selects the blocking orientation (row changes are
    /// blocked by horizontal walls, column changes by vertical walls), and
    /// either of the two slots straddling the edge blocks it.
    pub fn wall_passable(&self, from: Position, to: Position) -> bool {
        debug_assert!(from.in_bounds() && to.in_bounds());
        let delta = (to.row - from.row, to.col - from.col);
        match delta {
            // Down: edge below `from`
            (1, 0) => {
                !self.slot_occupied(Orientation::Horizontal, from.row, from.col)
                    && !self.slot_occupied(Orientation::Horizontal, from.row, from.col - 1)
            }
            // Up: edge below `to`
            (-1, 0) => {
                !self.slot_occupied(Orientation::Horizontal, to.row, to.col)
                    && !self.slot_occupied(Orientation::Horizontal, to.row, to.col - 1)
            }
            // Right: edge right of `from`
            (0, 1) => {
                !self.slot_occupied(Orientation::Vertical, from.row, from.col)
                    && !self.slot_occupied(Orientation::Vertical, from.row - 1, from.col)
            }
            // Left: edge right of `to`
            (0, -1) => {
                !self.slot_occupied(Orientation::Vertical, to.row, to.col)
                    && !self.slot_occupied(Orientation::Vertical, to.row - 1, to.col)
            }
            _ => panic!("wall_passable called with non-adjacent positions {from} and {to}"),
        }
    }

    /// All legal destinations for the pawn's next move: a single step into an
    /// open direction, a straight jump over the adjacent opponent, or the
    /// lateral jumps when the straight jump is blocked by a wall or the board
    /// edge.
    pub fn valid_pawn_moves(&self, player: Player) -> Vec<Position> {
        let origin = self.pawn(player).position;
        let mut moves = Vec::with_capacity(5);

        for direction in Direction::ALL {
            let adjacent = origin + direction;
            if !adjacent.in_bounds() || !self.wall_passable(origin, adjacent) {
                continue;
            }
            if self.pawn_at(adjacent).is_none() {
                moves.push(adjacent);
                continue;
            }
            // Opponent in the way: jump straight over, or laterally around
            // when the landing square is walled off or off the board.
            let jump = adjacent + direction;
            if jump.in_bounds() && self.wall_passable(adjacent, jump) {
                moves.push(jump);
            } else {
                for perpendicular in direction.perpendicular() {
                    let lateral = adjacent + perpendicular;
                    if lateral.in_bounds() && self.wall_passable(adjacent, lateral) {
                        moves.push(lateral);
                    }
                }
            }
        }

        if moves.is_empty() {
            // Wall placement legality guarantees every pawn keeps a route to
            // its goal, so an empty move set means the board state is corrupt.
            error!(%player, position = %origin, "pawn has no legal moves");
            debug_assert!(false, "pawn {player} at {origin} has no legal moves");
        }

        moves
    }

    /// Move the pawn to `target` if it is in the pawn's valid-move set.
    pub fn move_pawn(&mut self, player: Player, target: Position) -> Result<(), RulesError> {
        if !self.valid_pawn_moves(player).contains(&target) {
            return Err(RulesError::InvalidMove {
                pawn: player,
                target,
            });
        }
        self.pawns[player.index()].position = target;
        Ok(())
    }

    /// Whether a wall may be placed at `position`, derived purely from the
    /// occupied slots: the two-cell span must fit on the board, the slot and
    /// its same-orientation neighbors one step either way along the wall's
    /// axis must be free, and the crossing slot (opposite orientation, same
    /// anchor) must be free.
    ///
    /// Path availability is deliberately not checked here; that requires both
    /// pawns' goals and is the game layer's responsibility.
    pub fn can_place_wall_at(&self, orientation: Orientation, position: Position) -> bool {
        let Position { row, col } = position;
        if !(0..BOARD_SIZE - 1).contains(&row) || !(0..BOARD_SIZE - 1).contains(&col) {
            return false;
        }
        match orientation {
            Orientation::Horizontal => {
                !self.slot_occupied(Orientation::Horizontal, row, col)
                    && !self.slot_occupied(Orientation::Horizontal, row, col - 1)
                    && !self.slot_occupied(Orientation::Horizontal, row, col + 1)
                    && !self.slot_occupied(Orientation::Vertical, row, col)
            }
            Orientation::Vertical => {
                !self.slot_occupied(Orientation::Vertical, row, col)
                    && !self.slot_occupied(Orientation::Vertical, row - 1, col)
                    && !self.slot_occupied(Orientation::Vertical, row + 1, col)
                    && !self.slot_occupied(Orientation::Horizontal, row, col)
            }
        }
    }

    /// Occupy one wall slot if the placement is legal.
    pub fn place_wall(
        &mut self,
        orientation: Orientation,
        position: Position,
    ) -> Result<(), RulesError> {
        if !self.can_place_wall_at(orientation, position) {
            return Err(RulesError::IllegalPlacement {
                orientation,
                position,
            });
        }
        self.set_slot(orientation, position, true);
        Ok(())
    }

    /// Clear one wall slot. Used to roll back a placement that turned out to
    /// block a pawn's route; since placeability is re-derived from occupied
    /// slots, clearing the slot restores the exact prior state.
    pub fn remove_wall(&mut self, orientation: Orientation, position: Position) {
        self.set_slot(orientation, position, false);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                let cell = match self.pawn_at(pos) {
                    Some(Player::One) => '1',
                    Some(Player::Two) => '2',
                    None => '.',
                };
                write!(f, " {cell} ")?;
                if col + 1 < BOARD_SIZE {
                    let blocked = !self.wall_passable(pos, pos + Direction::Right);
                    write!(f, "{}", if blocked { '|' } else { ' ' })?;
                }
            }
            writeln!(f)?;
            if row + 1 < BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let pos = Position::new(row, col);
                    let blocked = !self.wall_passable(pos, pos + Direction::Down);
                    write!(f, "{}", if blocked { "---" } else { "   " })?;
                    if col + 1 < BOARD_SIZE {
                        write!(f, " ")?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
