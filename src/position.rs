use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Side length of the pawn grid.
pub const BOARD_SIZE: i32 = 9;

/// A cell on the 9x9 pawn grid, or an anchor on one of the wall-slot grids.
///
/// Rows and columns are 0-indexed; row 0 is player one's home edge and
/// row 8 is player two's home edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True if this position is a cell of the 9x9 pawn grid.
    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, direction: Direction) -> Position {
        let (dr, dc) = direction.offset();
        Position::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four pawn movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit (row, col) offset for this direction. Up decreases the row.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The two directions perpendicular to this one, used for lateral jumps.
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }

    /// The wall orientation that blocks movement in this direction.
    pub fn blocking_orientation(&self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Horizontal,
            Direction::Left | Direction::Right => Orientation::Vertical,
        }
    }
}

/// Orientation of a wall segment.
///
/// Horizontal walls lie between two rows and block row-changing movement;
/// vertical walls lie between two columns and block column-changing movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row this player must reach to win.
    pub fn goal_row(&self) -> i32 {
        match self {
            Player::One => BOARD_SIZE - 1,
            Player::Two => 0,
        }
    }

    /// Index into per-player arrays.
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Starting position at the center of the player's home edge.
    pub fn start_position(&self) -> Position {
        match self {
            Player::One => Position::new(0, BOARD_SIZE / 2),
            Player::Two => Position::new(BOARD_SIZE - 1, BOARD_SIZE / 2),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_addition() {
        let pos = Position::new(4, 4);
        assert_eq!(pos + Direction::Up, Position::new(3, 4));
        assert_eq!(pos + Direction::Down, Position::new(5, 4));
        assert_eq!(pos + Direction::Left, Position::new(4, 3));
        assert_eq!(pos + Direction::Right, Position::new(4, 5));
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(8, 8).in_bounds());
        assert!(!Position::new(-1, 4).in_bounds());
        assert!(!Position::new(9, 4).in_bounds());
        assert!(!Position::new(4, 9).in_bounds());
    }

    #[test]
    fn test_direction_relations() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);

            let (dr, dc) = direction.offset();
            let (or, oc) = direction.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));

            for perpendicular in direction.perpendicular() {
                assert_ne!(perpendicular, direction);
                assert_ne!(perpendicular, direction.opposite());
            }
        }
    }

    #[test]
    fn test_blocking_orientation() {
        assert_eq!(Direction::Up.blocking_orientation(), Orientation::Horizontal);
        assert_eq!(Direction::Down.blocking_orientation(), Orientation::Horizontal);
        assert_eq!(Direction::Left.blocking_orientation(), Orientation::Vertical);
        assert_eq!(Direction::Right.blocking_orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_player_goals() {
        assert_eq!(Player::One.goal_row(), 8);
        assert_eq!(Player::Two.goal_row(), 0);
        assert_eq!(Player::One.start_position(), Position::new(0, 4));
        assert_eq!(Player::Two.start_position(), Position::new(8, 4));
        assert_eq!(Player::One.opponent(), Player::Two);
    }
}
