use crate::board::Board;
use crate::position::{Direction, Position, BOARD_SIZE};

const NUM_CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// Shortest number of moves from `start` to any cell of `target_row`,
/// expanding only across edges [`Board::wall_passable`] allows. Pawns do not
/// block the search; only walls do. Returns `None` when the row is
/// unreachable.
///
/// Uses fixed-size visited and queue arrays to stay allocation-free: every
/// cell is enqueued at most once, so 81 queue entries suffice.
pub fn distance_to_row(board: &Board, start: Position, target_row: i32) -> Option<u32> {
    debug_assert!(start.in_bounds());
    debug_assert!((0..BOARD_SIZE).contains(&target_row));

    if start.row == target_row {
        return Some(0);
    }

    let mut visited = [[false; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    visited[start.row as usize][start.col as usize] = true;

    let mut queue = [(start, 0u32); NUM_CELLS];
    let mut head = 0;
    let mut tail = 1;

    while head != tail {
        let (pos, steps) = queue[head];
        head += 1;

        for direction in Direction::ALL {
            let next = pos + direction;
            if !next.in_bounds()
                || visited[next.row as usize][next.col as usize]
                || !board.wall_passable(pos, next)
            {
                continue;
            }
            if next.row == target_row {
                return Some(steps + 1);
            }
            visited[next.row as usize][next.col as usize] = true;
            queue[tail] = (next, steps + 1);
            tail += 1;
        }
    }

    None
}

/// True iff any cell of `target_row` is reachable from `start`.
pub fn has_path_to_row(board: &Board, start: Position, target_row: i32) -> bool {
    distance_to_row(board, start, target_row).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Orientation, Player};

    #[test]
    fn test_distance_on_open_board() {
        let board = Board::new();
        assert_eq!(distance_to_row(&board, Position::new(0, 4), 8), Some(8));
        assert_eq!(distance_to_row(&board, Position::new(8, 4), 0), Some(8));
        assert_eq!(distance_to_row(&board, Position::new(3, 0), 3), Some(0));
    }

    #[test]
    fn test_walls_lengthen_path() {
        let mut board = Board::new();
        // Wall directly below player one forces a sidestep.
        board
            .place_wall(Orientation::Horizontal, Position::new(0, 4))
            .unwrap();
        assert_eq!(distance_to_row(&board, Position::new(0, 4), 1), Some(2));
    }

    #[test]
    fn test_unreachable_row() {
        let mut board = Board::new();
        // Wall off rows 0 and 1 from each other: four horizontal walls cover
        // columns 0-7, then a chimney isolates the remaining column-8 passage.
        for col in [0, 2, 4, 6] {
            board
                .place_wall(Orientation::Horizontal, Position::new(0, col))
                .unwrap();
        }
        board
            .place_wall(Orientation::Vertical, Position::new(0, 7))
            .unwrap();
        assert!(has_path_to_row(&board, Position::new(8, 4), 0));

        board
            .place_wall(Orientation::Horizontal, Position::new(1, 7))
            .unwrap();
        assert!(!has_path_to_row(&board, Position::new(8, 4), 0));
        // Player one, inside the sealed pocket, is cut off as well.
        assert!(!has_path_to_row(&board, board.pawn(Player::One).position, 8));
        // And player two can still reach its own side trivially.
        assert!(has_path_to_row(&board, Position::new(8, 4), 8));
    }
}
