use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::pathfinding::has_path_to_row;
use crate::position::{Orientation, Player, Position};

/// Walls each player starts with.
pub const WALLS_PER_PLAYER: u8 = 10;

/// Match status. Terminal once a player has won: every mutating command is a
/// no-op afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Ongoing,
    Won(Player),
}

/// Turn sequencing, win detection, wall budgets, and the path-availability
/// invariant on top of [`Board`].
///
/// Commands return `bool`: legality failures (bad move target, illegal or
/// path-blocking wall, empty budget, acting after game over) are expected
/// caller outcomes, not errors, because UI code probes them interactively.
/// Exactly one of the two commands succeeding flips the current player;
/// failed calls never do.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current: Player,
    walls_remaining: [u8; 2],
    state: GameState,
    path_block_rejected: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::One,
            walls_remaining: [WALLS_PER_PLAYER; 2],
            state: GameState::Ongoing,
            path_block_rejected: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn walls_remaining(&self, player: Player) -> u8 {
        self.walls_remaining[player.index()]
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state != GameState::Ongoing
    }

    pub fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::Won(player) => Some(player),
            GameState::Ongoing => None,
        }
    }

    /// Legal destinations for the current player's next move.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.valid_pawn_moves(self.current)
    }

    /// Placement preview for the current player: slot geometry plus wall
    /// budget and terminal-state gates. Does not run the path check, so a
    /// placement this approves may still be rejected by [`Game::place_wall`].
    pub fn can_place_wall_at(&self, orientation: Orientation, position: Position) -> bool {
        !self.is_game_over()
            && self.walls_remaining[self.current.index()] > 0
            && self.board.can_place_wall_at(orientation, position)
    }

    /// True if the most recent `place_wall` was rejected for blocking a
    /// pawn's route to its goal. Reading the flag clears it; the presentation
    /// layer consumes it to show a one-shot message.
    pub fn take_path_blocked(&mut self) -> bool {
        std::mem::take(&mut self.path_block_rejected)
    }

    /// Move the current player's pawn to `target`. On success the win
    /// condition is checked (reaching the goal row ends the game) and
    /// otherwise the turn passes to the opponent. Returns false on an illegal
    /// target, leaving the turn unchanged.
    pub fn move_pawn(&mut self, target: Position) -> bool {
        if self.is_game_over() {
            return false;
        }
        if self.board.move_pawn(self.current, target).is_err() {
            debug!(player = %self.current, %target, "move rejected");
            return false;
        }

        if target.row == self.current.goal_row() {
            self.state = GameState::Won(self.current);
            info!(winner = %self.current, "game over");
        } else {
            self.current = self.current.opponent();
        }
        true
    }

    /// Place a wall for the current player. Fails without side effects when
    /// the budget is empty or the slot is illegal. A geometrically legal wall
    /// that would leave either pawn with no route to its goal row is rolled
    /// back and rejected, setting the path-blocked flag. On success the
    /// budget is decremented and the turn passes to the opponent.
    pub fn place_wall(&mut self, orientation: Orientation, position: Position) -> bool {
        if self.is_game_over() {
            return false;
        }
        if self.walls_remaining[self.current.index()] == 0 {
            debug!(player = %self.current, "wall rejected: no walls remaining");
            return false;
        }
        if self.board.place_wall(orientation, position).is_err() {
            debug!(player = %self.current, ?orientation, %position, "wall rejected: illegal slot");
            return false;
        }

        for player in [Player::One, Player::Two] {
            let pawn = self.board.pawn(player);
            if !has_path_to_row(&self.board, pawn.position, player.goal_row()) {
                self.board.remove_wall(orientation, position);
                self.path_block_rejected = true;
                debug!(
                    player = %self.current,
                    ?orientation,
                    %position,
                    blocked = %player,
                    "wall rejected: would block path to goal"
                );
                return false;
            }
        }

        self.walls_remaining[self.current.index()] -= 1;
        info!(player = %self.current, ?orientation, %position, "wall placed");
        self.current = self.current.opponent();
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
