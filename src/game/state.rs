use rand::Rng;

use super::{Board, MoveError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One game: the board, whose turn it is, and how the game ended.
///
/// The active player only changes after a placement that leaves the game in
/// progress. After a win the mover stays active, and a rejected move leaves
/// the same player to retry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game with the starting player drawn from `rng`
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::starting_with(Player::random(rng))
    }

    /// Create a fresh game where `player` moves first
    pub fn starting_with(player: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: player,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's disc into `column` and advance the game.
    ///
    /// Returns the outcome if this move ended the game.
    pub fn apply_move(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.drop_piece(column, mover)?;
        tracing::debug!(player = mover.name(), row, column, "disc placed");

        // A move can only complete a line for the player who made it
        if self.board.is_winning_move(mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = mover.other();
        }

        Ok(self.outcome)
    }
}
