//! Game engine: board history with a movable current-move pointer.
//!
//! The history always starts with the empty board. Every accepted move drops
//! the boards after the current move and appends the new one, so playing from
//! an earlier point overwrites the old continuation rather than forking it.

use derive_more::Display;
use derive_new::new;
use tracing::{debug, instrument, warn};

use crate::intent::{MoveOutcome, MoveRejected, propose_move};
use crate::rules::{check_winner, winning_line};
use crate::{Board, GameError, Player, Position};

/// Status line for the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// The displayed board has a winner.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner yet; the given player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button label.
    pub label: String,
    /// Whether this index is the board currently shown.
    pub is_current: bool,
}

/// Tic-tac-toe game with time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
}

impl Game {
    /// Creates a new game: one empty board, showing move 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All boards from the empty start to the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed board.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Player whose turn it is on the displayed board.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winner of the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Winning line of the displayed board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.current_board()).map(|(line, _)| line)
    }

    /// Status of the displayed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Appends `next` after the current move, discarding any later boards.
    ///
    /// The caller supplies a board with exactly one new mark relative to the
    /// current board; [`Game::attempt_move`] is the checked entry point.
    #[instrument(skip(self, next), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, next: Board) {
        debug_assert_eq!(
            self.current_board().diff(&next).len(),
            1,
            "a move changes exactly one square"
        );
        debug_assert_eq!(self.current_board().marks() + 1, next.marks());

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Overwriting later moves");
        }

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(current_move = self.current_move, "Move applied");
    }

    /// Shows the board at `target` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MoveOutOfRange`] if `target` is past the last
    /// board; the game is left unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn go_to_move(&mut self, target: usize) -> Result<(), GameError> {
        if target >= self.history.len() {
            warn!(target, len = self.history.len(), "Move index out of range");
            return Err(GameError::MoveOutOfRange {
                target,
                len: self.history.len(),
            });
        }

        self.current_move = target;
        debug!("Jumped to move");
        Ok(())
    }

    /// Plays the current player's mark at `position` if the click is legal.
    ///
    /// Illegal clicks (occupied square, board already won) change nothing;
    /// the returned outcome says why.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn attempt_move(&mut self, position: Position) -> MoveOutcome {
        match propose_move(self.current_board(), position, self.to_move()) {
            Ok(next) => {
                self.apply_move(next);
                MoveOutcome::Applied
            }
            Err(reason) => {
                debug!(%reason, "Move ignored");
                MoveOutcome::Ignored(reason)
            }
        }
    }

    /// Like [`Game::attempt_move`] for a raw cell index (0-8).
    #[instrument(skip(self))]
    pub fn attempt_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.attempt_move(position),
            None => {
                debug!(index, "Cell index ignored");
                MoveOutcome::Ignored(MoveRejected::OutOfBounds(index))
            }
        }
    }

    /// Shows the previous board. Does nothing at the start.
    pub fn step_back(&mut self) -> Result<(), GameError> {
        match self.current_move.checked_sub(1) {
            Some(target) => self.go_to_move(target),
            None => Ok(()),
        }
    }

    /// Shows the next board. Does nothing at the latest move.
    pub fn step_forward(&mut self) -> Result<(), GameError> {
        let target = self.current_move + 1;
        if target < self.history.len() {
            self.go_to_move(target)
        } else {
            Ok(())
        }
    }

    /// Shows the empty starting board.
    ///
    /// The history is kept, so later boards stay reachable until the next
    /// move from the start overwrites them.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.go_to_move(0)
    }

    /// Move list labels, one per board in the history.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|index| {
                let label = if index > 0 {
                    format!("Jump to move #{}", index)
                } else {
                    "Jump back to start".to_string()
                };
                MoveEntry::new(index, label, index == self.current_move)
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history(), &[Board::new()]);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_go_to_move_out_of_range_leaves_state() {
        let mut game = Game::new();
        game.attempt_move(Position::Center);
        let before = game.clone();

        assert_eq!(
            game.go_to_move(2),
            Err(GameError::MoveOutOfRange { target: 2, len: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_attempt_index_out_of_bounds() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_index(9),
            MoveOutcome::Ignored(MoveRejected::OutOfBounds(9))
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_step_back_and_forward_clamp() {
        let mut game = Game::new();
        game.step_back().unwrap();
        assert_eq!(game.current_move(), 0);

        game.attempt_move(Position::TopLeft);
        game.attempt_move(Position::TopRight);
        game.step_back().unwrap();
        game.step_back().unwrap();
        game.step_back().unwrap();
        assert_eq!(game.current_move(), 0);

        game.step_forward().unwrap();
        game.step_forward().unwrap();
        game.step_forward().unwrap();
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_stepping_never_changes_history() {
        let mut game = Game::new();
        game.attempt_move(Position::TopLeft);
        game.attempt_move(Position::Center);
        game.attempt_move(Position::BottomRight);
        let history = game.history().to_vec();

        for _ in 0..5 {
            game.step_back().unwrap();
            assert_eq!(game.history(), history.as_slice());
        }
        for _ in 0..5 {
            game.step_forward().unwrap();
            assert_eq!(game.history(), history.as_slice());
        }
        assert_eq!(game.current_move(), 3);
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new();
        game.attempt_move(Position::TopLeft);
        game.attempt_move(Position::Center);
        game.restart().unwrap();

        assert_eq!(game.current_move(), 0);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.status().to_string(), "Next player: X");

        game.go_to_move(2).unwrap();
        assert_eq!(
            game.current_board().get(Position::Center),
            crate::Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_move_list_marks_current() {
        let mut game = Game::new();
        game.attempt_move(Position::TopLeft);
        game.attempt_move(Position::Center);
        game.go_to_move(1).unwrap();

        let list = game.move_list();
        assert_eq!(
            list,
            vec![
                MoveEntry::new(0, "Jump back to start".to_string(), false),
                MoveEntry::new(1, "Jump to move #1".to_string(), true),
                MoveEntry::new(2, "Jump to move #2".to_string(), false),
            ]
        );
    }
}
