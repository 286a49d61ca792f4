//! Turning a cell click into the next board.
//!
//! A click is only an intent. It becomes a move when the clicked square is
//! empty and the board has no winner yet; otherwise it is ignored.

use derive_more::Display;
use tracing::instrument;

use crate::rules::check_winner;
use crate::{Board, Player, Position};

/// Why a click did not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejected {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board already has a winner.
    #[display("Game already won by {}", _0)]
    AlreadyWon(Player),

    /// The cell index does not name a square.
    #[display("Cell index {} is outside the board", _0)]
    OutOfBounds(usize),
}

/// Result of attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and the history advanced.
    Applied,
    /// The click was ignored; nothing changed.
    Ignored(MoveRejected),
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// Derives the board that results from `to_move` playing at `position`.
///
/// # Errors
///
/// Returns [`MoveRejected::SquareOccupied`] if the square is taken and
/// [`MoveRejected::AlreadyWon`] if the board already has a winner.
#[instrument]
pub fn propose_move(
    board: &Board,
    position: Position,
    to_move: Player,
) -> Result<Board, MoveRejected> {
    if !board.is_empty(position) {
        return Err(MoveRejected::SquareOccupied(position));
    }

    if let Some(winner) = check_winner(board) {
        return Err(MoveRejected::AlreadyWon(winner));
    }

    Ok(board.with_mark(position, to_move))
}
