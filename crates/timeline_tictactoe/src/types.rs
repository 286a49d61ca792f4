//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is after `move_number` moves.
    ///
    /// X moves on even move numbers, O on odd ones.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the text shown for this square: `""`, `"X"` or `"O"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// One immutable 3x3 board state.
///
/// Boards are `Copy`; placing a mark produces a new board through
/// [`Board::with_mark`] instead of editing one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn marks(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Positions whose squares differ between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert_eq!(board.get(Position::Center), Square::Empty);
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.diff(&next), vec![Position::Center]);
    }

    #[test]
    fn test_turn_parity() {
        assert_eq!(Player::for_move(0), Player::X);
        assert_eq!(Player::for_move(1), Player::O);
        assert_eq!(Player::for_move(8), Player::X);
    }
}
