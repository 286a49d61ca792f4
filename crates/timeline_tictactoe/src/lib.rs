//! Timeline tic-tac-toe - game logic with move history and time travel
//!
//! The game keeps every board it has ever shown. Any earlier board can be
//! revisited, and playing from an earlier board discards the moves that
//! followed it.
//!
//! # Architecture
//!
//! - **Types**: players, squares, positions and immutable board snapshots
//! - **Rules**: win detection over the eight canonical lines
//! - **Intent**: validation of a cell click into the next snapshot
//! - **Game**: the history of snapshots and the current move pointer
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! game.attempt_move(Position::Center);
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! game.go_to_move(0).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod intent;
mod position;
mod types;

pub mod rules;

pub use error::GameError;
pub use game::{Game, MoveEntry, Status};
pub use intent::{MoveOutcome, MoveRejected, propose_move};
pub use position::Position;
pub use types::{Board, Player, Square};
