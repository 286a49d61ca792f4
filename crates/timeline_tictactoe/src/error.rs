//! Error types for history navigation.

use derive_more::{Display, Error};

/// Error returned by [`Game`](crate::Game) operations that can fail.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The requested move index is past the end of the history.
    #[display("Move #{} is out of range (history holds {} boards)", target, len)]
    MoveOutOfRange {
        /// Requested move index.
        target: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
