//! Error types for history navigation.

use derive_more::{Display, Error};

/// Error raised when navigating the move history.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested move index is past the end of the history.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// The index that was requested.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}
