//! Error types for loam-automata.

use thiserror::Error;

/// Errors that can occur during grid operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A caller-addressed coordinate lies outside the grid.
    #[error("cell out of bounds: ({x}, {y}) in {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// An insertion direction index outside `0..=4`.
    #[error("invalid insertion direction: {0}")]
    InvalidDirection(usize),

    /// An observed-neighborhood slice whose length is not 9.
    #[error("neighborhood length mismatch: expected 9, got {0}")]
    NeighborhoodLen(usize),

    /// A pattern slice whose length is not 9.
    #[error("pattern length mismatch: expected 9, got {0}")]
    PatternLen(usize),
}
