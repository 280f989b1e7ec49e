//! Error types for cubist-playback.

use thiserror::Error;

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or stepping a playback.
#[derive(Debug, Error)]
pub enum Error {
    /// Stepped forward with every move already applied.
    #[error("no more moves: the sequence is complete")]
    NoMoreMoves,

    /// Stepped backward with no move applied.
    #[error("already at the initial state")]
    AtInitialState,

    /// Cube or move data from an oracle was malformed.
    #[error(transparent)]
    Facelets(#[from] cubist_facelets::Error),

    /// The solver's phase labels do not line up with its moves.
    #[error("solver returned {moves} moves but {phases} phase labels")]
    PhaseCountMismatch { moves: usize, phases: usize },

    /// An external oracle reported a failure.
    #[error("oracle failure: {0}")]
    Oracle(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for the expected boundary conditions at either end of playback.
    ///
    /// Callers typically disable the matching control instead of reporting these.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Error::NoMoreMoves | Error::AtInitialState)
    }
}
