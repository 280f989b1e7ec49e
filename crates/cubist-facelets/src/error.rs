//! Error types for cubist-facelets.

use crate::{Color, Face};
use thiserror::Error;

/// Result type for facelet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building cube state from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Facelet data was malformed.
    #[error("invalid cube: {0}")]
    InvalidCube(CubeFault),

    /// A move token could not be parsed.
    #[error("invalid move token {token:?}")]
    InvalidMove { token: String },

    /// The six face captures could not be assembled.
    #[error("incomplete capture: {0}")]
    IncompleteCapture(CaptureFault),
}

/// What was wrong with a facelet sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeFault {
    #[error("expected 54 facelets, got {found}")]
    WrongLength { found: usize },

    #[error("unknown color code {found:?} at position {position}")]
    UnknownColor { position: usize, found: char },

    #[error("unknown color name {name:?} at position {position}")]
    UnknownColorName { position: usize, name: String },
}

/// What was wrong with a set of face captures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureFault {
    #[error("no capture for the {0} face")]
    MissingFace(Face),

    #[error("the {0} face was captured more than once")]
    DuplicateFace(Face),

    #[error("{face} grid is malformed: {reason}")]
    MalformedGrid { face: Face, reason: String },

    #[error("{face} grid contains unknown color {name:?}")]
    UnknownColor { face: Face, name: String },

    #[error("two faces share the center color {0}")]
    DuplicateCenter(Color),

    #[error("{face} was captured with {top} on top, which is not an adjacent face")]
    UnresolvedTop { face: Face, top: Color },
}

impl From<CubeFault> for Error {
    fn from(fault: CubeFault) -> Self {
        Error::InvalidCube(fault)
    }
}

impl From<CaptureFault> for Error {
    fn from(fault: CaptureFault) -> Self {
        Error::IncompleteCapture(fault)
    }
}
