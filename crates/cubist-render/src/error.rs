//! Error types for cubist-render.

use thiserror::Error;

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while projecting facelets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The facelet sequence was not a full cube. Validated states never hit this.
    #[error("cannot project {found} facelets, expected 54")]
    Geometry { found: usize },
}
