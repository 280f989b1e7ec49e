//! Cubist Playback
//!
//! Steps through a solver's answer one move at a time, forwards and
//! backwards, over a live cube.
//!
//! # Overview
//!
//! A solver returns move tokens with optional phase labels. They are parsed
//! into an [`AnnotatedSequence`] up front, so a malformed answer is rejected
//! before playback starts. A [`PlaybackCursor`] then owns the live
//! [`FaceletState`](cubist_facelets::FaceletState) and walks the sequence:
//!
//! ```text
//! position 0          position p                position N
//! [initial] --m0--> ... --m(p-1)--> [live] ... --> [solved]
//!                   <--inverse(m(p-1))--
//! ```
//!
//! Undo applies the inverse move rather than restoring a snapshot.
//!
//! # Oracles
//!
//! The [`Solver`] and [`Vision`] traits are the seams to external services.
//! [`RecordedSolver`] answers from a stored [`SolverOutput`].

mod cursor;
mod error;
mod oracle;
mod sequence;

pub use cursor::{PlaybackCursor, PlaybackStatus, StepDirection, StepReport};
pub use error::{Error, Result};
pub use oracle::{
    capture_face, solve_into_cursor, RecordedSolver, Solver, SolverOutput, Vision, VisionReport,
};
pub use sequence::{AnnotatedMove, AnnotatedSequence, PhaseSpan, UNLABELED_PHASE};
