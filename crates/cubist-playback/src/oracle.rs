//! Contracts for the external solver and vision collaborators.
//!
//! Both are black boxes. Their outputs cross into the engine only after
//! validation: solver tokens become parsed [`Move`](cubist_facelets::Move)s
//! and vision grids become typed capture records.

use crate::cursor::PlaybackCursor;
use crate::error::{Error, Result};
use crate::sequence::AnnotatedSequence;
use cubist_facelets::{CaptureRecord, Color, Face, FaceletState};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Raw solver answer: move tokens and, optionally, one phase label per move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverOutput {
    pub moves: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<String>>,
}

/// Raw vision answer for one captured face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionReport {
    /// Three rows of three color names.
    pub grid: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl VisionReport {
    /// Parse the oracle's JSON reply, e.g. `{"grid": [[...], ...], "confidence": 0.9}`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate the grid into a capture of `face` taken with `top` held up.
    pub fn into_record(self, face: Face, top: Color) -> Result<CaptureRecord> {
        CaptureRecord::from_names(face, top, &self.grid).map_err(|err| {
            warn!(%face, %err, "vision grid rejected");
            Error::from(err)
        })
    }
}

/// Finds a move sequence that solves a cube.
pub trait Solver {
    fn solve(&self, cube: &FaceletState) -> Result<SolverOutput>;
}

/// Classifies the stickers of one face from an image.
pub trait Vision {
    fn classify(&self, image: &[u8]) -> Result<VisionReport>;
}

/// A solver that answers with a stored output.
///
/// With an expected cube set, any other cube is refused.
#[derive(Debug, Clone)]
pub struct RecordedSolver {
    expected: Option<FaceletState>,
    output: SolverOutput,
}

impl RecordedSolver {
    pub fn new(output: SolverOutput) -> Self {
        Self {
            expected: None,
            output,
        }
    }

    pub fn for_cube(cube: FaceletState, output: SolverOutput) -> Self {
        Self {
            expected: Some(cube),
            output,
        }
    }
}

impl Solver for RecordedSolver {
    fn solve(&self, cube: &FaceletState) -> Result<SolverOutput> {
        match &self.expected {
            Some(expected) if expected != cube => Err(Error::Oracle(format!(
                "recorded solution is for {expected}, not {cube}"
            ))),
            _ => Ok(self.output.clone()),
        }
    }
}

/// Ask `solver` for a solution and start a cursor over it.
pub fn solve_into_cursor<S: Solver + ?Sized>(solver: &S, cube: FaceletState) -> Result<PlaybackCursor> {
    let output = solver.solve(&cube)?;
    let sequence = AnnotatedSequence::from_solver_output(&output)?;
    debug!(moves = sequence.len(), "solver answered");
    Ok(PlaybackCursor::new(cube, sequence))
}

/// Classify `image` with `vision` and validate it as a capture of `face`.
pub fn capture_face<V: Vision + ?Sized>(
    vision: &V,
    image: &[u8],
    face: Face,
    top: Color,
) -> Result<CaptureRecord> {
    vision.classify(image)?.into_record(face, top)
}
