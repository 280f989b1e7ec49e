//! Phase-annotated move sequences.
//!
//! A solver produces moves in phases ("White Cross", "Second Layer", ...).
//! Each move carries the label of the phase that produced it. Labels are
//! opaque: they are stored and reported exactly as the solver supplied them.

use crate::error::{Error, Result};
use crate::oracle::SolverOutput;
use cubist_facelets::Move;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Phase label given to every move of a solver output that carries none.
pub const UNLABELED_PHASE: &str = "Solution";

/// One move plus the solving phase that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub phase: String,
}

impl AnnotatedMove {
    pub fn new(mv: Move, phase: impl Into<String>) -> Self {
        Self {
            mv,
            phase: phase.into(),
        }
    }
}

/// A contiguous run of moves sharing one phase label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSpan {
    pub phase: String,
    /// Index of the first move in the run.
    pub start: usize,
    /// One past the last move in the run.
    pub end: usize,
}

/// An ordered list of fully parsed, labeled moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotatedSequence {
    moves: Vec<AnnotatedMove>,
}

impl AnnotatedSequence {
    pub fn new(moves: Vec<AnnotatedMove>) -> Self {
        Self { moves }
    }

    /// Label every move with [`UNLABELED_PHASE`].
    pub fn unannotated(moves: impl IntoIterator<Item = Move>) -> Self {
        Self::new(
            moves
                .into_iter()
                .map(|mv| AnnotatedMove::new(mv, UNLABELED_PHASE))
                .collect(),
        )
    }

    /// Parse a solver's tokens and attach its phase labels.
    ///
    /// Every token must parse; a single bad token rejects the whole output.
    pub fn from_solver_output(output: &SolverOutput) -> Result<Self> {
        if let Some(phases) = &output.phases {
            if phases.len() != output.moves.len() {
                return Err(Error::PhaseCountMismatch {
                    moves: output.moves.len(),
                    phases: phases.len(),
                });
            }
        }

        let mut moves = Vec::with_capacity(output.moves.len());
        for (i, token) in output.moves.iter().enumerate() {
            let mv = Move::parse(token.trim())?;
            let phase = match &output.phases {
                Some(phases) => phases[i].clone(),
                None => UNLABELED_PHASE.to_string(),
            };
            moves.push(AnnotatedMove::new(mv, phase));
        }
        debug!(moves = moves.len(), "parsed solver output");
        Ok(Self::new(moves))
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnnotatedMove> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedMove> {
        self.moves.iter()
    }

    /// The bare moves, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.moves.iter().map(|m| m.mv).collect()
    }

    /// Runs of consecutive moves with the same label.
    pub fn phase_spans(&self) -> Vec<PhaseSpan> {
        let mut spans: Vec<PhaseSpan> = Vec::new();
        for (index, annotated) in self.moves.iter().enumerate() {
            if let Some(span) = spans.last_mut().filter(|s| s.phase == annotated.phase) {
                span.end = index + 1;
                continue;
            }
            spans.push(PhaseSpan {
                phase: annotated.phase.clone(),
                start: index,
                end: index + 1,
            });
        }
        spans
    }

    /// Comma-separated listing with the move at `highlight` bracketed.
    pub fn listing(&self, highlight: Option<usize>) -> String {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, m)| {
                if Some(i) == highlight {
                    format!("[{}]", m.mv)
                } else {
                    m.mv.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
