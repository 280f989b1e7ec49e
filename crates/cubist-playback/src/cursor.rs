//! Forward/backward playback of a solution over a live cube.
//!
//! The cursor owns the live [`FaceletState`] and a position `p` in `[0, N]`:
//! exactly the first `p` moves have been applied. Stepping forward applies
//! move `p`; stepping backward applies the inverse of move `p - 1`. No
//! history is kept, so returning to a position always reproduces the same
//! state because every move is undone by its inverse.

use crate::error::{Error, Result};
use crate::sequence::{AnnotatedMove, AnnotatedSequence};
use cubist_facelets::{FaceletState, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Which way a step went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepDirection {
    /// A move was applied
    Applied,
    /// A move was undone
    Undone,
}

/// Outcome of one successful step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub direction: StepDirection,
    /// The sequence move that was applied or undone.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Phase label of that move, exactly as the solver supplied it.
    pub phase: String,
    /// Cursor position after the step.
    pub position: usize,
    pub total: usize,
}

impl StepReport {
    /// Short progress line for a status bar.
    pub fn message(&self) -> String {
        match self.direction {
            StepDirection::Applied if self.position == self.total => "Solved!".to_string(),
            StepDirection::Applied => format!("Move {}/{}", self.position, self.total),
            StepDirection::Undone if self.position == 0 => "Initial state".to_string(),
            StepDirection::Undone => {
                format!("Move {}/{}: Undid {}", self.position, self.total, self.mv)
            }
        }
    }

    /// Phase line for a status bar.
    pub fn phase_line(&self) -> String {
        match self.direction {
            StepDirection::Applied if self.position == self.total => "Completed!".to_string(),
            StepDirection::Undone if self.position == 0 => String::new(),
            _ => format!("Step: {}", self.phase),
        }
    }
}

/// Playback cursor over an annotated sequence.
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    sequence: AnnotatedSequence,
    state: FaceletState,
    position: usize,
}

impl PlaybackCursor {
    /// Start at position 0 with `initial` as the live state.
    pub fn new(initial: FaceletState, sequence: AnnotatedSequence) -> Self {
        debug!(moves = sequence.len(), cube = %initial, "playback cursor created");
        Self {
            sequence,
            state: initial,
            position: 0,
        }
    }

    /// Number of moves applied to the live state.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of moves.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Read view of the live state.
    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    pub fn sequence(&self) -> &AnnotatedSequence {
        &self.sequence
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_complete(&self) -> bool {
        self.position == self.sequence.len()
    }

    pub fn can_step_forward(&self) -> bool {
        !self.is_complete()
    }

    pub fn can_step_backward(&self) -> bool {
        !self.is_at_start()
    }

    /// The move a forward step would apply.
    pub fn next_move(&self) -> Option<&AnnotatedMove> {
        self.sequence.get(self.position)
    }

    /// The most recently applied move.
    pub fn last_move(&self) -> Option<&AnnotatedMove> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.sequence.get(index))
    }

    /// Phase of the most recently applied move.
    pub fn current_phase(&self) -> Option<&str> {
        self.last_move().map(|m| m.phase.as_str())
    }

    /// Apply the next move. Fails without touching state at the end.
    pub fn step_forward(&mut self) -> Result<StepReport> {
        let Some(annotated) = self.sequence.get(self.position) else {
            return Err(Error::NoMoreMoves);
        };
        let (mv, phase) = (annotated.mv, annotated.phase.clone());
        self.state.apply(mv);
        self.position += 1;
        trace!(%mv, position = self.position, "applied");
        Ok(self.report(StepDirection::Applied, mv, phase))
    }

    /// Undo the last applied move. Fails without touching state at the start.
    pub fn step_backward(&mut self) -> Result<StepReport> {
        let Some(index) = self.position.checked_sub(1) else {
            return Err(Error::AtInitialState);
        };
        let Some(annotated) = self.sequence.get(index) else {
            return Err(Error::AtInitialState);
        };
        let (mv, phase) = (annotated.mv, annotated.phase.clone());
        self.position = index;
        self.state.apply(mv.inverse());
        trace!(%mv, position = self.position, "undone");
        Ok(self.report(StepDirection::Undone, mv, phase))
    }

    /// Step until the cursor sits at `target`, clamped to `[0, N]`.
    ///
    /// Returns the number of steps taken.
    pub fn seek(&mut self, target: usize) -> usize {
        let target = target.min(self.sequence.len());
        let mut steps = 0;
        while self.position < target && self.step_forward().is_ok() {
            steps += 1;
        }
        while self.position > target && self.step_backward().is_ok() {
            steps += 1;
        }
        debug!(position = self.position, steps, "seek");
        steps
    }

    /// Undo every applied move.
    pub fn rewind(&mut self) -> usize {
        self.seek(0)
    }

    /// The whole solution with the next move bracketed.
    pub fn solution_listing(&self) -> String {
        let highlight = self.can_step_forward().then_some(self.position);
        self.sequence.listing(highlight)
    }

    /// Fraction of moves applied (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.sequence.is_empty() {
            1.0
        } else {
            self.position as f64 / self.sequence.len() as f64
        }
    }

    fn report(&self, direction: StepDirection, mv: Move, phase: String) -> StepReport {
        StepReport {
            direction,
            mv,
            phase,
            position: self.position,
            total: self.sequence.len(),
        }
    }
}

/// Playback status for sending to a display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub position: usize,
    pub total: usize,
    pub phase: Option<String>,
    pub next_move: Option<Move>,
    pub cube: FaceletState,
    pub progress: f64,
    pub can_step_forward: bool,
    pub can_step_backward: bool,
}

impl From<&PlaybackCursor> for PlaybackStatus {
    fn from(cursor: &PlaybackCursor) -> Self {
        Self {
            position: cursor.position,
            total: cursor.len(),
            phase: cursor.current_phase().map(str::to_string),
            next_move: cursor.next_move().map(|m| m.mv),
            cube: cursor.state,
            progress: cursor.progress(),
            can_step_forward: cursor.can_step_forward(),
            can_step_backward: cursor.can_step_backward(),
        }
    }
}
