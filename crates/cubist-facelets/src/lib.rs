//! Cubist Facelets
//!
//! The 54-sticker state model of a 3x3x3 cube and everything that changes it.
//!
//! # Layout
//!
//! A [`FaceletState`] lists stickers face by face in the order Up, Left,
//! Front, Right, Back, Down, each face row-major as seen from outside the
//! cube. Its string form uses one letter per sticker from `w y r o b g`
//! and is the exchange format with external solvers.
//!
//! # Moves
//!
//! A [`Move`] is a fixed permutation of sticker positions. Every move has an
//! exact [`Move::inverse`], and applying a move followed by its inverse
//! returns any state to itself. Playback relies on this law to step
//! backwards without keeping history.
//!
//! # Capture
//!
//! [`assemble`] turns six camera captures, each taken with some neighboring
//! face on top, into one consistently oriented state.

mod capture;
mod color;
mod coord;
mod error;
mod face;
mod moves;
mod net;
mod state;

pub use capture::{assemble, reorientation, CaptureRecord, FaceGrid, Rotation, CAPTURE_PROTOCOL};
pub use color::Color;
pub use coord::CubeCoord;
pub use error::{CaptureFault, CubeFault, Error, Result};
pub use face::{Face, Sticker, FACELET_COUNT, STICKERS_PER_FACE};
pub use moves::{apply, invert_sequence, parse_sequence, Move, Turn};
pub use net::{render_net, NetStyle};
pub use state::{ColorScheme, FaceletState};
