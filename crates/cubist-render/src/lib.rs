//! Cubist Render
//!
//! Turns a facelet state into geometry a display layer can draw.
//!
//! Every frame is recomputed from the current state: [`project`] yields one
//! [`FaceQuad`] per sticker, and [`quad_vertices`] flattens those into a
//! triangle list for a GPU vertex buffer. Nothing is cached across frames.

mod error;
mod projector;
mod vertex;

pub use error::{Error, Result};
pub use projector::{project, project_colors, sticker_corners, FaceQuad, CUBE_SIZE};
pub use vertex::{pack_rgba, palette, quad_vertices, QuadVertex};
