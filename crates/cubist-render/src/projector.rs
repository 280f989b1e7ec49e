//! Facelet state to colored quads.
//!
//! The cube occupies `[0, 3]^3` with x to the right, y toward the back and z
//! up, so every sticker is a unit square on one of the six boundary planes.
//! Geometry depends only on (face, row, col); only the color follows state.

use crate::error::{Error, Result};
use cubist_facelets::{Color, CubeCoord, Face, FaceletState, Sticker, FACELET_COUNT};
use glam::Vec3;
use serde::Serialize;

/// Edge length of the rendered cube.
pub const CUBE_SIZE: f32 = 3.0;

/// One sticker as a colored square in space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceQuad {
    pub face: Face,
    pub row: usize,
    pub col: usize,
    /// Corners wound counter-clockwise as seen from outside the cube.
    pub vertices: [Vec3; 4],
    pub color: Color,
}

impl FaceQuad {
    /// Outward unit normal of the quad.
    pub fn normal(&self) -> Vec3 {
        let [a, b, c, _] = self.vertices;
        (b - a).cross(c - b).normalize()
    }

    pub fn center(&self) -> Vec3 {
        self.vertices.iter().copied().sum::<Vec3>() / 4.0
    }
}

fn to_vec3(coord: CubeCoord) -> Vec3 {
    Vec3::new(coord.x as f32, coord.y as f32, coord.z as f32)
}

/// Corners of the square for `sticker`, independent of its color.
pub fn sticker_corners(sticker: Sticker) -> [Vec3; 4] {
    let normal = to_vec3(sticker.face.normal());
    let right = to_vec3(sticker.face.right());
    let down = to_vec3(sticker.face.down());

    let half = CUBE_SIZE / 2.0;
    let center = Vec3::splat(half)
        + normal * half
        + right * (sticker.col as f32 - 1.0)
        + down * (sticker.row as f32 - 1.0);

    let r = right * 0.5;
    let d = down * 0.5;
    [center - r + d, center + r + d, center + r - d, center - r - d]
}

fn quad(sticker: Sticker, color: Color) -> FaceQuad {
    FaceQuad {
        face: sticker.face,
        row: sticker.row,
        col: sticker.col,
        vertices: sticker_corners(sticker),
        color,
    }
}

/// Project a validated state: always 54 quads.
pub fn project(state: &FaceletState) -> Vec<FaceQuad> {
    state
        .stickers()
        .map(|(sticker, color)| quad(sticker, color))
        .collect()
}

/// Project a raw color sequence, which must hold exactly 54 entries.
pub fn project_colors(colors: &[Color]) -> Result<Vec<FaceQuad>> {
    if colors.len() != FACELET_COUNT {
        return Err(Error::Geometry {
            found: colors.len(),
        });
    }
    Ok(colors
        .iter()
        .enumerate()
        .filter_map(|(index, &color)| Sticker::from_index(index).map(|s| quad(s, color)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubist_facelets::{ColorScheme, Move};

    fn solved() -> FaceletState {
        FaceletState::solved(&ColorScheme::STANDARD)
    }

    /// The pinned axis and its value for a face's plane.
    fn plane(face: Face) -> (usize, f32) {
        let n = face.normal();
        let axis = [n.x, n.y, n.z].iter().position(|&c| c != 0).unwrap();
        let value = if [n.x, n.y, n.z][axis] > 0 { CUBE_SIZE } else { 0.0 };
        (axis, value)
    }

    #[test]
    fn always_fifty_four_quads() {
        assert_eq!(project(&solved()).len(), 54);
        let mut state = solved();
        state.apply(Move::parse("R").unwrap());
        assert_eq!(project(&state).len(), 54);
    }

    #[test]
    fn faces_lie_on_distinct_planes() {
        let quads = project(&solved());
        let mut planes = Vec::new();
        for face in Face::ALL {
            let (axis, value) = plane(face);
            for quad in quads.iter().filter(|q| q.face == face) {
                for v in quad.vertices {
                    assert_eq!(v[axis], value, "{face} vertex {v}");
                }
            }
            assert!(!planes.contains(&(axis, value as i32)));
            planes.push((axis, value as i32));
        }
        assert_eq!(planes.len(), 6);
    }

    #[test]
    fn quads_stay_inside_cube_and_are_unit_squares() {
        for quad in project(&solved()) {
            for v in quad.vertices {
                assert!(v.min_element() >= 0.0 && v.max_element() <= CUBE_SIZE);
            }
            let [a, b, c, d] = quad.vertices;
            assert_eq!(a.distance(b), 1.0);
            assert_eq!(b.distance(c), 1.0);
            assert_eq!(c.distance(d), 1.0);
            assert_eq!(d.distance(a), 1.0);
        }
    }

    #[test]
    fn winding_faces_outward() {
        for quad in project(&solved()) {
            assert_eq!(quad.normal(), to_vec3(quad.face.normal()), "{:?}", quad.face);
        }
    }

    #[test]
    fn up_face_row_zero_borders_back() {
        let corners = sticker_corners(Sticker::new(Face::Up, 0, 0));
        for v in corners {
            assert!(v.y >= 2.0);
            assert!(v.x <= 1.0);
            assert_eq!(v.z, 3.0);
        }
    }

    #[test]
    fn shared_corner_stickers_touch() {
        // Up (2,2), Front (0,2) and Right (0,0) meet at (3, 0, 3).
        let corner = Vec3::new(3.0, 0.0, 3.0);
        for sticker in [
            Sticker::new(Face::Up, 2, 2),
            Sticker::new(Face::Front, 0, 2),
            Sticker::new(Face::Right, 0, 0),
        ] {
            assert!(sticker_corners(sticker).contains(&corner), "{sticker:?}");
        }
    }

    #[test]
    fn geometry_is_stateless() {
        let mut state = solved();
        state.apply(Move::parse("F2").unwrap());
        let before = project(&solved());
        let after = project(&state);
        for (a, b) in before.iter().zip(&after) {
            assert_eq!(a.vertices, b.vertices);
        }
        assert_ne!(
            before.iter().map(|q| q.color).collect::<Vec<_>>(),
            after.iter().map(|q| q.color).collect::<Vec<_>>()
        );
    }

    #[test]
    fn raw_colors_must_be_complete() {
        let state = solved();
        assert_eq!(project_colors(state.as_slice()).unwrap(), project(&state));
        assert_eq!(
            project_colors(&state.as_slice()[..50]),
            Err(Error::Geometry { found: 50 })
        );
    }
}
