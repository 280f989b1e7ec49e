//! Assembly of six independently captured faces into one facelet state.
//!
//! Each face is photographed while some neighboring face points up. The
//! captured 3x3 grid is therefore the face's canonical grid turned in-plane
//! by however many quarter turns separate that neighbor from the face's
//! reference neighbor (see [`Face::reference`]). Holding the cube so that the
//! k-th clockwise neighbor is on top turns the picture k quarter turns
//! counter-clockwise, so assembly undoes it with k clockwise quarter turns.
//!
//! Neighbors are named by their center color, since that is all a person
//! holding the cube can see. Colors are resolved to faces through the
//! centers of the six captures themselves.

use crate::error::{CaptureFault, Result};
use crate::face::{Face, Sticker, FACELET_COUNT};
use crate::{Color, FaceletState};
use tracing::debug;

/// A captured face, rows top to bottom as seen by the camera.
pub type FaceGrid = [[Color; 3]; 3];

/// The capture procedure: each face with the center color held on top.
///
/// Yellow side with orange on top, then the four sides with yellow on top,
/// then the white side with red on top.
pub const CAPTURE_PROTOCOL: [(Face, Color); 6] = [
    (Face::Up, Color::Orange),
    (Face::Left, Color::Yellow),
    (Face::Front, Color::Yellow),
    (Face::Right, Color::Yellow),
    (Face::Back, Color::Yellow),
    (Face::Down, Color::Red),
];

/// An in-plane turn of a 3x3 grid, in clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    pub const ALL: [Self; 4] = [Self::None, Self::Quarter, Self::Half, Self::ThreeQuarter];

    pub const fn quarter_turns(self) -> usize {
        self as usize
    }

    /// Rotation by `turns` clockwise quarter turns, modulo a full turn.
    pub const fn from_quarter_turns(turns: usize) -> Self {
        Self::ALL[turns % 4]
    }

    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }

    /// Turn `grid` clockwise by this rotation.
    pub fn rotate_grid(self, grid: &FaceGrid) -> FaceGrid {
        let mut out = *grid;
        for _ in 0..self.quarter_turns() {
            let before = out;
            for (i, row) in out.iter_mut().enumerate() {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = before[2 - j][i];
                }
            }
        }
        out
    }
}

/// Rotation that brings a grid captured with `top` up into `face`'s frame.
///
/// `None` when `top` does not border `face`.
pub fn reorientation(face: Face, top: Face) -> Option<Rotation> {
    face.neighbors()
        .iter()
        .position(|&n| n == top)
        .map(Rotation::from_quarter_turns)
}

/// One captured face and the color that was on top while capturing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRecord {
    pub face: Face,
    pub top: Color,
    pub grid: FaceGrid,
}

impl CaptureRecord {
    pub const fn new(face: Face, top: Color, grid: FaceGrid) -> Self {
        Self { face, top, grid }
    }

    /// Build a record from a vision grid of color names.
    ///
    /// The grid must be exactly three rows of three known color names.
    pub fn from_names<S: AsRef<str>>(face: Face, top: Color, rows: &[Vec<S>]) -> Result<Self> {
        if rows.len() != 3 {
            return Err(CaptureFault::MalformedGrid {
                face,
                reason: format!("expected 3 rows, got {}", rows.len()),
            }
            .into());
        }
        let mut grid = [[Color::White; 3]; 3];
        for (r, (cells, row)) in grid.iter_mut().zip(rows).enumerate() {
            if row.len() != 3 {
                return Err(CaptureFault::MalformedGrid {
                    face,
                    reason: format!("row {r} has {} cells", row.len()),
                }
                .into());
            }
            for (cell, name) in cells.iter_mut().zip(row) {
                let name = name.as_ref();
                *cell = Color::from_name(name).ok_or_else(|| CaptureFault::UnknownColor {
                    face,
                    name: name.to_string(),
                })?;
            }
        }
        Ok(Self::new(face, top, grid))
    }

    /// What a camera would see of `face` in `state` with `top` held up.
    ///
    /// `None` when `top` does not border `face`.
    pub fn of_state(state: &FaceletState, face: Face, top: Face) -> Option<Self> {
        let rotation = reorientation(face, top)?;
        let colors = state.face(face);
        let mut canonical = [[Color::White; 3]; 3];
        for (r, row) in canonical.iter_mut().enumerate() {
            row.copy_from_slice(&colors[r * 3..r * 3 + 3]);
        }
        let grid = rotation.inverse().rotate_grid(&canonical);
        Some(Self::new(face, state.center(top), grid))
    }

    pub fn center(&self) -> Color {
        self.grid[1][1]
    }
}

/// Combine six captures, one per face in any order, into a facelet state.
///
/// Nothing is filled in on failure: a missing, duplicated or unorientable
/// capture fails the whole assembly.
pub fn assemble(records: &[CaptureRecord]) -> Result<FaceletState> {
    let mut by_face: [Option<&CaptureRecord>; 6] = [None; 6];
    for record in records {
        let slot = &mut by_face[record.face.index()];
        if slot.is_some() {
            return Err(CaptureFault::DuplicateFace(record.face).into());
        }
        *slot = Some(record);
    }

    let mut ordered = Vec::with_capacity(6);
    for face in Face::ALL {
        match by_face[face.index()] {
            Some(record) => ordered.push(record),
            None => return Err(CaptureFault::MissingFace(face).into()),
        }
    }

    for (i, a) in ordered.iter().enumerate() {
        if ordered[i + 1..].iter().any(|b| b.center() == a.center()) {
            return Err(CaptureFault::DuplicateCenter(a.center()).into());
        }
    }
    let face_of = |color: Color| ordered.iter().find(|r| r.center() == color).map(|r| r.face);

    let mut facelets = [Color::White; FACELET_COUNT];
    for record in &ordered {
        let unresolved = CaptureFault::UnresolvedTop {
            face: record.face,
            top: record.top,
        };
        let top = face_of(record.top).ok_or_else(|| unresolved.clone())?;
        let rotation = reorientation(record.face, top).ok_or(unresolved)?;
        debug!(face = %record.face, top = %top, ?rotation, "reorienting capture");

        let grid = rotation.rotate_grid(&record.grid);
        for (row, cells) in grid.iter().enumerate() {
            for (col, &color) in cells.iter().enumerate() {
                facelets[Sticker::new(record.face, row, col).index()] = color;
            }
        }
    }

    FaceletState::from_colors(&facelets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::{parse_sequence, ColorScheme};

    fn scrambled() -> FaceletState {
        let mut state = FaceletState::solved(&ColorScheme::STANDARD);
        state.apply_all(&parse_sequence("R U2 F' L D B2 U' R2 F").unwrap());
        state
    }

    fn protocol_captures(state: &FaceletState) -> Vec<CaptureRecord> {
        CAPTURE_PROTOCOL
            .iter()
            .map(|&(face, top)| {
                let top_face = ColorScheme::STANDARD.face_of(top).unwrap();
                CaptureRecord::of_state(state, face, top_face).unwrap()
            })
            .collect()
    }

    fn numbered() -> FaceGrid {
        use Color::*;
        [[White, Yellow, Red], [Orange, Blue, Green], [Red, White, Yellow]]
    }

    #[test]
    fn quarter_rotation_moves_top_left_to_top_right() {
        let grid = numbered();
        let turned = Rotation::Quarter.rotate_grid(&grid);
        assert_eq!(turned[0][2], grid[0][0]);
        assert_eq!(turned[2][2], grid[0][2]);
        assert_eq!(turned[1][1], grid[1][1]);
    }

    #[test]
    fn rotation_inverse_restores_grid() {
        let grid = numbered();
        for rotation in Rotation::ALL {
            let turned = rotation.rotate_grid(&grid);
            assert_eq!(rotation.inverse().rotate_grid(&turned), grid, "{rotation:?}");
        }
        assert_eq!(Rotation::None.inverse(), Rotation::None);
        assert_eq!(Rotation::Quarter.inverse(), Rotation::ThreeQuarter);
    }

    #[test]
    fn protocol_uses_reference_neighbors() {
        for (face, top) in CAPTURE_PROTOCOL {
            let top_face = ColorScheme::STANDARD.face_of(top).unwrap();
            assert_eq!(reorientation(face, top_face), Some(Rotation::None), "{face}");
        }
    }

    #[test]
    fn reorientation_rejects_non_neighbors() {
        for face in Face::ALL {
            assert_eq!(reorientation(face, face), None);
            assert_eq!(reorientation(face, face.opposite()), None);
        }
    }

    #[test]
    fn protocol_capture_reassembles_state() {
        let state = scrambled();
        let assembled = assemble(&protocol_captures(&state)).unwrap();
        assert_eq!(assembled, state);
    }

    #[test]
    fn every_face_in_every_orientation() {
        let state = scrambled();
        for face in Face::ALL {
            for top in face.neighbors() {
                let mut records = protocol_captures(&state);
                records[face.index()] = CaptureRecord::of_state(&state, face, top).unwrap();
                let assembled = assemble(&records).unwrap();
                assert_eq!(assembled, state, "{face} captured with {top} on top");
            }
        }
    }

    #[test]
    fn rotated_solved_grids_assemble_monochrome() {
        let solved = FaceletState::solved(&ColorScheme::STANDARD);
        let records: Vec<_> = Face::ALL
            .into_iter()
            .map(|face| CaptureRecord::of_state(&solved, face, face.neighbors()[2]).unwrap())
            .collect();
        let assembled = assemble(&records).unwrap();
        assert!(assembled.is_solved());
        assert_eq!(
            assembled.to_string(),
            "yyyyyyyyybbbbbbbbbrrrrrrrrrgggggggggooooooooowwwwwwwww"
        );
    }

    #[test]
    fn assembled_corners_are_consistent() {
        // Every corner cubie must show three distinct, non-opposite colors.
        let state = assemble(&protocol_captures(&scrambled())).unwrap();
        let opposite = |a: Color, b: Color| {
            let scheme = ColorScheme::STANDARD;
            scheme.face_of(a).map(Face::opposite) == scheme.face_of(b)
        };
        for x in [-1, 1] {
            for y in [-1, 1] {
                for z in [-1, 1] {
                    let cubie = crate::CubeCoord::new(x, y, z);
                    let colors: Vec<Color> = [
                        crate::CubeCoord::new(x, 0, 0),
                        crate::CubeCoord::new(0, y, 0),
                        crate::CubeCoord::new(0, 0, z),
                    ]
                    .into_iter()
                    .map(|normal| state.get(Sticker::locate(cubie, normal).unwrap()))
                    .collect();
                    for i in 0..3 {
                        for j in (i + 1)..3 {
                            assert_ne!(colors[i], colors[j], "corner {cubie}");
                            assert!(!opposite(colors[i], colors[j]), "corner {cubie}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn upside_down_front_capture_is_corrected() {
        let state = scrambled();
        let mut records = protocol_captures(&state);
        // Front captured with white (down) on top: a half turn.
        records[Face::Front.index()] = CaptureRecord::new(
            Face::Front,
            Color::White,
            Rotation::Half.rotate_grid(&records[Face::Front.index()].grid),
        );
        assert_eq!(assemble(&records).unwrap(), state);
    }

    #[test]
    fn front_held_with_right_on_top() {
        // Bringing the right side up turns the picture a quarter turn
        // counter-clockwise: the up-right corner lands top-left.
        let state = scrambled();
        let mut records = protocol_captures(&state);
        let canonical = records[Face::Front.index()].grid;
        let mut seen = [[Color::White; 3]; 3];
        for (i, row) in seen.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = canonical[j][2 - i];
            }
        }
        assert_eq!(seen[0][0], state.get(Sticker::new(Face::Front, 0, 2)));
        records[Face::Front.index()] = CaptureRecord::new(Face::Front, Color::Green, seen);
        assert_eq!(assemble(&records).unwrap(), state);
    }

    #[test]
    fn five_captures_fail() {
        let mut records = protocol_captures(&scrambled());
        records.remove(3);
        let err = assemble(&records).unwrap_err();
        assert_eq!(err, Error::IncompleteCapture(CaptureFault::MissingFace(Face::Right)));
    }

    #[test]
    fn duplicate_face_fails() {
        let mut records = protocol_captures(&scrambled());
        records.push(records[0]);
        let err = assemble(&records).unwrap_err();
        assert_eq!(err, Error::IncompleteCapture(CaptureFault::DuplicateFace(Face::Up)));
    }

    #[test]
    fn duplicate_center_fails() {
        let mut records = protocol_captures(&scrambled());
        records[5].grid[1][1] = Color::Yellow;
        let err = assemble(&records).unwrap_err();
        assert!(matches!(
            err,
            Error::IncompleteCapture(CaptureFault::DuplicateCenter(Color::Yellow))
        ));
    }

    #[test]
    fn opposite_top_fails() {
        let mut records = protocol_captures(&scrambled());
        records[Face::Up.index()].top = Color::White;
        let err = assemble(&records).unwrap_err();
        assert_eq!(
            err,
            Error::IncompleteCapture(CaptureFault::UnresolvedTop {
                face: Face::Up,
                top: Color::White,
            })
        );
    }

    #[test]
    fn names_grid_validation() {
        let good = vec![
            vec!["white", "Yellow", "red"],
            vec!["orange", "blue", "green"],
            vec!["red", "white", "yellow"],
        ];
        let record = CaptureRecord::from_names(Face::Front, Color::Yellow, &good).unwrap();
        assert_eq!(record.grid, numbered());
        assert_eq!(record.center(), Color::Blue);

        let short = vec![vec!["white", "white", "white"]; 2];
        assert!(matches!(
            CaptureRecord::from_names(Face::Front, Color::Yellow, &short),
            Err(Error::IncompleteCapture(CaptureFault::MalformedGrid { .. }))
        ));

        let mut ragged = good.clone();
        ragged[1].pop();
        assert!(matches!(
            CaptureRecord::from_names(Face::Front, Color::Yellow, &ragged),
            Err(Error::IncompleteCapture(CaptureFault::MalformedGrid { .. }))
        ));

        let mut purple = good;
        purple[2][0] = "purple";
        assert_eq!(
            CaptureRecord::from_names(Face::Front, Color::Yellow, &purple),
            Err(Error::IncompleteCapture(CaptureFault::UnknownColor {
                face: Face::Front,
                name: "purple".to_string(),
            }))
        );
    }
}
