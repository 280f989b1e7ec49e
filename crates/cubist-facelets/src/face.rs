//! The six faces, their orientation frames, and sticker addressing.
//!
//! Every face is read as seen from outside the cube. Its frame is three unit
//! vectors: the outward `normal`, the `right` direction along which columns
//! advance, and the `down` direction along which rows advance. Row 0 is the
//! edge shared with the face's reference neighbor:
//!
//! | face  | reference | normal | right | down |
//! |-------|-----------|--------|-------|------|
//! | Up    | Back      | +z     | +x    | -y   |
//! | Left  | Up        | -x     | -y    | -z   |
//! | Front | Up        | -y     | +x    | -z   |
//! | Right | Up        | +x     | +y    | -z   |
//! | Back  | Up        | +y     | -x    | -z   |
//! | Down  | Front     | -z     | +x    | +y   |

use crate::coord::CubeCoord;

/// Number of stickers on one face.
pub const STICKERS_PER_FACE: usize = 9;

/// Number of stickers on the whole cube.
pub const FACELET_COUNT: usize = 54;

const _: () = assert!(STICKERS_PER_FACE * 6 == FACELET_COUNT);

/// One face layer of the cube, in global facelet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    /// Faces in facelet-string order.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Left,
        Self::Front,
        Self::Right,
        Self::Back,
        Self::Down,
    ];

    /// Position of this face in the facelet string (0..6).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Turn-notation letter.
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Left => 'L',
            Self::Front => 'F',
            Self::Right => 'R',
            Self::Back => 'B',
            Self::Down => 'D',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.letter() == letter)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Front => Self::Back,
            Self::Right => Self::Left,
            Self::Back => Self::Front,
            Self::Down => Self::Up,
        }
    }

    /// Outward unit normal.
    pub const fn normal(self) -> CubeCoord {
        match self {
            Self::Up => CubeCoord::new(0, 0, 1),
            Self::Left => CubeCoord::new(-1, 0, 0),
            Self::Front => CubeCoord::new(0, -1, 0),
            Self::Right => CubeCoord::new(1, 0, 0),
            Self::Back => CubeCoord::new(0, 1, 0),
            Self::Down => CubeCoord::new(0, 0, -1),
        }
    }

    /// Direction of increasing column, as seen from outside.
    pub const fn right(self) -> CubeCoord {
        match self {
            Self::Up | Self::Front | Self::Down => CubeCoord::new(1, 0, 0),
            Self::Left => CubeCoord::new(0, -1, 0),
            Self::Right => CubeCoord::new(0, 1, 0),
            Self::Back => CubeCoord::new(-1, 0, 0),
        }
    }

    /// Direction of increasing row, as seen from outside.
    pub const fn down(self) -> CubeCoord {
        match self {
            Self::Up => CubeCoord::new(0, -1, 0),
            Self::Down => CubeCoord::new(0, 1, 0),
            Self::Left | Self::Front | Self::Right | Self::Back => CubeCoord::new(0, 0, -1),
        }
    }

    /// The face whose outward normal is `normal`, if it is a lattice axis.
    pub fn from_normal(normal: CubeCoord) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.normal() == normal)
    }

    /// The four adjacent faces in clockwise order seen from outside,
    /// starting with the one bordering row 0.
    pub fn neighbors(self) -> [Self; 4] {
        let d = self.down();
        let r = self.right();
        [-d, r, d, -r].map(|n| match Self::from_normal(n) {
            Some(face) => face,
            None => unreachable!("face frames are built from lattice axes"),
        })
    }

    /// The neighbor bordering row 0 of this face.
    pub fn reference(self) -> Self {
        self.neighbors()[0]
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Left => "left",
            Self::Front => "front",
            Self::Right => "right",
            Self::Back => "back",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

/// Address of one sticker: a face plus row and column in that face's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sticker {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl Sticker {
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        Self { face, row, col }
    }

    /// Position in the 54-entry facelet sequence.
    pub const fn index(&self) -> usize {
        self.face.index() * STICKERS_PER_FACE + self.row * 3 + self.col
    }

    /// Inverse of [`Sticker::index`]. Returns `None` past the last sticker.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= FACELET_COUNT {
            return None;
        }
        let face = Face::ALL[index / STICKERS_PER_FACE];
        let offset = index % STICKERS_PER_FACE;
        Some(Self::new(face, offset / 3, offset % 3))
    }

    /// Lattice position of the cubie carrying this sticker.
    pub fn cubie(&self) -> CubeCoord {
        self.face.normal()
            + self.face.right() * (self.col as i32 - 1)
            + self.face.down() * (self.row as i32 - 1)
    }

    /// Locate the sticker on `cubie` that faces along `normal`.
    pub fn locate(cubie: CubeCoord, normal: CubeCoord) -> Option<Self> {
        let face = Face::from_normal(normal)?;
        if cubie.dot(&normal) != 1 {
            return None;
        }
        let col = cubie.dot(&face.right()) + 1;
        let row = cubie.dot(&face.down()) + 1;
        if !(0..3).contains(&col) || !(0..3).contains(&row) {
            return None;
        }
        Some(Self::new(face, row as usize, col as usize))
    }
}
