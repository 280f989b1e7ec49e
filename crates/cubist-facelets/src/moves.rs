//! Face-turn notation and the permutations it denotes.
//!
//! A move is a quarter or half turn of one outer layer. Each move is a fixed
//! permutation of the 54 sticker positions, derived once from the cube's
//! geometry: every sticker in the turning layer has its cubie position and
//! normal rotated about the face axis, and lands wherever that rotated
//! pair addresses. Colors are only ever copied between positions, so a
//! move can never make a well-formed state malformed.
//!
//! Token grammar: a face letter `U L F R B D` followed by nothing
//! (clockwise), `'` (counter-clockwise) or `2` (half turn).

use crate::error::{Error, Result};
use crate::face::{Face, Sticker, FACELET_COUNT};
use crate::FaceletState;
use std::str::FromStr;
use std::sync::OnceLock;

/// Direction of a face turn, seen from outside that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Turn {
    pub const ALL: [Self; 3] = [Self::Clockwise, Self::CounterClockwise, Self::Double];

    /// Equivalent number of clockwise quarter turns.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Clockwise => 1,
            Self::Double => 2,
            Self::CounterClockwise => 3,
        }
    }

    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::Double => Self::Double,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::CounterClockwise => "'",
            Self::Double => "2",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Clockwise => 0,
            Self::CounterClockwise => 1,
            Self::Double => 2,
        }
    }
}

/// A turn of one face layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

/// For each destination position, the position its color is copied from.
type Permutation = [u8; FACELET_COUNT];

impl Move {
    /// The 18 face moves.
    pub const ALL: [Self; 18] = {
        let mut all = [Self::new(Face::Up, Turn::Clockwise); 18];
        let mut i = 0;
        while i < 18 {
            all[i] = Self::new(Face::ALL[i / 3], Turn::ALL[i % 3]);
            i += 1;
        }
        all
    };

    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Parse a single move token such as `R`, `U'` or `F2`.
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = || Error::InvalidMove {
            token: token.to_string(),
        };
        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Double,
            _ => return Err(invalid()),
        };
        Ok(Self::new(face, turn))
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    /// Source position for every destination position.
    fn permutation(self) -> &'static Permutation {
        &permutation_table()[self.face.index() * 3 + self.turn.slot()]
    }

    /// Return the state this move produces, leaving `state` untouched.
    pub fn applied_to(self, state: &FaceletState) -> FaceletState {
        let mut next = *state;
        next.apply(self);
        next
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Move {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Move {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::parse(&token).map_err(serde::de::Error::custom)
    }
}

impl FaceletState {
    /// Apply `mv` in place.
    pub fn apply(&mut self, mv: Move) {
        let before = self.facelets;
        for (slot, &source) in self.facelets.iter_mut().zip(mv.permutation()) {
            *slot = before[source as usize];
        }
    }

    /// Apply each move of `moves` in order.
    pub fn apply_all<'a, I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = &'a Move>,
    {
        for &mv in moves {
            self.apply(mv);
        }
    }
}

/// Functional form of [`FaceletState::apply`].
pub fn apply(state: &FaceletState, mv: Move) -> FaceletState {
    mv.applied_to(state)
}

/// Parse a whitespace- or comma-separated list of tokens.
///
/// Fails on the first bad token; never returns a partial list.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(Move::parse)
        .collect()
}

/// The sequence that undoes `moves`: reversed, each move inverted.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

fn permutation_table() -> &'static [Permutation; 18] {
    static TABLE: OnceLock<[Permutation; 18]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [[0u8; FACELET_COUNT]; 18];
        for face in Face::ALL {
            let quarter = clockwise_quarter(face);
            for turn in Turn::ALL {
                let mut sources = identity();
                for _ in 0..turn.quarter_turns() {
                    sources = compose(&sources, &quarter);
                }
                table[face.index() * 3 + turn.slot()] = sources;
            }
        }
        table
    })
}

fn identity() -> Permutation {
    let mut sources = [0u8; FACELET_COUNT];
    for (index, slot) in sources.iter_mut().enumerate() {
        *slot = index as u8;
    }
    sources
}

/// Sources after applying `step` to a state already permuted by `sources`.
fn compose(sources: &Permutation, step: &Permutation) -> Permutation {
    let mut next = [0u8; FACELET_COUNT];
    for (slot, &from) in next.iter_mut().zip(step) {
        *slot = sources[from as usize];
    }
    next
}

/// One clockwise quarter turn of `face`, computed from sticker geometry.
fn clockwise_quarter(face: Face) -> Permutation {
    let axis = face.normal();
    let mut sources = identity();
    for index in 0..FACELET_COUNT {
        let Some(sticker) = Sticker::from_index(index) else {
            continue;
        };
        let cubie = sticker.cubie();
        if cubie.dot(&axis) != 1 {
            continue;
        }
        let moved = Sticker::locate(
            cubie.quarter_turn_about(&axis),
            sticker.face.normal().quarter_turn_about(&axis),
        );
        match moved {
            Some(target) => sources[target.index()] = index as u8,
            None => unreachable!("quarter turns map stickers onto stickers"),
        }
    }
    sources
}
