//! The canonical 54-sticker cube state.
//!
//! Facelets are stored face by face in the order Up, Left, Front, Right,
//! Back, Down, each face row-major in its own frame (see [`crate::face`]).
//! The only invariant enforced here is well-formedness: exactly 54 entries,
//! each a legal [`Color`]. Whether the arrangement is reachable by turning
//! a real cube is the solver's business.

use crate::error::{CubeFault, Error, Result};
use crate::face::{Face, Sticker, FACELET_COUNT, STICKERS_PER_FACE};
use crate::Color;
use std::str::FromStr;

/// Center color of each face for a physical cube held in a fixed orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    centers: [Color; 6],
}

impl ColorScheme {
    /// Yellow on top, red in front, the orientation the capture protocol uses.
    pub const STANDARD: Self = Self {
        centers: [
            Color::Yellow,
            Color::Blue,
            Color::Red,
            Color::Green,
            Color::Orange,
            Color::White,
        ],
    };

    /// Build a scheme from centers listed in facelet-string face order.
    pub const fn new(centers: [Color; 6]) -> Self {
        Self { centers }
    }

    pub const fn color(&self, face: Face) -> Color {
        self.centers[face.index()]
    }

    /// The face whose center carries `color`.
    pub fn face_of(&self, color: Color) -> Option<Face> {
        Face::ALL.into_iter().find(|&face| self.color(face) == color)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A well-formed 54-sticker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct FaceletState {
    pub(crate) facelets: [Color; FACELET_COUNT],
}

impl FaceletState {
    /// The solved cube for `scheme`: every face monochrome in its center color.
    pub fn solved(scheme: &ColorScheme) -> Self {
        let mut facelets = [Color::White; FACELET_COUNT];
        for (index, slot) in facelets.iter_mut().enumerate() {
            *slot = scheme.color(Face::ALL[index / STICKERS_PER_FACE]);
        }
        Self { facelets }
    }

    /// Validate a typed color sequence.
    pub fn from_colors(colors: &[Color]) -> Result<Self> {
        let facelets: [Color; FACELET_COUNT] = colors
            .try_into()
            .map_err(|_| CubeFault::WrongLength { found: colors.len() })?;
        Ok(Self { facelets })
    }

    /// Validate a sequence of color names such as `"white"` or `"Blue"`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.len() != FACELET_COUNT {
            return Err(CubeFault::WrongLength { found: names.len() }.into());
        }
        let mut facelets = [Color::White; FACELET_COUNT];
        for (position, (slot, name)) in facelets.iter_mut().zip(names).enumerate() {
            let name = name.as_ref();
            *slot = Color::from_name(name).ok_or_else(|| CubeFault::UnknownColorName {
                position,
                name: name.to_string(),
            })?;
        }
        Ok(Self { facelets })
    }

    /// All 54 facelets in canonical order.
    pub fn as_slice(&self) -> &[Color] {
        &self.facelets
    }

    pub fn get(&self, sticker: Sticker) -> Color {
        self.facelets[sticker.index()]
    }

    /// The nine stickers of one face, row-major.
    pub fn face(&self, face: Face) -> [Color; STICKERS_PER_FACE] {
        let start = face.index() * STICKERS_PER_FACE;
        let mut colors = [Color::White; STICKERS_PER_FACE];
        colors.copy_from_slice(&self.facelets[start..start + STICKERS_PER_FACE]);
        colors
    }

    pub fn center(&self, face: Face) -> Color {
        self.get(Sticker::new(face, 1, 1))
    }

    /// Every sticker paired with its current color, in canonical order.
    pub fn stickers(&self) -> impl Iterator<Item = (Sticker, Color)> + '_ {
        self.facelets
            .iter()
            .enumerate()
            .filter_map(|(index, &color)| Sticker::from_index(index).map(|s| (s, color)))
    }

    /// True when every face is a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let colors = self.face(face);
            colors.iter().all(|&c| c == colors[0])
        })
    }
}

impl FromStr for FaceletState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let found = s.chars().count();
        if found != FACELET_COUNT {
            return Err(CubeFault::WrongLength { found }.into());
        }
        let mut facelets = [Color::White; FACELET_COUNT];
        for (position, (slot, code)) in facelets.iter_mut().zip(s.chars()).enumerate() {
            *slot = Color::from_code(code)
                .ok_or(CubeFault::UnknownColor { position, found: code })?;
        }
        Ok(Self { facelets })
    }
}

impl std::fmt::Display for FaceletState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in &self.facelets {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}

impl TryFrom<String> for FaceletState {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FaceletState> for String {
    fn from(state: FaceletState) -> Self {
        state.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "yyyyyyyyybbbbbbbbbrrrrrrrrrgggggggggooooooooowwwwwwwww";

    #[test]
    fn solved_standard_string() {
        let state = FaceletState::solved(&ColorScheme::STANDARD);
        assert_eq!(state.to_string(), SOLVED);
        assert!(state.is_solved());
    }

    #[test]
    fn parse_round_trip() {
        let text = "wowgybwyogygybyoggrowbrgywrborwggybrbwororbwborgowryby";
        let state: FaceletState = text.parse().unwrap();
        assert_eq!(state.to_string(), text);
        assert!(!state.is_solved());
    }

    #[test]
    fn parse_accepts_upper_case_codes() {
        let state: FaceletState = SOLVED.to_uppercase().parse().unwrap();
        assert_eq!(state.to_string(), SOLVED);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = SOLVED[..53].parse::<FaceletState>().unwrap_err();
        assert_eq!(err, Error::InvalidCube(CubeFault::WrongLength { found: 53 }));

        let longer = format!("{SOLVED}w");
        assert!(longer.parse::<FaceletState>().is_err());
    }

    #[test]
    fn parse_rejects_unknown_code() {
        let mut text = SOLVED.to_string();
        text.replace_range(10..11, "x");
        let err = text.parse::<FaceletState>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCube(CubeFault::UnknownColor { position: 10, found: 'x' })
        );
    }

    #[test]
    fn names_validate_each_entry() {
        let mut names: Vec<String> = SOLVED
            .chars()
            .map(|c| Color::from_code(c).unwrap().name().to_string())
            .collect();
        let state = FaceletState::from_names(&names).unwrap();
        assert_eq!(state.to_string(), SOLVED);

        names[20] = "purple".to_string();
        let err = FaceletState::from_names(&names).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCube(CubeFault::UnknownColorName { position: 20, .. })
        ));

        assert!(FaceletState::from_names(&names[..9]).is_err());
    }

    #[test]
    fn colors_validate_length() {
        let state = FaceletState::solved(&ColorScheme::STANDARD);
        assert_eq!(FaceletState::from_colors(state.as_slice()), Ok(state));
        assert!(FaceletState::from_colors(&state.as_slice()[..45]).is_err());
    }

    #[test]
    fn face_and_center_access() {
        let state = FaceletState::solved(&ColorScheme::STANDARD);
        assert_eq!(state.face(Face::Front), [Color::Red; 9]);
        assert_eq!(state.center(Face::Down), Color::White);
        assert_eq!(state.stickers().count(), FACELET_COUNT);
    }

    #[test]
    fn scheme_lookup() {
        let scheme = ColorScheme::STANDARD;
        for face in Face::ALL {
            assert_eq!(scheme.face_of(scheme.color(face)), Some(face));
        }
    }
}
