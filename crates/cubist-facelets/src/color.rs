//! Sticker colors and their single-letter codes.
//!
//! The facelet string alphabet is fixed: `w y r o b g`. Codes are emitted
//! lower case; upper case codes are accepted on input because capture
//! tools commonly report color initials capitalised.

/// One of the six sticker colors of a standard cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    /// All six colors in code-table order.
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Yellow,
        Self::Red,
        Self::Orange,
        Self::Blue,
        Self::Green,
    ];

    /// Single-letter code used in facelet strings.
    pub const fn code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Yellow => 'y',
            Self::Red => 'r',
            Self::Orange => 'o',
            Self::Blue => 'b',
            Self::Green => 'g',
        }
    }

    /// Look up a color by its code letter (either case).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'w' => Some(Self::White),
            'y' => Some(Self::Yellow),
            'r' => Some(Self::Red),
            'o' => Some(Self::Orange),
            'b' => Some(Self::Blue),
            'g' => Some(Self::Green),
            _ => None,
        }
    }

    /// Full lower-case color name, as the vision oracle reports it.
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Look up a color by name, ignoring ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn code_lookup_accepts_upper_case() {
        assert_eq!(Color::from_code('W'), Some(Color::White));
        assert_eq!(Color::from_code('g'), Some(Color::Green));
        assert_eq!(Color::from_code('x'), None);
    }

    #[test]
    fn names_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
        assert_eq!(Color::from_name(" Orange "), Some(Color::Orange));
        assert_eq!(Color::from_name("purple"), None);
    }
}
