//! Plain-text rendering of a cube as an unfolded cross.
//!
//! ```text
//!       U U U
//!       U U U
//!       U U U
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//!       D D D
//!       D D D
//!       D D D
//! ```

use crate::{Color, Face, FaceletState, Sticker};
use std::fmt::Write;

/// Options for [`render_net`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetStyle {
    /// Paint stickers with ANSI background colors.
    pub ansi: bool,
}

impl Default for NetStyle {
    fn default() -> Self {
        Self { ansi: true }
    }
}

fn ansi_background(color: Color) -> &'static str {
    match color {
        Color::White => "\x1b[30;107m",
        Color::Yellow => "\x1b[30;103m",
        Color::Red => "\x1b[97;41m",
        Color::Orange => "\x1b[30;48;5;208m",
        Color::Blue => "\x1b[97;44m",
        Color::Green => "\x1b[30;42m",
    }
}

fn push_row(out: &mut String, state: &FaceletState, face: Face, row: usize, style: NetStyle) {
    for col in 0..3 {
        let color = state.get(Sticker::new(face, row, col));
        if style.ansi {
            let _ = write!(out, "{} {} \x1b[0m", ansi_background(color), color.code());
        } else {
            let _ = write!(out, "{} ", color.code());
        }
    }
}

/// Render `state` as a cross, one line per sticker row.
pub fn render_net(state: &FaceletState, style: NetStyle) -> String {
    let cell = if style.ansi { 3 } else { 2 };
    let indent = " ".repeat(cell * 3);
    let mut out = String::new();

    for row in 0..3 {
        out.push_str(&indent);
        push_row(&mut out, state, Face::Up, row, style);
        out.push('\n');
    }
    for row in 0..3 {
        for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
            push_row(&mut out, state, face, row, style);
        }
        out.push('\n');
    }
    for row in 0..3 {
        out.push_str(&indent);
        push_row(&mut out, state, Face::Down, row, style);
        out.push('\n');
    }
    out
}
