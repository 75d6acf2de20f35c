//! Theme and Colors
//!
//! Cell colours map onto the terminal's basic ANSI palette so a run looks
//! the same on any emulator, including 16-colour ones.

use chroma_life_core::Colour;
use ratatui::style::Color;

/// Background behind the grid
pub const BACKGROUND: Color = Color::Reset;

/// Terminal colour for a cell colour tag
#[must_use]
pub fn colour_style(colour: Colour) -> Color {
    match colour {
        Colour::BLUE => Color::Blue,
        Colour::GREEN => Color::Green,
        Colour::CYAN => Color::Cyan,
        Colour::RED => Color::Red,
        Colour::MAGENTA => Color::Magenta,
        Colour::YELLOW => Color::Yellow,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_tag_has_a_distinct_colour() {
        let mapped: Vec<Color> = (1u8..=7)
            .map(|bits| colour_style(Colour::try_from(bits).unwrap()))
            .collect();

        assert_eq!(
            mapped,
            vec![
                Color::Blue,
                Color::Green,
                Color::Cyan,
                Color::Red,
                Color::Magenta,
                Color::Yellow,
                Color::White,
            ]
        );
    }
}
