//! Cell Model
//!
//! A single grid cell: its life state plus an optional colour tag.
//!
//! Colours are a three-channel bitmask laid out like console text attributes
//! (blue in bit 0, green in bit 1, red in bit 2). A [`Colour`] is never empty;
//! an uncoloured cell carries `None` instead of a zero value.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

// ============================================================================
// Colour
// ============================================================================

/// A primary colour channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// All channels, in the order the seeder draws from
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// The single-channel colour for this channel
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Channel::Red => Colour::RED,
            Channel::Green => Colour::GREEN,
            Channel::Blue => Colour::BLUE,
        }
    }
}

/// Non-empty bitmask of colour channels
///
/// Ordering follows the numeric bit value, so
/// `BLUE < GREEN < CYAN < RED < MAGENTA < YELLOW < WHITE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Colour(u8);

impl Colour {
    /// Blue only
    pub const BLUE: Colour = Colour(0b001);
    /// Green only
    pub const GREEN: Colour = Colour(0b010);
    /// Green + blue
    pub const CYAN: Colour = Colour(0b011);
    /// Red only
    pub const RED: Colour = Colour(0b100);
    /// Red + blue
    pub const MAGENTA: Colour = Colour(0b101);
    /// Red + green
    pub const YELLOW: Colour = Colour(0b110);
    /// All channels; the neutral colour for uncoloured cells and text
    pub const WHITE: Colour = Colour(0b111);

    const MASK: u8 = 0b111;

    /// Build a colour from raw bits, rejecting zero and unknown bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Colour> {
        if bits == 0 || bits & !Self::MASK != 0 {
            None
        } else {
            Some(Colour(bits))
        }
    }

    /// Raw channel bits
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the given channel is lit
    #[must_use]
    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & channel.colour().0 != 0
    }
}

impl From<Channel> for Colour {
    fn from(channel: Channel) -> Self {
        channel.colour()
    }
}

impl From<Colour> for u8 {
    fn from(colour: Colour) -> Self {
        colour.0
    }
}

impl TryFrom<u8> for Colour {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Colour::from_bits(bits).ok_or_else(|| format!("invalid colour bits: {bits:#05b}"))
    }
}

impl BitOr for Colour {
    type Output = Colour;

    fn bitor(self, rhs: Colour) -> Colour {
        Colour(self.0 | rhs.0)
    }
}

impl BitOr<Channel> for Colour {
    type Output = Colour;

    fn bitor(self, rhs: Channel) -> Colour {
        self | rhs.colour()
    }
}

impl BitOrAssign for Colour {
    fn bitor_assign(&mut self, rhs: Colour) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Channel> for Colour {
    fn bitor_assign(&mut self, rhs: Channel) {
        self.0 |= rhs.colour().0;
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            0b001 => "blue",
            0b010 => "green",
            0b011 => "cyan",
            0b100 => "red",
            0b101 => "magenta",
            0b110 => "yellow",
            _ => "white",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Cell
// ============================================================================

/// Life state of a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Live cell
    Alive,
    /// Dead cell
    #[default]
    Dead,
}

/// One grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    state: CellState,
    colour: Option<Colour>,
}

impl Cell {
    /// A dead, uncoloured cell
    #[must_use]
    pub const fn dead() -> Self {
        Self {
            state: CellState::Dead,
            colour: None,
        }
    }

    /// A live cell carrying `colour` (a [`Colour`] or `None` for uncoloured)
    #[must_use]
    pub fn alive(colour: impl Into<Option<Colour>>) -> Self {
        Self {
            state: CellState::Alive,
            colour: colour.into(),
        }
    }

    /// Current life state
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Colour tag; only meaningful while the cell is alive
    #[must_use]
    pub const fn colour(&self) -> Option<Colour> {
        self.colour
    }

    /// Shorthand for `state() == CellState::Alive`
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state == CellState::Alive
    }
}

impl PartialEq<CellState> for Cell {
    fn eq(&self, other: &CellState) -> bool {
        self.state == *other
    }
}
