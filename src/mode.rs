//! Game modes.

use core::fmt;

use crate::card::{Card, Colour};

/// The contract a hand is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// One colour is trump.
    Trump(Colour),
    /// No card is a trump.
    NoTrump,
    /// Every card is a trump.
    AllTrump,
}

impl GameMode {
    /// All six modes: the four colour modes, then no-trump and all-trump.
    pub const ALL: [Self; 6] = [
        Self::Trump(Colour::Clubs),
        Self::Trump(Colour::Diamonds),
        Self::Trump(Colour::Hearts),
        Self::Trump(Colour::Spades),
        Self::NoTrump,
        Self::AllTrump,
    ];

    /// Returns the trump colour of a colour mode.
    #[must_use]
    pub const fn trump_colour(self) -> Option<Colour> {
        match self {
            Self::Trump(colour) => Some(colour),
            Self::NoTrump | Self::AllTrump => None,
        }
    }

    /// Returns whether `card` is a trump under this mode.
    #[must_use]
    pub fn is_trump(self, card: Card) -> bool {
        match self {
            Self::Trump(colour) => card.colour == colour,
            Self::NoTrump => false,
            Self::AllTrump => true,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trump(colour) => write!(f, "{colour} trump"),
            Self::NoTrump => f.write_str("no trump"),
            Self::AllTrump => f.write_str("all trump"),
        }
    }
}
