//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card colour (suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Colour {
    /// All four colours.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'C' | 'c' | '♣' => Some(Self::Clubs),
            'D' | 'd' | '♦' => Some(Self::Diamonds),
            'H' | 'h' | '♥' => Some(Self::Hearts),
            'S' | 's' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// Indexed by `Rank as usize`.
const TRUMP_ORDER: [u8; 8] = [0, 1, 6, 4, 7, 2, 3, 5];
const PLAIN_ORDER: [u8; 8] = [0, 1, 2, 6, 3, 4, 5, 7];
const TRUMP_POINTS: [u8; 8] = [0, 0, 14, 10, 20, 3, 4, 11];
const PLAIN_POINTS: [u8; 8] = [0, 0, 0, 10, 2, 3, 4, 11];

/// Card rank in a 32-card Belot deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Self; 8] = [
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Strength of the rank when its card is a trump.
    ///
    /// 7 < 8 < Q < K < 10 < A < 9 < J.
    #[must_use]
    pub const fn trump_strength(self) -> u8 {
        TRUMP_ORDER[self as usize]
    }

    /// Strength of the rank when its card is not a trump.
    ///
    /// 7 < 8 < 9 < J < Q < K < 10 < A.
    #[must_use]
    pub const fn plain_strength(self) -> u8 {
        PLAIN_ORDER[self as usize]
    }

    /// Strength of the rank in the given category.
    #[must_use]
    pub const fn strength(self, trump: bool) -> u8 {
        if trump {
            self.trump_strength()
        } else {
            self.plain_strength()
        }
    }

    /// Card points the rank is worth when taken in a trick.
    #[must_use]
    pub const fn points(self, trump: bool) -> u8 {
        if trump {
            TRUMP_POINTS[self as usize]
        } else {
            PLAIN_POINTS[self as usize]
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "7" => Some(Self::Seven),
            "8" => Some(Self::Eight),
            "9" => Some(Self::Nine),
            "10" | "T" | "t" => Some(Self::Ten),
            "J" | "j" => Some(Self::Jack),
            "Q" | "q" => Some(Self::Queen),
            "K" | "k" => Some(Self::King),
            "A" | "a" => Some(Self::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Whether a card is a trump depends on the game mode, see
/// [`GameMode::is_trump`](crate::GameMode::is_trump).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The colour of the card.
    pub colour: Colour,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(colour: Colour, rank: Rank) -> Self {
        Self { colour, rank }
    }

    /// Returns the full 32-card deck, grouped by colour.
    #[must_use]
    pub fn deck() -> [Self; DECK_SIZE] {
        core::array::from_fn(|i| Self::new(Colour::ALL[i / 8], Rank::ALL[i % 8]))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.colour)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `"JD"`, `"10s"`, `"T♠"` and similar: rank then colour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let colour_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_part = chars.as_str();
        if rank_part.is_empty() {
            return Err(ParseCardError::UnknownRank);
        }

        let colour = Colour::from_char(colour_char).ok_or(ParseCardError::UnknownColour)?;
        let rank = Rank::from_symbol(rank_part).ok_or(ParseCardError::UnknownRank)?;
        Ok(Self::new(colour, rank))
    }
}

/// Number of cards in a Belot deck.
pub const DECK_SIZE: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_are_permutations() {
        let mut trump: [u8; 8] = TRUMP_ORDER;
        let mut plain: [u8; 8] = PLAIN_ORDER;
        trump.sort_unstable();
        plain.sort_unstable();
        assert_eq!(trump, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(plain, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn jack_and_nine_lead_trumps() {
        assert!(Rank::Jack.trump_strength() > Rank::Nine.trump_strength());
        assert!(Rank::Nine.trump_strength() > Rank::Ace.trump_strength());
        assert!(Rank::Ace.plain_strength() > Rank::Ten.plain_strength());
        assert!(Rank::Ten.plain_strength() > Rank::King.plain_strength());
        assert!(Rank::Nine.plain_strength() < Rank::Jack.plain_strength());
    }

    #[test]
    fn deck_is_complete() {
        let deck = Card::deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Colour::Clubs, Rank::Seven));
        assert_eq!(deck[31], Card::new(Colour::Spades, Rank::Ace));
        for (i, a) in deck.iter().enumerate() {
            assert!(deck[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn parses_letters_and_symbols() {
        assert_eq!("JD".parse::<Card>(), Ok(Card::new(Colour::Diamonds, Rank::Jack)));
        assert_eq!("10s".parse::<Card>(), Ok(Card::new(Colour::Spades, Rank::Ten)));
        assert_eq!("T♠".parse::<Card>(), Ok(Card::new(Colour::Spades, Rank::Ten)));
        assert_eq!(" 7♥ ".parse::<Card>(), Ok(Card::new(Colour::Hearts, Rank::Seven)));
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("D".parse::<Card>(), Err(ParseCardError::UnknownRank));
        assert_eq!("2H".parse::<Card>(), Err(ParseCardError::UnknownRank));
        assert_eq!("JX".parse::<Card>(), Err(ParseCardError::UnknownColour));
    }
}
