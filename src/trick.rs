//! Trick analysis.
//!
//! A trick is a slice of cards in play order: index 0 is the lead, whose
//! colour is requested for the whole trick. The caller owns the trick and
//! its lifecycle; the functions here only read a snapshot of it.

use core::cmp::Ordering;

use crate::card::{Card, Colour, Rank};
use crate::mode::GameMode;
use crate::order::compare_in_trick;

/// Points awarded to the team taking the last trick of a hand.
pub const LAST_TRICK_BONUS: u32 = 10;

/// Number of seats at the table.
pub const SEATS: usize = 4;

/// What the cards already in a trick mean for the next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickSummary {
    /// The lead card.
    pub lead: Card,
    /// Colour of the lead card.
    pub requested: Colour,
    /// Whether the lead card is a trump.
    pub trump_led: bool,
    /// Strongest trump rank in the trick, lead included.
    ///
    /// Under all-trump only cards of the requested colour count.
    pub strongest_trump: Option<Rank>,
    /// Strongest non-trump rank of the requested colour, lead included.
    ///
    /// Informational: the legality checks only read `strongest_trump`.
    pub strongest_requested: Option<Rank>,
    /// Index of the card currently taking the trick.
    pub winning: usize,
    /// Whether the winning card was played by the next player's teammate.
    ///
    /// The teammate sits two seats before the player about to play, so this
    /// is the card at index `len - 2`.
    pub teammate_winning: bool,
    /// Number of cards in the trick.
    pub len: usize,
}

impl TrickSummary {
    /// Scans a trick. Returns `None` if the trick is empty.
    #[must_use]
    pub fn scan(trick: &[Card], mode: GameMode) -> Option<Self> {
        let lead = *trick.first()?;
        let requested = lead.colour;

        let mut strongest_trump = None;
        let mut strongest_requested = None;
        let mut winning = 0;

        for (i, &card) in trick.iter().enumerate() {
            if !can_take_trick(card, requested, mode) {
                continue;
            }
            if mode.is_trump(card) {
                if strongest_trump
                    .is_none_or(|r: Rank| card.rank.trump_strength() > r.trump_strength())
                {
                    strongest_trump = Some(card.rank);
                }
            } else if card.colour == requested
                && strongest_requested
                    .is_none_or(|r: Rank| card.rank.plain_strength() > r.plain_strength())
            {
                strongest_requested = Some(card.rank);
            }

            if compare_in_trick(card, trick[winning], requested, mode) == Ordering::Greater {
                winning = i;
            }
        }

        let len = trick.len();
        let summary = Self {
            lead,
            requested,
            trump_led: mode.is_trump(lead),
            strongest_trump,
            strongest_requested,
            winning,
            teammate_winning: len >= 2 && winning == len - 2,
            len,
        };
        tracing::trace!(?summary, %mode, "scanned trick");
        Some(summary)
    }
}

/// Returns whether `card` can take a trick led in `requested`.
///
/// Trumps and cards of the requested colour can. Under all-trump every card
/// is a trump, so only the requested colour can.
#[must_use]
pub fn can_take_trick(card: Card, requested: Colour, mode: GameMode) -> bool {
    match mode {
        GameMode::AllTrump | GameMode::NoTrump => card.colour == requested,
        GameMode::Trump(_) => card.colour == requested || mode.is_trump(card),
    }
}

/// Returns the index of the card currently taking the trick.
///
/// Returns `None` for an empty trick. Of two equal cards the earlier wins.
#[must_use]
pub fn winning_index(trick: &[Card], mode: GameMode) -> Option<usize> {
    TrickSummary::scan(trick, mode).map(|summary| summary.winning)
}

/// Sums the card points of a trick.
///
/// Trumps count with trump points. Under all-trump every card does, under
/// no-trump none does. The team taking the last trick of a hand also scores
/// [`LAST_TRICK_BONUS`], which is not included here.
#[must_use]
pub fn trick_points(trick: &[Card], mode: GameMode) -> u32 {
    trick
        .iter()
        .map(|&card| u32::from(card.rank.points(mode.is_trump(card))))
        .sum()
}
