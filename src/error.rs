//! Error types for rule checks and card parsing.

use thiserror::Error;

use crate::card::{Card, Colour, Rank};

/// Reasons a card may not be played into the current trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The hand holds the requested colour but the card is of another one.
    #[error("must follow {colour}")]
    MustFollowSuit {
        /// The requested colour.
        colour: Colour,
    },
    /// A trump was led and the card is not a trump.
    #[error("must play a trump")]
    MustPlayTrump,
    /// The hand can beat the strongest trump in the trick but the card does not.
    #[error("must overtrump {over}")]
    MustOvertrump {
        /// Strongest trump rank in the trick, if any trump was played.
        over: OvertrumpTarget,
    },
}

/// The trump a play has to beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertrumpTarget {
    /// No trump is in the trick yet; any trump beats it.
    Any,
    /// The strongest trump rank played so far.
    Rank(Rank),
}

impl core::fmt::Display for OvertrumpTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Any => f.write_str("the trick"),
            Self::Rank(rank) => write!(f, "{rank}"),
        }
    }
}

/// Snapshot inconsistencies reported by strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The candidate card is not in the player's hand.
    #[error("{0} is not in the hand")]
    CardNotInHand(Card),
    /// The same card appears twice across the trick and the hand.
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
    /// Every seat has already played to the trick.
    #[error("trick already holds four cards")]
    TrickFull,
    /// A card in the hand was already played to the trick.
    #[error("{0} was already played to the trick")]
    AlreadyPlayed(Card),
}

/// Errors returned by [`Rules::validate_play`](crate::Rules::validate_play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The snapshot handed in by the caller is inconsistent.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// The play breaks a trick rule.
    #[error(transparent)]
    Play(#[from] PlayError),
}

/// Errors that can occur while parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is empty.
    #[error("empty card")]
    Empty,
    /// The rank part is not one of 7, 8, 9, 10, J, Q, K, A.
    #[error("unknown rank")]
    UnknownRank,
    /// The colour is not one of C, D, H, S or their symbols.
    #[error("unknown colour")]
    UnknownColour,
}
