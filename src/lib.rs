//! Trick rules for Belot with optional `no_std` support.
//!
//! The crate decides whether a card may be played to a trick, which of two
//! cards is stronger, how cards order within a trick, and how trick points
//! convert into score units. It holds no state: every function works on the
//! trick, hand and [`GameMode`] snapshot it is given.
//!
//! # Example
//!
//! ```
//! use belot::{Card, Colour, GameMode, Rank, Rules};
//!
//! let rules = Rules::new(GameMode::NoTrump);
//! let trick = [Card::new(Colour::Spades, Rank::Nine)];
//! let hand = [
//!     Card::new(Colour::Spades, Rank::Seven),
//!     Card::new(Colour::Hearts, Rank::King),
//! ];
//!
//! assert_eq!(rules.legal_cards(&trick, &hand), vec![hand[0]]);
//! assert_eq!(rules.points_from_tricks(30), 6);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod legality;
pub mod mode;
pub mod options;
pub mod order;
pub mod rules;
pub mod score;
pub mod trick;

// Re-export main types
pub use card::{Card, Colour, DECK_SIZE, Rank};
pub use error::{OvertrumpTarget, ParseCardError, PlayError, RuleError, SnapshotError};
pub use legality::{check_play, is_legal, legal_cards};
pub use mode::GameMode;
pub use options::{RuleOptions, ScoreRounding};
pub use order::{compare_in_trick, sort, sort_in_trick, sorted, stronger_of};
pub use rules::Rules;
pub use score::{points_from_tricks, points_from_tricks_with};
pub use trick::{
    LAST_TRICK_BONUS, TrickSummary, can_take_trick, trick_points, winning_index,
};
