//! Rules bound to a game mode.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Colour};
use crate::error::{PlayError, RuleError, SnapshotError};
use crate::legality;
use crate::mode::GameMode;
use crate::options::RuleOptions;
use crate::order;
use crate::score;
use crate::trick::{self, SEATS};

/// The rules engine for one game mode.
///
/// `Rules` is a small `Copy` value; it holds no state between calls, so one
/// instance can be shared freely across threads.
///
/// ```
/// use belot::{Card, Colour, GameMode, Rank, Rules};
///
/// let rules = Rules::new(GameMode::Trump(Colour::Diamonds));
/// let trick = [
///     Card::new(Colour::Spades, Rank::Seven),
///     Card::new(Colour::Diamonds, Rank::Nine),
/// ];
/// let hand = [
///     Card::new(Colour::Diamonds, Rank::Jack),
///     Card::new(Colour::Hearts, Rank::Seven),
/// ];
///
/// assert!(rules.is_legal(&trick, &hand, hand[0]));
/// assert!(!rules.is_legal(&trick, &hand, hand[1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    mode: GameMode,
    options: RuleOptions,
}

impl Rules {
    /// Creates rules for `mode` with default options.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self::with_options(mode, RuleOptions::default())
    }

    /// Creates rules for `mode` with the given options.
    #[must_use]
    pub const fn with_options(mode: GameMode, options: RuleOptions) -> Self {
        Self { mode, options }
    }

    /// Returns the game mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Returns whether `card` is a trump.
    #[must_use]
    pub fn is_trump(&self, card: Card) -> bool {
        self.mode.is_trump(card)
    }

    /// Compares two cards in a trick led in `requested`.
    #[must_use]
    pub fn compare(&self, a: Card, b: Card, requested: Colour) -> Ordering {
        order::compare_in_trick(a, b, requested, self.mode)
    }

    /// Sorts cards in place, weakest first, relative to the first card.
    pub fn sort(&self, cards: &mut [Card]) {
        order::sort(cards, self.mode);
    }

    /// Sorts cards in place, weakest first, for a trick led in `requested`.
    pub fn sort_in_trick(&self, cards: &mut [Card], requested: Colour) {
        order::sort_in_trick(cards, requested, self.mode);
    }

    /// Returns a sorted copy of `cards`.
    #[must_use]
    pub fn sorted(&self, cards: &[Card]) -> Vec<Card> {
        order::sorted(cards, self.mode)
    }

    /// Returns the stronger of two cards.
    #[must_use]
    pub fn stronger_of(&self, a: Card, b: Card) -> Card {
        order::stronger_of(a, b, self.mode)
    }

    /// Returns whether `candidate` may be played to `trick` from `hand`.
    #[must_use]
    pub fn is_legal(&self, trick: &[Card], hand: &[Card], candidate: Card) -> bool {
        legality::is_legal(trick, self.mode, hand, candidate)
    }

    /// Checks the trick rules for a play.
    ///
    /// # Errors
    ///
    /// Returns the rule the play breaks.
    pub fn check_play(
        &self,
        trick: &[Card],
        hand: &[Card],
        candidate: Card,
    ) -> Result<(), PlayError> {
        legality::check_play(trick, self.mode, hand, candidate)
    }

    /// Returns the cards of `hand` that may be played to `trick`.
    #[must_use]
    pub fn legal_cards(&self, trick: &[Card], hand: &[Card]) -> Vec<Card> {
        legality::legal_cards(trick, self.mode, hand)
    }

    /// Validates the snapshot, then checks the trick rules for a play.
    ///
    /// Snapshot validation is skipped when
    /// [`RuleOptions::validate_snapshots`] is off.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Snapshot`] if the trick is full, the candidate is
    /// not in the hand, or a card appears twice, and [`RuleError::Play`] if
    /// the play breaks a trick rule.
    pub fn validate_play(
        &self,
        trick: &[Card],
        hand: &[Card],
        candidate: Card,
    ) -> Result<(), RuleError> {
        if self.options.validate_snapshots {
            validate_snapshot(trick, hand, candidate).inspect_err(|err| {
                tracing::debug!(%candidate, %err, "snapshot rejected");
            })?;
        }
        self.check_play(trick, hand, candidate)?;
        Ok(())
    }

    /// Returns the index of the card currently taking `trick`.
    #[must_use]
    pub fn winner(&self, trick: &[Card]) -> Option<usize> {
        trick::winning_index(trick, self.mode)
    }

    /// Sums the card points of `trick`.
    #[must_use]
    pub fn trick_points(&self, trick: &[Card]) -> u32 {
        trick::trick_points(trick, self.mode)
    }

    /// Converts raw trick points into score units.
    #[must_use]
    pub fn points_from_tricks(&self, trick_points: u32) -> u32 {
        score::points_from_tricks_with(trick_points, self.mode, &self.options.rounding)
    }
}

fn validate_snapshot(
    trick: &[Card],
    hand: &[Card],
    candidate: Card,
) -> Result<(), SnapshotError> {
    if trick.len() >= SEATS {
        return Err(SnapshotError::TrickFull);
    }
    if !hand.contains(&candidate) {
        return Err(SnapshotError::CardNotInHand(candidate));
    }

    for (i, card) in trick.iter().enumerate() {
        if trick[i + 1..].contains(card) {
            return Err(SnapshotError::DuplicateCard(*card));
        }
    }
    for (i, card) in hand.iter().enumerate() {
        if hand[i + 1..].contains(card) {
            return Err(SnapshotError::DuplicateCard(*card));
        }
        if trick.contains(card) {
            return Err(SnapshotError::AlreadyPlayed(*card));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;
    use crate::error::OvertrumpTarget;

    const fn c(colour: Colour, rank: Rank) -> Card {
        Card::new(colour, rank)
    }

    #[test]
    fn snapshot_errors_come_first() {
        let rules = Rules::new(GameMode::Trump(Colour::Spades));
        let trick = [c(Colour::Hearts, Rank::Ace)];
        let hand = [c(Colour::Hearts, Rank::Seven), c(Colour::Clubs, Rank::Seven)];

        assert_eq!(
            rules.validate_play(&trick, &hand, c(Colour::Clubs, Rank::Ace)),
            Err(RuleError::Snapshot(SnapshotError::CardNotInHand(c(
                Colour::Clubs,
                Rank::Ace
            ))))
        );
        assert_eq!(
            rules.validate_play(&trick, &hand, hand[1]),
            Err(RuleError::Play(PlayError::MustFollowSuit {
                colour: Colour::Hearts
            }))
        );
        assert_eq!(rules.validate_play(&trick, &hand, hand[0]), Ok(()));
    }

    #[test]
    fn rejects_inconsistent_snapshots() {
        let rules = Rules::new(GameMode::NoTrump);
        let ace = c(Colour::Hearts, Rank::Ace);
        let seven = c(Colour::Hearts, Rank::Seven);

        assert_eq!(
            rules.validate_play(&[ace, ace], &[seven], seven),
            Err(RuleError::Snapshot(SnapshotError::DuplicateCard(ace)))
        );
        assert_eq!(
            rules.validate_play(&[ace], &[seven, seven], seven),
            Err(RuleError::Snapshot(SnapshotError::DuplicateCard(seven)))
        );
        assert_eq!(
            rules.validate_play(&[ace], &[seven, ace], seven),
            Err(RuleError::Snapshot(SnapshotError::AlreadyPlayed(ace)))
        );
        let full = [
            ace,
            c(Colour::Hearts, Rank::King),
            c(Colour::Hearts, Rank::Queen),
            c(Colour::Hearts, Rank::Jack),
        ];
        assert_eq!(
            rules.validate_play(&full, &[seven], seven),
            Err(RuleError::Snapshot(SnapshotError::TrickFull))
        );
    }

    #[test]
    fn validation_can_be_disabled() {
        let options = RuleOptions::default().with_validate_snapshots(false);
        let rules = Rules::with_options(GameMode::AllTrump, options);
        let trick = [c(Colour::Clubs, Rank::Ten)];
        let hand = [c(Colour::Clubs, Rank::Nine)];

        assert_eq!(
            rules.validate_play(&trick, &hand, c(Colour::Diamonds, Rank::Jack)),
            Err(RuleError::Play(PlayError::MustFollowSuit {
                colour: Colour::Clubs
            }))
        );
        assert_eq!(
            rules.validate_play(&trick, &hand, c(Colour::Clubs, Rank::Eight)),
            Err(RuleError::Play(PlayError::MustOvertrump {
                over: OvertrumpTarget::Rank(Rank::Ten)
            }))
        );
    }

    #[test]
    fn scoring_uses_configured_rounding() {
        let options = RuleOptions::default()
            .with_rounding(crate::ScoreRounding::default().with_all_trump_threshold(4));
        let rules = Rules::with_options(GameMode::AllTrump, options);
        assert_eq!(rules.points_from_tricks(34), 3);
        assert_eq!(rules.points_from_tricks(35), 4);
        assert_eq!(Rules::new(GameMode::AllTrump).points_from_tricks(34), 4);
    }
}
