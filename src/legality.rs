//! Move legality.
//!
//! Every check rebuilds what it needs from the trick snapshot, so results
//! depend only on the arguments. The free functions here are permissive:
//! an empty trick or an empty hand allows anything, and the candidate is not
//! required to be in the hand. Use [`Rules::validate_play`] to reject
//! inconsistent snapshots as well.
//!
//! [`Rules::validate_play`]: crate::Rules::validate_play

use alloc::vec::Vec;

use crate::card::{Card, Colour, Rank};
use crate::error::{OvertrumpTarget, PlayError};
use crate::mode::GameMode;
use crate::trick::TrickSummary;

/// Returns whether any card is of `colour`.
#[must_use]
pub fn has_colour(cards: &[Card], colour: Colour) -> bool {
    cards.iter().any(|card| card.colour == colour)
}

/// Returns whether any card is a trump.
#[must_use]
pub fn has_trump(cards: &[Card], mode: GameMode) -> bool {
    cards.iter().any(|&card| mode.is_trump(card))
}

/// Returns whether `card` is a trump stronger than `strongest`.
///
/// With no trump to beat, any trump does.
#[must_use]
pub fn beats_trump(card: Card, mode: GameMode, strongest: Option<Rank>) -> bool {
    mode.is_trump(card)
        && strongest.is_none_or(|rank| card.rank.trump_strength() > rank.trump_strength())
}

/// Returns whether any card is a trump stronger than `strongest`.
#[must_use]
pub fn can_overtrump(cards: &[Card], mode: GameMode, strongest: Option<Rank>) -> bool {
    cards.iter().any(|&card| beats_trump(card, mode, strongest))
}

/// Returns whether any card of `colour` outranks `strongest`.
///
/// Only trumps are compared: a non-trump card of the colour never counts as
/// stronger, whatever its rank.
#[must_use]
pub fn has_stronger_in_colour(
    cards: &[Card],
    colour: Colour,
    strongest: Rank,
    mode: GameMode,
) -> bool {
    cards
        .iter()
        .any(|&card| card.colour == colour && beats_trump(card, mode, Some(strongest)))
}

/// Checks whether `candidate` may be played to `trick` from `hand`.
///
/// # Errors
///
/// Returns the rule the play breaks.
pub fn check_play(
    trick: &[Card],
    mode: GameMode,
    hand: &[Card],
    candidate: Card,
) -> Result<(), PlayError> {
    let result = evaluate(trick, mode, hand, candidate);
    if let Err(reason) = result {
        tracing::debug!(%mode, %candidate, %reason, "play rejected");
    }
    result
}

/// Returns whether `candidate` may be played to `trick` from `hand`.
#[must_use]
pub fn is_legal(trick: &[Card], mode: GameMode, hand: &[Card], candidate: Card) -> bool {
    evaluate(trick, mode, hand, candidate).is_ok()
}

/// Returns the cards of `hand` that may be played to `trick`, in hand order.
#[must_use]
pub fn legal_cards(trick: &[Card], mode: GameMode, hand: &[Card]) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|&card| is_legal(trick, mode, hand, card))
        .collect()
}

fn evaluate(
    trick: &[Card],
    mode: GameMode,
    hand: &[Card],
    candidate: Card,
) -> Result<(), PlayError> {
    if hand.is_empty() {
        return Ok(());
    }
    let Some(summary) = TrickSummary::scan(trick, mode) else {
        return Ok(());
    };

    let requested = summary.requested;
    let holds_requested = has_colour(hand, requested);
    let follow = || {
        if candidate.colour == requested {
            Ok(())
        } else {
            Err(PlayError::MustFollowSuit { colour: requested })
        }
    };
    let overtrump = |strongest: Option<Rank>| {
        if beats_trump(candidate, mode, strongest) {
            Ok(())
        } else {
            Err(PlayError::MustOvertrump {
                over: strongest.map_or(OvertrumpTarget::Any, OvertrumpTarget::Rank),
            })
        }
    };

    match mode {
        GameMode::NoTrump => {
            if holds_requested {
                follow()
            } else {
                Ok(())
            }
        }
        GameMode::AllTrump => {
            if !holds_requested {
                return Ok(());
            }
            follow()?;
            match summary.strongest_trump {
                Some(strongest) if has_stronger_in_colour(hand, requested, strongest, mode) => {
                    overtrump(Some(strongest))
                }
                _ => Ok(()),
            }
        }
        GameMode::Trump(_) => {
            if holds_requested {
                if !summary.trump_led {
                    return follow();
                }
                if can_overtrump(hand, mode, summary.strongest_trump) {
                    overtrump(summary.strongest_trump)
                } else if mode.is_trump(candidate) {
                    Ok(())
                } else {
                    Err(PlayError::MustPlayTrump)
                }
            } else if has_trump(hand, mode)
                && !summary.teammate_winning
                && can_overtrump(hand, mode, summary.strongest_trump)
            {
                overtrump(summary.strongest_trump)
            } else {
                Ok(())
            }
        }
    }
}
