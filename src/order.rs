//! Card ordering within a trick.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Colour};
use crate::mode::GameMode;

/// Compares two cards in the context of a trick led in `requested`.
///
/// Trumps rank above everything and compare by trump strength. Among the
/// rest, cards of the requested colour rank above the others and compare by
/// plain strength. Two cards that are neither trump nor of the requested
/// colour cannot take the trick and compare [`Ordering::Equal`].
#[must_use]
pub fn compare_in_trick(a: Card, b: Card, requested: Colour, mode: GameMode) -> Ordering {
    match (mode.is_trump(a), mode.is_trump(b)) {
        (true, true) => a.rank.trump_strength().cmp(&b.rank.trump_strength()),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match (a.colour == requested, b.colour == requested) {
            (true, true) => a.rank.plain_strength().cmp(&b.rank.plain_strength()),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => Ordering::Equal,
        },
    }
}

/// Sorts cards in place, weakest first.
///
/// The requested colour is the colour of `cards[0]` as passed in, so the
/// lead must come first. Sorting the output again may pick a different
/// requested colour; use [`sort_in_trick`] to keep it fixed. Empty input is
/// left untouched.
pub fn sort(cards: &mut [Card], mode: GameMode) {
    let Some(lead) = cards.first() else {
        return;
    };
    sort_in_trick(cards, lead.colour, mode);
}

/// Sorts cards in place, weakest first, for a trick led in `requested`.
///
/// The sort is stable: cards comparing equal keep their relative order, so
/// sorting twice gives the same sequence.
pub fn sort_in_trick(cards: &mut [Card], requested: Colour, mode: GameMode) {
    cards.sort_by(|a, b| compare_in_trick(*a, *b, requested, mode));
}

/// Returns a sorted copy of `cards`, see [`sort`].
#[must_use]
pub fn sorted(cards: &[Card], mode: GameMode) -> Vec<Card> {
    let mut out = cards.to_vec();
    sort(&mut out, mode);
    out
}

/// Returns the stronger of two cards.
///
/// A trump beats a non-trump. Otherwise the cards compare by the strength of
/// their category and `a` wins ties. Colours are not consulted, so two
/// non-trumps of different colours compare by rank alone.
#[must_use]
pub fn stronger_of(a: Card, b: Card, mode: GameMode) -> Card {
    let a_trump = mode.is_trump(a);
    let b_trump = mode.is_trump(b);
    if a_trump == b_trump {
        if b.rank.strength(b_trump) > a.rank.strength(a_trump) {
            b
        } else {
            a
        }
    } else if a_trump {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;
    use alloc::vec;

    const fn c(colour: Colour, rank: Rank) -> Card {
        Card::new(colour, rank)
    }

    #[test]
    fn trumps_sort_last() {
        let mode = GameMode::Trump(Colour::Diamonds);
        let mut cards = vec![
            c(Colour::Spades, Rank::Ten),
            c(Colour::Diamonds, Rank::Seven),
            c(Colour::Spades, Rank::Ace),
            c(Colour::Hearts, Rank::Ace),
            c(Colour::Diamonds, Rank::Jack),
        ];
        sort(&mut cards, mode);
        assert_eq!(
            cards,
            vec![
                c(Colour::Hearts, Rank::Ace),
                c(Colour::Spades, Rank::Ten),
                c(Colour::Spades, Rank::Ace),
                c(Colour::Diamonds, Rank::Seven),
                c(Colour::Diamonds, Rank::Jack),
            ]
        );
    }

    #[test]
    fn irrelevant_cards_keep_input_order() {
        let mode = GameMode::NoTrump;
        let cards = [
            c(Colour::Clubs, Rank::Eight),
            c(Colour::Hearts, Rank::Ace),
            c(Colour::Spades, Rank::Seven),
            c(Colour::Hearts, Rank::Seven),
        ];
        assert_eq!(
            sorted(&cards, mode),
            vec![
                c(Colour::Hearts, Rank::Ace),
                c(Colour::Spades, Rank::Seven),
                c(Colour::Hearts, Rank::Seven),
                c(Colour::Clubs, Rank::Eight),
            ]
        );
    }

    #[test]
    fn resorting_keeps_fixed_colour_order() {
        let mode = GameMode::NoTrump;
        let mut cards = [
            c(Colour::Clubs, Rank::Eight),
            c(Colour::Hearts, Rank::Ace),
            c(Colour::Spades, Rank::Seven),
        ];
        sort_in_trick(&mut cards, Colour::Clubs, mode);
        let once = cards;
        sort_in_trick(&mut cards, Colour::Clubs, mode);
        assert_eq!(cards, once);

        // Re-anchoring on the new first card reorders the hand.
        sort(&mut cards, mode);
        assert_eq!(cards[2], c(Colour::Hearts, Rank::Ace));
    }

    #[test]
    fn empty_sort_is_noop() {
        let mut cards: [Card; 0] = [];
        sort(&mut cards, GameMode::AllTrump);
        assert!(sorted(&cards, GameMode::AllTrump).is_empty());
    }

    #[test]
    fn all_trump_orders_by_trump_strength() {
        let mode = GameMode::AllTrump;
        let nine = c(Colour::Clubs, Rank::Nine);
        let ace = c(Colour::Hearts, Rank::Ace);
        assert_eq!(
            compare_in_trick(nine, ace, Colour::Hearts, mode),
            Ordering::Greater
        );
        assert_eq!(stronger_of(ace, nine, mode), nine);
    }

    #[test]
    fn trump_beats_higher_plain_card() {
        let mode = GameMode::Trump(Colour::Clubs);
        let seven = c(Colour::Clubs, Rank::Seven);
        let ace = c(Colour::Hearts, Rank::Ace);
        assert_eq!(stronger_of(ace, seven, mode), seven);
        assert_eq!(stronger_of(seven, ace, mode), seven);
    }

    #[test]
    fn ties_go_to_first_argument() {
        let mode = GameMode::NoTrump;
        let a = c(Colour::Hearts, Rank::King);
        let b = c(Colour::Spades, Rank::King);
        assert_eq!(stronger_of(a, b, mode), a);
        assert_eq!(stronger_of(b, a, mode), b);
    }
}
