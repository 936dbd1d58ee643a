//! Conversion of trick points into score units.

use crate::mode::GameMode;
use crate::options::ScoreRounding;

/// Converts raw trick points into score units with the standard rounding.
///
/// No-trump points are doubled first. The result is the number of whole
/// tens, plus one if the remainder is above 5 (above 3 under all-trump).
///
/// ```
/// use belot::{Colour, GameMode, score::points_from_tricks};
///
/// assert_eq!(points_from_tricks(56, GameMode::Trump(Colour::Hearts)), 6);
/// assert_eq!(points_from_tricks(34, GameMode::AllTrump), 4);
/// assert_eq!(points_from_tricks(30, GameMode::NoTrump), 6);
/// ```
#[must_use]
pub fn points_from_tricks(trick_points: u32, mode: GameMode) -> u32 {
    points_from_tricks_with(trick_points, mode, &ScoreRounding::default())
}

/// Converts raw trick points into score units using `rounding`.
#[must_use]
pub fn points_from_tricks_with(
    trick_points: u32,
    mode: GameMode,
    rounding: &ScoreRounding,
) -> u32 {
    let (points, threshold) = match mode {
        GameMode::NoTrump => (
            trick_points.saturating_mul(rounding.no_trump_multiplier),
            rounding.suit_threshold,
        ),
        GameMode::Trump(_) => (trick_points, rounding.suit_threshold),
        GameMode::AllTrump => (trick_points, rounding.all_trump_threshold),
    };

    let units = points / 10;
    if points % 10 > threshold {
        units + 1
    } else {
        units
    }
}
