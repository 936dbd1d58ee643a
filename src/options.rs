//! Rule configuration options.

/// How raw trick points are converted into score units.
///
/// The defaults are the standard rules: no-trump points are doubled, and a
/// remainder above 5 (above 3 for all-trump) rounds the unit up.
///
/// ```
/// use belot::ScoreRounding;
///
/// let rounding = ScoreRounding::default().with_all_trump_threshold(4);
/// assert_eq!(rounding.all_trump_threshold, 4);
/// assert_eq!(rounding.suit_threshold, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreRounding {
    /// Factor applied to no-trump points before conversion.
    pub no_trump_multiplier: u32,
    /// Remainder above which colour and no-trump scores round up.
    pub suit_threshold: u32,
    /// Remainder above which all-trump scores round up.
    pub all_trump_threshold: u32,
}

impl Default for ScoreRounding {
    fn default() -> Self {
        Self {
            no_trump_multiplier: 2,
            suit_threshold: 5,
            all_trump_threshold: 3,
        }
    }
}

impl ScoreRounding {
    /// Sets the no-trump multiplier.
    #[must_use]
    pub const fn with_no_trump_multiplier(mut self, multiplier: u32) -> Self {
        self.no_trump_multiplier = multiplier;
        self
    }

    /// Sets the rounding threshold for colour and no-trump modes.
    #[must_use]
    pub const fn with_suit_threshold(mut self, threshold: u32) -> Self {
        self.suit_threshold = threshold;
        self
    }

    /// Sets the rounding threshold for all-trump.
    #[must_use]
    pub const fn with_all_trump_threshold(mut self, threshold: u32) -> Self {
        self.all_trump_threshold = threshold;
        self
    }
}

/// Configuration options for a [`Rules`](crate::Rules) instance.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use belot::{RuleOptions, ScoreRounding};
///
/// let options = RuleOptions::default()
///     .with_validate_snapshots(false)
///     .with_rounding(ScoreRounding::default().with_suit_threshold(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleOptions {
    /// Whether [`Rules::validate_play`](crate::Rules::validate_play) checks the
    /// snapshot (candidate in hand, no duplicates, trick not full) before the
    /// trick rules.
    pub validate_snapshots: bool,
    /// Score conversion settings.
    pub rounding: ScoreRounding,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            validate_snapshots: true,
            rounding: ScoreRounding::default(),
        }
    }
}

impl RuleOptions {
    /// Sets whether snapshots are validated.
    ///
    /// # Example
    ///
    /// ```
    /// use belot::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_validate_snapshots(false);
    /// assert!(!options.validate_snapshots);
    /// ```
    #[must_use]
    pub const fn with_validate_snapshots(mut self, validate: bool) -> Self {
        self.validate_snapshots = validate;
        self
    }

    /// Sets the score conversion settings.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: ScoreRounding) -> Self {
        self.rounding = rounding;
        self
    }
}
