//! Match configuration options.

/// When a match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum GameOverRule {
    /// Rounds are re-dealt until a player's score reaches the threshold.
    #[default]
    ScoreThreshold,
    /// The match ends with the first round, or earlier if the threshold is
    /// reached mid-round.
    SingleRound,
}

/// Configuration options for a Go Boom match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use goboom::{GameOverRule, MatchOptions};
///
/// let options = MatchOptions::default()
///     .with_hand_size(5)
///     .with_score_threshold(7)
///     .with_game_over(GameOverRule::SingleRound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,
    /// Score at which the match ends.
    pub score_threshold: u32,
    /// Rule deciding when the match ends.
    pub game_over: GameOverRule,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            score_threshold: 10,
            game_over: GameOverRule::ScoreThreshold,
        }
    }
}

impl MatchOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// Values are capped when dealing so that at least the face-up lead card
    /// can be turned; 12 cards per player is the most a single deck allows.
    ///
    /// # Example
    ///
    /// ```
    /// use goboom::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the score that ends the match.
    ///
    /// # Example
    ///
    /// ```
    /// use goboom::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_score_threshold(3);
    /// assert_eq!(options.score_threshold, 3);
    /// ```
    #[must_use]
    pub const fn with_score_threshold(mut self, threshold: u32) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Sets the rule deciding when the match ends.
    ///
    /// # Example
    ///
    /// ```
    /// use goboom::{GameOverRule, MatchOptions};
    ///
    /// let options = MatchOptions::default().with_game_over(GameOverRule::SingleRound);
    /// assert_eq!(options.game_over, GameOverRule::SingleRound);
    /// ```
    #[must_use]
    pub const fn with_game_over(mut self, rule: GameOverRule) -> Self {
        self.game_over = rule;
        self
    }
}
