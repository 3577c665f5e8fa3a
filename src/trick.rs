//! Tricks and trick resolution.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Number of seats at the table.
pub const SEATS: usize = 4;

/// A card played to a trick by a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Play {
    /// The seat that played the card.
    pub seat: usize,
    /// The card played.
    pub card: Card,
}

impl Play {
    /// Creates a new play.
    #[must_use]
    pub const fn new(seat: usize, card: Card) -> Self {
        Self { seat, card }
    }
}

/// Returns the position of the winning card among `cards`, in play order.
///
/// Only cards of the lead suit (the suit of the first card) compete; the
/// highest of them wins. The first card always shares its own suit, so when
/// nobody else follows suit the lead card wins by default.
///
/// # Panics
///
/// Panics if `cards` is empty or holds more than four cards.
///
/// ```
/// use goboom::Card;
/// use goboom::trick::winning_position;
///
/// let cards: Vec<Card> = ["s3", "h5", "sK", "s7"]
///     .iter()
///     .map(|token| token.parse().unwrap())
///     .collect();
/// assert_eq!(winning_position(&cards), 2);
/// ```
#[must_use]
pub fn winning_position(cards: &[Card]) -> usize {
    assert!(
        (1..=SEATS).contains(&cards.len()),
        "a trick is resolved with 1 to 4 plays, got {}",
        cards.len()
    );

    let lead_suit = cards[0].suit;
    let mut best = 0;
    for (position, card) in cards.iter().enumerate().skip(1) {
        if card.suit == lead_suit && card.rank > cards[best].rank {
            best = position;
        }
    }
    best
}

/// The cards played so far in the current trick (the center pile).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trick {
    plays: Vec<Play>,
}

impl Trick {
    /// Creates an empty trick.
    #[must_use]
    pub const fn new() -> Self {
        Self { plays: Vec::new() }
    }

    /// Returns the lead card, if any card has been played.
    #[must_use]
    pub fn lead(&self) -> Option<&Card> {
        self.plays.first().map(|play| &play.card)
    }

    /// Returns the lead suit, if any card has been played.
    #[must_use]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead().map(|card| card.suit)
    }

    /// Returns the seat that led the trick.
    #[must_use]
    pub fn leader(&self) -> Option<usize> {
        self.plays.first().map(|play| play.seat)
    }

    /// Returns whether `seat` has already played to this trick.
    #[must_use]
    pub fn has_played(&self, seat: usize) -> bool {
        self.plays.iter().any(|play| play.seat == seat)
    }

    /// Appends a play.
    ///
    /// # Panics
    ///
    /// Panics if the trick already holds four plays or the seat has already
    /// played to it.
    pub fn push(&mut self, play: Play) {
        assert!(self.plays.len() < SEATS, "a trick holds at most 4 plays");
        assert!(
            !self.has_played(play.seat),
            "seat {} already played to this trick",
            play.seat
        );
        self.plays.push(play);
    }

    /// Returns the winning play.
    ///
    /// # Panics
    ///
    /// Panics if the trick is empty.
    #[must_use]
    pub fn winner(&self) -> Play {
        let cards: Vec<Card> = self.cards().collect();
        self.plays[winning_position(&cards)]
    }

    /// Returns the plays in play order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Returns the played cards in play order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|play| play.card)
    }

    /// Returns the number of plays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns whether no card has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Removes and returns all plays.
    pub fn take(&mut self) -> Vec<Play> {
        core::mem::take(&mut self.plays)
    }
}
