//! Game state types.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::hand::Hand;
use crate::trick::{SEATS, Trick};

/// Where the match is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the seat to play or draw.
    AwaitingPlay(usize),
    /// A trick has just been resolved.
    TrickComplete,
    /// A round has ended and the next one has not been dealt.
    RoundComplete,
    /// The match is over.
    GameOver,
}

/// A seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: usize,
    pub(crate) hand: Hand,
    pub(crate) tricks_won: u32,
}

impl Player {
    pub(crate) const fn new(seat: usize) -> Self {
        Self {
            seat,
            hand: Hand::new(),
            tricks_won: 0,
        }
    }

    /// Returns the seat index (0 to 3).
    #[must_use]
    pub const fn seat(&self) -> usize {
        self.seat
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the number of tricks won this round.
    #[must_use]
    pub const fn tricks_won(&self) -> u32 {
        self.tricks_won
    }
}

/// The full state of a match.
///
/// Every card of the round is in exactly one of the stock, a hand, the
/// center pile, or the discards of completed tricks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub(crate) players: [Player; SEATS],
    pub(crate) stock: Deck,
    pub(crate) center: Trick,
    pub(crate) discards: Vec<Card>,
    pub(crate) current: usize,
    pub(crate) trick_number: u32,
    pub(crate) round_number: u32,
    pub(crate) scores: [u32; SEATS],
    pub(crate) phase: GameState,
}

impl MatchState {
    /// Returns the players by seat.
    #[must_use]
    pub const fn players(&self) -> &[Player; SEATS] {
        &self.players
    }

    /// Returns the player at `seat`.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is 4 or more.
    #[must_use]
    pub const fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    /// Returns the stock.
    #[must_use]
    pub const fn stock(&self) -> &Deck {
        &self.stock
    }

    /// Returns the cards played so far in the current trick.
    #[must_use]
    pub const fn center(&self) -> &Trick {
        &self.center
    }

    /// Returns the cards of tricks already completed this round.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current
    }

    /// Returns the number of the trick in progress, starting at 1.
    #[must_use]
    pub const fn trick_number(&self) -> u32 {
        self.trick_number
    }

    /// Returns the round number, starting at 1.
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Returns the match scores by seat.
    #[must_use]
    pub const fn scores(&self) -> [u32; SEATS] {
        self.scores
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GameState {
        self.phase
    }

    /// Returns the lead card of the current trick.
    #[must_use]
    pub fn lead_card(&self) -> Option<&Card> {
        self.center.lead()
    }

    /// Returns the cards `seat` may play right now. When the trick is empty
    /// every card in the hand is legal.
    #[must_use]
    pub fn legal_plays(&self, seat: usize) -> Vec<Card> {
        let hand = &self.players[seat].hand;
        self.center
            .lead()
            .map_or_else(|| hand.cards().to_vec(), |lead| hand.legal_plays(lead))
    }

    /// Returns whether `seat` holds a card it may play right now.
    #[must_use]
    pub fn can_play(&self, seat: usize) -> bool {
        let hand = &self.players[seat].hand;
        self.center
            .lead()
            .map_or_else(|| !hand.is_empty(), |lead| hand.can_follow(lead))
    }

    /// Returns whether the stock, hands, center pile and discards hold each of
    /// the 52 cards exactly once.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut total = 0;
        let hands = self.players.iter().flat_map(|p| p.hand.cards().iter().copied());
        for card in hands
            .chain(self.center.cards())
            .chain(self.stock.cards().iter().copied())
            .chain(self.discards.iter().copied())
        {
            total += 1;
            if !seen.insert(card) {
                return false;
            }
        }
        total == DECK_SIZE
    }
}
