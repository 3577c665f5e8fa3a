//! Player hands.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// The cards held by one player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes one copy of `card` from the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotInHand`] if the hand does not hold the card.
    pub fn remove(&mut self, card: &Card) -> Result<Card, HandError> {
        let index = self
            .cards
            .iter()
            .position(|held| held == card)
            .ok_or(HandError::CardNotInHand)?;
        Ok(self.cards.remove(index))
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards that may follow `lead`: those sharing its suit or
    /// its rank.
    #[must_use]
    pub fn legal_plays(&self, lead: &Card) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.matches(lead))
            .copied()
            .collect()
    }

    /// Returns whether any card in the hand may follow `lead`.
    #[must_use]
    pub fn can_follow(&self, lead: &Card) -> bool {
        self.cards.iter().any(|card| card.matches(lead))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
