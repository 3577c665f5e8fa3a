use alloc::vec::Vec;

use log::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::event::GameEvent;
use crate::options::MatchOptions;
use crate::trick::{Play, SEATS};

use super::{GameState, MatchState};

impl MatchState {
    fn awaiting_seat(&self) -> Result<usize, ActionError> {
        match self.phase {
            GameState::AwaitingPlay(seat) => Ok(seat),
            _ => Err(ActionError::InvalidState),
        }
    }

    /// Plays `card` for the current seat.
    ///
    /// A seat leading an empty trick may play any card it holds; otherwise
    /// the card must match the suit or rank of the lead card. When every seat
    /// has acted the trick is resolved and its winner leads the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if no seat is awaiting a play, or the card is not
    /// held by the current seat or does not match the lead card. The state is
    /// unchanged on error.
    pub fn play(
        &mut self,
        card: Card,
        options: &MatchOptions,
    ) -> Result<Vec<GameEvent>, ActionError> {
        let seat = self.awaiting_seat()?;

        if self.center.lead().is_some_and(|lead| !card.matches(lead)) {
            return Err(ActionError::IllegalPlay);
        }
        self.players[seat]
            .hand
            .remove(&card)
            .map_err(|_| ActionError::IllegalPlay)?;

        self.center.push(Play::new(seat, card));
        debug!("seat {seat} played {card}");

        let mut events = alloc::vec![GameEvent::CardPlayed { seat, card }];
        self.advance(options, &mut events);
        self.settle(options, &mut events);

        debug_assert!(self.is_consistent(), "card multiset broken after a play");
        Ok(events)
    }

    /// Draws a card from the stock for the current seat.
    ///
    /// The seat keeps the turn after drawing. If the stock is already empty
    /// the seat passes instead. Once the stock runs out while the seat still
    /// cannot follow, its turn is forfeited.
    ///
    /// # Errors
    ///
    /// Returns an error if no seat is awaiting a play, or the current seat
    /// already holds a legal play.
    pub fn draw(&mut self, options: &MatchOptions) -> Result<Vec<GameEvent>, ActionError> {
        let seat = self.awaiting_seat()?;
        if self.can_play(seat) {
            return Err(ActionError::NothingToDraw);
        }

        let mut events = Vec::new();
        if let Ok(card) = self.stock.draw() {
            self.players[seat].hand.add(card);
            debug!("seat {seat} drew {card}");
            events.push(GameEvent::CardDrawn { seat, card });
        }
        self.settle(options, &mut events);

        debug_assert!(self.is_consistent(), "card multiset broken after a draw");
        Ok(events)
    }

    /// Passes the turn of `seat` without a play.
    fn skip(&mut self, seat: usize, options: &MatchOptions, events: &mut Vec<GameEvent>) {
        debug!("seat {seat} cannot play and the deck is empty, skipping");
        events.push(GameEvent::TurnSkipped { seat });
        self.advance(options, events);
    }

    /// Skips every seat that can neither play nor draw.
    ///
    /// If all four seats pass with nothing on the table, the round ends.
    fn settle(&mut self, options: &MatchOptions, events: &mut Vec<GameEvent>) {
        let mut idle = 0;
        while let GameState::AwaitingPlay(seat) = self.phase {
            if !self.stock.is_empty() || self.can_play(seat) {
                break;
            }
            let leading = self.center.is_empty();
            self.skip(seat, options, events);
            if leading {
                idle += 1;
                if idle == SEATS {
                    self.phase = GameState::TrickComplete;
                    self.evaluate_termination(0, options, events);
                }
            }
        }
    }

    /// Hands the turn to the next seat, resolving the trick once it comes
    /// back around to the leader.
    fn advance(&mut self, options: &MatchOptions, events: &mut Vec<GameEvent>) {
        self.current = (self.current + 1) % SEATS;
        self.phase = GameState::AwaitingPlay(self.current);

        if self.center.leader() == Some(self.current) {
            self.complete_trick(options, events);
        }
    }

    fn complete_trick(&mut self, options: &MatchOptions, events: &mut Vec<GameEvent>) {
        self.phase = GameState::TrickComplete;

        let winner = self.center.winner();
        let plays = self.center.take();
        self.discards.extend(plays.iter().map(|play| play.card));

        let player = &mut self.players[winner.seat];
        player.tricks_won = player.tricks_won.saturating_add(1);
        self.scores[winner.seat] = self.scores[winner.seat].saturating_add(1);
        info!(
            "seat {} won trick {} with {}",
            winner.seat, self.trick_number, winner.card
        );
        events.push(GameEvent::TrickWon {
            trick: self.trick_number,
            seat: winner.seat,
            card: winner.card,
        });

        self.trick_number = self.trick_number.saturating_add(1);
        self.current = winner.seat;
        self.evaluate_termination(plays.len(), options, events);
    }
}
