use alloc::vec::Vec;

use log::info;
use rand::Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::event::{GameEvent, RoundEnd};
use crate::options::{GameOverRule, MatchOptions};
use crate::trick::{Play, SEATS, Trick};

use super::{GameState, MatchState, Player};

/// Most cards each seat can be dealt while still turning a lead card.
const MAX_HAND_SIZE: usize = (DECK_SIZE - 1) / SEATS;

impl MatchState {
    /// Shuffles a fresh deck, turns the lead card face up and deals the hands.
    ///
    /// The lead card's rank picks the opening seat; the card itself is played
    /// for the seat just before it.
    pub(crate) fn deal<R: Rng + ?Sized>(
        round: u32,
        scores: [u32; SEATS],
        options: &MatchOptions,
        rng: &mut R,
    ) -> (Self, GameEvent) {
        let mut stock = Deck::standard();
        stock.shuffle(rng);

        let lead = stock.draw().expect("a fresh deck holds 52 cards");
        let opener = lead.rank.opening_seat();
        let dealer = (opener + SEATS - 1) % SEATS;

        let mut players: [Player; SEATS] = core::array::from_fn(Player::new);
        for _ in 0..options.hand_size.min(MAX_HAND_SIZE) {
            for offset in 0..SEATS {
                let card = stock.draw().expect("hand size is capped to the deck");
                players[(opener + offset) % SEATS].hand.add(card);
            }
        }

        let mut center = Trick::new();
        center.push(Play::new(dealer, lead));

        info!("round {round}: lead card {lead}, seat {opener} opens");

        let state = Self {
            players,
            stock,
            center,
            discards: Vec::new(),
            current: opener,
            trick_number: 1,
            round_number: round,
            scores,
            phase: GameState::AwaitingPlay(opener),
        };
        let event = GameEvent::RoundDealt {
            round,
            lead,
            dealer,
            opener,
        };
        (state, event)
    }

    /// Returns whether any score has reached the match threshold.
    pub(crate) fn threshold_reached(&self, options: &MatchOptions) -> bool {
        self.scores
            .iter()
            .any(|&score| score >= options.score_threshold)
    }

    /// Decides whether the round is over after a trick of `trick_len` plays.
    /// A trick of no plays means every seat passed.
    fn round_end(&self, trick_len: usize) -> Option<RoundEnd> {
        if let Some(player) = self.players.iter().find(|p| p.hand.is_empty()) {
            return Some(RoundEnd::HandEmptied {
                seat: player.seat(),
            });
        }
        if self.stock.is_empty() && trick_len <= 1 {
            return Some(RoundEnd::Blocked);
        }
        None
    }

    /// Moves out of `TrickComplete` into the next phase.
    ///
    /// Reaching the score threshold ends the match before the round check.
    pub(crate) fn evaluate_termination(
        &mut self,
        trick_len: usize,
        options: &MatchOptions,
        events: &mut Vec<GameEvent>,
    ) {
        debug_assert_eq!(self.phase, GameState::TrickComplete);

        let round_end = self.round_end(trick_len);
        if let Some(end) = round_end {
            info!("round {} ended: {end:?}", self.round_number);
            events.push(GameEvent::RoundEnded {
                round: self.round_number,
                end,
            });
        }

        let over = self.threshold_reached(options)
            || (round_end.is_some() && options.game_over == GameOverRule::SingleRound);
        self.phase = if over {
            info!("game over, scores {:?}", self.scores);
            events.push(GameEvent::GameOver {
                scores: self.scores,
            });
            GameState::GameOver
        } else if round_end.is_some() {
            GameState::RoundComplete
        } else {
            GameState::AwaitingPlay(self.current)
        };
    }
}
