//! Match controller, turn engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::command::Command;
use crate::error::{ActionError, CorruptSave};
use crate::event::GameEvent;
use crate::options::MatchOptions;
use crate::trick::SEATS;

mod round;
pub mod state;
mod turn;

pub use state::{GameState, MatchState, Player};

/// A Go Boom match for four seats.
///
/// The game owns the [`MatchState`] and the random source used to shuffle
/// each round. Actions always apply to the seat whose turn it is, and each
/// returns the events it caused. Completed rounds are re-dealt automatically
/// until the match is over.
#[derive(Debug, Clone)]
pub struct Game {
    /// Match options.
    pub options: MatchOptions,
    state: MatchState,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new match with the given seed and deals the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use goboom::{Game, MatchOptions};
    ///
    /// let game = Game::new(MatchOptions::default(), 42);
    /// assert_eq!(game.state().stock().len(), 23);
    /// ```
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (state, _) = MatchState::deal(1, [0; SEATS], &options, &mut rng);
        Self {
            options,
            state,
            rng,
        }
    }

    /// Resumes a match from an existing state.
    ///
    /// The seed drives the shuffles of later rounds. A state whose scores
    /// already reach the threshold resumes as game over.
    ///
    /// # Panics
    ///
    /// Panics if the state does not hold each of the 52 cards exactly once.
    #[must_use]
    pub fn resume(options: MatchOptions, seed: u64, mut state: MatchState) -> Self {
        assert!(state.is_consistent(), "resumed state must hold one full deck");
        if state.threshold_reached(&options) {
            state.phase = GameState::GameOver;
        }
        Self {
            options,
            state,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Resumes a match from the text written by [`Game::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the save is malformed or its cards do not form a
    /// single deck.
    pub fn load(options: MatchOptions, seed: u64, save: &str) -> Result<Self, CorruptSave> {
        let state = MatchState::load(save).inspect_err(|err| warn!("rejected save: {err}"))?;
        Ok(Self::resume(options, seed, state))
    }

    /// Serializes the match state.
    #[must_use]
    pub fn save(&self) -> String {
        self.state.save()
    }

    /// Returns a read-only view of the match state.
    #[must_use]
    pub const fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns a copy of the match state.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Plays a card for the current seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over or the card is not a legal play
    /// for the current seat.
    pub fn play(&mut self, card: Card) -> Result<Vec<GameEvent>, ActionError> {
        let mut events = self.state.play(card, &self.options)?;
        self.next_round(&mut events);
        Ok(events)
    }

    /// Draws a card for the current seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over or the current seat holds a
    /// legal play.
    pub fn draw(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        let mut events = self.state.draw(&self.options)?;
        self.next_round(&mut events);
        Ok(events)
    }

    /// Starts a new match once the current one is over.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] while a match is in progress.
    pub fn start(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        if !self.is_game_over() {
            return Err(ActionError::InvalidState);
        }
        Ok(self.reset())
    }

    /// Abandons the current match and deals a new one with zeroed scores.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        info!("starting a new match");
        let (state, event) = MatchState::deal(1, [0; SEATS], &self.options, &mut self.rng);
        self.state = state;
        alloc::vec![event]
    }

    /// Applies a parsed player command.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn apply(&mut self, command: Command) -> Result<Vec<GameEvent>, ActionError> {
        match command {
            Command::Play(card) => self.play(card),
            Command::Draw => self.draw(),
            Command::Start => self.start(),
            Command::Reset => Ok(self.reset()),
            Command::Quit => Ok(alloc::vec![GameEvent::Quit]),
        }
    }

    /// Returns whether the match is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.phase == GameState::GameOver
    }

    /// Returns the match scores by seat.
    #[must_use]
    pub const fn final_scores(&self) -> [u32; SEATS] {
        self.state.scores
    }

    /// Returns the seats holding the highest score.
    #[must_use]
    pub fn winners(&self) -> Vec<usize> {
        let best = self.state.scores.iter().copied().max().unwrap_or(0);
        (0..SEATS)
            .filter(|&seat| self.state.scores[seat] == best)
            .collect()
    }

    /// Deals the next round if the last action completed one.
    fn next_round(&mut self, events: &mut Vec<GameEvent>) {
        if self.state.phase != GameState::RoundComplete {
            return;
        }
        let (state, event) = MatchState::deal(
            self.state.round_number.saturating_add(1),
            self.state.scores,
            &self.options,
            &mut self.rng,
        );
        self.state = state;
        events.push(event);
    }
}
