//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The stock has no cards left.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur when taking a card out of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not held in the hand.
    #[error("card is not in hand")]
    CardNotInHand,
}

/// Errors that can occur while parsing player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token is not a valid card such as `s3` or `c10`.
    #[error("invalid card token")]
    InvalidCardToken,
    /// The line is empty or is not a known command.
    #[error("unknown command")]
    UnknownCommand,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The card is not held by the current player or does not match the
    /// suit or rank of the lead card.
    #[error("illegal play")]
    IllegalPlay,
    /// The current player holds a legal play and must play it.
    #[error("nothing to draw: a legal play is available")]
    NothingToDraw,
}

/// Errors that can occur when loading a saved match.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CorruptSave {
    /// A required line is missing.
    #[error("corrupt save: line {0} is missing")]
    MissingLine(usize),
    /// A line has the wrong number of fields.
    #[error("corrupt save: line {0} has the wrong number of fields")]
    FieldCount(usize),
    /// A line holds a token that is not a valid card or integer.
    #[error("corrupt save: line {0} holds an unparsable token")]
    BadToken(usize),
    /// A seat, trick number, round number or trick tally is out of range.
    #[error("corrupt save: line {0} holds a value out of range")]
    OutOfRange(usize),
    /// The saved round has already ended: a hand is empty between tricks.
    #[error("corrupt save: the saved round is already over")]
    RoundOver,
    /// The saved cards are not exactly one full deck.
    #[error("corrupt save: cards do not form a single deck")]
    InconsistentCards,
}
