//! Player commands.

use core::str::FromStr;

use crate::card::Card;
use crate::error::ParseError;

/// A single player command.
///
/// Commands parse from one line of input: a card token plays that card,
/// `d` draws, `s` starts a new match, `r` resets, and `x` quits.
///
/// ```
/// use goboom::{Card, Command, Rank, Suit};
///
/// assert_eq!("d".parse(), Ok(Command::Draw));
/// assert_eq!(
///     "c10".parse(),
///     Ok(Command::Play(Card::new(Rank::Ten, Suit::Clubs)))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a card from the current player's hand.
    Play(Card),
    /// Draw from the stock.
    Draw,
    /// Start a new match after the previous one ended.
    Start,
    /// Abandon the current match and deal a new one.
    Reset,
    /// Quit.
    Quit,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim() {
            "" => Err(ParseError::UnknownCommand),
            "d" => Ok(Self::Draw),
            "s" => Ok(Self::Start),
            "r" => Ok(Self::Reset),
            "x" => Ok(Self::Quit),
            token => token.parse().map(Self::Play),
        }
    }
}
