//! Events reported by game transitions.

use core::fmt;

use crate::card::Card;
use crate::trick::SEATS;

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// A player has no cards left.
    HandEmptied {
        /// The first seat found with an empty hand.
        seat: usize,
    },
    /// The stock is empty and nobody could follow the last lead.
    Blocked,
}

/// Something that happened while applying an action.
///
/// The `Display` form is a one-line description for a front end to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round was dealt.
    RoundDealt {
        /// The round number, starting at 1.
        round: u32,
        /// The face-up lead card of the first trick.
        lead: Card,
        /// The seat the lead card is played for.
        dealer: usize,
        /// The seat that plays next.
        opener: usize,
    },
    /// A card was played to the current trick.
    CardPlayed {
        /// The seat that played.
        seat: usize,
        /// The card played.
        card: Card,
    },
    /// A card was drawn from the stock.
    CardDrawn {
        /// The seat that drew.
        seat: usize,
        /// The card drawn.
        card: Card,
    },
    /// A seat could neither play nor draw and passed.
    TurnSkipped {
        /// The seat that passed.
        seat: usize,
    },
    /// A trick was resolved.
    TrickWon {
        /// The trick number within the round.
        trick: u32,
        /// The winning seat.
        seat: usize,
        /// The winning card.
        card: Card,
    },
    /// A round ended.
    RoundEnded {
        /// The round number.
        round: u32,
        /// Why the round ended.
        end: RoundEnd,
    },
    /// The match is over.
    GameOver {
        /// Final scores by seat.
        scores: [u32; SEATS],
    },
    /// The player asked to quit.
    Quit,
}

struct Seat(usize);

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player{}", self.0 + 1)
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::RoundDealt {
                round,
                lead,
                dealer,
                opener,
            } => write!(
                f,
                "Round {round}: the lead card {lead} is placed at the center for {}; {} plays first.",
                Seat(dealer),
                Seat(opener)
            ),
            Self::CardPlayed { seat, card } => write!(f, "{} played {card}.", Seat(seat)),
            Self::CardDrawn { seat, card } => write!(f, "{} drew {card}.", Seat(seat)),
            Self::TurnSkipped { seat } => write!(
                f,
                "The deck is empty and {} cannot play. Skipping to the next player.",
                Seat(seat)
            ),
            Self::TrickWon { trick, seat, card } => write!(
                f,
                "{} won trick #{trick} with the card {card}.",
                Seat(seat)
            ),
            Self::RoundEnded { round, end } => match end {
                RoundEnd::HandEmptied { seat } => {
                    write!(f, "Round {round} is over: {} has no cards left.", Seat(seat))
                }
                RoundEnd::Blocked => write!(
                    f,
                    "Round {round} is over: the deck is empty and nobody can follow."
                ),
            },
            Self::GameOver { scores } => write!(
                f,
                "Game over! Scores: {} {} {} {}",
                scores[0], scores[1], scores[2], scores[3]
            ),
            Self::Quit => write!(f, "Quitting the game."),
        }
    }
}
