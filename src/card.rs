//! Card types and card tokens.
//!
//! A card token is the suit symbol followed by the rank symbol, for example
//! `s3`, `dQ`, `hA` or `c10`.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs (`c`).
    Clubs,
    /// Diamonds (`d`).
    Diamonds,
    /// Hearts (`h`).
    Hearts,
    /// Spades (`s`).
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the one-character token symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'c' => Some(Self::Clubs),
            'd' => Some(Self::Diamonds),
            'h' => Some(Self::Hearts),
            's' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank, ordered from `Two` (lowest) to `Ace` (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two = 2,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the ordinal used for trick comparison (2 through 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the token symbol (`2`..`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.symbol() == symbol)
    }

    /// Returns the seat that opens a round when a card of this rank is the
    /// face-up lead card.
    ///
    /// A, 5, 9 and K open at seat 0; 2, 6 and 10 at seat 1; 3, 7 and J at
    /// seat 2; 4, 8 and Q at seat 3.
    ///
    /// ```
    /// use goboom::Rank;
    ///
    /// assert_eq!(Rank::Nine.opening_seat(), 0);
    /// assert_eq!(Rank::Queen.opening_seat(), 3);
    /// ```
    #[must_use]
    pub const fn opening_seat(self) -> usize {
        match self {
            Self::Ace | Self::Five | Self::Nine | Self::King => 0,
            Self::Two | Self::Six | Self::Ten => 1,
            Self::Three | Self::Seven | Self::Jack => 2,
            Self::Four | Self::Eight | Self::Queen => 3,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether this card may be played onto a trick led by `lead`,
    /// that is whether it shares the lead card's suit or rank.
    #[must_use]
    pub fn matches(&self, lead: &Self) -> bool {
        self.suit == lead.suit || self.rank == lead.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_symbol)
            .ok_or(ParseError::InvalidCardToken)?;
        let rank = Rank::from_symbol(chars.as_str()).ok_or(ParseError::InvalidCardToken)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
