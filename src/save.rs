//! Line-oriented save format.
//!
//! | line | contents |
//! |------|----------|
//! | 1 | current seat |
//! | 2 | trick number |
//! | 3-6 | hands of seats 0 to 3, space-separated card tokens |
//! | 7 | center pile, in play order |
//! | 8 | scores of seats 0 to 3 |
//! | 9 | round number |
//! | 10 | seats that played the center pile cards |
//! | 11 | tricks won this round by seats 0 to 3 |
//! | 12 | stock, bottom to top |
//! | 13 | cards of tricks completed this round |
//!
//! A classic save stops after line 8. Loading one starts from round 1 with
//! every card missing from lines 3-7 back in the stock in canonical order.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::CorruptSave;
use crate::game::{GameState, MatchState, Player};
use crate::hand::Hand;
use crate::trick::{Play, SEATS, Trick};

const CLASSIC_LINES: usize = 8;
const FULL_LINES: usize = 13;

fn push_line<T: core::fmt::Display>(out: &mut String, items: impl IntoIterator<Item = T>) {
    let mut first = true;
    for item in items {
        if !first {
            out.push(' ');
        }
        first = false;
        let _ = write!(out, "{item}");
    }
    out.push('\n');
}

fn parse_cards(line: &str, number: usize) -> Result<Vec<Card>, CorruptSave> {
    line.split_whitespace()
        .map(|token| token.parse().map_err(|_| CorruptSave::BadToken(number)))
        .collect()
}

fn parse_ints(line: &str, number: usize) -> Result<Vec<u32>, CorruptSave> {
    line.split_whitespace()
        .map(|token| token.parse().map_err(|_| CorruptSave::BadToken(number)))
        .collect()
}

fn parse_fixed<const N: usize>(line: &str, number: usize) -> Result<[u32; N], CorruptSave> {
    parse_ints(line, number)?
        .try_into()
        .map_err(|_| CorruptSave::FieldCount(number))
}

fn line<'a>(lines: &[&'a str], number: usize) -> Result<&'a str, CorruptSave> {
    lines
        .get(number - 1)
        .copied()
        .ok_or(CorruptSave::MissingLine(number))
}

/// Checks that the center pile was played clockwise from its leader up to
/// the seat before `current`. A seat missing from that run must have passed,
/// which needs an empty stock and a hand that cannot follow the lead.
fn seats_in_turn_order(
    seats: &[usize],
    current: usize,
    players: &[Player; SEATS],
    stock: &Deck,
    center: &Trick,
) -> bool {
    let (Some(leader), Some(lead)) = (center.leader(), center.lead()) else {
        return true;
    };
    let offset = |seat: usize| (seat + SEATS - leader) % SEATS;
    let span = offset(current);

    let ordered = seats.windows(2).all(|pair| offset(pair[0]) < offset(pair[1]));
    let before_current = seats.iter().all(|&seat| offset(seat) < span);
    let passes_allowed = (1..span)
        .map(|step| (leader + step) % SEATS)
        .filter(|seat| !center.has_played(*seat))
        .all(|seat| stock.is_empty() && !players[seat].hand.can_follow(lead));

    ordered && before_current && passes_allowed
}

impl MatchState {
    /// Serializes the state in the line-oriented save format.
    ///
    /// ```
    /// use goboom::{Game, MatchOptions, MatchState};
    ///
    /// let game = Game::new(MatchOptions::default(), 3);
    /// let text = game.state().save();
    /// assert_eq!(MatchState::load(&text).as_ref(), Ok(game.state()));
    /// ```
    #[must_use]
    pub fn save(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, [self.current]);
        push_line(&mut out, [self.trick_number]);
        for player in &self.players {
            push_line(&mut out, player.hand.cards());
        }
        push_line(&mut out, self.center.cards());
        push_line(&mut out, self.scores);
        push_line(&mut out, [self.round_number]);
        push_line(&mut out, self.center.plays().iter().map(|play| play.seat));
        push_line(&mut out, self.players.iter().map(Player::tricks_won));
        push_line(&mut out, self.stock.cards());
        push_line(&mut out, &self.discards);
        out
    }

    /// Parses a state written by [`MatchState::save`] or a classic 8-line save.
    ///
    /// The loaded state awaits a play from the saved current seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a line is missing, has the wrong number of fields,
    /// holds an unparsable token or an out-of-range value, or if the cards do
    /// not form exactly one deck.
    pub fn load(text: &str) -> Result<Self, CorruptSave> {
        let lines: Vec<&str> = text.lines().collect();
        let classic = lines
            .iter()
            .skip(CLASSIC_LINES)
            .all(|extra| extra.trim().is_empty());

        let [current] = parse_fixed(line(&lines, 1)?, 1)?;
        let current = current as usize;
        if current >= SEATS {
            return Err(CorruptSave::OutOfRange(1));
        }

        let [trick_number] = parse_fixed(line(&lines, 2)?, 2)?;
        if trick_number == 0 || trick_number as usize > DECK_SIZE {
            return Err(CorruptSave::OutOfRange(2));
        }

        let mut players: [Player; SEATS] = core::array::from_fn(Player::new);
        for (seat, player) in players.iter_mut().enumerate() {
            let number = 3 + seat;
            player.hand = Hand::from_cards(parse_cards(line(&lines, number)?, number)?);
        }

        let center_cards = parse_cards(line(&lines, 7)?, 7)?;
        if center_cards.len() >= SEATS {
            return Err(CorruptSave::FieldCount(7));
        }

        let scores = parse_fixed::<SEATS>(line(&lines, 8)?, 8)?;

        let (round_number, seats, tricks_won, stock, discards) = if classic {
            let leader = (current + SEATS - center_cards.len()) % SEATS;
            let seats: Vec<usize> = (0..center_cards.len())
                .map(|offset| (leader + offset) % SEATS)
                .collect();
            let held: Vec<Card> = players
                .iter()
                .flat_map(|p| p.hand.cards().iter().copied())
                .chain(center_cards.iter().copied())
                .collect();
            let stock: Vec<Card> = Deck::standard()
                .cards()
                .iter()
                .copied()
                .filter(|card| !held.contains(card))
                .collect();
            (1, seats, scores, Deck::from_cards(stock), Vec::new())
        } else {
            if lines.len() < FULL_LINES {
                return Err(CorruptSave::MissingLine(lines.len() + 1));
            }
            let [round_number] = parse_fixed(line(&lines, 9)?, 9)?;
            if round_number == 0 {
                return Err(CorruptSave::OutOfRange(9));
            }
            let seats: Vec<usize> = parse_ints(line(&lines, 10)?, 10)?
                .into_iter()
                .map(|seat| seat as usize)
                .collect();
            if seats.len() != center_cards.len() {
                return Err(CorruptSave::FieldCount(10));
            }
            let tricks_won = parse_fixed::<SEATS>(line(&lines, 11)?, 11)?;
            if tricks_won.iter().any(|&tricks| tricks as usize > DECK_SIZE) {
                return Err(CorruptSave::OutOfRange(11));
            }
            let stock = Deck::from_cards(parse_cards(line(&lines, 12)?, 12)?);
            let discards = parse_cards(line(&lines, 13)?, 13)?;
            (round_number, seats, tricks_won, stock, discards)
        };

        let mut center = Trick::new();
        for (&seat, &card) in seats.iter().zip(&center_cards) {
            if seat >= SEATS || seat == current || center.has_played(seat) {
                return Err(CorruptSave::OutOfRange(10));
            }
            center.push(Play::new(seat, card));
        }
        if !seats_in_turn_order(&seats, current, &players, &stock, &center) {
            return Err(CorruptSave::OutOfRange(10));
        }
        if center.is_empty() && players.iter().any(|player| player.hand.is_empty()) {
            return Err(CorruptSave::RoundOver);
        }

        for (player, tricks) in players.iter_mut().zip(tricks_won) {
            player.tricks_won = tricks;
        }

        let state = Self {
            players,
            stock,
            center,
            discards,
            current,
            trick_number,
            round_number,
            scores,
            phase: GameState::AwaitingPlay(current),
        };
        if !state.is_consistent() {
            return Err(CorruptSave::InconsistentCards);
        }
        Ok(state)
    }
}
