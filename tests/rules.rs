//! Card, deck, hand and trick rule tests.

use std::collections::HashSet;

use goboom::trick::winning_position;
use goboom::{
    Card, Command, DECK_SIZE, Deck, DeckError, GameEvent, Hand, HandError, ParseError, Play,
    Rank, Suit, Trick,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn cards(tokens: &str) -> Vec<Card> {
    tokens.split_whitespace().map(card).collect()
}

#[test]
fn standard_deck_holds_each_card_once() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0], card("c2"));
    assert_eq!(deck.peek(), Some(&card("sA")));
}

#[test]
fn shuffle_is_a_permutation_of_the_deck() {
    let canonical: HashSet<Card> = Deck::standard().cards().iter().copied().collect();

    for seed in 0..32 {
        let mut deck = Deck::standard();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(deck.len(), DECK_SIZE);

        let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(shuffled, canonical);
    }
}

#[test]
fn shuffle_is_reproducible_from_seed() {
    let mut first = Deck::standard();
    let mut second = Deck::standard();
    let mut third = Deck::standard();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
    third.shuffle(&mut ChaCha8Rng::seed_from_u64(10));

    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[test]
fn draw_takes_from_the_top_until_empty() {
    let mut deck = Deck::from_cards(cards("c2 hA"));
    assert_eq!(deck.draw(), Ok(card("hA")));
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.draw(), Ok(card("c2")));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::EmptyDeck));
}

#[test]
fn card_tokens_round_trip() {
    for &card in Deck::standard().cards() {
        let token = card.to_string();
        assert_eq!(token.parse::<Card>(), Ok(card));
    }

    for token in ["s3", "dQ", "hA", "c10", "s2", "dJ", "hK"] {
        assert_eq!(card(token).to_string(), token);
    }
    assert_eq!(card("c10"), Card::new(Rank::Ten, Suit::Clubs));
}

#[test]
fn malformed_card_tokens_are_rejected() {
    for token in ["", "s", "3s", "x3", "s1", "s11", "S3", "sq", "h10x", "s 3"] {
        assert_eq!(
            token.parse::<Card>(),
            Err(ParseError::InvalidCardToken),
            "{token:?}"
        );
    }
}

#[test]
fn ranks_are_totally_ordered() {
    assert!(Rank::Two < Rank::Three);
    assert!(Rank::Ten < Rank::Jack);
    assert!(Rank::King < Rank::Ace);
    assert_eq!(Rank::ALL.iter().max(), Some(&Rank::Ace));
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Ace.value(), 14);
}

#[test]
fn lead_card_rank_picks_the_opening_seat() {
    let expected = [
        (Rank::Ace, 0),
        (Rank::Five, 0),
        (Rank::Nine, 0),
        (Rank::King, 0),
        (Rank::Two, 1),
        (Rank::Six, 1),
        (Rank::Ten, 1),
        (Rank::Three, 2),
        (Rank::Seven, 2),
        (Rank::Jack, 2),
        (Rank::Four, 3),
        (Rank::Eight, 3),
        (Rank::Queen, 3),
    ];
    for (rank, seat) in expected {
        assert_eq!(rank.opening_seat(), seat, "{rank:?}");
    }
}

#[test]
fn legal_plays_match_suit_or_rank() {
    let lead = card("s3");

    let hand = Hand::from_cards(cards("s9 h3 dK"));
    assert_eq!(hand.legal_plays(&lead), cards("s9 h3"));
    assert!(hand.can_follow(&lead));

    let stuck = Hand::from_cards(cards("dK cJ"));
    assert!(stuck.legal_plays(&lead).is_empty());
    assert!(!stuck.can_follow(&lead));
}

#[test]
fn hand_add_remove_and_contains() {
    let mut hand = Hand::new();
    hand.add(card("d4"));
    hand.add(card("c10"));
    assert!(hand.contains(&card("c10")));
    assert_eq!(hand.len(), 2);

    assert_eq!(hand.remove(&card("d4")), Ok(card("d4")));
    assert!(!hand.contains(&card("d4")));
    assert_eq!(hand.remove(&card("d4")), Err(HandError::CardNotInHand));
    assert_eq!(hand.cards(), &[card("c10")]);
}

#[test]
fn highest_card_of_lead_suit_wins() {
    assert_eq!(winning_position(&cards("s3 h5 sK s7")), 2);
    assert_eq!(winning_position(&cards("d5 dA d10 dJ")), 1);
}

#[test]
fn off_suit_cards_never_win() {
    assert_eq!(winning_position(&cards("hQ d2 c9 d5")), 0);
    assert_eq!(winning_position(&cards("c2 hA sA dA")), 0);
}

#[test]
#[should_panic(expected = "a trick is resolved with 1 to 4 plays")]
fn resolving_an_empty_trick_panics() {
    let _ = winning_position(&[]);
}

#[test]
fn trick_winner_maps_position_to_seat() {
    let mut trick = Trick::new();
    for (seat, token) in [(2, "s3"), (3, "h5"), (0, "sK"), (1, "s7")] {
        trick.push(Play::new(seat, card(token)));
    }

    assert_eq!(trick.leader(), Some(2));
    assert_eq!(trick.lead_suit(), Some(Suit::Spades));
    assert_eq!(trick.winner(), Play::new(0, card("sK")));
}

#[test]
#[should_panic(expected = "already played to this trick")]
fn a_seat_plays_once_per_trick() {
    let mut trick = Trick::new();
    trick.push(Play::new(1, card("s3")));
    trick.push(Play::new(1, card("s4")));
}

#[test]
fn commands_parse_from_one_line() {
    assert_eq!("d".parse(), Ok(Command::Draw));
    assert_eq!("s".parse(), Ok(Command::Start));
    assert_eq!("r".parse(), Ok(Command::Reset));
    assert_eq!("x".parse(), Ok(Command::Quit));
    assert_eq!(" s3 \n".parse(), Ok(Command::Play(card("s3"))));
    assert_eq!("c10".parse(), Ok(Command::Play(card("c10"))));

    assert_eq!("".parse::<Command>(), Err(ParseError::UnknownCommand));
    assert_eq!("q".parse::<Command>(), Err(ParseError::InvalidCardToken));
}

#[test]
fn events_describe_themselves() {
    let played = GameEvent::CardPlayed {
        seat: 0,
        card: card("s3"),
    };
    assert_eq!(played.to_string(), "Player1 played s3.");

    let won = GameEvent::TrickWon {
        trick: 4,
        seat: 2,
        card: card("sK"),
    };
    assert_eq!(won.to_string(), "Player3 won trick #4 with the card sK.");
}
