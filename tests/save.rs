//! Save format tests.

use goboom::{
    Card, Command, CorruptSave, DECK_SIZE, Deck, Game, GameState, MatchOptions, MatchState,
    SEATS,
};

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

/// Builds a round-1 save with every unlisted card among the discards.
fn round_save(
    current: usize,
    hands: [&str; SEATS],
    center: &str,
    seats: &str,
    stock: &str,
) -> String {
    let listed: Vec<Card> = hands
        .iter()
        .chain([&center, &stock])
        .flat_map(|line| line.split_whitespace().map(card))
        .collect();
    let discards: Vec<String> = Deck::standard()
        .cards()
        .iter()
        .filter(|card| !listed.contains(card))
        .map(ToString::to_string)
        .collect();

    format!(
        "{current}\n2\n{}\n{}\n{}\n{}\n{center}\n0 0 0 0\n1\n{seats}\n0 0 0 0\n{stock}\n{}\n",
        hands[0],
        hands[1],
        hands[2],
        hands[3],
        discards.join(" ")
    )
}

fn play_some(game: &mut Game, actions: usize) {
    for _ in 0..actions {
        let state = game.state();
        let seat = state.current_player();
        let command = state
            .legal_plays(seat)
            .first()
            .map_or(Command::Draw, |&card| Command::Play(card));
        game.apply(command).unwrap();
    }
}

#[test]
fn mid_game_state_round_trips() {
    for seed in [1, 17, 99] {
        let mut game = Game::new(MatchOptions::default(), seed);
        play_some(&mut game, 15);
        assert!(!game.state().discards().is_empty() || !game.state().center().is_empty());

        let original = game.snapshot();
        let text = game.save();
        let loaded = MatchState::load(&text).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.save(), text);
    }
}

#[test]
fn loaded_game_continues_like_the_original() {
    let mut game = Game::new(MatchOptions::default(), 23);
    play_some(&mut game, 9);

    let mut resumed = Game::load(MatchOptions::default(), 0, &game.save()).unwrap();
    play_some(&mut game, 6);
    play_some(&mut resumed, 6);
    assert_eq!(resumed.state(), game.state());
}

#[test]
fn first_eight_lines_follow_the_classic_layout() {
    let game = Game::new(MatchOptions::default(), 4);
    let state = game.state();
    let text = game.save();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], state.current_player().to_string());
    assert_eq!(lines[1], "1");
    for seat in 0..SEATS {
        assert_eq!(lines[2 + seat].split_whitespace().count(), 7);
    }
    assert_eq!(lines[6], state.lead_card().unwrap().to_string());
    assert_eq!(lines[7], "0 0 0 0");
    assert_eq!(lines[8], "1");
}

#[test]
fn classic_save_restores_the_stock() {
    // Written the way the console game wrote it, with trailing spaces.
    let text = "2\n4\ns9 h3 \ndK cJ c2 \n\nd4 \ns3 hQ \n3 0 1 0 \n";
    let state = MatchState::load(text).unwrap();

    assert_eq!(state.current_player(), 2);
    assert_eq!(state.trick_number(), 4);
    assert_eq!(state.round_number(), 1);
    assert_eq!(state.phase(), GameState::AwaitingPlay(2));
    assert!(state.player(2).hand().is_empty());
    assert_eq!(state.scores(), [3, 0, 1, 0]);
    assert_eq!(state.player(0).tricks_won(), 3);

    let seats: Vec<usize> = state.center().plays().iter().map(|p| p.seat).collect();
    assert_eq!(seats, vec![0, 1]);
    assert_eq!(state.stock().len(), DECK_SIZE - 8);
    assert_eq!(state.stock().peek(), Some(&card("sA")));
    assert!(state.discards().is_empty());
    assert!(state.is_consistent());
}

#[test]
fn missing_lines_are_rejected() {
    assert_eq!(MatchState::load(""), Err(CorruptSave::MissingLine(1)));
    assert_eq!(
        MatchState::load("0\n1\ns9\nh3\ndK\ncJ\ns3\n"),
        Err(CorruptSave::MissingLine(8))
    );

    let game = Game::new(MatchOptions::default(), 6);
    let truncated: String = game
        .save()
        .lines()
        .take(10)
        .map(|line| format!("{line}\n"))
        .collect();
    assert_eq!(
        MatchState::load(&truncated),
        Err(CorruptSave::MissingLine(11))
    );
}

#[test]
fn bad_tokens_are_rejected() {
    assert_eq!(
        MatchState::load("0\n1\ns9 x7\nh3\ndK\ncJ\ns3\n0 0 0 0\n"),
        Err(CorruptSave::BadToken(3))
    );
    assert_eq!(
        MatchState::load("zero\n1\ns9\nh3\ndK\ncJ\ns3\n0 0 0 0\n"),
        Err(CorruptSave::BadToken(1))
    );
    assert_eq!(
        MatchState::load("0\n1\ns9\nh3\ndK\ncJ\ns3\n0 0 -1 0\n"),
        Err(CorruptSave::BadToken(8))
    );
}

#[test]
fn wrong_field_counts_are_rejected() {
    assert_eq!(
        MatchState::load("0\n1\ns9\nh3\ndK\ncJ\ns3\n0 0 0\n"),
        Err(CorruptSave::FieldCount(8))
    );
    assert_eq!(
        MatchState::load("0 1\n1\ns9\nh3\ndK\ncJ\ns3\n0 0 0 0\n"),
        Err(CorruptSave::FieldCount(1))
    );
    assert_eq!(
        MatchState::load("0\n1\ns9\nh3\ndK\ncJ\ns3 s4 s5 s6\n0 0 0 0\n"),
        Err(CorruptSave::FieldCount(7))
    );
}

#[test]
fn out_of_range_values_are_rejected() {
    assert_eq!(
        MatchState::load("4\n1\ns9\nh3\ndK\ncJ\ns3\n0 0 0 0\n"),
        Err(CorruptSave::OutOfRange(1))
    );
    assert_eq!(
        MatchState::load("0\n0\ns9\nh3\ndK\ncJ\ns3\n0 0 0 0\n"),
        Err(CorruptSave::OutOfRange(2))
    );

    let game = Game::new(MatchOptions::default(), 6);
    let current = game.state().current_player().to_string();
    let text = game.save();
    let mut lines: Vec<&str> = text.lines().collect();
    lines[9] = &current;
    let edited = lines.join("\n") + "\n";
    assert_eq!(
        MatchState::load(&edited),
        Err(CorruptSave::OutOfRange(10))
    );
}

#[test]
fn duplicated_cards_are_rejected() {
    assert_eq!(
        MatchState::load("0\n1\ns9 h3\nh3\ndK\ncJ\ns3\n0 0 0 0\n"),
        Err(CorruptSave::InconsistentCards)
    );

    let game = Game::new(MatchOptions::default(), 6);
    let text = game.save();
    let mut lines: Vec<&str> = text.lines().collect();
    lines[12] = "sA";
    let edited = lines.join("\n") + "\n";
    assert_eq!(
        MatchState::load(&edited),
        Err(CorruptSave::InconsistentCards)
    );
}

#[test]
fn corrupt_save_leaves_room_for_a_fresh_game() {
    let loaded = Game::load(MatchOptions::default(), 3, "garbage");
    assert!(loaded.is_err());

    let fresh = Game::new(MatchOptions::default(), 3);
    assert!(fresh.state().is_consistent());
}

#[test]
fn center_seats_must_run_clockwise_up_to_the_current_seat() {
    let hands = ["c5", "s5", "s7 d2", "c9"];

    let skipped_ahead = round_save(1, hands, "s3 s4", "0 2", "hA");
    assert_eq!(
        MatchState::load(&skipped_ahead),
        Err(CorruptSave::OutOfRange(10))
    );

    let missing_seat = round_save(2, hands, "s3", "0", "hA");
    assert_eq!(
        MatchState::load(&missing_seat),
        Err(CorruptSave::OutOfRange(10))
    );
}

#[test]
fn a_passed_seat_needs_an_empty_stock_and_no_legal_play() {
    let passed = round_save(2, ["c5", "d4", "s7 d2", "c9"], "s3", "0", "");
    let state = MatchState::load(&passed).unwrap();
    assert_eq!(state.center().leader(), Some(0));
    assert_eq!(state.current_player(), 2);

    let could_follow = round_save(2, ["c5", "s9", "s7 d2", "c9"], "s3", "0", "");
    assert_eq!(
        MatchState::load(&could_follow),
        Err(CorruptSave::OutOfRange(10))
    );
}

#[test]
fn finished_round_is_rejected() {
    let emptied = round_save(0, ["", "", "", ""], "", "", "");
    assert_eq!(MatchState::load(&emptied), Err(CorruptSave::RoundOver));

    let one_empty = round_save(1, ["", "d4", "s7", "c9"], "", "", "hA");
    assert_eq!(MatchState::load(&one_empty), Err(CorruptSave::RoundOver));
}

#[test]
fn counters_beyond_one_round_are_rejected() {
    assert_eq!(
        MatchState::load("0\n4294967295\ns9\nh3\ndK\ncJ\ns3\n0 0 0 0\n"),
        Err(CorruptSave::OutOfRange(2))
    );
    assert_eq!(
        MatchState::load("0\n53\ns9\nh3\ndK\ncJ\ns3\n0 0 0 0\n"),
        Err(CorruptSave::OutOfRange(2))
    );

    let game = Game::new(MatchOptions::default(), 6);
    let text = game.save();
    let mut lines: Vec<&str> = text.lines().collect();
    lines[10] = "53 0 0 0";
    let edited = lines.join("\n") + "\n";
    assert_eq!(
        MatchState::load(&edited),
        Err(CorruptSave::OutOfRange(11))
    );
}
