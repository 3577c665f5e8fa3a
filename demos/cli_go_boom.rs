//! CLI Go Boom example.
//!
//! All four seats are played from one terminal. Quitting saves the match to
//! `saved_game.txt`; the next start offers to resume it.

use std::fs;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use goboom::{Card, Command, Game, GameEvent, MatchOptions, MatchState, SEATS, Suit};

const SAVE_FILE: &str = "saved_game.txt";

fn main() {
    env_logger::init();
    println!("Go Boom CLI example");
    println!("Play a card by its token (s3, dQ, c10), [d]raw, [s]tart, [r]eset, e[x]it.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = MatchOptions::default();
    let mut game = resume_or_new(options, seed);

    loop {
        print_table(game.state());

        if game.is_game_over() {
            println!("Game over! Winner(s): {}", format_seats(&game.winners()));
            let _ = fs::remove_file(SAVE_FILE);
            println!("Type 's' to start a new match or 'x' to exit.");
        }

        let line = prompt_line(&format!("Player{}> ", game.state().current_player() + 1));
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("Input error: {err}. Please try again.");
                continue;
            }
        };

        match game.apply(command) {
            Ok(events) => {
                for event in &events {
                    println!("{event}");
                }
                if events.contains(&GameEvent::Quit) {
                    if !game.is_game_over() {
                        match fs::write(SAVE_FILE, game.save()) {
                            Ok(()) => println!("Game saved."),
                            Err(err) => println!("Could not save the game: {err}"),
                        }
                    }
                    return;
                }
            }
            Err(err) => println!("Action error: {err}. Please try again."),
        }
    }
}

fn resume_or_new(options: MatchOptions, seed: u64) -> Game {
    let Ok(text) = fs::read_to_string(SAVE_FILE) else {
        return Game::new(options, seed);
    };

    let answer = prompt_line("Saved game found. Do you want to resume? (y/n): ");
    if matches!(answer.as_str(), "y" | "yes") {
        match Game::load(options.clone(), seed, &text) {
            Ok(game) => return game,
            Err(err) => println!("{err}. Starting a new game."),
        }
    }
    Game::new(options, seed)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("x");
    }
    input.trim().to_string()
}

fn print_table(state: &MatchState) {
    println!("\n--- Round {} | Trick #{} ---", state.round_number(), state.trick_number());
    println!("Scores: {:?}", state.scores());

    for seat in 0..SEATS {
        let marker = if seat == state.current_player() { "*" } else { " " };
        let hand = state.player(seat).hand();
        println!(
            "{marker} Player{}: {} | tricks {}",
            seat + 1,
            format_cards(hand.cards()),
            state.player(seat).tricks_won()
        );
    }

    let center: Vec<Card> = state.center().cards().collect();
    println!("Center: {}", format_cards(&center));
    println!("Deck: {} cards", state.stock().len());

    let legal = state.legal_plays(state.current_player());
    if legal.is_empty() {
        println!("No legal play: draw with 'd'.");
    } else {
        println!("Legal plays: {}", format_cards(&legal));
    }
}

fn format_seats(seats: &[usize]) -> String {
    seats
        .iter()
        .map(|seat| format!("Player{}", seat + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
