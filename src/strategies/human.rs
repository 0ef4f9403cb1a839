use std::io::{self, Write};

use crate::action::{Combine, TurnAction};
use crate::card::{CardId, Color};
use crate::state::GameStateView;
use crate::strategy::Strategy;
use crate::visualize::{format_card, render_state};

/// Interactive strategy that queries a human via standard input. The
/// blocking read is the decision boundary: the engine's state transition
/// runs synchronously once input arrives.
pub struct HumanStrategy {
    name: String,
}

impl HumanStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanStrategy {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Strategy for HumanStrategy {
    fn choose_turn(&mut self, view: &GameStateView, legal_cards: &[CardId]) -> TurnAction {
        loop {
            println!(
                "\n=== {}'s turn (player {}) ===",
                self.name, view.self_player
            );
            println!("{}", render_state(view));
            if legal_cards.is_empty() {
                println!("No single card in your hand is playable.");
            } else {
                println!("Playable cards:");
                for (index, &card) in legal_cards.iter().enumerate() {
                    println!("  [{index}] {}", format_card(card));
                }
            }
            println!("Commands: play <n> | pair <i> <j> add|sub | draw | skip | q");
            print!("Selection: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            match tokens.as_slice() {
                ["draw"] | ["d"] => return TurnAction::DrawAndPlay,
                ["skip"] | ["s"] => return TurnAction::Skip,
                ["play", index] | [index] => {
                    let Ok(choice) = index.parse::<usize>() else {
                        println!("Invalid input: '{trimmed}'.");
                        continue;
                    };
                    if let Some(&card) = legal_cards.get(choice) {
                        return TurnAction::PlayOwned(card);
                    }
                    println!("Index out of range. Please choose a listed card.");
                }
                ["pair", first, second, mode] => {
                    let (Ok(i), Ok(j)) = (first.parse::<usize>(), second.parse::<usize>()) else {
                        println!("Pair indices must be numbers (positions in your hand).");
                        continue;
                    };
                    let combine = match *mode {
                        "add" => Combine::Add,
                        "sub" => Combine::Sub,
                        _ => {
                            println!("Pair mode must be 'add' or 'sub'.");
                            continue;
                        }
                    };
                    let (Some(&a), Some(&b)) = (view.hand.get(i), view.hand.get(j)) else {
                        println!("Hand index out of range.");
                        continue;
                    };
                    if i == j {
                        println!("Pick two different cards.");
                        continue;
                    }
                    return TurnAction::PlayPair {
                        first: a,
                        second: b,
                        combine,
                    };
                }
                _ => println!("Unrecognized command: '{trimmed}'."),
            }
        }
    }

    fn declare_color(&mut self, _view: &GameStateView) -> Color {
        loop {
            print!("Declare a color (red/green/blue/yellow): ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            match input.trim().to_ascii_lowercase().as_str() {
                "red" | "r" => return Color::Red,
                "green" | "g" => return Color::Green,
                "blue" | "b" => return Color::Blue,
                "yellow" | "y" => return Color::Yellow,
                other => println!("Unrecognized color: '{other}'."),
            }
        }
    }
}
