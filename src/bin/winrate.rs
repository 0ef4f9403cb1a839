use std::collections::HashMap;
use std::error::Error;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use unobot::{GameSession, Strategy, create_strategy_from_spec, label_for_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(
    name = "winrate",
    about = "Run multiple games and report per-strategy win rates."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (deck and strategy RNGs are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on rounds per game; games exceeding it are aborted
    #[arg(long = "max-rounds", default_value_t = 5000)]
    max_rounds: u32,

    /// Strategy specs: e.g. heuristic naive (2-10 total, no humans)
    specs: Vec<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.specs.len() < 2 {
        return Err("please provide at least two strategy specs (e.g. heuristic naive)".into());
    }
    // Disallow humans in batch runs; they would block waiting for input.
    if args
        .specs
        .iter()
        .any(|spec| label_for_spec(spec).starts_with("human"))
    {
        return Err("human players are not supported in winrate runs".into());
    }

    let players_per_game = args.specs.len();
    let labels_for_spec: Vec<String> = args.specs.iter().map(|s| label_for_spec(s)).collect();

    let mut wins_per_label: HashMap<String, usize> = HashMap::new();
    let mut seats_per_label: HashMap<String, usize> = HashMap::new();
    let mut total_rounds: u64 = 0;
    let mut aborted_games = 0usize;

    for game_idx in 0..args.games {
        // Permute seating each game for fairness.
        let mut indices: Vec<usize> = (0..players_per_game).collect();
        let mut seat_rng = StdRng::seed_from_u64(args.seed ^ 0x9E37_79B9 ^ (game_idx as u64));
        indices.shuffle(&mut seat_rng);

        let session_seed = mix_seed(args.seed, game_idx as u64, 0x5EED_15);
        let mut session = GameSession::builder(0, players_per_game)?
            .with_seed(session_seed)
            .build()?;

        let mut strategies: Vec<Box<dyn Strategy>> = Vec::with_capacity(players_per_game);
        let mut labels: Vec<String> = Vec::with_capacity(players_per_game);
        for (seat, src_idx) in indices.iter().enumerate() {
            let spec = &args.specs[*src_idx];
            let strategy_seed = mix_seed(args.seed, game_idx as u64, seat as u64);
            strategies.push(create_strategy_from_spec(spec, seat, strategy_seed)?);
            labels.push(labels_for_spec[*src_idx].clone());
        }
        for label in &labels {
            *seats_per_label.entry(label.clone()).or_default() += 1;
        }

        while !session.is_finished() && session.rounds() <= args.max_rounds {
            let current = session.current_player();
            session.play_turn(strategies[current].as_mut())?;
        }

        if let Some(winner) = session.winner() {
            *wins_per_label.entry(labels[winner].clone()).or_default() += 1;
            total_rounds += u64::from(session.rounds());
        } else {
            aborted_games += 1;
        }
    }

    // Per-seat win probability per label, including labels that never won.
    let mut results: Vec<(String, f64, usize, usize)> = Vec::new();
    for (label, &seats) in &seats_per_label {
        let wins = wins_per_label.get(label).copied().unwrap_or(0);
        let rate = if seats > 0 {
            wins as f64 / seats as f64
        } else {
            0.0
        };
        results.push((label.clone(), rate, wins, seats));
    }
    results.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    println!("Win rates (per-seat):");
    for (label, rate, wins, seats) in &results {
        println!("  {label:<12}  {wins}/{seats}  ({:.2}%)", rate * 100.0);
    }
    let finished = args.games.saturating_sub(aborted_games);
    if finished > 0 {
        println!(
            "\nAverage rounds per finished game: {:.1}",
            total_rounds as f64 / finished as f64
        );
    }
    if aborted_games > 0 {
        println!("Note: {aborted_games} game(s) hit the round cap and were aborted.");
    }
    Ok(())
}

fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B9_7F4A_7C15)) ^ (b.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}
