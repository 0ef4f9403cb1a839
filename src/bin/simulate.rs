use std::error::Error;
use std::process;

use clap::Parser;

use unobot::{
    GameSession, Strategy, TurnOutcome, create_strategy_from_spec, label_for_spec, render_state,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play one UNO game with mixed human and AI seats."
)]
struct Args {
    /// Seed for shuffling and AI randomness
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on rounds; the game is stopped once exceeded
    #[arg(long = "max-rounds", default_value_t = 5000)]
    max_rounds: u32,

    /// Show the game state before every turn
    #[arg(long = "visualize")]
    visualize: bool,

    /// Player specs (2-10 total): human[:name] | naive[:seed] | heuristic.
    /// Defaults to one human and one heuristic seat.
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
    let mut specs = args.specs;
    if specs.is_empty() {
        specs = vec![String::from("human"), String::from("heuristic")];
    }

    let (human_specs, ai_specs): (Vec<String>, Vec<String>) = specs
        .iter()
        .cloned()
        .partition(|spec| label_for_spec(spec).starts_with("human"));

    let mut session = GameSession::builder(human_specs.len(), ai_specs.len())?
        .with_seed(args.seed)
        .build()?;
    let total = session.settings().total_players();

    // Seat order was shuffled by the session; hand out strategies so that
    // human specs land on human seats and AI specs on AI seats, in order.
    let mut humans = human_specs.iter();
    let mut ais = ai_specs.iter();
    let mut strategies: Vec<Box<dyn Strategy>> = Vec::with_capacity(total);
    for seat in 0..total {
        let spec = if session.is_human(seat)? {
            humans.next().expect("human spec count matches seats")
        } else {
            ais.next().expect("ai spec count matches seats")
        };
        strategies.push(create_strategy_from_spec(spec, seat, args.seed)?);
    }

    println!("Starting UNO game with {total} players.\n");
    while !session.is_finished() {
        if session.rounds() > args.max_rounds {
            println!("Round limit {} reached. Stopping game.", args.max_rounds);
            break;
        }
        let current = session.current_player();
        if args.visualize {
            let view = session.state_view(current)?;
            println!("{}", render_state(&view));
        }
        let outcome = session.play_turn(strategies[current].as_mut())?;
        if matches!(outcome, TurnOutcome::Rejected) {
            println!("Player {current}: that play is not legal, choose again.");
        }
    }

    if let Some(winner) = session.winner() {
        println!(
            "Game finished after {} rounds. Winner: Player {winner}.",
            session.rounds()
        );
    } else {
        println!("Game stopped before completion.");
    }
    Ok(())
}
