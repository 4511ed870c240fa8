use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{init_logging, print_board, Board, BoardState, Orientation, Ship};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place the standard fleet at random and print the board.
    Generate {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the board state as JSON instead of a grid")]
        json: bool,
    },
    /// Generate a board, then check whether one more ship fits at a cell.
    Check {
        #[arg(long)]
        length: usize,
        #[arg(long)]
        x: i32,
        #[arg(long)]
        y: i32,
        #[arg(long)]
        vertical: bool,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn seeded_rng(seed: Option<u64>) -> (u64, SmallRng) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (seed, SmallRng::seed_from_u64(seed))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { seed, json } => {
            let (seed, mut rng) = seeded_rng(seed);
            let mut board = Board::new();
            let outcome = board.generate_random_fleet(&mut rng);
            if !outcome.is_complete() {
                eprintln!(
                    "warning: only {} of {} ships could be placed",
                    outcome.placed(),
                    outcome.requested()
                );
            }
            if json {
                let state = BoardState::from(&board);
                println!(
                    "{}",
                    serde_json::to_string(&state).context("serializing board state")?
                );
            } else {
                println!("Seed: {}", seed);
                print_board(&board);
                println!("Ships placed: {}/{}", outcome.placed(), outcome.requested());
            }
        }
        Commands::Check {
            length,
            x,
            y,
            vertical,
            seed,
        } => {
            let (seed, mut rng) = seeded_rng(seed);
            let mut board = Board::new();
            board.generate_random_fleet(&mut rng);
            let orientation = if vertical {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let ship = Ship::with_orientation(length, orientation)?;
            println!("Seed: {}", seed);
            print_board(&board);
            if board.can_place(&ship, x, y) {
                println!("A ship of length {} fits at ({}, {})", length, x, y);
            } else {
                println!("A ship of length {} does not fit at ({}, {})", length, x, y);
            }
        }
    }
    Ok(())
}
