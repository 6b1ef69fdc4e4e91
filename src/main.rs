//! Mastermind - CLI
//!
//! Code-breaking game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{analyze_secrets, run_simple, score_guess},
    core::DEFAULT_PALETTE_SIZE,
    game::{DEFAULT_MAX_ROUNDS, DEFAULT_SECRET_LENGTH, GameConfig},
    output::{print_analysis_result, print_score_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the hidden colour code using exact / misplaced pin feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in the secret code
    #[arg(short, long, global = true, default_value_t = DEFAULT_SECRET_LENGTH)]
    length: usize,

    /// Number of guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Number of colours in the palette (2-8)
    #[arg(short, long, global = true, default_value_t = DEFAULT_PALETTE_SIZE)]
    colors: usize,

    /// Seed for a reproducible secret (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against a known secret
    Score {
        /// The secret code as labels, e.g. RVAM
        secret: String,

        /// The guess as labels, e.g. VRAR
        guess: String,
    },

    /// Draw many secrets and report how evenly colours are used
    Analyze {
        /// Number of secrets to draw
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,
    },
}

/// Install the tracing subscriber on stderr; `RUST_LOG` overrides the level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig::standard(cli.colors, cli.length, cli.rounds)
        .context("invalid game settings")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, cli.seed),
        Commands::Simple => {
            let mut rng = build_rng(cli.seed);
            run_simple(&config, &mut rng)
        }
        Commands::Score { secret, guess } => run_score_command(&config, &secret, &guess),
        Commands::Analyze { count } => run_analyze_command(&config, count, cli.seed),
    }
}

fn run_score_command(config: &GameConfig, secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(&config.palette, secret, guess)?;
    print_score_result(&result, &config.palette);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, count: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Drawing {count} secrets of length {}...", config.secret_length);

    let result = analyze_secrets(&config.palette, config.secret_length, count, seed, true)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_play_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config, build_rng(seed))?;
    run_tui(app)
}
