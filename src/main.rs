use clap::{Parser, Subcommand};
use lasergrid::puzzle::PuzzleDefinition;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Puzzle JSON file. The built-in starter board is used when omitted.
    #[arg(global = true, short, long)]
    puzzle: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Trace every clue and report which ones match.
    Check(cmd::check::CheckArgs),
    /// Recover the hidden clues from a solved board.
    Reveal(cmd::reveal::RevealArgs),
    /// Write a random puzzle with a known solution.
    Generate(cmd::generate::GenerateArgs),
}

fn load_puzzle(path: &Option<String>) -> PuzzleDefinition {
    match path {
        Some(p) => {
            info!("📂 Loading Puzzle: {}", p);
            PuzzleDefinition::load_from_file(p).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => {
            info!("📂 No puzzle given. Using the built-in starter board.");
            PuzzleDefinition::starter()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => {
            let def = load_puzzle(&cli.puzzle);
            cmd::check::run(args, &def).map(|solved| if solved { 0 } else { 2 })
        }
        Commands::Reveal(args) => {
            let def = load_puzzle(&cli.puzzle);
            cmd::reveal::run(args, &def).map(|_| 0)
        }
        Commands::Generate(args) => cmd::generate::run(args).map(|_| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
