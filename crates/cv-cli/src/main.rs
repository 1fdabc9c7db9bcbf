//! Command-line frontend for the cavern adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cavern",
    about = "Play the 1977 cave adventure, or inspect its data tables",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game on stdin and stdout
    Play {
        /// Seed for the dice (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the instructions question
        #[arg(long)]
        no_instructions: bool,

        /// Data file to load instead of the built-in tables
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Validate a data file and report diagnostics
    Check {
        /// Data file to check (default: the built-in tables)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// List the vocabulary
    Vocab {
        /// Filter by word class (motion, object, verb, special)
        class: Option<String>,

        /// Data file to load instead of the built-in tables
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Show a room with its texts and exits
    Show {
        /// Room number
        room: u16,

        /// Data file to load instead of the built-in tables
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Export the loaded tables as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Data file to load instead of the built-in tables
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        no_instructions: false,
        data: None,
    });

    let result = match command {
        Commands::Play {
            seed,
            no_instructions,
            data,
        } => commands::play::run(data.as_deref(), seed, !no_instructions),
        Commands::Check { data } => commands::check::run(data.as_deref()),
        Commands::Vocab { class, data } => commands::vocab::run(data.as_deref(), class.as_deref()),
        Commands::Show { room, data } => commands::show::run(data.as_deref(), room),
        Commands::Export { output, data } => {
            commands::export::run(data.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
