//! CLI frontend for the Rampart engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rampart",
    about = "Rampart — a data-driven game engine core",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load all .ini files and report the first configuration error
    Check {
        /// Directory containing .ini files (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List loaded templates
    List {
        /// Filter by template kind: objects, weapons, armors, fx
        kind: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Directory containing .ini files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show one object template in detail, module slots included
    Show {
        /// Template name (case-insensitive)
        name: String,

        /// Directory containing .ini files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Run a simulation and print its event log and final state CRC
    Run {
        /// Number of frames to simulate (30 frames = one second)
        #[arg(short, long, default_value = "300")]
        frames: u32,

        /// RNG seed for deterministic runs
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Template to spawn; repeatable (default: every object template once)
        #[arg(long = "spawn")]
        spawn: Vec<String>,

        /// Directory containing .ini files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { dir } => commands::check::run(&dir),
        Commands::List { kind, json, dir } => commands::list::run(&dir, kind.as_deref(), json),
        Commands::Show { name, dir } => commands::show::run(&dir, &name),
        Commands::Run {
            frames,
            seed,
            spawn,
            dir,
        } => commands::run::run(&dir, frames, seed, &spawn),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
