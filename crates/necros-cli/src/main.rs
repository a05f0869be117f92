//! Terminal front end for NecrOS.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::SessionArgs;

#[derive(Parser)]
#[command(
    name = "necros",
    about = "NecrOS: a 1984 console with someone still inside",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log interpreter decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Play {
        #[command(flatten)]
        session: SessionArgs,

        /// Write a transcript on exit (.json for JSON, anything else for Markdown)
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Feed commands from a file, one per line
    Script {
        /// File of commands; lines starting with '#' are skipped
        file: PathBuf,

        /// Print results and final state as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        session: SessionArgs,

        /// Write a transcript when the script finishes
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// List every document on the disk
    Catalog {
        /// Only show files visible in this phase (boot, recovery, glitch, merge, ending)
        #[arg(short, long)]
        phase: Option<String>,
    },
}

/// Route `tracing` output to stderr so stdout stays the console.
///
/// `NECROS_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "necros_core=debug,info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NECROS_LOG").unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            session,
            transcript,
        } => commands::play::run(&session, transcript.as_deref()),
        Commands::Script {
            file,
            json,
            session,
            transcript,
        } => commands::script::run(&file, json, &session, transcript.as_deref()),
        Commands::Catalog { phase } => commands::catalog::run(phase.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
