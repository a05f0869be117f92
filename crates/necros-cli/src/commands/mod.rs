pub mod catalog;
pub mod play;
pub mod script;

use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use necros_core::{CommandResult, LineType, NecrosSession, ReadCounting, SessionConfig};
use tracing::{debug, info};

/// Options shared by every command that starts a session.
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Player name ELARA learns
    #[arg(short, long)]
    pub name: Option<String>,

    /// Seed for directory listings
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON session config; flags given here override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Count every read of a diary or e-mail, not just the first
    #[arg(long)]
    pub count_rereads: bool,
}

/// Build the session config from an optional file plus flag overrides.
fn session_config(args: &SessionArgs) -> Result<SessionConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let config = SessionConfig::load(path).map_err(|e| e.to_string())?;
            debug!(path = %path.display(), "loaded session config");
            config
        }
        None => SessionConfig::default(),
    };

    if let Some(name) = &args.name {
        config = config.with_player_name(name.as_str());
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.count_rereads {
        config = config.with_read_counting(ReadCounting::EveryRead);
    }
    Ok(config)
}

/// Start a session from command-line options.
fn start_session(args: &SessionArgs) -> Result<NecrosSession, String> {
    Ok(NecrosSession::new(session_config(args)?))
}

/// Write the session transcript if a path was given.
fn save_transcript(session: &NecrosSession, path: Option<&Path>) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };
    session
        .transcript()
        .save(path)
        .map_err(|e| e.to_string())?;
    info!(path = %path.display(), entries = session.transcript().len(), "transcript saved");
    Ok(())
}

/// Print a result the way the console shows it.
fn print_result(session: &NecrosSession, result: &CommandResult) {
    for line in &result.lines {
        let styled = match result.line_type {
            LineType::System => line.green(),
            LineType::Narrator => line.cyan().bold(),
            LineType::Error => line.red(),
        };
        println!("{styled}");
    }

    if !result.effects.is_empty() {
        let tags: Vec<&str> = result.effects.iter().map(|e| e.tag()).collect();
        println!("{}", format!("[effects: {}]", tags.join(", ")).dimmed());
    }
    if let Some(audio) = &result.audio {
        let path = session.audio_path(audio);
        println!("{}", format!("[audio: {}]", path.display()).dimmed());
    }
    if let Some(commentary) = &result.commentary {
        println!("{} {}", "ELARA:".magenta().bold(), commentary.text.magenta().italic());
        if let Some(voice) = &commentary.audio {
            let path = session.audio_path(voice);
            println!("{}", format!("[voice: {}]", path.display()).dimmed());
        }
    }
    if let Some(phase) = result.phase_change {
        println!("{}", format!("[phase: {}]", phase.title()).yellow());
    }
}
