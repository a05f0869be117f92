use std::path::Path;

use colored::Colorize;
use necros_core::{CommandResult, SessionState};
use serde::Serialize;

use super::SessionArgs;

#[derive(Serialize)]
struct Step<'a> {
    input: &'a str,
    result: CommandResult,
}

#[derive(Serialize)]
struct Report<'a> {
    steps: Vec<Step<'a>>,
    state: &'a SessionState,
}

pub fn run(
    file: &Path,
    json: bool,
    args: &SessionArgs,
    transcript: Option<&Path>,
) -> Result<(), String> {
    let source = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let mut session = super::start_session(args)?;

    let mut steps = Vec::new();
    for input in source.lines().map(str::trim) {
        if input.is_empty() || input.starts_with('#') {
            continue;
        }

        if !json {
            println!("{}{input}", session.prompt().dimmed());
        }
        let result = session.submit(input);
        if !json {
            super::print_result(&session, &result);
            println!();
        }

        let exit = result.is_exit;
        steps.push(Step { input, result });
        if exit {
            break;
        }
    }

    if json {
        let report = Report {
            steps,
            state: session.state(),
        };
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        let state = session.state();
        println!(
            "  Phase: {} | Commands: {} | Personality: {}",
            state.phase().title().bold(),
            state.command_count(),
            state.ai_personality_level()
        );
    }

    super::save_transcript(&session, transcript)
}
