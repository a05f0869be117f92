use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use super::SessionArgs;

pub fn run(args: &SessionArgs, transcript: Option<&Path>) -> Result<(), String> {
    let mut session = super::start_session(args)?;

    super::print_result(&session, &session.welcome());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", session.prompt());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let result = session.submit(input);
        super::print_result(&session, &result);
        println!();

        if result.is_exit || result.is_ending {
            break;
        }
    }

    if session.is_over() {
        println!("{}", "[session ended]".dimmed());
    }
    super::save_transcript(&session, transcript)
}
