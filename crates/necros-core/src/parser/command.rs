//! Command parsing for player input.

use crate::hidden::hidden_reply;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank input.
    Empty,
    /// One of ELARA's hidden words.
    Secret {
        /// The word as typed.
        word: String,
    },
    /// Show the command table.
    Help,
    /// List the current directory.
    Dir,
    /// Change directory.
    Cd {
        /// Target path, if given.
        path: Option<String>,
    },
    /// Print a file.
    Cat {
        /// File name, if given.
        name: Option<String>,
    },
    /// Run a program.
    Run {
        /// Program name, if given.
        program: Option<String>,
    },
    /// Show the current user.
    Whoami,
    /// Leave the console.
    Exit,
    /// Unrecognized leading token.
    Unknown {
        /// The token as typed.
        token: String,
    },
}

/// Verb synonyms for command parsing.
const HELP_VERBS: &[&str] = &["help", "?"];
const DIR_VERBS: &[&str] = &["dir", "ls"];
const CD_VERBS: &[&str] = &["cd", "chdir"];
const CAT_VERBS: &[&str] = &["cat", "type", "more"];
const RUN_VERBS: &[&str] = &["run", "exec"];
const WHOAMI_VERBS: &[&str] = &["whoami"];
const EXIT_VERBS: &[&str] = &["exit", "quit"];

/// Parse a line of player input into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let token = words[0];
    let verb = token.to_lowercase();
    let arg = argument(&words[1..]);

    if hidden_reply(&verb).is_some() {
        return Command::Secret {
            word: token.to_string(),
        };
    }

    let verb = verb.as_str();
    if HELP_VERBS.contains(&verb) {
        Command::Help
    } else if DIR_VERBS.contains(&verb) {
        Command::Dir
    } else if CD_VERBS.contains(&verb) {
        Command::Cd { path: arg }
    } else if CAT_VERBS.contains(&verb) {
        Command::Cat { name: arg }
    } else if RUN_VERBS.contains(&verb) {
        Command::Run { program: arg }
    } else if WHOAMI_VERBS.contains(&verb) {
        Command::Whoami
    } else if EXIT_VERBS.contains(&verb) {
        Command::Exit
    } else {
        Command::Unknown {
            token: token.to_string(),
        }
    }
}

fn argument(rest: &[&str]) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}
