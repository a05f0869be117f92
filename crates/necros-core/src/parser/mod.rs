//! Command parsing and name resolution.

mod command;
mod resolver;

pub use command::{Command, parse_command};
pub use resolver::{FUZZY_THRESHOLD, suggest_file};
