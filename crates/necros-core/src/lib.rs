//! Command interpreter and narrative state machine for NecrOS.
//!
//! NecrOS is a scripted piece of interactive fiction presented as a 1984
//! operating-system console. The player types commands, reads diaries and
//! e-mails left behind by Dr. Elara Myles, and watches the AI built from her
//! mind wake up over four phases before choosing one of three endings.
//!
//! This crate holds everything except presentation: the fixed content
//! catalogue, command parsing, session state, phase progression, the ending
//! resolver, and the [`CommandResult`] contract a renderer consumes.

/// Audio cue routing.
pub mod audio;
/// Session configuration.
pub mod config;
/// Fixed narrative content: documents and the directory tree.
pub mod content;
/// The three endings and the choice resolver.
pub mod ending;
/// Error types for the interpreter.
pub mod error;
/// Easter-egg commands.
pub mod hidden;
/// Command results and presentation tags.
pub mod output;
/// Command parsing and name resolution.
pub mod parser;
/// Narrative phases.
pub mod phase;
/// Phase-progression rules.
pub mod progression;
/// Interactive session management.
pub mod session;
/// Mutable per-session story state.
pub mod state;
/// Session transcript.
pub mod transcript;

pub use audio::{AudioCue, AudioKind};
pub use config::{ConfigError, ReadCounting, SessionConfig};
pub use ending::Ending;
pub use error::{InterpretError, InterpretResult};
pub use output::{CommandResult, Commentary, Effect, LineType};
pub use parser::{Command, parse_command};
pub use phase::Phase;
pub use session::NecrosSession;
pub use state::SessionState;
pub use transcript::{Transcript, TranscriptError};
