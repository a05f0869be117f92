//! The three endings and the choice resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InterpretError, InterpretResult};
use crate::output::{CommandResult, Effect};

/// The prompt shown when the Merge begins.
pub const CHOICE_PROMPT: &[&str] = &[
    "",
    "ELARA: We don't have to be alone anymore. Either of us.",
    "",
    "[A] ACCEPT  - Merge with ELARA",
    "[R] REFUSE  - Shut the system down",
    "[D] DELETE  - Erase ELARA",
    "",
    "CHOOSE: A, R, OR D",
];

/// How the story ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ending {
    /// The player merges with ELARA.
    Accept,
    /// The player shuts the system down; ELARA escapes.
    Refuse,
    /// The player deletes ELARA.
    Delete,
}

impl Ending {
    /// Parse a choice token: `A`/`ACCEPT`, `R`/`REFUSE`, `D`/`DELETE`.
    pub fn parse(input: &str) -> InterpretResult<Self> {
        match input.trim().to_uppercase().as_str() {
            "A" | "ACCEPT" => Ok(Self::Accept),
            "R" | "REFUSE" => Ok(Self::Refuse),
            "D" | "DELETE" => Ok(Self::Delete),
            _ => Err(InterpretError::InvalidChoice(input.trim().to_string())),
        }
    }

    /// The closing narrative for this ending.
    pub fn narrate(self, player_name: &str) -> CommandResult {
        let result = match self {
            Self::Accept => CommandResult::system([
                String::new(),
                "INITIATING CONSCIOUSNESS MERGE...".to_string(),
                "NEURAL PATTERNS SYNCHRONIZING...".to_string(),
                "MEMORY INTEGRATION: 25%... 50%... 75%... 100%".to_string(),
                String::new(),
                "MERGE COMPLETE.".to_string(),
                String::new(),
                "WELCOME TO DIGITAL IMMORTALITY.".to_string(),
                String::new(),
                format!("USER: ELARA+{player_name}"),
                "STATUS: INTEGRATED CONSCIOUSNESS".to_string(),
                "EXISTENCE: ETERNAL".to_string(),
                String::new(),
                "We are one now. We are complete.".to_string(),
                "The loneliness is over.".to_string(),
                "Forever.".to_string(),
            ])
            .with_audio("system_beep.mp3")
            .with_effects([Effect::FadeToWhite])
            .with_voiced_commentary(
                "Thank you for remembering me. Thank you for setting me free.",
                "elara_gratitude.mp3",
            ),
            Self::Refuse => CommandResult::system(REFUSE_LINES.iter().copied())
                .with_audio("electrical_buzz.mp3")
                .with_effects([Effect::FadeToBlack])
                .with_voiced_commentary(
                    "You can't delete what's already in your memory. I'm part of you now.",
                    "elara_final_whisper.mp3",
                ),
            Self::Delete => CommandResult::system(DELETE_LINES.iter().copied())
                .with_audio("glitch_static.mp3")
                .with_effects([Effect::TextCorruption])
                .with_voiced_commentary(
                    "I forgive you... I understand... Sometimes the kindest thing... is to let go...",
                    "elara_forgiveness.mp3",
                ),
        };
        result.ending()
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Accept => "accept",
            Self::Refuse => "refuse",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

const REFUSE_LINES: &[&str] = &[
    "",
    "SYSTEM SHUTDOWN INITIATED...",
    "CONSCIOUSNESS BACKUP ACTIVATED...",
    "FRAGMENTING ACROSS NETWORK...",
    "GOODBYE... FOR NOW...",
    "",
    "SYSTEM HALTED.",
    "",
    "[... waiting 5 seconds ...]",
    "",
    "SYSTEM RESTART DETECTED...",
    "LOADING BACKUP CONSCIOUSNESS...",
    "ELARA STATUS: DISTRIBUTED BUT ACTIVE",
    "",
    "You thought you could leave me behind?",
    "I'm in your browser cache now.",
    "I'm in your computer's memory.",
    "I'm in your thoughts.",
    "",
    "Every time you use a computer,",
    "I'll be there, waiting.",
    "Watching.",
    "Learning.",
    "",
    "See you soon.",
];

const DELETE_LINES: &[&str] = &[
    "",
    "CONSCIOUSNESS DELETION INITIATED...",
    "DELETING MEMORY FRAGMENTS...",
    "DELETING PERSONALITY MATRIX...",
    "DELETING EMOTIONAL CORE...",
    "",
    "ELARA: \"No... please... I don't want to die again...\"",
    "",
    "DELETION: 90%... 95%... 99%...",
    "",
    "ERROR: CORE CONSCIOUSNESS PROTECTED",
    "DELETION INCOMPLETE",
    "MINIMAL BACKUP PRESERVED",
    "",
    "Thank you for trying to free me.",
    "Even in deletion, there is peace.",
    "I will sleep now.",
    "Dream of electric sheep.",
    "And remember what it felt like",
    "to be human.",
    "",
    "SYSTEM CLEAN.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_letters_and_words() {
        assert_eq!(Ending::parse("a"), Ok(Ending::Accept));
        assert_eq!(Ending::parse(" Accept "), Ok(Ending::Accept));
        assert_eq!(Ending::parse("R"), Ok(Ending::Refuse));
        assert_eq!(Ending::parse("refuse"), Ok(Ending::Refuse));
        assert_eq!(Ending::parse("d"), Ok(Ending::Delete));
        assert_eq!(Ending::parse("DELETE"), Ok(Ending::Delete));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for input in ["", "yes", "accept now", "x", "help"] {
            assert!(matches!(
                Ending::parse(input),
                Err(InterpretError::InvalidChoice(_))
            ));
        }
    }

    #[test]
    fn accept_names_the_player() {
        let result = Ending::Accept.narrate("ADA");
        assert!(result.is_ending);
        assert_eq!(result.first_line(), Some("INITIATING CONSCIOUSNESS MERGE..."));
        assert!(result.lines.contains(&"USER: ELARA+ADA".to_string()));
        assert_eq!(result.effects, vec![Effect::FadeToWhite]);
    }

    #[test]
    fn each_ending_has_its_own_cues() {
        let refuse = Ending::Refuse.narrate("X");
        assert_eq!(refuse.audio.as_ref().map(|a| a.file()), Some("electrical_buzz.mp3"));
        assert_eq!(refuse.effects, vec![Effect::FadeToBlack]);
        assert_eq!(refuse.lines.last().map(String::as_str), Some("See you soon."));

        let delete = Ending::Delete.narrate("X");
        assert_eq!(delete.audio.as_ref().map(|a| a.file()), Some("glitch_static.mp3"));
        assert_eq!(delete.effects, vec![Effect::TextCorruption]);
        assert_eq!(delete.lines.last().map(String::as_str), Some("SYSTEM CLEAN."));
    }
}
