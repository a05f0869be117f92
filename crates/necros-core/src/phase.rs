//! Narrative phases.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A narrative phase. Phases are ordered and only ever advance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// ELARA wakes up confused.
    #[default]
    Boot,
    /// ELARA starts remembering who she was.
    Recovery,
    /// ELARA starts watching the player.
    Glitch,
    /// ELARA offers to merge; the ending choice is pending.
    Merge,
    /// An ending has been chosen.
    Ending,
}

impl Phase {
    /// All phases in story order.
    pub const ALL: [Phase; 5] = [
        Phase::Boot,
        Phase::Recovery,
        Phase::Glitch,
        Phase::Merge,
        Phase::Ending,
    ];

    /// The phase that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Boot => Some(Self::Recovery),
            Self::Recovery => Some(Self::Glitch),
            Self::Glitch => Some(Self::Merge),
            Self::Merge => Some(Self::Ending),
            Self::Ending => None,
        }
    }

    /// Display title used in status lines.
    pub fn title(self) -> &'static str {
        match self {
            Self::Boot => "Boot Sequence",
            Self::Recovery => "System Recovery",
            Self::Glitch => "The Glitch",
            Self::Merge => "The Merge",
            Self::Ending => "Ending",
        }
    }

    /// Whether `exit`/`quit` is refused in this phase.
    pub fn holds_player(self) -> bool {
        matches!(self, Self::Glitch | Self::Merge)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boot => "boot",
            Self::Recovery => "recovery",
            Self::Glitch => "glitch",
            Self::Merge => "merge",
            Self::Ending => "ending",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_ordered() {
        for pair in Phase::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
        assert_eq!(Phase::Ending.next(), None);
    }

    #[test]
    fn only_glitch_and_merge_hold_player() {
        let held: Vec<_> = Phase::ALL.into_iter().filter(|p| p.holds_player()).collect();
        assert_eq!(held, vec![Phase::Glitch, Phase::Merge]);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Phase::Glitch).unwrap();
        assert_eq!(json, "\"glitch\"");
        let back: Phase = serde_json::from_str("\"merge\"").unwrap();
        assert_eq!(back, Phase::Merge);
    }
}
