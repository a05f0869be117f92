//! Command results and presentation tags.
//!
//! A [`CommandResult`] is everything the renderer needs for one submitted
//! command: the lines, how to color them, which visual treatments and audio
//! cues to fire, and whether the story is over.

use serde::{Deserialize, Serialize};

use crate::audio::AudioCue;
use crate::error::InterpretError;
use crate::phase::Phase;

/// Classification of a block of output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// Console output.
    #[default]
    System,
    /// ELARA speaking directly.
    Narrator,
    /// A failed command.
    Error,
}

/// A visual treatment the renderer applies to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Effect {
    /// Slow pulse of the text.
    Flicker,
    /// Whole-screen flicker.
    ScreenFlicker,
    /// Chromatic glitch offset.
    Glitch,
    /// Cycling text color.
    ColorShift,
    /// Inverted colors.
    ColorInvert,
    /// Blurred, hue-rotated text.
    TextCorruption,
    /// Faint ghost text.
    PhantomText,
    /// Slow reveal.
    SlowText,
    /// Intermittent text flicker.
    TextFlicker,
    /// CRT warp.
    CrtDistortion,
    /// Fade the screen to black.
    FadeToBlack,
    /// Fade the screen to white.
    FadeToWhite,
}

impl Effect {
    /// The tag name the renderer keys on.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Flicker => "flicker",
            Self::ScreenFlicker => "screenFlicker",
            Self::Glitch => "glitch",
            Self::ColorShift => "colorShift",
            Self::ColorInvert => "colorInvert",
            Self::TextCorruption => "textCorruption",
            Self::PhantomText => "phantomText",
            Self::SlowText => "slowText",
            Self::TextFlicker => "textFlicker",
            Self::CrtDistortion => "crtDistortion",
            Self::FadeToBlack => "fadeToBlack",
            Self::FadeToWhite => "fadeToWhite",
        }
    }
}

/// A line of ELARA commentary attached to a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    /// What ELARA says.
    pub text: String,
    /// Voice line to play alongside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioCue>,
}

/// The outcome of one submitted command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    /// Output lines in display order.
    pub lines: Vec<String>,
    /// How the lines should be rendered.
    pub line_type: LineType,
    /// Visual treatments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    /// Sound to play with the output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioCue>,
    /// ELARA's commentary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<Commentary>,
    /// The phase entered during this command, if it advanced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_change: Option<Phase>,
    /// An ending fired.
    #[serde(default)]
    pub is_ending: bool,
    /// The player left the console.
    #[serde(default)]
    pub is_exit: bool,
}

impl CommandResult {
    /// A result with no output.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Console output.
    pub fn system<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_type(LineType::System, lines)
    }

    /// Lines spoken by ELARA.
    pub fn narrator<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_type(LineType::Narrator, lines)
    }

    /// An error block.
    pub fn error<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_type(LineType::Error, lines)
    }

    fn with_type<I, S>(line_type: LineType, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            line_type,
            ..Self::default()
        }
    }

    /// Attach visual effects.
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Attach a sound.
    pub fn with_audio(mut self, audio: impl Into<AudioCue>) -> Self {
        self.audio = Some(audio.into());
        self
    }

    /// Attach commentary without a voice line.
    pub fn with_commentary(mut self, text: impl Into<String>) -> Self {
        self.commentary = Some(Commentary {
            text: text.into(),
            audio: None,
        });
        self
    }

    /// Attach commentary with a voice line.
    pub fn with_voiced_commentary(
        mut self,
        text: impl Into<String>,
        audio: impl Into<AudioCue>,
    ) -> Self {
        self.commentary = Some(Commentary {
            text: text.into(),
            audio: Some(audio.into()),
        });
        self
    }

    /// Mark this result as an ending.
    pub fn ending(mut self) -> Self {
        self.is_ending = true;
        self
    }

    /// Mark this result as leaving the console.
    pub fn exit(mut self) -> Self {
        self.is_exit = true;
        self
    }

    /// Whether the result carries no lines and no commentary.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.commentary.is_none()
    }

    /// Whether this is an error block.
    pub fn is_error(&self) -> bool {
        self.line_type == LineType::Error
    }

    /// The first line with visible text.
    pub fn first_line(&self) -> Option<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .find(|l| !l.trim().is_empty())
    }

    /// All output lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<InterpretError> for CommandResult {
    fn from(err: InterpretError) -> Self {
        Self::error(err.lines())
    }
}
