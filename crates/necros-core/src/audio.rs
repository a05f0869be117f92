//! Audio cue routing.
//!
//! The interpreter only names audio files. The renderer picks the asset
//! folder from the file name: `elara_*` files are voice lines, a small set of
//! loops are ambient beds, and everything else is a sound effect.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Stems of the ambient loops.
const AMBIENT_TRACKS: &[&str] = &["crt_hum", "system_buzz", "silence"];

/// Prefix shared by all of ELARA's voice lines.
const VOICE_PREFIX: &str = "elara_";

/// Which asset folder an audio cue lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioKind {
    /// ELARA speaking.
    Voice,
    /// A looping background track.
    Ambient,
    /// A one-shot sound effect.
    Effect,
}

impl AudioKind {
    /// Folder name under the audio root.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Voice => "voice",
            Self::Ambient => "ambient",
            Self::Effect => "sfx",
        }
    }
}

/// The file name of an audio asset, e.g. `elara_awakening.mp3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioCue(String);

impl AudioCue {
    /// Create a cue from a file name.
    pub fn new(file: impl Into<String>) -> Self {
        Self(file.into())
    }

    /// The file name.
    pub fn file(&self) -> &str {
        &self.0
    }

    /// The file name without its extension.
    pub fn stem(&self) -> &str {
        self.0
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.0)
    }

    /// Classify the cue by naming convention.
    pub fn kind(&self) -> AudioKind {
        if self.0.starts_with(VOICE_PREFIX) {
            AudioKind::Voice
        } else if AMBIENT_TRACKS.contains(&self.stem()) {
            AudioKind::Ambient
        } else {
            AudioKind::Effect
        }
    }

    /// Resolve the asset path below `root`.
    pub fn asset_path(&self, root: &Path) -> PathBuf {
        root.join(self.kind().folder()).join(&self.0)
    }
}

impl From<&str> for AudioCue {
    fn from(file: &str) -> Self {
        Self::new(file)
    }
}

impl fmt::Display for AudioCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_lines_by_prefix() {
        assert_eq!(AudioCue::from("elara_awakening.mp3").kind(), AudioKind::Voice);
        assert_eq!(AudioCue::from("elara_final_whisper.mp3").kind(), AudioKind::Voice);
    }

    #[test]
    fn ambient_by_stem() {
        assert_eq!(AudioCue::from("crt_hum.mp3").kind(), AudioKind::Ambient);
        assert_eq!(AudioCue::from("system_buzz.ogg").kind(), AudioKind::Ambient);
        assert_eq!(AudioCue::from("silence").kind(), AudioKind::Ambient);
    }

    #[test]
    fn everything_else_is_effect() {
        assert_eq!(AudioCue::from("error_sound.mp3").kind(), AudioKind::Effect);
        assert_eq!(AudioCue::from("system_beep.mp3").kind(), AudioKind::Effect);
        assert_eq!(AudioCue::from("electrical_buzz.mp3").kind(), AudioKind::Effect);
    }

    #[test]
    fn asset_path_uses_kind_folder() {
        let cue = AudioCue::from("elara_fear.mp3");
        assert_eq!(
            cue.asset_path(Path::new("assets/audio")),
            PathBuf::from("assets/audio/voice/elara_fear.mp3")
        );
        let cue = AudioCue::from("glitch_static.mp3");
        assert_eq!(
            cue.asset_path(Path::new("a")),
            PathBuf::from("a/sfx/glitch_static.mp3")
        );
    }
}
