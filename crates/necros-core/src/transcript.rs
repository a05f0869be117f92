//! Session transcript.
//!
//! Every submitted command is logged with what the console answered, so a
//! playthrough can be exported after the fact.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::{CommandResult, LineType};
use crate::phase::Phase;

/// Entries kept before the oldest are dropped.
pub const MAX_ENTRIES: usize = 1000;

/// Errors writing a transcript.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Writing the file failed.
    #[error("cannot write transcript {path}: {source}")]
    Io {
        /// Target path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Serializing to JSON failed.
    #[error("cannot serialize transcript: {0}")]
    Json(#[from] serde_json::Error),
}

/// One command and its answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// What the player typed.
    pub input: String,
    /// Directory the command was typed in.
    pub directory: String,
    /// Phase after the command ran.
    pub phase: Phase,
    /// How the answer was classified.
    pub line_type: LineType,
    /// Answer lines.
    pub lines: Vec<String>,
    /// ELARA's commentary, if any.
    pub commentary: Option<String>,
    /// When the command was submitted.
    pub timestamp: DateTime<Utc>,
}

/// A bounded, chronological log of the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command typed at `directory` and its result.
    pub fn record(
        &mut self,
        input: &str,
        directory: &str,
        phase: Phase,
        result: &CommandResult,
    ) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(TranscriptEntry {
            input: input.trim().to_string(),
            directory: directory.to_string(),
            phase,
            line_type: result.line_type,
            lines: result.lines.clone(),
            commentary: result.commentary.as_ref().map(|c| c.text.clone()),
            timestamp: Utc::now(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# NecrOS Session Transcript\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "**{}>** `{}` *({})*\n\n",
                entry.directory, entry.input, entry.phase
            ));
            if !entry.lines.is_empty() {
                out.push_str("```\n");
                for line in &entry.lines {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str("```\n");
            }
            if let Some(commentary) = &entry.commentary {
                out.push_str(&format!("> ELARA: {commentary}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Export as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, TranscriptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write to `path`: JSON for a `.json` extension, markdown otherwise.
    pub fn save(&self, path: &Path) -> Result<(), TranscriptError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let text = if is_json {
            self.export_json()?
        } else {
            self.export_markdown()
        };
        std::fs::write(path, text).map_err(|source| TranscriptError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
