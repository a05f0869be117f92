//! Mutable per-session story state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::{DocumentKind, ROOT, is_directory};
use crate::ending::Ending;
use crate::phase::Phase;

/// Puzzle recorded when `SOUL.DAT` is restored.
pub const SOUL_DAT_RESTORED: &str = "SOUL_DAT_RESTORED";

/// Everything that changes as the story plays out.
///
/// Fields are read-only from outside the crate; the session is the only
/// writer, which keeps the monotonic invariants in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) current_directory: String,
    pub(crate) discovered_files: BTreeSet<String>,
    pub(crate) read_files: BTreeSet<String>,
    pub(crate) solved_puzzles: BTreeSet<String>,
    pub(crate) diaries_read: u32,
    pub(crate) emails_read: u32,
    pub(crate) has_run_restore_app: bool,
    pub(crate) ai_personality_level: u8,
    pub(crate) final_choice: Option<Ending>,
    pub(crate) player_name: String,
    pub(crate) command_count: u64,
}

impl SessionState {
    /// Fresh state at the root directory in the Boot phase.
    pub fn new(player_name: impl Into<String>, personality: u8) -> Self {
        Self {
            phase: Phase::Boot,
            current_directory: ROOT.to_string(),
            discovered_files: BTreeSet::new(),
            read_files: BTreeSet::new(),
            solved_puzzles: BTreeSet::new(),
            diaries_read: 0,
            emails_read: 0,
            has_run_restore_app: false,
            ai_personality_level: personality.min(100),
            final_choice: None,
            player_name: player_name.into(),
            command_count: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current directory path.
    pub fn current_directory(&self) -> &str {
        &self.current_directory
    }

    /// Names seen in directory listings.
    pub fn discovered_files(&self) -> &BTreeSet<String> {
        &self.discovered_files
    }

    /// Names of documents read at least once.
    pub fn read_files(&self) -> &BTreeSet<String> {
        &self.read_files
    }

    /// Whether a document has been read.
    pub fn has_read(&self, name: &str) -> bool {
        self.read_files.contains(&name.to_uppercase())
    }

    /// Puzzles solved so far.
    pub fn solved_puzzles(&self) -> &BTreeSet<String> {
        &self.solved_puzzles
    }

    /// Diary reads counted toward progression.
    pub fn diaries_read(&self) -> u32 {
        self.diaries_read
    }

    /// E-mail reads counted toward progression.
    pub fn emails_read(&self) -> u32 {
        self.emails_read
    }

    /// Whether the restoration utility has run.
    pub fn has_run_restore_app(&self) -> bool {
        self.has_run_restore_app
    }

    /// ELARA's personality level, 0-100.
    pub fn ai_personality_level(&self) -> u8 {
        self.ai_personality_level
    }

    /// The chosen ending, once made.
    pub fn final_choice(&self) -> Option<Ending> {
        self.final_choice
    }

    /// The player's name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Non-empty commands submitted.
    pub fn command_count(&self) -> u64 {
        self.command_count
    }

    /// Raise the personality level, saturating at 100.
    pub(crate) fn raise_personality(&mut self, amount: u8) {
        self.ai_personality_level = self.ai_personality_level.saturating_add(amount).min(100);
    }

    /// Move to a directory. Paths outside the tree are ignored.
    pub(crate) fn change_directory(&mut self, path: &str) -> bool {
        if !is_directory(path) {
            return false;
        }
        self.current_directory = path.to_string();
        true
    }

    /// Record a read. Returns whether this was the first read.
    pub(crate) fn record_read(
        &mut self,
        name: &str,
        kind: DocumentKind,
        count_rereads: bool,
    ) -> bool {
        let first = self.read_files.insert(name.to_uppercase());
        if first || count_rereads {
            match kind {
                DocumentKind::Diary => self.diaries_read += 1,
                DocumentKind::Email => self.emails_read += 1,
                _ => {}
            }
        }
        first
    }
}
