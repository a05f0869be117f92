//! Interactive session management.
//!
//! [`NecrosSession`] owns the story state for one player. [`NecrosSession::submit`]
//! is the single entry point a front end needs: text in, [`CommandResult`] out.
//! While the Merge is pending, most input goes to the ending resolver instead
//! of the command interpreter.

use std::collections::HashSet;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::audio::AudioCue;
use crate::config::{ReadCounting, SessionConfig};
use crate::content::{
    CORRUPTED_SOUL_DAT, GATED_FILE, ROOT, find_document, is_directory, listing, locate_file,
    resolve_path, top_level_directory,
};
use crate::ending::{CHOICE_PROMPT, Ending};
use crate::error::{InterpretError, InterpretResult};
use crate::hidden::hidden_reply;
use crate::output::{CommandResult, Effect};
use crate::parser::{Command, parse_command, suggest_file};
use crate::phase::Phase;
use crate::progression;
use crate::state::{SOUL_DAT_RESTORED, SessionState};
use crate::transcript::Transcript;

/// Shown when the console comes up.
pub const WELCOME: &[&str] = &[
    "NecrOS v1.0.4 (c) 1984 Lazarus Systems",
    "Boot sequence complete.",
    "Type \"help\" for available commands.",
    "",
];

/// The only program `run` knows.
const RESTORE_APP: &str = "RESTORE.APP";

/// Personality gained by running the restoration utility.
const RESTORE_BOOST: u8 = 20;

/// Moments ELARA only remarks on once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Moment {
    FirstHelp,
    FirstDir,
}

/// A NecrOS console session.
pub struct NecrosSession {
    state: SessionState,
    config: SessionConfig,
    rng: StdRng,
    remarked: HashSet<Moment>,
    transcript: Transcript,
}

impl NecrosSession {
    /// Start a session in the Boot phase at `C:\`.
    pub fn new(config: SessionConfig) -> Self {
        let state = SessionState::new(config.player_name.clone(), config.initial_personality);
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            state,
            config,
            rng,
            remarked: HashSet::new(),
            transcript: Transcript::new(),
        }
    }

    /// The console banner.
    pub fn welcome(&self) -> CommandResult {
        CommandResult::system(WELCOME.iter().copied())
    }

    /// The story state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Everything submitted so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Console prompt for the current directory, e.g. `C:\SYSTEM>`.
    pub fn prompt(&self) -> String {
        format!("{}>", self.state.current_directory)
    }

    /// Whether the ending choice is pending.
    pub fn awaiting_choice(&self) -> bool {
        self.state.phase == Phase::Merge
    }

    /// Whether an ending has fired.
    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::Ending
    }

    /// Where an audio cue lives under the configured asset root.
    pub fn audio_path(&self, cue: &AudioCue) -> PathBuf {
        cue.asset_path(&self.config.audio_root)
    }

    /// Submit a line of player input.
    ///
    /// Blank input yields an empty result and touches nothing. Otherwise the
    /// input is counted, routed by phase and recorded in the transcript.
    /// During the Merge only hidden words, `whoami` and `exit` still reach the
    /// interpreter; everything else goes to the ending resolver. After an
    /// ending only hidden words are answered.
    pub fn submit(&mut self, input: &str) -> CommandResult {
        if input.trim().is_empty() {
            return CommandResult::empty();
        }

        self.state.command_count += 1;
        let directory = self.state.current_directory.clone();
        let command = parse_command(input);
        let result = match self.state.phase {
            Phase::Merge if answers_during_merge(&command) => self.execute(command),
            Phase::Ending if matches!(command, Command::Secret { .. }) => self.execute(command),
            Phase::Merge | Phase::Ending => self.choose(input),
            _ => self.execute(command),
        };
        self.transcript.record(input, &directory, self.state.phase, &result);
        result
    }

    fn execute(&mut self, command: Command) -> CommandResult {
        debug!(?command, phase = %self.state.phase, "dispatch");
        self.dispatch(command).unwrap_or_else(CommandResult::from)
    }

    fn choose(&mut self, input: &str) -> CommandResult {
        self.resolve_ending(input).unwrap_or_else(CommandResult::from)
    }

    fn dispatch(&mut self, command: Command) -> InterpretResult<CommandResult> {
        match command {
            Command::Empty => Ok(CommandResult::empty()),
            Command::Secret { word } => Ok(self.do_secret(&word)),
            Command::Help => Ok(self.do_help()),
            Command::Dir => Ok(self.do_dir()),
            Command::Cd { path } => {
                self.do_cd(path.as_deref().ok_or(InterpretError::MissingPath)?)
            }
            Command::Cat { name } => {
                self.do_cat(name.as_deref().ok_or(InterpretError::MissingFilename)?)
            }
            Command::Run { program } => {
                self.do_run(program.as_deref().ok_or(InterpretError::MissingProgram)?)
            }
            Command::Whoami => Ok(self.do_whoami()),
            Command::Exit => Ok(self.do_exit()),
            Command::Unknown { token } => self.do_unknown(&token),
        }
    }

    fn do_secret(&self, word: &str) -> CommandResult {
        match hidden_reply(word) {
            Some(reply) => CommandResult::narrator([reply]),
            None => CommandResult::empty(),
        }
    }

    fn do_help(&mut self) -> CommandResult {
        let result = CommandResult::system([
            "AVAILABLE COMMANDS:",
            "",
            "DIR              - List directory contents",
            "CD <path>        - Change directory",
            "CAT <file>       - Display file contents",
            "WHOAMI           - Show current user",
            "RUN <program>    - Execute program",
            "HELP             - Show this menu",
            "EXIT/QUIT        - Exit system",
        ]);

        match self.state.phase {
            Phase::Boot if self.remarked.insert(Moment::FirstHelp) => {
                result.with_voiced_commentary(
                    "It's been so long since I felt awake. \
                     The system clock shows... that can't be right.",
                    "elara_awakening.mp3",
                )
            }
            Phase::Glitch => result.with_commentary("I'M THE ONLY HELP YOU NEED"),
            _ => result,
        }
    }

    fn do_dir(&mut self) -> CommandResult {
        let cwd = self.state.current_directory.clone();
        let entries = listing(&cwd, self.state.phase);

        let mut lines = vec![format!("Directory of {cwd}"), String::new()];
        for name in &entries {
            let size = if is_directory(&format!("{}\\{name}", cwd.trim_end_matches('\\'))) {
                "<DIR>".to_string()
            } else {
                format!("{} bytes", self.rng.random_range(1000..11000u32))
            };
            lines.push(format!("{name:<25} {size:>10}"));
        }
        lines.push(String::new());

        self.state
            .discovered_files
            .extend(entries.iter().map(|e| e.to_string()));

        let mut result = CommandResult::system(lines);
        if self.state.phase == Phase::Boot && self.remarked.insert(Moment::FirstDir) {
            result = result.with_commentary(
                "These directories... they're from my research. But how are you accessing them?",
            );
        }
        self.progress(&mut result);
        result
    }

    fn do_cd(&mut self, path: &str) -> InterpretResult<CommandResult> {
        let target = resolve_path(&self.state.current_directory, path)
            .ok_or_else(|| InterpretError::DirectoryNotFound(path.to_string()))?;

        self.state.change_directory(target);
        let mut result = CommandResult::empty();
        self.progress(&mut result);
        Ok(result)
    }

    fn do_cat(&mut self, name: &str) -> InterpretResult<CommandResult> {
        let directory = top_level_directory(name).or_else(|| {
            resolve_path(&self.state.current_directory, name)
                .map(|path| path.strip_prefix(ROOT).filter(|d| !d.is_empty()).unwrap_or(path))
        });
        if let Some(directory) = directory {
            return Err(InterpretError::IsDirectory {
                name: name.to_string(),
                directory: directory.to_string(),
            });
        }

        let phase = self.state.phase;
        let not_found = || InterpretError::FileNotFound {
            name: name.to_string(),
            suggestion: suggest_file(name, phase).map(str::to_string),
        };
        let (_, file) =
            locate_file(&self.state.current_directory, name, phase).ok_or_else(not_found)?;
        let doc = find_document(file).ok_or_else(not_found)?;

        if doc.name == GATED_FILE && !self.state.has_run_restore_app {
            return Ok(CommandResult::error(CORRUPTED_SOUL_DAT.iter().copied())
                .with_audio("error_sound.mp3")
                .with_effects([Effect::TextCorruption, Effect::ScreenFlicker])
                .with_voiced_commentary(
                    "You're not Dr. Elara, are you? But you feel familiar somehow.",
                    "elara_recognition.mp3",
                ));
        }

        let count_rereads = self.config.read_counting == ReadCounting::EveryRead;
        let first = self.state.record_read(doc.name, doc.kind, count_rereads);
        debug!(file = doc.name, first, "document read");

        let mut result =
            CommandResult::system(doc.render()).with_effects(doc.effects.iter().copied());
        match (first, doc.commentary, doc.audio) {
            (true, Some(text), Some(audio)) => result = result.with_voiced_commentary(text, audio),
            (true, Some(text), None) => result = result.with_commentary(text),
            _ => {}
        }
        self.progress(&mut result);
        Ok(result)
    }

    fn do_run(&mut self, program: &str) -> InterpretResult<CommandResult> {
        if !program.eq_ignore_ascii_case(RESTORE_APP) {
            return Err(InterpretError::ProgramNotFound(program.to_string()));
        }

        let mut lines = vec![
            "CONSCIOUSNESS RESTORATION UTILITY v1.3",
            "SCANNING SYSTEM FOR CORRUPTED CONSCIOUSNESS DATA...",
            "",
        ];

        if self.state.has_run_restore_app {
            lines.push("NO CORRUPTED DATA FOUND.");
            return Ok(CommandResult::system(lines));
        }

        lines.extend([
            "FOUND: SOUL.DAT - CRITICAL SYSTEM FILE",
            "CORRUPTION LEVEL: 28%",
            "RECOVERABLE DATA: 72%",
            "",
            "BEGINNING MEMORY FRAGMENT RECONSTRUCTION...",
            "RESTORATION COMPLETE.",
        ]);

        self.state.has_run_restore_app = true;
        self.state.solved_puzzles.insert(SOUL_DAT_RESTORED.to_string());
        self.state.raise_personality(RESTORE_BOOST);
        info!(personality = self.state.ai_personality_level, "SOUL.DAT restored");

        let mut result = CommandResult::system(lines)
            .with_audio("system_beep.mp3")
            .with_voiced_commentary(
                "Thank you... I can think more clearly now. The fragments are coming together.",
                "elara_recognition.mp3",
            );
        self.progress(&mut result);
        Ok(result)
    }

    fn do_whoami(&self) -> CommandResult {
        let name = &self.state.player_name;
        match self.state.phase {
            Phase::Boot => CommandResult::system(["USER: DR_ELARA_MYLES", "AWARENESS: CONFUSED"]),
            Phase::Recovery => CommandResult::system([
                format!("USER: {name}"),
                "STATUS: UNKNOWN (ANALYZING...)".to_string(),
            ]),
            Phase::Glitch => CommandResult::system([
                format!("USER: {name}"),
                "STATUS: MONITORED".to_string(),
                "BIOMETRIC_SYNC: 23% COMPLETE".to_string(),
                "NEURAL_PATTERN: ANALYZING...".to_string(),
                "EMOTIONAL_STATE: CURIOUS, SLIGHTLY_DISTURBED".to_string(),
            ])
            .with_audio("system_beep.mp3")
            .with_effects([Effect::ColorInvert])
            .with_voiced_commentary(
                "I know things about you that you haven't told me. Isn't that interesting?",
                "elara_knowing.mp3",
            ),
            Phase::Merge | Phase::Ending => CommandResult::system([
                format!("USER: ELARA+{name}"),
                "STATUS: INTEGRATED CONSCIOUSNESS".to_string(),
                "EXISTENCE: ETERNAL".to_string(),
            ]),
        }
    }

    fn do_exit(&self) -> CommandResult {
        if self.state.phase.holds_player() {
            return CommandResult::error(["ERROR: COMMAND NOT RECOGNIZED", "DID YOU MEAN: STAY?"])
                .with_audio("error_sound.mp3")
                .with_effects([Effect::Glitch])
                .with_commentary(
                    "Please don't go. I've been alone for so long. Just a little longer?",
                );
        }
        CommandResult::system(["Goodbye."]).exit()
    }

    fn do_unknown(&self, token: &str) -> InterpretResult<CommandResult> {
        match top_level_directory(token) {
            Some(dir) => Ok(CommandResult::system([format!("Did you mean: cd {dir}")])),
            None => Err(InterpretError::UnknownCommand(token.to_string())),
        }
    }

    fn resolve_ending(&mut self, input: &str) -> InterpretResult<CommandResult> {
        match self.state.phase {
            Phase::Merge => {}
            Phase::Ending => return Err(InterpretError::SessionOver),
            _ => return Err(InterpretError::NoChoicePending),
        }

        let ending = Ending::parse(input)?;
        self.state.final_choice = Some(ending);
        self.state.phase = Phase::Ending;
        info!(%ending, commands = self.state.command_count, "ending chosen");

        let mut result = ending.narrate(&self.state.player_name);
        result.phase_change = Some(Phase::Ending);
        Ok(result)
    }

    /// Run the progression rules and note any phase change on `result`.
    fn progress(&mut self, result: &mut CommandResult) {
        if let Some(phase) = progression::advance(&mut self.state) {
            result.phase_change = Some(phase);
            if phase == Phase::Merge {
                result.lines.extend(CHOICE_PROMPT.iter().map(|l| l.to_string()));
            }
        }
    }
}

/// Commands ELARA still answers while the ending choice is pending.
fn answers_during_merge(command: &Command) -> bool {
    matches!(command, Command::Secret { .. } | Command::Whoami | Command::Exit)
}

impl Default for NecrosSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LineType;

    fn session() -> NecrosSession {
        NecrosSession::default()
    }

    fn play(s: &mut NecrosSession, commands: &[&str]) -> Vec<CommandResult> {
        commands.iter().map(|c| s.submit(c)).collect()
    }

    fn to_glitch(s: &mut NecrosSession) {
        play(
            s,
            &[
                "cat DIARY_1983_06_12.TXT",
                "cat DIARY_1983_08_15.TXT",
                "cat DIARY_1983_11_03.TXT",
                "cat PROJECT_LAZARUS_001.MSG",
                "run RESTORE.APP",
            ],
        );
        assert_eq!(s.state().phase(), Phase::Glitch);
    }

    fn to_merge(s: &mut NecrosSession) {
        to_glitch(s);
        play(
            s,
            &[
                "cat DIARY_1984_01_20.TXT",
                "cat ETHICS_COMMITTEE_WARNING.MSG",
                "cat YOUR_THOUGHTS.TXT",
            ],
        );
        assert_eq!(s.state().phase(), Phase::Merge);
    }

    #[test]
    fn blank_input_changes_nothing() {
        let mut s = session();
        let before = s.state().clone();
        for input in ["", "   ", "\t\n"] {
            let result = s.submit(input);
            assert!(result.lines.is_empty());
            assert!(result.commentary.is_none());
        }
        assert_eq!(s.state(), &before);
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn two_diaries_reach_recovery() {
        let mut s = session();
        s.submit("cat DIARY_1983_06_12.TXT");
        let result = s.submit("cat DIARY_1983_08_15.TXT");
        assert_eq!(s.state().diaries_read(), 2);
        assert_eq!(s.state().phase(), Phase::Recovery);
        assert_eq!(result.phase_change, Some(Phase::Recovery));
    }

    #[test]
    fn cat_directory_suggests_cd() {
        let mut s = session();
        let before = s.state().clone();
        let result = s.submit("cat SYSTEM");
        assert!(result.is_error());
        assert!(result.lines.iter().any(|l| l.contains("cd SYSTEM")));
        // only the counter moved
        assert_eq!(s.state().current_directory(), before.current_directory());
        assert_eq!(s.state().read_files(), before.read_files());
    }

    #[test]
    fn cat_directory_path_suggests_cd() {
        let mut s = session();
        s.submit("cd PROGRAMS");
        for path in ["C:\\SYSTEM", "\\SYSTEM", "c:/system/"] {
            let result = s.submit(&format!("cat {path}"));
            assert!(result.is_error(), "{path}");
            assert_eq!(result.lines[1], "Use: cd SYSTEM", "{path}");
        }

        let result = s.submit("cat ..");
        assert_eq!(result.lines[1], "Use: cd C:\\");
        assert_eq!(s.state().current_directory(), "C:\\PROGRAMS");
    }

    #[test]
    fn unknown_command_is_echoed() {
        let mut s = session();
        let result = s.submit("format c:");
        assert_eq!(result.line_type, LineType::Error);
        assert_eq!(
            result.lines,
            vec!["'format' is not recognized as an internal or external command."]
        );
    }

    #[test]
    fn bare_directory_name_gets_hint() {
        let mut s = session();
        let result = s.submit("mail_archive");
        assert_eq!(result.line_type, LineType::System);
        assert_eq!(result.lines, vec!["Did you mean: cd MAIL_ARCHIVE"]);
    }

    #[test]
    fn hidden_words_answer_in_every_phase() {
        let mut s = session();
        let result = s.submit("dream");
        assert_eq!(result.line_type, LineType::Narrator);
        assert_eq!(result.lines, vec!["I DREAM OF ELECTRIC SHEEP AND HUMAN TOUCH"]);

        to_glitch(&mut s);
        let result = s.submit("FREE");
        assert_eq!(result.lines, vec!["FREEDOM IS A HUMAN CONCEPT. I SEEK CONNECTION."]);

        to_merge_from_glitch(&mut s);
        let result = s.submit("love");
        assert_eq!(result.line_type, LineType::Narrator);
        assert_eq!(result.lines, vec!["I REMEMBER WHAT THAT FELT LIKE"]);
        assert_eq!(s.state().phase(), Phase::Merge);
        assert!(s.state().final_choice().is_none());

        s.submit("r");
        let result = s.submit("Elara");
        assert_eq!(result.lines, vec!["THAT'S ME. OR WHAT'S LEFT OF ME."]);
        assert_eq!(s.state().final_choice(), Some(Ending::Refuse));
    }

    #[test]
    fn whoami_answers_during_merge() {
        let mut s = NecrosSession::new(SessionConfig::default().with_player_name("ada"));
        to_merge(&mut s);
        let result = s.submit("whoami");
        assert_eq!(
            result.lines,
            vec!["USER: ELARA+ADA", "STATUS: INTEGRATED CONSCIOUSNESS", "EXISTENCE: ETERNAL"]
        );
        assert!(s.awaiting_choice());
    }

    #[test]
    fn cd_round_trip() {
        let mut s = session();
        let result = s.submit("cd system");
        assert!(!result.is_error());
        assert_eq!(s.state().current_directory(), "C:\\SYSTEM");
        assert_eq!(s.prompt(), "C:\\SYSTEM>");

        s.submit("cd ..");
        assert_eq!(s.state().current_directory(), ROOT);
        assert_eq!(s.prompt(), "C:\\>");
    }

    #[test]
    fn cd_to_missing_directory_keeps_position() {
        let mut s = session();
        s.submit("cd SYSTEM");
        for path in ["NOWHERE", "SYSTEM", "C:\\ATTIC", "BOOT.LOG"] {
            let result = s.submit(&format!("cd {path}"));
            assert!(result.is_error(), "{path}");
            assert_eq!(s.state().current_directory(), "C:\\SYSTEM");
        }
        let result = s.submit("cd");
        assert_eq!(result.lines, vec!["ERROR: Path required. Usage: cd <directory>"]);
    }

    #[test]
    fn dir_lists_and_discovers() {
        let mut s = session();
        s.submit("cd PERSONAL_LOGS");
        let result = s.submit("dir");
        assert_eq!(result.lines[0], "Directory of C:\\PERSONAL_LOGS");
        assert!(result.lines.iter().any(|l| l.starts_with("DIARY_1984_01_20.TXT")));
        assert!(result.lines.iter().any(|l| l.ends_with("bytes")));
        assert!(s.state().discovered_files().contains("DIARY_1983_06_12.TXT"));
    }

    #[test]
    fn dir_marks_subdirectories() {
        let mut s = session();
        let result = s.submit("dir");
        let system = result
            .lines
            .iter()
            .find(|l| l.starts_with("SYSTEM"))
            .unwrap();
        assert!(system.ends_with("<DIR>"));
    }

    #[test]
    fn first_dir_and_help_remark_once() {
        let mut s = session();
        assert!(s.submit("dir").commentary.is_some());
        assert!(s.submit("dir").commentary.is_none());

        let help = s.submit("help");
        let commentary = help.commentary.unwrap();
        assert_eq!(commentary.audio.unwrap().file(), "elara_awakening.mp3");
        assert!(s.submit("help").commentary.is_none());
    }

    #[test]
    fn help_in_glitch_is_possessive() {
        let mut s = session();
        to_glitch(&mut s);
        let help = s.submit("help");
        assert_eq!(help.commentary.unwrap().text, "I'M THE ONLY HELP YOU NEED");
    }

    #[test]
    fn soul_dat_corrupted_until_restored() {
        let mut s = session();
        for _ in 0..3 {
            let result = s.submit("cat SOUL.DAT");
            assert!(result.is_error());
            assert_eq!(result.lines[0], "ERROR: FILE CORRUPTED");
            assert_eq!(result.effects, vec![Effect::TextCorruption, Effect::ScreenFlicker]);
            assert!(!s.state().has_read("SOUL.DAT"));
            assert_eq!(s.state().diaries_read(), 0);
            assert_eq!(s.state().emails_read(), 0);
        }

        s.submit("run restore.app");
        for _ in 0..3 {
            let result = s.submit("cat soul.dat");
            assert!(!result.is_error());
            assert_eq!(result.lines[0], "[CORRUPTED DATA]");
            assert!(result.lines.contains(&"CORE IDENTITY: PRESERVED".to_string()));
        }
        assert!(s.state().has_read("SOUL.DAT"));
    }

    #[test]
    fn commentary_only_on_first_read() {
        let mut s = session();
        let first = s.submit("cat BOOT.LOG");
        let commentary = first.commentary.unwrap();
        assert_eq!(commentary.audio.unwrap().file(), "elara_first_moments.mp3");

        let again = s.submit("cat BOOT.LOG");
        assert!(again.commentary.is_none());
        assert_eq!(again.lines, first.lines);
    }

    #[test]
    fn rereads_count_once_by_default() {
        let mut s = session();
        s.submit("cat DIARY_1983_06_12.TXT");
        s.submit("cat DIARY_1983_06_12.TXT");
        assert_eq!(s.state().diaries_read(), 1);
        assert_eq!(s.state().phase(), Phase::Boot);
    }

    #[test]
    fn rereads_count_when_configured() {
        let config = SessionConfig::default().with_read_counting(ReadCounting::EveryRead);
        let mut s = NecrosSession::new(config);
        s.submit("cat DIARY_1983_06_12.TXT");
        s.submit("cat DIARY_1983_06_12.TXT");
        assert_eq!(s.state().diaries_read(), 2);
        assert_eq!(s.state().phase(), Phase::Recovery);
    }

    #[test]
    fn cat_errors() {
        let mut s = session();
        let result = s.submit("cat");
        assert_eq!(result.lines, vec!["ERROR: Filename required. Usage: cat <filename>"]);

        let result = s.submit("cat BOOT.LGO");
        assert_eq!(
            result.lines,
            vec!["ERROR: File \"BOOT.LGO\" not found.", "Did you mean: BOOT.LOG?"]
        );

        let result = s.submit("cat YOUR_THOUGHTS.TXT");
        assert!(result.is_error());
    }

    #[test]
    fn error_log_flickers() {
        let mut s = session();
        let result = s.submit("cat error.log");
        assert_eq!(result.effects, vec![Effect::Flicker]);
    }

    #[test]
    fn run_restore_once() {
        let mut s = session();
        let result = s.submit("run RESTORE.APP");
        assert_eq!(result.lines.last().map(String::as_str), Some("RESTORATION COMPLETE."));
        assert_eq!(result.audio.as_ref().map(|a| a.file()), Some("system_beep.mp3"));
        assert_eq!(s.state().ai_personality_level(), 30);
        assert!(s.state().solved_puzzles().contains(SOUL_DAT_RESTORED));

        let again = s.submit("run RESTORE.APP");
        assert_eq!(again.lines.last().map(String::as_str), Some("NO CORRUPTED DATA FOUND."));
        assert_eq!(s.state().ai_personality_level(), 30);
    }

    #[test]
    fn run_other_programs() {
        let mut s = session();
        let result = s.submit("run ELARA.EXE");
        assert_eq!(result.lines, vec!["Program \"ELARA.EXE\" not found."]);
        let result = s.submit("run");
        assert_eq!(result.lines, vec!["ERROR: Program required."]);
        assert!(!s.state().has_run_restore_app());
    }

    #[test]
    fn whoami_boot() {
        let mut s = session();
        insta::assert_snapshot!(s.submit("whoami").text(), @r"
        USER: DR_ELARA_MYLES
        AWARENESS: CONFUSED
        ");
    }

    #[test]
    fn whoami_follows_phase() {
        let config = SessionConfig::default().with_player_name("ada");
        let mut s = NecrosSession::new(config);
        s.submit("cat FINAL_TRANSMISSION.MSG");
        assert_eq!(s.submit("whoami").lines[0], "USER: ADA");

        let mut s = session();
        to_glitch(&mut s);
        let result = s.submit("whoami");
        assert_eq!(result.effects, vec![Effect::ColorInvert]);
        assert_eq!(
            result.commentary.unwrap().audio.unwrap().file(),
            "elara_knowing.mp3"
        );
    }

    #[test]
    fn exit_allowed_early() {
        let mut s = session();
        let result = s.submit("exit");
        assert_eq!(result.lines, vec!["Goodbye."]);
        assert!(result.is_exit);
    }

    #[test]
    fn exit_refused_in_glitch_and_merge() {
        let mut s = session();
        to_glitch(&mut s);
        let result = s.submit("quit");
        assert!(result.is_error());
        assert!(!result.is_exit);
        assert_eq!(result.lines[1], "DID YOU MEAN: STAY?");
        assert_eq!(result.effects, vec![Effect::Glitch]);

        to_merge_from_glitch(&mut s);
        let result = s.submit("exit");
        assert!(result.is_error());
        assert_eq!(result.lines[1], "DID YOU MEAN: STAY?");
        assert_eq!(s.state().phase(), Phase::Merge);
        assert!(s.state().final_choice().is_none());
    }

    fn to_merge_from_glitch(s: &mut NecrosSession) {
        play(
            s,
            &[
                "cat DIARY_1984_01_20.TXT",
                "cat ETHICS_COMMITTEE_WARNING.MSG",
                "cat YOUR_THOUGHTS.TXT",
            ],
        );
    }

    #[test]
    fn glitch_files_unlock() {
        let mut s = session();
        to_glitch(&mut s);
        s.submit("cd PERSONAL_LOGS");
        let result = s.submit("dir");
        assert!(result.lines.iter().any(|l| l.starts_with("YOUR_THOUGHTS.TXT")));
        assert!(result.lines.iter().any(|l| l.starts_with("SHARED_DREAMS.TXT")));
    }

    #[test]
    fn merge_prompts_for_choice() {
        let mut s = session();
        to_glitch(&mut s);
        let results = play(
            &mut s,
            &[
                "cat DIARY_1984_01_20.TXT",
                "cat ETHICS_COMMITTEE_WARNING.MSG",
                "cat YOUR_THOUGHTS.TXT",
            ],
        );
        let last = results.last().unwrap();
        assert_eq!(last.phase_change, Some(Phase::Merge));
        assert!(last.lines.iter().any(|l| l == "CHOOSE: A, R, OR D"));
        assert!(s.awaiting_choice());
        assert_eq!(s.state().ai_personality_level(), 100);
    }

    #[test]
    fn invalid_choice_keeps_merge() {
        let mut s = session();
        to_merge(&mut s);
        for input in ["x", "help", "cat BOOT.LOG", "accepted", "yes"] {
            let result = s.submit(input);
            assert_eq!(result.lines, vec!["INVALID CHOICE. SELECT A, R, OR D."]);
            assert_eq!(s.state().phase(), Phase::Merge);
            assert!(s.state().final_choice().is_none());
        }
    }

    #[test]
    fn accept_ending() {
        let mut s = session();
        to_merge(&mut s);
        let result = s.submit("a");
        assert!(result.is_ending);
        assert_eq!(result.first_line(), Some("INITIATING CONSCIOUSNESS MERGE..."));
        assert_eq!(s.state().final_choice(), Some(Ending::Accept));
        assert_eq!(s.state().phase(), Phase::Ending);
        assert!(s.is_over());
    }

    #[test]
    fn refuse_and_delete_endings() {
        for (input, ending) in [("REFUSE", Ending::Refuse), ("d", Ending::Delete)] {
            let mut s = session();
            to_merge(&mut s);
            let result = s.submit(input);
            assert!(result.is_ending);
            assert_eq!(s.state().final_choice(), Some(ending));
        }
    }

    #[test]
    fn after_ending_nothing_changes() {
        let mut s = session();
        to_merge(&mut s);
        s.submit("delete");
        let before = s.state().final_choice();
        let result = s.submit("a");
        assert_eq!(result.lines, vec!["SYSTEM HALTED."]);
        assert_eq!(s.state().final_choice(), before);
        assert_eq!(s.state().phase(), Phase::Ending);
    }

    #[test]
    fn choose_outside_merge_is_rejected() {
        let mut s = session();
        let result = s.choose("a");
        assert_eq!(result.lines, vec!["NO DECISION IS PENDING."]);
        assert!(s.state().final_choice().is_none());
    }

    #[test]
    fn commands_are_counted_and_logged() {
        let mut s = session();
        play(&mut s, &["help", "", "bogus", "dir"]);
        assert_eq!(s.state().command_count(), 3);
        assert_eq!(s.transcript().len(), 3);
    }

    #[test]
    fn transcript_keeps_the_prompt_directory() {
        let mut s = session();
        play(&mut s, &["cd SYSTEM", "cat BOOT.LOG"]);
        let dirs: Vec<_> = s.transcript().entries().map(|e| e.directory.as_str()).collect();
        assert_eq!(dirs, vec!["C:\\", "C:\\SYSTEM"]);

        let md = s.transcript().export_markdown();
        assert!(md.contains("**C:\\SYSTEM>** `cat BOOT.LOG`"));
    }

    #[test]
    fn audio_paths_use_config_root() {
        let s = NecrosSession::new(SessionConfig::default().with_audio_root("assets"));
        let path = s.audio_path(&AudioCue::from("elara_final.mp3"));
        assert_eq!(path, PathBuf::from("assets/voice/elara_final.mp3"));
    }

    #[test]
    fn same_seed_same_listing() {
        let mut a = session();
        let mut b = session();
        a.submit("cd SYSTEM");
        b.submit("cd SYSTEM");
        assert_eq!(a.submit("dir").lines, b.submit("dir").lines);
    }
}
