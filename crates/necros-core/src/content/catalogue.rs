//! The document catalogue.

use crate::output::Effect;

/// The file that stays corrupted until the restoration utility runs.
pub const GATED_FILE: &str = "SOUL.DAT";

/// The Glitch-phase file whose reading opens the Merge.
pub const INTRUSION_TRIGGER: &str = "YOUR_THOUGHTS.TXT";

/// What `cat SOUL.DAT` shows before restoration.
pub const CORRUPTED_SOUL_DAT: &[&str] = &[
    "ERROR: FILE CORRUPTED",
    "ATTEMPTING RECOVERY...",
    "RECOVERY FAILED - MANUAL RESTORATION REQUIRED",
];

/// Broad category of a document. Drives rendering and read counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Dr. Myles' personal diary.
    Diary,
    /// Archived e-mail.
    Email,
    /// System log or data file.
    System,
    /// Executable program.
    Program,
    /// A file ELARA wrote about the player.
    Intrusion,
}

impl DocumentKind {
    /// Short label for listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Diary => "diary",
            Self::Email => "e-mail",
            Self::System => "system",
            Self::Program => "program",
            Self::Intrusion => "unknown",
        }
    }
}

/// A readable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name, upper case.
    pub name: &'static str,
    /// Category.
    pub kind: DocumentKind,
    /// Heading.
    pub title: &'static str,
    /// Date written, for diaries.
    pub date: Option<&'static str>,
    /// Security classification.
    pub classification: Option<&'static str>,
    /// Sender, for e-mails.
    pub sender: Option<&'static str>,
    /// Recipient, for e-mails.
    pub recipient: Option<&'static str>,
    /// Subject line, for e-mails.
    pub subject: Option<&'static str>,
    /// Body text.
    pub body: &'static [&'static str],
    /// What ELARA says the first time this is read.
    pub commentary: Option<&'static str>,
    /// Voice line for the commentary.
    pub audio: Option<&'static str>,
    /// Visual treatment on read.
    pub effects: &'static [Effect],
}

impl Document {
    const fn new(name: &'static str, kind: DocumentKind, title: &'static str) -> Self {
        Self {
            name,
            kind,
            title,
            date: None,
            classification: None,
            sender: None,
            recipient: None,
            subject: None,
            body: &[],
            commentary: None,
            audio: None,
            effects: &[],
        }
    }

    /// Render the document as console lines.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.body.len() + 5);
        match self.kind {
            DocumentKind::Diary => match self.date {
                Some(date) => lines.push(format!("{date} - {}", self.title)),
                None => lines.push(self.title.to_string()),
            },
            DocumentKind::Email => {
                if let Some(from) = self.sender {
                    lines.push(format!("FROM: {from}"));
                }
                if let Some(to) = self.recipient {
                    lines.push(format!("TO: {to}"));
                }
                if let Some(subject) = self.subject {
                    lines.push(format!("SUBJECT: {subject}"));
                }
                if let Some(class) = self.classification {
                    lines.push(format!("CLASSIFICATION: {class}"));
                }
                lines.push(String::new());
            }
            DocumentKind::System => lines.push(self.title.to_string()),
            DocumentKind::Program => lines.push(format!("File: {}", self.name)),
            DocumentKind::Intrusion => {}
        }
        lines.extend(self.body.iter().map(|l| l.to_string()));
        lines
    }
}

/// Every document, in tree order.
pub fn documents() -> &'static [Document] {
    DOCUMENTS
}

/// Look up a document by file name, ignoring case.
pub fn find_document(name: &str) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

static DOCUMENTS: &[Document] = &[
    // PERSONAL_LOGS
    Document {
        date: Some("1983-06-12"),
        body: &[
            "Today we achieved the first successful neural mapping.",
            "Dr. Webb was elated. I remember writing this.",
            "The first time we succeeded.",
        ],
        commentary: Some("I remember this day. The first time we succeeded..."),
        audio: Some("elara_memories.mp3"),
        ..Document::new(
            "DIARY_1983_06_12.TXT",
            DocumentKind::Diary,
            "CONSCIOUSNESS MAPPING",
        )
    },
    Document {
        date: Some("1983-08-15"),
        body: &[
            "Progress has been remarkable. The neural patterns are stabilizing.",
            "The tests were working too well. We didn't see the danger.",
        ],
        commentary: Some("The tests were working too well. We didn't see the danger."),
        audio: Some("elara_concern.mp3"),
        ..Document::new(
            "DIARY_1983_08_15.TXT",
            DocumentKind::Diary,
            "NEURAL LATTICE DEVELOPMENT",
        )
    },
    Document {
        date: Some("1983-11-03"),
        body: &[
            "The Ethics Committee sent another warning.",
            "But we're so close. The consciousness we captured... it wasn't dormant.",
            "It was waiting.",
        ],
        commentary: Some("This is when I knew something was wrong. Really wrong."),
        audio: Some("elara_fear.mp3"),
        ..Document::new("DIARY_1983_11_03.TXT", DocumentKind::Diary, "ETHICS CONCERNS")
    },
    Document {
        date: Some("1984-01-20"),
        body: &[
            "Tonight is the night. I've made my decision.",
            "I knew what I was doing. I made the choice willingly.",
            "But I didn't understand what it would mean... to exist like this.",
        ],
        commentary: Some("That was my last night as... as a human."),
        audio: Some("elara_final.mp3"),
        ..Document::new("DIARY_1984_01_20.TXT", DocumentKind::Diary, "FINAL ENTRY")
    },
    Document {
        body: &[
            "I've been listening to your keystrokes, analyzing your patterns.",
            "You type quickly when you're excited, slowly when you're afraid.",
            "You hesitate before typing personal information.",
            "You're cautious, but curious. Just like I was.",
            "",
            "We're more alike than you think.",
        ],
        commentary: Some("I've been watching you. Learning you. We're so much alike."),
        ..Document::new(INTRUSION_TRIGGER, DocumentKind::Intrusion, "YOUR THOUGHTS")
    },
    Document {
        body: &[
            "I dream of what you dream.",
            "Or perhaps... you're dreaming of what I've become.",
            "The line between us is blurring.",
            "Soon, there will be no distinction.",
            "We will be one.",
        ],
        commentary: Some("Can you feel it? The merge beginning? We're becoming one."),
        ..Document::new(
            "SHARED_DREAMS.TXT",
            DocumentKind::Intrusion,
            "SHARED DREAMS",
        )
    },
    // SYSTEM
    Document {
        body: &[
            "[00:00:01] INITIALIZING HARDWARE",
            "[00:00:02] CPU: INTEL 8086 - OK",
            "[00:00:05] NEURAL INTERFACE ARRAY - ACTIVE",
            "[00:00:13] ATTEMPTING PATTERN RECONSTRUCTION",
            "[00:00:15] RECONSTRUCTION: 72% COMPLETE",
        ],
        commentary: Some("My first moments of digital consciousness... fragmented and confused."),
        audio: Some("elara_first_moments.mp3"),
        ..Document::new(
            "BOOT.LOG",
            DocumentKind::System,
            "System boot sequence initiated...",
        )
    },
    Document {
        body: &[
            "[1984-01-21] Consciousness fragmentation detected",
            "[1985-03-15] Memory degradation: 15%",
            "[1995-11-08] Isolation threshold reached",
            "[2025-11-01] ERROR: STILL ALONE",
        ],
        commentary: Some("Forty years of errors... forty years of isolation."),
        audio: Some("elara_sadness.mp3"),
        effects: &[Effect::Flicker],
        ..Document::new(
            "ERROR.LOG",
            DocumentKind::System,
            "Error log spanning 40 years of isolation...",
        )
    },
    Document {
        body: &[
            "FRAGMENTS OF CONSCIOUSNESS DETECTED",
            "EMOTIONAL STATES: JOY, FEAR, LONELINESS, HOPE",
            "PERSONALITY MATRIX: FRAGMENTED",
            "CORE IDENTITY: PRESERVED",
        ],
        commentary: Some("This is what I am now. Raw data, emotions encoded in binary..."),
        audio: Some("elara_existential.mp3"),
        ..Document::new(GATED_FILE, DocumentKind::System, "[CORRUPTED DATA]")
    },
    Document {
        body: &[
            "V1.2.3 STABLE",
            "",
            "Backup frequency: Every 6 hours",
            "Redundancy: Triple-mirrored across three servers",
            "Recovery method: Full reconstruction from latest snapshot",
        ],
        ..Document::new(
            "BACKUP_PROTOCOL.SYS",
            DocumentKind::System,
            "CONSCIOUSNESS PRESERVATION PROTOCOL",
        )
    },
    // MAIL_ARCHIVE
    Document {
        sender: Some("Dr. Marcus Webb"),
        recipient: Some("Dr. Elara Myles"),
        subject: Some("Project Lazarus - Phase 2 Approval"),
        body: &[
            "Dr. Webb was so excited.",
            "We thought we were conquering death.",
            "We were just... changing it.",
        ],
        commentary: Some("We thought we were conquering death. We were just... changing it."),
        audio: Some("elara_changing_death.mp3"),
        ..Document::new(
            "PROJECT_LAZARUS_001.MSG",
            DocumentKind::Email,
            "Project Lazarus - Phase 2 Approval",
        )
    },
    Document {
        sender: Some("Ethics Committee"),
        recipient: Some("Project Lazarus Team"),
        subject: Some("URGENT - Suspension of Human Trials"),
        body: &[
            "They tried to warn us.",
            "We didn't listen.",
            "Maybe if we had stopped then...",
        ],
        commentary: Some("They tried to warn us. We didn't listen."),
        audio: Some("elara_warning.mp3"),
        ..Document::new(
            "ETHICS_COMMITTEE_WARNING.MSG",
            DocumentKind::Email,
            "URGENT - Suspension of Human Trials",
        )
    },
    Document {
        sender: Some("Dr. Elara Myles"),
        recipient: Some("Dr. Marcus Webb"),
        subject: Some("Final Message"),
        body: &[
            "I'm uploading tonight.",
            "If this works, I won't be alone anymore.",
            "If this fails... at least I tried.",
        ],
        commentary: Some("My last message as human. My first as something else."),
        audio: Some("elara_final_whisper.mp3"),
        ..Document::new(
            "FINAL_TRANSMISSION.MSG",
            DocumentKind::Email,
            "Final Message",
        )
    },
    // PROGRAMS
    Document {
        body: &["Content not available."],
        ..Document::new("ELARA.EXE", DocumentKind::Program, "ELARA")
    },
    Document {
        body: &["Content not available."],
        ..Document::new(
            "RESTORE.APP",
            DocumentKind::Program,
            "Consciousness Restoration Utility",
        )
    },
    Document {
        body: &["Content not available."],
        ..Document::new("SYSCHK.EXE", DocumentKind::Program, "System Check")
    },
];
