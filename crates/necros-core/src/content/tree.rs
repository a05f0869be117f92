//! The fixed directory tree.
//!
//! Paths are DOS style (`C:\SYSTEM`) and stored upper case. Lookups ignore
//! case. Only one level of nesting exists below the root.

use crate::phase::Phase;

/// The root directory.
pub const ROOT: &str = "C:\\";

static DIRECTORIES: &[(&str, &[&str])] = &[
    (ROOT, &["PERSONAL_LOGS", "SYSTEM", "MAIL_ARCHIVE", "PROGRAMS"]),
    (
        "C:\\PERSONAL_LOGS",
        &[
            "DIARY_1983_06_12.TXT",
            "DIARY_1983_08_15.TXT",
            "DIARY_1983_11_03.TXT",
            "DIARY_1984_01_20.TXT",
        ],
    ),
    (
        "C:\\SYSTEM",
        &["BOOT.LOG", "ERROR.LOG", "SOUL.DAT", "BACKUP_PROTOCOL.SYS"],
    ),
    (
        "C:\\MAIL_ARCHIVE",
        &[
            "PROJECT_LAZARUS_001.MSG",
            "ETHICS_COMMITTEE_WARNING.MSG",
            "FINAL_TRANSMISSION.MSG",
        ],
    ),
    ("C:\\PROGRAMS", &["ELARA.EXE", "RESTORE.APP", "SYSCHK.EXE"]),
];

/// Files that appear while ELARA is in the Glitch phase.
static GLITCH_FILES: &[(&str, &[&str])] =
    &[("C:\\PERSONAL_LOGS", &["YOUR_THOUGHTS.TXT", "SHARED_DREAMS.TXT"])];

/// All directory paths, root first.
pub fn directories() -> impl Iterator<Item = &'static str> {
    DIRECTORIES.iter().map(|(path, _)| *path)
}

/// The canonical spelling of a directory path, if it exists.
pub fn canonical_directory(path: &str) -> Option<&'static str> {
    directories()
        .chain(GLITCH_FILES.iter().map(|(path, _)| *path))
        .find(|p| p.eq_ignore_ascii_case(path))
}

/// Whether `path` names a directory.
pub fn is_directory(path: &str) -> bool {
    canonical_directory(path).is_some()
}

/// The canonical name of a directory directly below the root, e.g. `SYSTEM`.
pub fn top_level_directory(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return None;
    }
    let path = canonical_directory(&child_path(ROOT, name))?;
    path.strip_prefix(ROOT)
}

/// Entries of a directory as seen in the given phase.
///
/// Unknown paths list as empty.
pub fn listing(path: &str, phase: Phase) -> Vec<&'static str> {
    let mut entries: Vec<&'static str> = DIRECTORIES
        .iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(path))
        .map(|(_, children)| children.to_vec())
        .unwrap_or_default();

    if phase == Phase::Glitch {
        for (p, extra) in GLITCH_FILES {
            if p.eq_ignore_ascii_case(path) {
                entries.extend_from_slice(extra);
            }
        }
    }

    entries
}

/// Every file (not directory) visible in the given phase, with its directory.
pub fn files_visible_in(phase: Phase) -> Vec<(&'static str, &'static str)> {
    directories()
        .flat_map(|dir| {
            listing(dir, phase)
                .into_iter()
                .filter(move |name| !is_directory(&child_path(dir, name)))
                .map(move |name| (dir, name))
        })
        .collect()
}

/// Find a visible file by name, preferring the current directory.
///
/// Returns the directory and canonical file name.
pub fn locate_file(
    current: &str,
    name: &str,
    phase: Phase,
) -> Option<(&'static str, &'static str)> {
    let visible = files_visible_in(phase);
    visible
        .iter()
        .find(|(dir, file)| dir.eq_ignore_ascii_case(current) && file.eq_ignore_ascii_case(name))
        .or_else(|| visible.iter().find(|(_, file)| file.eq_ignore_ascii_case(name)))
        .copied()
}

/// Resolve a `cd` argument against the current directory.
///
/// `..` always goes to the root. `C:\...` and `\...` paths start at the root.
/// Anything else is a child of the current directory. Returns `None` when the
/// target is not a directory.
pub fn resolve_path(current: &str, arg: &str) -> Option<&'static str> {
    let arg = arg.trim();
    let target = if arg == ".." {
        ROOT.to_string()
    } else if let Some(rest) = strip_drive(arg) {
        child_path(ROOT, rest.trim_matches(['\\', '/']))
    } else if let Some(rest) = arg.strip_prefix(['\\', '/']) {
        child_path(ROOT, rest.trim_matches(['\\', '/']))
    } else {
        child_path(current, arg.trim_end_matches(['\\', '/']))
    };
    canonical_directory(&target)
}

fn strip_drive(arg: &str) -> Option<&str> {
    let drive = arg.get(..2)?;
    drive.eq_ignore_ascii_case("c:").then_some(&arg[2..])
}

fn child_path(dir: &str, name: &str) -> String {
    if name.is_empty() {
        dir.to_string()
    } else if dir.ends_with('\\') {
        format!("{dir}{name}")
    } else {
        format!("{dir}\\{name}")
    }
}
