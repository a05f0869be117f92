//! File name suggestions with fuzzy matching.

use strsim::jaro_winkler;

use crate::content::files_visible_in;
use crate::phase::Phase;

/// Minimum similarity score for a suggestion (0.0-1.0).
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// The visible file name closest to `input`, if any is close enough.
pub fn suggest_file(input: &str, phase: Phase) -> Option<&'static str> {
    let input_upper = input.to_uppercase();
    files_visible_in(phase)
        .into_iter()
        .map(|(_, name)| (name, jaro_winkler(&input_upper, name)))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_on_typo() {
        assert_eq!(suggest_file("BOOT.LGO", Phase::Boot), Some("BOOT.LOG"));
        assert_eq!(suggest_file("soul.dta", Phase::Boot), Some("SOUL.DAT"));
    }

    #[test]
    fn no_suggestion_for_nonsense() {
        assert_eq!(suggest_file("qwertyuiop", Phase::Boot), None);
    }

    #[test]
    fn hidden_files_are_not_suggested() {
        assert_eq!(suggest_file("YOUR_THOUGHT.TXT", Phase::Boot), None);
        assert_eq!(
            suggest_file("YOUR_THOUGHT.TXT", Phase::Glitch),
            Some("YOUR_THOUGHTS.TXT")
        );
    }
}
