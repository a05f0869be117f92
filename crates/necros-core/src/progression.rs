//! Phase-progression rules.
//!
//! After every state-changing command the session asks whether the story
//! should move on. At most one step is taken per check, even when the
//! thresholds for several phases are already met.

use tracing::info;

use crate::content::INTRUSION_TRIGGER;
use crate::phase::Phase;
use crate::state::SessionState;

/// A phase change the rules allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Phase being left.
    pub from: Phase,
    /// Phase being entered.
    pub to: Phase,
    /// Personality gained on entry.
    pub personality_boost: u8,
}

/// The transition the current state qualifies for, if any.
pub fn check(state: &SessionState) -> Option<Transition> {
    let (to, personality_boost) = match state.phase {
        Phase::Boot if state.diaries_read >= 2 || state.emails_read >= 1 => (Phase::Recovery, 15),
        Phase::Recovery
            if state.diaries_read >= 3 && state.emails_read >= 1 && state.has_run_restore_app =>
        {
            (Phase::Glitch, 25)
        }
        Phase::Glitch
            if state.diaries_read >= 4
                && state.emails_read >= 2
                && state.has_read(INTRUSION_TRIGGER) =>
        {
            (Phase::Merge, 100)
        }
        _ => return None,
    };

    Some(Transition {
        from: state.phase,
        to,
        personality_boost,
    })
}

/// Apply the qualifying transition, returning the phase entered.
pub(crate) fn advance(state: &mut SessionState) -> Option<Phase> {
    let transition = check(state)?;
    state.phase = transition.to;
    state.raise_personality(transition.personality_boost);
    info!(
        from = %transition.from,
        to = %transition.to,
        personality = state.ai_personality_level,
        "phase advanced"
    );
    Some(transition.to)
}
