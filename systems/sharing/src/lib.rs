#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure formatter for the human-readable result summary players paste elsewhere.

use color_alchemy_core::{ChallengeSummary, Phase, GAME_NAME};

const WON_EMOJI: &str = "🎯";
const LOST_EMOJI: &str = "😅";

/// Formats the share text for a finished challenge.
///
/// Returns `None` while the challenge is still being played, since there is
/// no score to report yet.
#[must_use]
pub fn share_text(summary: &ChallengeSummary) -> Option<String> {
    let (emoji, score) = match summary.phase {
        Phase::Won => (
            WON_EMOJI,
            format!("{}/{}", summary.attempts_used, summary.max_attempts),
        ),
        Phase::Exhausted => (LOST_EMOJI, format!("X/{}", summary.max_attempts)),
        Phase::Ready | Phase::InProgress => return None,
    };

    Some(format!(
        "{GAME_NAME} {mode} {emoji}\nScore: {score}\nHints: {hints}\nDate: {date}",
        mode = summary.mode,
        hints = summary.hints_used,
        date = summary.date,
    ))
}
