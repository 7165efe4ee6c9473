//! Text rendering of session events and state.

use color_alchemy_core::{Color, Event, Hint, LevelDefinition, Nudge, UnlockSet};
use color_alchemy_session::ChallengeState;

/// Terminal block painted with the color using 24-bit escapes.
pub(crate) fn swatch(color: Color) -> String {
    format!(
        "\x1b[48;2;{};{};{}m      \x1b[0m",
        color.red(),
        color.green(),
        color.blue()
    )
}

/// One-line description of an event, if it is worth printing.
pub(crate) fn describe(event: &Event) -> Option<String> {
    let text = match event {
        Event::ChallengeStarted {
            mode,
            target_count,
            max_attempts,
        } => {
            let plural = if *target_count == 1 { "" } else { "s" };
            format!("{mode}: match {target_count} color{plural} within {max_attempts} attempts.")
        }
        Event::ChallengeRestored { record } => {
            let outcome = if record.won {
                format!("solved in {} attempts", record.attempts_used)
            } else {
                String::from("not solved")
            };
            format!("Today's daily challenge is already finished: {outcome}.")
        }
        Event::ChallengeRejected { mode, reason } => format!("Cannot play {mode}: {reason}."),
        Event::MixChanged { .. } => return None,
        Event::MatchChecked {
            accuracy,
            attempts_used,
            ..
        } => format!("Attempt {attempts_used}: {accuracy}% match."),
        Event::TargetAdvanced { matched, next } => format!(
            "Color {} matched! On to color {}.",
            matched + 1,
            next + 1
        ),
        Event::ChallengeWon {
            mode,
            attempts_used,
            hints_used,
            ..
        } => format!("{mode} solved in {attempts_used} attempts using {hints_used} hints."),
        Event::ChallengeExhausted { accuracy, .. } => {
            format!("Out of attempts. Your last mix scored {accuracy}%.")
        }
        Event::LevelUnlocked { level } => format!("Level {} unlocked.", level.ordinal()),
        Event::DailyRecorded { .. } => String::from("Daily result saved."),
        Event::HintRevealed { hint, hints_used } => {
            format!("Hint #{hints_used}: {}", describe_hint(hint))
        }
        Event::SessionReset { mode } => format!("{mode} restarted."),
        Event::ReplayRejected { reason, .. } => format!("Not allowed: {reason}."),
    };
    Some(text)
}

fn describe_hint(hint: &Hint) -> String {
    match hint {
        Hint::Direction(nudges) => nudges
            .iter()
            .map(|advice| {
                let verb = match advice.nudge {
                    Nudge::Increase => "more",
                    Nudge::Decrease => "less",
                };
                format!("{verb} {}", advice.channel.name())
            })
            .collect::<Vec<_>>()
            .join(", "),
        Hint::Close => String::from("you're close, fine-tune the mix"),
        Hint::Accuracy(accuracy) => format!("your mix is a {accuracy}% match"),
    }
}

/// Multi-line view of the target, the mix and the remaining budget.
pub(crate) fn status(state: &ChallengeState) -> String {
    let target = state
        .current_target()
        .map_or_else(String::new, |color| format!("{} {color}", swatch(color)));
    let mix = state.mix();
    let mut text = format!(
        "Target {}/{}: {target}\nMix:      {} {mix}  ({}%)\nAttempts: {}/{}  Hints: {}",
        state.target_index() + 1,
        state.targets().len(),
        swatch(mix),
        state.accuracy(),
        state.attempts_used(),
        state.max_attempts(),
        state.hints_used(),
    );
    if !state.selection().is_empty() {
        let names: Vec<&str> = state.selection().iter().map(|swatch| swatch.name()).collect();
        text.push_str(&format!("\nPalette:  {}", names.join(" + ")));
    }
    text
}

/// Catalog row with lock state.
pub(crate) fn level_row(definition: &LevelDefinition, unlocked: &UnlockSet) -> String {
    let range = definition.range();
    let lock = if unlocked.contains(definition.level()) {
        "open"
    } else {
        "locked"
    };
    format!(
        "{:>2}  {:<6}  {} target(s)  {:>2} attempts  channels {:>3}-{:<3} step {}  [{lock}]",
        definition.level().ordinal(),
        definition.difficulty().label(),
        definition.target_count(),
        definition.max_attempts(),
        range.min(),
        range.max(),
        range.step(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_alchemy_core::{Channel, ChannelNudge, LevelId, Mode, SelectionError};

    #[test]
    fn direction_hints_read_naturally() {
        let event = Event::HintRevealed {
            hint: Hint::Direction(vec![
                ChannelNudge {
                    channel: Channel::Red,
                    nudge: Nudge::Increase,
                },
                ChannelNudge {
                    channel: Channel::Blue,
                    nudge: Nudge::Decrease,
                },
            ]),
            hints_used: 2,
        };
        assert_eq!(
            describe(&event).as_deref(),
            Some("Hint #2: more red, less blue")
        );
    }

    #[test]
    fn rejections_carry_the_reason() {
        let event = Event::ChallengeRejected {
            mode: Mode::Level(LevelId::new(4)),
            reason: SelectionError::Locked,
        };
        assert_eq!(
            describe(&event).as_deref(),
            Some("Cannot play Level 5: that level is still locked.")
        );
    }

    #[test]
    fn mix_changes_are_silent() {
        let event = Event::MixChanged {
            mix: Color::from_rgb(1, 2, 3),
        };
        assert!(describe(&event).is_none());
    }

    #[test]
    fn level_rows_show_lock_state() {
        let definition = color_alchemy_system_catalog::definition(LevelId::new(1))
            .expect("level 2 exists");
        let row = level_row(&definition, &UnlockSet::new());
        assert!(row.starts_with(" 2  Easy"), "unexpected row {row:?}");
        assert!(row.ends_with("[locked]"));
    }
}
