//! Hint derivation from the active target and the current mix.

use color_alchemy_core::{Channel, ChannelNudge, Color, Hint, Nudge};

/// Names every channel that is off by more than `tolerance`, or reports the mix as close.
pub(crate) fn direction(target: Color, mix: Color, tolerance: u8) -> Hint {
    let nudges: Vec<ChannelNudge> = Channel::ALL
        .iter()
        .filter_map(|&channel| {
            let delta = i16::from(target.channel(channel)) - i16::from(mix.channel(channel));
            if delta.abs() <= i16::from(tolerance) {
                return None;
            }
            let nudge = if delta > 0 {
                Nudge::Increase
            } else {
                Nudge::Decrease
            };
            Some(ChannelNudge { channel, nudge })
        })
        .collect();

    if nudges.is_empty() {
        Hint::Close
    } else {
        Hint::Direction(nudges)
    }
}
