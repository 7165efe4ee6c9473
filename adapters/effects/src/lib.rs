#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fire-and-forget collaborators reacting to session outcomes.
//!
//! Nothing in this crate can fail a game: celebration and feedback errors are
//! logged and swallowed at the boundary.

mod feedback;

use std::io::Write;

use color_alchemy_core::{Event, Mode};
use thiserror::Error;
use tracing::{debug, warn};

pub use feedback::{submit_feedback, Feedback, FeedbackSink, JsonLinesSink, Rating};

/// Failure raised by an effect collaborator.
#[derive(Debug, Error)]
pub enum EffectError {
    /// Rating outside the accepted scale.
    #[error("rating {0} is outside 0..={max}", max = Rating::MAX)]
    InvalidRating(u8),
    /// Writing to the underlying output failed.
    #[error("effect output failed")]
    Io(#[from] std::io::Error),
    /// Feedback could not be serialized.
    #[error("failed to encode feedback")]
    Encode(#[from] serde_json::Error),
}

/// Details of a won challenge handed to a celebration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Victory {
    /// Mode that was won.
    pub mode: Mode,
    /// Attempts it took.
    pub attempts_used: u32,
    /// Hints revealed along the way.
    pub hints_used: u32,
}

/// Visual or audible reward played when a challenge is won.
pub trait Celebration {
    /// Plays the celebration once.
    fn celebrate(&mut self, victory: &Victory) -> Result<(), EffectError>;
}

/// Dispatches session events to a celebration.
#[derive(Debug)]
pub struct Effects<C> {
    celebration: C,
}

impl<C: Celebration> Effects<C> {
    /// Wraps the provided celebration.
    pub fn new(celebration: C) -> Self {
        Self { celebration }
    }

    /// Read access to the wrapped celebration.
    pub fn celebration(&self) -> &C {
        &self.celebration
    }

    /// Fires the celebration once per `ChallengeWon` event, returning how many
    /// celebrations completed.
    pub fn handle(&mut self, events: &[Event]) -> usize {
        let mut fired = 0;
        for event in events {
            let Event::ChallengeWon {
                mode,
                attempts_used,
                hints_used,
                ..
            } = *event
            else {
                continue;
            };
            let victory = Victory {
                mode,
                attempts_used,
                hints_used,
            };
            match self.celebration.celebrate(&victory) {
                Ok(()) => {
                    fired += 1;
                    debug!(%mode, attempts_used, "celebration played");
                }
                Err(error) => warn!(%error, %mode, "celebration failed"),
            }
        }
        fired
    }
}

/// Celebration printing a confetti banner to a text output.
#[derive(Debug)]
pub struct Banner<W> {
    out: W,
}

impl<W: Write> Banner<W> {
    /// Prints banners to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the banner, returning the output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Celebration for Banner<W> {
    fn celebrate(&mut self, victory: &Victory) -> Result<(), EffectError> {
        writeln!(
            self.out,
            "🎉 {} solved in {} attempt{}! 🎉",
            victory.mode,
            victory.attempts_used,
            if victory.attempts_used == 1 { "" } else { "s" },
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_alchemy_core::{Color, LevelId};

    #[derive(Default)]
    struct Counting {
        calls: Vec<Victory>,
        fail: bool,
    }

    impl Celebration for Counting {
        fn celebrate(&mut self, victory: &Victory) -> Result<(), EffectError> {
            self.calls.push(*victory);
            if self.fail {
                Err(EffectError::Io(std::io::Error::other("no display")))
            } else {
                Ok(())
            }
        }
    }

    fn won(mode: Mode) -> Event {
        Event::ChallengeWon {
            mode,
            attempts_used: 3,
            hints_used: 1,
            final_mix: Color::from_rgb(1, 2, 3),
        }
    }

    #[test]
    fn fires_once_per_win() {
        let mut effects = Effects::new(Counting::default());
        let fired = effects.handle(&[
            Event::MixChanged {
                mix: Color::from_rgb(0, 0, 0),
            },
            won(Mode::Daily),
            Event::LevelUnlocked {
                level: LevelId::new(1),
            },
        ]);
        assert_eq!(fired, 1);
        assert_eq!(
            effects.celebration().calls,
            vec![Victory {
                mode: Mode::Daily,
                attempts_used: 3,
                hints_used: 1,
            }]
        );
    }

    #[test]
    fn failures_are_swallowed() {
        let mut effects = Effects::new(Counting {
            calls: Vec::new(),
            fail: true,
        });
        let fired = effects.handle(&[won(Mode::Level(LevelId::new(4)))]);
        assert_eq!(fired, 0);
        assert_eq!(effects.celebration().calls.len(), 1);
    }

    #[test]
    fn banner_names_the_mode() {
        let mut banner = Banner::new(Vec::new());
        banner
            .celebrate(&Victory {
                mode: Mode::Level(LevelId::new(4)),
                attempts_used: 1,
                hints_used: 0,
            })
            .expect("write to buffer");
        let text = String::from_utf8(banner.into_inner()).expect("utf8");
        assert_eq!(text, "🎉 Level 5 solved in 1 attempt! 🎉\n");
    }
}
