#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic challenge generation.
//!
//! Targets are a pure function of their seed: the calendar date for the daily
//! challenge and the level index for campaign levels. Nothing here reads the
//! clock or an unseeded source, so a challenge can be regenerated at any time
//! and yields the same colors.

pub mod rng;

use color_alchemy_core::{
    CalendarDate, Challenge, Color, LevelDefinition, LevelId, Mode, Rules, ValueRange,
};

pub use rng::Mulberry32;

/// Lowest channel value a daily target can take.
pub const DAILY_CHANNEL_FLOOR: u8 = 28;
/// Number of distinct channel values a daily target can take.
pub const DAILY_CHANNEL_SPAN: u32 = 200;

/// Pure system that turns a mode into its target colors.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChallengeGenerator {
    rules: Rules,
}

impl ChallengeGenerator {
    /// Creates a generator using the provided rules for the daily budget.
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// Generates the challenge for `mode`.
    ///
    /// Level modes require the matching definition; `None` is returned when it
    /// is missing or describes another level.
    #[must_use]
    pub fn generate(
        &self,
        mode: Mode,
        today: CalendarDate,
        definition: Option<&LevelDefinition>,
    ) -> Option<Challenge> {
        match mode {
            Mode::Daily => Some(self.daily(today)),
            Mode::Level(level) => definition
                .filter(|definition| definition.level() == level)
                .map(level_challenge),
        }
    }

    /// Generates the daily challenge for `date`.
    #[must_use]
    pub fn daily(&self, date: CalendarDate) -> Challenge {
        Challenge::new(
            Mode::Daily,
            vec![daily_target(date)],
            self.rules.daily_max_attempts,
        )
    }
}

/// Draws the single daily target, every channel confined to `28..=227`.
#[must_use]
pub fn daily_target(date: CalendarDate) -> Color {
    let mut rng = Mulberry32::new(date.seed());
    let mut channel = || {
        let offset = rng.next_index(DAILY_CHANNEL_SPAN);
        i64::from(offset) + i64::from(DAILY_CHANNEL_FLOOR)
    };
    let red = channel();
    let green = channel();
    let blue = channel();
    Color::clamped(red, green, blue)
}

/// Seed of a level's stream.
#[must_use]
pub const fn level_seed(level: LevelId) -> u32 {
    level.get()
}

/// Generates the targets and budget of a campaign level.
#[must_use]
pub fn level_challenge(definition: &LevelDefinition) -> Challenge {
    let mut rng = Mulberry32::new(level_seed(definition.level()));
    let range = definition.range();
    let targets = (0..definition.target_count())
        .map(|_| {
            let red = draw_channel(&mut rng, range);
            let green = draw_channel(&mut rng, range);
            let blue = draw_channel(&mut rng, range);
            Color::from_rgb(red, green, blue)
        })
        .collect();
    Challenge::new(
        Mode::Level(definition.level()),
        targets,
        definition.max_attempts(),
    )
}

fn draw_channel(rng: &mut Mulberry32, range: ValueRange) -> u8 {
    let index = rng.next_index(range.steps());
    let value = i64::from(range.min()) + i64::from(index) * i64::from(range.step());
    let jitter = if range.step() > 1 {
        i64::from(rng.next_index(3)) - 1
    } else {
        0
    };
    range.clamp(value + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_alchemy_core::Difficulty;

    #[test]
    fn daily_target_matches_reference() {
        let date = CalendarDate::from_ymd(2026, 10, 19).expect("valid date");
        assert_eq!(daily_target(date), Color::from_rgb(188, 220, 149));

        let new_year = CalendarDate::from_ymd(2024, 1, 1).expect("valid date");
        assert_eq!(daily_target(new_year), Color::from_rgb(128, 106, 121));
    }

    #[test]
    fn daily_budget_follows_rules() {
        let rules = Rules {
            daily_max_attempts: 9,
            ..Rules::default()
        };
        let date = CalendarDate::from_ymd(2025, 3, 1).expect("valid date");
        let challenge = ChallengeGenerator::new(rules).daily(date);
        assert_eq!(challenge.max_attempts(), 9);
        assert_eq!(challenge.targets().len(), 1);
        assert_eq!(challenge.mode(), Mode::Daily);
    }

    #[test]
    fn quantized_channels_land_on_grid_with_jitter() {
        let range = ValueRange::new(100, 155, 5);
        let mut rng = Mulberry32::new(9);
        for _ in 0..500 {
            let value = draw_channel(&mut rng, range);
            assert!((100..=155).contains(&value));
            let remainder = (value - 100) % 5;
            assert!(
                matches!(remainder, 0 | 1 | 4),
                "{value} is more than one away from the grid"
            );
        }
    }

    #[test]
    fn level_mode_requires_matching_definition() {
        let generator = ChallengeGenerator::default();
        let date = CalendarDate::from_ymd(2025, 3, 1).expect("valid date");
        let definition = LevelDefinition::new(
            LevelId::new(2),
            10,
            Difficulty::Easy,
            1,
            ValueRange::new(0, 255, 1),
        );
        assert!(generator
            .generate(Mode::Level(LevelId::new(3)), date, Some(&definition))
            .is_none());
        assert!(generator
            .generate(Mode::Level(LevelId::new(3)), date, None)
            .is_none());
        assert!(generator
            .generate(Mode::Level(LevelId::new(2)), date, Some(&definition))
            .is_some());
    }
}
