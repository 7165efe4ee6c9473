#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Closed-form difficulty curve for the fifty campaign levels.
//!
//! Levels fall into four bands. The first three ask for a single target on a
//! progressively finer grid with a shrinking attempt budget; the last band
//! asks for up to eight targets matched in sequence. All arithmetic is integer
//! so the table is identical on every platform.

use color_alchemy_core::{Difficulty, LevelDefinition, LevelId, ValueRange, LEVEL_COUNT};

const EASY_END: u32 = 15;
const MEDIUM_END: u32 = 25;
const HARD_END: u32 = 30;
const MAX_TARGETS: u32 = 8;

/// Immutable table of every level definition, ordered by level.
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    definitions: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// Builds the standard fifty-level campaign.
    #[must_use]
    pub fn standard() -> Self {
        let definitions = (0..LEVEL_COUNT)
            .filter_map(|index| definition(LevelId::new(index)))
            .collect();
        Self { definitions }
    }

    /// Definition of a single level.
    #[must_use]
    pub fn get(&self, level: LevelId) -> Option<&LevelDefinition> {
        let index = usize::try_from(level.get()).ok()?;
        self.definitions.get(index)
    }

    /// Iterator over all definitions in level order.
    pub fn iter(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.definitions.iter()
    }

    /// Number of levels in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Reports whether the catalog holds no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Computes the definition of `level`, or `None` outside the campaign.
#[must_use]
pub fn definition(level: LevelId) -> Option<LevelDefinition> {
    let index = level.get();
    let definition = match index {
        i if i < EASY_END => {
            let j = i;
            LevelDefinition::new(
                level,
                30 - j * 11 / 7,
                Difficulty::Easy,
                1,
                window(100 - j * 7, 155 + j * 7, 5 - j * 3 / 14),
            )
        }
        i if i < MEDIUM_END => {
            let j = i - EASY_END;
            LevelDefinition::new(
                level,
                20 - j * 4 / 3,
                Difficulty::Medium,
                1,
                window(30 - j * 3, 225 + j * 3, if j < 5 { 2 } else { 1 }),
            )
        }
        i if i < HARD_END => {
            let j = i - MEDIUM_END;
            LevelDefinition::new(
                level,
                12 - j * 7 / 4,
                Difficulty::Hard,
                1,
                window(0, 255, 1),
            )
        }
        i if i < LEVEL_COUNT => {
            let j = i - HARD_END;
            LevelDefinition::new(
                level,
                15 - j * 12 / 19,
                Difficulty::Expert,
                (j * 2 / 5 + 2).min(MAX_TARGETS),
                window(60u32.saturating_sub(j * 3), 195 + j * 3, 1),
            )
        }
        _ => return None,
    };
    Some(definition)
}

fn window(min: u32, max: u32, step: u32) -> ValueRange {
    let channel = |value: u32| value.min(u32::from(u8::MAX)) as u8;
    ValueRange::new(channel(min), channel(max), channel(step))
}
