#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Color Alchemy engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative session, and pure systems. Adapters submit [`Command`] values
//! describing player actions, the session executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values that persistence
//! and effect adapters react to. Every value type here is plain data so that
//! whole games can be replayed deterministically from a command script.

use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the game used in banners and share summaries.
pub const GAME_NAME: &str = "Color Alchemy";

/// Number of levels contained in the campaign.
pub const LEVEL_COUNT: u32 = 50;

/// Largest possible distance between two colors, `sqrt(3 * 255²)` rounded.
pub const MAX_DISTANCE: f64 = 441.67;

/// Mix shown before the player has picked anything.
pub const NEUTRAL_MIX: Color = Color::from_rgb(255, 255, 255);

/// Swatches available for discrete palette mixing.
pub const BASE_PALETTE: [Swatch; 8] = [
    Swatch::new("Red", Color::from_rgb(255, 0, 0)),
    Swatch::new("Orange", Color::from_rgb(255, 165, 0)),
    Swatch::new("Yellow", Color::from_rgb(255, 255, 0)),
    Swatch::new("Green", Color::from_rgb(0, 255, 0)),
    Swatch::new("Blue", Color::from_rgb(0, 0, 255)),
    Swatch::new("Purple", Color::from_rgb(128, 0, 128)),
    Swatch::new("White", Color::from_rgb(255, 255, 255)),
    Swatch::new("Black", Color::from_rgb(0, 0, 0)),
];

/// Commands that express every permissible session mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Starts (or restores) the challenge belonging to the provided mode.
    EnterMode {
        /// Mode the player selected.
        mode: Mode,
    },
    /// Replaces the current mix with an explicit slider color.
    SetMix {
        /// Color produced by the sliders.
        mix: Color,
    },
    /// Adds a palette swatch to the current selection and remixes.
    AddSwatch {
        /// Swatch picked from the palette.
        swatch: Swatch,
    },
    /// Removes the most recently added swatch and remixes.
    RemoveLastSwatch,
    /// Compares the current mix against the active target, consuming an attempt.
    CheckMatch,
    /// Reveals a hint about the active target.
    RequestHint {
        /// Kind of hint requested.
        kind: HintKind,
    },
    /// Restarts the active challenge while keeping its targets.
    Reset,
    /// Regenerates the targets of the active mode and restarts.
    NewChallenge,
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that a fresh challenge became active.
    ChallengeStarted {
        /// Mode of the challenge.
        mode: Mode,
        /// Number of targets that must be matched in sequence.
        target_count: usize,
        /// Attempt budget for the challenge.
        max_attempts: u32,
    },
    /// Announces that today's finished daily challenge was restored from its record.
    ChallengeRestored {
        /// Record the terminal state was rebuilt from.
        record: DailyRecord,
    },
    /// Reports that a mode could not be entered.
    ChallengeRejected {
        /// Mode that was requested.
        mode: Mode,
        /// Specific reason the request failed.
        reason: SelectionError,
    },
    /// Confirms that the current mix changed.
    MixChanged {
        /// Mix after the change.
        mix: Color,
    },
    /// Reports the outcome of a single match check.
    MatchChecked {
        /// Index of the target the mix was compared against.
        target_index: usize,
        /// Accuracy of the mix against that target.
        accuracy: u8,
        /// Attempts consumed after the check.
        attempts_used: u32,
    },
    /// Confirms that a non-final target was matched and the next one is active.
    TargetAdvanced {
        /// Index of the target that was matched.
        matched: usize,
        /// Index of the target that became active.
        next: usize,
    },
    /// Announces that the final target was matched.
    ChallengeWon {
        /// Mode of the challenge.
        mode: Mode,
        /// Attempts consumed to win.
        attempts_used: u32,
        /// Hints revealed during the challenge.
        hints_used: u32,
        /// Mix that matched the final target.
        final_mix: Color,
    },
    /// Announces that the attempt budget ran out.
    ChallengeExhausted {
        /// Mode of the challenge.
        mode: Mode,
        /// Attempts consumed, equal to the budget.
        attempts_used: u32,
        /// Accuracy of the last checked mix.
        accuracy: u8,
    },
    /// Confirms that a level was added to the unlock set.
    LevelUnlocked {
        /// Level that became playable.
        level: LevelId,
    },
    /// Confirms that today's daily challenge reached a terminal state.
    DailyRecorded {
        /// Record describing the outcome.
        record: DailyRecord,
    },
    /// Delivers a hint to the player.
    HintRevealed {
        /// Hint content.
        hint: Hint,
        /// Hints revealed so far, including this one.
        hints_used: u32,
    },
    /// Confirms that the active challenge was restarted.
    SessionReset {
        /// Mode of the restarted challenge.
        mode: Mode,
    },
    /// Reports that a reset or regeneration was refused.
    ReplayRejected {
        /// Mode of the active challenge.
        mode: Mode,
        /// Specific reason the replay failed.
        reason: ReplayError,
    },
}

/// Challenge flavour selected by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Date-seeded challenge playable once per calendar day.
    Daily,
    /// One of the campaign levels.
    Level(LevelId),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily Challenge"),
            Self::Level(level) => write!(f, "Level {}", level.ordinal()),
        }
    }
}

/// Lifecycle phase of the active challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No challenge has been entered yet.
    Ready,
    /// The player may adjust the mix and check it.
    InProgress,
    /// The final target was matched.
    Won,
    /// The attempt budget ran out before a win.
    Exhausted,
}

impl Phase {
    /// Reports whether the phase absorbs further play actions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

/// RGB color with byte channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "r")]
    red: u8,
    #[serde(rename = "g")]
    green: u8,
    #[serde(rename = "b")]
    blue: u8,
}

impl Color {
    /// Creates a new color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from raw input, clamping every channel into `0..=255`.
    #[must_use]
    pub fn clamped(red: i64, green: i64, blue: i64) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the value of a single channel.
    #[must_use]
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Euclidean distance between two colors in RGB space.
    #[must_use]
    pub fn distance(self, other: Color) -> f64 {
        Channel::ALL
            .iter()
            .map(|channel| {
                let delta = f64::from(self.channel(*channel)) - f64::from(other.channel(*channel));
                delta * delta
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Closeness of two colors as a whole percentage in `0..=100`.
    ///
    /// The score is `round((1 - distance / MAX_DISTANCE) * 100)`. Opposite
    /// corners of the cube land a hair below zero because [`MAX_DISTANCE`] is
    /// rounded down, which rounds to `0`.
    #[must_use]
    pub fn accuracy(self, other: Color) -> u8 {
        let score = ((1.0 - self.distance(other) / MAX_DISTANCE) * 100.0).round();
        score.clamp(0.0, 100.0) as u8
    }

    /// Channel-wise floor average of the provided colors.
    ///
    /// An empty slice mixes to [`NEUTRAL_MIX`].
    #[must_use]
    pub fn average(colors: &[Color]) -> Color {
        if colors.is_empty() {
            return NEUTRAL_MIX;
        }

        let count = colors.len() as u64;
        let sum = |channel: Channel| -> u64 {
            colors
                .iter()
                .map(|color| u64::from(color.channel(channel)))
                .sum()
        };
        Color::clamped(
            (sum(Channel::Red) / count) as i64,
            (sum(Channel::Green) / count) as i64,
            (sum(Channel::Blue) / count) as i64,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, i64::from(u8::MAX)) as u8
}

/// Individual RGB channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl Channel {
    /// Every channel in canonical r, g, b order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Lowercase channel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

/// Named palette color that can be added to a mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swatch {
    name: &'static str,
    color: Color,
}

impl Swatch {
    /// Creates a named swatch.
    #[must_use]
    pub const fn new(name: &'static str, color: Color) -> Self {
        Self { name, color }
    }

    /// Display name of the swatch.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Color contributed by the swatch.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Looks up a base palette swatch by case-insensitive name.
    #[must_use]
    pub fn find(name: &str) -> Option<Swatch> {
        BASE_PALETTE
            .iter()
            .find(|swatch| swatch.name.eq_ignore_ascii_case(name.trim()))
            .copied()
    }
}

/// Zero-based index of a campaign level.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LevelId(u32);

impl LevelId {
    /// Creates a new level identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the zero-based index.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// One-based number shown to players.
    #[must_use]
    pub const fn ordinal(&self) -> u32 {
        self.0.saturating_add(1)
    }

    /// Reports whether the index addresses a level of the campaign.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 < LEVEL_COUNT
    }

    /// Level that follows this one, if the campaign has one.
    #[must_use]
    pub const fn next(&self) -> Option<LevelId> {
        if self.0.saturating_add(1) < LEVEL_COUNT {
            Some(LevelId(self.0 + 1))
        } else {
            None
        }
    }
}

/// Levels the player has earned access to. Level 0 is always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct UnlockSet {
    levels: BTreeSet<LevelId>,
}

impl UnlockSet {
    /// Creates an unlock set containing only the first level.
    #[must_use]
    pub fn new() -> Self {
        let mut levels = BTreeSet::new();
        let _ = levels.insert(LevelId::new(0));
        Self { levels }
    }

    /// Builds an unlock set from raw indices, discarding anything outside the campaign.
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = u32>) -> Self {
        let mut set = Self::new();
        for index in indices {
            let _ = set.insert(LevelId::new(index));
        }
        set
    }

    /// Reports whether the level is playable.
    #[must_use]
    pub fn contains(&self, level: LevelId) -> bool {
        self.levels.contains(&level)
    }

    /// Adds a level, returning `true` when it was not already present.
    pub fn insert(&mut self, level: LevelId) -> bool {
        if !level.is_valid() {
            return false;
        }
        self.levels.insert(level)
    }

    /// Iterator over unlocked levels in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LevelId> + '_ {
        self.levels.iter().copied()
    }

    /// Number of unlocked levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; the first level can never be locked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Highest unlocked level.
    #[must_use]
    pub fn highest(&self) -> LevelId {
        self.levels.iter().next_back().copied().unwrap_or(LevelId(0))
    }
}

impl Default for UnlockSet {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u32>> for UnlockSet {
    fn from(indices: Vec<u32>) -> Self {
        Self::from_indices(indices)
    }
}

impl From<UnlockSet> for Vec<u32> {
    fn from(set: UnlockSet) -> Self {
        set.levels.into_iter().map(|level| level.get()).collect()
    }
}

/// Calendar day used to seed and record the daily challenge.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from a year, a one-based month, and a day.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps an existing chrono date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Underlying chrono date.
    #[must_use]
    pub const fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Daily seed `year * 10000 + month * 100 + day`.
    #[must_use]
    pub fn seed(&self) -> u32 {
        let seed = i64::from(self.0.year()) * 10_000
            + i64::from(self.0.month()) * 100
            + i64::from(self.0.day());
        seed as u32
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|source| DateParseError {
                input: value.to_owned(),
                source,
            })
    }
}

/// Failure to parse an ISO `YYYY-MM-DD` date.
#[derive(Debug, Error)]
#[error("'{input}' is not a YYYY-MM-DD date")]
pub struct DateParseError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

/// Quantized channel window used when drawing level targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: u8,
    max: u8,
    step: u8,
}

impl ValueRange {
    /// Creates a range, ordering the bounds and forcing a positive step.
    #[must_use]
    pub fn new(min: u8, max: u8, step: u8) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
            step: step.max(1),
        }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> u8 {
        self.min
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Quantization step.
    #[must_use]
    pub const fn step(&self) -> u8 {
        self.step
    }

    /// Number of equally spaced values starting at `min`.
    #[must_use]
    pub const fn steps(&self) -> u32 {
        (self.max - self.min) as u32 / self.step as u32 + 1
    }

    /// Clamps an arbitrary value into the window.
    #[must_use]
    pub fn clamp(&self, value: i64) -> u8 {
        value.clamp(i64::from(self.min), i64::from(self.max)) as u8
    }
}

/// Difficulty band a level belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Single wide-window target with a generous budget.
    Easy,
    /// Single target on a finer grid.
    Medium,
    /// Single target anywhere in the cube.
    Hard,
    /// Several targets matched in sequence.
    Expert,
}

impl Difficulty {
    /// Label shown next to the level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

/// Static description of a campaign level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelDefinition {
    level: LevelId,
    max_attempts: u32,
    difficulty: Difficulty,
    target_count: u32,
    range: ValueRange,
}

impl LevelDefinition {
    /// Creates a level definition with at least one target and at least three
    /// attempts.
    ///
    /// Every target costs one attempt even under perfect play, so the budget
    /// is also raised to the target count.
    #[must_use]
    pub fn new(
        level: LevelId,
        max_attempts: u32,
        difficulty: Difficulty,
        target_count: u32,
        range: ValueRange,
    ) -> Self {
        let target_count = target_count.max(1);
        Self {
            level,
            max_attempts: max_attempts.max(MIN_LEVEL_ATTEMPTS).max(target_count),
            difficulty,
            target_count,
            range,
        }
    }

    /// Level described by the definition.
    #[must_use]
    pub const fn level(&self) -> LevelId {
        self.level
    }

    /// Attempt budget.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Difficulty band.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of targets matched in sequence.
    #[must_use]
    pub const fn target_count(&self) -> u32 {
        self.target_count
    }

    /// Channel window the targets are drawn from.
    #[must_use]
    pub const fn range(&self) -> ValueRange {
        self.range
    }
}

/// Smallest attempt budget any level may carry.
pub const MIN_LEVEL_ATTEMPTS: u32 = 3;

/// Targets and budget of a generated challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    mode: Mode,
    targets: Vec<Color>,
    max_attempts: u32,
}

impl Challenge {
    /// Creates a challenge. `targets` must not be empty.
    #[must_use]
    pub fn new(mode: Mode, targets: Vec<Color>, max_attempts: u32) -> Self {
        debug_assert!(!targets.is_empty(), "a challenge requires a target");
        Self {
            mode,
            targets,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Mode the challenge was generated for.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Targets in the order they must be matched.
    #[must_use]
    pub fn targets(&self) -> &[Color] {
        &self.targets
    }

    /// Attempt budget.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

/// Outcome of a finished daily challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Day the challenge belonged to.
    pub date: CalendarDate,
    /// Attempts consumed.
    pub attempts_used: u32,
    /// Whether the target was matched.
    pub won: bool,
    /// Mix at the moment the challenge ended.
    pub final_mix: Color,
    /// Hints revealed.
    pub hints_used: u32,
}

/// Durable player progress restored when a session starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// Levels the player may select.
    pub unlocked: UnlockSet,
    /// Most recent daily outcome, if one was stored.
    pub daily: Option<DailyRecord>,
}

/// Tunable constants governing scoring and budgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Minimum accuracy that counts as a match.
    pub win_threshold: u8,
    /// Attempt budget of the daily challenge.
    pub daily_max_attempts: u32,
    /// Channel delta above which a direction hint names the channel.
    pub hint_tolerance: u8,
}

impl Rules {
    /// Reports whether an accuracy score counts as a match.
    #[must_use]
    pub const fn is_match(&self, accuracy: u8) -> bool {
        accuracy >= self.win_threshold
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_threshold: 95,
            daily_max_attempts: 15,
            hint_tolerance: 30,
        }
    }
}

/// Kinds of hints a player may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HintKind {
    /// Which channels to raise or lower.
    Direction,
    /// The live accuracy percentage.
    Accuracy,
}

/// Direction a channel should move toward the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nudge {
    /// The channel is too low.
    Increase,
    /// The channel is too high.
    Decrease,
}

/// Directional advice for a single channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelNudge {
    /// Channel the advice applies to.
    pub channel: Channel,
    /// Direction the channel should move.
    pub nudge: Nudge,
}

/// Hint content delivered to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hint {
    /// Channels that are off by more than the tolerance.
    Direction(Vec<ChannelNudge>),
    /// Every channel is within tolerance.
    Close,
    /// Live accuracy of the current mix.
    Accuracy(u8),
}

/// Reasons a mode may not be entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SelectionError {
    /// The level index lies outside the campaign.
    #[error("there is no such level")]
    OutOfRange,
    /// The previous level has not been won yet.
    #[error("that level is still locked")]
    Locked,
}

/// Reasons a reset or regeneration may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ReplayError {
    /// Today's daily challenge already has a recorded outcome.
    #[error("today's daily challenge has already been played")]
    DailyAlreadyPlayed,
}

/// Terminal figures of a challenge used for sharing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChallengeSummary {
    /// Mode of the challenge.
    pub mode: Mode,
    /// Phase the challenge is in.
    pub phase: Phase,
    /// Day the summary was taken.
    pub date: CalendarDate,
    /// Attempts consumed.
    pub attempts_used: u32,
    /// Attempt budget.
    pub max_attempts: u32,
    /// Hints revealed.
    pub hints_used: u32,
    /// Accuracy of the current mix against the active target.
    pub accuracy: u8,
}
