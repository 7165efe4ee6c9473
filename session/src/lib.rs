#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game session state for Color Alchemy.
//!
//! A [`Session`] owns the active challenge, the unlock set and today's daily
//! record. Adapters mutate it exclusively through [`apply`], which appends the
//! resulting [`Event`] values to an output buffer, and read it through the
//! [`query`] module.

mod hints;

use color_alchemy_core::{
    CalendarDate, Challenge, Color, Command, DailyRecord, Event, Hint, HintKind, Mode, Phase,
    Progress, ReplayError, Rules, SelectionError, Swatch, UnlockSet, NEUTRAL_MIX,
};
use color_alchemy_system_catalog::LevelCatalog;
use color_alchemy_system_generator::ChallengeGenerator;

/// Play state of the challenge currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeState {
    challenge: Challenge,
    target_index: usize,
    mix: Color,
    selection: Vec<Swatch>,
    attempts_used: u32,
    hints_used: u32,
    phase: Phase,
}

impl ChallengeState {
    fn new(challenge: Challenge) -> Self {
        Self {
            challenge,
            target_index: 0,
            mix: NEUTRAL_MIX,
            selection: Vec::new(),
            attempts_used: 0,
            hints_used: 0,
            phase: Phase::InProgress,
        }
    }

    fn restored(challenge: Challenge, record: &DailyRecord) -> Self {
        let target_index = challenge.targets().len().saturating_sub(1);
        Self {
            challenge,
            target_index,
            mix: record.final_mix,
            selection: Vec::new(),
            attempts_used: record.attempts_used,
            hints_used: record.hints_used,
            phase: if record.won {
                Phase::Won
            } else {
                Phase::Exhausted
            },
        }
    }

    fn restart(&mut self) {
        self.target_index = 0;
        self.mix = NEUTRAL_MIX;
        self.selection.clear();
        self.attempts_used = 0;
        self.hints_used = 0;
        self.phase = Phase::InProgress;
    }

    fn remix(&mut self) -> Color {
        let colors: Vec<Color> = self.selection.iter().map(Swatch::color).collect();
        self.mix = Color::average(&colors);
        self.mix
    }

    /// Mode the challenge belongs to.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.challenge.mode()
    }

    /// Every target in matching order.
    #[must_use]
    pub fn targets(&self) -> &[Color] {
        self.challenge.targets()
    }

    /// Index of the target currently being matched.
    #[must_use]
    pub const fn target_index(&self) -> usize {
        self.target_index
    }

    /// Target currently being matched.
    #[must_use]
    pub fn current_target(&self) -> Option<Color> {
        self.challenge.targets().get(self.target_index).copied()
    }

    /// Player's current mix.
    #[must_use]
    pub const fn mix(&self) -> Color {
        self.mix
    }

    /// Swatches composing the mix when the palette is in use.
    #[must_use]
    pub fn selection(&self) -> &[Swatch] {
        &self.selection
    }

    /// Attempts consumed so far.
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Attempt budget of the challenge.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.challenge.max_attempts()
    }

    /// Attempts still available.
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.challenge
            .max_attempts()
            .saturating_sub(self.attempts_used)
    }

    /// Hints revealed so far.
    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Live accuracy of the mix against the current target.
    #[must_use]
    pub fn accuracy(&self) -> u8 {
        self.current_target()
            .map_or(0, |target| self.mix.accuracy(target))
    }
}

/// Represents the authoritative Color Alchemy session.
#[derive(Debug)]
pub struct Session {
    rules: Rules,
    today: CalendarDate,
    catalog: LevelCatalog,
    generator: ChallengeGenerator,
    unlocked: UnlockSet,
    daily_record: Option<DailyRecord>,
    active: Option<ChallengeState>,
}

impl Session {
    /// Creates a session for `today` from previously persisted progress.
    ///
    /// A daily record belonging to another day is discarded.
    #[must_use]
    pub fn new(today: CalendarDate, rules: Rules, progress: Progress) -> Self {
        Self {
            rules,
            today,
            catalog: LevelCatalog::standard(),
            generator: ChallengeGenerator::new(rules),
            unlocked: progress.unlocked,
            daily_record: progress.daily.filter(|record| record.date == today),
            active: None,
        }
    }

    fn playing_mut(&mut self) -> Option<&mut ChallengeState> {
        self.active
            .as_mut()
            .filter(|state| state.phase == Phase::InProgress)
    }

    fn check_entry(&self, mode: Mode) -> Result<(), SelectionError> {
        match mode {
            Mode::Daily => Ok(()),
            Mode::Level(level) if !level.is_valid() => Err(SelectionError::OutOfRange),
            Mode::Level(level) if !self.unlocked.contains(level) => Err(SelectionError::Locked),
            Mode::Level(_) => Ok(()),
        }
    }

    fn check_replay(&self, mode: Mode) -> Result<(), ReplayError> {
        if mode == Mode::Daily && self.daily_record.is_some() {
            Err(ReplayError::DailyAlreadyPlayed)
        } else {
            Ok(())
        }
    }

    fn generate(&self, mode: Mode) -> Option<Challenge> {
        let definition = match mode {
            Mode::Daily => None,
            Mode::Level(level) => self.catalog.get(level),
        };
        self.generator.generate(mode, self.today, definition)
    }

    fn start(&mut self, challenge: Challenge, out_events: &mut Vec<Event>) {
        out_events.push(Event::ChallengeStarted {
            mode: challenge.mode(),
            target_count: challenge.targets().len(),
            max_attempts: challenge.max_attempts(),
        });
        self.active = Some(ChallengeState::new(challenge));
    }

    fn enter(&mut self, mode: Mode, out_events: &mut Vec<Event>) {
        if let Err(reason) = self.check_entry(mode) {
            out_events.push(Event::ChallengeRejected { mode, reason });
            return;
        }

        let Some(challenge) = self.generate(mode) else {
            out_events.push(Event::ChallengeRejected {
                mode,
                reason: SelectionError::OutOfRange,
            });
            return;
        };

        if let (Mode::Daily, Some(record)) = (mode, self.daily_record) {
            self.active = Some(ChallengeState::restored(challenge, &record));
            out_events.push(Event::ChallengeRestored { record });
            return;
        }

        self.start(challenge, out_events);
    }

    fn check_match(&mut self, out_events: &mut Vec<Event>) {
        let (rules, today) = (self.rules, self.today);
        let Some(state) = self.playing_mut() else {
            return;
        };
        let Some(target) = state.current_target() else {
            return;
        };

        state.attempts_used = state.attempts_used.saturating_add(1);
        let accuracy = state.mix.accuracy(target);
        out_events.push(Event::MatchChecked {
            target_index: state.target_index,
            accuracy,
            attempts_used: state.attempts_used,
        });

        let matched = rules.is_match(accuracy);
        let is_last = state.target_index + 1 >= state.targets().len();

        if matched && !is_last {
            let previous = state.target_index;
            state.target_index += 1;
            state.selection.clear();
            state.mix = NEUTRAL_MIX;
            out_events.push(Event::TargetAdvanced {
                matched: previous,
                next: state.target_index,
            });
            out_events.push(Event::MixChanged { mix: state.mix });
        } else if matched {
            state.phase = Phase::Won;
            out_events.push(Event::ChallengeWon {
                mode: state.mode(),
                attempts_used: state.attempts_used,
                hints_used: state.hints_used,
                final_mix: state.mix,
            });
        }

        if state.phase == Phase::InProgress && state.attempts_used >= state.max_attempts() {
            state.phase = Phase::Exhausted;
            out_events.push(Event::ChallengeExhausted {
                mode: state.mode(),
                attempts_used: state.attempts_used,
                accuracy,
            });
        }

        let (phase, mode) = (state.phase, state.mode());
        let record = DailyRecord {
            date: today,
            attempts_used: state.attempts_used,
            won: phase == Phase::Won,
            final_mix: state.mix,
            hints_used: state.hints_used,
        };

        match (phase, mode) {
            (Phase::Won, Mode::Level(level)) => {
                if let Some(next) = level.next() {
                    if self.unlocked.insert(next) {
                        out_events.push(Event::LevelUnlocked { level: next });
                    }
                }
            }
            (Phase::Won | Phase::Exhausted, Mode::Daily) => {
                self.daily_record = Some(record);
                out_events.push(Event::DailyRecorded { record });
            }
            _ => {}
        }
    }

    fn reveal_hint(&mut self, kind: HintKind, out_events: &mut Vec<Event>) {
        let tolerance = self.rules.hint_tolerance;
        let Some(state) = self.playing_mut() else {
            return;
        };
        let Some(target) = state.current_target() else {
            return;
        };

        state.hints_used = state.hints_used.saturating_add(1);
        let hint = match kind {
            HintKind::Direction => hints::direction(target, state.mix, tolerance),
            HintKind::Accuracy => Hint::Accuracy(state.mix.accuracy(target)),
        };
        out_events.push(Event::HintRevealed {
            hint,
            hints_used: state.hints_used,
        });
    }

    fn reset(&mut self, out_events: &mut Vec<Event>) {
        let Some(mode) = self.active.as_ref().map(ChallengeState::mode) else {
            return;
        };
        if let Err(reason) = self.check_replay(mode) {
            out_events.push(Event::ReplayRejected { mode, reason });
            return;
        }
        if let Some(state) = self.active.as_mut() {
            state.restart();
            out_events.push(Event::SessionReset { mode });
            out_events.push(Event::MixChanged { mix: state.mix });
        }
    }

    fn regenerate(&mut self, out_events: &mut Vec<Event>) {
        let Some(mode) = self.active.as_ref().map(ChallengeState::mode) else {
            return;
        };
        if let Err(reason) = self.check_replay(mode) {
            out_events.push(Event::ReplayRejected { mode, reason });
            return;
        }
        if let Some(challenge) = self.generate(mode) {
            self.start(challenge, out_events);
        }
    }
}

/// Applies the provided command to the session, mutating state deterministically.
///
/// Play actions issued outside an in-progress challenge are ignored without
/// emitting events.
pub fn apply(session: &mut Session, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::EnterMode { mode } => session.enter(mode, out_events),
        Command::SetMix { mix } => {
            if let Some(state) = session.playing_mut() {
                state.selection.clear();
                state.mix = mix;
                out_events.push(Event::MixChanged { mix });
            }
        }
        Command::AddSwatch { swatch } => {
            if let Some(state) = session.playing_mut() {
                state.selection.push(swatch);
                let mix = state.remix();
                out_events.push(Event::MixChanged { mix });
            }
        }
        Command::RemoveLastSwatch => {
            if let Some(state) = session.playing_mut() {
                if state.selection.pop().is_some() {
                    let mix = state.remix();
                    out_events.push(Event::MixChanged { mix });
                }
            }
        }
        Command::CheckMatch => session.check_match(out_events),
        Command::RequestHint { kind } => session.reveal_hint(kind, out_events),
        Command::Reset => session.reset(out_events),
        Command::NewChallenge => session.regenerate(out_events),
    }
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use color_alchemy_core::{
        CalendarDate, ChallengeSummary, Color, DailyRecord, Mode, Phase, ReplayError, Rules,
        SelectionError, UnlockSet,
    };
    use color_alchemy_system_catalog::LevelCatalog;

    use super::{ChallengeState, Session};

    /// Day the session plays the daily challenge for.
    #[must_use]
    pub fn today(session: &Session) -> CalendarDate {
        session.today
    }

    /// Rules in force for the session.
    #[must_use]
    pub fn rules(session: &Session) -> Rules {
        session.rules
    }

    /// Level table the session draws definitions from.
    #[must_use]
    pub fn catalog(session: &Session) -> &LevelCatalog {
        &session.catalog
    }

    /// Levels the player may select.
    #[must_use]
    pub fn unlocked(session: &Session) -> &UnlockSet {
        &session.unlocked
    }

    /// Today's daily outcome, once the daily challenge has finished.
    #[must_use]
    pub fn daily_record(session: &Session) -> Option<&DailyRecord> {
        session.daily_record.as_ref()
    }

    /// Challenge currently on screen, if any mode was entered.
    #[must_use]
    pub fn active(session: &Session) -> Option<&ChallengeState> {
        session.active.as_ref()
    }

    /// Lifecycle phase, `Ready` before any mode was entered.
    #[must_use]
    pub fn phase(session: &Session) -> Phase {
        session.active.as_ref().map_or(Phase::Ready, ChallengeState::phase)
    }

    /// Target currently being matched.
    #[must_use]
    pub fn current_target(session: &Session) -> Option<Color> {
        session.active.as_ref().and_then(ChallengeState::current_target)
    }

    /// Player's current mix.
    #[must_use]
    pub fn current_mix(session: &Session) -> Option<Color> {
        session.active.as_ref().map(ChallengeState::mix)
    }

    /// Live accuracy of the mix against the current target.
    #[must_use]
    pub fn accuracy(session: &Session) -> Option<u8> {
        session.active.as_ref().map(ChallengeState::accuracy)
    }

    /// Reports whether `mode` may be entered.
    pub fn can_enter(session: &Session, mode: Mode) -> Result<(), SelectionError> {
        session.check_entry(mode)
    }

    /// Reports whether the active challenge may be reset or regenerated.
    pub fn can_replay(session: &Session) -> Result<(), ReplayError> {
        match session.active.as_ref() {
            Some(state) => session.check_replay(state.mode()),
            None => Ok(()),
        }
    }

    /// Summary figures of the active challenge.
    #[must_use]
    pub fn summary(session: &Session) -> Option<ChallengeSummary> {
        session.active.as_ref().map(|state| ChallengeSummary {
            mode: state.mode(),
            phase: state.phase(),
            date: session.today,
            attempts_used: state.attempts_used(),
            max_attempts: state.max_attempts(),
            hints_used: state.hints_used(),
            accuracy: state.accuracy(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_alchemy_core::LevelId;

    fn today() -> CalendarDate {
        CalendarDate::from_ymd(2026, 10, 19).expect("valid date")
    }

    fn session_with(challenge: Challenge, unlocked: UnlockSet) -> Session {
        let mut session = Session::new(
            today(),
            Rules::default(),
            Progress {
                unlocked,
                daily: None,
            },
        );
        session.active = Some(ChallengeState::new(challenge));
        session
    }

    #[test]
    fn exact_mix_wins_first_level_in_one_attempt() {
        let target = Color::from_rgb(100, 100, 100);
        let mut session = session_with(
            Challenge::new(Mode::Level(LevelId::new(0)), vec![target], 30),
            UnlockSet::new(),
        );
        let mut events = Vec::new();

        apply(&mut session, Command::SetMix { mix: target }, &mut events);
        apply(&mut session, Command::CheckMatch, &mut events);

        assert!(events.contains(&Event::MatchChecked {
            target_index: 0,
            accuracy: 100,
            attempts_used: 1,
        }));
        assert!(events.contains(&Event::LevelUnlocked {
            level: LevelId::new(1),
        }));
        assert_eq!(query::phase(&session), Phase::Won);
        assert_eq!(
            query::active(&session).map(ChallengeState::attempts_used),
            Some(1)
        );
    }

    #[test]
    fn winning_final_level_unlocks_nothing() {
        let target = Color::from_rgb(10, 20, 30);
        let last = LevelId::new(49);
        let mut session = session_with(
            Challenge::new(Mode::Level(last), vec![target], 3),
            UnlockSet::from_indices(0..50),
        );
        let mut events = Vec::new();

        apply(&mut session, Command::SetMix { mix: target }, &mut events);
        apply(&mut session, Command::CheckMatch, &mut events);

        assert_eq!(query::phase(&session), Phase::Won);
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::LevelUnlocked { .. })));
        assert_eq!(query::unlocked(&session).len(), 50);
    }

    #[test]
    fn advancing_on_the_final_attempt_exhausts() {
        let first = Color::from_rgb(50, 50, 50);
        let second = Color::from_rgb(200, 200, 200);
        let mut session = session_with(
            Challenge::new(Mode::Level(LevelId::new(0)), vec![first, second], 1),
            UnlockSet::new(),
        );
        let mut events = Vec::new();

        apply(&mut session, Command::SetMix { mix: first }, &mut events);
        apply(&mut session, Command::CheckMatch, &mut events);

        let state = query::active(&session).expect("active challenge");
        assert_eq!(state.target_index(), 1);
        assert_eq!(state.phase(), Phase::Exhausted);
    }

    #[test]
    fn near_miss_below_threshold_does_not_win() {
        let target = Color::from_rgb(100, 100, 100);
        let mut session = session_with(
            Challenge::new(Mode::Level(LevelId::new(0)), vec![target], 30),
            UnlockSet::new(),
        );
        let mut events = Vec::new();

        apply(
            &mut session,
            Command::SetMix {
                mix: Color::from_rgb(130, 100, 100),
            },
            &mut events,
        );
        apply(&mut session, Command::CheckMatch, &mut events);

        assert_eq!(query::phase(&session), Phase::InProgress);
        assert_eq!(query::accuracy(&session), Some(93));
    }
}
