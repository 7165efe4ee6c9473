#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Persistence adapter storing daily records and unlocked levels.
//!
//! Progress lives under six flat string keys so that any key-value backend can
//! hold it. Values are read once when a session starts and written back in
//! response to session events.

mod store;

use color_alchemy_core::{CalendarDate, Color, DailyRecord, Event, Progress, UnlockSet};
use tracing::{debug, warn};

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Key holding the ISO date of the last recorded daily challenge.
pub const LAST_PLAYED_DATE: &str = "lastPlayedDate";
/// Key holding the attempts used on the recorded daily challenge.
pub const DAILY_ATTEMPTS: &str = "dailyAttempts";
/// Key holding whether the recorded daily challenge was won.
pub const DAILY_WON: &str = "dailyWon";
/// Key holding the final mix of the recorded daily challenge.
pub const DAILY_CURRENT_MIX: &str = "dailyCurrentMix";
/// Key holding the hints used on the recorded daily challenge.
pub const DAILY_HINTS_USED: &str = "dailyHintsUsed";
/// Key holding the unlocked level indices.
pub const UNLOCKED_LEVELS: &str = "unlockedLevels";

/// Restores progress from the store.
///
/// Malformed daily entries drop the daily record and a malformed unlock list
/// falls back to the first level only. Neither case is fatal.
pub fn load_progress(store: &impl KeyValueStore) -> Progress {
    let progress = Progress {
        unlocked: load_unlocked(store),
        daily: load_daily_record(store),
    };
    debug!(
        unlocked = progress.unlocked.len(),
        daily = progress.daily.is_some(),
        "loaded progress"
    );
    progress
}

fn load_unlocked(store: &impl KeyValueStore) -> UnlockSet {
    let Some(raw) = store.get(UNLOCKED_LEVELS) else {
        return UnlockSet::new();
    };
    match serde_json::from_str::<Vec<u32>>(&raw) {
        Ok(indices) => UnlockSet::from_indices(indices),
        Err(error) => {
            warn!(%error, value = %raw, "discarding malformed unlocked levels");
            UnlockSet::new()
        }
    }
}

fn load_daily_record(store: &impl KeyValueStore) -> Option<DailyRecord> {
    let raw_date = store.get(LAST_PLAYED_DATE)?;
    match decode_daily_record(store, &raw_date) {
        Ok(record) => Some(record),
        Err(key) => {
            warn!(key, "discarding malformed daily record");
            None
        }
    }
}

fn decode_daily_record(
    store: &impl KeyValueStore,
    raw_date: &str,
) -> Result<DailyRecord, &'static str> {
    let date: CalendarDate = raw_date.parse().map_err(|_| LAST_PLAYED_DATE)?;
    let attempts_used = read(store, DAILY_ATTEMPTS, |raw| raw.trim().parse().ok())?;
    let won = read(store, DAILY_WON, |raw| raw.trim().parse().ok())?;
    let final_mix = read(store, DAILY_CURRENT_MIX, |raw| {
        serde_json::from_str::<Color>(raw).ok()
    })?;
    let hints_used = read(store, DAILY_HINTS_USED, |raw| raw.trim().parse().ok())?;
    Ok(DailyRecord {
        date,
        attempts_used,
        won,
        final_mix,
        hints_used,
    })
}

fn read<T>(
    store: &impl KeyValueStore,
    key: &'static str,
    decode: impl FnOnce(&str) -> Option<T>,
) -> Result<T, &'static str> {
    store
        .get(key)
        .and_then(|raw| decode(&raw))
        .ok_or(key)
}

/// Writes every daily key for `record`, in a fixed order.
pub fn save_daily_record(
    store: &mut impl KeyValueStore,
    record: &DailyRecord,
) -> Result<(), StoreError> {
    let mix = serde_json::to_string(&record.final_mix).map_err(|source| StoreError::Encode {
        key: DAILY_CURRENT_MIX,
        source,
    })?;
    store.set(LAST_PLAYED_DATE, record.date.to_string())?;
    store.set(DAILY_ATTEMPTS, record.attempts_used.to_string())?;
    store.set(DAILY_WON, record.won.to_string())?;
    store.set(DAILY_CURRENT_MIX, mix)?;
    store.set(DAILY_HINTS_USED, record.hints_used.to_string())?;
    debug!(date = %record.date, won = record.won, "saved daily record");
    Ok(())
}

/// Writes the unlocked level list.
pub fn save_unlocked(
    store: &mut impl KeyValueStore,
    unlocked: &UnlockSet,
) -> Result<(), StoreError> {
    let indices: Vec<u32> = unlocked.iter().map(|level| level.get()).collect();
    let encoded = serde_json::to_string(&indices).map_err(|source| StoreError::Encode {
        key: UNLOCKED_LEVELS,
        source,
    })?;
    store.set(UNLOCKED_LEVELS, encoded)?;
    debug!(count = indices.len(), "saved unlocked levels");
    Ok(())
}

/// Event handler that mirrors session outcomes into a store.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Wraps the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restores the progress held by the wrapped store.
    pub fn load(&self) -> Progress {
        load_progress(&self.store)
    }

    /// Read access to the wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the handler, returning the wrapped store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Persists the outcomes carried by `events`.
    ///
    /// A daily record writes all six keys, while an unlock writes only the
    /// level list taken from `unlocked`.
    pub fn handle(&mut self, events: &[Event], unlocked: &UnlockSet) -> Result<(), StoreError> {
        for event in events {
            match event {
                Event::DailyRecorded { record } => {
                    save_daily_record(&mut self.store, record)?;
                    save_unlocked(&mut self.store, unlocked)?;
                }
                Event::LevelUnlocked { .. } => save_unlocked(&mut self.store, unlocked)?,
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_alchemy_core::LevelId;

    fn record() -> DailyRecord {
        DailyRecord {
            date: CalendarDate::from_ymd(2026, 10, 19).expect("valid date"),
            attempts_used: 7,
            won: true,
            final_mix: Color::from_rgb(187, 221, 150),
            hints_used: 1,
        }
    }

    #[test]
    fn empty_store_loads_defaults() {
        let progress = load_progress(&MemoryStore::new());
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn daily_record_round_trips_through_flat_keys() {
        let mut store = MemoryStore::new();
        save_daily_record(&mut store, &record()).expect("memory write");

        assert_eq!(store.get(LAST_PLAYED_DATE).as_deref(), Some("2026-10-19"));
        assert_eq!(store.get(DAILY_ATTEMPTS).as_deref(), Some("7"));
        assert_eq!(store.get(DAILY_WON).as_deref(), Some("true"));
        assert_eq!(
            store.get(DAILY_CURRENT_MIX).as_deref(),
            Some(r#"{"r":187,"g":221,"b":150}"#)
        );
        assert_eq!(store.get(DAILY_HINTS_USED).as_deref(), Some("1"));
        assert_eq!(load_progress(&store).daily, Some(record()));
    }

    #[test]
    fn malformed_daily_key_drops_the_record() {
        let mut store = MemoryStore::new();
        save_daily_record(&mut store, &record()).expect("memory write");
        store
            .set(DAILY_CURRENT_MIX, "not a color".to_owned())
            .expect("memory write");

        assert!(load_progress(&store).daily.is_none());
    }

    #[test]
    fn missing_daily_key_drops_the_record() {
        let mut store = MemoryStore::new();
        store
            .set(LAST_PLAYED_DATE, "2026-10-19".to_owned())
            .expect("memory write");

        assert!(load_progress(&store).daily.is_none());
    }

    #[test]
    fn malformed_unlock_list_falls_back_to_first_level() {
        let mut store = MemoryStore::new();
        store
            .set(UNLOCKED_LEVELS, "{broken".to_owned())
            .expect("memory write");

        let unlocked = load_progress(&store).unlocked;
        assert_eq!(unlocked, UnlockSet::new());
    }

    #[test]
    fn unlock_list_ignores_out_of_range_levels() {
        let mut store = MemoryStore::new();
        store
            .set(UNLOCKED_LEVELS, "[0, 4, 99]".to_owned())
            .expect("memory write");

        let unlocked = load_progress(&store).unlocked;
        assert!(unlocked.contains(LevelId::new(4)));
        assert_eq!(unlocked.len(), 2);
    }
}
