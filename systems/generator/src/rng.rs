//! Mulberry32 pseudo-random stream.
//!
//! Every intermediate value wraps at 32 bits. Widening any step changes the
//! sequence and with it every generated target.

const INCREMENT: u32 = 0x6d2b_79f5;
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Advances a mulberry32 state, returning a value in `[0, 1)` and the successor state.
#[must_use]
pub fn next(state: u32) -> (f64, u32) {
    let state = state.wrapping_add(INCREMENT);
    let mut t = state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    let output = t ^ (t >> 14);
    (f64::from(output) / UNIT_SCALE, state)
}

/// Infinite mulberry32 stream that threads its state explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a stream positioned at the provided seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state; a stream created from it continues the same sequence.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Draws the next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        let (value, state) = next(self.state);
        self.state = state;
        value
    }

    /// Draws `floor(unit * bound)`, an index in `0..bound`.
    ///
    /// A zero bound still advances the stream and yields `0`.
    pub fn next_index(&mut self, bound: u32) -> u32 {
        let scaled = (self.next_unit() * f64::from(bound)).floor() as u32;
        scaled.min(bound.saturating_sub(1))
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_unit())
    }
}

#[cfg(test)]
mod tests {
    use super::{next, Mulberry32};

    #[test]
    fn matches_reference_sequence_for_seed_one() {
        let values: Vec<f64> = Mulberry32::new(1).take(3).collect();
        assert_eq!(
            values,
            vec![0.627_073_940_588_161_3, 0.002_735_721_180_215_478, 0.527_447_039_959_952_2]
        );
    }

    #[test]
    fn matches_reference_sequence_for_seed_zero() {
        let (first, state) = next(0);
        assert_eq!(first * 4_294_967_296.0, 1_144_304_738.0);
        assert_eq!(state, 0x6d2b_79f5);
        let (second, _) = next(state);
        assert_eq!(second * 4_294_967_296.0, 1_416_247.0);
    }

    #[test]
    fn state_wraps_instead_of_overflowing() {
        let (value, state) = next(u32::MAX);
        assert_eq!(state, 0x6d2b_79f4);
        assert!((0.0..1.0).contains(&value));
    }

    #[test]
    fn restarting_from_state_continues_sequence() {
        let mut first = Mulberry32::new(20_261_019);
        let _ = first.next_unit();
        let mut resumed = Mulberry32::new(first.state());
        for _ in 0..16 {
            assert_eq!(first.next_unit(), resumed.next_unit());
        }
    }

    #[test]
    fn values_stay_in_unit_interval() {
        for seed in [0, 1, 7, 0xdead_beef, u32::MAX] {
            for value in Mulberry32::new(seed).take(1_000) {
                assert!((0.0..1.0).contains(&value), "{value} escaped [0, 1)");
            }
        }
    }

    #[test]
    fn index_never_reaches_bound() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..1_000 {
            assert!(rng.next_index(3) < 3);
        }
        assert_eq!(rng.next_index(0), 0);
    }
}
