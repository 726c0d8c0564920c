//! Cyclic animation clock.
//!
//! Maps a wall-clock millisecond counter to a position within a repeating
//! cycle. The clock is pure: it owns no start time and no state beyond the
//! cycle length.

use std::num::NonZeroU64;

use crate::util::{Error, Result, Seconds};

/// Cycle length used by the launch sequence (40 seconds).
pub const DEFAULT_CYCLE_MILLIS: u64 = 40_000;

const DEFAULT_CYCLE: NonZeroU64 = match NonZeroU64::new(DEFAULT_CYCLE_MILLIS) {
    Some(cycle) => cycle,
    None => panic!("default cycle must be non-zero"),
};

/// Seconds elapsed within the current cycle.
///
/// Computes `elapsed_millis mod cycle_millis` and converts it to seconds.
#[inline]
pub fn phase(elapsed_millis: u64, cycle_millis: NonZeroU64) -> Seconds {
    (elapsed_millis % cycle_millis.get()) as Seconds / 1000.0
}

/// Repeating timeline of a fixed length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    cycle_millis: NonZeroU64,
}

impl AnimationClock {
    /// Create a clock with the given cycle length in milliseconds.
    pub fn new(cycle_millis: u64) -> Result<Self> {
        let cycle_millis = NonZeroU64::new(cycle_millis).ok_or(Error::InvalidCycle)?;
        Ok(Self { cycle_millis })
    }

    /// Create a clock from an already validated cycle length.
    #[inline]
    pub const fn from_cycle(cycle_millis: NonZeroU64) -> Self {
        Self { cycle_millis }
    }

    #[inline]
    pub fn cycle_millis(&self) -> u64 {
        self.cycle_millis.get()
    }

    /// Cycle length in seconds.
    #[inline]
    pub fn cycle_seconds(&self) -> Seconds {
        self.cycle_millis.get() as Seconds / 1000.0
    }

    /// Seconds within the current cycle, in `[0, cycle_seconds)`.
    #[inline]
    pub fn phase(&self, elapsed_millis: u64) -> Seconds {
        phase(elapsed_millis, self.cycle_millis)
    }

    /// Position within the current cycle as a fraction in `[0, 1)`.
    #[inline]
    pub fn normalized(&self, elapsed_millis: u64) -> f32 {
        let cycle = self.cycle_millis.get();
        (elapsed_millis % cycle) as f32 / cycle as f32
    }

    /// Number of completed cycles.
    #[inline]
    pub fn cycle_index(&self, elapsed_millis: u64) -> u64 {
        elapsed_millis / self.cycle_millis.get()
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::from_cycle(DEFAULT_CYCLE)
    }
}
