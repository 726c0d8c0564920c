//! Named tracks driven by one clock.
//!
//! A [`Timeline`] replaces per-object global animation state: the scene
//! assembler owns one, registers a [`KeyframeTrack`] per animated scalar and
//! queries it each frame. Every track must lie inside the clock's cycle, so
//! authored sample times and cycle length cannot drift apart silently.

use super::clock::AnimationClock;
use super::track::KeyframeTrack;
use crate::util::{Error, Result, Seconds};

/// Tracks keyed by name, evaluated against a shared clock.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    clock: AnimationClock,
    tracks: Vec<(String, KeyframeTrack)>,
}

impl Timeline {
    /// Create an empty timeline driven by `clock`.
    pub fn new(clock: AnimationClock) -> Self {
        Self {
            clock,
            tracks: Vec::new(),
        }
    }

    #[inline]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Register a track under `name`.
    ///
    /// The track must be non-empty and its samples must fall within
    /// `[0, cycle_seconds]`. Names must be unique.
    pub fn add_track(&mut self, name: impl Into<String>, track: KeyframeTrack) -> Result<()> {
        let name = name.into();
        if self.track(&name).is_some() {
            return Err(Error::other(format!("duplicate track name '{name}'")));
        }

        let domain = track
            .domain()
            .ok_or_else(|| Error::invalid_track(0, format!("track '{name}' has no samples")))?;
        let cycle = self.clock.cycle_seconds();
        if domain.start < 0.0 || domain.end > cycle {
            let index = if domain.start < 0.0 { 0 } else { track.len() - 1 };
            return Err(Error::invalid_track(
                index,
                format!(
                    "track '{name}' spans {}..{}s, outside the {cycle}s cycle",
                    domain.start, domain.end
                ),
            ));
        }

        tracing::debug!(
            track = %name,
            samples = track.len(),
            start = domain.start,
            end = domain.end,
            "registered track"
        );
        self.tracks.push((name, track));
        Ok(())
    }

    /// Look up a track by name.
    pub fn track(&self, name: &str) -> Option<&KeyframeTrack> {
        self.tracks
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// Track names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|(n, _)| n.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Evaluate the named track at a phase (seconds within the cycle).
    pub fn evaluate(&self, name: &str, phase: Seconds) -> Result<f32> {
        self.track(name)
            .ok_or_else(|| Error::other(format!("unknown track '{name}'")))?
            .evaluate(phase)
    }

    /// Evaluate the named track at a wall-clock time.
    pub fn value_at(&self, name: &str, elapsed_millis: u64) -> Result<f32> {
        self.evaluate(name, self.clock.phase(elapsed_millis))
    }

    /// Evaluate every track at a wall-clock time, in registration order.
    pub fn sample(&self, elapsed_millis: u64) -> Result<Vec<(&str, f32)>> {
        let phase = self.clock.phase(elapsed_millis);
        self.tracks
            .iter()
            .map(|(name, track)| track.evaluate(phase).map(|v| (name.as_str(), v)))
            .collect()
    }
}
