//! Keyframe tracks for animated scalars.
//!
//! A track holds sparse `(time, value)` samples and evaluates a continuous
//! value between them by linear interpolation, clamping outside its range.

use crate::util::{Error, Result, Seconds};

/// A single `(time, value)` sample anchoring a track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Time of the sample in seconds.
    pub time: Seconds,
    /// Value at that time.
    pub value: f32,
}

impl Keyframe {
    #[inline]
    pub const fn new(time: Seconds, value: f32) -> Self {
        Self { time, value }
    }
}

/// Time range covered by a track's samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackDomain {
    pub start: Seconds,
    pub end: Seconds,
}

impl TrackDomain {
    /// Length of the domain in seconds.
    #[inline]
    pub fn duration(&self) -> Seconds {
        self.end - self.start
    }

    /// Whether `time` lies inside the domain (inclusive).
    #[inline]
    pub fn contains(&self, time: Seconds) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Ordered samples for one animated scalar.
///
/// Samples must be appended in strictly increasing time order. Violations
/// are rejected by [`add_sample`](Self::add_sample), so evaluation never
/// sees duplicate or out-of-order times.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyframeTrack {
    samples: Vec<Keyframe>,
}

impl KeyframeTrack {
    /// Create an empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a track from `(time, value)` pairs given in increasing time order.
    pub fn from_samples<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Seconds, f32)>,
    {
        let mut track = Self::new();
        for (time, value) in samples {
            track.add_sample(time, value)?;
        }
        Ok(track)
    }

    /// Append a sample.
    ///
    /// `time` must be strictly greater than every previously added time and
    /// both numbers must be finite. On error the track is left unchanged.
    pub fn add_sample(&mut self, time: Seconds, value: f32) -> Result<()> {
        let index = self.samples.len();
        if !time.is_finite() || !value.is_finite() {
            return Err(Error::invalid_track(
                index,
                format!("non-finite sample ({time}, {value})"),
            ));
        }
        if let Some(last) = self.samples.last() {
            if time == last.time {
                return Err(Error::invalid_track(
                    index,
                    format!("duplicate time {time}"),
                ));
            }
            if time < last.time {
                return Err(Error::invalid_track(
                    index,
                    format!("time {time} precedes previous sample at {}", last.time),
                ));
            }
        }
        self.samples.push(Keyframe::new(time, value));
        Ok(())
    }

    /// All samples in time order.
    #[inline]
    pub fn samples(&self) -> &[Keyframe] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time range spanned by the samples, `None` for an empty track.
    pub fn domain(&self) -> Option<TrackDomain> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some(TrackDomain {
            start: first.time,
            end: last.time,
        })
    }

    /// Value of the track at `query`.
    ///
    /// Clamps to the first/last value outside the sampled range and
    /// interpolates linearly inside it. Evaluating an empty track is an
    /// [`Error::InvalidTrack`].
    pub fn evaluate(&self, query: Seconds) -> Result<f32> {
        let (first, last) = match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::invalid_track(0, "track has no samples")),
        };

        if query <= first.time {
            return Ok(first.value);
        }
        if query >= last.time {
            return Ok(last.value);
        }

        // Few samples per track, a linear scan is enough.
        for (i, pair) in self.samples.windows(2).enumerate() {
            let (k0, k1) = (pair[0], pair[1]);
            if query >= k0.time && query < k1.time {
                let span = k1.time - k0.time;
                if span <= 0.0 {
                    return Err(Error::invalid_track(i + 1, "zero-length interval"));
                }
                return Ok(k0.value + (k1.value - k0.value) * (query - k0.time) / span);
            }
        }

        // Only reachable with a NaN query.
        Err(Error::invalid_track(
            0,
            format!("query time {query} is not comparable"),
        ))
    }
}
