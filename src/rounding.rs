use crate::{RallyError, Result};
use chrono::{NaiveTime, Timelike};
use log::*;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, time::Duration};

/// The threshold used when none is configured. Rounds to the nearest minute.
pub const DEFAULT_THRESHOLD: u32 = 30;
const MAX_THRESHOLD: u32 = 59;
const SECONDS_PER_MINUTE: u64 = 60;

/// An elapsed time expressed in whole minutes after rounding.
pub type RoundedMinutes = i64;

/// Seconds past the minute at which an elapsed time rounds up to the next whole minute.
///
/// A threshold of 30 approximates rounding to the nearest minute, 0 always rounds up and 59 rounds up only when the
/// elapsed time is within a second of the next minute. Note that a threshold of 0 rounds up even an elapsed time of
/// exactly zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Threshold(u32);

impl Threshold {
    /// Returns a new threshold, or [`RallyError::InvalidThreshold`] if `seconds` is over 59.
    pub fn new(seconds: u32) -> Result<Self> {
        if seconds > MAX_THRESHOLD {
            return Err(RallyError::InvalidThreshold(seconds));
        }

        Ok(Self(seconds))
    }

    pub fn seconds(self) -> u32 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<u32> for Threshold {
    type Error = RallyError;

    fn try_from(seconds: u32) -> Result<Self> {
        Self::new(seconds)
    }
}

impl From<Threshold> for u32 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Rounds an elapsed time given in (possibly fractional) minutes.
///
/// The fractional part is converted to seconds rounding half to even. If that rounds up to a full 60 seconds, the
/// result always rounds up regardless of the threshold. Negative, infinite or NaN inputs are rejected with
/// [`RallyError::InvalidDuration`].
pub fn round_minutes(minutes: f64, threshold: Threshold) -> Result<RoundedMinutes> {
    if !minutes.is_finite() || minutes < 0.0 {
        return Err(RallyError::InvalidDuration(format!("{} minutes", minutes)));
    }

    let whole_minutes = minutes.floor();
    if whole_minutes >= i64::MAX as f64 {
        return Err(RallyError::InvalidDuration(format!("{} minutes is out of range", minutes)));
    }

    // in [0, 60], where 60 comes from a fraction just short of a full minute
    let seconds = ((minutes - whole_minutes) * SECONDS_PER_MINUTE as f64).round_ties_even() as u32;
    let rounded = round_parts(whole_minutes as i64, seconds, threshold);

    trace!("{} min ({} + {}s) @ {} -> {}", minutes, whole_minutes, seconds, threshold, rounded);
    Ok(rounded)
}

/// Rounds the time elapsed between two clock readings.
///
/// Sub-second parts of the readings are truncated. The readings are taken to be on the same day, so an `end` before
/// `start` is rejected with [`RallyError::InvalidDuration`] instead of wrapping past midnight.
pub fn round_difference(end: NaiveTime, start: NaiveTime, threshold: Threshold) -> Result<RoundedMinutes> {
    // whole seconds since midnight, dropping each reading's sub-second part
    let end_seconds = end.num_seconds_from_midnight();
    let start_seconds = start.num_seconds_from_midnight();

    if end_seconds < start_seconds {
        return Err(RallyError::InvalidDuration(format!(
            "end time {} is before start time {}",
            end, start
        )));
    }

    let elapsed = end_seconds - start_seconds;
    let rounded = round_seconds(u64::from(elapsed), threshold);

    trace!("{} - {} = {}s @ {} -> {}", end, start, elapsed, threshold, rounded);
    Ok(rounded)
}

/// Rounding for elapsed times measured as a [`Duration`].
pub trait RoundDuration {
    fn round_to_minutes(&self, threshold: Threshold) -> RoundedMinutes;
}

impl RoundDuration for Duration {
    fn round_to_minutes(&self, threshold: Threshold) -> RoundedMinutes {
        // sub-second precision is dropped the same way clock readings drop it
        round_seconds(self.as_secs(), threshold)
    }
}

fn round_seconds(total_seconds: u64, threshold: Threshold) -> RoundedMinutes {
    let whole_minutes = i64::try_from(total_seconds / SECONDS_PER_MINUTE).unwrap_or(i64::MAX);
    let seconds = (total_seconds % SECONDS_PER_MINUTE) as u32;

    round_parts(whole_minutes, seconds, threshold)
}

// the single comparison both entry points go through
fn round_parts(whole_minutes: i64, seconds: u32, threshold: Threshold) -> RoundedMinutes {
    if seconds >= threshold.seconds() {
        whole_minutes.saturating_add(1)
    } else {
        whole_minutes
    }
}

/// A rounding threshold bound to the operations that use it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RoundingPolicy {
    threshold: Threshold,
}

impl RoundingPolicy {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// See [`round_minutes`].
    pub fn round(&self, minutes: f64) -> Result<RoundedMinutes> {
        round_minutes(minutes, self.threshold)
    }

    /// See [`round_difference`].
    pub fn round_difference(&self, end: NaiveTime, start: NaiveTime) -> Result<RoundedMinutes> {
        round_difference(end, start, self.threshold)
    }

    pub fn round_duration(&self, elapsed: Duration) -> RoundedMinutes {
        elapsed.round_to_minutes(self.threshold)
    }

    /// Returns the rounded actual elapsed time between `start` and `end` minus the rounded expected time. A negative
    /// penalty means the stage was finished early.
    pub fn penalty(&self, expected_minutes: f64, start: NaiveTime, end: NaiveTime) -> Result<i64> {
        let expected = self.round(expected_minutes)?;
        let actual = self.round_difference(end, start)?;

        debug!(
            "Expected {} min rounded to {}, actual {} - {} rounded to {}",
            expected_minutes, expected, start, end, actual
        );

        Ok(actual - expected)
    }
}
