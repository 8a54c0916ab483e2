//! Threshold-based rounding of rally stage times to whole minutes.
//!
//! Expected stage times are given in minutes and actual times as a pair of clock readings. Both are rounded with the
//! same rule so that the penalty, actual minus expected, compares like with like.

mod clock;
mod error;
mod paths;
mod rounding;

pub use clock::parse_clock_time;
pub use error::{RallyError, Result};
pub use paths::{DataPaths, DATA_DIR_NAME};
pub use rounding::{
    round_difference, round_minutes, RoundDuration, RoundedMinutes, RoundingPolicy, Threshold, DEFAULT_THRESHOLD,
};
