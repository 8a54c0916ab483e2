use thiserror::Error;

/// The result type returned from the library.
pub type Result<T> = std::result::Result<T, RallyError>;

/// The error type returned from the library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RallyError {
    /// A rounding threshold was outside the supported range of 0 to 59 seconds.
    #[error("Invalid threshold: {0} (must be between 0 and 59 seconds)")]
    InvalidThreshold(
        /// The rejected threshold.
        u32,
    ),
    /// An elapsed time was negative, not a number, or the end clock reading was before the start.
    #[error("Invalid duration: {0}")]
    InvalidDuration(
        /// Description of the offending value.
        String,
    ),
    /// A clock reading couldn't be parsed.
    #[error("Invalid clock time '{0}': expected HH:MM:SS or HH:MM")]
    InvalidClockTime(
        /// The input that failed to parse.
        String,
    ),
    /// The platform has no desktop directory to place the data directory in.
    #[error("Could not determine the desktop directory for the rally data")]
    NoDataRoot,

    /// Transparent wrapper for an [IO error](std::io::Error).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
