//! Error Types for the Acquisition Cycle
//!
//! ## Design Philosophy
//!
//! Errors are returned from the hot path of a periodic task, so they follow
//! the same embedded rules as the rest of the crate:
//!
//! 1. **Small Size**: every variant carries at most a few bytes of context.
//! 2. **No Heap Allocation**: messages are `&'static str`, never `String`.
//! 3. **Copy Semantics**: errors are cheap to store in the cycle's status.
//!
//! ## Error Categories
//!
//! ### Hardware (absorbed by the cycle)
//! - [`InitError`]: the chip did not complete its init sequence. The cycle
//!   logs it and retries on the next tick, forever.
//! - [`ReadError`]: one channel read failed. The cycle counts it, keeps the
//!   previous value and carries on with the other channels.
//!
//! ### Configuration (fails fast)
//! - [`ConfigError`]: a range/scale selector or channel table the converter
//!   cannot map. Reported when the cycle is constructed, so a task with a bad
//!   configuration never starts.
//!
//! ## Propagation
//!
//! ```rust
//! use sensorcycle_core::{AccelRange, ConfigError};
//!
//! // Unmapped selectors are rejected up front
//! assert!(matches!(
//!     AccelRange::from_g(3),
//!     Err(ConfigError::UnsupportedSelector { .. })
//! ));
//! ```
//!
//! Nothing raised by the sensor ever reaches the publisher or the scheduler.

use thiserror_no_std::Error;

use crate::channel::ChannelId;

/// Hardware did not respond to its initialization sequence
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// No response on the bus
    #[error("device not responding")]
    NoResponse,

    /// Something answered, but it is not the expected chip
    #[error("unexpected device id {found:#04x}, expected {expected:#04x}")]
    WrongDevice {
        /// Identity register value the driver expects
        expected: u8,
        /// Identity register value actually read
        found: u8,
    },

    /// Chip answered but rejected the configuration sequence
    #[error("configuration rejected: {reason}")]
    Rejected {
        /// Which step of the sequence failed
        reason: &'static str,
    },

    /// Bus-level failure reported by the HAL
    #[error("bus error during init")]
    Bus,
}

/// Single-channel transient read failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// Bus-level failure reported by the HAL
    #[error("bus error")]
    Bus,

    /// HAL deadline expired before the transfer completed
    #[error("read timed out")]
    Timeout,

    /// Conversion not finished yet
    #[error("data not ready")]
    NotReady,

    /// The HAL returned a sample of the wrong shape for the channel
    #[error("sample shape does not match channel {channel}")]
    ShapeMismatch {
        /// Channel whose read produced the malformed sample
        channel: ChannelId,
    },
}

/// Configuration the converter cannot map
///
/// Always a programming or deployment defect, never a runtime condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Selector value with no entry in the scale table
    #[error("unsupported {quantity} selector {value}")]
    UnsupportedSelector {
        /// What the selector configures (e.g. "accel range")
        quantity: &'static str,
        /// The rejected value
        value: u32,
    },

    /// Channel the configuration has no scale for
    #[error("channel {0} is not provided by this configuration")]
    UnsupportedChannel(ChannelId),

    /// Same channel listed twice
    #[error("channel {0} listed more than once")]
    DuplicateChannel(ChannelId),

    /// Configuration lists no channels
    #[error("configuration has no channels")]
    NoChannels,

    /// Channel table larger than one cycle can hold
    #[error("too many channels for one cycle")]
    TooManyChannels,

    /// Axis mapping is not a permutation of x, y, z
    #[error("orientation does not map each axis exactly once")]
    InvalidOrientation,

    /// Requested rate cannot be sustained by the sensor
    #[error("rate {requested_hz} Hz exceeds sustainable {max_hz} Hz")]
    RateTooHigh {
        /// Configured rate
        requested_hz: u32,
        /// Fastest rate the selected settings allow
        max_hz: u32,
    },

    /// Zero rate
    #[error("rate must be non-zero")]
    ZeroRate,
}

#[cfg(feature = "defmt")]
impl defmt::Format for InitError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NoResponse => defmt::write!(fmt, "device not responding"),
            Self::WrongDevice { expected, found } =>
                defmt::write!(fmt, "unexpected device id {=u8:#x}, expected {=u8:#x}", found, expected),
            Self::Rejected { reason } => defmt::write!(fmt, "configuration rejected: {}", reason),
            Self::Bus => defmt::write!(fmt, "bus error during init"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Bus => defmt::write!(fmt, "bus error"),
            Self::Timeout => defmt::write!(fmt, "read timed out"),
            Self::NotReady => defmt::write!(fmt, "data not ready"),
            Self::ShapeMismatch { channel } =>
                defmt::write!(fmt, "sample shape does not match channel {}", channel),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnsupportedSelector { quantity, value } =>
                defmt::write!(fmt, "unsupported {} selector {}", quantity, value),
            Self::UnsupportedChannel(channel) =>
                defmt::write!(fmt, "channel {} not provided", channel),
            Self::DuplicateChannel(channel) =>
                defmt::write!(fmt, "channel {} listed twice", channel),
            Self::NoChannels => defmt::write!(fmt, "no channels"),
            Self::TooManyChannels => defmt::write!(fmt, "too many channels"),
            Self::InvalidOrientation => defmt::write!(fmt, "invalid orientation"),
            Self::RateTooHigh { requested_hz, max_hz } =>
                defmt::write!(fmt, "rate {} Hz exceeds {} Hz", requested_hz, max_hz),
            Self::ZeroRate => defmt::write!(fmt, "rate must be non-zero"),
        }
    }
}
