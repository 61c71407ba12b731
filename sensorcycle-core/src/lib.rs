//! Core acquisition engine for SensorCycle
//!
//! Drives periodic sensor acquisition: one scheduler tick in, one batch of
//! timestamped physical samples out. Designed for edge devices with limited
//! resources.
//!
//! Key constraints:
//! - No heap allocation anywhere in the tick
//! - A tick always runs to completion; it never blocks on anything but the
//!   raw sensor reads, which the HAL bounds
//! - Hardware faults become counters and log lines, never panics
//!
//! ```no_run
//! use sensorcycle_core::{AcquisitionCycle, Supervisor, SampleLog, TickOutcome};
//! use sensorcycle_core::time::MonotonicTime;
//! # use sensorcycle_core::cycle::RawSensor;
//! # fn demo<S: RawSensor>(sensor: S, config: S::Config) {
//! let supervisor = Supervisor::new();
//! let mut cycle = AcquisitionCycle::new(
//!     "baro",
//!     sensor,
//!     config,
//!     MonotonicTime::new(),
//!     SampleLog::<16>::new(),
//!     supervisor.stop_token(),
//! ).expect("valid configuration");
//!
//! // Called by the scheduler once per period
//! while cycle.run() != TickOutcome::Stopped {}
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
pub mod logging;

pub mod channel;
pub mod constants;
pub mod convert;
pub mod cycle;
pub mod errors;
pub mod health;
pub mod lifecycle;
pub mod orientation;
pub mod publish;
pub mod range;
pub mod stats;
pub mod time;

// Public API
pub use channel::{ChannelId, PhysicalSample, PhysicalValue, RawSample, Unit};
pub use convert::{ChannelScale, SensorConfig};
pub use cycle::{AcquisitionCycle, CycleState, CycleStatus, RawSensor, TickOutcome};
pub use errors::{ConfigError, InitError, ReadError};
pub use health::{HealthSnapshot, HealthTracker};
pub use lifecycle::{StopSignal, StopToken, Supervisor};
pub use orientation::{Orientation, Rotation};
pub use publish::{Publisher, SampleLog};
pub use range::{AccelRange, GyroRange, IirFilter, Oversampling};

/// Upper bound on the channels a single cycle may own
pub const MAX_CHANNELS: usize = ChannelId::COUNT;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
