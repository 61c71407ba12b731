//! Barometer and IMU acquisition for SensorCycle
//!
//! Concrete configurations for the two sensor families the engine drives:
//!
//! | Cycle | Chip class | Channels | Default rate |
//! |-------|-----------|----------|--------------|
//! | [`barometer`] | BMP280 | pressure, temperature | 25 Hz |
//! | [`inertial`] | MPU-9250 + AK8963 | accel, gyro, mag, temperature | 200 Hz |
//!
//! The register-level HAL is not part of this crate. A platform implements
//! [`RawSensor`](sensorcycle_core::RawSensor) for its chip with the matching
//! `Config` type and hands it to [`barometer_cycle`]/[`inertial_cycle`], or
//! with `std` to [`spawn_barometer`]/[`spawn_inertial`].
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use sensorcycle_core::{SampleLog, Supervisor};
//! use sensorcycle_drivers::{spawn_barometer, BaroConfig};
//! # use sensorcycle_core::RawSensor;
//! # fn demo<S: RawSensor<Config = BaroConfig> + Send + 'static>(hal: S) {
//! let supervisor = Arc::new(Supervisor::new());
//! let sink = Arc::new(Mutex::new(SampleLog::<64>::new()));
//!
//! let task = spawn_barometer(hal, BaroConfig::default(), sink.clone(), &supervisor)
//!     .expect("barometer configuration");
//!
//! // ... later
//! supervisor.request_stop();
//! println!("{}", task.join());
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod barometer;
pub mod device;
pub mod inertial;

#[cfg(feature = "std")]
pub mod runner;

pub use barometer::{barometer_cycle, BaroConfig, BarometerCycle};
pub use inertial::{inertial_cycle, InertialConfig, InertialCycle};

#[cfg(feature = "std")]
pub use barometer::spawn_barometer;
#[cfg(feature = "std")]
pub use inertial::spawn_inertial;
#[cfg(feature = "std")]
pub use runner::{spawn_periodic, HostTask, SpawnError, TaskHandle};
