//! Constants for SensorCycle Core
//!
//! Centralized, documented constants used throughout the acquisition engine.
//! Every numeric value carries its unit in the name and a source where one
//! exists.
//!
//! ## Organization
//!
//! - **Physics**: fundamental constants used by unit conversion
//! - **Sensors**: full-scale and raw-format characteristics
//! - **Time**: rates and intervals for the two cycle instances

/// Physical constants used by raw-to-physical conversion.
pub mod physics;

/// Sensor full-scale limits and raw data formats.
pub mod sensors;

/// Sampling rates and time conversion factors.
pub mod time;

// Re-export commonly used constants for convenience
pub use physics::{STANDARD_GRAVITY_M_PER_S2, DEG_TO_RAD};

pub use sensors::{RAW_16BIT_FULL_SCALE, PRESSURE_SENSOR_MAX_PA};

pub use time::{US_PER_SECOND, BARO_RATE_HZ, INERTIAL_RATE_HZ};
