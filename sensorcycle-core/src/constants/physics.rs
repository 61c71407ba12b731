//! Physical Constants for SensorCycle
//!
//! Fundamental constants the unit converter needs. Values are the
//! internationally agreed ones; no rounding beyond f32 precision.

use core::f32::consts::PI;

/// Standard acceleration of gravity (m/s²).
///
/// Conventional value used to express accelerometer ranges given in g.
///
/// Source: CGPM 1901, ISO 80000-3
pub const STANDARD_GRAVITY_M_PER_S2: f32 = 9.80665;

/// Degrees to radians conversion factor.
pub const DEG_TO_RAD: f32 = PI / 180.0;
