//! Sensor Specifications and Limits
//!
//! Full-scale limits and raw data formats shared by the sensor families the
//! cycle drives. Device-specific sensitivities live with the device
//! configurations.

// ===== RAW DATA FORMATS =====

/// Counts corresponding to full scale of a signed 16-bit output.
///
/// MEMS inertial sensors report ±full-scale over the i16 range, so one count
/// is `full_scale / 32768`.
pub const RAW_16BIT_FULL_SCALE: f32 = 32768.0;

// ===== PRESSURE SENSOR SPECIFICATIONS =====

/// Maximum measurable atmospheric pressure (Pa).
///
/// Source: BMP280 datasheet
pub const PRESSURE_SENSOR_MAX_PA: f32 = 110_000.0;

// ===== TEMPERATURE SENSOR SPECIFICATIONS =====

/// Maximum operating temperature for MEMS sensor dies (°C).
///
/// Source: BMP280 / MPU-9250 datasheets
pub const DIE_TEMP_MAX_C: f32 = 85.0;
