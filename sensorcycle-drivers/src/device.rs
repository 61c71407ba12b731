//! Device Characteristics
//!
//! Raw output formats and identity values of the chips the drivers target.
//! The cycle never touches registers itself; these constants describe what
//! the HAL hands back so the configurations can build the right scales.

// ===== BMP280 BAROMETER =====

/// BMP280 `id` register value.
///
/// Source: BMP280 datasheet, register 0xD0
pub const BMP280_CHIP_ID: u8 = 0x58;

/// Pressure per raw count (Pa).
///
/// The compensated pressure comes out as an unsigned Q24.8 fixed-point value
/// in Pa; the HAL passes its integer representation through.
///
/// Source: BMP280 datasheet, 64-bit compensation formula
pub const BMP280_PA_PER_COUNT: f32 = 1.0 / 256.0;

/// Temperature per raw count (°C).
///
/// Compensated temperature is an integer in hundredths of a degree.
pub const BMP280_C_PER_COUNT: f32 = 0.01;

// ===== MPU-9250 IMU =====

/// MPU-9250 `WHO_AM_I` register value.
///
/// Source: MPU-9250 register map, register 0x75
pub const MPU9250_WHO_AM_I: u8 = 0x71;

/// Fastest sample rate with the digital low-pass filter enabled (Hz).
///
/// Source: MPU-9250 register map, SMPLRT_DIV description
pub const MPU9250_MAX_RATE_HZ: u32 = 1000;

/// Die temperature sensitivity (LSB/°C).
///
/// Source: MPU-9250 product specification, section 3.4.2
pub const MPU9250_TEMP_LSB_PER_C: f32 = 333.87;

/// Die temperature at raw 0 (°C).
pub const MPU9250_TEMP_OFFSET_C: f32 = 21.0;

// ===== AK8963 MAGNETOMETER =====

/// AK8963 `WIA` register value.
///
/// Source: AK8963 datasheet, register 0x00
pub const AK8963_DEVICE_ID: u8 = 0x48;

/// Magnetic flux density per raw count in 16-bit output mode (µT).
///
/// Source: AK8963 datasheet, 0.15 µT/LSB typical
pub const AK8963_UT_PER_COUNT: f32 = 0.15;

/// Magnetometer full-scale range (µT).
pub const AK8963_RANGE_UT: f32 = 4912.0;
