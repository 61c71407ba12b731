//! Full-Scale Range Selections and Their Scale Tables
//!
//! ## Background
//!
//! MEMS inertial sensors digitize over a fixed signed 16-bit range. The
//! full-scale selection decides what that range *means*: at ±2 g one count
//! is 0.061 mg, at ±16 g it is 0.488 mg. Wider ranges survive harder hits,
//! narrower ranges resolve finer motion.
//!
//! ```text
//! scale = full_scale / 32768          (physical units per count)
//! value = raw × scale
//! ```
//!
//! Barometers trade differently: the output format is fixed, but the
//! oversampling level decides how long one conversion takes and therefore
//! how fast the cycle may run.
//!
//! ## Table Design
//!
//! Every selector maps to a pre-computed constant. Nothing in the hot path
//! divides by a configured range; the conversion is a single multiply.
//!
//! | Selector | Scale per count |
//! |----------|-----------------|
//! | ±2 g     | 5.985e-4 m/s²   |
//! | ±16 g    | 4.788e-3 m/s²   |
//! | ±250 °/s | 1.332e-4 rad/s  |
//! | ±2000 °/s| 1.065e-3 rad/s  |
//!
//! ## Unsupported Selectors
//!
//! Selectors arriving as plain numbers (parameter files, command lines) go
//! through `from_*` constructors that return [`ConfigError`] for anything not
//! in the table. An unmapped selector is a deployment defect; it is never
//! rounded to the nearest supported value.

use crate::{
    constants::{DEG_TO_RAD, RAW_16BIT_FULL_SCALE, STANDARD_GRAVITY_M_PER_S2},
    errors::ConfigError,
};

const G: f32 = STANDARD_GRAVITY_M_PER_S2;

const ACCEL_2G_SCALE: f32 = 2.0 * G / RAW_16BIT_FULL_SCALE;
const ACCEL_4G_SCALE: f32 = 4.0 * G / RAW_16BIT_FULL_SCALE;
const ACCEL_8G_SCALE: f32 = 8.0 * G / RAW_16BIT_FULL_SCALE;
const ACCEL_16G_SCALE: f32 = 16.0 * G / RAW_16BIT_FULL_SCALE;

const GYRO_250_SCALE: f32 = 250.0 * DEG_TO_RAD / RAW_16BIT_FULL_SCALE;
const GYRO_500_SCALE: f32 = 500.0 * DEG_TO_RAD / RAW_16BIT_FULL_SCALE;
const GYRO_1000_SCALE: f32 = 1000.0 * DEG_TO_RAD / RAW_16BIT_FULL_SCALE;
const GYRO_2000_SCALE: f32 = 2000.0 * DEG_TO_RAD / RAW_16BIT_FULL_SCALE;

/// Accelerometer full-scale selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum AccelRange {
    /// ±2 g
    G2,
    /// ±4 g
    G4,
    /// ±8 g
    G8,
    /// ±16 g
    #[default]
    G16,
}

impl AccelRange {
    /// Select by magnitude in g
    pub fn from_g(g: u8) -> Result<Self, ConfigError> {
        match g {
            2 => Ok(Self::G2),
            4 => Ok(Self::G4),
            8 => Ok(Self::G8),
            16 => Ok(Self::G16),
            other => Err(ConfigError::UnsupportedSelector {
                quantity: "accel range",
                value: other as u32,
            }),
        }
    }

    /// Magnitude in g
    pub const fn g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// m/s² per count
    pub fn scale(self) -> f32 {
        match self {
            Self::G2 => ACCEL_2G_SCALE,
            Self::G4 => ACCEL_4G_SCALE,
            Self::G8 => ACCEL_8G_SCALE,
            Self::G16 => ACCEL_16G_SCALE,
        }
    }

    /// Full-scale bound in m/s²
    pub fn range(self) -> f32 {
        self.g() as f32 * G
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = ConfigError;

    fn try_from(g: u8) -> Result<Self, Self::Error> {
        Self::from_g(g)
    }
}

impl From<AccelRange> for u8 {
    fn from(range: AccelRange) -> Self {
        range.g()
    }
}

/// Gyroscope full-scale selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub enum GyroRange {
    /// ±250 °/s
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s
    #[default]
    Dps2000,
}

impl GyroRange {
    /// Select by magnitude in degrees per second
    pub fn from_dps(dps: u16) -> Result<Self, ConfigError> {
        match dps {
            250 => Ok(Self::Dps250),
            500 => Ok(Self::Dps500),
            1000 => Ok(Self::Dps1000),
            2000 => Ok(Self::Dps2000),
            other => Err(ConfigError::UnsupportedSelector {
                quantity: "gyro range",
                value: other as u32,
            }),
        }
    }

    /// Magnitude in degrees per second
    pub const fn dps(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }

    /// rad/s per count
    pub fn scale(self) -> f32 {
        match self {
            Self::Dps250 => GYRO_250_SCALE,
            Self::Dps500 => GYRO_500_SCALE,
            Self::Dps1000 => GYRO_1000_SCALE,
            Self::Dps2000 => GYRO_2000_SCALE,
        }
    }

    /// Full-scale bound in rad/s
    pub fn range(self) -> f32 {
        self.dps() as f32 * DEG_TO_RAD
    }
}

impl TryFrom<u16> for GyroRange {
    type Error = ConfigError;

    fn try_from(dps: u16) -> Result<Self, Self::Error> {
        Self::from_dps(dps)
    }
}

impl From<GyroRange> for u16 {
    fn from(range: GyroRange) -> Self {
        range.dps()
    }
}

/// Barometer pressure oversampling
///
/// Higher oversampling lowers noise and lengthens the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Oversampling {
    /// One sample per conversion
    X1,
    /// 2 samples
    X2,
    /// 4 samples
    X4,
    /// 8 samples
    X8,
    #[default]
    /// 16 samples
    X16,
}

impl Oversampling {
    /// Select by sample count
    pub fn from_ratio(ratio: u8) -> Result<Self, ConfigError> {
        match ratio {
            1 => Ok(Self::X1),
            2 => Ok(Self::X2),
            4 => Ok(Self::X4),
            8 => Ok(Self::X8),
            16 => Ok(Self::X16),
            other => Err(ConfigError::UnsupportedSelector {
                quantity: "oversampling",
                value: other as u32,
            }),
        }
    }

    /// Samples averaged per conversion
    pub const fn ratio(self) -> u8 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
            Self::X8 => 8,
            Self::X16 => 16,
        }
    }

    /// Typical duration of one forced-mode conversion (µs)
    ///
    /// Source: BMP280 datasheet, measurement time table (typical column)
    pub const fn conversion_time_us(self) -> u32 {
        match self {
            Self::X1 => 5_500,
            Self::X2 => 7_500,
            Self::X4 => 11_500,
            Self::X8 => 19_500,
            Self::X16 => 37_500,
        }
    }

    /// Fastest rate at which every read sees a fresh conversion (Hz)
    pub const fn max_rate_hz(self) -> u32 {
        1_000_000 / self.conversion_time_us()
    }
}

impl TryFrom<u8> for Oversampling {
    type Error = ConfigError;

    fn try_from(ratio: u8) -> Result<Self, Self::Error> {
        Self::from_ratio(ratio)
    }
}

impl From<Oversampling> for u8 {
    fn from(os: Oversampling) -> Self {
        os.ratio()
    }
}

/// Barometer internal IIR filter coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum IirFilter {
    /// Filter bypassed; smoothing is left to the consumer
    #[default]
    Off,
    /// Coefficient 2
    C2,
    /// Coefficient 4
    C4,
    /// Coefficient 8
    C8,
    /// Coefficient 16
    C16,
}

impl IirFilter {
    /// Select by coefficient, 0 meaning off
    pub fn from_coefficient(coefficient: u8) -> Result<Self, ConfigError> {
        match coefficient {
            0 => Ok(Self::Off),
            2 => Ok(Self::C2),
            4 => Ok(Self::C4),
            8 => Ok(Self::C8),
            16 => Ok(Self::C16),
            other => Err(ConfigError::UnsupportedSelector {
                quantity: "iir filter",
                value: other as u32,
            }),
        }
    }

    /// Filter coefficient, 0 when off
    pub const fn coefficient(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::C2 => 2,
            Self::C4 => 4,
            Self::C8 => 8,
            Self::C16 => 16,
        }
    }
}

impl TryFrom<u8> for IirFilter {
    type Error = ConfigError;

    fn try_from(coefficient: u8) -> Result<Self, Self::Error> {
        Self::from_coefficient(coefficient)
    }
}

impl From<IirFilter> for u8 {
    fn from(filter: IirFilter) -> Self {
        filter.coefficient()
    }
}
