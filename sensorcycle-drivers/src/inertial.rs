//! Inertial acquisition (MPU-9250 class with AK8963 magnetometer)
//!
//! Up to four channels per tick: acceleration, angular rate, magnetic field
//! and die temperature. Accelerometer and gyro share one mounting; the
//! magnetometer die sits with its own axes and gets its own.
//!
//! The common board mounting is upside down, so the default rotation is
//! [`Rotation::Roll180`]: body = (x, −y, −z).

use fugit::HertzU32;
use sensorcycle_core::{
    constants::{sensors::DIE_TEMP_MAX_C, INERTIAL_RATE_HZ},
    lifecycle::StopSignal,
    publish::Publisher,
    time::TimeSource,
    AccelRange, AcquisitionCycle, ChannelId, ChannelScale, ConfigError, GyroRange, RawSensor,
    Rotation, SensorConfig, Unit,
};

use crate::device::{
    AK8963_RANGE_UT, AK8963_UT_PER_COUNT, MPU9250_MAX_RATE_HZ, MPU9250_TEMP_LSB_PER_C,
    MPU9250_TEMP_OFFSET_C,
};

/// Task name used in logs and status output
pub const INERTIAL_TASK: &str = "imu";

const WITH_MAG: [ChannelId; 4] = [
    ChannelId::Accel,
    ChannelId::Gyro,
    ChannelId::Mag,
    ChannelId::Temperature,
];

const WITHOUT_MAG: [ChannelId; 3] = [ChannelId::Accel, ChannelId::Gyro, ChannelId::Temperature];

/// IMU range configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InertialConfig {
    /// Accelerometer full scale
    pub accel_range: AccelRange,

    /// Gyro full scale
    pub gyro_range: GyroRange,

    /// Read and publish the magnetometer
    pub magnetometer: bool,

    /// Accelerometer and gyro mounting
    pub rotation: Rotation,

    /// Magnetometer mounting
    pub mag_rotation: Rotation,

    /// Cycle rate (Hz)
    pub rate_hz: u32,
}

impl Default for InertialConfig {
    fn default() -> Self {
        Self {
            accel_range: AccelRange::G16,
            gyro_range: GyroRange::Dps2000,
            magnetometer: true,
            rotation: Rotation::Roll180,
            mag_rotation: Rotation::None,
            rate_hz: INERTIAL_RATE_HZ,
        }
    }
}

impl SensorConfig for InertialConfig {
    fn channels(&self) -> &[ChannelId] {
        if self.magnetometer {
            &WITH_MAG
        } else {
            &WITHOUT_MAG
        }
    }

    fn channel_scale(&self, channel: ChannelId) -> Result<ChannelScale, ConfigError> {
        match channel {
            ChannelId::Accel => Ok(ChannelScale::vector(
                Unit::MetersPerSecondSquared,
                self.accel_range.scale(),
                self.accel_range.range(),
                self.rotation.into(),
            )),
            ChannelId::Gyro => Ok(ChannelScale::vector(
                Unit::RadiansPerSecond,
                self.gyro_range.scale(),
                self.gyro_range.range(),
                self.rotation.into(),
            )),
            ChannelId::Mag if self.magnetometer => Ok(ChannelScale::vector(
                Unit::Microtesla,
                AK8963_UT_PER_COUNT,
                AK8963_RANGE_UT,
                self.mag_rotation.into(),
            )),
            ChannelId::Temperature => Ok(ChannelScale::scalar(
                Unit::Celsius,
                1.0 / MPU9250_TEMP_LSB_PER_C,
                MPU9250_TEMP_OFFSET_C,
                DIE_TEMP_MAX_C,
            )),
            other => Err(ConfigError::UnsupportedChannel(other)),
        }
    }

    fn rate(&self) -> HertzU32 {
        HertzU32::Hz(self.rate_hz)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.rate_hz {
            0 => Err(ConfigError::ZeroRate),
            hz if hz > MPU9250_MAX_RATE_HZ => Err(ConfigError::RateTooHigh {
                requested_hz: hz,
                max_hz: MPU9250_MAX_RATE_HZ,
            }),
            _ => Ok(()),
        }
    }
}

/// Acquisition cycle driving an IMU
pub type InertialCycle<S, C, P, L> = AcquisitionCycle<S, C, P, L>;

/// Build the inertial cycle
pub fn inertial_cycle<S, C, P, L>(
    sensor: S,
    config: InertialConfig,
    clock: C,
    publisher: P,
    stop: L,
) -> Result<InertialCycle<S, C, P, L>, ConfigError>
where
    S: RawSensor<Config = InertialConfig>,
    C: TimeSource,
    P: Publisher,
    L: StopSignal,
{
    AcquisitionCycle::new(INERTIAL_TASK, sensor, config, clock, publisher, stop)
}

/// Start the inertial cycle on its own thread at the configured rate
#[cfg(feature = "std")]
pub fn spawn_inertial<S, P>(
    sensor: S,
    config: InertialConfig,
    publisher: P,
    supervisor: &std::sync::Arc<sensorcycle_core::Supervisor>,
) -> Result<crate::runner::HostTask<S, P>, crate::runner::SpawnError>
where
    S: RawSensor<Config = InertialConfig> + Send + 'static,
    P: Publisher + Send + 'static,
{
    let cycle = inertial_cycle(
        sensor,
        config,
        sensorcycle_core::time::MonotonicTime::new(),
        publisher,
        supervisor.clone(),
    )?;
    crate::runner::spawn_periodic(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorcycle_core::RawSample;

    #[test]
    fn magnetometer_toggles_channel_list() {
        let config = InertialConfig::default();
        assert_eq!(config.channels(), &WITH_MAG);

        let config = InertialConfig { magnetometer: false, ..config };
        assert_eq!(config.channels(), &WITHOUT_MAG);
        assert_eq!(
            config.channel_scale(ChannelId::Mag),
            Err(ConfigError::UnsupportedChannel(ChannelId::Mag))
        );
    }

    #[test]
    fn accel_default_is_16g_roll180() {
        let scale = InertialConfig::default().channel_scale(ChannelId::Accel).unwrap();
        // 1 g on the sensor z axis reads as -1 g in body frame
        let counts = (32768.0 / 16.0) as i32;
        let [x, y, z] = scale.convert(RawSample::Vector([0, 0, counts])).as_vector().unwrap();
        assert_eq!((x, y), (0.0, -0.0));
        assert!((z + 9.80665).abs() < 1e-3);
    }

    #[test]
    fn magnetometer_is_not_rotated_by_default() {
        let scale = InertialConfig::default().channel_scale(ChannelId::Mag).unwrap();
        let value = scale.convert(RawSample::Vector([100, -100, 200])).as_vector().unwrap();
        assert!((value[0] - 15.0).abs() < 1e-4);
        assert!((value[1] + 15.0).abs() < 1e-4);
        assert!((value[2] - 30.0).abs() < 1e-4);
    }

    #[test]
    fn die_temperature_offset() {
        let scale = InertialConfig::default().channel_scale(ChannelId::Temperature).unwrap();
        let value = scale.convert(RawSample::Scalar(-3339)).as_scalar().unwrap();
        assert!((value - 11.0).abs() < 0.01);
    }

    #[test]
    fn rate_bounded_by_sample_rate_divider() {
        let config = InertialConfig { rate_hz: 2000, ..InertialConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::RateTooHigh { max_hz: 1000, .. })));
        let config = InertialConfig { rate_hz: 0, ..InertialConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRate));
    }
}
