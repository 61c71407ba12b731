//! Barometer acquisition (BMP280-class)
//!
//! Two channels per tick: compensated pressure and die temperature. The
//! pressure conversion time depends on the oversampling level, so the
//! configured rate is checked against it before the task is built.

use fugit::HertzU32;
use sensorcycle_core::{
    constants::{sensors::DIE_TEMP_MAX_C, BARO_RATE_HZ, PRESSURE_SENSOR_MAX_PA},
    lifecycle::StopSignal,
    publish::Publisher,
    time::TimeSource,
    AcquisitionCycle, ChannelId, ChannelScale, ConfigError, IirFilter, Oversampling, RawSensor,
    SensorConfig, Unit,
};

use crate::device::{BMP280_C_PER_COUNT, BMP280_PA_PER_COUNT};

/// Task name used in logs and status output
pub const BAROMETER_TASK: &str = "baro";

const CHANNELS: [ChannelId; 2] = [ChannelId::Pressure, ChannelId::Temperature];

/// Barometer range configuration
///
/// Fields missing from a parameter file fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaroConfig {
    /// Pressure oversampling
    pub oversampling: Oversampling,

    /// Internal IIR filter, applied by the chip
    pub filter: IirFilter,

    /// Cycle rate (Hz)
    pub rate_hz: u32,
}

impl Default for BaroConfig {
    fn default() -> Self {
        Self {
            oversampling: Oversampling::X16,
            filter: IirFilter::Off,
            rate_hz: BARO_RATE_HZ,
        }
    }
}

impl SensorConfig for BaroConfig {
    fn channels(&self) -> &[ChannelId] {
        &CHANNELS
    }

    fn channel_scale(&self, channel: ChannelId) -> Result<ChannelScale, ConfigError> {
        match channel {
            ChannelId::Pressure => Ok(ChannelScale::scalar(
                Unit::Pascal,
                BMP280_PA_PER_COUNT,
                0.0,
                PRESSURE_SENSOR_MAX_PA,
            )),
            ChannelId::Temperature => Ok(ChannelScale::scalar(
                Unit::Celsius,
                BMP280_C_PER_COUNT,
                0.0,
                DIE_TEMP_MAX_C,
            )),
            other => Err(ConfigError::UnsupportedChannel(other)),
        }
    }

    fn rate(&self) -> HertzU32 {
        HertzU32::Hz(self.rate_hz)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rate_hz == 0 {
            return Err(ConfigError::ZeroRate);
        }

        let max_hz = self.oversampling.max_rate_hz();
        if self.rate_hz > max_hz {
            return Err(ConfigError::RateTooHigh {
                requested_hz: self.rate_hz,
                max_hz,
            });
        }
        Ok(())
    }
}

/// Acquisition cycle driving a barometer
pub type BarometerCycle<S, C, P, L> = AcquisitionCycle<S, C, P, L>;

/// Build the barometer cycle
pub fn barometer_cycle<S, C, P, L>(
    sensor: S,
    config: BaroConfig,
    clock: C,
    publisher: P,
    stop: L,
) -> Result<BarometerCycle<S, C, P, L>, ConfigError>
where
    S: RawSensor<Config = BaroConfig>,
    C: TimeSource,
    P: Publisher,
    L: StopSignal,
{
    AcquisitionCycle::new(BAROMETER_TASK, sensor, config, clock, publisher, stop)
}

/// Start the barometer cycle on its own thread at the configured rate
#[cfg(feature = "std")]
pub fn spawn_barometer<S, P>(
    sensor: S,
    config: BaroConfig,
    publisher: P,
    supervisor: &std::sync::Arc<sensorcycle_core::Supervisor>,
) -> Result<crate::runner::HostTask<S, P>, crate::runner::SpawnError>
where
    S: RawSensor<Config = BaroConfig> + Send + 'static,
    P: Publisher + Send + 'static,
{
    let cycle = barometer_cycle(
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
    use sensorcycle_core::{PhysicalValue, RawSample};

    #[test]
    fn defaults_run_at_25hz_with_x16() {
        let config = BaroConfig::default();
        assert_eq!(config.oversampling, Oversampling::X16);
        assert_eq!(config.filter, IirFilter::Off);
        assert_eq!(config.rate().to_Hz(), 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rate_faster_than_conversion_rejected() {
        let config = BaroConfig { rate_hz: 50, ..BaroConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RateTooHigh { requested_hz: 50, max_hz: 26 })
        );

        let config = BaroConfig { rate_hz: 50, oversampling: Oversampling::X4, ..BaroConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn pressure_scale_is_q24_8() {
        let scale = BaroConfig::default().channel_scale(ChannelId::Pressure).unwrap();
        let value = scale.convert(RawSample::Scalar(25_600)).as_scalar().unwrap();
        assert_eq!(value, 100.0);

        let scale = BaroConfig::default().channel_scale(ChannelId::Temperature).unwrap();
        assert_eq!(scale.convert(RawSample::Scalar(0)), PhysicalValue::Scalar(0.0));
    }

    #[test]
    fn inertial_channels_not_provided() {
        assert_eq!(
            BaroConfig::default().channel_scale(ChannelId::Gyro),
            Err(ConfigError::UnsupportedChannel(ChannelId::Gyro))
        );
    }
}
