//! Rate limits enforced by the driver configurations

use proptest::prelude::*;

use sensorcycle_core::{ConfigError, Oversampling, SensorConfig};
use sensorcycle_drivers::{device::MPU9250_MAX_RATE_HZ, BaroConfig, InertialConfig};

fn oversampling() -> impl Strategy<Value = Oversampling> {
    prop::sample::select(vec![1u8, 2, 4, 8, 16])
        .prop_map(|ratio| Oversampling::from_ratio(ratio).unwrap())
}

proptest! {
    #[test]
    fn baro_rejects_exactly_rates_above_conversion_limit(
        oversampling in oversampling(),
        rate_hz in 1u32..400,
    ) {
        let config = BaroConfig { oversampling, rate_hz, ..BaroConfig::default() };
        let max_hz = oversampling.max_rate_hz();

        match config.validate() {
            Ok(()) => prop_assert!(rate_hz <= max_hz),
            Err(err) => {
                prop_assert!(rate_hz > max_hz);
                prop_assert_eq!(err, ConfigError::RateTooHigh { requested_hz: rate_hz, max_hz });
            }
        }
    }

    #[test]
    fn inertial_accepts_every_rate_up_to_chip_limit(rate_hz in 1u32..=2 * MPU9250_MAX_RATE_HZ) {
        let config = InertialConfig { rate_hz, ..InertialConfig::default() };
        prop_assert_eq!(config.validate().is_ok(), rate_hz <= MPU9250_MAX_RATE_HZ);
    }
}

#[test]
fn zero_rate_rejected_by_both() {
    let baro = BaroConfig { rate_hz: 0, ..BaroConfig::default() };
    let imu = InertialConfig { rate_hz: 0, ..InertialConfig::default() };
    assert_eq!(baro.validate(), Err(ConfigError::ZeroRate));
    assert_eq!(imu.validate(), Err(ConfigError::ZeroRate));
}
