//! Loading configurations from parameter files

use sensorcycle_core::{AccelRange, GyroRange, IirFilter, Oversampling, Rotation, SensorConfig};
use sensorcycle_drivers::{BaroConfig, InertialConfig};

#[test]
fn baro_partial_file_keeps_defaults() {
    let config: BaroConfig = serde_json::from_str(r#"{ "oversampling": 4, "rate_hz": 50 }"#).unwrap();

    assert_eq!(config.oversampling, Oversampling::X4);
    assert_eq!(config.filter, IirFilter::Off);
    assert_eq!(config.rate_hz, 50);
    assert!(config.validate().is_ok());
}

#[test]
fn baro_unsupported_oversampling_rejected() {
    let result: Result<BaroConfig, _> = serde_json::from_str(r#"{ "oversampling": 3 }"#);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("unsupported oversampling selector 3"), "{err}");
}

#[test]
fn inertial_file_with_mounting() {
    let json = r#"{
        "accel_range": 8,
        "gyro_range": 500,
        "magnetometer": false,
        "rotation": "yaw90",
        "rate_hz": 400
    }"#;
    let config: InertialConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.accel_range, AccelRange::G8);
    assert_eq!(config.gyro_range, GyroRange::Dps500);
    assert_eq!(config.rotation, Rotation::Yaw90);
    assert_eq!(config.mag_rotation, Rotation::None);
    assert_eq!(config.channels().len(), 3);
}

#[test]
fn inertial_unsupported_range_rejected() {
    let result: Result<InertialConfig, _> = serde_json::from_str(r#"{ "gyro_range": 300 }"#);
    assert!(result.is_err());
}

#[test]
fn defaults_survive_a_round_trip() {
    let config = InertialConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""rotation":"roll180""#), "{json}");
    assert_eq!(serde_json::from_str::<InertialConfig>(&json).unwrap(), config);
}
