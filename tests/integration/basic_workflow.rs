//! Integration tests for basic workflow scenarios

use crate::common::{MockDelay, create_mock_driver, test_utils};
use tmag5273::{
    AngleChannels, ConversionAverage, DeviceVersion, DriverState, MagneticChannels, ModeRegister,
    OperatingMode, PhysicalSample, SampleRequest,
};

#[test]
fn test_complete_measurement_workflow() {
    let (mut driver, interface) = create_mock_driver();

    // Identify the part
    assert_eq!(driver.verify_device().unwrap(), DeviceVersion::V1);

    // Configure continuous X/Y/Z conversion with angle calculation
    let config = driver.configuration_mut();
    config.set_operating_mode(OperatingMode::Continuous);
    config.set_conversion_average(ConversionAverage::X4);
    config.set_magnetic_channels(MagneticChannels::Xyz);
    config.set_angle_channels(AngleChannels::Xy);
    driver.configure_device().unwrap();
    assert_eq!(driver.state(), DriverState::Configured);

    // Set up mock results
    interface.set_xyz_data(0x2000, 0x2000, 0, 0x01);
    interface.set_angle_data(45 << 4);
    interface.set_temperature_code(17508);
    interface.conversion_ready_after(1);

    let mut delay = MockDelay::default();
    driver.wait_for_conversion(&mut delay).unwrap();

    let field = driver.read_xyz_data().unwrap();
    test_utils::assert_float_eq(field.x, 10.0, 0.001);
    test_utils::assert_float_eq(field.y, 10.0, 0.001);
    test_utils::assert_float_eq(field.angle_xy(), 45.0, 0.01);
    test_utils::assert_float_eq(field.magnitude(), 14.142, 0.01);

    let angle = driver.read_angle_data().unwrap();
    test_utils::assert_float_eq(angle, 45.0, 0.001);

    let temp = driver.read_temperature_data().unwrap();
    assert!(temp > -40.0 && temp < 125.0);
}

#[test]
fn test_wake_up_and_sleep_reconfiguration() {
    let (mut driver, interface) = create_mock_driver();
    driver.configure_device().unwrap();
    interface.clear_operations();

    // Change only the mode and re-apply DEVICE_CONFIG_2
    driver
        .configuration_mut()
        .set_operating_mode(OperatingMode::WakeUpAndSleep);
    driver.set_operating_mode(ModeRegister::DeviceConfig2).unwrap();

    assert_eq!(interface.writes(), vec![(0x01, 0x03)]);
    assert_eq!(interface.get_register(0x01), 0x03);
}

#[test]
fn test_error_recovery() {
    let (mut driver, interface) = create_mock_driver();
    driver.configure_device().unwrap();

    interface.fail_next_read();
    assert!(driver.read_sample(SampleRequest::Angle).is_err());

    // The next read works again
    interface.set_angle_data(90 << 4);
    let sample = driver.read_sample(SampleRequest::Angle).unwrap();
    assert_eq!(sample, PhysicalSample::Angle { degrees: 90.0 });
}

#[test]
fn test_repeated_reads_follow_the_device() {
    let (mut driver, interface) = create_mock_driver();
    driver.configure_device().unwrap();

    for step in 0..4u16 {
        interface.set_angle_data((step * 90) << 4);
        let angle = driver.read_angle_data().unwrap();
        test_utils::assert_float_eq(angle, f32::from(step * 90), 0.001);
    }
}
