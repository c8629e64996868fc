#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod decoder;
pub mod device;
pub mod interface;
pub mod registers;

// Re-export main types
pub use config::{
    AngleChannels, Axis, ConfigurationState, ConversionAverage, DeviceVersion, FullScale,
    InterruptMode, MagneticChannels, OperatingMode, RangeSelect, SleepTime,
};
pub use decoder::{MagDataMt, PhysicalSample, RawXyz, SampleRequest};
pub use device::{ConversionStatus, DeviceStatus, DriverSettings, DriverState, Tmag5273Driver};
pub use interface::I2cInterface;
pub use registers::{ConfigRegister, ModeRegister, StatusRegister, UnknownName};

/// TMAG5273A I2C address (default: 0x35)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_A: u8 = 0x35;

/// TMAG5273B factory I2C address (0x22)
pub const I2C_ADDRESS_B: u8 = 0x22;

/// TMAG5273C factory I2C address (0x78)
pub const I2C_ADDRESS_C: u8 = 0x78;

/// TMAG5273D factory I2C address (0x44)
pub const I2C_ADDRESS_D: u8 = 0x44;

/// Expected value of the 16-bit manufacturer ID (`"TI"`)
pub const MANUFACTURER_ID_VALUE: u16 = 0x5449;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transaction failed
    Bus(E),
    /// No conversion result within the configured timeout
    Timeout,
    /// Read attempted before the device was configured
    InvalidState,
    /// Unrecognized operating mode name
    UnknownMode,
    /// Unrecognized register name
    UnknownRegisterName,
    /// Unexpected manufacturer ID (contains the value read)
    InvalidDevice(u16),
    /// Invalid configuration parameter
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
