//! Configuration register model
//!
//! [`ConfigurationState`] holds the desired value of each of the twelve
//! writable configuration registers. Nothing here touches the bus: values are
//! pushed to the device by
//! [`Tmag5273Driver::configure_device`](crate::Tmag5273Driver::configure_device).
//!
//! Raw access through [`ConfigurationState::set`] writes whole bytes without
//! checking bit semantics. The typed setters go through the field sets
//! generated in [`registers`](crate::registers), so they only touch their own
//! bit field, and reject values that do not fit.
//!
//! # Example
//!
//! ```ignore
//! # use tmag5273::config::{ConfigurationState, MagneticChannels, OperatingMode, SleepTime};
//! let mut config = ConfigurationState::new();
//! config.set_operating_mode(OperatingMode::WakeUpAndSleep);
//! config.set_sleep_time(SleepTime::Ms100);
//! config.set_magnetic_channels(MagneticChannels::Xy);
//! ```

use crate::Error;
use crate::registers::{ConfigRegister, field_sets};

/// DEVICE_CONFIG_2[1:0] operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Standby, conversions triggered on demand
    #[default]
    Standby = 0,
    /// Sleep
    Sleep = 1,
    /// Continuous conversion
    Continuous = 2,
    /// Periodic wake-up, one conversion, back to sleep
    WakeUpAndSleep = 3,
}

impl OperatingMode {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Standby,
            1 => Self::Sleep,
            2 => Self::Continuous,
            _ => Self::WakeUpAndSleep,
        }
    }
}

/// DEVICE_CONFIG_1[4:2] conversion averaging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionAverage {
    /// 1x (10 kSPS with one axis)
    X1 = 0,
    /// 2x
    X2 = 1,
    /// 4x
    X4 = 2,
    /// 8x
    X8 = 3,
    /// 16x
    X16 = 4,
    /// 32x (highest accuracy, slowest)
    X32 = 5,
}

impl ConversionAverage {
    /// Number of samples averaged per conversion
    #[must_use]
    pub const fn samples(self) -> u8 {
        1 << (self as u8)
    }
}

/// SENSOR_CONFIG_1[7:4] magnetic channel enable pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagneticChannels {
    /// All magnetic channels off
    Off = 0x0,
    /// X only
    X = 0x1,
    /// Y only
    Y = 0x2,
    /// X and Y
    Xy = 0x3,
    /// Z only
    Z = 0x4,
    /// Z and X
    Zx = 0x5,
    /// Y and Z
    Yz = 0x6,
    /// X, Y and Z
    Xyz = 0x7,
    /// X, Y, X pseudo-simultaneous sampling
    Xyx = 0x8,
    /// Y, X, Y pseudo-simultaneous sampling
    Yxy = 0x9,
    /// Y, Z, Y pseudo-simultaneous sampling
    Yzy = 0xA,
    /// X, Z, X pseudo-simultaneous sampling
    Xzx = 0xB,
}

/// SENSOR_CONFIG_1[3:0] sleep time in wake-up and sleep mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepTime {
    /// 1 ms
    Ms1 = 0x0,
    /// 5 ms
    Ms5 = 0x1,
    /// 10 ms
    Ms10 = 0x2,
    /// 15 ms
    Ms15 = 0x3,
    /// 20 ms
    Ms20 = 0x4,
    /// 30 ms
    Ms30 = 0x5,
    /// 50 ms
    Ms50 = 0x6,
    /// 100 ms
    Ms100 = 0x7,
    /// 500 ms
    Ms500 = 0x8,
    /// 1 s
    Ms1000 = 0x9,
    /// 2 s
    Ms2000 = 0xA,
    /// 5 s
    Ms5000 = 0xB,
    /// 20 s
    Ms20000 = 0xC,
}

impl SleepTime {
    /// Sleep duration in milliseconds
    #[must_use]
    pub const fn millis(self) -> u32 {
        match self {
            Self::Ms1 => 1,
            Self::Ms5 => 5,
            Self::Ms10 => 10,
            Self::Ms15 => 15,
            Self::Ms20 => 20,
            Self::Ms30 => 30,
            Self::Ms50 => 50,
            Self::Ms100 => 100,
            Self::Ms500 => 500,
            Self::Ms1000 => 1000,
            Self::Ms2000 => 2000,
            Self::Ms5000 => 5000,
            Self::Ms20000 => 20000,
        }
    }
}

/// SENSOR_CONFIG_2[3:2] channel pair used for the angle calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AngleChannels {
    /// Angle calculation disabled
    Off = 0,
    /// X and Y
    Xy = 1,
    /// Y and Z
    Yz = 2,
    /// X and Z
    Xz = 3,
}

/// INT_CONFIG_1[4:2] interrupt signalling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// No interrupt
    None = 0,
    /// Interrupt through the INT pin
    IntPin = 1,
    /// INT pin, held off while the I2C bus is busy
    IntPinExceptBusy = 2,
    /// Interrupt through SCL
    Scl = 3,
    /// SCL, held off while the I2C bus is busy
    SclExceptBusy = 4,
}

/// SENSOR_CONFIG_2 range select bit for an axis group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeSelect {
    /// ±40 mT on version 1 parts, ±133 mT on version 2 parts
    #[default]
    Low,
    /// ±80 mT on version 1 parts, ±266 mT on version 2 parts
    High,
}

/// Sensitivity version reported in DEVICE_ID[1:0]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceVersion {
    /// TMAG5273x1: ±40 / ±80 mT
    #[default]
    V1,
    /// TMAG5273x2: ±133 / ±266 mT
    V2,
}

impl DeviceVersion {
    /// Map the DEVICE_ID version field, `None` for reserved codes
    #[must_use]
    pub const fn from_id(ver: u8) -> Option<Self> {
        match ver & 0x03 {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            _ => None,
        }
    }

    /// Full-scale range in mT for the given range select
    #[must_use]
    pub const fn range_mt(self, select: RangeSelect) -> f32 {
        match (self, select) {
            (Self::V1, RangeSelect::Low) => 40.0,
            (Self::V1, RangeSelect::High) => 80.0,
            (Self::V2, RangeSelect::Low) => 133.0,
            (Self::V2, RangeSelect::High) => 266.0,
        }
    }
}

/// Magnetic axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

/// Active full-scale ranges in mT
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FullScale {
    /// X and Y axes
    pub xy_mt: f32,
    /// Z axis
    pub z_mt: f32,
}

impl Default for FullScale {
    fn default() -> Self {
        Self {
            xy_mt: 40.0,
            z_mt: 40.0,
        }
    }
}

/// Largest temperature threshold code (7 bits)
const T_THR_MAX: u8 = 0x7F;

/// In-memory mirror of the writable configuration registers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigurationState {
    values: [u8; ConfigRegister::COUNT],
}

impl ConfigurationState {
    /// Power-on defaults used by the driver
    ///
    /// - `SENSOR_CONFIG_1` = 0x74: X/Y/Z channels enabled, 20 ms sleep time
    /// - `SENSOR_CONFIG_2` = 0x04: low range, X/Y angle calculation
    /// - `T_CONFIG` = 0x01: temperature channel enabled
    /// - everything else 0x00
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [
                0x00, // DEVICE_CONFIG_1
                0x00, // DEVICE_CONFIG_2
                0x74, // SENSOR_CONFIG_1
                0x04, // SENSOR_CONFIG_2
                0x00, // X_THR_CONFIG
                0x00, // Y_THR_CONFIG
                0x00, // Z_THR_CONFIG
                0x01, // T_CONFIG
                0x00, // INT_CONFIG_1
                0x00, // MAG_GAIN_CONFIG
                0x00, // MAG_OFFSET_CONFIG_1
                0x00, // MAG_OFFSET_CONFIG_2
            ],
        }
    }

    /// Current value of a configuration register
    #[must_use]
    pub const fn get(&self, register: ConfigRegister) -> u8 {
        self.values[register.index()]
    }

    /// Overwrite a configuration register with a raw byte
    ///
    /// No bit-level validation is performed.
    pub const fn set(&mut self, register: ConfigRegister, value: u8) {
        self.values[register.index()] = value;
    }

    /// Iterate over `(register, value)` pairs in device write order
    pub fn iter(&self) -> impl Iterator<Item = (ConfigRegister, u8)> + '_ {
        ConfigRegister::WRITE_ORDER
            .iter()
            .map(move |&register| (register, self.get(register)))
    }

    /// Decode a configuration register through its generated field set
    fn fields<F>(&self, register: ConfigRegister) -> F
    where
        F: From<[u8; 1]>,
    {
        F::from([self.get(register)])
    }

    /// Read-modify-write one configuration register through its field set
    fn modify<F>(&mut self, register: ConfigRegister, f: impl FnOnce(&mut F))
    where
        F: From<[u8; 1]>,
        [u8; 1]: From<F>,
    {
        let mut fields = self.fields::<F>(register);
        f(&mut fields);
        let [value] = <[u8; 1]>::from(fields);
        self.set(register, value);
    }

    /// Set the operating mode in `DEVICE_CONFIG_2`
    pub fn set_operating_mode(&mut self, mode: OperatingMode) {
        self.modify::<field_sets::DeviceConfig2>(ConfigRegister::DeviceConfig2, |w| {
            w.set_operating_mode(mode as u8);
        });
    }

    /// Operating mode currently held in `DEVICE_CONFIG_2`
    #[must_use]
    pub fn operating_mode(&self) -> OperatingMode {
        let fields = self.fields::<field_sets::DeviceConfig2>(ConfigRegister::DeviceConfig2);
        OperatingMode::from_bits(fields.operating_mode())
    }

    /// Set conversion averaging in `DEVICE_CONFIG_1`
    pub fn set_conversion_average(&mut self, average: ConversionAverage) {
        self.modify::<field_sets::DeviceConfig1>(ConfigRegister::DeviceConfig1, |w| {
            w.set_conv_avg(average as u8);
        });
    }

    /// Set the enabled magnetic channels in `SENSOR_CONFIG_1`
    pub fn set_magnetic_channels(&mut self, channels: MagneticChannels) {
        self.modify::<field_sets::SensorConfig1>(ConfigRegister::SensorConfig1, |w| {
            w.set_mag_ch_en(channels as u8);
        });
    }

    /// Set the wake-up and sleep interval in `SENSOR_CONFIG_1`
    pub fn set_sleep_time(&mut self, sleep: SleepTime) {
        self.modify::<field_sets::SensorConfig1>(ConfigRegister::SensorConfig1, |w| {
            w.set_sleeptime(sleep as u8);
        });
    }

    /// Set the angle calculation channel pair in `SENSOR_CONFIG_2`
    pub fn set_angle_channels(&mut self, channels: AngleChannels) {
        self.modify::<field_sets::SensorConfig2>(ConfigRegister::SensorConfig2, |w| {
            w.set_angle_en(channels as u8);
        });
    }

    /// Select the X/Y range in `SENSOR_CONFIG_2`
    pub fn set_xy_range(&mut self, range: RangeSelect) {
        self.modify::<field_sets::SensorConfig2>(ConfigRegister::SensorConfig2, |w| {
            w.set_x_y_range(range == RangeSelect::High);
        });
    }

    /// Select the Z range in `SENSOR_CONFIG_2`
    pub fn set_z_range(&mut self, range: RangeSelect) {
        self.modify::<field_sets::SensorConfig2>(ConfigRegister::SensorConfig2, |w| {
            w.set_z_range(range == RangeSelect::High);
        });
    }

    /// Set the signed threshold code for one axis
    pub fn set_threshold(&mut self, axis: Axis, threshold: i8) {
        match axis {
            Axis::X => self.modify::<field_sets::XThrConfig>(ConfigRegister::XThreshold, |w| {
                w.set_x_thr(threshold);
            }),
            Axis::Y => self.modify::<field_sets::YThrConfig>(ConfigRegister::YThreshold, |w| {
                w.set_y_thr(threshold);
            }),
            Axis::Z => self.modify::<field_sets::ZThrConfig>(ConfigRegister::ZThreshold, |w| {
                w.set_z_thr(threshold);
            }),
        }
    }

    /// Signed threshold code for one axis
    #[must_use]
    pub fn threshold(&self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self
                .fields::<field_sets::XThrConfig>(ConfigRegister::XThreshold)
                .x_thr(),
            Axis::Y => self
                .fields::<field_sets::YThrConfig>(ConfigRegister::YThreshold)
                .y_thr(),
            Axis::Z => self
                .fields::<field_sets::ZThrConfig>(ConfigRegister::ZThreshold)
                .z_thr(),
        }
    }

    /// Enable or disable the temperature channel in `T_CONFIG`
    pub fn set_temperature_channel(&mut self, enable: bool) {
        self.modify::<field_sets::TConfig>(ConfigRegister::TemperatureConfig, |w| {
            w.set_t_ch_en(enable);
        });
    }

    /// Whether the temperature channel is enabled
    #[must_use]
    pub fn temperature_channel(&self) -> bool {
        self.fields::<field_sets::TConfig>(ConfigRegister::TemperatureConfig)
            .t_ch_en()
    }

    /// Set the 7-bit temperature threshold code in `T_CONFIG`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `code` does not fit in 7 bits. The
    /// state is left unchanged in that case.
    pub fn set_temperature_threshold(&mut self, code: u8) -> Result<(), Error<()>> {
        if code > T_THR_MAX {
            return Err(Error::InvalidConfig);
        }
        self.modify::<field_sets::TConfig>(ConfigRegister::TemperatureConfig, |w| {
            w.set_t_thr_config(code);
        });
        Ok(())
    }

    /// Select what drives the INT pin in `INT_CONFIG_1`
    pub fn set_interrupt_mode(&mut self, mode: InterruptMode) {
        self.modify::<field_sets::IntConfig1>(ConfigRegister::InterruptConfig, |w| {
            w.set_int_mode(mode as u8);
        });
    }

    /// Raise an interrupt when a conversion completes
    pub fn set_result_interrupt(&mut self, enable: bool) {
        self.modify::<field_sets::IntConfig1>(ConfigRegister::InterruptConfig, |w| {
            w.set_rslt_int(enable);
        });
    }

    /// Raise an interrupt when a threshold is crossed
    pub fn set_threshold_interrupt(&mut self, enable: bool) {
        self.modify::<field_sets::IntConfig1>(ConfigRegister::InterruptConfig, |w| {
            w.set_thrsld_int(enable);
        });
    }

    /// Set the gain correction code in `MAG_GAIN_CONFIG`
    pub fn set_magnetic_gain(&mut self, gain: u8) {
        self.modify::<field_sets::MagGainConfig>(ConfigRegister::MagneticGain, |w| {
            w.set_gain_value(gain);
        });
    }

    /// Set the signed offset correction codes of the two selected axes
    pub fn set_magnetic_offsets(&mut self, first: i8, second: i8) {
        self.modify::<field_sets::MagOffsetConfig1>(ConfigRegister::MagneticOffset1, |w| {
            w.set_offset_value(first);
        });
        self.modify::<field_sets::MagOffsetConfig2>(ConfigRegister::MagneticOffset2, |w| {
            w.set_offset_value(second);
        });
    }

    /// Full-scale ranges selected by `SENSOR_CONFIG_2` for a device version
    #[must_use]
    pub fn full_scale(&self, version: DeviceVersion) -> FullScale {
        let fields = self.fields::<field_sets::SensorConfig2>(ConfigRegister::SensorConfig2);
        let select = |high: bool| {
            if high {
                RangeSelect::High
            } else {
                RangeSelect::Low
            }
        };
        FullScale {
            xy_mt: version.range_mt(select(fields.x_y_range())),
            z_mt: version.range_mt(select(fields.z_range())),
        }
    }
}

impl Default for ConfigurationState {
    fn default() -> Self {
        Self::new()
    }
}
