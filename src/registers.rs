//! Register definitions for the TMAG5273
//!
//! The TMAG5273 exposes a flat 8-bit address space (0x00-0x1C). Addresses
//! 0x00-0x0B hold the twelve configuration registers the driver mirrors in
//! [`ConfigurationState`](crate::config::ConfigurationState); the rest are
//! identification, status and conversion result registers. The I2C address
//! override at 0x0C is not modelled.
//!
//! ## Layout
//! - **0x00-0x0B**: Device, sensor, threshold, interrupt and correction configuration
//! - **0x0D-0x0F**: Device and manufacturer identification
//! - **0x10-0x17**: Temperature and X/Y/Z conversion results
//! - **0x18**: Conversion status
//! - **0x19-0x1B**: Angle and magnitude results
//! - **0x1C**: Device status

device_driver::create_device!(
    device_name: Tmag5273,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        // ==================== CONFIGURATION ====================

        /// DEVICE_CONFIG_1 - Device Configuration 1 (0x00)
        register DeviceConfig1 {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// I2C read mode (0=standard 3-byte, 1=1-byte 16-bit, 2=1-byte 8-bit)
            i2c_rd: uint = 0..2,
            /// Conversion averaging (0=1x ... 5=32x)
            conv_avg: uint = 2..5,
            /// Temperature coefficient of the magnet
            mag_tempco: uint = 5..7,
            /// CRC enable for I2C reads
            crc_en: bool = 7,
        },

        /// DEVICE_CONFIG_2 - Device Configuration 2 (0x01)
        register DeviceConfig2 {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;

            /// Operating mode (0=standby, 1=sleep, 2=continuous, 3=wake-up and sleep)
            operating_mode: uint = 0..2,
            /// Conversion trigger (0=I2C command, 1=INT pin)
            trigger_mode: bool = 2,
            /// I2C glitch filter disable
            i2c_glitch_filter: bool = 3,
            /// Low-noise mode select (0=low active current, 1=low noise)
            lp_ln: bool = 4,
            /// Threshold hysteresis
            thr_hyst: uint = 5..8,
        },

        /// SENSOR_CONFIG_1 - Sensor Configuration 1 (0x02)
        register SensorConfig1 {
            const ADDRESS = 0x02;
            const SIZE_BITS = 8;

            /// Sleep time between conversions in wake-up and sleep mode
            sleeptime: uint = 0..4,
            /// Magnetic channel enable pattern
            mag_ch_en: uint = 4..8,
        },

        /// SENSOR_CONFIG_2 - Sensor Configuration 2 (0x03)
        register SensorConfig2 {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;

            /// Z axis range select (0=low, 1=high)
            z_range: bool = 0,
            /// X/Y axes range select (0=low, 1=high)
            x_y_range: bool = 1,
            /// Angle calculation channel pair (0=off, 1=XY, 2=YZ, 3=XZ)
            angle_en: uint = 2..4,
            /// Gain correction channel select
            mag_gain_ch: bool = 4,
            /// Threshold direction
            mag_thr_dir: bool = 5,
            /// Threshold crossing count before interrupt
            thrx_count: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// X_THR_CONFIG - X Axis Threshold (0x04)
        register XThrConfig {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;

            /// Signed threshold code
            x_thr: int = 0..8,
        },

        /// Y_THR_CONFIG - Y Axis Threshold (0x05)
        register YThrConfig {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;

            /// Signed threshold code
            y_thr: int = 0..8,
        },

        /// Z_THR_CONFIG - Z Axis Threshold (0x06)
        register ZThrConfig {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;

            /// Signed threshold code
            z_thr: int = 0..8,
        },

        /// T_CONFIG - Temperature Configuration (0x07)
        register TConfig {
            const ADDRESS = 0x07;
            const SIZE_BITS = 8;

            /// Temperature channel enable
            t_ch_en: bool = 0,
            /// Temperature threshold code
            t_thr_config: uint = 1..8,
        },

        /// INT_CONFIG_1 - Interrupt Configuration (0x08)
        register IntConfig1 {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            /// Mask INT pin when INT is connected to GND
            mask_intb: bool = 0,
            reserved_1: uint = 1..2,
            /// Interrupt mode
            int_mode: uint = 2..5,
            /// Latched (0) or pulsed (1) interrupt
            int_state: bool = 5,
            /// Interrupt on threshold crossing
            thrsld_int: bool = 6,
            /// Interrupt on conversion complete
            rslt_int: bool = 7,
        },

        /// MAG_GAIN_CONFIG - Magnetic Gain Correction (0x09)
        register MagGainConfig {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;

            /// Fractional gain correction code
            gain_value: uint = 0..8,
        },

        /// MAG_OFFSET_CONFIG_1 - First Axis Offset Correction (0x0A)
        register MagOffsetConfig1 {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;

            /// Signed offset code
            offset_value: int = 0..8,
        },

        /// MAG_OFFSET_CONFIG_2 - Second Axis Offset Correction (0x0B)
        register MagOffsetConfig2 {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;

            /// Signed offset code
            offset_value: int = 0..8,
        },

        // ==================== IDENTIFICATION ====================

        /// DEVICE_ID - Device Version (0x0D)
        register DeviceId {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;

            /// Sensitivity version (1=±40/±80 mT, 2=±133/±266 mT)
            ver: uint = 0..2,
            reserved_7_2: uint = 2..8,
        },

        /// MANUFACTURER_ID_LSB/MSB (0x0E-0x0F), reads 0x5449 ("TI")
        register ManufacturerId {
            type Access = RO;
            type ByteOrder = LE;
            const ADDRESS = 0x0E;
            const SIZE_BITS = 16;

            manufacturer_id: uint = 0..16,
        },

        // ==================== RESULTS ====================

        /// T_MSB_RESULT/T_LSB_RESULT (0x10-0x11)
        ///
        /// The first byte on the wire is taken as the low byte of the ADC code.
        register TResult {
            type Access = RO;
            type ByteOrder = LE;
            const ADDRESS = 0x10;
            const SIZE_BITS = 16;

            /// Temperature ADC code
            t_adc: uint = 0..16,
        },

        /// CONV_STATUS - Conversion Status (0x18)
        register ConvStatus {
            const ADDRESS = 0x18;
            const SIZE_BITS = 8;

            /// Conversion data ready
            result_status: bool = 0,
            /// Diagnostic fault detected
            diag_status: bool = 1,
            reserved_4_2: uint = 2..5,
            /// Rolling count of conversion sets
            set_count: uint = 5..8,
        },

        /// ANGLE_RESULT_MSB/LSB (0x19-0x1A)
        register AngleResult {
            type Access = RO;
            const ADDRESS = 0x19;
            const SIZE_BITS = 16;

            /// 12.4 fixed point degrees in bits 12:0
            angle: uint = 0..16,
        },

        /// MAGNITUDE_RESULT (0x1B)
        register MagnitudeResult {
            type Access = RO;
            const ADDRESS = 0x1B;
            const SIZE_BITS = 8;

            magnitude: uint = 0..8,
        },

        /// DEVICE_STATUS - Device Status (0x1C)
        register DeviceStatus {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 8;

            /// VCC undervoltage detected
            vcc_uv_er: bool = 0,
            /// OTP CRC error
            otp_crc_er: bool = 1,
            /// INT pin driven low externally
            int_er: bool = 2,
            /// Oscillator error
            osc_er: bool = 3,
            /// Level of the INT pin
            intb_rb: bool = 4,
            reserved_7_5: uint = 5..8,
        }
    }
);

/// Temperature result, MSB register (start of the 2-byte temperature read)
pub const T_MSB_RESULT: u8 = 0x10;

/// X axis result, MSB register (start of the 7-byte XYZ burst)
pub const X_MSB_RESULT: u8 = 0x12;

/// Angle result, MSB register
pub const ANGLE_RESULT_MSB: u8 = 0x19;

/// Magnitude result register
pub const MAGNITUDE_RESULT: u8 = 0x1B;

/// Writable configuration registers mirrored by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigRegister {
    /// DEVICE_CONFIG_1 (0x00)
    DeviceConfig1,
    /// DEVICE_CONFIG_2 (0x01)
    DeviceConfig2,
    /// SENSOR_CONFIG_1 (0x02)
    SensorConfig1,
    /// SENSOR_CONFIG_2 (0x03)
    SensorConfig2,
    /// X_THR_CONFIG (0x04)
    XThreshold,
    /// Y_THR_CONFIG (0x05)
    YThreshold,
    /// Z_THR_CONFIG (0x06)
    ZThreshold,
    /// T_CONFIG (0x07)
    TemperatureConfig,
    /// INT_CONFIG_1 (0x08)
    InterruptConfig,
    /// MAG_GAIN_CONFIG (0x09)
    MagneticGain,
    /// MAG_OFFSET_CONFIG_1 (0x0A)
    MagneticOffset1,
    /// MAG_OFFSET_CONFIG_2 (0x0B)
    MagneticOffset2,
}

impl ConfigRegister {
    /// Number of configuration registers
    pub const COUNT: usize = 12;

    /// Order in which [`configure_device`](crate::Tmag5273Driver::configure_device)
    /// writes the registers
    pub const WRITE_ORDER: [Self; Self::COUNT] = [
        Self::DeviceConfig1,
        Self::DeviceConfig2,
        Self::SensorConfig1,
        Self::SensorConfig2,
        Self::XThreshold,
        Self::YThreshold,
        Self::ZThreshold,
        Self::TemperatureConfig,
        Self::InterruptConfig,
        Self::MagneticGain,
        Self::MagneticOffset1,
        Self::MagneticOffset2,
    ];

    /// Register address on the device
    #[must_use]
    pub const fn address(self) -> u8 {
        self.index() as u8
    }

    /// Register width in bits (all configuration registers are whole bytes)
    #[must_use]
    pub const fn size_bits(self) -> u32 {
        8
    }

    /// Position of this register in [`WRITE_ORDER`](Self::WRITE_ORDER)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::DeviceConfig1 => 0,
            Self::DeviceConfig2 => 1,
            Self::SensorConfig1 => 2,
            Self::SensorConfig2 => 3,
            Self::XThreshold => 4,
            Self::YThreshold => 5,
            Self::ZThreshold => 6,
            Self::TemperatureConfig => 7,
            Self::InterruptConfig => 8,
            Self::MagneticGain => 9,
            Self::MagneticOffset1 => 10,
            Self::MagneticOffset2 => 11,
        }
    }
}

/// Configuration registers that can be re-applied on their own with
/// [`set_operating_mode`](crate::Tmag5273Driver::set_operating_mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeRegister {
    /// DEVICE_CONFIG_1 (short name `DC1`)
    DeviceConfig1,
    /// DEVICE_CONFIG_2 (short name `DC2`)
    DeviceConfig2,
    /// SENSOR_CONFIG_1 (short name `SC1`)
    SensorConfig1,
    /// SENSOR_CONFIG_2 (short name `SC2`)
    SensorConfig2,
}

impl ModeRegister {
    /// Configuration register written for this mode
    #[must_use]
    pub const fn register(self) -> ConfigRegister {
        match self {
            Self::DeviceConfig1 => ConfigRegister::DeviceConfig1,
            Self::DeviceConfig2 => ConfigRegister::DeviceConfig2,
            Self::SensorConfig1 => ConfigRegister::SensorConfig1,
            Self::SensorConfig2 => ConfigRegister::SensorConfig2,
        }
    }
}

impl core::str::FromStr for ModeRegister {
    type Err = UnknownName;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "DC1" => Ok(Self::DeviceConfig1),
            "DC2" => Ok(Self::DeviceConfig2),
            "SC1" => Ok(Self::SensorConfig1),
            "SC2" => Ok(Self::SensorConfig2),
            _ => Err(UnknownName),
        }
    }
}

/// Identification and status registers readable with
/// [`read_configuration_register`](crate::Tmag5273Driver::read_configuration_register)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusRegister {
    /// DEVICE_ID (0x0D), short name `DID`
    DeviceId,
    /// MANUFACTURER_ID_LSB/MSB (0x0E-0x0F), short name `MFID`
    ManufacturerId,
    /// CONV_STATUS (0x18), short name `CSREG`
    ConversionStatus,
    /// DEVICE_STATUS (0x1C), short name `DSR`
    DeviceStatus,
}

impl StatusRegister {
    /// Address of the first byte read
    #[must_use]
    pub const fn address(self) -> u8 {
        match self {
            Self::DeviceId => 0x0D,
            Self::ManufacturerId => 0x0E,
            Self::ConversionStatus => 0x18,
            Self::DeviceStatus => 0x1C,
        }
    }

    /// Read width in bits
    #[must_use]
    pub const fn size_bits(self) -> u32 {
        match self {
            Self::ManufacturerId => 16,
            _ => 8,
        }
    }
}

impl core::str::FromStr for StatusRegister {
    type Err = UnknownName;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "DID" => Ok(Self::DeviceId),
            "MFID" => Ok(Self::ManufacturerId),
            "CSREG" => Ok(Self::ConversionStatus),
            "DSR" => Ok(Self::DeviceStatus),
            _ => Err(UnknownName),
        }
    }
}

/// A symbolic register or mode name was not recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownName;
