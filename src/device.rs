//! High-level driver API for the TMAG5273
//!
//! This module bridges [`ConfigurationState`] and the [`decoder`](crate::decoder)
//! to the bus: configuration is pushed register by register, results are
//! read in one burst and decoded into physical units.
//!
//! The driver starts [`DriverState::Unconfigured`]. The first successful
//! [`configure_device`](Tmag5273Driver::configure_device) moves it to
//! [`DriverState::Configured`]; every result or status read before that fails
//! with [`Error::InvalidState`].
//!
//! All operations take `&mut self`, so bus transactions are serialized and
//! a configuration write can never interleave with a burst read.

use crate::config::{ConfigurationState, DeviceVersion, FullScale};
use crate::decoder::{
    MagDataMt, PhysicalSample, RawXyz, SampleRequest, decode_angle, decode_magnitude,
    decode_temperature,
};
use crate::registers::{ModeRegister, StatusRegister, Tmag5273 as RegisterDevice, X_MSB_RESULT};
use crate::{Error, MANUFACTURER_ID_VALUE};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Interval between CONV_STATUS polls while waiting for a conversion
const POLL_INTERVAL_MS: u32 = 1;

/// Default bound on [`Tmag5273Driver::wait_for_conversion`]
pub const DEFAULT_CONVERSION_TIMEOUT_MS: u32 = 100;

/// Driver lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// No configuration has been pushed yet
    #[default]
    Unconfigured,
    /// Configuration pushed at least once
    Configured,
}

/// Runtime settings that are not device registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverSettings {
    /// Sensitivity version used to resolve full-scale ranges
    pub version: DeviceVersion,
    /// Upper bound for [`Tmag5273Driver::wait_for_conversion`] in ms
    pub conversion_timeout_ms: u32,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            version: DeviceVersion::V1,
            conversion_timeout_ms: DEFAULT_CONVERSION_TIMEOUT_MS,
        }
    }
}

/// CONV_STATUS register contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConversionStatus {
    /// A new conversion result is available
    pub result_ready: bool,
    /// A diagnostic fault was detected
    pub diagnostic_fault: bool,
    /// Rolling conversion set counter (3 bits)
    pub set_count: u8,
}

/// DEVICE_STATUS register contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct DeviceStatus {
    /// VCC dropped below the undervoltage threshold
    pub vcc_undervoltage: bool,
    /// OTP CRC check failed
    pub otp_crc_error: bool,
    /// INT pin held low externally
    pub int_pin_error: bool,
    /// Oscillator error
    pub oscillator_error: bool,
    /// Current INT pin level
    pub int_pin_level: bool,
}

/// Main driver for the TMAG5273
pub struct Tmag5273Driver<I> {
    device: RegisterDevice<I>,
    configuration: ConfigurationState,
    settings: DriverSettings,
    state: DriverState,
}

impl<I> Tmag5273Driver<I> {
    /// Create a new driver with default settings
    ///
    /// No bus traffic happens here. The configuration starts at the power-on
    /// defaults of [`ConfigurationState::new`].
    pub fn new(interface: I) -> Self {
        Self::with_settings(interface, DriverSettings::default())
    }

    /// Create a new driver with explicit settings
    pub fn with_settings(interface: I, settings: DriverSettings) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            configuration: ConfigurationState::new(),
            settings,
            state: DriverState::Unconfigured,
        }
    }

    /// Configuration that the next [`configure_device`](Self::configure_device) pushes
    pub const fn configuration(&self) -> &ConfigurationState {
        &self.configuration
    }

    /// Mutable access to the configuration
    ///
    /// Changes stay local until [`configure_device`](Self::configure_device)
    /// or [`set_operating_mode`](Self::set_operating_mode) writes them.
    pub const fn configuration_mut(&mut self) -> &mut ConfigurationState {
        &mut self.configuration
    }

    /// Current driver settings
    pub const fn settings(&self) -> &DriverSettings {
        &self.settings
    }

    /// Change the conversion wait bound
    pub const fn set_conversion_timeout_ms(&mut self, timeout_ms: u32) {
        self.settings.conversion_timeout_ms = timeout_ms;
    }

    /// Current lifecycle state
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Full-scale ranges used to decode magnetic results
    ///
    /// Derived from the local `SENSOR_CONFIG_2` range bits and the device version.
    pub fn full_scale(&self) -> FullScale {
        self.configuration.full_scale(self.settings.version)
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    pub const fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }

    fn ensure_configured<E>(&self) -> Result<(), Error<E>> {
        match self.state {
            DriverState::Configured => Ok(()),
            DriverState::Unconfigured => Err(Error::InvalidState),
        }
    }

    fn adopt_version<E>(
        &mut self,
        manufacturer_id: u16,
        ver: u8,
    ) -> Result<DeviceVersion, Error<E>> {
        if manufacturer_id != MANUFACTURER_ID_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Unexpected manufacturer ID 0x{:04X} (expected 0x{:04X})",
                manufacturer_id,
                MANUFACTURER_ID_VALUE
            );
            return Err(Error::InvalidDevice(manufacturer_id));
        }

        if let Some(version) = DeviceVersion::from_id(ver) {
            self.settings.version = version;
        }

        Ok(self.settings.version)
    }
}

#[cfg(not(feature = "async"))]
impl<I> Tmag5273Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Check the manufacturer ID and adopt the reported sensitivity version
    ///
    /// Allowed in either state; this is the identity check done before
    /// configuring the device.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The manufacturer ID is not `0x5449`
    pub fn verify_device(&mut self) -> Result<DeviceVersion, Error<I::Error>> {
        let manufacturer_id = self.device.manufacturer_id().read()?.manufacturer_id();

        let ver = self.read_device_version()?;
        self.adopt_version(manufacturer_id, ver)
    }

    /// Read the DEVICE_ID version field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_device_version(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.device_id().read()?;
        Ok(reg.ver())
    }

    /// Write every configuration register to the device
    ///
    /// Twelve single-register writes in [`ConfigRegister::WRITE_ORDER`](crate::ConfigRegister::WRITE_ORDER).
    /// The first failing write aborts the sequence and the driver state is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_device(&mut self) -> Result<(), Error<I::Error>> {
        for (register, value) in self.configuration.iter() {
            self.device
                .interface
                .write_register(register.address(), register.size_bits(), &[value])?;
        }

        self.state = DriverState::Configured;

        #[cfg(feature = "defmt")]
        defmt::debug!("Configuration pushed: {:02X}", self.configuration_bytes());

        Ok(())
    }

    /// Re-write the single configuration register selected by `mode`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_operating_mode(&mut self, mode: ModeRegister) -> Result<(), Error<I::Error>> {
        let register = mode.register();
        let value = self.configuration.get(register);
        self.device
            .interface
            .write_register(register.address(), register.size_bits(), &[value])?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Re-applied {} = 0x{:02X}", mode, value);

        Ok(())
    }

    /// [`set_operating_mode`](Self::set_operating_mode) by short name (`"DC1"`, `"DC2"`, `"SC1"`, `"SC2"`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMode`] for any other name, or an error if
    /// communication with the device fails.
    pub fn set_operating_mode_named(&mut self, name: &str) -> Result<(), Error<I::Error>> {
        let Ok(mode) = name.parse::<ModeRegister>() else {
            return Err(Error::UnknownMode);
        };
        self.set_operating_mode(mode)
    }

    /// Read an identification or status register
    ///
    /// 8-bit registers are returned zero-extended; the manufacturer ID is
    /// assembled as `(MSB << 8) | LSB`.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_configuration_register(
        &mut self,
        register: StatusRegister,
    ) -> Result<u16, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;

        let mut buffer = [0u8; 2];
        let len = (register.size_bits() / 8) as usize;
        self.device.interface.read_register(
            register.address(),
            register.size_bits(),
            &mut buffer[..len],
        )?;

        Ok(u16::from_le_bytes(buffer))
    }

    /// [`read_configuration_register`](Self::read_configuration_register) by
    /// short name (`"DID"`, `"MFID"`, `"CSREG"`, `"DSR"`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegisterName`] for any other name, or the
    /// errors of [`read_configuration_register`](Self::read_configuration_register).
    pub fn read_configuration_register_named(
        &mut self,
        name: &str,
    ) -> Result<u16, Error<I::Error>> {
        let Ok(register) = name.parse::<StatusRegister>() else {
            return Err(Error::UnknownRegisterName);
        };
        self.read_configuration_register(register)
    }

    /// Read CONV_STATUS
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_conversion_status(&mut self) -> Result<ConversionStatus, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.conv_status().read()?;
        Ok(ConversionStatus {
            result_ready: reg.result_status(),
            diagnostic_fault: reg.diag_status(),
            set_count: reg.set_count(),
        })
    }

    /// Read DEVICE_STATUS
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_device_status(&mut self) -> Result<DeviceStatus, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.device_status().read()?;
        Ok(DeviceStatus {
            vcc_undervoltage: reg.vcc_uv_er(),
            otp_crc_error: reg.otp_crc_er(),
            int_pin_error: reg.int_er(),
            oscillator_error: reg.osc_er(),
            int_pin_level: reg.intb_rb(),
        })
    }

    /// Wait until CONV_STATUS reports a new result
    ///
    /// Polls once per millisecond for at most
    /// [`DriverSettings::conversion_timeout_ms`].
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if no result arrives in time, or an error if
    /// the driver is not configured or communication with the device fails.
    pub fn wait_for_conversion<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.ensure_configured::<I::Error>()?;

        let attempts = (self.settings.conversion_timeout_ms / POLL_INTERVAL_MS).max(1);
        for _ in 0..attempts {
            if self.device.conv_status().read()?.result_status() {
                return Ok(());
            }
            delay.delay_ms(POLL_INTERVAL_MS);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "No conversion result after {} ms",
            self.settings.conversion_timeout_ms
        );

        Err(Error::Timeout)
    }

    /// Read the angle result in degrees
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_angle_data(&mut self) -> Result<f32, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.angle_result().read()?;
        Ok(decode_angle(reg.angle()))
    }

    /// Read the raw X/Y/Z results and CONV_STATUS in one burst
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_xyz_raw(&mut self) -> Result<RawXyz, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;

        // X_MSB_RESULT (0x12) through CONV_STATUS (0x18)
        let mut buffer = [0u8; 7];
        self.device
            .interface
            .read_register(X_MSB_RESULT, 56, &mut buffer)?;

        Ok(RawXyz::from_burst(&buffer))
    }

    /// Read the magnetic field on all three axes in mT
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_xyz_data(&mut self) -> Result<MagDataMt, Error<I::Error>> {
        let raw = self.read_xyz_raw()?;
        Ok(raw.to_mt(self.full_scale()))
    }

    /// Read the magnitude result code
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_magnitude_data(&mut self) -> Result<i32, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.magnitude_result().read()?;
        Ok(decode_magnitude(reg.magnitude()))
    }

    /// Read the die temperature in °C
    ///
    /// The two bytes starting at T_MSB_RESULT are taken low byte first.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_temperature_data(&mut self) -> Result<f32, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.t_result().read()?;
        Ok(decode_temperature(reg.t_adc()))
    }

    /// Read and decode any result
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub fn read_sample(
        &mut self,
        request: SampleRequest,
    ) -> Result<PhysicalSample, Error<I::Error>> {
        let sample = match request {
            SampleRequest::Angle => PhysicalSample::Angle {
                degrees: self.read_angle_data()?,
            },
            SampleRequest::MagneticField => PhysicalSample::MagneticField(self.read_xyz_data()?),
            SampleRequest::Temperature => PhysicalSample::Temperature {
                celsius: self.read_temperature_data()?,
            },
            SampleRequest::Magnitude => PhysicalSample::Magnitude {
                code: self.read_magnitude_data()?,
            },
        };
        Ok(sample)
    }
}

#[cfg(feature = "async")]
impl<I> Tmag5273Driver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Check the manufacturer ID and adopt the reported sensitivity version
    ///
    /// Allowed in either state; this is the identity check done before
    /// configuring the device.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The manufacturer ID is not `0x5449`
    pub async fn verify_device(&mut self) -> Result<DeviceVersion, Error<I::Error>> {
        let manufacturer_id = self
            .device
            .manufacturer_id()
            .read_async()
            .await?
            .manufacturer_id();

        let ver = self.read_device_version().await?;
        self.adopt_version(manufacturer_id, ver)
    }

    /// Read the DEVICE_ID version field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_device_version(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.device_id().read_async().await?;
        Ok(reg.ver())
    }

    /// Write every configuration register to the device
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_device(&mut self) -> Result<(), Error<I::Error>> {
        for (register, value) in self.configuration.iter() {
            self.device
                .interface
                .write_register(register.address(), register.size_bits(), &[value])
                .await?;
        }

        self.state = DriverState::Configured;

        #[cfg(feature = "defmt")]
        defmt::debug!("Configuration pushed: {:02X}", self.configuration_bytes());

        Ok(())
    }

    /// Re-write the single configuration register selected by `mode`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_operating_mode(&mut self, mode: ModeRegister) -> Result<(), Error<I::Error>> {
        let register = mode.register();
        let value = self.configuration.get(register);
        self.device
            .interface
            .write_register(register.address(), register.size_bits(), &[value])
            .await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Re-applied {} = 0x{:02X}", mode, value);

        Ok(())
    }

    /// [`set_operating_mode`](Self::set_operating_mode) by short name
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMode`] for an unrecognized name, or an error
    /// if communication with the device fails.
    pub async fn set_operating_mode_named(&mut self, name: &str) -> Result<(), Error<I::Error>> {
        let Ok(mode) = name.parse::<ModeRegister>() else {
            return Err(Error::UnknownMode);
        };
        self.set_operating_mode(mode).await
    }

    /// Read an identification or status register
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_configuration_register(
        &mut self,
        register: StatusRegister,
    ) -> Result<u16, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;

        let mut buffer = [0u8; 2];
        let len = (register.size_bits() / 8) as usize;
        self.device
            .interface
            .read_register(register.address(), register.size_bits(), &mut buffer[..len])
            .await?;

        Ok(u16::from_le_bytes(buffer))
    }

    /// [`read_configuration_register`](Self::read_configuration_register) by short name
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegisterName`] for an unrecognized name.
    pub async fn read_configuration_register_named(
        &mut self,
        name: &str,
    ) -> Result<u16, Error<I::Error>> {
        let Ok(register) = name.parse::<StatusRegister>() else {
            return Err(Error::UnknownRegisterName);
        };
        self.read_configuration_register(register).await
    }

    /// Read CONV_STATUS
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_conversion_status(&mut self) -> Result<ConversionStatus, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.conv_status().read_async().await?;
        Ok(ConversionStatus {
            result_ready: reg.result_status(),
            diagnostic_fault: reg.diag_status(),
            set_count: reg.set_count(),
        })
    }

    /// Read DEVICE_STATUS
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_device_status(&mut self) -> Result<DeviceStatus, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.device_status().read_async().await?;
        Ok(DeviceStatus {
            vcc_undervoltage: reg.vcc_uv_er(),
            otp_crc_error: reg.otp_crc_er(),
            int_pin_error: reg.int_er(),
            oscillator_error: reg.osc_er(),
            int_pin_level: reg.intb_rb(),
        })
    }

    /// Wait until CONV_STATUS reports a new result
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal_async::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if no result arrives within
    /// [`DriverSettings::conversion_timeout_ms`].
    pub async fn wait_for_conversion<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.ensure_configured::<I::Error>()?;

        let attempts = (self.settings.conversion_timeout_ms / POLL_INTERVAL_MS).max(1);
        for _ in 0..attempts {
            if self.device.conv_status().read_async().await?.result_status() {
                return Ok(());
            }
            delay.delay_ms(POLL_INTERVAL_MS).await;
        }

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "No conversion result after {} ms",
            self.settings.conversion_timeout_ms
        );

        Err(Error::Timeout)
    }

    /// Read the angle result in degrees
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_angle_data(&mut self) -> Result<f32, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.angle_result().read_async().await?;
        Ok(decode_angle(reg.angle()))
    }

    /// Read the raw X/Y/Z results and CONV_STATUS in one burst
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_xyz_raw(&mut self) -> Result<RawXyz, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;

        let mut buffer = [0u8; 7];
        self.device
            .interface
            .read_register(X_MSB_RESULT, 56, &mut buffer)
            .await?;

        Ok(RawXyz::from_burst(&buffer))
    }

    /// Read the magnetic field on all three axes in mT
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_xyz_data(&mut self) -> Result<MagDataMt, Error<I::Error>> {
        let raw = self.read_xyz_raw().await?;
        Ok(raw.to_mt(self.full_scale()))
    }

    /// Read the magnitude result code
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_magnitude_data(&mut self) -> Result<i32, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.magnitude_result().read_async().await?;
        Ok(decode_magnitude(reg.magnitude()))
    }

    /// Read the die temperature in °C
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_temperature_data(&mut self) -> Result<f32, Error<I::Error>> {
        self.ensure_configured::<I::Error>()?;
        let reg = self.device.t_result().read_async().await?;
        Ok(decode_temperature(reg.t_adc()))
    }

    /// Read and decode any result
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not configured or communication
    /// with the device fails.
    pub async fn read_sample(
        &mut self,
        request: SampleRequest,
    ) -> Result<PhysicalSample, Error<I::Error>> {
        let sample = match request {
            SampleRequest::Angle => PhysicalSample::Angle {
                degrees: self.read_angle_data().await?,
            },
            SampleRequest::MagneticField => {
                PhysicalSample::MagneticField(self.read_xyz_data().await?)
            }
            SampleRequest::Temperature => PhysicalSample::Temperature {
                celsius: self.read_temperature_data().await?,
            },
            SampleRequest::Magnitude => PhysicalSample::Magnitude {
                code: self.read_magnitude_data().await?,
            },
        };
        Ok(sample)
    }
}

#[cfg(feature = "defmt")]
impl<I> Tmag5273Driver<I> {
    fn configuration_bytes(&self) -> [u8; crate::ConfigRegister::COUNT] {
        let mut bytes = [0u8; crate::ConfigRegister::COUNT];
        for (slot, (_, value)) in bytes.iter_mut().zip(self.configuration.iter()) {
            *slot = value;
        }
        bytes
    }
}
