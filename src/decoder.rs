//! Raw result decoding
//!
//! Pure conversions from result register bytes to physical values. Every
//! 16-bit result is assembled as `(MSB << 8) | LSB`.
//!
//! - Magnetic field: two's-complement fraction of full scale, `[-0.5, 0.5)`
//!   of `2 * range` mT
//! - Angle: 12.4 fixed point degrees
//! - Temperature: affine in the ADC code, 25 °C at 17508 LSB, 60.1 LSB/°C
//! - Magnitude: raw 8-bit code

use crate::config::FullScale;

/// Temperature sensor reference temperature in °C
pub const TEMP_REFERENCE_CELSIUS: f32 = 25.0;

/// ADC code at [`TEMP_REFERENCE_CELSIUS`]
pub const TEMP_REFERENCE_CODE: f32 = 17508.0;

/// Temperature sensor resolution in LSB/°C
pub const TEMP_RESOLUTION: f32 = 60.1;

const FRACTION_SCALE: f32 = 65536.0;

/// Decode one 16-bit magnetic axis result into mT
///
/// Bit 15 carries a weight of `-2^15`, bits 0-14 carry `+2^i`; the sum over
/// `2^16` is a signed fraction in `[-0.5, 0.5)` that scales to `2 * range_mt`.
#[must_use]
pub fn decode_magnetic(raw: u16, range_mt: f32) -> f32 {
    let sign = f32::from((raw >> 15) & 1);
    let negative_part = -(sign * 32768.0) / FRACTION_SCALE;
    let positive_part: f32 = (0..15u16)
        .filter(|i| (raw >> i) & 1 == 1)
        .map(|i| f32::from(1u16 << i) / FRACTION_SCALE)
        .sum();

    (negative_part + positive_part) * 2.0 * range_mt
}

/// Decode the 16-bit angle result into degrees
///
/// Bits 12:4 are whole degrees, bits 3:0 sixteenths of a degree.
#[must_use]
pub fn decode_angle(raw: u16) -> f32 {
    let whole = (raw >> 4) & 0x01FF;
    let fraction = raw & 0x000F;
    f32::from(whole) + f32::from(fraction) / 16.0
}

/// Decode the temperature ADC code into °C
#[must_use]
pub fn decode_temperature(raw: u16) -> f32 {
    TEMP_REFERENCE_CELSIUS + (f32::from(raw) - TEMP_REFERENCE_CODE) / TEMP_RESOLUTION
}

/// Decode the magnitude result register
///
/// Returns the register code unchanged. The conversion of this code to mT
/// has not been confirmed against the datasheet, so no scaling is applied.
#[must_use]
pub fn decode_magnitude(raw: u8) -> i32 {
    i32::from(raw)
}

/// Result read supported by [`decode_sample`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleRequest {
    /// ANGLE_RESULT_MSB/LSB, 2 bytes MSB first
    Angle,
    /// X/Y/Z MSB/LSB plus CONV_STATUS, 7 bytes
    MagneticField,
    /// T_MSB_RESULT onward, 2 bytes transferred LSB first
    Temperature,
    /// MAGNITUDE_RESULT, 1 byte
    Magnitude,
}

impl SampleRequest {
    /// First register of the read
    #[must_use]
    pub const fn address(self) -> u8 {
        match self {
            Self::Angle => crate::registers::ANGLE_RESULT_MSB,
            Self::MagneticField => crate::registers::X_MSB_RESULT,
            Self::Temperature => crate::registers::T_MSB_RESULT,
            Self::Magnitude => crate::registers::MAGNITUDE_RESULT,
        }
    }

    /// Number of bytes transferred
    #[must_use]
    pub const fn byte_count(self) -> usize {
        match self {
            Self::Angle | Self::Temperature => 2,
            Self::MagneticField => 7,
            Self::Magnitude => 1,
        }
    }

    /// Number of bits transferred
    #[must_use]
    pub const fn size_bits(self) -> u32 {
        self.byte_count() as u32 * 8
    }
}

/// Magnetic field in millitesla (mT)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagDataMt {
    /// X-axis magnetic field in mT
    pub x: f32,
    /// Y-axis magnetic field in mT
    pub y: f32,
    /// Z-axis magnetic field in mT
    pub z: f32,
}

impl MagDataMt {
    /// Calculate the magnitude of the magnetic field vector in mT
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// In-plane angle of the X/Y components in degrees, in `[0, 360)`
    #[must_use]
    pub fn angle_xy(&self) -> f32 {
        let degrees = libm::atan2f(self.y, self.x).to_degrees();
        if degrees < 0.0 { degrees + 360.0 } else { degrees }
    }
}

/// Raw XYZ burst: three axis words and the trailing CONV_STATUS byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawXyz {
    /// X axis result
    pub x: u16,
    /// Y axis result
    pub y: u16,
    /// Z axis result
    pub z: u16,
    /// CONV_STATUS byte read after Z_LSB_RESULT
    pub conv_status: u8,
}

impl RawXyz {
    /// Split a 7-byte burst starting at X_MSB_RESULT
    #[must_use]
    pub const fn from_burst(bytes: &[u8; 7]) -> Self {
        Self {
            x: u16::from_be_bytes([bytes[0], bytes[1]]),
            y: u16::from_be_bytes([bytes[2], bytes[3]]),
            z: u16::from_be_bytes([bytes[4], bytes[5]]),
            conv_status: bytes[6],
        }
    }

    /// Decode all three axes with the given ranges
    #[must_use]
    pub fn to_mt(&self, full_scale: FullScale) -> MagDataMt {
        MagDataMt {
            x: decode_magnetic(self.x, full_scale.xy_mt),
            y: decode_magnetic(self.y, full_scale.xy_mt),
            z: decode_magnetic(self.z, full_scale.z_mt),
        }
    }
}

/// Decoded measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhysicalSample {
    /// Angle in degrees
    Angle {
        /// Degrees in `[0, 360)`
        degrees: f32,
    },
    /// Magnetic field on all three axes
    MagneticField(MagDataMt),
    /// Die temperature
    Temperature {
        /// Degrees Celsius
        celsius: f32,
    },
    /// Magnitude result code
    ///
    /// The MAGNITUDE_RESULT byte is passed through unscaled. Its conversion
    /// to mT is not confirmed against the datasheet yet.
    Magnitude {
        /// Raw register code
        code: i32,
    },
}

/// Decode the bytes of a result read
///
/// For callers holding raw result bytes, e.g. from a DMA transfer. Returns
/// `None` if `bytes` does not hold exactly `request.byte_count()` bytes.
#[must_use]
pub fn decode_sample(
    request: SampleRequest,
    bytes: &[u8],
    full_scale: FullScale,
) -> Option<PhysicalSample> {
    if bytes.len() != request.byte_count() {
        return None;
    }

    let sample = match request {
        SampleRequest::Angle => PhysicalSample::Angle {
            degrees: decode_angle(u16::from_be_bytes([bytes[0], bytes[1]])),
        },
        SampleRequest::MagneticField => {
            let burst: &[u8; 7] = bytes.try_into().ok()?;
            PhysicalSample::MagneticField(RawXyz::from_burst(burst).to_mt(full_scale))
        }
        // The first byte on the wire is treated as the low byte
        SampleRequest::Temperature => PhysicalSample::Temperature {
            celsius: decode_temperature(u16::from_le_bytes([bytes[0], bytes[1]])),
        },
        SampleRequest::Magnitude => PhysicalSample::Magnitude {
            code: decode_magnitude(bytes[0]),
        },
    };

    Some(sample)
}
