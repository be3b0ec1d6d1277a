//! Pixel formats
//!
//! The host display stack describes pixels with [`PixelFormat`]. The
//! ILI9163C can only be driven with two of them:
//!
//! | Format | Bytes/pixel | PIXSET byte |
//! |--------|-------------|-------------|
//! | [`PixelFormat::Rgb565`] | 2 | `0x55` (16-bit panel, 16-bit MCU) |
//! | [`PixelFormat::Rgb888`] | 3 | `0x66` (18-bit panel, 18-bit MCU) |
//!
//! In 18-bit mode the controller keeps the upper 6 bits of each byte, so
//! 8-bit channels can be sent unchanged.
//!
//! ## Example
//!
//! ```
//! use ili9163c::PixelFormat;
//!
//! assert_eq!(PixelFormat::Rgb565.bytes_per_pixel(), Some(2));
//! assert_eq!(PixelFormat::Rgb888.pixset(), Some(0x66));
//! assert_eq!(PixelFormat::Mono01.pixset(), None);
//! ```

use crate::command::{PIXSET_MCU_16_BIT, PIXSET_MCU_18_BIT, PIXSET_RGB_16_BIT, PIXSET_RGB_18_BIT};

/// Pixel formats a host may request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16 bits per pixel, 5-6-5, big-endian
    #[default]
    Rgb565,
    /// 24 bits per pixel, one byte per channel
    Rgb888,
    /// 1 bit per pixel, 0 = black
    Mono01,
    /// 1 bit per pixel, 1 = black
    Mono10,
    /// 32 bits per pixel with alpha
    Argb8888,
    /// 16 bits per pixel, 5-6-5 with swapped red and blue
    Bgr565,
    /// 8-bit luminance
    L8,
}

/// Pixel formats the ILI9163C accepts, in preference order
pub const SUPPORTED_PIXEL_FORMATS: &[PixelFormat] = &[PixelFormat::Rgb565, PixelFormat::Rgb888];

impl PixelFormat {
    /// PIXSET command parameter for this format
    ///
    /// Encodes both the panel color depth and the MCU interface width.
    /// Returns `None` if the controller cannot be driven in this format.
    pub const fn pixset(self) -> Option<u8> {
        match self {
            Self::Rgb565 => Some(PIXSET_RGB_16_BIT | PIXSET_MCU_16_BIT),
            Self::Rgb888 => Some(PIXSET_RGB_18_BIT | PIXSET_MCU_18_BIT),
            _ => None,
        }
    }

    /// Bytes per pixel in the source buffer, for supported formats
    pub const fn bytes_per_pixel(self) -> Option<u8> {
        match self {
            Self::Rgb565 => Some(2),
            Self::Rgb888 => Some(3),
            _ => None,
        }
    }

    /// Whether the controller can be driven in this format
    pub const fn is_supported(self) -> bool {
        self.pixset().is_some()
    }
}
