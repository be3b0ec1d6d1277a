//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! display operations ([`Error`]) and bring-up ([`BringUpError`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`ContractViolation`] - Invalid write requests, rejected before any bus traffic
//! - [`BringUpError`] - Bring-up failure and the [`Stage`] it happened in
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Interface errors are never retried: re-sending half of a command
//! sequence to the controller leaves it in an unknown state.
//!
//! ## Example
//!
//! ```
//! use ili9163c::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(240, 320); // Too large
//! assert!(result.is_err());
//! ```

use crate::format::PixelFormat;
use crate::interface::DisplayInterface;

/// Maximum columns addressable by the ILI9163C frame memory
pub const MAX_COLUMNS: u16 = 132;

/// Maximum rows addressable by the ILI9163C frame memory
pub const MAX_ROWS: u16 = 162;

/// Invalid write request
///
/// These are caller errors. They are detected before anything is sent to the
/// controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractViolation {
    /// Width or height is zero
    EmptyWindow,
    /// Source row pitch is smaller than the window width
    PitchTooSmall {
        /// Pitch in pixels
        pitch: u16,
        /// Width in pixels
        width: u16,
    },
    /// Source buffer cannot hold `pitch * height` pixels
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Window does not fit the active resolution
    OutOfBounds {
        /// X coordinate
        x: u16,
        /// Y coordinate
        y: u16,
        /// Width
        width: u16,
        /// Height
        height: u16,
    },
}

impl core::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyWindow => write!(f, "Empty window"),
            Self::PitchTooSmall { pitch, width } => {
                write!(f, "Pitch {pitch} is smaller than width {width}")
            }
            Self::BufferTooSmall { required, provided } => write!(
                f,
                "Buffer too small: required {required} bytes, provided {provided}"
            ),
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Window out of bounds: x={x}, y={y}, w={width}, h={height}"
            ),
        }
    }
}

impl core::error::Error for ContractViolation {}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The controller cannot be driven in the requested pixel format
    ///
    /// Runtime state is unchanged.
    UnsupportedFormat(PixelFormat),
    /// The write request is invalid
    Contract(ContractViolation),
    /// Bring-up has not completed successfully
    NotReady,
}

impl<I: DisplayInterface> From<ContractViolation> for Error<I> {
    fn from(violation: ContractViolation) -> Self {
        Self::Contract(violation)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::UnsupportedFormat(format) => write!(f, "Unsupported pixel format: {format:?}"),
            Self::Contract(violation) => write!(f, "Invalid write: {violation}"),
            Self::NotReady => write!(f, "Display not initialized"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Bring-up states, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Hardware reset pulse (failure is tolerated)
    HardwareReset,
    /// Software reset command
    SoftwareReset,
    /// Display off while configuring
    BlankingOn,
    /// Panel tuning registers
    RegisterLoad,
    /// Pixel format selection
    PixelFormat,
    /// Orientation selection
    Orientation,
    /// Display inversion (only if configured)
    Inversion,
    /// Sleep out
    SleepExit,
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::HardwareReset => "hardware reset",
            Self::SoftwareReset => "software reset",
            Self::BlankingOn => "blanking on",
            Self::RegisterLoad => "register load",
            Self::PixelFormat => "pixel format",
            Self::Orientation => "orientation",
            Self::Inversion => "inversion",
            Self::SleepExit => "sleep exit",
        };
        f.write_str(name)
    }
}

/// Bring-up failed; the display is not ready
#[derive(Debug)]
pub struct BringUpError<I: DisplayInterface> {
    /// Stage that failed
    pub stage: Stage,
    /// Underlying error
    pub source: Error<I>,
}

impl<I: DisplayInterface> core::fmt::Display for BringUpError<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Bring-up failed at {}: {}", self.stage, self.source)
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for BringUpError<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
    /// The configured pixel format cannot be driven by the controller
    UnsupportedPixelFormat(PixelFormat),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
            Self::UnsupportedPixelFormat(format) => {
                write!(f, "Unsupported pixel format: {format:?}")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
