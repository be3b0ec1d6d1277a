//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};
use crate::format::PixelFormat;
use crate::registers::RegisterProgram;
use crate::rotation::CommandSet;

/// Panel resolution in native (unrotated) orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or greater than MAX_COLUMNS
    /// - height is 0 or greater than MAX_ROWS
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS || height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Dimensions as seen with `rotation` applied
    pub fn rotated(self, rotation: Rotation) -> Self {
        if rotation.is_swapped() {
            Self {
                width: self.height,
                height: self.width,
            }
        } else {
            self
        }
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Rotation for an angle in degrees, if it is a multiple of 90 below 360
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::Rotate0),
            90 => Some(Self::Rotate90),
            180 => Some(Self::Rotate180),
            270 => Some(Self::Rotate270),
            _ => None,
        }
    }

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Whether width and height are exchanged in this rotation
    pub const fn is_swapped(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Display configuration
///
/// This struct holds everything the driver needs to bring up an ILI9163C.
/// It is not modified after construction. Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel resolution in native orientation
    pub dimensions: Dimensions,
    /// Rotation applied during bring-up
    pub rotation: Rotation,
    /// Pixel format applied during bring-up (always supported)
    pub pixel_format: PixelFormat,
    /// Whether to enable display inversion during bring-up
    pub inversion: bool,
    /// MADCTL bit assignment for this panel revision
    pub command_set: CommandSet,
    /// Panel tuning registers loaded during bring-up
    pub registers: RegisterProgram,
}

impl Config {
    /// Get the dimensions with the configured rotation applied
    pub fn rotated_dimensions(&self) -> Dimensions {
        self.dimensions.rotated(self.rotation)
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ili9163c::{Builder, CommandSet, Dimensions, PixelFormat, Rotation};
///
/// let dims = match Dimensions::new(128, 160) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .rotation(Rotation::Rotate90)
///     .pixel_format(PixelFormat::Rgb565)
///     .command_set(CommandSet::Set2)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Panel resolution (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Pixel format
    pixel_format: PixelFormat,
    /// Display inversion
    inversion: bool,
    /// MADCTL bit assignment
    command_set: CommandSet,
    /// Panel tuning registers
    registers: RegisterProgram,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel resolution (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set pixel format
    pub fn pixel_format(mut self, format: PixelFormat) -> Self {
        self.pixel_format = format;
        self
    }

    /// Enable or disable display inversion
    ///
    /// Some IPS modules need inversion for colors to show correctly.
    pub fn inversion(mut self, value: bool) -> Self {
        self.inversion = value;
        self
    }

    /// Set the MADCTL bit assignment for the panel revision
    pub fn command_set(mut self, value: CommandSet) -> Self {
        self.command_set = value;
        self
    }

    /// Replace the panel tuning registers
    pub fn registers(mut self, registers: RegisterProgram) -> Self {
        self.registers = registers;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::UnsupportedPixelFormat` if the pixel format cannot be
    /// driven by the controller.
    pub fn build(self) -> Result<Config, BuilderError> {
        if !self.pixel_format.is_supported() {
            return Err(BuilderError::UnsupportedPixelFormat(self.pixel_format));
        }
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            pixel_format: self.pixel_format,
            inversion: self.inversion,
            command_set: self.command_set,
            registers: self.registers,
        })
    }
}
