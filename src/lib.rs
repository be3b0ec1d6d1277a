//! ILI9163C TFT LCD Driver
//!
//! A driver for the ILI9163C display controller, found on small SPI TFT
//! modules of up to 132x162 pixels.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - RGB565 and RGB888 pixel formats, switchable at runtime
//! - Rotation support for both common panel wirings
//! - Windowed writes from padded source buffers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9163c::{Builder, Dimensions, Display, Interface, Rotation, WriteDescriptor};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let dims = match Dimensions::new(128, 160) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate90).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! // 16x16 RGB565 tile in the top left corner
//! let tile = [0u8; 16 * 16 * 2];
//! let desc = WriteDescriptor::packed(16, 16, display.bytes_per_pixel());
//! let _ = display.write(0, 0, &desc, &tile);
//! let _ = display.blanking_off();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// ILI9163C command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Pixel formats and their wire encoding
pub mod format;
/// Hardware interface abstraction
pub mod interface;
/// Panel tuning registers loaded at bring-up
pub mod registers;
/// Orientation to MADCTL mapping
pub mod rotation;
/// Write windows and source buffer layout
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, Rotation};
pub use display::{Capabilities, Display};
pub use error::{BringUpError, BuilderError, ContractViolation, Error, Stage};
pub use format::{PixelFormat, SUPPORTED_PIXEL_FORMATS};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
pub use registers::{RegisterProgram, load_registers};
pub use rotation::CommandSet;
pub use window::{TransferPlan, WriteDescriptor, encode_window};
