//! ILI9163C command definitions
//!
//! This module defines the command bytes used to control the ILI9163C
//! TFT LCD controller. Commands are sent over SPI with the DC pin low for the
//! opcode and high for the parameter bytes that follow.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send parameter or pixel bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9163c::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Software reset, no parameters
//! let _ = interface.send_command(command::SWRESET, &[]);
//!
//! // Select 16-bit pixels on both the panel and MCU side
//! let _ = interface.send_command(
//!     command::PIXSET,
//!     &[command::PIXSET_RGB_16_BIT | command::PIXSET_MCU_16_BIT],
//! );
//! ```

// System control commands

/// Software reset command (0x01)
///
/// Resets the controller registers to their default values.
/// Must wait [`RESET_WAIT_MS`] before the next command.
pub const SWRESET: u8 = 0x01;

/// Sleep out command (0x11)
///
/// Leaves sleep mode, enabling the DC/DC converter and oscillator.
/// Must wait [`SLEEP_OUT_MS`] before the panel is stable.
pub const SLPOUT: u8 = 0x11;

/// Display inversion on command (0x21)
pub const DINVON: u8 = 0x21;

/// Gamma curve select command (0x26)
///
/// Requires 1 byte selecting one of the four predefined curves.
pub const GAMSET: u8 = 0x26;

/// Display off command (0x28)
///
/// Blanks the panel output; frame memory content is kept.
pub const DISPOFF: u8 = 0x28;

/// Display on command (0x29)
pub const DISPON: u8 = 0x29;

// Memory window and data commands

/// Column address set command (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Page (row) address set command (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const PASET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Starts a pixel transfer into the window selected by [`CASET`] and
/// [`PASET`]. Every data byte after this command, until the next command,
/// belongs to the same transfer.
pub const RAMWR: u8 = 0x2C;

/// Color lookup table set command (0x2D)
///
/// Loads the 128-byte table used to expand 16-bit pixels when reading
/// frame memory back. Only needed for read-back, which this crate does not
/// implement.
pub const RGBSET: u8 = 0x2D;

/// Memory read command (0x2E)
///
/// Reads pixel data from the current window. The first byte returned is a
/// dummy byte. Documented for completeness; not used by the driver.
pub const RAMRD: u8 = 0x2E;

/// Memory access control command (0x36)
///
/// Requires 1 byte built from the `MADCTL_*` bits.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Requires 1 byte: panel color depth (`PIXSET_RGB_*`) OR MCU interface
/// width (`PIXSET_MCU_*`).
pub const PIXSET: u8 = 0x3A;

/// Memory read continue command (0x3E)
///
/// Continues a [`RAMRD`] from the last read position.
pub const RAMRD_CONT: u8 = 0x3E;

// Panel tuning commands

/// Frame rate control (normal mode) command (0xB1)
///
/// Requires 2 bytes.
pub const FRMCTR1: u8 = 0xB1;

/// Power control 1 command (0xC0)
///
/// Sets GVDD and VCI1. Requires 2 bytes.
pub const PWCTRL1: u8 = 0xC0;

/// Power control 2 command (0xC1)
///
/// Sets the step-up factor. Requires 1 byte.
pub const PWCTRL2: u8 = 0xC1;

/// Power control 3 command (0xC2, normal mode)
///
/// Requires 1 byte.
pub const PWCTRL3: u8 = 0xC2;

/// Power control 4 command (0xC3, idle mode)
///
/// Requires 1 byte.
pub const PWCTRL4: u8 = 0xC3;

/// VCOM control 1 command (0xC5)
///
/// Sets VCOMH and VCOML. Requires 2 bytes.
pub const VMCTRL1: u8 = 0xC5;

/// VCOM offset control command (0xC7)
///
/// Requires 1 byte.
pub const VMCTRL2: u8 = 0xC7;

/// Positive gamma correction command (0xE0)
///
/// Requires 15 bytes.
pub const PGAMCTRL: u8 = 0xE0;

/// Negative gamma correction command (0xE1)
///
/// Requires 15 bytes.
pub const NGAMCTRL: u8 = 0xE1;

/// Gamma adjustment enable command (0xF2)
///
/// Requires 1 byte. Must be enabled for [`PGAMCTRL`]/[`NGAMCTRL`] to apply.
pub const GAMADJ: u8 = 0xF2;

// MADCTL fields

/// Row address order (mirror Y)
pub const MADCTL_MY: u8 = 1 << 7;
/// Column address order (mirror X)
pub const MADCTL_MX: u8 = 1 << 6;
/// Row/column exchange (swap axes)
pub const MADCTL_MV: u8 = 1 << 5;
/// Vertical refresh order
pub const MADCTL_ML: u8 = 1 << 4;
/// BGR color filter order
///
/// The panels this driver targets are wired BGR, so this bit is always set.
pub const MADCTL_BGR: u8 = 1 << 3;
/// Horizontal refresh order
pub const MADCTL_MH: u8 = 1 << 2;

// PIXSET fields

/// Panel side: 18-bit color depth
pub const PIXSET_RGB_18_BIT: u8 = 0x60;
/// Panel side: 16-bit color depth
pub const PIXSET_RGB_16_BIT: u8 = 0x50;
/// MCU side: 18-bit interface
pub const PIXSET_MCU_18_BIT: u8 = 0x06;
/// MCU side: 16-bit interface
pub const PIXSET_MCU_16_BIT: u8 = 0x05;

// Timing

/// Minimum hardware reset pulse width in milliseconds
pub const RESET_PULSE_MS: u32 = 1;

/// Settle time after a hardware or software reset in milliseconds
pub const RESET_WAIT_MS: u32 = 5;

/// Settle time after [`SLPOUT`] in milliseconds
pub const SLEEP_OUT_MS: u32 = 120;
