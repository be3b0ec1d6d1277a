//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ILI9163C controller over 4-wire SPI.
//!
//! ## Hardware Requirements
//!
//! The ILI9163C requires:
//! - SPI bus (MOSI + SCK, CS handled by the [`SpiDevice`])
//! - 1 or 2 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low, optional)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9163c::{DisplayInterface, Interface, PixelFormat};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI, DC and RST pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse reset for 1ms, then wait 5ms
//! let _ = interface.reset(&mut delay, 1, 5);
//!
//! // Send a command with parameters
//! let _ = interface.send_command(0x2A, &[0x00, 0x00, 0x00, 0x7F]);
//!
//! // Stream pixel data
//! let _ = interface.stream_pixels(&[0xF8, 0x00], PixelFormat::Rgb565);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::format::PixelFormat;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the command channel to an ILI9163C controller
///
/// This trait abstracts over different bus implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// transport that can send a command byte followed by parameter bytes.
///
/// ## Streaming contract
///
/// After [`send_command`](Self::send_command) with
/// [`RAMWR`](crate::command::RAMWR), every following
/// [`stream_pixels`](Self::stream_pixels) call continues the same pixel
/// transfer. Implementations must not re-address or restart the transfer
/// between chunks; the driver relies on this to write padded source rows
/// one row at a time into a single window.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus, DMA, byte swapping),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte followed by its parameters
    ///
    /// The implementation must:
    /// 1. Set DC low (command mode) and send `command`
    /// 2. If `params` is not empty, set DC high (data mode) and send `params`
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or GPIO fails.
    fn send_command(&mut self, command: u8, params: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a chunk of pixel data
    ///
    /// `format` describes the in-memory layout of `pixels`, so that
    /// transports whose wire format differs can reorder bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or GPIO fails.
    fn stream_pixels(
        &mut self,
        pixels: &[u8],
        format: PixelFormat,
    ) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST low
    /// 2. Wait at least `pulse_ms`
    /// 3. Set RST high
    /// 4. Wait at least `settle_ms`
    ///
    /// # Errors
    ///
    /// Returns an error if the reset line is not available or cannot be
    /// driven. The driver treats this as non-fatal.
    fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        pulse_ms: u32,
        settle_ms: u32,
    ) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// No reset pin is wired to the controller
    ResetUnavailable,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::ResetUnavailable => write!(f, "Reset pin not available"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// 4-wire SPI interface implementation for ILI9163C
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// Pixel bytes are sent exactly as they are laid out in memory
/// (RGB565 big-endian, RGB888 as R, G, B).
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low), `None` when tied high on the board
    rst: Option<RST>,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface with a reset pin
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst: Some(rst),
        }
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC> Interface<SPI, DC, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new Interface for boards that wire RST permanently high
    ///
    /// [`DisplayInterface::reset`] then reports
    /// [`InterfaceError::ResetUnavailable`], which the driver tolerates.
    pub fn without_reset(spi: SPI, dc: DC) -> Self {
        Self { spi, dc, rst: None }
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8, params: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(InterfaceError::Pin)?;
            self.spi.write(params).map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn stream_pixels(
        &mut self,
        pixels: &[u8],
        _format: PixelFormat,
    ) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(pixels).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        pulse_ms: u32,
        settle_ms: u32,
    ) -> InterfaceResult<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Err(InterfaceError::ResetUnavailable);
        };
        rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(pulse_ms);
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(settle_ms);
        Ok(())
    }
}
