//! Graphics support via embedded-graphics
//!
//! This module implements [`DrawTarget`] for [`Display`], so the
//! embedded-graphics ecosystem can draw straight into controller memory
//! without a framebuffer on the host.
//!
//! ## Features
//!
//! - 2D graphics primitives (lines, rectangles, circles, text, etc.)
//! - [`Rgb565`] colors, expanded on the fly when the display runs in
//!   [`PixelFormat::Rgb888`]
//! - Area fills stream through a small stack buffer into one window
//! - Rotation support via [`Display::set_orientation`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use ili9163c::{Builder, Dimensions, Display, Interface};
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
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let dims = match Dimensions::new(128, 160) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut delay = MockDelay;
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! // Clear to black
//! let _ = display.clear(Rgb565::BLACK);
//!
//! // Draw shapes
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(40, 60), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 2))
//!     .draw(&mut display);
//!
//! // Show it
//! let _ = display.blanking_off();
//! ```

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Size},
    pixelcolor::{IntoStorage, Rgb565, Rgb888, RgbColor},
    primitives::{PointsIter, Rectangle},
};

use crate::display::Display;
use crate::error::Error;
use crate::format::PixelFormat;
use crate::interface::DisplayInterface;

/// Bytes buffered before each transfer; holds a whole number of pixels in
/// both supported formats.
const CHUNK_BYTES: usize = 96;

/// Encode one pixel into `out`, returning the number of bytes written
fn encode(color: Rgb565, format: PixelFormat, out: &mut [u8]) -> usize {
    if format == PixelFormat::Rgb888 {
        let color = Rgb888::from(color);
        out[..3].copy_from_slice(&[color.r(), color.g(), color.b()]);
        3
    } else {
        out[..2].copy_from_slice(&color.into_storage().to_be_bytes());
        2
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Stream `colors` into `area`, which must lie inside the display
    fn stream_area<C>(&mut self, area: &Rectangle, colors: C) -> Result<(), Error<I>>
    where
        C: IntoIterator<Item = Rgb565>,
    {
        self.begin_transfer(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
        )?;

        let format = self.capabilities().current_pixel_format;
        let bpp = self.bytes_per_pixel() as usize;
        let total = area.size.width as usize * area.size.height as usize;
        let mut buf = [0u8; CHUNK_BYTES];
        let mut len = 0;

        for color in colors.into_iter().take(total) {
            len += encode(color, format, &mut buf[len..]);
            if CHUNK_BYTES - len < bpp {
                self.stream_pixels(&buf[..len])?;
                len = 0;
            }
        }
        if len > 0 {
            self.stream_pixels(&buf[..len])?;
        }
        Ok(())
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();

        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            self.stream_area(&Rectangle::new(point, Size::new(1, 1)), [color])?;
        }

        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.is_zero_sized() {
            return Ok(());
        }
        if drawable == *area {
            return self.stream_area(area, colors);
        }

        self.draw_iter(
            area.points()
                .zip(colors)
                .map(|(point, color)| Pixel(point, color)),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.is_zero_sized() {
            return Ok(());
        }
        self.stream_area(&drawable, core::iter::repeat(color))
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let caps = self.capabilities();
        Size::new(caps.x_resolution as u32, caps.y_resolution as u32)
    }
}
