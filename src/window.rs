//! Write windows and source buffer layout
//!
//! A write addresses a rectangle of controller memory with [`CASET`] and
//! [`PASET`], then streams pixels for that rectangle. The source buffer may
//! have more pixels per row than the rectangle is wide (its pitch), in
//! which case rows are streamed one by one and the padding is skipped.
//!
//! [`CASET`]: crate::command::CASET
//! [`PASET`]: crate::command::PASET
//!
//! ## Example
//!
//! ```
//! use ili9163c::window::encode_window;
//!
//! let (columns, rows) = encode_window(10, 20, 5, 7).unwrap_or_default();
//! assert_eq!(columns, [0, 10, 0, 14]);
//! assert_eq!(rows, [0, 20, 0, 26]);
//! ```

use crate::config::Dimensions;
use crate::error::ContractViolation;

/// Encode CASET and PASET parameters for a window
///
/// Returns big-endian `[x, x + width - 1]` and `[y, y + height - 1]`, or
/// `None` if the window is empty or its end does not fit in 16 bits.
pub fn encode_window(x: u16, y: u16, width: u16, height: u16) -> Option<([u8; 4], [u8; 4])> {
    let x_end = x.checked_add(width.checked_sub(1)?)?;
    let y_end = y.checked_add(height.checked_sub(1)?)?;
    Some((encode_range(x, x_end), encode_range(y, y_end)))
}

fn encode_range(start: u16, end: u16) -> [u8; 4] {
    let [s0, s1] = start.to_be_bytes();
    let [e0, e1] = end.to_be_bytes();
    [s0, s1, e0, e1]
}

/// Check that a window is non-empty and fits inside `bounds`
///
/// # Errors
///
/// Returns [`ContractViolation::EmptyWindow`] or
/// [`ContractViolation::OutOfBounds`].
pub fn check_window(
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    bounds: Dimensions,
) -> Result<(), ContractViolation> {
    if width == 0 || height == 0 {
        return Err(ContractViolation::EmptyWindow);
    }
    let fits_x = u32::from(x) + u32::from(width) <= u32::from(bounds.width);
    let fits_y = u32::from(y) + u32::from(height) <= u32::from(bounds.height);
    if !fits_x || !fits_y {
        return Err(ContractViolation::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(())
}

/// Layout of one write request's source buffer
///
/// All sizes except `buf_size` are in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteDescriptor {
    /// Window width
    pub width: u16,
    /// Window height
    pub height: u16,
    /// Pixels between the starts of consecutive source rows (>= width)
    pub pitch: u16,
    /// Source buffer capacity in bytes
    pub buf_size: usize,
}

impl WriteDescriptor {
    /// Descriptor for a tightly packed buffer of `width * height` pixels
    pub fn packed(width: u16, height: u16, bytes_per_pixel: u8) -> Self {
        Self {
            width,
            height,
            pitch: width,
            buf_size: width as usize * height as usize * bytes_per_pixel as usize,
        }
    }

    /// Bytes the source buffer must hold
    pub fn required_size(&self, bytes_per_pixel: u8) -> usize {
        self.pitch as usize * bytes_per_pixel as usize * self.height as usize
    }

    /// Check the request before anything is sent to the controller
    ///
    /// `bounds` is the active resolution (rotation applied) and `source_len`
    /// the length of the buffer actually passed in. The usable capacity is
    /// the smaller of `source_len` and `buf_size`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContractViolation`] found.
    pub fn validate(
        &self,
        x: u16,
        y: u16,
        bytes_per_pixel: u8,
        bounds: Dimensions,
        source_len: usize,
    ) -> Result<(), ContractViolation> {
        check_window(x, y, self.width, self.height, bounds)?;
        if self.pitch < self.width {
            return Err(ContractViolation::PitchTooSmall {
                pitch: self.pitch,
                width: self.width,
            });
        }
        let required = self.required_size(bytes_per_pixel);
        let provided = source_len.min(self.buf_size);
        if provided < required {
            return Err(ContractViolation::BufferTooSmall { required, provided });
        }
        Ok(())
    }

    /// How the source buffer is split into pixel transfers
    pub fn transfer_plan(&self, bytes_per_pixel: u8) -> TransferPlan {
        let bpp = bytes_per_pixel as usize;
        let row = self.width as usize * bpp;
        if self.pitch == self.width {
            TransferPlan {
                chunks: 1,
                chunk_len: row * self.height as usize,
                stride: 0,
            }
        } else {
            TransferPlan {
                chunks: self.height as usize,
                chunk_len: row,
                stride: self.pitch as usize * bpp,
            }
        }
    }
}

/// Chunking of a validated write
///
/// Chunk `n` starts at byte `n * stride` of the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferPlan {
    /// Number of transfers
    pub chunks: usize,
    /// Bytes per transfer
    pub chunk_len: usize,
    /// Source offset between transfers in bytes
    pub stride: usize,
}

impl TransferPlan {
    /// Iterate over the chunks of `source`
    ///
    /// `source` must have been validated against the descriptor that
    /// produced this plan.
    pub fn chunks<'a>(&self, source: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + use<'a> {
        let plan = *self;
        (0..plan.chunks).filter_map(move |n| {
            let start = n * plan.stride;
            source.get(start..start + plan.chunk_len)
        })
    }
}
