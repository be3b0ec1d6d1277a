//! Orientation encoding
//!
//! This module maps a [`Rotation`] to the MADCTL (memory access control)
//! byte sent to the controller.
//!
//! Different ILI9163C panel modules route the scan lines differently, so
//! the same rotation needs different mirror/exchange bits depending on the
//! module. [`CommandSet`] selects the table for the panel at hand.
//!
//! ## MADCTL values
//!
//! [`MADCTL_BGR`] is always set because the panels are wired BGR.
//!
//! | Rotation | [`CommandSet::Set1`] | [`CommandSet::Set2`] |
//! |----------|------------------|------------------|
//! | 0°       | `0x48` (MX)       | `0x08`           |
//! | 90°      | `0x28` (MV)       | `0xA8` (MV, MY)  |
//! | 180°     | `0x88` (MY)       | `0xC8` (MY, MX)  |
//! | 270°     | `0xE8` (MV, MX, MY) | `0x68` (MV, MX) |
//!
//! ## Example
//!
//! ```
//! use ili9163c::{CommandSet, Rotation};
//!
//! assert_eq!(CommandSet::Set1.madctl(Rotation::Rotate0), 0x48);
//! assert_eq!(CommandSet::Set2.madctl(Rotation::Rotate90), 0xA8);
//! ```

use crate::command::{MADCTL_BGR, MADCTL_MV, MADCTL_MX, MADCTL_MY};
use crate::config::Rotation;

/// Rotation to MADCTL bit assignment, by panel revision
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommandSet {
    /// Bit assignment used by most ILI9163C modules
    #[default]
    Set1,
    /// Bit assignment for modules with mirrored scan wiring
    Set2,
}

/// Set1 bits indexed by [`Rotation::index`]
const SET1: [u8; 4] = [
    MADCTL_MX,
    MADCTL_MV,
    MADCTL_MY,
    MADCTL_MV | MADCTL_MX | MADCTL_MY,
];

/// Set2 bits indexed by [`Rotation::index`]
const SET2: [u8; 4] = [
    0,
    MADCTL_MV | MADCTL_MY,
    MADCTL_MY | MADCTL_MX,
    MADCTL_MV | MADCTL_MX,
];

impl CommandSet {
    const fn table(self) -> &'static [u8; 4] {
        match self {
            Self::Set1 => &SET1,
            Self::Set2 => &SET2,
        }
    }

    /// MADCTL parameter for `rotation` on this panel revision
    pub const fn madctl(self, rotation: Rotation) -> u8 {
        MADCTL_BGR | self.table()[rotation.index()]
    }
}
