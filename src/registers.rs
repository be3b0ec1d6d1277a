//! Panel tuning registers
//!
//! Gamma curves, frame rate and power settings are panel specific and come
//! from the panel module's datasheet. They are loaded once during bring-up,
//! before the pixel format and orientation are applied, in the order
//! returned by [`RegisterProgram::entries`].
//!
//! ## Example
//!
//! ```
//! use ili9163c::{command, RegisterProgram};
//!
//! let program = RegisterProgram {
//!     frmctr1: [0x0E, 0x14],
//!     ..RegisterProgram::default()
//! };
//! let entries = program.entries();
//! assert_eq!(entries[0].0, command::GAMSET);
//! assert_eq!(entries[4], (command::FRMCTR1, &[0x0E, 0x14][..]));
//! ```

use crate::command::{
    FRMCTR1, GAMADJ, GAMSET, MADCTL, NGAMCTRL, PGAMCTRL, PWCTRL1, PWCTRL2, PWCTRL3, PWCTRL4,
    VMCTRL1, VMCTRL2,
};
use crate::interface::DisplayInterface;

/// Number of entries in a [`RegisterProgram`]
pub const REGISTER_COUNT: usize = 12;

/// Register payloads sent verbatim during bring-up
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterProgram {
    /// Gamma curve select (GAMSET)
    pub gamset: [u8; 1],
    /// Gamma adjustment enable (GAMADJ)
    pub gamadj: [u8; 1],
    /// Positive gamma correction (PGAMCTRL)
    pub pgamctrl: [u8; 15],
    /// Negative gamma correction (NGAMCTRL)
    pub ngamctrl: [u8; 15],
    /// Frame rate control, normal mode (FRMCTR1)
    pub frmctr1: [u8; 2],
    /// Power control 1, GVDD and VCI1 (PWCTRL1)
    pub pwctrl1: [u8; 2],
    /// Power control 2, step-up factor (PWCTRL2)
    pub pwctrl2: [u8; 1],
    /// Power control 3, normal mode (PWCTRL3)
    pub pwctrl3: [u8; 1],
    /// Power control 4, idle mode (PWCTRL4)
    pub pwctrl4: [u8; 1],
    /// VCOM control 1 (VMCTRL1)
    pub vmctrl1: [u8; 2],
    /// VCOM offset (VMCTRL2)
    pub vmctrl2: [u8; 1],
    /// Initial memory access control (MADCTL)
    ///
    /// Overwritten by the orientation step of bring-up.
    pub madctl: [u8; 1],
}

impl Default for RegisterProgram {
    fn default() -> Self {
        Self {
            // Gamma curve 1 (G2.2)
            gamset: [0x01],
            gamadj: [0x01],
            pgamctrl: [
                0x3F, 0x25, 0x1C, 0x1E, 0x20, 0x12, 0x2A, 0x90, 0x24, 0x11, 0x00, 0x00, 0x00, 0x00,
                0x00,
            ],
            ngamctrl: [
                0x20, 0x20, 0x20, 0x20, 0x05, 0x00, 0x15, 0xA7, 0x3D, 0x18, 0x25, 0x2A, 0x2B, 0x2B,
                0x3A,
            ],
            frmctr1: [0x08, 0x08],
            pwctrl1: [0x0A, 0x02],
            pwctrl2: [0x02],
            pwctrl3: [0x02],
            pwctrl4: [0x02],
            vmctrl1: [0x50, 0x5B],
            vmctrl2: [0x40],
            madctl: [0x00],
        }
    }
}

impl RegisterProgram {
    /// Ordered (opcode, payload) pairs
    ///
    /// The order follows the panel datasheet and must not change.
    pub fn entries(&self) -> [(u8, &[u8]); REGISTER_COUNT] {
        [
            (GAMSET, &self.gamset),
            (GAMADJ, &self.gamadj),
            (PGAMCTRL, &self.pgamctrl),
            (NGAMCTRL, &self.ngamctrl),
            (FRMCTR1, &self.frmctr1),
            (PWCTRL1, &self.pwctrl1),
            (PWCTRL2, &self.pwctrl2),
            (PWCTRL3, &self.pwctrl3),
            (PWCTRL4, &self.pwctrl4),
            (VMCTRL1, &self.vmctrl1),
            (VMCTRL2, &self.vmctrl2),
            (MADCTL, &self.madctl),
        ]
    }
}

/// Send every entry of `program` in order
///
/// Stops at the first interface error; later entries are not sent.
pub fn load_registers<I: DisplayInterface>(
    interface: &mut I,
    program: &RegisterProgram,
) -> Result<(), I::Error> {
    for (command, payload) in program.entries() {
        log::debug!("register 0x{command:02X}: {payload:02X?}");
        interface.send_command(command, payload)?;
    }
    Ok(())
}
