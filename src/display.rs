//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    CASET, DINVON, DISPOFF, DISPON, MADCTL, PASET, PIXSET, RAMWR, RESET_PULSE_MS, RESET_WAIT_MS,
    SLEEP_OUT_MS, SLPOUT, SWRESET,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::{BringUpError, ContractViolation, Error, Stage};
use crate::format::{PixelFormat, SUPPORTED_PIXEL_FORMATS};
use crate::interface::DisplayInterface;
use crate::registers::load_registers;
use crate::window::{WriteDescriptor, check_window, encode_window};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// What the display can do right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Width in the current orientation
    pub x_resolution: u16,
    /// Height in the current orientation
    pub y_resolution: u16,
    /// Active pixel format
    pub current_pixel_format: PixelFormat,
    /// Active orientation
    pub current_orientation: Rotation,
    /// Formats accepted by [`Display::set_pixel_format`]
    pub supported_pixel_formats: &'static [PixelFormat],
}

/// Runtime state, only ever replaced as a whole
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct State {
    pixel_format: PixelFormat,
    bytes_per_pixel: u8,
    orientation: Rotation,
}

impl State {
    /// Controller defaults before bring-up
    const RESET: Self = Self {
        pixel_format: PixelFormat::Rgb565,
        bytes_per_pixel: 2,
        orientation: Rotation::Rotate0,
    };
}

/// Core display driver for ILI9163C
///
/// This struct owns the interface and tracks the controller's pixel format
/// and orientation. Call [`Display::init`] once before anything else; every
/// other operation fails with [`Error::NotReady`] until bring-up succeeded.
///
/// A `Display` is meant to be used from one owner at a time. Share it between
/// tasks only behind an external lock.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Active format and orientation
    state: State,
    /// Whether bring-up completed
    ready: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the controller until [`Display::init`].
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: State::RESET,
            ready: false,
        }
    }

    /// Bring the controller from reset to a configured, streaming state
    ///
    /// Sequence: hardware reset, software reset, display off, panel
    /// registers, pixel format, orientation, optional inversion, sleep out.
    /// A missing or failing reset line is logged and skipped. Any other
    /// failure stops the sequence and leaves the display not ready.
    ///
    /// The display stays blanked; call [`Display::blanking_off`] once the
    /// first frame has been written.
    ///
    /// # Errors
    ///
    /// Returns a [`BringUpError`] naming the [`Stage`] that failed.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), BringUpError<I>> {
        self.ready = false;

        if let Err(e) = self
            .interface
            .reset(delay, RESET_PULSE_MS, RESET_WAIT_MS)
        {
            log::warn!("{} skipped: {e:?}", Stage::HardwareReset);
        }

        if let Err(e) = self.bring_up(delay) {
            log::error!("{e}");
            return Err(e);
        }

        self.ready = true;
        Ok(())
    }

    fn bring_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), BringUpError<I>> {
        self.send_command(SWRESET, &[])
            .map_err(at(Stage::SoftwareReset))?;
        delay.delay_ms(RESET_WAIT_MS);

        self.send_command(DISPOFF, &[]).map_err(at(Stage::BlankingOn))?;

        load_registers(&mut self.interface, &self.config.registers)
            .map_err(Error::<I>::Interface)
            .map_err(at(Stage::RegisterLoad))?;

        self.apply_pixel_format(self.config.pixel_format)
            .map_err(at(Stage::PixelFormat))?;

        self.apply_orientation(self.config.rotation)
            .map_err(at(Stage::Orientation))?;

        if self.config.inversion {
            self.send_command(DINVON, &[]).map_err(at(Stage::Inversion))?;
        }

        self.send_command(SLPOUT, &[]).map_err(at(Stage::SleepExit))?;
        delay.delay_ms(SLEEP_OUT_MS);

        Ok(())
    }

    /// Write a rectangle of pixels at (`x`, `y`)
    ///
    /// `buf` holds `desc.height` rows of `desc.pitch` pixels in the active
    /// pixel format. When the pitch equals the width the rectangle is sent in
    /// one transfer; otherwise each row is sent separately and the row padding
    /// is skipped.
    ///
    /// If a transfer fails part way, rows already sent stay on the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Contract`] without touching the bus if the
    /// descriptor is inconsistent or the window exceeds the active
    /// resolution, or [`Error::Interface`] on the first failing transfer.
    pub fn write(
        &mut self,
        x: u16,
        y: u16,
        desc: &WriteDescriptor,
        buf: &[u8],
    ) -> DisplayResult<I> {
        self.ensure_ready()?;
        let bpp = self.state.bytes_per_pixel;
        desc.validate(x, y, bpp, self.active_dimensions(), buf.len())?;

        log::debug!(
            "Writing {}x{} (w,h) @ {}x{} (x,y)",
            desc.width,
            desc.height,
            x,
            y
        );
        self.set_window(x, y, desc.width, desc.height)?;
        self.send_command(RAMWR, &[])?;

        for chunk in desc.transfer_plan(bpp).chunks(buf) {
            self.stream_pixels(chunk)?;
        }

        Ok(())
    }

    /// Turn the panel output off (frame memory is kept)
    pub fn blanking_on(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        log::debug!("Turning display blanking on");
        self.send_command(DISPOFF, &[])
    }

    /// Turn the panel output on
    pub fn blanking_off(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        log::debug!("Turning display blanking off");
        self.send_command(DISPON, &[])
    }

    /// Switch the pixel format
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for formats other than
    /// [`PixelFormat::Rgb565`] and [`PixelFormat::Rgb888`]. On any error the
    /// active format is unchanged.
    pub fn set_pixel_format(&mut self, format: PixelFormat) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.apply_pixel_format(format)
    }

    /// Switch the orientation
    ///
    /// The MADCTL byte depends on the configured
    /// [`CommandSet`](crate::rotation::CommandSet).
    pub fn set_orientation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.apply_orientation(rotation)
    }

    /// Current resolution, format and orientation
    ///
    /// Resolution is reported in the active orientation, so width and height
    /// are swapped at 90° and 270°.
    pub fn capabilities(&self) -> Capabilities {
        let active = self.active_dimensions();
        Capabilities {
            x_resolution: active.width,
            y_resolution: active.height,
            current_pixel_format: self.state.pixel_format,
            current_orientation: self.state.orientation,
            supported_pixel_formats: SUPPORTED_PIXEL_FORMATS,
        }
    }

    /// Whether [`Display::init`] completed successfully
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Bytes per pixel of the active format
    pub fn bytes_per_pixel(&self) -> u8 {
        self.state.bytes_per_pixel
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Address a window and start a pixel transfer into it
    ///
    /// Follow with exactly `width * height` pixels via
    /// [`Display::stream_pixels`].
    pub(crate) fn begin_transfer(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> DisplayResult<I> {
        self.ensure_ready()?;
        check_window(x, y, width, height, self.active_dimensions())?;
        self.set_window(x, y, width, height)?;
        self.send_command(RAMWR, &[])
    }

    /// Send pixel bytes in the active format
    pub(crate) fn stream_pixels(&mut self, pixels: &[u8]) -> DisplayResult<I> {
        self.interface
            .stream_pixels(pixels, self.state.pixel_format)
            .map_err(Error::Interface)
    }

    fn apply_pixel_format(&mut self, format: PixelFormat) -> DisplayResult<I> {
        let (Some(pixset), Some(bytes_per_pixel)) = (format.pixset(), format.bytes_per_pixel())
        else {
            log::error!("Unsupported pixel format {format:?}");
            return Err(Error::UnsupportedFormat(format));
        };

        self.send_command(PIXSET, &[pixset])?;

        self.state = State {
            pixel_format: format,
            bytes_per_pixel,
            ..self.state
        };
        Ok(())
    }

    fn apply_orientation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        let madctl = self.config.command_set.madctl(rotation);
        self.send_command(MADCTL, &[madctl])?;

        self.state = State {
            orientation: rotation,
            ..self.state
        };
        Ok(())
    }

    fn set_window(&mut self, x: u16, y: u16, width: u16, height: u16) -> DisplayResult<I> {
        let (columns, rows) = encode_window(x, y, width, height).ok_or(
            ContractViolation::OutOfBounds {
                x,
                y,
                width,
                height,
            },
        )?;
        self.send_command(CASET, &columns)?;
        self.send_command(PASET, &rows)
    }

    fn active_dimensions(&self) -> Dimensions {
        self.config.dimensions.rotated(self.state.orientation)
    }

    fn ensure_ready(&self) -> DisplayResult<I> {
        if self.ready {
            Ok(())
        } else {
            Err(Error::NotReady)
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8, params: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_command(cmd, params)
            .map_err(Error::Interface)
    }
}

/// Tag an error with the bring-up stage it happened in
fn at<I: DisplayInterface>(stage: Stage) -> impl FnOnce(Error<I>) -> BringUpError<I> {
    move |source| BringUpError { stage, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::PGAMCTRL;
    use crate::config::Builder;
    use crate::registers::REGISTER_COUNT;
    use crate::rotation::CommandSet;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Reset,
        Command(u8, Vec<u8>),
        Pixels(Vec<u8>),
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum MockError {
        Bus,
        NoResetPin,
    }

    #[derive(Debug, Default)]
    struct MockInterface {
        ops: Vec<Op>,
        fail_command: Option<u8>,
        fail_pixels_at: Option<usize>,
        no_reset: bool,
        pixel_calls: usize,
    }

    impl MockInterface {
        fn opcodes(&self) -> Vec<u8> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Command(cmd, _) => Some(*cmd),
                    _ => None,
                })
                .collect()
        }

        fn pixels(&self) -> Vec<&[u8]> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Pixels(data) => Some(data.as_slice()),
                    _ => None,
                })
                .collect()
        }

        fn params_of(&self, command: u8) -> Option<Vec<u8>> {
            self.ops.iter().rev().find_map(|op| match op {
                Op::Command(cmd, params) if *cmd == command => Some(params.clone()),
                _ => None,
            })
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn send_command(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
            if self.fail_command == Some(command) {
                return Err(MockError::Bus);
            }
            self.ops.push(Op::Command(command, params.to_vec()));
            Ok(())
        }

        fn stream_pixels(&mut self, pixels: &[u8], _format: PixelFormat) -> Result<(), Self::Error> {
            let call = self.pixel_calls;
            self.pixel_calls += 1;
            if self.fail_pixels_at == Some(call) {
                return Err(MockError::Bus);
            }
            self.ops.push(Op::Pixels(pixels.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(
            &mut self,
            _delay: &mut D,
            _pulse_ms: u32,
            _settle_ms: u32,
        ) -> Result<(), Self::Error> {
            if self.no_reset {
                return Err(MockError::NoResetPin);
            }
            self.ops.push(Op::Reset);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockDelay {
        waits_ms: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.waits_ms.push(ms);
        }
    }

    fn config(builder: Builder) -> Config {
        builder
            .dimensions(Dimensions::new(128, 160).unwrap())
            .build()
            .unwrap()
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::default(), config(Builder::new()))
    }

    fn ready_display(builder: Builder) -> Display<MockInterface> {
        let mut display = Display::new(MockInterface::default(), config(builder));
        display.init(&mut MockDelay::default()).unwrap();
        display.interface.ops.clear();
        display
    }

    #[test]
    fn test_init_sequence() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        display.init(&mut delay).unwrap();
        assert!(display.is_ready());

        assert_eq!(display.interface.ops[0], Op::Reset);
        let opcodes = display.interface.opcodes();
        assert_eq!(opcodes.len(), REGISTER_COUNT + 5);
        assert_eq!(&opcodes[..2], &[SWRESET, DISPOFF]);
        let registers: Vec<u8> = display
            .config
            .registers
            .entries()
            .iter()
            .map(|(cmd, _)| *cmd)
            .collect();
        assert_eq!(&opcodes[2..2 + REGISTER_COUNT], registers.as_slice());
        assert_eq!(&opcodes[2 + REGISTER_COUNT..], &[PIXSET, MADCTL, SLPOUT]);

        assert_eq!(delay.waits_ms, [RESET_WAIT_MS, SLEEP_OUT_MS]);
    }

    #[test]
    fn test_init_applies_config() {
        let mut display = Display::new(
            MockInterface::default(),
            config(
                Builder::new()
                    .pixel_format(PixelFormat::Rgb888)
                    .rotation(Rotation::Rotate90)
                    .command_set(CommandSet::Set2),
            ),
        );
        display.init(&mut MockDelay::default()).unwrap();
        assert_eq!(display.interface.params_of(PIXSET), Some(alloc::vec![0x66]));
        // Orientation overrides the MADCTL byte from the register program
        assert_eq!(display.interface.params_of(MADCTL), Some(alloc::vec![0xA8]));

        let caps = display.capabilities();
        assert_eq!(caps.current_pixel_format, PixelFormat::Rgb888);
        assert_eq!(caps.current_orientation, Rotation::Rotate90);
        assert_eq!(display.bytes_per_pixel(), 3);
    }

    #[test]
    fn test_init_with_inversion() {
        let mut display = Display::new(
            MockInterface::default(),
            config(Builder::new().inversion(true)),
        );
        display.init(&mut MockDelay::default()).unwrap();
        let opcodes = display.interface.opcodes();
        assert_eq!(&opcodes[opcodes.len() - 3..], &[MADCTL, DINVON, SLPOUT]);
    }

    #[test]
    fn test_init_tolerates_missing_reset_pin() {
        let interface = MockInterface {
            no_reset: true,
            ..MockInterface::default()
        };
        let mut display = Display::new(interface, config(Builder::new()));
        assert!(display.init(&mut MockDelay::default()).is_ok());
        assert!(display.is_ready());
        assert_eq!(display.interface.opcodes()[0], SWRESET);
    }

    #[test]
    fn test_init_fails_at_register_load() {
        let interface = MockInterface {
            fail_command: Some(PGAMCTRL),
            ..MockInterface::default()
        };
        let mut display = Display::new(interface, config(Builder::new()));
        let err = display.init(&mut MockDelay::default()).unwrap_err();
        assert_eq!(err.stage, Stage::RegisterLoad);
        assert!(matches!(err.source, Error::Interface(MockError::Bus)));
        assert!(!display.is_ready());

        let opcodes = display.interface.opcodes();
        for later in [PIXSET, MADCTL, DINVON, SLPOUT] {
            assert!(!opcodes.contains(&later));
        }
    }

    #[test]
    fn test_init_fails_at_software_reset() {
        let interface = MockInterface {
            fail_command: Some(SWRESET),
            ..MockInterface::default()
        };
        let mut display = Display::new(interface, config(Builder::new()));
        let err = display.init(&mut MockDelay::default()).unwrap_err();
        assert_eq!(err.stage, Stage::SoftwareReset);
        assert!(display.interface.opcodes().is_empty());
    }

    #[test]
    fn test_init_fails_at_sleep_exit() {
        let interface = MockInterface {
            fail_command: Some(SLPOUT),
            ..MockInterface::default()
        };
        let mut display = Display::new(interface, config(Builder::new()));
        let err = display.init(&mut MockDelay::default()).unwrap_err();
        assert_eq!(err.stage, Stage::SleepExit);
        assert!(!display.is_ready());
    }

    #[test]
    fn test_operations_require_init() {
        let mut display = test_display();
        let desc = WriteDescriptor::packed(1, 1, 2);
        assert!(matches!(
            display.write(0, 0, &desc, &[0, 0]),
            Err(Error::NotReady)
        ));
        assert!(matches!(display.blanking_off(), Err(Error::NotReady)));
        assert!(matches!(
            display.set_pixel_format(PixelFormat::Rgb888),
            Err(Error::NotReady)
        ));
        assert!(matches!(
            display.set_orientation(Rotation::Rotate90),
            Err(Error::NotReady)
        ));
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_set_pixel_format_round_trip() {
        let mut display = ready_display(Builder::new());
        for (format, bpp, pixset) in [
            (PixelFormat::Rgb888, 3, 0x66),
            (PixelFormat::Rgb565, 2, 0x55),
        ] {
            display.set_pixel_format(format).unwrap();
            assert_eq!(display.capabilities().current_pixel_format, format);
            assert_eq!(display.bytes_per_pixel(), bpp);
            assert_eq!(display.interface.params_of(PIXSET), Some(alloc::vec![pixset]));
        }
    }

    #[test]
    fn test_set_pixel_format_unsupported_keeps_state() {
        let mut display = ready_display(Builder::new());
        let result = display.set_pixel_format(PixelFormat::Mono01);
        assert!(matches!(
            result,
            Err(Error::UnsupportedFormat(PixelFormat::Mono01))
        ));
        assert_eq!(
            display.capabilities().current_pixel_format,
            PixelFormat::Rgb565
        );
        assert_eq!(display.bytes_per_pixel(), 2);
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_set_pixel_format_bus_error_keeps_state() {
        let mut display = ready_display(Builder::new());
        display.interface.fail_command = Some(PIXSET);
        let result = display.set_pixel_format(PixelFormat::Rgb888);
        assert!(matches!(result, Err(Error::Interface(MockError::Bus))));
        assert_eq!(
            display.capabilities().current_pixel_format,
            PixelFormat::Rgb565
        );
        assert_eq!(display.bytes_per_pixel(), 2);
    }

    #[test]
    fn test_set_orientation_bytes() {
        let expected = [
            (CommandSet::Set1, [0x48, 0x28, 0x88, 0xE8]),
            (CommandSet::Set2, [0x08, 0xA8, 0xC8, 0x68]),
        ];
        let rotations = [
            Rotation::Rotate0,
            Rotation::Rotate90,
            Rotation::Rotate180,
            Rotation::Rotate270,
        ];
        for (set, bytes) in expected {
            let mut display = ready_display(Builder::new().command_set(set));
            for (rotation, byte) in rotations.iter().zip(bytes) {
                display.set_orientation(*rotation).unwrap();
                assert_eq!(display.interface.params_of(MADCTL), Some(alloc::vec![byte]));
                assert_eq!(display.capabilities().current_orientation, *rotation);
            }
        }
    }

    #[test]
    fn test_set_orientation_bus_error_keeps_state() {
        let mut display = ready_display(Builder::new());
        display.interface.fail_command = Some(MADCTL);
        assert!(display.set_orientation(Rotation::Rotate90).is_err());
        assert_eq!(
            display.capabilities().current_orientation,
            Rotation::Rotate0
        );
    }

    #[test]
    fn test_capabilities_swap_resolution() {
        let mut display = ready_display(Builder::new());
        for (rotation, x, y) in [
            (Rotation::Rotate0, 128, 160),
            (Rotation::Rotate90, 160, 128),
            (Rotation::Rotate180, 128, 160),
            (Rotation::Rotate270, 160, 128),
        ] {
            display.set_orientation(rotation).unwrap();
            let caps = display.capabilities();
            assert_eq!((caps.x_resolution, caps.y_resolution), (x, y));
            assert_eq!(caps.supported_pixel_formats, SUPPORTED_PIXEL_FORMATS);
        }
    }

    #[test]
    fn test_write_equal_stride_single_transfer() {
        let mut display = ready_display(Builder::new());
        let buf: Vec<u8> = (0..24).collect();
        let desc = WriteDescriptor::packed(4, 3, 2);
        display.write(10, 20, &desc, &buf).unwrap();

        assert_eq!(
            display.interface.ops,
            [
                Op::Command(CASET, alloc::vec![0, 10, 0, 13]),
                Op::Command(PASET, alloc::vec![0, 20, 0, 22]),
                Op::Command(RAMWR, Vec::new()),
                Op::Pixels(buf.clone()),
            ]
        );
    }

    #[test]
    fn test_write_padded_stride_row_by_row() {
        let mut display = ready_display(Builder::new());
        let bpp = 2;
        let buf: Vec<u8> = (0..36).collect();
        let desc = WriteDescriptor {
            width: 4,
            height: 3,
            pitch: 6,
            buf_size: buf.len(),
        };
        display.write(0, 0, &desc, &buf).unwrap();

        // Window covers the whole rectangle once
        let opcodes = display.interface.opcodes();
        assert_eq!(opcodes, [CASET, PASET, RAMWR]);
        assert_eq!(display.interface.params_of(CASET), Some(alloc::vec![0, 0, 0, 3]));
        assert_eq!(display.interface.params_of(PASET), Some(alloc::vec![0, 0, 0, 2]));

        let pixels = display.interface.pixels();
        assert_eq!(pixels.len(), 3);
        for (row, chunk) in pixels.iter().enumerate() {
            let offset = row * 6 * bpp;
            assert_eq!(*chunk, &buf[offset..offset + 4 * bpp]);
        }
    }

    #[test]
    fn test_write_rgb888_chunk_sizes() {
        let mut display = ready_display(Builder::new().pixel_format(PixelFormat::Rgb888));
        let buf = alloc::vec![0xA5u8; 5 * 3 * 2];
        let desc = WriteDescriptor {
            width: 2,
            height: 2,
            pitch: 5,
            buf_size: buf.len(),
        };
        display.write(0, 0, &desc, &buf).unwrap();
        let sizes: Vec<usize> = display.interface.pixels().iter().map(|p| p.len()).collect();
        assert_eq!(sizes, [6, 6]);
    }

    #[test]
    fn test_write_pitch_smaller_than_width_touches_nothing() {
        let mut display = ready_display(Builder::new());
        let buf = alloc::vec![0u8; 64];
        let desc = WriteDescriptor {
            width: 4,
            height: 3,
            pitch: 3,
            buf_size: buf.len(),
        };
        let result = display.write(0, 0, &desc, &buf);
        assert!(matches!(
            result,
            Err(Error::Contract(ContractViolation::PitchTooSmall { .. }))
        ));
        assert!(display.interface.ops.is_empty());
        assert_eq!(display.interface.pixel_calls, 0);
    }

    #[test]
    fn test_write_buffer_too_small_touches_nothing() {
        let mut display = ready_display(Builder::new());
        let buf = alloc::vec![0u8; 23];
        let desc = WriteDescriptor::packed(4, 3, 2);
        let result = display.write(0, 0, &desc, &buf);
        assert!(matches!(
            result,
            Err(Error::Contract(ContractViolation::BufferTooSmall {
                required: 24,
                provided: 23
            }))
        ));
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_write_bounds_follow_orientation() {
        let mut display = ready_display(Builder::new());
        let buf = alloc::vec![0u8; 20 * 2];
        let desc = WriteDescriptor::packed(20, 1, 2);

        let result = display.write(140, 0, &desc, &buf);
        assert!(matches!(
            result,
            Err(Error::Contract(ContractViolation::OutOfBounds { .. }))
        ));

        display.set_orientation(Rotation::Rotate90).unwrap();
        assert!(display.write(140, 0, &desc, &buf).is_ok());
    }

    #[test]
    fn test_write_aborts_on_transfer_failure() {
        let mut display = ready_display(Builder::new());
        display.interface.fail_pixels_at = Some(1);
        let buf = alloc::vec![0u8; 36];
        let desc = WriteDescriptor {
            width: 4,
            height: 3,
            pitch: 6,
            buf_size: buf.len(),
        };
        let result = display.write(0, 0, &desc, &buf);
        assert!(matches!(result, Err(Error::Interface(MockError::Bus))));
        assert_eq!(display.interface.pixel_calls, 2);
        assert_eq!(display.interface.pixels().len(), 1);
    }

    #[test]
    fn test_blanking() {
        let mut display = ready_display(Builder::new());
        display.blanking_off().unwrap();
        display.blanking_on().unwrap();
        assert_eq!(display.interface.opcodes(), [DISPON, DISPOFF]);
    }
}
