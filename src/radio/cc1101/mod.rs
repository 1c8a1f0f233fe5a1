use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiBus,
};

pub(crate) mod bit_fields;
mod constants;
mod fifo;
mod init;
mod radio;
pub use constants::{Register, Strobe};
pub(crate) use constants::{RX_FIFO_BURST, TX_FIFO_BURST};

use crate::radio::RadioConfig;
use crate::types::RadioMode;

/// An collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cc1101Error<SPI, DO, DI> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a chip-select (digital output) error.
    Gpo(DO),
    /// Represents a signal-line (digital input) error.
    Gpi(DI),
    /// The SO readiness line stayed high for the whole retry budget.
    ///
    /// See [`RadioConfig::with_ready_retries()`](fn@crate::radio::RadioConfig::with_ready_retries).
    ChipBusy,
    /// The packet-boundary line never asserted within the arm retry budget.
    ///
    /// See [`RadioConfig::with_rx_arm_retries()`](fn@crate::radio::RadioConfig::with_rx_arm_retries).
    RxTimeout,
}

/// Maximum number of payload bytes a packet can carry; bounded by the
/// chip's 64-byte FIFO with one byte reserved for the length prefix.
pub const MAX_PAYLOAD_SIZE: u8 = 63;

/// How long a burst write settles between the readiness handshake and the
/// header byte, in microseconds. The chip wants this ahead of the header,
/// not between header and data.
pub(crate) const BURST_WRITE_DELAY_US: u32 = 20;

/// This struct implements the [`SubGhz*` traits](mod@crate::radio::prelude)
/// for the CC1101 transceiver.
///
/// Additionally, there are some functions implemented that expose the chip's
/// raw command surface (strobes, register access, burst transfers).
///
/// The chip-select pin is owned and driven by the driver because the chip's
/// readiness handshake happens on the SO line *inside* the chip-select
/// window, before the first header byte of every transaction. The `rdy_pin`
/// parameter is a digital input sensing that line; `gdo0_pin` senses the
/// packet-boundary interrupt output.
pub struct Cc1101<SPI, DO, DI, DELAY> {
    _spi: SPI,
    csn_pin: DO,
    rdy_pin: DI,
    gdo0_pin: DI,
    _delay_impl: DELAY,
    _buf: [u8; MAX_PAYLOAD_SIZE as usize + 2],
    _mode: RadioMode,
    _config: RadioConfig,
}

impl<SPI, DO, DI, DELAY> Cc1101<SPI, DO, DI, DELAY>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    /// Instantiate a [`Cc1101`] object for use on the specified
    /// `spi` bus with the given pins.
    ///
    /// The `csn_pin` is the chip-select output; it must not be managed by
    /// the bus implementation (see the struct-level docs). Both input pins
    /// share one type; most HALs offer a type-erased pin for this.
    pub fn new(
        csn_pin: DO,
        rdy_pin: DI,
        gdo0_pin: DI,
        spi: SPI,
        delay_impl: DELAY,
    ) -> Cc1101<SPI, DO, DI, DELAY> {
        Cc1101 {
            _spi: spi,
            csn_pin,
            rdy_pin,
            gdo0_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; MAX_PAYLOAD_SIZE as usize + 2],
            _mode: RadioMode::Idle,
            _config: RadioConfig::default(),
        }
    }

    /// Run `ops` inside a chip-select window.
    ///
    /// Chip select is released on every path out of this function, error
    /// paths included; a window left open would block all further chip
    /// communication. At most one window can be open at a time because this
    /// requires `&mut self`.
    fn transaction<F>(
        &mut self,
        ops: F,
    ) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>>
    where
        F: FnOnce(&mut Self) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>>,
    {
        self.csn_pin.set_low().map_err(Cc1101Error::Gpo)?;
        let mut result = self.wait_ready();
        if result.is_ok() {
            result = ops(self);
        }
        if result.is_ok() {
            result = self._spi.flush().map_err(Cc1101Error::Spi);
        }
        let released = self.csn_pin.set_high().map_err(Cc1101Error::Gpo);
        result.and(released)
    }

    /// Poll the SO readiness line until the chip reports ready (line low).
    fn wait_ready(&mut self) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        let mut polls = 0u32;
        while self.rdy_pin.is_high().map_err(Cc1101Error::Gpi)? {
            polls += 1;
            if polls >= self._config.ready_retries() {
                return Err(Cc1101Error::ChipBusy);
            }
        }
        Ok(())
    }

    /// Read the packet-boundary line (GDO0).
    ///
    /// What an asserted line means depends on the configured
    /// [`SignalRole`](type@crate::types::SignalRole); for the receive role it
    /// marks end-of-packet and stays asserted until the RX FIFO drains.
    pub fn data_ready(&mut self) -> Result<bool, Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        self.gdo0_pin.is_high().map_err(Cc1101Error::Gpi)
    }

    /// Issue a command strobe.
    ///
    /// The cached [`RadioMode`] is updated from the opcode alone; the chip is
    /// never asked which state it actually reached.
    pub fn strobe(
        &mut self,
        strobe: Strobe,
    ) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        self.transaction(|radio| {
            radio
                ._spi
                .write(&[strobe.opcode()])
                .map_err(Cc1101Error::Spi)
        })?;
        self._mode = match strobe {
            Strobe::EnterRx => RadioMode::Receiving,
            Strobe::EnterTx => RadioMode::Transmitting,
            Strobe::Idle | Strobe::Reset => RadioMode::Idle,
            _ => self._mode,
        };
        Ok(())
    }

    /// Read a single configuration register.
    pub fn read_register(
        &mut self,
        register: Register,
    ) -> Result<u8, Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        self.transaction(|radio| {
            radio._buf[0] = register.read_address();
            radio._buf[1] = 0;
            radio
                ._spi
                .transfer_in_place(&mut radio._buf[..2])
                .map_err(Cc1101Error::Spi)
        })?;
        Ok(self._buf[1])
    }

    /// Write a single configuration register.
    ///
    /// The data sheet requires an inter-byte delay above a 9 MHz bus clock;
    /// none is inserted here.
    pub fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        self.transaction(|radio| {
            radio
                ._spi
                .write(&[register.write_address(), value])
                .map_err(Cc1101Error::Spi)
        })
    }

    /// Burst-write `buf` into consecutive registers starting at `register`.
    pub fn write_burst(
        &mut self,
        register: Register,
        buf: &[u8],
    ) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        self.transaction(|radio| {
            radio._delay_impl.delay_us(BURST_WRITE_DELAY_US);
            let len = buf.len().min(radio._buf.len() - 1);
            radio._buf[0] = register.burst_write_address();
            radio._buf[1..=len].copy_from_slice(&buf[..len]);
            radio._spi.write(&radio._buf[..=len]).map_err(Cc1101Error::Spi)
        })
    }

    /// Burst-read `buf.len()` consecutive registers starting at `register`.
    pub fn read_burst(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        let len = buf.len().min(self._buf.len() - 1);
        self.transaction(|radio| {
            radio._buf[0] = register.burst_read_address();
            radio._buf[1..=len].fill(0);
            radio
                ._spi
                .transfer_in_place(&mut radio._buf[..=len])
                .map_err(Cc1101Error::Spi)
        })?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }
}
