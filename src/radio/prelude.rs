//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use cc1101::radio::prelude::*;
//! ```

use crate::radio::RadioConfig;
use crate::types::RadioMode;

/// A trait to represent initialization and reconfiguration
/// of a sub-GHz transceiver.
pub trait SubGhzInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware.
    ///
    /// Resets the chip, waits for the crystal and regulator to settle, then
    /// applies [`RadioConfig::default()`].
    ///
    /// This function should only be called once after instantiating the radio
    /// object. Afterward, it is quicker to use [`SubGhzInit::with_config()`]
    /// to reconfigure the radio for different link requirements.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// See [`RadioConfig`] for more detail.
    /// This writes the full frequency/modulation register profile and the
    /// address-filter setup in one pass.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for a sub-GHz transceiver.
pub trait SubGhzFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    ///
    /// <div class="warning">
    ///
    /// The chip only honors a flush while idle or sitting in an RX-overflow
    /// state. Issuing it mid-receive corrupts the FIFO pointers; the driver
    /// does not validate the current mode for the caller.
    ///
    /// </div>
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    ///
    /// Only valid while idle or in a TX-underflow state, as with
    /// [`SubGhzFifo::flush_rx()`].
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;
}

/// A trait to represent packet operation of a sub-GHz transceiver.
///
/// Although the name is rather generic, this trait describes the
/// behavior of a radio's rudimentary modes (RX and TX).
pub trait SubGhzRadio {
    type RadioErrorType;

    /// Blocking function to transmit the given payload.
    ///
    /// Forces the chip idle, flushes the TX FIFO, loads the length-prefixed
    /// payload, and strobes the transmission. The chip returns to idle on its
    /// own once the packet has left; there is no completion signal to check,
    /// so a trailing flush + idle pair runs unconditionally, even when
    /// loading the FIFO failed.
    ///
    /// Payloads longer than
    /// [`MAX_PAYLOAD_SIZE`](value@crate::radio::MAX_PAYLOAD_SIZE)
    /// bytes are truncated.
    fn send(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Blocking function to receive one packet into `buf`.
    ///
    /// Flushes the RX FIFO, then arms receive mode and polls the
    /// packet-boundary line. The chip's event timer can silently terminate
    /// receive mode while waiting; by default every poll iteration re-strobes
    /// receive mode to counter that (see
    /// [`RadioConfig::with_rx_rearm()`](fn@crate::radio::RadioConfig::with_rx_rearm)).
    ///
    /// Once the boundary line asserts, `buf.len()` bytes are drained from
    /// the RX FIFO and the FIFO is flushed, repeatedly while the line stays
    /// asserted.
    ///
    /// <div class="warning">
    ///
    /// When more than one packet is queued, each drain pass overwrites `buf`;
    /// only the newest packet survives in the caller's buffer.
    ///
    /// </div>
    ///
    /// Both loops are bounded; exhausting the arm budget yields a timeout
    /// error instead of blocking forever.
    fn receive(&mut self, buf: &mut [u8]) -> Result<(), Self::RadioErrorType>;

    /// Issue the chip's software reset strobe.
    fn reset(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Get the driver's cached notion of the chip's mode.
    ///
    /// This is tracked from issued strobes only and can diverge from the
    /// chip's real state; see [`RadioMode`].
    fn mode(&self) -> RadioMode;
}
