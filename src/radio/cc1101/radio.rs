use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiBus,
};

use crate::radio::{prelude::SubGhzRadio, Cc1101, Cc1101Error};
use crate::types::RadioMode;

use super::Strobe;

impl<SPI, DO, DI, DELAY> SubGhzRadio for Cc1101<SPI, DO, DI, DELAY>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Cc1101Error<SPI::Error, DO::Error, DI::Error>;

    /// See [`SubGhzRadio::send()`] for implementation-agnostic detail.
    ///
    /// The TX flush only takes effect while idle, hence the leading idle
    /// strobe. The chip falls back to idle by itself after the packet leaves
    /// (per the state-machine profile written by
    /// [`with_config()`](fn@crate::radio::prelude::SubGhzInit::with_config)),
    /// and there is no completion signal to check, so the trailing flush +
    /// idle pair runs whether or not loading the FIFO succeeded.
    fn send(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        self.strobe(Strobe::Idle)?;
        self.strobe(Strobe::FlushTx)?;
        let loaded = self
            .write_tx_fifo(buf)
            .and_then(|()| self.strobe(Strobe::EnterTx));
        let cleanup = self
            .strobe(Strobe::FlushTx)
            .and_then(|()| self.strobe(Strobe::Idle));
        loaded.and(cleanup)
    }

    /// See [`SubGhzRadio::receive()`] for implementation-agnostic detail.
    ///
    /// Every arm iteration strobes receive mode before polling the
    /// packet-boundary line. The chip's event timer can silently terminate
    /// receive mode while nothing is on the air, and the dropped state is
    /// invisible to this driver (see [`RadioMode`]); re-strobing keeps the
    /// chip armed. A single arm strobe is issued when the workaround is
    /// disabled.
    fn receive(&mut self, buf: &mut [u8]) -> Result<(), Self::RadioErrorType> {
        self.strobe(Strobe::FlushRx)?;

        let mut polls = 0u32;
        loop {
            if polls == 0 || self._config.rx_rearm() {
                self.strobe(Strobe::EnterRx)?;
            }
            if self.data_ready()? {
                break;
            }
            polls += 1;
            if polls >= self._config.rx_arm_retries() {
                return Err(Cc1101Error::RxTimeout);
            }
        }

        // The line stays asserted while packet boundaries are pending, so
        // keep draining to stop queued packets stranding in the FIFO. Each
        // pass overwrites `buf` with the newest packet.
        let mut drained = 0u32;
        while self.data_ready()? {
            self.read_rx_fifo(buf)?;
            self.strobe(Strobe::FlushRx)?;
            drained += 1;
            if drained >= self._config.rx_drain_limit() {
                break;
            }
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), Self::RadioErrorType> {
        self.strobe(Strobe::Reset)
    }

    fn mode(&self) -> RadioMode {
        self._mode
    }
}
