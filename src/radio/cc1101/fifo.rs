use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiBus,
};

use crate::radio::{prelude::SubGhzFifo, Cc1101, Cc1101Error};

use super::{Strobe, BURST_WRITE_DELAY_US, MAX_PAYLOAD_SIZE, RX_FIFO_BURST, TX_FIFO_BURST};

impl<SPI, DO, DI, DELAY> Cc1101<SPI, DO, DI, DELAY>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    /// Load a payload and its length prefix into the TX FIFO.
    ///
    /// The prefix goes in as a single write, then the payload follows as one
    /// burst. Payloads longer than [`MAX_PAYLOAD_SIZE`] are truncated; the
    /// prefix always matches what is actually loaded.
    pub fn write_tx_fifo(
        &mut self,
        buf: &[u8],
    ) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        let len = buf.len().min(MAX_PAYLOAD_SIZE as usize);
        self.transaction(|radio| {
            radio
                ._spi
                .write(&[TX_FIFO_BURST, len as u8])
                .map_err(Cc1101Error::Spi)
        })?;
        self.transaction(|radio| {
            radio._delay_impl.delay_us(BURST_WRITE_DELAY_US);
            radio._buf[0] = TX_FIFO_BURST;
            radio._buf[1..=len].copy_from_slice(&buf[..len]);
            radio._spi.write(&radio._buf[..=len]).map_err(Cc1101Error::Spi)
        })
    }

    /// Drain `buf.len()` bytes from the RX FIFO.
    ///
    /// The chip clocks FIFO contents out against dummy zero bytes.
    pub fn read_rx_fifo(
        &mut self,
        buf: &mut [u8],
    ) -> Result<(), Cc1101Error<SPI::Error, DO::Error, DI::Error>> {
        let len = buf.len().min(self._buf.len() - 1);
        self.transaction(|radio| {
            radio._buf[0] = RX_FIFO_BURST;
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

impl<SPI, DO, DI, DELAY> SubGhzFifo for Cc1101<SPI, DO, DI, DELAY>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type FifoErrorType = Cc1101Error<SPI::Error, DO::Error, DI::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.strobe(Strobe::FlushRx)
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.strobe(Strobe::FlushTx)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Strobe, SubGhzFifo, MAX_PAYLOAD_SIZE, RX_FIFO_BURST, TX_FIFO_BURST};
    use crate::test::{csn_expects, mk_radio, rdy_expects};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;
    use std::vec::Vec;

    #[test]
    pub fn write_tx_fifo() {
        let spi_expectations = crate::spi_session_expects![
            // length prefix
            (SpiTransaction::write_vec(vec![TX_FIFO_BURST, 3u8])),
            // payload burst
            (SpiTransaction::write_vec(vec![TX_FIFO_BURST, 0x55u8, 0x55u8, 0x55u8])),
        ];
        let mocks = mk_radio(&csn_expects(2), &rdy_expects(2), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut rdy_pin, mut gdo0_pin) =
            (mocks.0, mocks.1, mocks.2, mocks.3, mocks.4);
        radio.write_tx_fifo(&[0x55; 3]).unwrap();
        spi.done();
        csn_pin.done();
        rdy_pin.done();
        gdo0_pin.done();
    }

    #[test]
    pub fn write_tx_fifo_truncates() {
        let mut burst = Vec::with_capacity(MAX_PAYLOAD_SIZE as usize + 1);
        burst.push(TX_FIFO_BURST);
        burst.extend([0xAAu8; MAX_PAYLOAD_SIZE as usize]);
        let spi_expectations = crate::spi_session_expects![
            (SpiTransaction::write_vec(vec![TX_FIFO_BURST, MAX_PAYLOAD_SIZE])),
            (SpiTransaction::write_vec(burst)),
        ];
        let mocks = mk_radio(&csn_expects(2), &rdy_expects(2), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut rdy_pin, mut gdo0_pin) =
            (mocks.0, mocks.1, mocks.2, mocks.3, mocks.4);
        // one byte longer than the FIFO can take
        radio
            .write_tx_fifo(&[0xAA; MAX_PAYLOAD_SIZE as usize + 1])
            .unwrap();
        spi.done();
        csn_pin.done();
        rdy_pin.done();
        gdo0_pin.done();
    }

    #[test]
    pub fn read_rx_fifo() {
        let spi_expectations = crate::spi_session_expects![
            (SpiTransaction::transfer_in_place(
                vec![RX_FIFO_BURST, 0u8, 0u8, 0u8, 0u8],
                vec![0x0Fu8, 1u8, 2u8, 3u8, 4u8],
            )),
        ];
        let mocks = mk_radio(&csn_expects(1), &rdy_expects(1), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut rdy_pin, mut gdo0_pin) =
            (mocks.0, mocks.1, mocks.2, mocks.3, mocks.4);
        let mut buf = [0u8; 4];
        radio.read_rx_fifo(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
        spi.done();
        csn_pin.done();
        rdy_pin.done();
        gdo0_pin.done();
    }

    #[test]
    pub fn flush() {
        let spi_expectations = crate::spi_session_expects![
            (SpiTransaction::write_vec(vec![Strobe::FlushRx.opcode()])),
            (SpiTransaction::write_vec(vec![Strobe::FlushTx.opcode()])),
        ];
        let mocks = mk_radio(&csn_expects(2), &rdy_expects(2), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut rdy_pin, mut gdo0_pin) =
            (mocks.0, mocks.1, mocks.2, mocks.3, mocks.4);
        radio.flush_rx().unwrap();
        radio.flush_tx().unwrap();
        spi.done();
        csn_pin.done();
        rdy_pin.done();
        gdo0_pin.done();
    }
}
