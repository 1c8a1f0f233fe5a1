use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiBus,
};

use super::{bit_fields::PacketControl1, Register, Strobe};
use crate::radio::{prelude::SubGhzInit, Cc1101, Cc1101Error, RadioConfig};

/// GDO2 keeps signalling the inverted chip-ready state.
const GDO2_CHIP_RDY: u8 = 0x29;

/// How long the crystal and regulator get to settle after a reset strobe,
/// in microseconds.
const RESET_SETTLE_US: u32 = 10_000;

/// The fixed link profile: 433 MHz carrier, 250 kBaud GFSK, 127 kHz
/// deviation, 540 kHz RX bandwidth, optimized for current consumption.
/// After a transmission or a received packet the state machine falls back
/// to idle.
const LINK_PROFILE: [(Register, u8); 13] = [
    (Register::Freq2, 0x10),
    (Register::Freq1, 0xA7),
    (Register::Freq0, 0x62),
    (Register::Mdmcfg4, 0x2D),
    (Register::Mdmcfg3, 0x3B),
    (Register::Mdmcfg2, 0x13),
    (Register::Deviatn, 0x62),
    (Register::Mcsm0, 0x18),
    (Register::Foccfg, 0x1D),
    (Register::Fscal3, 0xEA),
    (Register::Fscal2, 0x2A),
    (Register::Fscal1, 0x00),
    (Register::Fscal0, 0x1F),
];

impl<SPI, DO, DI, DELAY> SubGhzInit for Cc1101<SPI, DO, DI, DELAY>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Cc1101Error<SPI::Error, DO::Error, DI::Error>;

    /// Initialize the radio's hardware using the [`SpiBus`] and pins given
    /// to [`Cc1101::new()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        self.strobe(Strobe::Reset)?;
        // Configuration writes do not stick until the crystal and the
        // regulator have settled after a reset.
        self._delay_impl.delay_us(RESET_SETTLE_US);
        self.with_config(&RadioConfig::default())
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.write_register(Register::Iocfg2, GDO2_CHIP_RDY)?;
        self.write_register(Register::Iocfg0, config.signal_role().into_bits())?;

        for (register, value) in LINK_PROFILE {
            self.write_register(register, value)?;
        }

        let pktctrl1 =
            PacketControl1::new().with_adr_chk(config.address_filter().into_bits());
        self.write_register(Register::Pktctrl1, pktctrl1.into_bits())?;
        self.write_register(Register::Addr, config.device_address())?;

        self._config = *config;
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Register, Strobe, SubGhzInit};
    use crate::radio::RadioConfig;
    use crate::test::{csn_expects, mk_radio, rdy_expects};
    use crate::types::{AddressFilter, SignalRole};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;
    use std::vec::Vec;

    fn profile_writes(iocfg0: u8, pktctrl1: u8, address: u8) -> Vec<SpiTransaction<u8>> {
        let mut expectations = Vec::new();
        let writes = [
            (Register::Iocfg2, 0x29),
            (Register::Iocfg0, iocfg0),
            (Register::Freq2, 0x10),
            (Register::Freq1, 0xA7),
            (Register::Freq0, 0x62),
            (Register::Mdmcfg4, 0x2D),
            (Register::Mdmcfg3, 0x3B),
            (Register::Mdmcfg2, 0x13),
            (Register::Deviatn, 0x62),
            (Register::Mcsm0, 0x18),
            (Register::Foccfg, 0x1D),
            (Register::Fscal3, 0xEA),
            (Register::Fscal2, 0x2A),
            (Register::Fscal1, 0x00),
            (Register::Fscal0, 0x1F),
            (Register::Pktctrl1, pktctrl1),
            (Register::Addr, address),
        ];
        for (register, value) in writes {
            expectations.push(SpiTransaction::write_vec(vec![
                register.write_address(),
                value,
            ]));
            expectations.push(SpiTransaction::flush());
        }
        expectations
    }

    #[test]
    pub fn init() {
        let mut spi_expectations = crate::spi_session_expects![
            SpiTransaction::write_vec(vec![Strobe::Reset.opcode()]),
        ]
        .to_vec();
        spi_expectations.extend(profile_writes(0x01, 0x01, 0x01));
        let mocks = mk_radio(&csn_expects(18), &rdy_expects(18), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut rdy_pin, mut gdo0_pin) =
            (mocks.0, mocks.1, mocks.2, mocks.3, mocks.4);
        radio.init().unwrap();
        spi.done();
        csn_pin.done();
        rdy_pin.done();
        gdo0_pin.done();
    }

    #[test]
    pub fn with_config_transmit_role() {
        let spi_expectations = profile_writes(0x06, 0x02, 0x42);
        let mocks = mk_radio(&csn_expects(17), &rdy_expects(17), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut rdy_pin, mut gdo0_pin) =
            (mocks.0, mocks.1, mocks.2, mocks.3, mocks.4);
        let config = RadioConfig::default()
            .with_device_address(0x42)
            .with_signal_role(SignalRole::Transmit)
            .with_address_filter(AddressFilter::DeviceAndBroadcast);
        radio.with_config(&config).unwrap();
        assert_eq!(radio._config.device_address(), 0x42);
        spi.done();
        csn_pin.done();
        rdy_pin.done();
        gdo0_pin.done();
    }
}
