//! This module defines types used by the driver's public API.
//! These types are meant to be agnostic of the bus implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

/// The driver's notion of the chip's current mode.
///
/// The mode is inferred purely from the strobes this driver has issued; the
/// chip's own state machine is never queried. The two can therefore diverge,
/// most visibly when the chip's event timer drops it out of receive mode on
/// its own (see [`RadioConfig::with_rx_rearm()`](fn@crate::radio::RadioConfig::with_rx_rearm)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioMode {
    /// No transfer in progress; the frequency synthesizer may be off.
    Idle,
    /// A packet is being clocked out of the TX FIFO.
    Transmitting,
    /// The demodulator is armed and filling the RX FIFO.
    Receiving,
    /// The RX FIFO overflowed; only a flush leaves this state.
    RxOverflow,
    /// The TX FIFO underflowed; only a flush leaves this state.
    TxUnderflow,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for RadioMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RadioMode::Idle => defmt::write!(fmt, "Idle"),
            RadioMode::Transmitting => defmt::write!(fmt, "Transmitting"),
            RadioMode::Receiving => defmt::write!(fmt, "Receiving"),
            RadioMode::RxOverflow => defmt::write!(fmt, "RX overflow"),
            RadioMode::TxUnderflow => defmt::write!(fmt, "TX underflow"),
        }
    }
}

impl Display for RadioMode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            RadioMode::Idle => write!(f, "Idle"),
            RadioMode::Transmitting => write!(f, "Transmitting"),
            RadioMode::Receiving => write!(f, "Receiving"),
            RadioMode::RxOverflow => write!(f, "RX overflow"),
            RadioMode::TxUnderflow => write!(f, "TX underflow"),
        }
    }
}

/// Role-dependent programming of the packet-boundary line (GDO0).
///
/// A device that mostly listens wants the line asserted when a whole packet
/// has landed in the RX FIFO; a device that mostly talks wants it to track
/// the transmission instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalRole {
    /// Assert at end of packet, deassert once the RX FIFO drains.
    Receive,
    /// Assert when the sync word goes out, deassert at end of packet.
    Transmit,
}

impl SignalRole {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            SignalRole::Receive => 0x01,
            SignalRole::Transmit => 0x06,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0x06 => SignalRole::Transmit,
            _ => SignalRole::Receive,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for SignalRole {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SignalRole::Receive => defmt::write!(fmt, "Receive"),
            SignalRole::Transmit => defmt::write!(fmt, "Transmit"),
        }
    }
}

impl Display for SignalRole {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SignalRole::Receive => write!(f, "Receive"),
            SignalRole::Transmit => write!(f, "Transmit"),
        }
    }
}

/// Hardware address filtering applied to received packets.
///
/// Maps onto the two address-check bits of the packet automation control
/// register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressFilter {
    /// Accept every packet.
    Disabled,
    /// Accept packets addressed to the configured device address only.
    DeviceAddress,
    /// Accept packets addressed to the device address or to broadcast 0x00.
    DeviceAndBroadcast,
}

impl AddressFilter {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            AddressFilter::Disabled => 0,
            AddressFilter::DeviceAddress => 1,
            AddressFilter::DeviceAndBroadcast => 2,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            1 => AddressFilter::DeviceAddress,
            2 => AddressFilter::DeviceAndBroadcast,
            _ => AddressFilter::Disabled,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for AddressFilter {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AddressFilter::Disabled => defmt::write!(fmt, "disabled"),
            AddressFilter::DeviceAddress => defmt::write!(fmt, "device address"),
            AddressFilter::DeviceAndBroadcast => defmt::write!(fmt, "device address + broadcast"),
        }
    }
}

impl Display for AddressFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AddressFilter::Disabled => write!(f, "disabled"),
            AddressFilter::DeviceAddress => write!(f, "device address"),
            AddressFilter::DeviceAndBroadcast => write!(f, "device address + broadcast"),
        }
    }
}
