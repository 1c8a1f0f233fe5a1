use bitfield_struct::bitfield;

/// Layout of the header byte that opens every bus transaction.
///
/// Addresses at or above [`Register::BURST_LIMIT`](value@super::Register::BURST_LIMIT)
/// repurpose the burst flag for access width, so the flag only selects
/// auto-increment within the configuration space.
#[bitfield(u8, order = Msb)]
pub(crate) struct CommandHeader {
    /// Read (1) or write (0) direction.
    pub read: bool,

    /// Auto-increment over consecutive addresses.
    pub burst: bool,

    /// Six-bit register address.
    #[bits(6)]
    pub address: u8,
}

/// Packet automation control (PKTCTRL1).
#[bitfield(u8, order = Msb)]
pub(crate) struct PacketControl1 {
    /// Preamble quality threshold.
    #[bits(3)]
    pub pqt: u8,

    #[bits(1)]
    _padding: u8,

    /// Flush the RX FIFO when the CRC check fails.
    pub crc_autoflush: bool,

    /// Append RSSI and LQI status bytes to received packets.
    pub append_status: bool,

    /// Address check mode for received packets.
    #[bits(2)]
    pub adr_chk: u8,
}

// unit tests found in crate::radio::cc1101::constants::test
