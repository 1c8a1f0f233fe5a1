use crate::types::{AddressFilter, SignalRole};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users
/// should start with the [`RadioConfig::default`] constructor, then mutate the
/// object accordingly.
/// ```
/// use cc1101::radio::RadioConfig;
///
/// let mut config = RadioConfig::default();
/// config = config.with_device_address(0x42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    device_address: u8,
    signal_role: SignalRole,
    address_filter: AddressFilter,
    ready_retries: u32,
    rx_arm_retries: u32,
    rx_drain_limit: u32,
    rx_rearm: bool,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::device_address()`] | `0x01` |
    /// | [`RadioConfig::signal_role()`] | [`SignalRole::Receive`] |
    /// | [`RadioConfig::address_filter()`] | [`AddressFilter::DeviceAddress`] |
    /// | [`RadioConfig::ready_retries()`] | `50_000` |
    /// | [`RadioConfig::rx_arm_retries()`] | `1_000_000` |
    /// | [`RadioConfig::rx_drain_limit()`] | `8` |
    /// | [`RadioConfig::rx_rearm()`] | `true` |
    fn default() -> Self {
        Self {
            device_address: 0x01,
            signal_role: SignalRole::Receive,
            address_filter: AddressFilter::DeviceAddress,
            ready_retries: 50_000,
            rx_arm_retries: 1_000_000,
            rx_drain_limit: 8,
            rx_rearm: true,
        }
    }
}

impl RadioConfig {
    /// Set the device address used by hardware packet filtering.
    ///
    /// Address `0x00` doubles as the broadcast address when
    /// [`AddressFilter::DeviceAndBroadcast`] is selected.
    pub fn with_device_address(mut self, address: u8) -> Self {
        self.device_address = address;
        self
    }

    /// Get the device address used by hardware packet filtering.
    pub const fn device_address(&self) -> u8 {
        self.device_address
    }

    /// Set the role-dependent programming of the packet-boundary line.
    pub fn with_signal_role(mut self, role: SignalRole) -> Self {
        self.signal_role = role;
        self
    }

    /// Get the role-dependent programming of the packet-boundary line.
    pub const fn signal_role(&self) -> SignalRole {
        self.signal_role
    }

    /// Set the hardware address filtering mode.
    pub fn with_address_filter(mut self, filter: AddressFilter) -> Self {
        self.address_filter = filter;
        self
    }

    /// Get the hardware address filtering mode.
    pub const fn address_filter(&self) -> AddressFilter {
        self.address_filter
    }

    /// Set how many times the readiness handshake polls the SO line before
    /// a transaction fails with
    /// [`Cc1101Error::ChipBusy`](type@crate::radio::Cc1101Error).
    ///
    /// Clamped to a minimum of 1.
    pub fn with_ready_retries(mut self, retries: u32) -> Self {
        self.ready_retries = retries.max(1);
        self
    }

    /// Get the readiness handshake poll budget.
    pub const fn ready_retries(&self) -> u32 {
        self.ready_retries
    }

    /// Set how many poll iterations `receive()` waits for the
    /// packet-boundary line before failing with
    /// [`Cc1101Error::RxTimeout`](type@crate::radio::Cc1101Error).
    ///
    /// Clamped to a minimum of 1.
    pub fn with_rx_arm_retries(mut self, retries: u32) -> Self {
        self.rx_arm_retries = retries.max(1);
        self
    }

    /// Get the receive arm poll budget.
    pub const fn rx_arm_retries(&self) -> u32 {
        self.rx_arm_retries
    }

    /// Set how many read+flush passes `receive()` performs at most while the
    /// packet-boundary line stays asserted.
    ///
    /// Clamped to a minimum of 1.
    pub fn with_rx_drain_limit(mut self, limit: u32) -> Self {
        self.rx_drain_limit = limit.max(1);
        self
    }

    /// Get the receive drain pass budget.
    pub const fn rx_drain_limit(&self) -> u32 {
        self.rx_drain_limit
    }

    /// Enable or disable re-strobing receive mode on every arm poll.
    ///
    /// The chip's event timer can silently terminate receive mode before a
    /// packet arrives; the only visible symptom is a packet-boundary line
    /// that never asserts. Re-strobing on every poll keeps the chip armed.
    /// Disable this only when the control state machine is configured to
    /// stay in receive mode indefinitely.
    pub fn with_rx_rearm(mut self, enable: bool) -> Self {
        self.rx_rearm = enable;
        self
    }

    /// Is receive mode re-strobed on every arm poll?
    pub const fn rx_rearm(&self) -> bool {
        self.rx_rearm
    }
}
