#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Cc1101::new()`](fn@crate::radio::Cc1101::new)
//! - [`Cc1101::init()`](radio/struct.Cc1101.html#method.init)
//! - [`Cc1101::send()`](radio/struct.Cc1101.html#method.send)
//! - [`Cc1101::receive()`](radio/struct.Cc1101.html#method.receive)
//! - [`Cc1101::reset()`](radio/struct.Cc1101.html#method.reset)
//! - [`Cc1101::mode()`](radio/struct.Cc1101.html#method.mode)
//!
//! ## Advanced API
//!
//! - [`Cc1101::strobe()`](radio/struct.Cc1101.html#method.strobe)
//! - [`Cc1101::read_register()`](radio/struct.Cc1101.html#method.read_register)
//! - [`Cc1101::write_register()`](radio/struct.Cc1101.html#method.write_register)
//! - [`Cc1101::read_burst()`](radio/struct.Cc1101.html#method.read_burst)
//! - [`Cc1101::write_burst()`](radio/struct.Cc1101.html#method.write_burst)
//! - [`Cc1101::write_tx_fifo()`](radio/struct.Cc1101.html#method.write_tx_fifo)
//! - [`Cc1101::read_rx_fifo()`](radio/struct.Cc1101.html#method.read_rx_fifo)
//! - [`Cc1101::flush_rx()`](radio/struct.Cc1101.html#method.flush_rx)
//! - [`Cc1101::flush_tx()`](radio/struct.Cc1101.html#method.flush_tx)
//!
//! ## Configuration API
//!
//! - [`Cc1101::with_config()`](radio/struct.Cc1101.html#method.with_config)
//! - [`RadioConfig`](struct@crate::radio::RadioConfig)
//!
#![no_std]

pub mod checksum;
mod types;
pub use types::{AddressFilter, RadioMode, SignalRole};
pub mod radio;
