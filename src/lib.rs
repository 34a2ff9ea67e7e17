//! A pure-rust driver for transmitting with the nRF24L01 wireless transceiver.
//!
//! The driver is built on the [`embedded-hal`](https://docs.rs/embedded-hal) 1.0 traits:
//! a [`SpiDevice`](trait@embedded_hal::spi::SpiDevice) that owns the radio's CSN pin,
//! an [`OutputPin`](trait@embedded_hal::digital::OutputPin) for the CE pin,
//! a [`DelayNs`](trait@embedded_hal::delay::DelayNs) implementation, and a [`Clock`].
//!
//! ```ignore
//! use orf24::radio::{prelude::*, Nrf24};
//!
//! let mut radio = Nrf24::new(ce_pin, spi_device, delay, clock);
//! radio.begin()?;
//! radio.open_writing_pipe(b"1Node")?;
//! if !radio.write(b"Hello")? {
//!     // inspect radio.last_outcome()
//! }
//! ```
//!
//! ## Basic API
//!
//! - [`Nrf24::new()`](fn@crate::radio::Nrf24::new)
//! - [`Nrf24::begin()`](radio/struct.Nrf24.html#method.begin)
//! - [`Nrf24::open_writing_pipe()`](radio/struct.Nrf24.html#method.open_writing_pipe)
//! - [`Nrf24::write()`](radio/struct.Nrf24.html#method.write)
//! - [`Nrf24::last_outcome()`](radio/struct.Nrf24.html#method.last_outcome)
//! - [`Nrf24::set_channel()`](radio/struct.Nrf24.html#method.set_channel)
//! - [`Nrf24::get_channel()`](radio/struct.Nrf24.html#method.get_channel)
//!
//! ## Register API
//!
//! - [`Nrf24::read_register()`](radio/struct.Nrf24.html#method.read_register)
//! - [`Nrf24::read_registers()`](radio/struct.Nrf24.html#method.read_registers)
//! - [`Nrf24::write_register()`](radio/struct.Nrf24.html#method.write_register)
//! - [`Nrf24::write_registers()`](radio/struct.Nrf24.html#method.write_registers)
//! - [`Nrf24::write_payload()`](radio/struct.Nrf24.html#method.write_payload)
//! - [`Nrf24::read_payload()`](radio/struct.Nrf24.html#method.read_payload)
//! - [`Nrf24::flush_rx()`](radio/struct.Nrf24.html#method.flush_rx)
//! - [`Nrf24::flush_tx()`](radio/struct.Nrf24.html#method.flush_tx)
//! - [`Nrf24::get_status_flags()`](radio/struct.Nrf24.html#method.get_status_flags)
//! - [`Nrf24::clear_status_flags()`](radio/struct.Nrf24.html#method.clear_status_flags)
//! - [`Nrf24::update()`](radio/struct.Nrf24.html#method.update)
//! - [`Nrf24::get_last_arc()`](radio/struct.Nrf24.html#method.get_last_arc)
//! - [`Nrf24::dump_registers()`](radio/struct.Nrf24.html#method.dump_registers)
//! - [`Nrf24::print_details()`](radio/struct.Nrf24.html#method.print_details)
//!
//! ## Configuration API
//!
//! - [`Nrf24::with_config()`](radio/struct.Nrf24.html#method.with_config)
//! - [`Nrf24::set_auto_retries()`](radio/struct.Nrf24.html#method.set_auto_retries)
//! - [`Nrf24::set_address_length()`](radio/struct.Nrf24.html#method.set_address_length)
//! - [`Nrf24::set_payload_length()`](radio/struct.Nrf24.html#method.set_payload_length)
//! - [`Nrf24::set_data_rate()`](radio/struct.Nrf24.html#method.set_data_rate)
//! - [`Nrf24::set_pa_level()`](radio/struct.Nrf24.html#method.set_pa_level)
//! - [`Nrf24::set_crc_length()`](radio/struct.Nrf24.html#method.set_crc_length)
//! - [`Nrf24::open_reading_pipe()`](radio/struct.Nrf24.html#method.open_reading_pipe)
//! - [`Nrf24::close_reading_pipe()`](radio/struct.Nrf24.html#method.close_reading_pipe)
//! - [`Nrf24::power_up()`](radio/struct.Nrf24.html#method.power_up)
//! - [`Nrf24::power_down()`](radio/struct.Nrf24.html#method.power_down)
//!
//! ## Cargo features
//!
//! - `std`: provides [`StdClock`] and lets `print_details()` write to stdout.
//! - `defmt`: routes log messages and `print_details()` through `defmt`.
//! - `log`: routes log messages through the `log` facade (ignored if `defmt` is enabled).
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

mod types;
pub use types::{CrcLength, DataRate, PaLevel, StatusFlags, TxOutcome};
pub mod clock;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use clock::Clock;
pub mod radio;

#[cfg(test)]
mod sim;
