//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use orf24::radio::prelude::*;
//! ```

use crate::types::{CrcLength, DataRate, PaLevel, StatusFlags, TxOutcome};

use super::RadioConfig;

/// A trait to represent raw register and FIFO access
/// for an ESB capable transceiver.
///
/// Every function here performs exactly one SPI transaction.
/// Register addresses are masked to 5 bits before they are combined with an opcode.
pub trait EsbRegisters {
    type RegisterErrorType;

    /// Read a single byte from the register at `address`.
    ///
    /// The STATUS byte shifted out during the transaction is cached
    /// (see [`EsbStatus::get_status_flags()`]) but not returned.
    fn read_register(&mut self, address: u8) -> Result<u8, Self::RegisterErrorType>;

    /// Read `buf.len()` bytes (up to 32) from the register at `address` into `buf`,
    /// in the order they are received.
    fn read_registers(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Self::RegisterErrorType>;

    /// Write a single byte to the register at `address`.
    fn write_register(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<StatusFlags, Self::RegisterErrorType>;

    /// Write up to 32 bytes from `buf` to the register at `address`.
    ///
    /// Bytes are sent in the order given; no reordering is done here.
    fn write_registers(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<StatusFlags, Self::RegisterErrorType>;

    /// Put `buf` (truncated to 32 bytes) into the TX FIFO.
    fn write_payload(&mut self, buf: &[u8]) -> Result<StatusFlags, Self::RegisterErrorType>;

    /// Take `buf.len()` bytes (up to 32) from the top of the RX FIFO.
    fn read_payload(&mut self, buf: &mut [u8]) -> Result<StatusFlags, Self::RegisterErrorType>;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<StatusFlags, Self::RegisterErrorType>;

    /// Flush the radio's TX FIFO.
    ///
    /// This function is automatically called by [`EsbRadio::write()`]
    /// after every transmission attempt.
    fn flush_tx(&mut self) -> Result<StatusFlags, Self::RegisterErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// The default channel is 76 (2400 + 76 = 2.476 GHz).
    /// Values greater than 127 are clamped to 127.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn get_status_flags(&self) -> StatusFlags;

    /// Clear the radio's IRQ status flags.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// event. Members set to `false` leave the corresponding status flag untouched
    /// (the STATUS register is write-1-to-clear).
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Refresh the internal cache of status byte
    /// (which is also saved from every SPI transaction).
    ///
    /// Use [`EsbStatus::get_status_flags()`] to get the updated status flags.
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of the static payload length
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    /// Set the static payload length.
    ///
    /// The `length` is clamped to the range [0, 32]. This only stores the value;
    /// it is sent to the radio when a pipe is opened
    /// (see [`EsbPipe::open_writing_pipe()`]) and used to pad payloads in
    /// [`EsbRadio::write()`].
    fn set_payload_length(&mut self, length: u8);

    /// Get the currently configured static payload length.
    fn get_payload_length(&self) -> u8;
}

/// A trait to represent manipulation of the automatic retransmission feature
/// for an ESB capable transceiver.
pub trait EsbAutoRetries {
    type AutoRetriesErrorType;

    /// Set the number of retry attempts and delay between retry attempts when
    /// transmitting a payload.
    ///
    /// The radio is waiting for an acknowledgement (ACK) packet during the delay between retry attempts.
    ///
    /// Both parameters are clamped to range [0, 15].
    /// - `delay`: How long to wait between each retry, in multiples of
    ///   250 us. The minimum of 0 means 250 us, and the maximum of 15 means
    ///   4000 us. The default value of 5 means 1500 us (`5 * 250 + 250`).
    /// - `count`: How many retries before giving up. The default/maximum is 15. Use
    ///   0 to disable the auto-retry feature.
    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoRetriesErrorType>;

    /// Get the auto-retry `(delay, count)` pair currently held by the radio.
    fn get_auto_retries(&mut self) -> Result<(u8, u8), Self::AutoRetriesErrorType>;
}

/// A trait to represent manipulation of the power amplitude level
/// for an ESB capable transceiver.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Get the currently configured Power Amplitude Level (PA Level)
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Set the radio's Power Amplitude Level (PA Level)
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of the state of power
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power down the radio.
    ///
    /// The CE pin is driven LOW before the PWR_UP bit is cleared.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio and wait 150 microseconds for it to settle.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Get the current (cached) state of the radio's power.
    fn is_powered(&self) -> bool;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for an ESB capable transceiver.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    /// Get the current setting of the ESB CRC length.
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Set the radio's CRC (Cyclical Redundancy Checksum) length
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;
}

/// A trait to represent manipulation of the air data rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Get the currently configured Data Rate
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's Data Rate
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Set the `address` used for transmitting.
    ///
    /// The address is written (in reversed byte order) to both TX_ADDR and
    /// RX_ADDR_P0, so that pipe 0 can receive the auto-ack packets.
    /// The static payload length is also written to RX_PW_P0.
    ///
    /// Only the first [`EsbPipe::get_address_length()`] bytes of `address` are used.
    /// A shorter `address` is padded with zeros in its most significant bytes, so
    /// every byte of the configured address width is written.
    /// ```ignore
    /// radio.open_writing_pipe(b"1Node")?;
    /// ```
    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Open a specified `pipe` for receiving data.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    ///
    /// Pipes 0 and 1 will store a full address. Pipes 2-5 only store a single byte
    /// (the last byte of `address`), borrowing the remaining bytes from pipe 1.
    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Close a specified pipe from receiving data.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;

    /// Set the address length (applies to all pipes).
    ///
    /// The specified length is clamped to the range [3, 5].
    fn set_address_length(&mut self, length: u8) -> Result<(), Self::PipeErrorType>;

    /// Get the currently configured address length (applied to all pipes).
    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType>;
}

/// A trait to represent transmission of data
/// for an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Transmit a single payload and block until the transmission settles.
    ///
    /// The payload is zero padded to the configured static payload length.
    /// Afterwards the radio is powered down and its TX FIFO flushed, regardless
    /// of the outcome.
    ///
    /// Returns `true` only if the radio reported the payload as sent.
    /// Use [`EsbRadio::last_outcome()`] to tell apart the reasons for a `false` result.
    fn write(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType>;

    /// The outcome of the last call to [`EsbRadio::write()`] (if any).
    ///
    /// This is `None` if that call returned an error.
    fn last_outcome(&self) -> Option<TxOutcome>;

    /// Get the Auto-Retry Count (ARC) about the previous transmission.
    ///
    /// This data is reset for every payload attempted to transmit.
    /// It cannot exceed 15 per the `count` parameter in [`EsbAutoRetries::set_auto_retries()`].
    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType>;
}

/// A trait to represent the initialization of an ESB capable transceiver.
pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware with library defaults.
    ///
    /// This is the same as `with_config(&RadioConfig::default())`.
    fn begin(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// See [`RadioConfig`] for more detail.
    /// This function can be used to reset the radio to a known state.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent debug output
/// for an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Write the contents of every known register to `out`, one line per register.
    ///
    /// Address registers are printed in the byte order a caller would supply them.
    fn dump_registers<W: core::fmt::Write>(
        &mut self,
        out: &mut W,
    ) -> Result<(), Self::DetailsErrorType>;

    /// Print details about radio's current configuration.
    ///
    /// This should only be used for debugging development.
    /// Using this in production should be limited due to a significant increase in
    /// compile size.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
