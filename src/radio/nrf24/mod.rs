use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
mod access;
pub(crate) mod bit_fields;
mod channel;
mod init;
use bit_fields::{Config, RegisterValue};
mod constants;
mod crc_length;
mod data_rate;
mod details;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
mod retries;
mod status;
pub use constants::{commands, mnemonics, Register};

use super::RadioConfig;
use crate::{types::TxOutcome, Clock, StatusFlags};

/// An collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO).
    ///
    /// This is reported when a register does not hold the value that was just written to it,
    /// which usually means the radio is not connected (or not powered).
    BinaryCorruption,
    /// The output given to
    /// [`EsbDetails::dump_registers()`](fn@crate::radio::prelude::EsbDetails::dump_registers)
    /// refused to accept more text.
    Fmt,
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// Only the transmitting role is fully implemented. Receiving is limited to the
/// raw register and FIFO access of
/// [`EsbRegisters`](trait@crate::radio::prelude::EsbRegisters).
pub struct Nrf24<SPI, DO, DELAY, CLK> {
    _spi: SPI,
    _ce_pin: DO,
    _delay_impl: DELAY,
    _clock: CLK,
    _buf: [u8; 33],
    _status: StatusFlags,
    _config: RadioConfig,
    _config_reg: Config,
    _last_outcome: Option<TxOutcome>,
}

impl<SPI, DO, DELAY, CLK> Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    /// Instantiate an [`Nrf24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter). The bus speed is also configured there.
    ///
    /// The `clock` is used to bound how long [`EsbRadio::write()`](fn@crate::radio::prelude::EsbRadio::write)
    /// waits for a transmission to settle.
    ///
    /// No SPI transactions are performed here.
    /// Call [`EsbInit::begin()`](fn@crate::radio::prelude::EsbInit::begin) before using the radio.
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY, clock: CLK) -> Nrf24<SPI, DO, DELAY, CLK> {
        Nrf24 {
            _spi: spi,
            _ce_pin: ce_pin,
            _delay_impl: delay_impl,
            _clock: clock,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            _config: RadioConfig::default(),
            // 16 bit CRC, enable all IRQ, and power down as TX
            _config_reg: Config::from_bits(0xC),
            _last_outcome: None,
        }
    }

    /// Give back the hardware resources used by this driver.
    pub fn release(self) -> (DO, SPI, DELAY, CLK) {
        (self._ce_pin, self._spi, self._delay_impl, self._clock)
    }

    /// The configuration last applied to the radio.
    ///
    /// Each setter in [`crate::radio::prelude`] keeps this up to date.
    pub fn config(&self) -> &RadioConfig {
        &self._config
    }

    fn spi_transfer(&mut self, len: usize) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(
        &mut self,
        len: usize,
        command: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = len.min(32);
        self._buf[0] = command;
        self._buf[1..=len].fill(commands::NOP);
        self.spi_transfer(len + 1)
    }

    fn spi_write(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len().min(32);
        self._buf[0] = command;
        self._buf[1..=len].copy_from_slice(&buf[..len]);
        self.spi_transfer(len + 1)
    }

    fn read_reg(&mut self, reg: Register) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, commands::r_register(reg.address()))?;
        Ok(self._buf[1])
    }

    fn write_reg(
        &mut self,
        reg: Register,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write(commands::w_register(reg.address()), &[value])
    }

    fn read_value<R: RegisterValue>(&mut self) -> Result<R, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(R::from_byte(self.read_reg(R::REGISTER)?))
    }

    /// Read the register behind `R`, change it with `f`, and write the result back.
    ///
    /// Fields that `f` does not touch keep whatever value the radio holds.
    fn modify_register<R: RegisterValue>(
        &mut self,
        f: impl FnOnce(R) -> R,
    ) -> Result<R, Nrf24Error<SPI::Error, DO::Error>> {
        let value = f(self.read_value::<R>()?);
        self.write_reg(R::REGISTER, value.into_byte())?;
        Ok(value)
    }
}
