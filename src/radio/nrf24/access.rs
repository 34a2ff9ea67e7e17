use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{commands, Nrf24, Nrf24Error};
use crate::{radio::prelude::EsbRegisters, Clock, StatusFlags};

impl<SPI, DO, DELAY, CLK> EsbRegisters for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type RegisterErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn read_register(&mut self, address: u8) -> Result<u8, Self::RegisterErrorType> {
        self.spi_read(1, commands::r_register(address))?;
        Ok(self._buf[1])
    }

    fn read_registers(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Self::RegisterErrorType> {
        let len = buf.len().min(32);
        self.spi_read(len, commands::r_register(address))?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(self._status)
    }

    fn write_register(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<StatusFlags, Self::RegisterErrorType> {
        self.spi_write(commands::w_register(address), &[value])?;
        Ok(self._status)
    }

    fn write_registers(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<StatusFlags, Self::RegisterErrorType> {
        self.spi_write(commands::w_register(address), buf)?;
        Ok(self._status)
    }

    fn write_payload(&mut self, buf: &[u8]) -> Result<StatusFlags, Self::RegisterErrorType> {
        self.spi_write(commands::W_TX_PAYLOAD, buf)?;
        Ok(self._status)
    }

    fn read_payload(&mut self, buf: &mut [u8]) -> Result<StatusFlags, Self::RegisterErrorType> {
        let len = buf.len().min(32);
        self.spi_read(len, commands::R_RX_PAYLOAD)?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(self._status)
    }

    fn flush_rx(&mut self) -> Result<StatusFlags, Self::RegisterErrorType> {
        self.spi_read(0, commands::FLUSH_RX)?;
        Ok(self._status)
    }

    fn flush_tx(&mut self) -> Result<StatusFlags, Self::RegisterErrorType> {
        self.spi_read(0, commands::FLUSH_TX)?;
        Ok(self._status)
    }
}
