use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{
    bit_fields::{EnRxAddr, SetupAw},
    commands, Register,
};
use crate::radio::{prelude::EsbPipe, Nrf24, Nrf24Error};
use crate::Clock;

impl<SPI, DO, DELAY, CLK> Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    /// Write the first `address_length` bytes of `address` to `reg`, last byte first.
    ///
    /// The radio expects the least significant byte first, while callers spell
    /// addresses most significant byte first. A short `address` is zero padded
    /// so all `address_length` bytes of `reg` are overwritten.
    fn write_address(
        &mut self,
        reg: Register,
        address: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let width = self._config.address_length() as usize;
        let used = width.min(address.len());
        let mut reversed = [0u8; 5];
        for (dst, src) in reversed[..used]
            .iter_mut()
            .zip(address[..used].iter().rev())
        {
            *dst = *src;
        }
        self.spi_write(commands::w_register(reg.address()), &reversed[..width])
    }
}

impl<SPI, DO, DELAY, CLK> EsbPipe for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        self.write_address(Register::RxAddrP0, address)?;
        self.write_address(Register::TxAddr, address)?;
        self.write_reg(Register::RxPwP0, self._config.payload_length())
    }

    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let (Some(addr_reg), Some(width_reg)) =
            (Register::rx_address(pipe), Register::rx_payload_width(pipe))
        else {
            return Ok(());
        };
        if pipe < 2 {
            self.write_address(addr_reg, address)?;
        } else {
            // pipes 2-5 only hold the least significant byte
            let width = (self._config.address_length() as usize).min(address.len());
            if let Some(byte) = address[..width].last() {
                self.write_reg(addr_reg, *byte)?;
            }
        }
        self.write_reg(width_reg, self._config.payload_length())?;
        self.modify_register::<EnRxAddr>(|reg| reg.with_pipe(pipe, true))?;
        Ok(())
    }

    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.modify_register::<EnRxAddr>(|reg| reg.with_pipe(pipe, false))?;
        Ok(())
    }

    /// The `length` is clamped to the range [3, 5].
    fn set_address_length(&mut self, length: u8) -> Result<(), Self::PipeErrorType> {
        let reg = self.modify_register::<SetupAw>(|reg| reg.with_address_length(length))?;
        self._config = self._config.with_address_length(reg.address_length());
        Ok(())
    }

    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType> {
        Ok(self.read_value::<SetupAw>()?.address_length())
    }
}
