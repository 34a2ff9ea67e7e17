use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::bit_fields::Config;
use crate::radio::{prelude::EsbCrcLength, Nrf24, Nrf24Error};
use crate::{Clock, CrcLength};

impl<SPI, DO, DELAY, CLK> EsbCrcLength for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type CrcLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        let config = self.read_value::<Config>()?;
        self._config_reg = config;
        Ok(config.crc_length())
    }

    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        self._config_reg =
            self.modify_register::<Config>(|reg| reg.with_crc_length(crc_length))?;
        self._config = self._config.with_crc_length(crc_length);
        debug!("CRC length set to {}", crc_length);
        Ok(())
    }
}
