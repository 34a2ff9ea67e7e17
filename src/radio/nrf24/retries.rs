use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::bit_fields::SetupRetr;
use crate::radio::{prelude::EsbAutoRetries, Nrf24, Nrf24Error};
use crate::Clock;

impl<SPI, DO, DELAY, CLK> EsbAutoRetries for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type AutoRetriesErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoRetriesErrorType> {
        let (delay, count) = (delay.min(15), count.min(15));
        self.modify_register::<SetupRetr>(|reg| reg.with_ard(delay).with_arc(count))?;
        self._config = self._config.with_auto_retries(delay, count);
        debug!("auto-retries set to {} x {} us", count, delay as u16 * 250 + 250);
        Ok(())
    }

    fn get_auto_retries(&mut self) -> Result<(u8, u8), Self::AutoRetriesErrorType> {
        let reg = self.read_value::<SetupRetr>()?;
        Ok((reg.ard(), reg.arc()))
    }
}
