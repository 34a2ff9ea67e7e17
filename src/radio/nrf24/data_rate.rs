use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::bit_fields::RfSetup;
use crate::radio::{prelude::EsbDataRate, Nrf24, Nrf24Error};
use crate::{Clock, DataRate};

impl<SPI, DO, DELAY, CLK> EsbDataRate for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        Ok(self.read_value::<RfSetup>()?.data_rate())
    }

    /// Only the RF_DR_HIGH bit of the RF_SETUP register is changed.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        self.modify_register::<RfSetup>(|reg| reg.with_data_rate(data_rate))?;
        self._config = self._config.with_data_rate(data_rate);
        debug!("data rate set to {}", data_rate);
        Ok(())
    }
}
