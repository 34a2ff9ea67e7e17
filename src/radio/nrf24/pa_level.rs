use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::bit_fields::RfSetup;
use crate::radio::{prelude::EsbPaLevel, Nrf24, Nrf24Error};
use crate::{Clock, PaLevel};

impl<SPI, DO, DELAY, CLK> EsbPaLevel for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        Ok(self.read_value::<RfSetup>()?.pa_level())
    }

    /// Only the RF_PWR bits of the RF_SETUP register are changed.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        self.modify_register::<RfSetup>(|reg| reg.with_pa_level(pa_level))?;
        self._config = self._config.with_pa_level(pa_level);
        debug!("PA level set to {}", pa_level);
        Ok(())
    }
}
