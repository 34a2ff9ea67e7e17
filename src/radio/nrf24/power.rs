use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::bit_fields::Config;
use crate::radio::{prelude::EsbPower, Nrf24, Nrf24Error};
use crate::Clock;

/// How long the radio needs to settle after its PWR_UP bit changes (in microseconds).
pub(super) const POWER_SETTLE_US: u32 = 150;

impl<SPI, DO, DELAY, CLK> EsbPower for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA).
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?; // Guarantee CE is low on powerDown
        self._config_reg = self.modify_register::<Config>(|reg| reg.with_pwr_up(false))?;
        Ok(())
    }

    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        self._config_reg = self.modify_register::<Config>(|reg| reg.with_pwr_up(true))?;
        self._delay_impl.delay_us(POWER_SETTLE_US);
        Ok(())
    }

    /// Is the radio powered up?
    ///
    /// This reflects the last value of the CONFIG register this driver saw.
    fn is_powered(&self) -> bool {
        self._config_reg.pwr_up()
    }
}
