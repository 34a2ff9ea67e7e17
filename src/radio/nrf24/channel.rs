use super::bit_fields::RfCh;
use crate::radio::{prelude::EsbChannel, Nrf24, Nrf24Error, MAX_CHANNEL};
use crate::Clock;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY, CLK> EsbChannel for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The nRF24L01 support 128 channels. The specified `channel` is
    /// clamped to the range [0, 127].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        let channel = channel.min(MAX_CHANNEL);
        self.modify_register::<RfCh>(|reg| reg.with_channel(channel))?;
        self._config = self._config.with_channel(channel);
        debug!("channel set to {}", channel);
        Ok(())
    }

    /// See also [`Nrf24::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        Ok(self.read_value::<RfCh>()?.channel())
    }
}
