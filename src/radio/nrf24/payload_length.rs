use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPayloadLength, Nrf24, MAX_PAYLOAD_LENGTH};
use crate::Clock;

impl<SPI, DO, DELAY, CLK> EsbPayloadLength for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    /// The `length` is clamped to the range [0, 32].
    /// No SPI transaction is performed here.
    fn set_payload_length(&mut self, length: u8) {
        self._config = self._config.with_payload_length(length.min(MAX_PAYLOAD_LENGTH));
    }

    fn get_payload_length(&self) -> u8 {
        self._config.payload_length()
    }
}
