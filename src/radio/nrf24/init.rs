use super::{bit_fields::SetupRetr, Nrf24, Nrf24Error, Register};
use crate::{
    radio::{
        prelude::{
            EsbAutoRetries, EsbChannel, EsbCrcLength, EsbDataRate, EsbInit, EsbPaLevel,
            EsbPayloadLength, EsbPipe, EsbRegisters, EsbStatus,
        },
        RadioConfig,
    },
    Clock, StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY, CLK> EsbInit for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`Nrf24::new()`].
    fn begin(&mut self) -> Result<(), Self::ConfigErrorType> {
        self.with_config(&RadioConfig::default())
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] if the SETUP_RETR register does not
    /// hold the configured auto-retry settings afterwards.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        // Configuration bits do not reliably stick until the radio has settled
        // (4.5 ms + 14 us worst case after power on).
        self._delay_impl.delay_ms(5);

        self.set_auto_retries(config.auto_retry_delay(), config.auto_retry_count())?;
        self.set_pa_level(config.pa_level())?;
        self.set_data_rate(config.data_rate())?;
        self.set_crc_length(config.crc_length())?;
        self.set_address_length(config.address_length())?;

        // static payloads only
        self.write_reg(Register::Dynpd, 0)?;
        self.clear_status_flags(StatusFlags::new())?;

        self.set_channel(config.channel())?;
        self.set_payload_length(config.payload_length());

        self.flush_rx()?;
        self.flush_tx()?;

        let retries = self.read_value::<SetupRetr>()?;
        if (retries.ard(), retries.arc()) != (config.auto_retry_delay(), config.auto_retry_count())
        {
            warn!(
                "SETUP_RETR reads back {}; is the radio connected?",
                retries.into_bits()
            );
            return Err(Nrf24Error::BinaryCorruption);
        }
        debug!("radio configured on channel {}", config.channel());
        Ok(())
    }
}
