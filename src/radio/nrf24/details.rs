use super::{commands, Nrf24, Nrf24Error, Register};
use crate::{radio::prelude::EsbDetails, Clock};
use core::fmt::Write;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

#[cfg(any(feature = "defmt", feature = "std"))]
use crate::radio::prelude::{
    EsbAutoRetries, EsbChannel, EsbCrcLength, EsbDataRate, EsbPaLevel, EsbPayloadLength, EsbPipe,
    EsbPower, EsbRadio,
};

impl<SPI, DO, DELAY, CLK> Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    /// Read all bytes of `reg`, most significant byte first.
    ///
    /// Returns the bytes and how many of them are valid.
    fn register_bytes(
        &mut self,
        reg: Register,
    ) -> Result<([u8; 5], usize), Nrf24Error<SPI::Error, DO::Error>> {
        let width = reg.width() as usize;
        self.spi_read(width, commands::r_register(reg.address()))?;
        let mut bytes = [0u8; 5];
        bytes[..width].copy_from_slice(&self._buf[1..=width]);
        bytes[..width].reverse();
        Ok((bytes, width))
    }
}

impl<SPI, DO, DELAY, CLK> EsbDetails for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Each line looks like `RF_SETUP     0x06 = 0x0F`.
    /// Multi-byte registers are printed as one hexadecimal number.
    fn dump_registers<W: Write>(&mut self, out: &mut W) -> Result<(), Self::DetailsErrorType> {
        for reg in Register::ALL {
            let (bytes, width) = self.register_bytes(reg)?;
            write!(out, "{:<12} 0x{:02X} = 0x", reg.name(), reg.address())
                .map_err(|_| Nrf24Error::Fmt)?;
            for byte in &bytes[..width] {
                write!(out, "{:02X}", byte).map_err(|_| Nrf24Error::Fmt)?;
            }
            writeln!(out).map_err(|_| Nrf24Error::Fmt)?;
        }
        Ok(())
    }

    #[cfg(all(feature = "defmt", not(feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", self.get_data_rate()?);
        defmt::println!("RF Power Amplifier________{}", self.get_pa_level()?);
        defmt::println!("CRC Length________________{}", self.get_crc_length()?);
        defmt::println!(
            "Address length____________{=u8} bytes",
            self.get_address_length()?
        );
        defmt::println!(
            "TX Payload lengths________{=u8} bytes",
            self.get_payload_length()
        );
        let (delay, count) = self.get_auto_retries()?;
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            delay as u16 * 250 + 250
        );
        defmt::println!("Auto retry attempts_______{=u8} maximum", count);
        defmt::println!(
            "Retry attempts made\n    for last transmission_{=u8}",
            self.get_last_arc()?
        );
        defmt::println!("Powered Up________________{=bool}", self.is_powered());

        for reg in Register::ALL {
            let (bytes, width) = self.register_bytes(reg)?;
            defmt::println!(
                "{=str} {=u8:#04X} = {=[u8]:02X}",
                reg.name(),
                reg.address(),
                &bytes[..width]
            );
        }
        Ok(())
    }

    #[cfg(not(any(feature = "defmt", feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", self.get_data_rate()?);
        std::println!("RF Power Amplifier________{}", self.get_pa_level()?);
        std::println!("CRC Length________________{}", self.get_crc_length()?);
        std::println!(
            "Address length____________{} bytes",
            self.get_address_length()?
        );
        std::println!(
            "TX Payload lengths________{} bytes",
            self.get_payload_length()
        );
        let (delay, count) = self.get_auto_retries()?;
        std::println!(
            "Auto retry delay__________{} microseconds",
            delay as u16 * 250 + 250
        );
        std::println!("Auto retry attempts_______{count} maximum");
        std::println!(
            "Retry attempts made\n    for last transmission_{}",
            self.get_last_arc()?
        );
        std::println!("Powered Up________________{}", self.is_powered());

        let mut dump = std::string::String::new();
        self.dump_registers(&mut dump)?;
        std::print!("{dump}");
        Ok(())
    }
}
