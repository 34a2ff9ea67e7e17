use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{commands, Register};
use crate::radio::{prelude::EsbStatus, Nrf24, Nrf24Error};
use crate::{Clock, StatusFlags};

impl<SPI, DO, DELAY, CLK> EsbStatus for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_status_flags(&self) -> StatusFlags {
        self._status
    }

    /// STATUS flags are write-1-to-clear, so `flags` is written as is
    /// (without reading the register first).
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_reg(Register::Status, flags.into_bits() & StatusFlags::IRQ_MASK)
    }

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::prelude::EsbStatus;
    use crate::radio::{commands, mnemonics, Register};
    use crate::{spi_test_expects, test::mk_radio, StatusFlags};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn clear_status_flags() {
        let spi_expectations = spi_test_expects![
            (
                vec![
                    Register::Status as u8 | commands::W_REGISTER,
                    mnemonics::MASK_RX_DR | mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
                ],
                vec![0x7Eu8, 0u8],
            ),
            (
                vec![
                    Register::Status as u8 | commands::W_REGISTER,
                    mnemonics::MASK_TX_DS,
                ],
                vec![0x0Eu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.clear_status_flags(StatusFlags::new()).unwrap();
        // the returned status byte is cached
        assert!(radio.get_status_flags().tx_ds());
        // non-IRQ bits are never written
        radio
            .clear_status_flags(StatusFlags::from_bits(0x0F).with_tx_ds(true))
            .unwrap();
        assert!(!radio.get_status_flags().tx_ds());
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn update() {
        let spi_expectations = spi_test_expects![(vec![commands::NOP], vec![0x4Eu8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.update().unwrap();
        let flags = radio.get_status_flags();
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(!flags.max_rt());
        assert_eq!(flags.rx_pipe(), 7);
        spi.done();
        ce_pin.done();
    }
}
