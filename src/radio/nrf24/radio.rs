use super::{bit_fields::Config, commands, power::POWER_SETTLE_US, Nrf24, Nrf24Error, Register};
use crate::{
    radio::prelude::{EsbPower, EsbRadio, EsbRegisters, EsbStatus},
    Clock, StatusFlags, TxOutcome,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// The minimum time (in microseconds) CE must be held HIGH to start a transmission.
const CE_PULSE_US: u32 = 15;

/// How long (in milliseconds) [`EsbRadio::write()`] waits for a transmission to settle.
pub const TX_TIMEOUT_MS: u64 = 500;

impl<SPI, DO, DELAY, CLK> EsbRadio for Nrf24<SPI, DO, DELAY, CLK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLK: Clock,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// See [`EsbRadio::write()`] for implementation-agnostic detail.
    ///
    /// The OBSERVE_TX register is polled until the STATUS byte reports
    /// TX_DS or MAX_RT, or until [`TX_TIMEOUT_MS`] have elapsed on the
    /// [`Clock`] given to [`Nrf24::new()`].
    /// The elapsed time is measured from the moment the CE pin is pulsed.
    ///
    /// A [`TxOutcome::RetriesExhausted`] or [`TxOutcome::Timeout`] outcome is not an error;
    /// only a failing SPI bus or CE pin is. Such a failure is returned as soon as it
    /// happens, and [`EsbRadio::last_outcome()`] reports `None` afterward.
    fn write(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType> {
        self._last_outcome = None;
        self._config_reg = self.modify_register::<Config>(|reg| reg.as_tx())?;
        self._delay_impl.delay_us(POWER_SETTLE_US);

        let buf_len = buf.len().min(32);
        // ensure payload_length setting is respected
        let payload_len = buf_len.max(self._config.payload_length() as usize);
        // to avoid copying the given buf, we'll have to use self._buf directly
        self._buf[0] = commands::W_TX_PAYLOAD;
        self._buf[1..=buf_len].copy_from_slice(&buf[..buf_len]);
        self._buf[buf_len + 1..=payload_len].fill(0);
        self.spi_transfer(payload_len + 1)?;

        let started = self._clock.now_ms();
        self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(CE_PULSE_US);
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        let mut observe_tx = [0u8];
        let outcome = loop {
            let status = self.read_registers(Register::ObserveTx.address(), &mut observe_tx)?;
            if status.tx_settled() {
                break if status.tx_ds() {
                    TxOutcome::Success
                } else {
                    TxOutcome::RetriesExhausted
                };
            }
            if self._clock.now_ms().saturating_sub(started) >= TX_TIMEOUT_MS {
                break TxOutcome::Timeout;
            }
        };

        self.clear_status_flags(StatusFlags::new())?;
        self.power_down()?;
        self.flush_tx()?;

        self._last_outcome = Some(outcome);
        if outcome == TxOutcome::Success {
            trace!("sent {} byte payload", payload_len);
        } else {
            warn!(
                "transmission failed ({}), OBSERVE_TX = {}",
                outcome, observe_tx[0]
            );
        }
        Ok(outcome == TxOutcome::Success)
    }

    fn last_outcome(&self) -> Option<TxOutcome> {
        self._last_outcome
    }

    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType> {
        Ok(self.read_reg(Register::ObserveTx)? & 0xF)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::TX_TIMEOUT_MS;
    use crate::radio::prelude::{EsbPayloadLength, EsbPower, EsbRadio};
    use crate::radio::{commands, mnemonics, Nrf24, Nrf24Error, Register};
    use crate::{
        sim::{SimChip, SimPin, StepClock},
        spi_test_expects,
        test::mk_radio,
        TxOutcome,
    };
    use embedded_hal::spi::ErrorKind;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    pub fn write() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            // power_down()
            PinTransaction::set(PinState::Low),
        ];
        let mut payload = vec![0u8; 9];
        payload[0] = commands::W_TX_PAYLOAD;
        payload[1..4].copy_from_slice(b"abc");
        let spi_expectations = spi_test_expects![
            // power up as TX
            (vec![Register::Config as u8, 0xFFu8], vec![0xEu8, 0xDu8]),
            (
                vec![Register::Config as u8 | commands::W_REGISTER, 0xEu8],
                vec![0xEu8, 0u8],
            ),
            // write the zero padded payload
            (payload, vec![0xEu8; 9]),
            // poll OBSERVE_TX
            (vec![Register::ObserveTx as u8, 0xFFu8], vec![0xEu8, 0u8]),
            (vec![Register::ObserveTx as u8, 0xFFu8], vec![0x2Eu8, 0u8]),
            // clear_status_flags()
            (
                vec![
                    Register::Status as u8 | commands::W_REGISTER,
                    mnemonics::MASK_RX_DR | mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
                ],
                vec![0x2Eu8, 0u8],
            ),
            // power_down()
            (vec![Register::Config as u8, 0xFFu8], vec![0xEu8, 0xEu8]),
            (
                vec![Register::Config as u8 | commands::W_REGISTER, 0xCu8],
                vec![0xEu8, 0u8],
            ),
            // flush_tx()
            (vec![commands::FLUSH_TX], vec![0xEu8]),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_payload_length(8);
        assert_eq!(radio.last_outcome(), None);
        assert!(radio.write(b"abc").unwrap());
        assert_eq!(radio.last_outcome(), Some(TxOutcome::Success));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_last_arc() {
        let spi_expectations = spi_test_expects![
            (vec![Register::ObserveTx as u8, 0xFFu8], vec![0xEu8, 0x35u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_last_arc(), Ok(5));
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn success_after_three_polls() {
        let mut chip = SimChip::new().tx_ds_after(3);
        let mut ce_pin = SimPin::default();
        let mut radio = Nrf24::new(&mut ce_pin, &mut chip, NoopDelay, StepClock::new(1));
        assert!(radio.write(b"Hello").unwrap());
        assert_eq!(radio.last_outcome(), Some(TxOutcome::Success));
        drop(radio);
        assert_eq!(chip.polls(), 3);
        assert_eq!(chip.register(Register::Status)[0] & 0x70, 0);
        // powered down with an empty TX FIFO
        assert_eq!(chip.register(Register::Config)[0] & 2, 0);
        assert_eq!(chip.tx_flushes(), 1);
        assert_eq!(chip.payloads().len(), 1);
        assert_eq!(chip.payloads()[0].len(), 32);
        assert_eq!(&chip.payloads()[0][..5], b"Hello");
        assert_eq!(ce_pin.levels(), &[true, false, false]);
    }

    #[test]
    fn retries_exhausted() {
        let mut chip = SimChip::new().max_rt_after(2);
        let mut ce_pin = SimPin::default();
        let mut radio = Nrf24::new(&mut ce_pin, &mut chip, NoopDelay, StepClock::new(1));
        assert!(!radio.write(b"Hello").unwrap());
        assert_eq!(radio.last_outcome(), Some(TxOutcome::RetriesExhausted));
        // the reset value of SETUP_RETR allows 3 retries
        assert_eq!(radio.get_last_arc().unwrap(), 3);
        drop(radio);
        // 2 polls during write() and 1 more from get_last_arc()
        assert_eq!(chip.polls(), 3);
        assert_eq!(chip.register(Register::Status)[0] & 0x70, 0);
        assert_eq!(chip.tx_flushes(), 1);
    }

    #[test]
    fn timeout_is_measured_in_time() {
        let mut chip = SimChip::new();
        let mut ce_pin = SimPin::default();
        let step = 100;
        let mut radio = Nrf24::new(&mut ce_pin, &mut chip, NoopDelay, StepClock::new(step));
        assert!(!radio.write(b"Hello").unwrap());
        assert_eq!(radio.last_outcome(), Some(TxOutcome::Timeout));
        drop(radio);
        assert_eq!(chip.polls() as u64, TX_TIMEOUT_MS / step);
        assert_eq!(chip.register(Register::Config)[0] & 2, 0);
        assert_eq!(chip.tx_flushes(), 1);
    }

    #[test]
    fn bus_failure_while_polling_is_returned() {
        // a full successful write takes 8 transactions,
        // then 3 more before the next write polls OBSERVE_TX
        let mut chip = SimChip::new().tx_ds_after(1).fail_after(11);
        let mut ce_pin = SimPin::default();
        let mut radio = Nrf24::new(&mut ce_pin, &mut chip, NoopDelay, StepClock::new(1));
        assert!(radio.write(b"ping").unwrap());
        assert_eq!(radio.last_outcome(), Some(TxOutcome::Success));

        assert_eq!(
            radio.write(b"pong"),
            Err(Nrf24Error::Spi(ErrorKind::Other))
        );
        // nothing from the previous write is reported
        assert_eq!(radio.last_outcome(), None);
        // the failure is not masked by the cleanup steps
        assert!(radio.is_powered());
        drop(radio);
        assert_eq!(chip.polls(), 1);
        assert_eq!(chip.payloads().len(), 2);
        assert_eq!(chip.tx_flushes(), 1);
        assert_eq!(chip.register(Register::Config)[0] & 2, 2);
    }

    #[test]
    fn oversized_payload_is_truncated() {
        let mut chip = SimChip::new().tx_ds_after(1);
        let mut ce_pin = SimPin::default();
        let mut radio = Nrf24::new(&mut ce_pin, &mut chip, NoopDelay, StepClock::new(1));
        radio.set_payload_length(4);
        assert!(radio.write(&[7u8; 40]).unwrap());
        drop(radio);
        assert_eq!(chip.payloads()[0], vec![7u8; 32]);
    }
}
