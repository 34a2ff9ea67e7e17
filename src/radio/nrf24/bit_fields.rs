use bitfield_struct::bitfield;

use super::Register;
use crate::{CrcLength, DataRate, PaLevel};

/// A typed view of a single-byte register.
///
/// Implementors are only ever written back through
/// [`Nrf24::modify_register()`](super::Nrf24), which reads the current value first.
/// This way a setter can only change the fields it touches.
pub(crate) trait RegisterValue: Copy {
    const REGISTER: Register;

    fn from_byte(value: u8) -> Self;

    fn into_byte(self) -> u8;
}

macro_rules! register_value {
    ($name:ident => $reg:expr) => {
        impl RegisterValue for $name {
            const REGISTER: Register = $reg;

            fn from_byte(value: u8) -> Self {
                Self::from_bits(value)
            }

            fn into_byte(self) -> u8 {
                self.into_bits()
            }
        }
    };
}

#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Hide the "RX Data Ready" event from the IRQ pin.
    pub mask_rx_dr: bool,

    /// Hide the "TX Data Sent" event from the IRQ pin.
    pub mask_tx_ds: bool,

    /// Hide the "Max Retransmits" event from the IRQ pin.
    pub mask_max_rt: bool,

    /// Enable CRC.
    #[bits(1, default = true)]
    pub en_crc: bool,

    /// CRC encoding scheme: `false` for 1 byte, `true` for 2 bytes.
    pub crco: bool,

    pub pwr_up: bool,

    pub prim_rx: bool,
}

impl Config {
    pub fn crc_length(&self) -> CrcLength {
        match (self.en_crc(), self.crco()) {
            (false, _) => CrcLength::Disabled,
            (true, false) => CrcLength::Bit8,
            (true, true) => CrcLength::Bit16,
        }
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        match length {
            CrcLength::Disabled => self.with_en_crc(false).with_crco(false),
            CrcLength::Bit8 => self.with_en_crc(true).with_crco(false),
            CrcLength::Bit16 => self.with_en_crc(true).with_crco(true),
        }
    }

    /// Power up as a primary transmitter.
    pub fn as_tx(self) -> Self {
        self.with_pwr_up(true).with_prim_rx(false)
    }
}

register_value!(Config => Register::Config);

#[bitfield(u8, order = Msb)]
pub(crate) struct EnRxAddr {
    #[bits(2)]
    _padding: u8,

    /// One bit per pipe; bit 0 is pipe 0.
    #[bits(6)]
    pub pipes: u8,
}

impl EnRxAddr {
    pub fn with_pipe(self, pipe: u8, enable: bool) -> Self {
        let mask = 1u8 << pipe;
        let pipes = if enable {
            self.pipes() | mask
        } else {
            self.pipes() & !mask
        };
        self.with_pipes(pipes)
    }
}

register_value!(EnRxAddr => Register::EnRxAddr);

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupAw {
    #[bits(6)]
    _padding: u8,

    /// `0b01` = 3 bytes, `0b10` = 4 bytes, `0b11` = 5 bytes.
    #[bits(2, default = 3)]
    pub aw: u8,
}

impl SetupAw {
    pub fn address_length(&self) -> u8 {
        // 0b00 is illegal; the chip treats it as the narrowest width
        self.aw().max(1) + 2
    }

    pub fn with_address_length(self, length: u8) -> Self {
        self.with_aw(length.clamp(3, 5) - 2)
    }
}

register_value!(SetupAw => Register::SetupAw);

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetr {
    /// The auto-retry delay; the actual delay is `(ard + 1) * 250` microseconds.
    #[bits(4, default = 5)]
    pub ard: u8,

    /// The maximum number of auto-retries.
    #[bits(4, default = 15)]
    pub arc: u8,
}

register_value!(SetupRetr => Register::SetupRetr);

#[bitfield(u8, order = Msb)]
pub(crate) struct RfCh {
    #[bits(1)]
    _padding: u8,

    #[bits(7, default = 2)]
    pub channel: u8,
}

register_value!(RfCh => Register::RfCh);

#[bitfield(u8, order = Msb)]
pub(crate) struct RfSetup {
    pub cont_wave: bool,

    #[bits(1)]
    _padding: u8,

    pub rf_dr_low: bool,

    pub pll_lock: bool,

    /// `false` for 1 Mbps, `true` for 2 Mbps.
    #[bits(1, default = true)]
    pub rf_dr_high: bool,

    #[bits(2, default = 3)]
    pub rf_pwr: u8,

    #[bits(1, default = true)]
    pub lna_hcurr: bool,
}

impl RfSetup {
    pub fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.rf_pwr())
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        self.with_rf_pwr(level.into_bits())
    }

    pub fn data_rate(&self) -> DataRate {
        if self.rf_dr_high() {
            DataRate::Mbps2
        } else {
            DataRate::Mbps1
        }
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        self.with_rf_dr_high(data_rate == DataRate::Mbps2)
    }
}

register_value!(RfSetup => Register::RfSetup);
