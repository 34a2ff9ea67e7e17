/// The registers of the nRF24L01.
///
/// Each register knows its 5-bit address and how many bytes it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    Config = 0x00,
    EnAa = 0x01,
    EnRxAddr = 0x02,
    SetupAw = 0x03,
    SetupRetr = 0x04,
    RfCh = 0x05,
    RfSetup = 0x06,
    Status = 0x07,
    ObserveTx = 0x08,
    Rpd = 0x09,
    RxAddrP0 = 0x0A,
    RxAddrP1 = 0x0B,
    RxAddrP2 = 0x0C,
    RxAddrP3 = 0x0D,
    RxAddrP4 = 0x0E,
    RxAddrP5 = 0x0F,
    TxAddr = 0x10,
    RxPwP0 = 0x11,
    RxPwP1 = 0x12,
    RxPwP2 = 0x13,
    RxPwP3 = 0x14,
    RxPwP4 = 0x15,
    RxPwP5 = 0x16,
    FifoStatus = 0x17,
    Dynpd = 0x1C,
    Feature = 0x1D,
}

impl Register {
    /// Every register, in address order.
    pub const ALL: [Register; 26] = [
        Register::Config,
        Register::EnAa,
        Register::EnRxAddr,
        Register::SetupAw,
        Register::SetupRetr,
        Register::RfCh,
        Register::RfSetup,
        Register::Status,
        Register::ObserveTx,
        Register::Rpd,
        Register::RxAddrP0,
        Register::RxAddrP1,
        Register::RxAddrP2,
        Register::RxAddrP3,
        Register::RxAddrP4,
        Register::RxAddrP5,
        Register::TxAddr,
        Register::RxPwP0,
        Register::RxPwP1,
        Register::RxPwP2,
        Register::RxPwP3,
        Register::RxPwP4,
        Register::RxPwP5,
        Register::FifoStatus,
        Register::Dynpd,
        Register::Feature,
    ];

    /// The register's address, already confined to the 5 bits an opcode can carry.
    pub const fn address(self) -> u8 {
        self as u8 & commands::ADDRESS_MASK
    }

    /// The number of bytes this register holds.
    pub const fn width(self) -> u8 {
        if self.is_address() {
            5
        } else {
            1
        }
    }

    /// Does this register hold a full multi-byte pipe address?
    pub const fn is_address(self) -> bool {
        matches!(
            self,
            Register::RxAddrP0 | Register::RxAddrP1 | Register::TxAddr
        )
    }

    /// The datasheet name of this register.
    pub const fn name(self) -> &'static str {
        match self {
            Register::Config => "CONFIG",
            Register::EnAa => "EN_AA",
            Register::EnRxAddr => "EN_RXADDR",
            Register::SetupAw => "SETUP_AW",
            Register::SetupRetr => "SETUP_RETR",
            Register::RfCh => "RF_CH",
            Register::RfSetup => "RF_SETUP",
            Register::Status => "STATUS",
            Register::ObserveTx => "OBSERVE_TX",
            Register::Rpd => "RPD",
            Register::RxAddrP0 => "RX_ADDR_P0",
            Register::RxAddrP1 => "RX_ADDR_P1",
            Register::RxAddrP2 => "RX_ADDR_P2",
            Register::RxAddrP3 => "RX_ADDR_P3",
            Register::RxAddrP4 => "RX_ADDR_P4",
            Register::RxAddrP5 => "RX_ADDR_P5",
            Register::TxAddr => "TX_ADDR",
            Register::RxPwP0 => "RX_PW_P0",
            Register::RxPwP1 => "RX_PW_P1",
            Register::RxPwP2 => "RX_PW_P2",
            Register::RxPwP3 => "RX_PW_P3",
            Register::RxPwP4 => "RX_PW_P4",
            Register::RxPwP5 => "RX_PW_P5",
            Register::FifoStatus => "FIFO_STATUS",
            Register::Dynpd => "DYNPD",
            Register::Feature => "FEATURE",
        }
    }

    /// The RX address register of the given `pipe` (if `pipe` is in range [0, 5]).
    pub const fn rx_address(pipe: u8) -> Option<Register> {
        match pipe {
            0 => Some(Register::RxAddrP0),
            1 => Some(Register::RxAddrP1),
            2 => Some(Register::RxAddrP2),
            3 => Some(Register::RxAddrP3),
            4 => Some(Register::RxAddrP4),
            5 => Some(Register::RxAddrP5),
            _ => None,
        }
    }

    /// The static payload width register of the given `pipe` (if `pipe` is in range [0, 5]).
    pub const fn rx_payload_width(pipe: u8) -> Option<Register> {
        match pipe {
            0 => Some(Register::RxPwP0),
            1 => Some(Register::RxPwP1),
            2 => Some(Register::RxPwP2),
            3 => Some(Register::RxPwP3),
            4 => Some(Register::RxPwP4),
            5 => Some(Register::RxPwP5),
            _ => None,
        }
    }
}

/// SPI commands (opcodes) for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;

    /// Register addresses occupy the low 5 bits of a register command.
    pub const ADDRESS_MASK: u8 = 0x1F;

    /// Build the opcode that reads the register at `address`.
    ///
    /// Out of range addresses are masked so they cannot alter the opcode bits.
    pub const fn r_register(address: u8) -> u8 {
        R_REGISTER | (address & ADDRESS_MASK)
    }

    /// Build the opcode that writes the register at `address`.
    ///
    /// Out of range addresses are masked so they cannot alter the opcode bits.
    pub const fn w_register(address: u8) -> u8 {
        W_REGISTER | (address & ADDRESS_MASK)
    }
}

/// Bit mnemonics shared by the STATUS and OBSERVE_TX registers.
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;
}
