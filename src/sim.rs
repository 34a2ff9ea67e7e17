//! Test doubles: a register-level model of the radio, a recording CE pin,
//! and a clock that advances a fixed step per query.
extern crate std;

use core::convert::Infallible;
use std::{vec, vec::Vec};

use embedded_hal::{
    digital::{ErrorType as PinErrorType, OutputPin},
    spi::{ErrorKind, ErrorType as SpiErrorType, Operation, SpiDevice},
};

use crate::{
    radio::{commands, mnemonics, Register},
    Clock,
};

/// A model of the radio that answers SPI frames from a register file.
///
/// STATUS is write-1-to-clear unless [`SimChip::echo()`] is used, in which
/// case every register simply stores what is written to it.
pub struct SimChip {
    regs: [[u8; 5]; 32],
    frames: Vec<Vec<u8>>,
    payloads: Vec<Vec<u8>>,
    rx_payload: Vec<u8>,
    tx_flushes: usize,
    rx_flushes: usize,
    polls: usize,
    polls_until_tx_ds: Option<usize>,
    polls_until_max_rt: Option<usize>,
    transactions: usize,
    fail_after: Option<usize>,
    echo: bool,
    disconnected: bool,
}

impl SimChip {
    /// A chip holding its power-on-reset register values.
    pub fn new() -> Self {
        let mut regs = [[0u8; 5]; 32];
        regs[Register::Config as usize][0] = 0x08;
        regs[Register::EnAa as usize][0] = 0x3F;
        regs[Register::EnRxAddr as usize][0] = 0x03;
        regs[Register::SetupAw as usize][0] = 0x03;
        regs[Register::SetupRetr as usize][0] = 0x03;
        regs[Register::RfCh as usize][0] = 0x02;
        regs[Register::RfSetup as usize][0] = 0x0F;
        regs[Register::Status as usize][0] = 0x0E;
        regs[Register::RxAddrP0 as usize] = [0xE7; 5];
        regs[Register::RxAddrP1 as usize] = [0xC2; 5];
        for (i, reg) in [
            Register::RxAddrP2,
            Register::RxAddrP3,
            Register::RxAddrP4,
            Register::RxAddrP5,
        ]
        .into_iter()
        .enumerate()
        {
            regs[reg as usize][0] = 0xC3 + i as u8;
        }
        regs[Register::TxAddr as usize] = [0xE7; 5];
        regs[Register::FifoStatus as usize][0] = 0x11;
        Self {
            regs,
            frames: Vec::new(),
            payloads: Vec::new(),
            rx_payload: Vec::new(),
            tx_flushes: 0,
            rx_flushes: 0,
            polls: 0,
            polls_until_tx_ds: None,
            polls_until_max_rt: None,
            transactions: 0,
            fail_after: None,
            echo: false,
            disconnected: false,
        }
    }

    /// Store every write verbatim, including writes to STATUS.
    pub fn echo(self) -> Self {
        Self { echo: true, ..self }
    }

    /// Behave like a floating MISO line: every byte read back is `0xFF`.
    pub fn disconnected(self) -> Self {
        Self {
            disconnected: true,
            ..self
        }
    }

    /// Assert TX_DS on the `n`th read of OBSERVE_TX.
    pub fn tx_ds_after(self, n: usize) -> Self {
        Self {
            polls_until_tx_ds: Some(n),
            ..self
        }
    }

    /// Assert MAX_RT on the `n`th read of OBSERVE_TX.
    pub fn max_rt_after(self, n: usize) -> Self {
        Self {
            polls_until_max_rt: Some(n),
            ..self
        }
    }

    /// Complete the first `n` SPI transactions, then fail every one after that.
    ///
    /// A failed transaction leaves the register file untouched.
    pub fn fail_after(self, n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..self
        }
    }

    pub fn with_rx_payload(self, payload: &[u8]) -> Self {
        Self {
            rx_payload: payload.to_vec(),
            ..self
        }
    }

    /// The bytes currently held by `reg`.
    pub fn register(&self, reg: Register) -> &[u8] {
        &self.regs[reg as usize][..reg.width() as usize]
    }

    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.regs[reg as usize][0] = value;
    }

    /// Every frame sent to the chip (as sent on MOSI).
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// Every payload written to the TX FIFO.
    pub fn payloads(&self) -> &[Vec<u8>] {
        &self.payloads
    }

    pub fn tx_flushes(&self) -> usize {
        self.tx_flushes
    }

    pub fn rx_flushes(&self) -> usize {
        self.rx_flushes
    }

    /// How many times OBSERVE_TX was read.
    pub fn polls(&self) -> usize {
        self.polls
    }

    fn status(&self) -> u8 {
        self.regs[Register::Status as usize][0]
    }

    fn on_poll(&mut self) {
        self.polls += 1;
        let status = Register::Status as usize;
        if self.polls_until_tx_ds == Some(self.polls) {
            self.regs[status][0] |= mnemonics::MASK_TX_DS;
        }
        if self.polls_until_max_rt == Some(self.polls) {
            self.regs[status][0] |= mnemonics::MASK_MAX_RT;
            let arc = self.regs[Register::SetupRetr as usize][0] & 0xF;
            let observe = &mut self.regs[Register::ObserveTx as usize][0];
            *observe = (*observe & 0xF0) | arc;
        }
    }

    fn exchange(&mut self, buf: &mut [u8]) {
        self.frames.push(buf.to_vec());
        if buf.is_empty() {
            return;
        }
        let command = buf[0];
        let address = (command & commands::ADDRESS_MASK) as usize;
        if command & 0xE0 == commands::R_REGISTER {
            if address == Register::ObserveTx as usize {
                self.on_poll();
            }
            buf[0] = self.status();
            for (i, byte) in buf[1..].iter_mut().enumerate() {
                *byte = self.regs[address].get(i).copied().unwrap_or(0);
            }
        } else if command & 0xE0 == commands::W_REGISTER {
            buf[0] = self.status();
            if address == Register::Status as usize && !self.echo {
                let cleared = buf.get(1).copied().unwrap_or(0) & 0x70;
                self.regs[address][0] &= !cleared;
            } else {
                for (i, byte) in buf[1..].iter().take(5).enumerate() {
                    self.regs[address][i] = *byte;
                }
            }
        } else {
            buf[0] = self.status();
            match command {
                commands::W_TX_PAYLOAD => self.payloads.push(buf[1..].to_vec()),
                commands::R_RX_PAYLOAD => {
                    for (i, byte) in buf[1..].iter_mut().enumerate() {
                        *byte = self.rx_payload.get(i).copied().unwrap_or(0);
                    }
                }
                commands::FLUSH_TX => self.tx_flushes += 1,
                commands::FLUSH_RX => self.rx_flushes += 1,
                _ => (),
            }
        }
        if self.disconnected {
            buf.fill(0xFF);
        }
    }
}

impl SpiErrorType for SimChip {
    type Error = ErrorKind;
}

impl SpiDevice for SimChip {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
        if self.fail_after.is_some_and(|n| self.transactions >= n) {
            return Err(ErrorKind::Other);
        }
        self.transactions += 1;
        for op in operations {
            match op {
                Operation::TransferInPlace(buf) => self.exchange(buf),
                Operation::Write(buf) => {
                    let mut copy = buf.to_vec();
                    self.exchange(&mut copy);
                }
                Operation::Transfer(read, write) => {
                    let mut copy = write.to_vec();
                    self.exchange(&mut copy);
                    let len = read.len().min(copy.len());
                    read[..len].copy_from_slice(&copy[..len]);
                }
                Operation::Read(buf) => {
                    let mut copy = vec![commands::NOP; buf.len()];
                    self.exchange(&mut copy);
                    buf.copy_from_slice(&copy);
                }
                Operation::DelayNs(_) => (),
            }
        }
        Ok(())
    }
}

/// An [`OutputPin`] that records every level it is driven to.
#[derive(Default)]
pub struct SimPin {
    levels: Vec<bool>,
}

impl SimPin {
    pub fn levels(&self) -> &[bool] {
        &self.levels
    }
}

impl PinErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.levels.push(true);
        Ok(())
    }
}

/// A [`Clock`] that starts at 0 and advances by `step` milliseconds every time it is read.
#[derive(Debug, Clone, Copy)]
pub struct StepClock {
    now: u64,
    step: u64,
}

impl StepClock {
    pub fn new(step: u64) -> Self {
        Self { now: 0, step }
    }
}

impl Clock for StepClock {
    fn now_ms(&mut self) -> u64 {
        let now = self.now;
        self.now += self.step;
        now
    }
}
