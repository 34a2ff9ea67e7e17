//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24;
pub use nrf24::{commands, mnemonics, Nrf24, Nrf24Error, Register};

mod config;
pub use config::{RadioConfig, MAX_CHANNEL, MAX_PAYLOAD_LENGTH};
