use crate::{CrcLength, DataRate, PaLevel};

/// The highest channel the radio can tune to.
pub const MAX_CHANNEL: u8 = 127;

/// The largest payload (in bytes) the radio can hold.
pub const MAX_PAYLOAD_LENGTH: u8 = 32;

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use orf24::radio::RadioConfig;
///
/// let config = RadioConfig::default().with_channel(200);
/// // channels are clamped to the range [0, 127]
/// assert_eq!(config.channel(), 127);
/// ```
///
/// Every `with_*()` method clamps its input silently, so a [`RadioConfig`]
/// always describes a configuration the radio can actually hold.
///
/// The radio keeps its own copy of this object. That copy is updated by each setter in
/// [`crate::radio::prelude`] and can be inspected with
/// [`Nrf24::config()`](fn@crate::radio::Nrf24::config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioConfig {
    channel: u8,
    payload_length: u8,
    pa_level: PaLevel,
    data_rate: DataRate,
    crc_length: CrcLength,
    auto_retry_delay: u8,
    auto_retry_count: u8,
    address_length: u8,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::payload_length()`] | `32` |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit16`] |
    /// | [`RadioConfig::auto_retry_delay()`] | `5` |
    /// | [`RadioConfig::auto_retry_count()`] | `15` |
    /// | [`RadioConfig::address_length()`] | `5` |
    fn default() -> Self {
        Self {
            channel: 76,
            payload_length: MAX_PAYLOAD_LENGTH,
            pa_level: PaLevel::Max,
            data_rate: DataRate::Mbps1,
            crc_length: CrcLength::Bit16,
            auto_retry_delay: 5,
            auto_retry_count: 15,
            address_length: 5,
        }
    }
}

impl RadioConfig {
    /// The RF channel. The frequency is `2400 + channel` MHz.
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the RF channel, clamped to the range [0, 127].
    pub fn with_channel(self, channel: u8) -> Self {
        Self {
            channel: channel.min(MAX_CHANNEL),
            ..self
        }
    }

    /// The static payload length (in bytes).
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// Set the static payload length, clamped to the range [0, 32].
    pub fn with_payload_length(self, length: u8) -> Self {
        Self {
            payload_length: length.min(MAX_PAYLOAD_LENGTH),
            ..self
        }
    }

    /// The Power Amplifier level.
    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            pa_level: level,
            ..self
        }
    }

    /// The air data rate.
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// The CRC length used in transmitted packets.
    pub const fn crc_length(&self) -> CrcLength {
        self.crc_length
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self {
            crc_length: length,
            ..self
        }
    }

    /// The auto-retry delay. The radio waits `(delay + 1) * 250` microseconds
    /// between retransmissions.
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retry_delay
    }

    /// The maximum number of auto-retries.
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retry_count
    }

    /// Set the auto-retry `delay` and `count`, each clamped to the range [0, 15].
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retry_delay: delay.min(15),
            auto_retry_count: count.min(15),
            ..self
        }
    }

    /// The address length (in bytes) used by all pipes.
    pub const fn address_length(&self) -> u8 {
        self.address_length
    }

    /// Set the address length, clamped to the range [3, 5].
    pub fn with_address_length(self, length: u8) -> Self {
        Self {
            address_length: length.clamp(3, 5),
            ..self
        }
    }
}
