//! A monotonic millisecond time source.
//!
//! `embedded-hal` only abstracts blocking delays, so the transmit poll loop
//! needs this additional collaborator to measure elapsed wall-clock time.

/// A monotonic clock counting milliseconds from an arbitrary epoch.
pub trait Clock {
    /// The current time in milliseconds. Must never decrease.
    fn now_ms(&mut self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&mut self) -> u64 {
        (**self).now_ms()
    }
}

/// A [`Clock`] backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&mut self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}
