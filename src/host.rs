//! Trait definitions for accessing the current moment from the host
//! environment.
//!
//! Every operation that compares against "now" reads it through a
//! [`HostClock`], so callers can supply a fixed moment in tests.
//!
//! ```rust
//! use date_extensions::{host::HostClock, time::EpochNanoseconds, DateResult, Instant};
//!
//! struct OneDayIn;
//!
//! impl HostClock for OneDayIn {
//!     fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
//!         Instant::from_epoch_seconds(86_400).map(|i| i.epoch_nanoseconds())
//!     }
//! }
//!
//! assert_eq!(OneDayIn.get_host_instant().unwrap().epoch_seconds(), 86_400);
//! ```

use crate::{time::EpochNanoseconds, DateResult, Instant};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds>;

    /// Returns the current moment as an [`Instant`].
    fn get_host_instant(&self) -> DateResult<Instant> {
        self.get_host_epoch_nanoseconds().map(Instant::from)
    }
}

impl<C: HostClock + ?Sized> HostClock for &C {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        (**self).get_host_epoch_nanoseconds()
    }
}

// Implement the empty clock, which is always at the epoch.

impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        Ok(EpochNanoseconds::from_seconds(0))
    }
}

/// A clock that always reports the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Instant);

impl FixedClock {
    pub const fn new(instant: Instant) -> Self {
        Self(instant)
    }
}

impl HostClock for FixedClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        Ok(self.0.epoch_nanoseconds())
    }
}
