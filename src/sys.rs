use crate::builtins::{Calendar, Now};
use crate::error::ErrorMessage;
use crate::host::HostClock;
use crate::time::EpochNanoseconds;
use crate::{DateError, DateResult};

use web_time::{SystemTime, UNIX_EPOCH};

/// A host clock backed by [`std::time::SystemTime`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

impl Now<SystemClock> {
    /// Returns a `Now` reading the system clock through the given calendar.
    ///
    /// Enable with the `sys` feature flag.
    pub fn system(calendar: Calendar) -> Self {
        Now::new(SystemClock, calendar)
    }
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> DateResult<EpochNanoseconds> {
    let nanos = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i128::try_from(elapsed.as_nanos()).ok(),
        // The clock is set before the epoch.
        Err(e) => i128::try_from(e.duration().as_nanos()).ok().map(|n| -n),
    };
    let nanos = nanos.ok_or(DateError::general(
        ErrorMessage::SystemTimeUnavailable.to_str(),
    ))?;
    EpochNanoseconds::try_from(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        let now = SystemClock.get_host_instant().unwrap();
        // 2020-01-01T00:00:00Z
        assert!(now.epoch_seconds() > 1_577_836_800);
    }
}
