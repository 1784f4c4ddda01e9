//! An implementation of an opaque point in time.

use crate::{error::ErrorMessage, time::EpochNanoseconds, DateError, DateResult};

const NANOSECONDS_PER_SECOND: i128 = 1_000_000_000;

/// An immutable point in time, stored as nanoseconds since the Unix epoch.
///
/// An `Instant` carries no calendar or offset; it is decomposed into
/// components through a [`Calendar`][crate::Calendar].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(EpochNanoseconds);

impl From<EpochNanoseconds> for Instant {
    fn from(value: EpochNanoseconds) -> Self {
        Self(value)
    }
}

// ==== Public API ====

impl Instant {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(EpochNanoseconds(0));

    /// Creates an `Instant` from nanoseconds since the epoch.
    pub fn try_new(epoch_nanoseconds: i128) -> DateResult<Self> {
        EpochNanoseconds::try_from(epoch_nanoseconds).map(Self)
    }

    /// Creates an `Instant` from seconds since the epoch.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> DateResult<Self> {
        Self::try_new(i128::from(epoch_seconds) * NANOSECONDS_PER_SECOND)
    }

    /// Returns the nanoseconds since the epoch.
    pub fn epoch_nanoseconds(&self) -> EpochNanoseconds {
        self.0
    }

    /// Returns the seconds since the epoch, rounded toward negative infinity.
    pub fn epoch_seconds(&self) -> i64 {
        self.as_i128().div_euclid(NANOSECONDS_PER_SECOND) as i64
    }

    /// Returns this `Instant` moved by a signed number of nanoseconds.
    pub fn checked_add_nanoseconds(&self, nanoseconds: i128) -> DateResult<Self> {
        let nanos = self
            .as_i128()
            .checked_add(nanoseconds)
            .ok_or(DateError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
        Self::try_new(nanos)
    }

    /// Returns this `Instant` moved by a signed number of seconds.
    pub fn checked_add_seconds(&self, seconds: i64) -> DateResult<Self> {
        self.checked_add_nanoseconds(i128::from(seconds) * NANOSECONDS_PER_SECOND)
    }
}

// ==== Private API ====

impl Instant {
    pub(crate) fn as_i128(&self) -> i128 {
        self.0 .0
    }

    /// Creates an `Instant`, clamping out of range values to the nearest
    /// representable instant.
    pub(crate) fn saturating(epoch_nanoseconds: i128) -> Self {
        Self(EpochNanoseconds::saturating(epoch_nanoseconds))
    }

    /// Returns the whole seconds elapsed from `self` to `other`.
    pub(crate) fn seconds_until(&self, other: &Self) -> i64 {
        // Both values are within ±8.64e21 nanoseconds, so the quotient fits.
        ((other.as_i128() - self.as_i128()) / NANOSECONDS_PER_SECOND) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_conversions() {
        let instant = Instant::try_new(-1_500_000_000).unwrap();
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_nanoseconds().as_i128(), -1_500_000_000);
        assert_eq!(Instant::from_epoch_seconds(-2).unwrap().epoch_seconds(), -2);
    }

    #[test]
    fn out_of_range_construction_fails() {
        assert!(Instant::try_new(crate::NS_MAX_INSTANT + 1).is_err());
        assert!(Instant::from_epoch_seconds(i64::MAX).is_err());
        assert!(Instant::try_new(crate::NS_MAX_INSTANT).is_ok());
    }

    #[test]
    fn checked_addition() {
        let instant = Instant::EPOCH.checked_add_seconds(90).unwrap();
        assert_eq!(instant.epoch_seconds(), 90);
        assert_eq!(Instant::EPOCH.seconds_until(&instant), 90);
        assert_eq!(instant.seconds_until(&Instant::EPOCH), -90);

        let max = Instant::try_new(crate::NS_MAX_INSTANT).unwrap();
        assert!(max.checked_add_nanoseconds(1).is_err());
        assert!(max.checked_add_nanoseconds(i128::MAX).is_err());
    }

    #[test]
    fn ordering() {
        let earlier = Instant::from_epoch_seconds(1).unwrap();
        let later = Instant::from_epoch_seconds(2).unwrap();
        assert!(earlier < later);
        assert_eq!(Instant::saturating(i128::MIN).as_i128(), crate::NS_MIN_INSTANT);
    }
}
