use crate::{error::ErrorMessage, DateError, DateResult};

/// Signed nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochNanoseconds(pub(crate) i128);

impl TryFrom<i128> for EpochNanoseconds {
    type Error = DateError;
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        let result = Self(value);
        result.check_validity()?;
        Ok(result)
    }
}

impl EpochNanoseconds {
    /// Creates `EpochNanoseconds` from whole seconds since the epoch.
    pub fn from_seconds(seconds: i64) -> Self {
        Self(i128::from(seconds) * 1_000_000_000)
    }

    pub fn as_i128(&self) -> i128 {
        self.0
    }

    pub(crate) fn check_validity(&self) -> DateResult<()> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(DateError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(())
    }

    /// Clamps the value into the valid instant range.
    pub(crate) fn saturating(nanos: i128) -> Self {
        Self(nanos.clamp(crate::NS_MIN_INSTANT, crate::NS_MAX_INSTANT))
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (crate::NS_MIN_INSTANT..=crate::NS_MAX_INSTANT).contains(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(EpochNanoseconds::try_from(crate::NS_MAX_INSTANT).is_ok());
        assert!(EpochNanoseconds::try_from(crate::NS_MIN_INSTANT).is_ok());
        assert!(EpochNanoseconds::try_from(crate::NS_MAX_INSTANT + 1).is_err());
        assert!(EpochNanoseconds::try_from(crate::NS_MIN_INSTANT - 1).is_err());
    }

    #[test]
    fn saturating_clamps() {
        assert_eq!(
            EpochNanoseconds::saturating(i128::MAX).as_i128(),
            crate::NS_MAX_INSTANT
        );
        assert_eq!(EpochNanoseconds::saturating(5).as_i128(), 5);
    }
}
