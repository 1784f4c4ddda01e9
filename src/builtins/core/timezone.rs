//! This module implements the fixed UTC offset a `Calendar` reads instants
//! through.

use crate::{error::ErrorMessage, DateError, DateResult};

const SECONDS_PER_DAY: i32 = 86_400;

/// A fixed offset from UTC, in seconds.
///
/// The offset is strictly inside ±24 hours.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// UTC itself.
    pub const UTC: Self = Self(0);

    /// Creates a `UtcOffset` from seconds east of UTC.
    pub fn from_seconds(seconds: i32) -> DateResult<Self> {
        if seconds.abs() >= SECONDS_PER_DAY {
            return Err(DateError::range().with_enum(ErrorMessage::OffsetOutOfRange));
        }
        Ok(Self(seconds))
    }

    /// Creates a `UtcOffset` from hours and minutes east of UTC.
    ///
    /// The sign of `hours` applies to `minutes`.
    pub fn from_hours_minutes(hours: i8, minutes: u8) -> DateResult<Self> {
        let magnitude = i32::from(hours).abs() * 3_600 + i32::from(minutes) * 60;
        Self::from_seconds(if hours < 0 { -magnitude } else { magnitude })
    }

    /// Returns the offset in seconds east of UTC.
    pub fn seconds(&self) -> i32 {
        self.0
    }

    pub(crate) fn nanoseconds(&self) -> i128 {
        i128::from(self.0) * 1_000_000_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_bounds() {
        assert!(UtcOffset::from_seconds(86_399).is_ok());
        assert!(UtcOffset::from_seconds(86_400).is_err());
        assert!(UtcOffset::from_seconds(-86_400).is_err());
    }

    #[test]
    fn hours_and_minutes_share_a_sign() {
        assert_eq!(UtcOffset::UTC.seconds(), 0);
        let west = UtcOffset::from_hours_minutes(-5, 30).unwrap();
        assert_eq!(west.seconds(), -19_800);
        assert_eq!(west.nanoseconds(), -19_800_000_000_000);
        let east = UtcOffset::from_hours_minutes(5, 45).unwrap();
        assert_eq!(east.seconds(), 20_700);
        assert!(UtcOffset::from_hours_minutes(24, 0).is_err());
    }
}
