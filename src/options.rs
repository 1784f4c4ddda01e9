//! Options used by the calendar and relative-time operations.

use core::fmt;

// ==== RelativeOffset ====

/// A count of days, weeks, months, and years to move away from today.
///
/// Days and weeks are applied together as a single day delta of
/// `days + 7 * weeks`; months and years are applied as calendar units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeOffset {
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
    pub years: i64,
}

impl RelativeOffset {
    pub const fn new(days: i64, weeks: i64, months: i64, years: i64) -> Self {
        Self {
            days,
            weeks,
            months,
            years,
        }
    }

    pub const fn days(days: i64) -> Self {
        Self::new(days, 0, 0, 0)
    }

    pub const fn weeks(weeks: i64) -> Self {
        Self::new(0, weeks, 0, 0)
    }

    pub const fn months(months: i64) -> Self {
        Self::new(0, 0, months, 0)
    }

    pub const fn years(years: i64) -> Self {
        Self::new(0, 0, 0, years)
    }

    /// Returns the combined day delta, `days + 7 * weeks`.
    pub(crate) fn day_delta(&self) -> Option<i64> {
        self.weeks.checked_mul(7)?.checked_add(self.days)
    }

    /// Returns this offset with every field negated.
    pub(crate) fn checked_negate(&self) -> Option<Self> {
        Some(Self::new(
            self.days.checked_neg()?,
            self.weeks.checked_neg()?,
            self.months.checked_neg()?,
            self.years.checked_neg()?,
        ))
    }
}

// ==== NameLength ====

/// The width of a month or weekday name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameLength {
    /// The full name, e.g. "August" or "Friday".
    #[default]
    Full,
    /// The abbreviated name, e.g. "Aug" or "Fri".
    Short,
}

// ==== RelativeUnit ====

/// The unit a relative description is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelativeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RelativeUnit {
    /// Picks the largest unit with a magnitude of at least one for the
    /// difference between two moments.
    ///
    /// `seconds` is the signed elapsed time; `months` is the signed count of
    /// whole calendar months between the two local dates. Returns the unit
    /// and the signed count in that unit.
    pub(crate) fn select(seconds: i64, days: i64, months: i64) -> (Self, i64) {
        if months.abs() >= 12 {
            (Self::Year, months / 12)
        } else if months != 0 && days.abs() >= 28 {
            (Self::Month, months)
        } else if days.abs() >= 7 {
            (Self::Week, days / 7)
        } else if days != 0 && seconds.abs() >= 86_400 {
            (Self::Day, days)
        } else if seconds.abs() >= 3_600 {
            (Self::Hour, seconds / 3_600)
        } else if seconds.abs() >= 60 {
            (Self::Minute, seconds / 60)
        } else {
            (Self::Second, seconds)
        }
    }
}

impl fmt::Display for RelativeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_delta_combines_weeks() {
        assert_eq!(RelativeOffset::new(3, 2, 0, 0).day_delta(), Some(17));
        assert_eq!(RelativeOffset::weeks(i64::MAX).day_delta(), None);
    }

    #[test]
    fn negate_offset() {
        assert_eq!(
            RelativeOffset::new(1, -2, 3, 0).checked_negate(),
            Some(RelativeOffset::new(-1, 2, -3, 0))
        );
        assert_eq!(RelativeOffset::days(i64::MIN).checked_negate(), None);
    }

    #[test]
    fn unit_selection() {
        assert_eq!(RelativeUnit::select(-30, 0, 0), (RelativeUnit::Second, -30));
        assert_eq!(RelativeUnit::select(-125, 0, 0), (RelativeUnit::Minute, -2));
        assert_eq!(RelativeUnit::select(7_200, 0, 0), (RelativeUnit::Hour, 2));
        assert_eq!(RelativeUnit::select(7_200, 1, 0), (RelativeUnit::Hour, 2));
        assert_eq!(
            RelativeUnit::select(-3 * 86_400, -3, 0),
            (RelativeUnit::Day, -3)
        );
        assert_eq!(
            RelativeUnit::select(14 * 86_400, 14, 0),
            (RelativeUnit::Week, 2)
        );
        assert_eq!(
            RelativeUnit::select(-62 * 86_400, -62, -2),
            (RelativeUnit::Month, -2)
        );
        assert_eq!(
            RelativeUnit::select(800 * 86_400, 800, 26),
            (RelativeUnit::Year, 2)
        );
    }
}
