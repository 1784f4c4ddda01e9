//! This module implements the local component records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` holds a proleptic Gregorian year, month, and day.
//!
//! An `IsoTime` holds the hour, minute, second, and nanosecond of a
//! wall-clock time.
//!
//! An `IsoDateTime` combines both, and is how an `Instant` is viewed through
//! a calendar's UTC offset.

use crate::{
    error::ErrorMessage, time::EpochNanoseconds, utils, DateError, DateResult, NS_PER_DAY,
};

/// The smallest year with representable days.
pub const MIN_YEAR: i32 = -271_821;
/// The largest year with representable days.
pub const MAX_YEAR: i32 = 275_760;

const NS_PER_SECOND: i64 = 1_000_000_000;
const NS_PER_MINUTE: i64 = 60 * NS_PER_SECOND;
const NS_PER_HOUR: i64 = 60 * NS_PER_MINUTE;

// ==== `IsoDateTime` section ====

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` components.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Splits local epoch nanoseconds into date and time components.
    pub(crate) fn from_local_nanos(local_nanos: i128) -> Self {
        let ns_per_day = i128::from(NS_PER_DAY);
        let epoch_days = local_nanos.div_euclid(ns_per_day);
        let remainder = local_nanos.rem_euclid(ns_per_day) as i64;

        // Local nanos derive from a valid instant, so epoch days fit in an i64.
        let date = IsoDate::from_epoch_days(epoch_days as i64);
        Self::new_unchecked(date, IsoTime::from_nanos_of_day(remainder))
    }

    /// Returns the local nanoseconds since the epoch for this record.
    pub(crate) fn as_local_nanos(&self) -> i128 {
        i128::from(self.date.to_epoch_days()) * i128::from(NS_PER_DAY)
            + i128::from(self.time.to_nanos_of_day())
    }

    /// Returns the epoch nanoseconds for this record when it is read with
    /// the given offset.
    pub(crate) fn to_epoch_nanoseconds(&self, offset_seconds: i32) -> DateResult<EpochNanoseconds> {
        let nanos =
            self.as_local_nanos() - i128::from(offset_seconds) * i128::from(NS_PER_SECOND);
        EpochNanoseconds::try_from(nanos)
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` serves as a record for a Gregorian year, month, and day.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a validated `IsoDate`.
    pub fn try_new(year: i32, month: u8, day: u8) -> DateResult<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > utils::days_in_month(year, month) {
            return Err(DateError::range().with_message("not a valid ISO date."));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates an `IsoDate`, constraining every field into validity.
    ///
    /// The year is saturated to the representable range, the month is
    /// clamped to 1..=12, and the day is clamped to the days of that month.
    pub fn new_constrained(year: i32, month: i32, day: i32) -> Self {
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        // NOTE: Values are clamped in a u8 range.
        let month = month.clamp(1, 12) as u8;
        let day = constrain_iso_day(year, month, day);
        Self::new_unchecked(year, month, day)
    }

    /// Create a balanced `IsoDate` from days since 1970-01-01.
    #[inline]
    pub(crate) const fn from_epoch_days(epoch_days: i64) -> Self {
        let (year, month, day) = utils::gregorian_ymd_from_epoch_days(epoch_days);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the days since 1970-01-01 for this date.
    #[inline]
    pub(crate) const fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_gregorian_date(self.year, self.month, self.day)
    }

    /// Returns the ISO weekday number, Monday being 1 and Sunday 7.
    #[inline]
    pub(crate) const fn iso_weekday(self) -> u8 {
        utils::iso_weekday_from_epoch_days(self.to_epoch_days())
    }

    /// Returns the first day of this date's month.
    #[inline]
    pub(crate) const fn first_of_month(self) -> Self {
        Self::new_unchecked(self.year, self.month, 1)
    }

    /// Adds whole days to this date.
    pub(crate) fn add_days(self, days: i64) -> DateResult<Self> {
        let epoch_days = self
            .to_epoch_days()
            .checked_add(days)
            .ok_or(DateError::range().with_enum(ErrorMessage::ArithmeticOverflow))?;
        Self::check_epoch_days(epoch_days)?;
        Ok(Self::from_epoch_days(epoch_days))
    }

    /// Adds years and months as calendar units, constraining the day to the
    /// resulting month.
    pub(crate) fn add_years_months(self, years: i64, months: i64) -> DateResult<Self> {
        let overflow = || DateError::range().with_enum(ErrorMessage::ArithmeticOverflow);
        let total_months = i64::from(self.year)
            .checked_mul(12)
            .and_then(|m| m.checked_add(i64::from(self.month) - 1))
            .and_then(|m| m.checked_add(years.checked_mul(12)?))
            .and_then(|m| m.checked_add(months))
            .ok_or_else(overflow)?;

        let year = total_months.div_euclid(12);
        let month = total_months.rem_euclid(12) + 1;
        let Ok(year) = i32::try_from(year) else {
            return Err(DateError::range().with_enum(ErrorMessage::DateOutOfRange));
        };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        crate::date_assert!(
            (1..=12).contains(&month),
            "month {month} out of range after adding {months} months"
        );
        let month = month as u8;
        let day = constrain_iso_day(year, month, i32::from(self.day));
        Ok(Self::new_unchecked(year, month, day))
    }

    fn check_epoch_days(epoch_days: i64) -> DateResult<()> {
        // One extra day on each side keeps local dates of edge instants valid.
        if epoch_days.abs() > 100_000_001 {
            return Err(DateError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn constrain_iso_day(year: i32, month: u8, day: i32) -> u8 {
    let days_in_month = utils::days_in_month(year, month);
    day.clamp(1, i32::from(days_in_month)) as u8
}

// ==== `IsoTime` section ====

/// An `IsoTime` record that contains wall-clock time components.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl IsoTime {
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Creates a validated `IsoTime`.
    pub fn try_new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> DateResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond > 999_999_999 {
            return Err(DateError::range().with_message("not a valid time."));
        }
        Ok(Self::new_unchecked(hour, minute, second, nanosecond))
    }

    /// Midnight.
    pub(crate) const fn start_of_day() -> Self {
        Self::new_unchecked(0, 0, 0, 0)
    }

    /// 23:59:59 with no fractional second.
    pub(crate) const fn end_of_day() -> Self {
        Self::new_unchecked(23, 59, 59, 0)
    }

    /// Creates an `IsoTime` from nanoseconds elapsed since midnight.
    ///
    /// `nanos` must be within a single day.
    pub(crate) const fn from_nanos_of_day(nanos: i64) -> Self {
        let hour = nanos / NS_PER_HOUR;
        let minute = (nanos % NS_PER_HOUR) / NS_PER_MINUTE;
        let second = (nanos % NS_PER_MINUTE) / NS_PER_SECOND;
        let nanosecond = nanos % NS_PER_SECOND;
        Self::new_unchecked(hour as u8, minute as u8, second as u8, nanosecond as u32)
    }

    /// Returns the nanoseconds elapsed since midnight.
    pub(crate) const fn to_nanos_of_day(self) -> i64 {
        self.hour as i64 * NS_PER_HOUR
            + self.minute as i64 * NS_PER_MINUTE
            + self.second as i64 * NS_PER_SECOND
            + self.nanosecond as i64
    }
}
