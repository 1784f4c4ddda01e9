//! The `Now` component, for every operation that compares against the
//! current moment.

use crate::{
    builtins::core::{Calendar, Instant},
    error::ErrorMessage,
    host::HostClock,
    iso::IsoDate,
    options::RelativeOffset,
    DateError, DateResult,
};

#[cfg(feature = "compiled_data")]
use alloc::string::String;

/// The current moment, read from a [`HostClock`] through a [`Calendar`].
///
/// Predicates on `Now` never fail: when the clock cannot be read or the
/// reference moment cannot be computed, they return `false`.
///
/// ```rust
/// use date_extensions::{host::FixedClock, options::RelativeOffset, Calendar, Now};
///
/// let calendar = Calendar::default();
/// let today = calendar.make_date(8, 8, 2025);
/// let now = Now::new(FixedClock::new(today), calendar.clone());
///
/// let last_week = now.ago(RelativeOffset::weeks(1)).unwrap();
/// assert_eq!(calendar.encode_key(&last_week), "2025.08.01");
/// assert!(now.is_last_week(&last_week));
/// ```
#[derive(Debug, Clone)]
pub struct Now<C: HostClock> {
    clock: C,
    calendar: Calendar,
}

impl<C: HostClock> Now<C> {
    pub fn new(clock: C, calendar: Calendar) -> Self {
        Self { clock, calendar }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the current moment.
    pub fn instant(&self) -> DateResult<Instant> {
        self.clock.get_host_instant()
    }

    /// Returns the start of the current local day.
    pub fn today(&self) -> DateResult<Instant> {
        let now = self.instant()?;
        Ok(self.calendar.start_of_day(&now))
    }
}

// ==== Predicates ====

impl<C: HostClock> Now<C> {
    pub fn is_in_past(&self, instant: &Instant) -> bool {
        self.fail_safe_now().is_some_and(|now| *instant < now)
    }

    pub fn is_in_future(&self, instant: &Instant) -> bool {
        self.fail_safe_now().is_some_and(|now| *instant > now)
    }

    pub fn is_today(&self, instant: &Instant) -> bool {
        self.is_days_from_today(instant, 0)
    }

    pub fn is_tomorrow(&self, instant: &Instant) -> bool {
        self.is_days_from_today(instant, 1)
    }

    pub fn is_yesterday(&self, instant: &Instant) -> bool {
        self.is_days_from_today(instant, -1)
    }

    pub fn is_this_week(&self, instant: &Instant) -> bool {
        self.fail_safe_now()
            .is_some_and(|now| self.calendar.is_same_week(instant, &now))
    }

    pub fn is_last_week(&self, instant: &Instant) -> bool {
        self.fail_safe_now()
            .is_some_and(|now| self.calendar.is_previous_week(instant, &now))
    }

    pub fn is_this_month(&self, instant: &Instant) -> bool {
        self.fail_safe_now()
            .is_some_and(|now| self.calendar.is_same_month(instant, &now))
    }

    pub fn is_last_month(&self, instant: &Instant) -> bool {
        self.fail_safe_now()
            .is_some_and(|now| self.calendar.is_previous_month(instant, &now))
    }
}

// ==== Relative arithmetic ====

impl<C: HostClock> Now<C> {
    /// Returns the start of the day `offset` before today.
    ///
    /// Years and months move by calendar units first, clamping the day to
    /// the target month, then `days + 7 * weeks` moves by whole days.
    pub fn ago(&self, offset: RelativeOffset) -> DateResult<Instant> {
        let offset = offset
            .checked_negate()
            .ok_or(DateError::range().with_enum(ErrorMessage::ArithmeticOverflow))?;
        self.from_now(offset)
    }

    /// Returns the start of the day `offset` after today.
    pub fn from_now(&self, offset: RelativeOffset) -> DateResult<Instant> {
        let today = self.calendar.to_iso_date(&self.instant()?);
        let days = offset
            .day_delta()
            .ok_or(DateError::range().with_enum(ErrorMessage::ArithmeticOverflow))?;
        let date = today
            .add_years_months(offset.years, offset.months)?
            .add_days(days)?;
        self.calendar.try_start_of(date)
    }

    /// Returns a phrase describing `instant` relative to now, such as
    /// "3 days ago" or "in 2 weeks", in the calendar's locale.
    ///
    /// Enable with the `compiled_data` feature flag.
    #[cfg(feature = "compiled_data")]
    pub fn relative_description(&self, instant: &Instant) -> DateResult<String> {
        use crate::{builtins::core::format::format_relative, options::RelativeUnit, DateUnwrap};

        let now = self.instant()?;
        let seconds = now.seconds_until(instant);
        let days = self.calendar.day_difference(&now, instant).date_unwrap()?;
        let months = whole_months_between(
            &self.calendar.to_iso_date(&now),
            &self.calendar.to_iso_date(instant),
        );

        let (unit, value) = RelativeUnit::select(seconds, days, months);
        format_relative(self.calendar.locale(), unit, value)
    }
}

// ==== Private API ====

impl<C: HostClock> Now<C> {
    fn fail_safe_now(&self) -> Option<Instant> {
        match self.instant() {
            Ok(now) => Some(now),
            Err(_e) => {
                #[cfg(feature = "log")]
                log::debug!("host clock unavailable: {_e}");
                None
            }
        }
    }

    fn is_days_from_today(&self, instant: &Instant, days: i64) -> bool {
        self.fail_safe_now()
            .and_then(|now| self.calendar.day_difference(&now, instant))
            .is_some_and(|diff| diff == days)
    }
}

/// Returns the signed count of whole calendar months from `from` to `to`.
#[cfg_attr(not(feature = "compiled_data"), allow(dead_code))]
fn whole_months_between(from: &IsoDate, to: &IsoDate) -> i64 {
    let months = (i64::from(to.year) - i64::from(from.year)) * 12 + i64::from(to.month)
        - i64::from(from.month);
    if months > 0 && to.day < from.day {
        months - 1
    } else if months < 0 && to.day > from.day {
        months + 1
    } else {
        months
    }
}
