//! This module implements `Calendar`, the context every instant is read
//! through.
//!
//! A `Calendar` combines a locale, the locale's week rules, and a fixed UTC
//! offset. Component extraction, day/week/month boundaries, comparisons, and
//! date key encoding all live here; operations that depend on the current
//! moment live on [`Now`][crate::Now].

use alloc::string::String;

use icu_calendar::types::Weekday;
use icu_locale::Locale;
use writeable::Writeable;

use crate::{
    builtins::core::{
        week::{weekday_from_iso_number, WeekRules},
        Instant, UtcOffset,
    },
    iso::{IsoDate, IsoDateTime, IsoTime},
    parsers::{parse_date_key, FormattableDateKey},
    DateResult,
};

/// A half-open span of time, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    pub start: Instant,
    pub end: Instant,
}

impl DateInterval {
    /// Returns whether `instant` falls within the interval.
    pub fn contains(&self, instant: &Instant) -> bool {
        self.start <= *instant && *instant < self.end
    }
}

/// The calendar context: locale, week rules, and UTC offset.
///
/// ```rust
/// use date_extensions::Calendar;
///
/// let calendar = Calendar::default();
/// let date = calendar.make_date(31, 2, 2023);
/// assert_eq!(calendar.day(&date), 28);
/// assert_eq!(calendar.encode_key(&date), "2023.02.28");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    locale: Locale,
    week: WeekRules,
    offset: UtcOffset,
}

impl Default for Calendar {
    /// en-US week rules at UTC.
    fn default() -> Self {
        Self::new(icu_locale::locale!("en-US"), WeekRules::default(), UtcOffset::UTC)
    }
}

// ==== Construction ====

impl Calendar {
    pub fn new(locale: Locale, week: WeekRules, offset: UtcOffset) -> Self {
        Self {
            locale,
            week,
            offset,
        }
    }

    /// Creates a UTC `Calendar` with the week rules of `locale`.
    ///
    /// Enable with the `compiled_data` feature flag.
    #[cfg(feature = "compiled_data")]
    pub fn try_from_locale(locale: Locale) -> DateResult<Self> {
        let week = WeekRules::try_from_locale(&locale)?;
        Ok(Self::new(locale, week, UtcOffset::UTC))
    }

    #[must_use]
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_week_rules(mut self, week: WeekRules) -> Self {
        self.week = week;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn week_rules(&self) -> &WeekRules {
        &self.week
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

// ==== Component extraction ====

impl Calendar {
    /// Returns the local date and time of `instant`.
    pub fn to_iso_date_time(&self, instant: &Instant) -> IsoDateTime {
        IsoDateTime::from_local_nanos(instant.as_i128() + self.offset.nanoseconds())
    }

    /// Returns the local date of `instant`.
    #[inline]
    pub fn to_iso_date(&self, instant: &Instant) -> IsoDate {
        self.to_iso_date_time(instant).date
    }

    pub fn year(&self, instant: &Instant) -> i32 {
        self.to_iso_date(instant).year
    }

    pub fn month(&self, instant: &Instant) -> u8 {
        self.to_iso_date(instant).month
    }

    pub fn day(&self, instant: &Instant) -> u8 {
        self.to_iso_date(instant).day
    }

    pub fn hour(&self, instant: &Instant) -> u8 {
        self.to_iso_date_time(instant).time.hour
    }

    pub fn minute(&self, instant: &Instant) -> u8 {
        self.to_iso_date_time(instant).time.minute
    }

    pub fn second(&self, instant: &Instant) -> u8 {
        self.to_iso_date_time(instant).time.second
    }

    pub fn weekday(&self, instant: &Instant) -> Weekday {
        weekday_from_iso_number(self.to_iso_date(instant).iso_weekday())
    }
}

// ==== Day boundaries and comparisons ====

impl Calendar {
    /// Returns the instant at 00:00:00 of the same local day.
    ///
    /// Start of the first representable day saturates to the earliest
    /// representable instant.
    pub fn start_of_day(&self, instant: &Instant) -> Instant {
        self.saturating_start_of(self.to_iso_date(instant))
    }

    /// Returns the instant at 23:59:59 of the same local day, or `instant`
    /// itself when that moment is not representable.
    pub fn end_of_day(&self, instant: &Instant) -> Instant {
        let end = IsoDateTime::new_unchecked(self.to_iso_date(instant), IsoTime::end_of_day());
        self.instant_from_local(&end).unwrap_or(*instant)
    }

    pub fn is_same_day(&self, a: &Instant, b: &Instant) -> bool {
        self.to_iso_date(a) == self.to_iso_date(b)
    }

    /// Returns the signed number of local calendar days from `a` to `b`.
    pub fn day_difference(&self, a: &Instant, b: &Instant) -> Option<i64> {
        let from = self.to_iso_date(a).to_epoch_days();
        let to = self.to_iso_date(b).to_epoch_days();
        to.checked_sub(from)
    }

    /// Returns whether `a` and `b` are at most `days` local calendar days
    /// apart.
    pub fn is_within_days(&self, days: i64, a: &Instant, b: &Instant) -> bool {
        match self.day_difference(a, b) {
            Some(diff) => i128::from(diff).abs() <= i128::from(days),
            None => {
                #[cfg(feature = "log")]
                log::debug!("day difference unavailable; treating as unbounded");
                false
            }
        }
    }

    pub fn is_within_one_day(&self, a: &Instant, b: &Instant) -> bool {
        self.is_within_days(1, a, b)
    }

    pub fn is_within_seven_days(&self, a: &Instant, b: &Instant) -> bool {
        self.is_within_days(7, a, b)
    }

    pub fn is_within_thirty_days(&self, a: &Instant, b: &Instant) -> bool {
        self.is_within_days(30, a, b)
    }

    pub fn is_weekend(&self, instant: &Instant) -> bool {
        self.week.is_weekend(self.weekday(instant))
    }

    pub fn is_weekday(&self, instant: &Instant) -> bool {
        !self.is_weekend(instant)
    }
}

// ==== Week and month boundaries ====

impl Calendar {
    /// Returns the week containing `instant`, starting at midnight of the
    /// calendar's first weekday.
    pub fn week_interval(&self, instant: &Instant) -> Option<DateInterval> {
        let start = self.week_start_date(&self.to_iso_date(instant))?;
        let end = start.add_days(7).ok()?;
        self.interval_between(start, end)
    }

    /// Returns the month containing `instant`.
    pub fn month_interval(&self, instant: &Instant) -> Option<DateInterval> {
        let start = self.to_iso_date(instant).first_of_month();
        let end = start.add_years_months(0, 1).ok()?;
        self.interval_between(start, end)
    }

    pub fn is_same_week(&self, a: &Instant, b: &Instant) -> bool {
        let a_start = self.week_start_date(&self.to_iso_date(a));
        let b_start = self.week_start_date(&self.to_iso_date(b));
        a_start.is_some() && a_start == b_start
    }

    pub fn is_same_month(&self, a: &Instant, b: &Instant) -> bool {
        let a = self.to_iso_date(a);
        let b = self.to_iso_date(b);
        (a.year, a.month) == (b.year, b.month)
    }

    /// Returns whether `instant` falls in the week before the week of `of`.
    pub fn is_previous_week(&self, instant: &Instant, of: &Instant) -> bool {
        let previous = self
            .week_start_date(&self.to_iso_date(of))
            .and_then(|start| start.add_days(-7).ok());
        previous.is_some() && previous == self.week_start_date(&self.to_iso_date(instant))
    }

    /// Returns whether `instant` falls in the month before the month of `of`.
    pub fn is_previous_month(&self, instant: &Instant, of: &Instant) -> bool {
        let Ok(previous) = self.to_iso_date(of).add_years_months(0, -1) else {
            return false;
        };
        let date = self.to_iso_date(instant);
        (date.year, date.month) == (previous.year, previous.month)
    }

    pub fn is_first_day_of_week(&self, instant: &Instant) -> bool {
        self.week_interval(instant)
            .is_some_and(|week| self.is_same_day(instant, &week.start))
    }

    pub fn is_last_day_of_week(&self, instant: &Instant) -> bool {
        self.week_interval(instant)
            .is_some_and(|week| self.is_same_day(instant, &last_moment(&week)))
    }

    pub fn is_first_day_of_month(&self, instant: &Instant) -> bool {
        self.month_interval(instant)
            .is_some_and(|month| self.is_same_day(instant, &month.start))
    }

    pub fn is_last_day_of_month(&self, instant: &Instant) -> bool {
        self.month_interval(instant)
            .is_some_and(|month| self.is_same_day(instant, &last_moment(&month)))
    }
}

// ==== Construction and date keys ====

impl Calendar {
    /// Creates the instant at local midnight of `year`-`month`-`day`.
    ///
    /// Never fails: the month is clamped to 1..=12, the day to the days of
    /// that month, and the year to the representable range.
    pub fn make_date(&self, day: i32, month: i32, year: i32) -> Instant {
        self.saturating_start_of(IsoDate::new_constrained(year, month, day))
    }

    /// Returns the `YYYY.MM.DD` key of the local day of `instant`.
    pub fn date_key(&self, instant: &Instant) -> FormattableDateKey {
        let date = self.to_iso_date(instant);
        FormattableDateKey {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }

    /// Returns the `YYYY.MM.DD` key of the local day of `instant` as a
    /// `String`.
    pub fn encode_key(&self, instant: &Instant) -> String {
        self.date_key(instant).write_to_string().into_owned()
    }

    /// Parses a `year.month.day` key into the start of that local day.
    ///
    /// The key must have exactly three integer parts. Out of range months
    /// and days are clamped as in [`Calendar::make_date`].
    pub fn try_decode_key(&self, key: &str) -> DateResult<Instant> {
        let parsed = parse_date_key(key)?;
        Ok(self.make_date(parsed.day, parsed.month, parsed.year))
    }

    /// Parses a `year.month.day` key, returning `None` when it is malformed.
    pub fn decode_key(&self, key: &str) -> Option<Instant> {
        self.try_decode_key(key).ok()
    }
}

// ==== Private API ====

impl Calendar {
    pub(crate) fn instant_from_local(&self, local: &IsoDateTime) -> DateResult<Instant> {
        local
            .to_epoch_nanoseconds(self.offset.seconds())
            .map(Instant::from)
    }

    /// Returns local midnight of `date`, clamped into the instant range.
    pub(crate) fn saturating_start_of(&self, date: IsoDate) -> Instant {
        let local = IsoDateTime::new_unchecked(date, IsoTime::start_of_day());
        Instant::saturating(local.as_local_nanos() - self.offset.nanoseconds())
    }

    /// Returns local midnight of `date`, failing outside the instant range.
    pub(crate) fn try_start_of(&self, date: IsoDate) -> DateResult<Instant> {
        self.instant_from_local(&IsoDateTime::new_unchecked(date, IsoTime::start_of_day()))
    }

    /// Returns the first date of the week containing `date`.
    pub(crate) fn week_start_date(&self, date: &IsoDate) -> Option<IsoDate> {
        let weekday = weekday_from_iso_number(date.iso_weekday());
        let offset = self.week.days_since_week_start(weekday);
        date.add_days(-i64::from(offset)).ok()
    }

    fn interval_between(&self, start: IsoDate, end: IsoDate) -> Option<DateInterval> {
        match (self.try_start_of(start), self.try_start_of(end)) {
            (Ok(start), Ok(end)) => Some(DateInterval { start, end }),
            _ => {
                #[cfg(feature = "log")]
                log::debug!("interval from {start:?} to {end:?} is not representable");
                None
            }
        }
    }
}

/// The last representable moment of an interval, one nanosecond before its
/// exclusive end.
fn last_moment(interval: &DateInterval) -> Instant {
    interval
        .end
        .checked_add_nanoseconds(-1)
        .unwrap_or(interval.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> Calendar {
        Calendar::default()
    }

    fn at(calendar: &Calendar, year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Instant {
        let local = IsoDateTime::new_unchecked(
            IsoDate::try_new(year, month, day).unwrap(),
            IsoTime::try_new(hour, minute, 0, 0).unwrap(),
        );
        calendar.instant_from_local(&local).unwrap()
    }

    #[test]
    fn make_date_extracts_clamped_components() {
        let calendar = utc();
        let date = calendar.make_date(31, 2, 2023);
        assert_eq!(calendar.year(&date), 2023);
        assert_eq!(calendar.month(&date), 2);
        assert_eq!(calendar.day(&date), 28);
        assert_eq!(calendar.hour(&date), 0);
        assert_eq!(calendar.encode_key(&date), "2023.02.28");

        let leap = calendar.make_date(31, 2, 2000);
        assert_eq!(calendar.day(&leap), 29);
        let not_leap = calendar.make_date(29, 2, 1900);
        assert_eq!(calendar.day(&not_leap), 28);
        let leap = calendar.make_date(30, 2, 2024);
        assert_eq!(calendar.day(&leap), 29);

        let wild = calendar.make_date(-40, 99, 2024);
        assert_eq!(calendar.encode_key(&wild), "2024.12.01");
    }

    #[test]
    fn make_date_never_fails_at_extremes() {
        let calendar = utc();
        let max = calendar.make_date(i32::MAX, i32::MAX, i32::MAX);
        assert_eq!(max.as_i128(), crate::NS_MAX_INSTANT);
        let min = calendar.make_date(i32::MIN, i32::MIN, i32::MIN);
        assert_eq!(min.as_i128(), crate::NS_MIN_INSTANT);
    }

    #[test]
    fn components_follow_offset() {
        let tokyo = utc().with_offset(UtcOffset::from_hours_minutes(9, 0).unwrap());
        // 2025-08-08T20:30Z is 05:30 on August 9 in UTC+9.
        let instant = at(&utc(), 2025, 8, 8, 20, 30);
        assert_eq!(tokyo.day(&instant), 9);
        assert_eq!(tokyo.hour(&instant), 5);
        assert_eq!(tokyo.minute(&instant), 30);
        assert_eq!(tokyo.second(&instant), 0);
        assert_eq!(tokyo.weekday(&instant), Weekday::Saturday);
        assert_eq!(utc().weekday(&instant), Weekday::Friday);
    }

    #[test]
    fn start_and_end_of_day() {
        let calendar = utc().with_offset(UtcOffset::from_hours_minutes(-5, 0).unwrap());
        let instant = at(&calendar, 2025, 3, 9, 14, 5);
        let start = calendar.start_of_day(&instant);
        assert_eq!(start, at(&calendar, 2025, 3, 9, 0, 0));
        assert_eq!(calendar.start_of_day(&start), start);

        let end = calendar.end_of_day(&instant);
        assert_eq!(calendar.hour(&end), 23);
        assert_eq!(calendar.minute(&end), 59);
        assert_eq!(calendar.second(&end), 59);
        assert!(calendar.is_same_day(&end, &instant));
    }

    #[test]
    fn end_of_day_falls_back_to_self() {
        let calendar = utc();
        let max = Instant::try_new(crate::NS_MAX_INSTANT).unwrap();
        assert_eq!(calendar.end_of_day(&max), max);
    }

    #[test]
    fn start_of_day_is_idempotent_at_the_minimum() {
        let calendar = utc().with_offset(UtcOffset::from_hours_minutes(-3, 0).unwrap());
        let min = Instant::try_new(crate::NS_MIN_INSTANT).unwrap();
        let start = calendar.start_of_day(&min);
        assert_eq!(calendar.start_of_day(&start), start);
    }

    #[test]
    fn within_days_is_symmetric() {
        let calendar = utc();
        let a = at(&calendar, 2025, 8, 1, 23, 59);
        let b = at(&calendar, 2025, 8, 2, 0, 1);
        let c = at(&calendar, 2025, 8, 9, 12, 0);
        let d = at(&calendar, 2025, 8, 31, 12, 0);

        assert_eq!(calendar.day_difference(&a, &b), Some(1));
        assert_eq!(calendar.day_difference(&b, &a), Some(-1));
        for (x, y) in [(a, b), (a, c), (b, c), (a, d), (c, d)] {
            for n in [0, 1, 7, 8, 29, 30, 31] {
                assert_eq!(
                    calendar.is_within_days(n, &x, &y),
                    calendar.is_within_days(n, &y, &x)
                );
            }
            assert_eq!(
                calendar.is_within_one_day(&x, &y),
                calendar.is_within_days(1, &x, &y)
            );
            assert_eq!(
                calendar.is_within_seven_days(&x, &y),
                calendar.is_within_days(7, &x, &y)
            );
            assert_eq!(
                calendar.is_within_thirty_days(&x, &y),
                calendar.is_within_days(30, &x, &y)
            );
        }

        assert!(calendar.is_within_one_day(&a, &b));
        assert!(!calendar.is_within_seven_days(&a, &c));
        assert!(calendar.is_within_days(8, &a, &c));
        assert!(calendar.is_within_thirty_days(&a, &d));
        assert!(!calendar.is_within_days(-1, &a, &a));
    }

    #[test]
    fn weekend_membership() {
        let calendar = utc();
        let saturday = calendar.make_date(9, 8, 2025);
        let monday = calendar.make_date(11, 8, 2025);
        assert!(calendar.is_weekend(&saturday));
        assert!(!calendar.is_weekday(&saturday));
        assert!(calendar.is_weekday(&monday));

        let friday_saturday = utc().with_week_rules(WeekRules::new(
            Weekday::Saturday,
            &[Weekday::Friday, Weekday::Saturday],
        ));
        let sunday = calendar.make_date(10, 8, 2025);
        assert!(friday_saturday.is_weekday(&sunday));
        assert!(friday_saturday.is_weekend(&saturday));
    }

    #[test]
    fn week_boundaries_follow_first_weekday() {
        let sunday_first = utc();
        let monday_first = utc().with_week_rules(WeekRules::iso());

        // Sunday, 2025-08-10
        let sunday = sunday_first.make_date(10, 8, 2025);
        assert!(sunday_first.is_first_day_of_week(&sunday));
        assert!(!sunday_first.is_last_day_of_week(&sunday));
        assert!(monday_first.is_last_day_of_week(&sunday));
        assert!(!monday_first.is_first_day_of_week(&sunday));

        let saturday_night = at(&sunday_first, 2025, 8, 16, 23, 59);
        assert!(sunday_first.is_last_day_of_week(&saturday_night));

        let week = sunday_first.week_interval(&sunday).unwrap();
        assert_eq!(week.start, sunday);
        assert_eq!(week.end, sunday_first.make_date(17, 8, 2025));
        assert!(week.contains(&saturday_night));
        assert!(!week.contains(&week.end));
    }

    #[test]
    fn same_and_previous_week() {
        let calendar = utc();
        let wednesday = calendar.make_date(13, 8, 2025);
        let saturday = calendar.make_date(16, 8, 2025);
        let next_sunday = calendar.make_date(17, 8, 2025);
        let previous_friday = calendar.make_date(8, 8, 2025);

        assert!(calendar.is_same_week(&wednesday, &saturday));
        assert!(!calendar.is_same_week(&saturday, &next_sunday));
        assert!(calendar.is_previous_week(&previous_friday, &wednesday));
        assert!(calendar.is_previous_week(&saturday, &next_sunday));
        assert!(!calendar.is_previous_week(&wednesday, &saturday));

        // Weeks span the year boundary.
        let dec_30 = calendar.make_date(30, 12, 2025);
        let jan_2 = calendar.make_date(2, 1, 2026);
        assert!(calendar.is_same_week(&dec_30, &jan_2));
    }

    #[test]
    fn month_boundaries() {
        let calendar = utc();
        let first = calendar.make_date(1, 2, 2024);
        let last = at(&calendar, 2024, 2, 29, 18, 0);
        let inside = calendar.make_date(15, 2, 2024);

        assert!(calendar.is_first_day_of_month(&first));
        assert!(!calendar.is_last_day_of_month(&first));
        assert!(calendar.is_last_day_of_month(&last));
        assert!(!calendar.is_first_day_of_month(&last));
        assert!(!calendar.is_first_day_of_month(&inside));
        assert!(!calendar.is_last_day_of_month(&inside));

        let december = calendar.month_interval(&calendar.make_date(31, 12, 2023)).unwrap();
        assert_eq!(december.end, calendar.make_date(1, 1, 2024));
    }

    #[test]
    fn same_and_previous_month() {
        let calendar = utc();
        let sep_15 = calendar.make_date(15, 9, 2025);
        let aug_1 = calendar.make_date(1, 8, 2025);
        let jul_1 = calendar.make_date(1, 7, 2025);
        assert!(calendar.is_previous_month(&aug_1, &sep_15));
        assert!(!calendar.is_previous_month(&jul_1, &sep_15));
        assert!(calendar.is_same_month(&sep_15, &calendar.make_date(30, 9, 2025)));
        assert!(!calendar.is_same_month(&sep_15, &calendar.make_date(15, 9, 2024)));

        let jan = calendar.make_date(10, 1, 2026);
        let dec = calendar.make_date(31, 12, 2025);
        assert!(calendar.is_previous_month(&dec, &jan));
    }

    #[test]
    fn boundary_predicates_fail_safe_at_range_end() {
        let calendar = utc();
        let max = Instant::try_new(crate::NS_MAX_INSTANT).unwrap();
        assert!(calendar.month_interval(&max).is_none());
        assert!(!calendar.is_last_day_of_month(&max));
        assert!(!calendar.is_first_day_of_month(&max));
    }

    #[test]
    fn date_key_round_trip() {
        let calendar = utc().with_offset(UtcOffset::from_hours_minutes(5, 45).unwrap());
        for seconds in [0, 1_754_611_200, -2_208_988_800, 951_782_400, 4_102_444_799] {
            let instant = Instant::from_epoch_seconds(seconds).unwrap();
            let start = calendar.start_of_day(&instant);
            let key = calendar.encode_key(&start);
            assert_eq!(calendar.decode_key(&key), Some(start), "{key}");
        }
    }

    #[test]
    fn decode_key_failures_and_clamping() {
        let calendar = utc();
        assert_eq!(calendar.decode_key("2024.13"), None);
        assert_eq!(calendar.decode_key("abc.01.01"), None);
        assert!(calendar.try_decode_key("2024.01").is_err());

        let clamped = calendar.decode_key("2024.02.30").unwrap();
        assert_eq!(calendar.encode_key(&clamped), "2024.02.29");
        assert_eq!(clamped, calendar.make_date(29, 2, 2024));

        let day_99 = calendar.decode_key("2023.4.99").unwrap();
        assert_eq!(calendar.encode_key(&day_99), "2023.04.30");
    }

    #[test]
    fn decode_key_clamps_parts_beyond_i32() {
        let calendar = utc();
        let wide_day = calendar.decode_key("2024.02.9999999999").unwrap();
        assert_eq!(calendar.encode_key(&wide_day), "2024.02.29");

        let wide_month = calendar.decode_key("2023.-99999999999.15").unwrap();
        assert_eq!(calendar.encode_key(&wide_month), "2023.01.15");

        let wide_year = calendar.decode_key("99999999999.1.1").unwrap();
        assert_eq!(wide_year, calendar.make_date(1, 1, i32::MAX));
    }
}
