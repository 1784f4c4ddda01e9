//! Human readable names and date strings.
//!
//! With the `compiled_data` feature, month and weekday names, the medium date
//! style, and the short time style are formatted by `icu`'s datetime
//! formatters for the calendar's locale. Without it, or when the locale has
//! no data, the CLDR English forms below are used. Relative phrases ("3 days
//! ago", "in 2 weeks") are localized through `icu_experimental`'s relative
//! time formatter.

use alloc::{format, string::String};

use crate::{
    builtins::core::{Calendar, Instant},
    iso::IsoDateTime,
    options::NameLength,
};

#[cfg(feature = "compiled_data")]
use crate::{error::ErrorMessage, options::RelativeUnit, DateError, DateResult};
#[cfg(feature = "compiled_data")]
use icu_locale::Locale;
#[cfg(feature = "compiled_data")]
use writeable::Writeable;

const MONTH_NAMES_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ISO order, Monday first.
const WEEKDAY_NAMES_FULL: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAY_NAMES_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// The piece of a local date time being formatted.
#[derive(Debug, Clone, Copy)]
enum Field {
    Month(NameLength),
    Weekday(NameLength),
    MediumDate,
    ShortTime,
}

impl Calendar {
    /// Returns the name of the local month of `instant`.
    pub fn month_name(&self, instant: &Instant, length: NameLength) -> String {
        self.format_field(instant, Field::Month(length))
    }

    /// Returns the name of the local weekday of `instant`.
    pub fn weekday_name(&self, instant: &Instant, length: NameLength) -> String {
        self.format_field(instant, Field::Weekday(length))
    }

    /// "August"
    pub fn month_name_full(&self, instant: &Instant) -> String {
        self.month_name(instant, NameLength::Full)
    }

    /// "Aug"
    pub fn month_name_short(&self, instant: &Instant) -> String {
        self.month_name(instant, NameLength::Short)
    }

    /// "Friday"
    pub fn weekday_full(&self, instant: &Instant) -> String {
        self.weekday_name(instant, NameLength::Full)
    }

    /// "Fri"
    pub fn weekday_short(&self, instant: &Instant) -> String {
        self.weekday_name(instant, NameLength::Short)
    }

    /// Returns the medium style date, e.g. "Aug 8, 2025" in English.
    pub fn formatted_date(&self, instant: &Instant) -> String {
        self.format_field(instant, Field::MediumDate)
    }

    /// Returns the short style time, e.g. "2:05 PM" in English.
    pub fn formatted_time(&self, instant: &Instant) -> String {
        self.format_field(instant, Field::ShortTime)
    }

    fn format_field(&self, instant: &Instant, field: Field) -> String {
        let local = self.to_iso_date_time(instant);
        #[cfg(feature = "compiled_data")]
        {
            match format_localized(self.locale(), &local, field) {
                Ok(formatted) => return formatted,
                Err(_e) => {
                    #[cfg(feature = "log")]
                    log::warn!("{field:?} in locale {}: {_e}; using English", self.locale());
                }
            }
        }
        format_english(&local, field)
    }
}

fn format_english(local: &IsoDateTime, field: Field) -> String {
    let month = usize::from(local.date.month - 1);
    let weekday = usize::from(local.date.iso_weekday() - 1);
    match field {
        Field::Month(NameLength::Full) => MONTH_NAMES_FULL[month].into(),
        Field::Month(NameLength::Short) => MONTH_NAMES_SHORT[month].into(),
        Field::Weekday(NameLength::Full) => WEEKDAY_NAMES_FULL[weekday].into(),
        Field::Weekday(NameLength::Short) => WEEKDAY_NAMES_SHORT[weekday].into(),
        Field::MediumDate => format!(
            "{} {}, {}",
            MONTH_NAMES_SHORT[month], local.date.day, local.date.year
        ),
        Field::ShortTime => {
            let period = if local.time.hour < 12 { "AM" } else { "PM" };
            let hour = match local.time.hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{hour}:{:02} {period}", local.time.minute)
        }
    }
}

#[cfg(feature = "compiled_data")]
fn format_localized(locale: &Locale, local: &IsoDateTime, field: Field) -> DateResult<String> {
    use icu::calendar::{Date, Gregorian};
    use icu::datetime::{
        fieldsets, options::TimePrecision, DateTimeFormatterPreferences,
        FixedCalendarDateTimeFormatter, NoCalendarFormatter,
    };
    use icu::time::Time;

    let prefs = DateTimeFormatterPreferences::from(locale);
    let date = Date::try_new_gregorian(local.date.year, local.date.month, local.date.day)
        .map_err(|_| DateError::range().with_enum(ErrorMessage::DateOutOfRange))?;

    let formatted = match field {
        Field::Month(length) => {
            let field_set = match length {
                NameLength::Full => fieldsets::M::long(),
                NameLength::Short => fieldsets::M::medium(),
            };
            FixedCalendarDateTimeFormatter::<Gregorian, _>::try_new(prefs, field_set)
                .map(|f| f.format(&date).write_to_string().into_owned())
        }
        Field::Weekday(length) => {
            let field_set = match length {
                NameLength::Full => fieldsets::E::long(),
                NameLength::Short => fieldsets::E::medium(),
            };
            FixedCalendarDateTimeFormatter::<Gregorian, _>::try_new(prefs, field_set)
                .map(|f| f.format(&date).write_to_string().into_owned())
        }
        Field::MediumDate => {
            let field_set = fieldsets::YMD::medium();
            FixedCalendarDateTimeFormatter::<Gregorian, _>::try_new(prefs, field_set)
                .map(|f| f.format(&date).write_to_string().into_owned())
        }
        Field::ShortTime => {
            let time = Time::try_new(local.time.hour, local.time.minute, 0, 0)
                .map_err(|_| DateError::range().with_message("not a valid time."))?;
            let field_set = fieldsets::T::short().with_time_precision(TimePrecision::Minute);
            NoCalendarFormatter::try_new(prefs, field_set)
                .map(|f| f.format(&time).write_to_string().into_owned())
        }
    };

    formatted.map_err(|_| DateError::general(ErrorMessage::LocaleDataUnavailable.to_str()))
}

/// Formats `value` units relative to now in the long style, e.g.
/// "in 2 weeks" or "3 days ago".
#[cfg(feature = "compiled_data")]
pub(crate) fn format_relative(
    locale: &Locale,
    unit: RelativeUnit,
    value: i64,
) -> DateResult<String> {
    use fixed_decimal::Decimal;
    use icu_experimental::relativetime::{
        options::Numeric, RelativeTimeFormatter, RelativeTimeFormatterOptions,
    };

    let prefs = locale.into();
    let options = RelativeTimeFormatterOptions {
        numeric: Numeric::Always,
    };
    let formatter = match unit {
        RelativeUnit::Second => RelativeTimeFormatter::try_new_long_second(prefs, options),
        RelativeUnit::Minute => RelativeTimeFormatter::try_new_long_minute(prefs, options),
        RelativeUnit::Hour => RelativeTimeFormatter::try_new_long_hour(prefs, options),
        RelativeUnit::Day => RelativeTimeFormatter::try_new_long_day(prefs, options),
        RelativeUnit::Week => RelativeTimeFormatter::try_new_long_week(prefs, options),
        RelativeUnit::Month => RelativeTimeFormatter::try_new_long_month(prefs, options),
        RelativeUnit::Year => RelativeTimeFormatter::try_new_long_year(prefs, options),
    }
    .map_err(|_| {
        #[cfg(feature = "log")]
        log::warn!("no relative time data for {unit} in locale {locale}");
        DateError::general(ErrorMessage::LocaleDataUnavailable.to_str())
    })?;

    Ok(formatter
        .format(Decimal::from(value))
        .write_to_string()
        .into_owned())
}
