//! Locale dependent week rules.

use icu_calendar::types::Weekday;

#[cfg(feature = "compiled_data")]
use crate::{error::ErrorMessage, DateError, DateResult};
#[cfg(feature = "compiled_data")]
use icu_calendar::week::WeekInformation;
#[cfg(feature = "compiled_data")]
use icu_locale::Locale;

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// The first day of the week and the set of weekend days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRules {
    first_weekday: Weekday,
    // Bit `n - 1` is set for ISO weekday number `n`.
    weekend: u8,
}

impl Default for WeekRules {
    /// Sunday first, with a Saturday and Sunday weekend.
    fn default() -> Self {
        Self::new(Weekday::Sunday, &[Weekday::Saturday, Weekday::Sunday])
    }
}

impl WeekRules {
    pub fn new(first_weekday: Weekday, weekend: &[Weekday]) -> Self {
        let weekend = weekend
            .iter()
            .fold(0u8, |mask, day| mask | weekday_bit(*day));
        Self {
            first_weekday,
            weekend,
        }
    }

    /// ISO 8601 rules: Monday first, Saturday and Sunday weekend.
    pub fn iso() -> Self {
        Self::new(Weekday::Monday, &[Weekday::Saturday, Weekday::Sunday])
    }

    /// Resolves the week rules of `locale` from CLDR data.
    ///
    /// Enable with the `compiled_data` feature flag.
    #[cfg(feature = "compiled_data")]
    pub fn try_from_locale(locale: &Locale) -> DateResult<Self> {
        let info = WeekInformation::try_new(locale.into()).map_err(|_| {
            #[cfg(feature = "log")]
            log::warn!("no week data for locale {locale}");
            DateError::general(ErrorMessage::LocaleDataUnavailable.to_str())
        })?;

        let weekend = ALL_WEEKDAYS
            .iter()
            .filter(|day| info.weekend.contains(**day))
            .fold(0u8, |mask, day| mask | weekday_bit(*day));
        Ok(Self {
            first_weekday: info.first_weekday,
            weekend,
        })
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Returns the weekend days in ISO order, Monday through Sunday.
    pub fn weekend(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_WEEKDAYS
            .iter()
            .copied()
            .filter(|day| self.is_weekend(*day))
    }

    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        self.weekend & weekday_bit(weekday) != 0
    }

    /// Returns how many days `weekday` is after the first day of the week,
    /// in 0..=6.
    pub(crate) fn days_since_week_start(&self, weekday: Weekday) -> u8 {
        (iso_weekday_number(weekday) + 7 - iso_weekday_number(self.first_weekday)) % 7
    }
}

/// Returns the ISO weekday number, Monday being 1 and Sunday 7.
pub(crate) fn iso_weekday_number(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Monday => 1,
        Weekday::Tuesday => 2,
        Weekday::Wednesday => 3,
        Weekday::Thursday => 4,
        Weekday::Friday => 5,
        Weekday::Saturday => 6,
        Weekday::Sunday => 7,
    }
}

/// Returns the `Weekday` for an ISO weekday number in 1..=7.
pub(crate) fn weekday_from_iso_number(number: u8) -> Weekday {
    ALL_WEEKDAYS[usize::from((number + 6) % 7)]
}

fn weekday_bit(weekday: Weekday) -> u8 {
    1 << (iso_weekday_number(weekday) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn default_rules() {
        let rules = WeekRules::default();
        assert_eq!(rules.first_weekday(), Weekday::Sunday);
        assert!(rules.is_weekend(Weekday::Saturday));
        assert!(rules.is_weekend(Weekday::Sunday));
        assert!(!rules.is_weekend(Weekday::Friday));
        assert_eq!(
            rules.weekend().collect::<Vec<_>>(),
            [Weekday::Saturday, Weekday::Sunday]
        );
    }

    #[test]
    fn days_since_week_start() {
        let sunday_first = WeekRules::default();
        assert_eq!(sunday_first.days_since_week_start(Weekday::Sunday), 0);
        assert_eq!(sunday_first.days_since_week_start(Weekday::Saturday), 6);

        let monday_first = WeekRules::iso();
        assert_eq!(monday_first.days_since_week_start(Weekday::Sunday), 6);
        assert_eq!(monday_first.days_since_week_start(Weekday::Monday), 0);
    }

    #[test]
    fn iso_numbers_round_trip() {
        for number in 1..=7 {
            assert_eq!(iso_weekday_number(weekday_from_iso_number(number)), number);
        }
    }

    #[cfg(feature = "compiled_data")]
    #[test]
    fn locale_rules() {
        let us = WeekRules::try_from_locale(&icu_locale::locale!("en-US")).unwrap();
        assert_eq!(us.first_weekday(), Weekday::Sunday);
        assert!(us.is_weekend(Weekday::Saturday));

        let de = WeekRules::try_from_locale(&icu_locale::locale!("de-DE")).unwrap();
        assert_eq!(de.first_weekday(), Weekday::Monday);
        assert!(de.is_weekend(Weekday::Sunday));
        assert!(!de.is_weekend(Weekday::Monday));
    }
}
