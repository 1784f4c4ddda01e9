//! Utility date equations for the proleptic Gregorian calendar.
//!
//! The conversions between epoch days and `(year, month, day)` follow Cassio
//! Neri and Lorenz Schneider's paper, [Euclidean affine functions and their
//! application to calendar algorithms][eaf-calendar-algorithms]. The
//! computational calendar starts its year on March 1, which places the leap
//! day at the end of the computational year.
//!
//! Negative epoch days are handled by shifting the computational rata die by
//! a whole number of 400 year cycles, so every intermediate value stays
//! non-negative.
//!
//! [eaf-calendar-algorithms]: https://onlinelibrary.wiley.com/doi/full/10.1002/spe.3172

/// Computational rata die of 1970-01-01.
pub(crate) const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
/// Days in a Gregorian 400 year cycle.
pub(crate) const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

const SHIFT_CONSTANT: i64 = 3670;
const SHIFT_DAYS: i64 = SHIFT_CONSTANT * DAYS_IN_A_400Y_CYCLE;

const TWO_POWER_SIXTEEN: i64 = 65_536;

/// Returns whether `year` is a Gregorian leap year.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        return true;
    }
    if year % 100 == 0 {
        return false;
    }
    year % 4 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// `month` is expected to be in 1..=12; any other value is treated as a
/// 31 day month.
#[inline]
pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Returns the days since 1970-01-01 for a valid Gregorian date.
pub(crate) const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    // Move January and February to the end of the previous computational year.
    let j = (month <= 2) as i64;
    let comp_year = year as i64 + 400 * SHIFT_CONSTANT - j;
    let comp_month = month as i64 + 12 * j;
    let comp_day = day as i64 - 1;

    let century = comp_year / 100;
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;

    y_star + m_star + comp_day - (EPOCH_COMPUTATIONAL_RATA_DIE + SHIFT_DAYS)
}

/// Returns the Gregorian `(year, month, day)` for days since 1970-01-01.
pub(crate) const fn gregorian_ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let rata_die = epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE + SHIFT_DAYS;

    // Century and day of century
    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE;
    let day_of_century = (n_one % DAYS_IN_A_400Y_CYCLE) / 4;

    // Year of century and day of year
    let n_two = 4 * day_of_century + 3;
    let year_of_century = n_two / 1461;
    let day_of_year = (n_two % 1461) / 4;

    // Month and day of month
    let n_three = 2141 * day_of_year + 197_913;
    let comp_month = n_three / TWO_POWER_SIXTEEN;
    let comp_day = (n_three % TWO_POWER_SIXTEEN) / 2141;

    let j = (day_of_year >= 306) as i64;
    let year = 100 * century + year_of_century - 400 * SHIFT_CONSTANT + j;
    let month = comp_month - 12 * j;
    (year as i32, month as u8, (comp_day + 1) as u8)
}

/// Returns the ISO weekday number (Monday = 1, Sunday = 7) for epoch days.
#[inline]
pub(crate) const fn iso_weekday_from_epoch_days(epoch_days: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    ((epoch_days + 3).rem_euclid(7) + 1) as u8
}
