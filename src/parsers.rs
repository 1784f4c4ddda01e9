//! This module implements parsing and writing of date keys.
//!
//! A date key is the `YYYY.MM.DD` serialization of a calendar day, with the
//! month and day zero padded to two digits.

use crate::{error::ErrorMessage, DateError, DateResult};

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

/// The separator between the year, month, and day of a date key.
pub const DATE_KEY_SEPARATOR: char = '.';

/// The raw fields of a date key.
///
/// Fields are not validated against the calendar; a key such as
/// `2024.02.30` parses into a record with `day == 30`. Parts are read as
/// 64-bit integers and saturated into `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDateKey {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// Parses a `year.month.day` key into its raw integer fields.
pub fn parse_date_key(source: &str) -> DateResult<ParsedDateKey> {
    let mut parts = source.split(DATE_KEY_SEPARATOR);
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DateError::syntax().with_enum(ErrorMessage::DateKeyPartCount));
    };

    Ok(ParsedDateKey {
        year: parse_key_integer(year)?,
        month: parse_key_integer(month)?,
        day: parse_key_integer(day)?,
    })
}

fn parse_key_integer(part: &str) -> DateResult<i32> {
    let value = part
        .parse::<i64>()
        .map_err(|_| DateError::syntax().with_enum(ErrorMessage::DateKeyInvalidNumber))?;
    Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// A writeable `YYYY.MM.DD` date key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableDateKey {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Writeable for FormattableDateKey {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.year.write_to(sink)?;
        sink.write_char(DATE_KEY_SEPARATOR)?;
        write_padded_u8(self.month, sink)?;
        sink.write_char(DATE_KEY_SEPARATOR)?;
        write_padded_u8(self.day, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.year.writeable_length_hint() + 6
    }
}

impl_display_with_writeable!(FormattableDateKey);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}
