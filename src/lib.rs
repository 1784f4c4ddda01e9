//! The `date_extensions` crate is a set of calendar conveniences over a
//! single moment in time: component accessors, month and weekday names,
//! day, week and month boundaries, compact `"YYYY.MM.DD"` date keys, and
//! "ago" / "from now" arithmetic.
//!
//! ```rust
//! use date_extensions::{host::FixedClock, options::RelativeOffset, Calendar, Now};
//!
//! let calendar = Calendar::default();
//!
//! // Friday, August 8th 2025 at local midnight.
//! let date = calendar.make_date(8, 8, 2025);
//! assert_eq!(calendar.weekday_full(&date), "Friday");
//! assert_eq!(calendar.formatted_date(&date), "Aug 8, 2025");
//!
//! let key = calendar.encode_key(&date);
//! assert_eq!(key, "2025.08.08");
//! assert_eq!(calendar.decode_key(&key), Some(date));
//!
//! // Operations relative to "now" read a `HostClock`.
//! let now = Now::new(FixedClock::new(date), calendar);
//! let week_ago = now.ago(RelativeOffset::weeks(1)).unwrap();
//! assert!(now.is_last_week(&week_ago));
//! assert!(now.is_in_past(&week_ago));
//! ```
//!
//! A [`Calendar`] carries the context every local computation reads: a
//! locale, the week rules of that locale, and a fixed UTC offset. With the
//! `compiled_data` feature the week rules, names, formatted dates and
//! relative phrases come from CLDR data for that locale.
//!
//! The `sys` feature, enabled by default, adds [`SystemClock`] for reading
//! the wall clock.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod host;
pub mod iso;
pub mod options;
pub mod parsers;

#[doc(hidden)]
pub(crate) mod utils;

#[cfg(feature = "sys")]
pub mod sys;

mod builtins;
mod epoch_nanoseconds;

#[doc(inline)]
pub use error::DateError;

/// The `date_extensions` result type
pub type DateResult<T> = Result<T, DateError>;

pub mod time {
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::builtins::{Calendar, DateInterval, Instant, Now, UtcOffset, WeekRules};

/// Re-export of the weekday type used by [`Calendar::weekday`].
pub use icu_calendar::types::Weekday;
/// Re-export of the locale type carried by a [`Calendar`].
pub use icu_locale::Locale;

#[cfg(feature = "sys")]
#[doc(inline)]
pub use sys::SystemClock;

/// A library specific trait for unwrapping assertions.
#[cfg_attr(not(feature = "compiled_data"), allow(dead_code))]
pub(crate) trait DateUnwrap {
    type Output;

    /// Panics in debug builds, returns an assertion error in release builds.
    fn date_unwrap(self) -> DateResult<Self::Output>;
}

impl<T> DateUnwrap for Option<T> {
    type Output = T;

    fn date_unwrap(self) -> DateResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(DateError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! date_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DateError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DateError::assert());
        }
    };
}

// Relevant numeric constants
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// Max Instant nanosecond constant, 1e8 days after the epoch.
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY as i128 * 100_000_000i128;
/// Min Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
