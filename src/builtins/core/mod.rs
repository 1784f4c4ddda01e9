//! The clock-independent core of the crate.
//!
//! Everything here is usable without `std`: the `Now` component takes its
//! clock as a [`HostClock`][crate::host::HostClock] parameter.

pub(crate) mod calendar;
pub(crate) mod format;
pub(crate) mod instant;
pub(crate) mod now;
pub(crate) mod timezone;
pub(crate) mod week;

#[doc(inline)]
pub use calendar::{Calendar, DateInterval};
#[doc(inline)]
pub use instant::Instant;
#[doc(inline)]
pub use now::Now;
#[doc(inline)]
pub use timezone::UtcOffset;
#[doc(inline)]
pub use week::WeekRules;
