//! The date components exposed at the crate root.

pub(crate) mod core;

pub use self::core::*;
