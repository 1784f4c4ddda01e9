//! This module implements `DateError`.

use core::fmt;

/// `DateError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
    /// Assert
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `date_extensions`.
#[derive(Debug, Clone, PartialEq)]
pub struct DateError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl DateError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessage::String(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.msg.to_str()
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for DateError {}

/// The error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    // Range
    InstantOutOfRange,
    DateOutOfRange,
    OffsetOutOfRange,
    ArithmeticOverflow,

    // Host
    SystemTimeUnavailable,

    // Syntax
    DateKeyPartCount,
    DateKeyInvalidNumber,

    // Data
    LocaleDataUnavailable,

    // Other
    None,
    String(&'static str),
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::InstantOutOfRange => "Instant nanoseconds are not within a valid epoch range.",
            Self::DateOutOfRange => "Date is not within the representable calendar range.",
            Self::OffsetOutOfRange => "UTC offset must be within a 24 hour range.",
            Self::ArithmeticOverflow => "Relative offset overflowed the calendar arithmetic.",
            Self::SystemTimeUnavailable => "Error fetching system time",
            Self::DateKeyPartCount => "date key must have exactly three dot separated parts.",
            Self::DateKeyInvalidNumber => "date key parts must be integers.",
            Self::LocaleDataUnavailable => "locale data could not be loaded.",
            Self::None => "",
            Self::String(s) => s,
        }
    }
}
