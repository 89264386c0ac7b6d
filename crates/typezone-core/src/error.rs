/// An enumeration of errors that this crate can produce.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The named time zone is not present in the time zone database. This
    /// is a configuration problem: the process cannot know what the zone
    /// means.
    #[error("time zone '{name}' could not be resolved: {reason}")]
    ZoneNotFound {
        /// The IANA identifier that was requested.
        name: String,
        /// The reason reported by the time zone database.
        reason: String,
    },

    /// The text did not match the pattern it was parsed with.
    #[error("invalid time text: {0}")]
    Parse(String),

    /// A formatting pattern contained an unsupported or malformed directive.
    #[error("invalid format pattern: {0}")]
    Format(String),

    /// The result would fall outside of the range of representable instants.
    #[error("time is outside the supported range: {0}")]
    OutOfRange(String),

    /// A database scalar of an unsupported type was scanned.
    #[error("cannot scan {0} value into a zoned time")]
    UnsupportedType(&'static str),

    /// An encoded key did not have the expected number of bytes.
    #[error("expected {expected} bytes, found {actual}")]
    IncorrectByteLength {
        /// The number of bytes the encoding requires.
        expected: usize,
        /// The number of bytes that were provided.
        actual: usize,
    },
}

impl Error {
    pub(crate) fn out_of_range(err: &jiff::Error) -> Self {
        Self::OutOfRange(err.to_string())
    }

    pub(crate) fn parse(err: &jiff::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
