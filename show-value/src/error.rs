//! Errors from the fallible value constructors.

/// Errors that can occur when constructing values.
#[derive(Debug)]
pub enum ValueError {
    /// A regular expression flag outside `dgimsuvy`.
    UnknownRegExpFlag {
        /// The flags as given.
        flags: String,
        /// The offending flag.
        flag: char,
    },

    /// A regular expression flag given more than once.
    DuplicateRegExpFlag {
        /// The flags as given.
        flags: String,
        /// The repeated flag.
        flag: char,
    },

    /// The `u` and `v` flags were both given.
    ConflictingRegExpFlags {
        /// The flags as given.
        flags: String,
    },

    /// Text that is not an RFC 3339 timestamp.
    InvalidDate {
        /// The text as given.
        input: String,
        /// Why parsing failed.
        source: chrono::ParseError,
    },
}

impl core::fmt::Display for ValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueError::UnknownRegExpFlag { flags, flag } => {
                write!(f, "Invalid regular expression flags '{flags}': unknown flag '{flag}'")
            }
            ValueError::DuplicateRegExpFlag { flags, flag } => {
                write!(f, "Invalid regular expression flags '{flags}': '{flag}' appears twice")
            }
            ValueError::ConflictingRegExpFlags { flags } => {
                write!(f, "Invalid regular expression flags '{flags}': 'u' and 'v' are exclusive")
            }
            ValueError::InvalidDate { input, source } => {
                write!(f, "Invalid date '{input}': {source}")
            }
        }
    }
}

impl core::error::Error for ValueError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ValueError::InvalidDate { source, .. } => Some(source),
            _ => None,
        }
    }
}
