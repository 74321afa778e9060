use alloc::string::String;
use core::fmt;
use core::num::ParseIntError;

/// Error type for the library.
///
/// Parsing is the module's only fallible operation; every arithmetic and
/// string-conversion operation is total by contract.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The numeric text handed to the integer parser was not a valid
    /// integer literal. `input` is the exact digit string that failed —
    /// for fractional input that is the integer and fractional halves
    /// concatenated with the decimal point removed.
    MalformedNumber {
        input: String,
        source: ParseIntError,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedNumber { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedNumber { input, source } => {
                write!(f, "malformed decimal number `{input}`: {source}")
            }
        }
    }
}
