//! Bug-compatible fixed-point decimals for deterministic benchmark row
//! generation.
//!
//! [`FixedDecimal`] pairs a signed 64 bit mantissa with a count of decimal
//! places and reproduces the numeric behavior of the reference data
//! generator exactly — including its truncating rescale in multiplication,
//! its single-precision float division, and its float-mediated
//! stringification. None of these are defects to correct: downstream
//! conformance suites compare generated columns textually against the
//! reference, so the arithmetic here must match it bit for bit rather than
//! be mathematically ideal.
//!
//! ```
//! use rowgen_decimal::FixedDecimal;
//!
//! let price: FixedDecimal = "123.45".parse().unwrap();
//! assert_eq!(price.mantissa(), 12345);
//! assert_eq!(price.places(), 2);
//!
//! let tax = price.truncating_mul(FixedDecimal::NINE_PERCENT);
//! assert_eq!(tax.to_string(), "11.11");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decimal;
mod error;
mod str;

#[cfg(feature = "proptest")]
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
mod proptest;
#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
mod rand;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde;

pub use crate::decimal::FixedDecimal;
pub use crate::error::Error;
#[cfg(feature = "rand")]
pub use crate::rand::FixedDecimalSampler;

/// Shortcut for `core::result::Result<T, rowgen_decimal::Error>`.
pub type Result<T, E = Error> = core::result::Result<T, E>;
