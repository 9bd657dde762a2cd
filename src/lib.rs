//! Scaled decimal numbers with human-readable suffix notation for quantities
//! that grow by many orders of magnitude, as they do in incremental and idle
//! games.
//!
//! A [ScaledNumber] stores a mantissa kept in `[1, 10)` by magnitude together
//! with a power-of-ten scale, and renders through a fixed table of unit
//! suffixes: `K`, `M`, `B`, `T` for the first four thousands, one-letter codes
//! from `a` onward, and two-letter codes up to `ZZ` (10^2040). Formatting and
//! parsing invert each other, and every arithmetic result is re-normalized.
//!
//! ```
//! use idle_num::ScaledNumber;
//!
//! let gold = ScaledNumber::new(1.23, 5);
//! assert_eq!(gold.to_string(), "123K");
//!
//! let bonus = ScaledNumber::parse("2.5M").unwrap();
//! assert_eq!((gold + bonus).to_string(), "2.62M");
//!
//! let squared = gold.pow(2);
//! assert_eq!(squared.to_string(), "15.13B");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]

mod defs;
mod ext;
mod num;
mod parser;
mod strop;

pub mod units;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::EPSILON;
pub use crate::num::ScaledNumber;
pub use crate::num::ONE;
pub use crate::num::ZERO;
