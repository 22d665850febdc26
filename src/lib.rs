//! Arbitrary-precision signed integers stored as base-`10^9` limbs.
//!
//! A [`BigInt`] keeps its magnitude as a little-endian vector of decimal
//! limbs, nine decimal digits per limb, together with a sign flag. The
//! common numerical operations are overloaded, so big integers can be
//! treated much the same way we treat other numbers:
//!
//! ```rust
//! use dec_bigint::BigInt;
//!
//! // 50! is far too large for any primitive integer.
//! let mut factorial = BigInt::from(1);
//! for i in 2..=50i64 {
//!     factorial = factorial * BigInt::from(i);
//! }
//!
//! assert_eq!(factorial.to_string().len(), 65);
//! assert!(factorial.to_string().starts_with("30414093201"));
//! ```
//!
//! Parsing and printing use plain decimal notation:
//!
//! ```rust
//! use dec_bigint::BigInt;
//!
//! let n: BigInt = "-123456789012345678901234567890".parse().unwrap();
//! assert_eq!(n.to_string(), "-123456789012345678901234567890");
//! ```
//!
//! Multiplication switches from the schoolbook loop to recursive Karatsuba
//! multiplication once both operands are wide enough, and division follows
//! C semantics: the quotient rounds toward zero and the remainder takes the
//! dividend's sign.
//!
//! ```rust
//! use dec_bigint::BigInt;
//!
//! let (q, r) = BigInt::from(-100).div_rem(&BigInt::from(3)).unwrap();
//! assert_eq!((q.to_string(), r.to_string()), ("-33".to_string(), "-1".to_string()));
//! ```

use std::error::Error;
use std::fmt;

mod algorithms;
mod bigint;

#[cfg(test)]
mod quickcheck_impls;

pub use crate::algorithms::big_digit;
pub use crate::algorithms::big_digit::BigDigit;
pub use crate::bigint::BigInt;

/// The error type produced by the fallible [`BigInt`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// The input string was empty, a bare sign, or contained a character
    /// other than an ASCII digit.
    InvalidFormat,
    /// The divisor had magnitude zero.
    DivisionByZero,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::InvalidFormat => f.write_str("invalid decimal integer"),
            BigIntError::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl Error for BigIntError {}
