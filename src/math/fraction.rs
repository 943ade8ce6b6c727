//! Exact reduced fractions for mean comparison and grouping

use crate::io::error::{SearchError, invalid_parameter};
use num_traits::{NumCast, PrimInt, Signed};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Exact rational number kept in lowest terms with a positive denominator
///
/// Because the representation is canonical, the derived equality and hashing
/// agree with rational equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction<T> {
    numerator: T,
    denominator: T,
}

/// Arithmetic mean of a variation
pub type Mean = Fraction<i64>;

impl<T: PrimInt + Signed + Into<i128>> Fraction<T> {
    /// Create a reduced fraction
    ///
    /// Returns `None` for a zero denominator, or when the reduced form does
    /// not fit in `T` (only `T::MIN / -1`-style quotients).
    pub fn new(numerator: T, denominator: T) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }

        // Reduce in i128 so that negating T::MIN cannot overflow
        let numerator: i128 = numerator.into();
        let denominator: i128 = denominator.into();
        let divisor = greatest_common_divisor(numerator.abs(), denominator.abs());
        let sign = denominator.signum();

        Some(Self {
            numerator: <T as NumCast>::from(sign * numerator / divisor)?,
            denominator: <T as NumCast>::from(sign * denominator / divisor)?,
        })
    }

    /// Create a fraction with denominator one
    pub fn from_integer(value: T) -> Self {
        Self {
            numerator: value,
            denominator: T::one(),
        }
    }

    /// Reduced numerator (carries the sign)
    pub const fn numerator(&self) -> T {
        self.numerator
    }

    /// Reduced denominator (always positive)
    pub const fn denominator(&self) -> T {
        self.denominator
    }

    /// Test whether the fraction is a whole number
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Approximate floating point value, for display only
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.numerator.to_f64()? / self.denominator.to_f64()?)
    }
}

fn greatest_common_divisor<T: PrimInt>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    if a.is_zero() { T::one() } else { a }
}

impl<T: PrimInt + Signed + Into<i128>> Ord for Fraction<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order
        let widen = Into::<i128>::into;
        let lhs = widen(self.numerator) * widen(other.denominator);
        let rhs = widen(other.numerator) * widen(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl<T: PrimInt + Signed + Into<i128>> PartialOrd for Fraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PrimInt + Signed + Into<i128> + fmt::Display> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl<T: PrimInt + Signed + Into<i128>> FromStr for Fraction<T> {
    type Err = SearchError;

    /// Parse `5`, `-3`, `31/6` or a decimal literal such as `5.25`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parse_integer = |digits: &str| {
            T::from_str_radix(digits.trim(), 10)
                .map_err(|_parse_error| invalid_parameter("mean", &text, &"not an integer"))
        };

        if let Some((numerator, denominator)) = text.split_once('/') {
            let numerator = parse_integer(numerator)?;
            let denominator = parse_integer(denominator)?;
            if denominator.is_zero() {
                return Err(invalid_parameter("mean", &text, &"denominator is zero"));
            }
            return Self::new(numerator, denominator)
                .ok_or_else(|| invalid_parameter("mean", &text, &"value out of range"));
        }

        if let Some((whole, fractional)) = text.split_once('.') {
            if fractional.is_empty() || !fractional.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid_parameter("mean", &text, &"malformed decimal"));
            }
            let scale = <T as NumCast>::from(10_u8)
                .and_then(|ten| num_traits::checked_pow(ten, fractional.len()))
                .ok_or_else(|| invalid_parameter("mean", &text, &"too many decimal places"))?;
            let negative = whole.trim_start().starts_with('-');
            let whole_part = if whole.trim().is_empty() || whole.trim() == "-" {
                T::zero()
            } else {
                parse_integer(whole)?
            };
            let fractional_part = parse_integer(fractional)?;
            let signed_fraction = if negative {
                -fractional_part
            } else {
                fractional_part
            };
            let numerator = whole_part
                .checked_mul(&scale)
                .and_then(|scaled| scaled.checked_add(&signed_fraction))
                .ok_or_else(|| invalid_parameter("mean", &text, &"value out of range"))?;
            return Self::new(numerator, scale)
                .ok_or_else(|| invalid_parameter("mean", &text, &"value out of range"));
        }

        Ok(Self::from_integer(parse_integer(text)?))
    }
}
