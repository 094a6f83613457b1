use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use dashu::base::UnsignedAbs;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::expression::errors::ExpressionError;

/// Fractional digits kept when rendering a quotient that does not terminate.
pub const DECIMAL_SCALE: usize = 68;

/// An exact decimal value.
///
/// Backed by an arbitrary precision rational so that folds never lose
/// precision; only the textual rendering rounds (see [`DECIMAL_SCALE`]).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decimal(RBig);

impl Decimal {
    pub const ZERO: Decimal = Decimal(RBig::ZERO);

    /// Returns true if the value has no fractional part.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < RBig::ZERO
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Decimal) -> Result<Decimal, ExpressionError> {
        if rhs.is_zero() {
            return Err(ExpressionError::DivisionByZero);
        }
        Ok(Decimal(&self.0 / &rhs.0))
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::ZERO
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(RBig::from(IBig::from(value)))
    }
}

fn ten_pow(exp: usize) -> UBig {
    UBig::from(10u8).pow(exp)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Decimal {
    type Err = ExpressionError;

    /// Accepts `-?digits(.digits)?`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ExpressionError::InvalidNumber(text.to_string());

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };
        if !is_digits(int_part) || (unsigned.contains('.') && !is_digits(frac_part)) {
            return Err(invalid());
        }

        let digits = format!("{int_part}{frac_part}");
        let magnitude = UBig::from_str(&digits).map_err(|_| invalid())?;
        let numerator = if negative {
            -IBig::from(magnitude)
        } else {
            IBig::from(magnitude)
        };
        Ok(Decimal(RBig::from_parts(
            numerator,
            ten_pow(frac_part.len()),
        )))
    }
}

impl fmt::Display for Decimal {
    /// Plain notation with trailing fractional zeros trimmed.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let numerator = self.0.numerator();
        let denominator = self.0.denominator();
        let negative = numerator < &IBig::ZERO;
        let magnitude = numerator.clone().unsigned_abs();

        // round half up at DECIMAL_SCALE fractional digits
        let two = UBig::from(2u8);
        let scaled = (&magnitude * ten_pow(DECIMAL_SCALE) * &two + denominator)
            / (denominator * &two);

        let mut digits = scaled.to_string();
        if digits.len() <= DECIMAL_SCALE {
            digits = format!("{}{}", "0".repeat(DECIMAL_SCALE + 1 - digits.len()), digits);
        }
        let (int_part, frac_part) = digits.split_at(digits.len() - DECIMAL_SCALE);
        let frac_part = frac_part.trim_end_matches('0');

        if negative && scaled != UBig::ZERO {
            write!(f, "-")?;
        }
        if frac_part.is_empty() {
            write!(f, "{int_part}")
        } else {
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number or a decimal string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal(RBig::from(IBig::from(UBig::from(value)))))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        self.visit_str(&value.to_string())
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        value.trim().parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}
