//! Rounding modes and the divide-and-round engine shared by integer and
//! decimal division.

use std::cmp::Ordering;

use crate::{
    bigint::{BigInt, Sign},
    error::{Error, NumResult},
};

/// How to round a result that cannot be represented exactly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, serde::Serialize, serde::Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Nearest neighbor, ties away from zero.
    HalfUp,
    /// Nearest neighbor, ties toward zero.
    HalfDown,
    /// Nearest neighbor, ties to the even neighbor.
    HalfEven,
    /// No rounding permitted; a lossy result is an error.
    Unnecessary,
}

impl RoundingMode {
    /// Parses a mode name as written by `Display`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "UP" => Some(Self::Up),
            "DOWN" => Some(Self::Down),
            "CEILING" => Some(Self::Ceiling),
            "FLOOR" => Some(Self::Floor),
            "HALF_UP" => Some(Self::HalfUp),
            "HALF_DOWN" => Some(Self::HalfDown),
            "HALF_EVEN" => Some(Self::HalfEven),
            "UNNECESSARY" => Some(Self::Unnecessary),
            _ => None,
        }
    }
}

/// Divides `x` by `y` and rounds the quotient to an integer under `mode`.
///
/// The increment, when one is due, moves the truncated quotient away from
/// zero in the sign of the exact quotient.
///
/// # Errors
/// `DivideByZero` when `y` is zero; `Arithmetic` when `mode` is
/// `Unnecessary` and the division leaves a remainder.
pub(crate) fn divide_and_round(x: &BigInt, y: &BigInt, mode: RoundingMode) -> NumResult<BigInt> {
    let (quotient, remainder) = x.div_rem(y)?;
    if remainder.is_zero() {
        return Ok(quotient);
    }
    if !should_increment(&quotient, &remainder, y, mode)? {
        return Ok(quotient);
    }
    let one = BigInt::one();
    let toward_negative = match quotient.sign() {
        Sign::Minus => true,
        Sign::Zero => x.is_negative() != y.is_negative(),
        Sign::Plus => false,
    };
    if toward_negative {
        Ok(quotient.sub(&one))
    } else {
        Ok(quotient.add(&one))
    }
}

/// Whether the truncated quotient must move away from zero.
fn should_increment(
    quotient: &BigInt,
    remainder: &BigInt,
    divisor: &BigInt,
    mode: RoundingMode,
) -> NumResult<bool> {
    // Sign of the exact quotient; the remainder is nonzero, so the dividend
    // is too.
    let negative = remainder.is_negative() != divisor.is_negative();
    Ok(match mode {
        RoundingMode::Unnecessary => {
            return Err(Error::Arithmetic { reason: "rounding necessary" });
        }
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            let doubled = remainder.abs().shl(1);
            match doubled.cmp(&divisor.abs()) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => match mode {
                    RoundingMode::HalfUp => true,
                    RoundingMode::HalfDown => false,
                    _ => quotient.is_odd(),
                },
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn round(x: i64, y: i64, mode: RoundingMode) -> i64 {
        divide_and_round(&int(x), &int(y), mode)
            .unwrap()
            .to_i64()
            .unwrap()
    }

    #[test]
    fn test_exact_quotient_ignores_mode() {
        assert_eq!(round(10, 5, RoundingMode::Unnecessary), 2);
        assert_eq!(round(-10, 5, RoundingMode::Unnecessary), -2);
    }

    #[test]
    fn test_unnecessary_rejects_remainder() {
        let err = divide_and_round(&int(10), &int(3), RoundingMode::Unnecessary);
        assert!(matches!(err, Err(Error::Arithmetic { .. })));
    }

    #[test]
    fn test_directed_modes() {
        assert_eq!(round(7, 2, RoundingMode::Up), 4);
        assert_eq!(round(-7, 2, RoundingMode::Up), -4);
        assert_eq!(round(7, 2, RoundingMode::Down), 3);
        assert_eq!(round(-7, 2, RoundingMode::Down), -3);
        assert_eq!(round(7, 2, RoundingMode::Ceiling), 4);
        assert_eq!(round(-7, 2, RoundingMode::Ceiling), -3);
        assert_eq!(round(7, 2, RoundingMode::Floor), 3);
        assert_eq!(round(-7, 2, RoundingMode::Floor), -4);
    }

    #[test]
    fn test_directed_modes_with_zero_truncated_quotient() {
        assert_eq!(round(1, 3, RoundingMode::Ceiling), 1);
        assert_eq!(round(-1, 3, RoundingMode::Ceiling), 0);
        assert_eq!(round(1, 3, RoundingMode::Floor), 0);
        assert_eq!(round(-1, 3, RoundingMode::Floor), -1);
        assert_eq!(round(1, -3, RoundingMode::Ceiling), 0);
        assert_eq!(round(1, -3, RoundingMode::Floor), -1);
        assert_eq!(round(1, 3, RoundingMode::Up), 1);
        assert_eq!(round(-1, 3, RoundingMode::Up), -1);
    }

    #[test]
    fn test_half_modes() {
        assert_eq!(round(5, 2, RoundingMode::HalfUp), 3);
        assert_eq!(round(5, 2, RoundingMode::HalfDown), 2);
        assert_eq!(round(-5, 2, RoundingMode::HalfUp), -3);
        assert_eq!(round(-5, 2, RoundingMode::HalfDown), -2);
        assert_eq!(round(7, 3, RoundingMode::HalfUp), 2);
        assert_eq!(round(8, 3, RoundingMode::HalfUp), 3);
    }

    #[test]
    fn test_half_even_tiebreak() {
        assert_eq!(round(5, 2, RoundingMode::HalfEven), 2);
        assert_eq!(round(7, 2, RoundingMode::HalfEven), 4);
        assert_eq!(round(-5, 2, RoundingMode::HalfEven), -2);
        assert_eq!(round(-7, 2, RoundingMode::HalfEven), -4);
        // Off the tie, HalfEven behaves like nearest.
        assert_eq!(round(11, 4, RoundingMode::HalfEven), 3);
        assert_eq!(round(9, 4, RoundingMode::HalfEven), 2);
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in [
            RoundingMode::Up,
            RoundingMode::Down,
            RoundingMode::Ceiling,
            RoundingMode::Floor,
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
            RoundingMode::Unnecessary,
        ] {
            assert_eq!(RoundingMode::from_name(&mode.to_string()), Some(mode));
        }
        assert_eq!(RoundingMode::from_name("HALF_SIDEWAYS"), None);
    }
}
