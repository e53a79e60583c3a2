//! Transcendental functions on decimals.
//!
//! Every function takes an explicit target scale (digits right of the
//! decimal point) and truncates its intermediates back to a working scale
//! after each step, so precision never snowballs. Iterative methods run at
//! one extra digit and stop at a tolerance of `5 * 10^-(scale + 1)`, which
//! keeps the final rounding to the caller's scale correct.

use std::cmp::Ordering;

use crate::{
    bigdecimal::BigDecimal,
    bigint::{BigInt, power_of_ten},
    error::{Error, NumResult},
    rounding::{self, RoundingMode},
};

impl BigDecimal {
    /// Raises this value to an integer power at the given scale.
    ///
    /// A negative exponent goes through the reciprocal of the positive
    /// power, rounded half-even.
    ///
    /// # Errors
    /// `OutOfRange` for a negative scale; `Arithmetic` when a negative
    /// exponent meets a zero base.
    pub fn int_power(&self, exponent: i64, scale: i32) -> NumResult<Self> {
        if scale < 0 {
            return Err(Error::OutOfRange { what: "scale must be non-negative" });
        }
        if exponent < 0 {
            let positive = self.int_power_unsigned(exponent.unsigned_abs(), scale)?;
            return Self::one().divide_to_scale(&positive, scale, RoundingMode::HalfEven);
        }
        self.int_power_unsigned(exponent.unsigned_abs(), scale)
    }

    /// Binary exponentiation, both accumulator and base truncated to
    /// `scale` after every multiply.
    fn int_power_unsigned(&self, mut exponent: u64, scale: i32) -> NumResult<Self> {
        let mut power = Self::one();
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                power = power.mul(&base)?.rescale(-scale, RoundingMode::HalfEven)?;
            }
            base = base.mul(&base)?.rescale(-scale, RoundingMode::HalfEven)?;
            exponent >>= 1;
        }
        Ok(power)
    }

    /// The `index`-th root by Newton iteration, one digit above the target
    /// scale.
    ///
    /// The result carries `scale + 1` fraction digits, as produced by the
    /// final `Down` division of the iteration.
    ///
    /// # Errors
    /// `OutOfRange` for a scale below 1 or an unusable index; `Arithmetic`
    /// for a negative operand.
    pub fn int_root(&self, index: u64, scale: i32) -> NumResult<Self> {
        if scale < 1 {
            return Err(Error::OutOfRange { what: "scale must be at least 1" });
        }
        if index == 0 || index > i64::MAX as u64 {
            return Err(Error::OutOfRange { what: "root index" });
        }
        if self.signum() < 0 {
            return Err(Error::Arithmetic { reason: "root of a negative value" });
        }
        let sp1 = scale
            .checked_add(1)
            .ok_or(Error::OutOfRange { what: "scale must leave room for a working digit" })?;
        if self.is_zero() {
            return Ok(Self::new(BigInt::ZERO, -sp1));
        }

        let n = self;
        let index_decimal = Self::from(index as i64);
        let index_minus_one = Self::from(index as i64 - 1);
        let tolerance = Self::new(BigInt::five(), -sp1);

        let mut x = self.divide_to_scale(&index_decimal, scale, RoundingMode::HalfEven)?;
        loop {
            let x_to_im1 = x.int_power(index as i64 - 1, sp1)?;
            let x_to_i = x.mul(&x_to_im1)?.rescale(-sp1, RoundingMode::HalfEven)?;
            let numerator =
                n.add(&index_minus_one.mul(&x_to_i)?).rescale(-sp1, RoundingMode::HalfEven)?;
            let denominator =
                index_decimal.mul(&x_to_im1)?.rescale(-sp1, RoundingMode::HalfEven)?;
            let previous = x;
            x = numerator.divide_to_scale(&denominator, sp1, RoundingMode::Down)?;
            if x.sub(&previous).abs().compare(&tolerance) != Ordering::Greater {
                break;
            }
        }
        Ok(x)
    }

    /// The square root at the given scale.
    ///
    /// Runs integer Newton iteration on `self * 10^(2 * scale)`, seeded just
    /// above the root so the iterates decrease monotonically onto the floor.
    ///
    /// # Errors
    /// `OutOfRange` for a scale below 1; `Arithmetic` for a negative
    /// operand.
    pub fn sqrt(&self, scale: i32) -> NumResult<Self> {
        if scale < 1 {
            return Err(Error::OutOfRange { what: "scale must be at least 1" });
        }
        if self.signum() < 0 {
            return Err(Error::Arithmetic { reason: "square root of a negative value" });
        }
        if self.is_zero() {
            return Ok(Self::new(BigInt::ZERO, -scale));
        }
        let shift = 2 * i128::from(scale) + i128::from(self.exponent());
        let n = if shift >= 0 {
            self.unscaled_value().mul(&power_of_ten(shift as u64))
        } else {
            self.unscaled_value() / &power_of_ten(shift.unsigned_abs() as u64)
        };
        if n.is_zero() {
            return Ok(Self::new(BigInt::ZERO, -scale));
        }
        Ok(Self::new(isqrt(&n), -scale))
    }

    /// `e^self` at the given scale.
    ///
    /// The argument splits into whole and fraction parts; the Taylor series
    /// handles `z = 1 + fraction/whole` and the whole part comes back in by
    /// integer power, chunked through `i64::MAX` when it is enormous.
    ///
    /// # Errors
    /// `OutOfRange` for a scale below 1.
    pub fn exp(&self, scale: i32) -> NumResult<Self> {
        if scale < 1 {
            return Err(Error::OutOfRange { what: "scale must be at least 1" });
        }
        if self.is_zero() {
            return Ok(Self::one());
        }
        if self.signum() < 0 {
            let positive = self.neg().exp(scale)?;
            return Self::one().divide_to_scale(&positive, scale, RoundingMode::HalfEven);
        }
        let whole = self.rescale(0, RoundingMode::Down)?;
        if whole.is_zero() {
            return self.exp_taylor(scale);
        }
        let fraction = self.sub(&whole);
        let z = Self::one().add(&fraction.divide_to_scale(&whole, scale, RoundingMode::HalfEven)?);
        let t = z.exp_taylor(scale)?;

        let max_chunk = Self::from(i64::MAX);
        let mut result = Self::one();
        let mut remaining = whole;
        while remaining.compare(&max_chunk) != Ordering::Less {
            result = result
                .mul(&t.int_power(i64::MAX, scale)?)?
                .rescale(-scale, RoundingMode::HalfEven)?;
            remaining = remaining.sub(&max_chunk);
        }
        let chunk = remaining.to_bigint().to_i64().unwrap_or(0);
        result.mul(&t.int_power(chunk, scale)?)?.rescale(-scale, RoundingMode::HalfEven)
    }

    /// Taylor series for `e^x`: one term per round, stopping once a rounded
    /// term no longer moves the sum.
    fn exp_taylor(&self, scale: i32) -> NumResult<Self> {
        let mut factorial = Self::one();
        let mut x_power = self.clone();
        let mut sum = self.add(&Self::one());
        let mut term_index = 2i64;
        loop {
            x_power = x_power.mul(self)?.rescale(-scale, RoundingMode::HalfEven)?;
            factorial = factorial.mul(&Self::from(term_index))?;
            let term = x_power.divide_to_scale(&factorial, scale, RoundingMode::HalfEven)?;
            let previous = sum.clone();
            sum = sum.add(&term);
            term_index += 1;
            if sum.compare(&previous) == Ordering::Equal {
                return Ok(sum);
            }
        }
    }

    /// The natural logarithm at the given scale.
    ///
    /// Small arguments invert `exp` by Newton directly; wide ones reduce
    /// through `ln(x) = magnitude * ln(x^(1/magnitude))` first.
    ///
    /// # Errors
    /// `OutOfRange` for a scale below 1; `Arithmetic` for a non-positive
    /// operand.
    pub fn ln(&self, scale: i32) -> NumResult<Self> {
        if scale < 1 {
            return Err(Error::OutOfRange { what: "scale must be at least 1" });
        }
        if self.signum() <= 0 {
            return Err(Error::Arithmetic { reason: "logarithm of a non-positive value" });
        }
        let magnitude = self.to_scientific_string().len() as i64 + i64::from(self.exponent()) - 1;
        if magnitude < 3 {
            return self.ln_newton(scale);
        }
        let root = self.int_root(magnitude as u64, scale)?;
        let ln_root = root.ln_newton(scale)?;
        Self::from(magnitude).mul(&ln_root)?.rescale(-scale, RoundingMode::HalfEven)
    }

    /// Newton inversion of `exp`: `x <- x - (e^x - n) / e^x` with `Down`
    /// rounding one digit above the target scale.
    fn ln_newton(&self, scale: i32) -> NumResult<Self> {
        let sp1 = scale
            .checked_add(1)
            .ok_or(Error::OutOfRange { what: "scale must leave room for a working digit" })?;
        let tolerance = Self::new(BigInt::five(), -sp1);
        let mut x = self.clone();
        loop {
            let e_to_x = x.exp(sp1)?;
            let term = e_to_x.sub(self).divide_to_scale(&e_to_x, sp1, RoundingMode::Down)?;
            x = x.sub(&term);
            if term.compare(&tolerance) != Ordering::Greater {
                break;
            }
        }
        x.rescale(-scale, RoundingMode::HalfEven)
    }

    /// Division producing exactly `scale` fraction digits under `mode`.
    fn divide_to_scale(&self, divisor: &Self, scale: i32, mode: RoundingMode) -> NumResult<Self> {
        if divisor.is_zero() {
            return Err(Error::Arithmetic { reason: "division by zero" });
        }
        let shift =
            i128::from(self.exponent()) + i128::from(scale) - i128::from(divisor.exponent());
        let (dividend, divisor_coefficient) = if shift >= 0 {
            (
                self.unscaled_value().mul(&power_of_ten(shift as u64)),
                divisor.unscaled_value().clone(),
            )
        } else {
            (
                self.unscaled_value().clone(),
                divisor.unscaled_value().mul(&power_of_ten(shift.unsigned_abs() as u64)),
            )
        };
        let quotient = rounding::divide_and_round(&dividend, &divisor_coefficient, mode)?;
        Ok(Self::new(quotient, -scale))
    }
}

/// Floor square root of a positive integer.
///
/// Newton iteration seeded at `2^ceil(bits / 2)`, which is at or above the
/// root; from there the iterates strictly decrease until they land on the
/// floor, so termination needs no tolerance.
fn isqrt(n: &BigInt) -> BigInt {
    let seed_bits = n.bit_length().div_ceil(2);
    let mut x = BigInt::one().shl(seed_bits as i64);
    loop {
        let next = x.add(&(n / &x)).shr(1);
        if next >= x {
            return x;
        }
        x = next;
    }
}
