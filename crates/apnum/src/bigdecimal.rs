//! Arbitrary-precision decimals.
//!
//! A `BigDecimal` is a [`BigInt`] coefficient paired with a power-of-ten
//! exponent: the value is `coefficient * 10^exponent`. Addition and
//! comparison align the operands at the smaller exponent; multiplication
//! adds exponents; division and rounding go through the shared
//! [`RoundingMode`] engine. There is no NaN, no infinity, and no negative
//! zero — those states are unrepresentable.

use std::{cmp::Ordering, fmt, hash::Hash, str::FromStr, sync::OnceLock};

use crate::{
    bigint::{BigInt, power_of_ten},
    context::MathContext,
    error::{Error, NumResult},
    locale::Locale,
    radix,
    rounding::{self, RoundingMode},
};

/// The largest exponent `pow` accepts, in magnitude.
const MAX_POW_EXPONENT: u32 = 999_999_999;

/// An immutable arbitrary-precision decimal number.
///
/// Equality is representational: `1.0` and `1.00` differ in exponent and
/// compare unequal under `==` even though [`compare`](Self::compare) ranks
/// them the same. This mirrors the split between numeric ordering and value
/// identity.
#[derive(Debug, Clone)]
pub struct BigDecimal {
    /// The signed unscaled value.
    coefficient: BigInt,
    /// Power of ten the coefficient is scaled by.
    exponent: i32,
    /// Cached decimal digit count of the coefficient; filled on first use.
    precision: OnceLock<u32>,
}

impl BigDecimal {
    /// The value 0 at exponent 0.
    pub const ZERO: BigDecimal =
        BigDecimal { coefficient: BigInt::ZERO, exponent: 0, precision: OnceLock::new() };

    /// Creates a decimal from a coefficient and an exponent.
    #[must_use]
    pub fn new(coefficient: BigInt, exponent: i32) -> Self {
        Self { coefficient, exponent, precision: OnceLock::new() }
    }

    /// The value 1 at exponent 0.
    #[must_use]
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// The signed unscaled value.
    #[must_use]
    pub fn unscaled_value(&self) -> &BigInt {
        &self.coefficient
    }

    /// The power of ten the coefficient is scaled by.
    #[must_use]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Decimal digit count of the coefficient; 1 for zero.
    ///
    /// Computed on first use and cached. The cache is publish-once and never
    /// observable: equality, hashing, and serialization ignore it.
    #[must_use]
    pub fn precision(&self) -> u32 {
        *self.precision.get_or_init(|| self.coefficient.decimal_digits())
    }

    /// −1, 0, or +1.
    #[must_use]
    pub fn signum(&self) -> i32 {
        self.coefficient.signum()
    }

    /// Whether this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.exponent)
    }

    /// The negated value.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coefficient.neg(), self.exponent)
    }

    /// The coefficient rescaled down to `target`, which must not exceed the
    /// current exponent.
    fn aligned_coefficient(&self, target: i32) -> BigInt {
        let diff = i64::from(self.exponent) - i64::from(target);
        debug_assert!(diff >= 0);
        if diff == 0 {
            self.coefficient.clone()
        } else {
            self.coefficient.mul(&power_of_ten(diff as u64))
        }
    }

    /// Adds two decimals after aligning them at the smaller exponent.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let exponent = self.exponent.min(other.exponent);
        let sum = self.aligned_coefficient(exponent).add(&other.aligned_coefficient(exponent));
        Self::new(sum, exponent)
    }

    /// Subtracts `other` from this value.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two decimals; no alignment and no rounding.
    ///
    /// # Errors
    /// `Overflow` when the exponent sum leaves the i32 range on a nonzero
    /// coefficient.
    pub fn mul(&self, other: &Self) -> NumResult<Self> {
        let coefficient = self.coefficient.mul(&other.coefficient);
        let candidate = i128::from(self.exponent) + i128::from(other.exponent);
        let exponent = checked_exponent(candidate, coefficient.is_zero())?;
        Ok(Self::new(coefficient, exponent))
    }

    /// Numeric comparison; `1.0` and `1.00` rank equal here.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let exponent = self.exponent.min(other.exponent);
        self.aligned_coefficient(exponent).cmp(&other.aligned_coefficient(exponent))
    }

    /// Exact division at the preferred exponent.
    ///
    /// The quotient is computed at a working precision wide enough for any
    /// terminating expansion, then stripped back toward the preferred
    /// exponent `self.exponent - other.exponent`.
    ///
    /// # Errors
    /// `Arithmetic` for a zero divisor or a non-terminating expansion.
    pub fn divide(&self, other: &Self) -> NumResult<Self> {
        check_divisor(self, other)?;
        let preferred = clamp_exponent(i128::from(self.exponent) - i128::from(other.exponent));
        if self.is_zero() {
            return Ok(Self::new(BigInt::ZERO, preferred));
        }
        let working = working_precision(self, other, 0);
        let context = MathContext::new(working, RoundingMode::Unnecessary);
        let quotient = self.divide_with_context(other, &context).map_err(|err| match err {
            Error::Arithmetic { .. } => {
                Error::Arithmetic { reason: "non-terminating decimal expansion" }
            }
            other => other,
        })?;
        if quotient.exponent > preferred {
            return quotient.rescale(preferred, RoundingMode::Unnecessary);
        }
        Ok(quotient)
    }

    /// Division rounded to the context's precision.
    ///
    /// The operands are first normalized so the quotient magnitude falls in
    /// (0.1, 1], which pins the digit count of the scaled integer division;
    /// an exact quotient is stripped back toward the preferred exponent.
    ///
    /// # Errors
    /// `Arithmetic` for a zero divisor or when `Unnecessary` rounding would
    /// lose digits; `Overflow` when the result exponent leaves i32.
    pub fn divide_with_context(&self, other: &Self, context: &MathContext) -> NumResult<Self> {
        if context.is_unlimited() {
            return self.divide(other);
        }
        check_divisor(self, other)?;
        let preferred = i128::from(self.exponent) - i128::from(other.exponent);
        if self.is_zero() {
            return Ok(Self::new(BigInt::ZERO, checked_exponent(preferred, true)?));
        }

        let xprec = i64::from(self.precision());
        let yprec = i64::from(other.precision());

        // Pad the shorter coefficient to the longer one's digit count; if
        // the dividend's magnitude then dominates, one extra divisor digit
        // pushes the quotient below 1.
        let x_pad = (yprec - xprec).max(0) as u64;
        let y_pad = (xprec - yprec).max(0) as u64;
        let normalized_x = self.coefficient.abs().mul(&power_of_ten(x_pad));
        let normalized_y = other.coefficient.abs().mul(&power_of_ten(y_pad));
        let adjust = i128::from(normalized_x > normalized_y);
        let mut divisor = other.coefficient.clone();
        if adjust == 1 {
            divisor = divisor.mul(&BigInt::ten());
        }

        let delta = i128::from(context.precision()) - (i128::from(xprec) - i128::from(yprec));
        let mut dividend = self.coefficient.clone();
        if delta > 0 {
            dividend = dividend.mul(&power_of_ten(delta as u64));
        } else if delta < 0 {
            divisor = divisor.mul(&power_of_ten(delta.unsigned_abs() as u64));
        }

        let quotient = rounding::divide_and_round(&dividend, &divisor, context.rounding())?;
        let exponent = checked_exponent(preferred - delta + adjust, quotient.is_zero())?;
        let result = Self::new(quotient, exponent).round(context)?;

        // An exact quotient sheds the scaling zeros down to the preferred
        // exponent.
        let product = result.coefficient.mul(&other.coefficient);
        let product_exponent = i128::from(result.exponent) + i128::from(other.exponent);
        if values_equal(&product, product_exponent, &self.coefficient, i128::from(self.exponent)) {
            return Ok(result.strip_toward(preferred));
        }
        Ok(result)
    }

    /// The integer part of `self / other`, at exponent 0.
    ///
    /// # Errors
    /// `Arithmetic` for a zero divisor.
    pub fn divide_integer(&self, other: &Self) -> NumResult<Self> {
        check_divisor(self, other)?;
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        let span = i128::from(self.exponent) - i128::from(other.exponent);
        let working = working_precision(self, other, span.unsigned_abs().min(u128::from(u32::MAX)) as u64);
        let context = MathContext::new(working, RoundingMode::Down);
        let quotient = self.divide_with_context(other, &context)?;
        quotient.rescale(0, RoundingMode::Down)
    }

    /// The remainder of [`divide_integer`](Self::divide_integer): it carries
    /// the dividend's sign.
    ///
    /// # Errors
    /// `Arithmetic` for a zero divisor.
    pub fn remainder(&self, other: &Self) -> NumResult<Self> {
        let integral = self.divide_integer(other)?;
        Ok(self.sub(&integral.mul(other)?))
    }

    /// Returns this value at a different exponent, rounding under `mode`
    /// when digits are dropped.
    ///
    /// # Errors
    /// `Arithmetic` when `Unnecessary` rounding would lose digits.
    pub fn rescale(&self, new_exponent: i32, mode: RoundingMode) -> NumResult<Self> {
        if new_exponent == self.exponent {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(Self::new(BigInt::ZERO, new_exponent));
        }
        if new_exponent > self.exponent {
            // Dropping digits. Past one digit beyond the precision the
            // quotient is pinned to zero, so the divisor never needs more
            // than precision + 1 zeros.
            let decrease = i64::from(new_exponent) - i64::from(self.exponent);
            let capped = decrease.min(i64::from(self.precision()) + 1);
            let coefficient =
                rounding::divide_and_round(&self.coefficient, &power_of_ten(capped as u64), mode)?;
            return Ok(Self::new(coefficient, new_exponent));
        }
        let increase = i64::from(self.exponent) - i64::from(new_exponent);
        Ok(Self::new(self.coefficient.mul(&power_of_ten(increase as u64)), new_exponent))
    }

    /// Rescales to `other`'s exponent under `mode`.
    ///
    /// # Errors
    /// `Arithmetic` when `Unnecessary` rounding would lose digits.
    pub fn quantize(&self, other: &Self, mode: RoundingMode) -> NumResult<Self> {
        self.rescale(other.exponent, mode)
    }

    /// Rounds to the context's precision.
    ///
    /// # Errors
    /// `Arithmetic` when `Unnecessary` rounding would lose digits;
    /// `Overflow` when the adjusted exponent leaves i32.
    pub fn round(&self, context: &MathContext) -> NumResult<Self> {
        if context.is_unlimited() {
            return Ok(self.clone());
        }
        let precision = self.precision();
        if precision <= context.precision() {
            return Ok(self.clone());
        }
        let drop = precision - context.precision();
        let coefficient = rounding::divide_and_round(
            &self.coefficient,
            &power_of_ten(u64::from(drop)),
            context.rounding(),
        )?;
        let exponent =
            checked_exponent(i128::from(self.exponent) + i128::from(drop), coefficient.is_zero())?;
        let result = Self::new(coefficient, exponent);
        if result.precision() > context.precision() {
            // Rounding can promote (99 -> 100); one more pass settles it.
            return result.round(context);
        }
        Ok(result)
    }

    /// Raises to a non-negative power exactly.
    ///
    /// # Errors
    /// `OutOfRange` when `exponent` exceeds 999 999 999; `Overflow` when the
    /// result exponent leaves i32.
    pub fn pow(&self, exponent: u32) -> NumResult<Self> {
        if exponent > MAX_POW_EXPONENT {
            return Err(Error::OutOfRange { what: "power exponent exceeds 999999999" });
        }
        let coefficient = self.coefficient.pow(exponent)?;
        let candidate = i128::from(self.exponent) * i128::from(exponent);
        let exponent = checked_exponent(candidate, coefficient.is_zero())?;
        Ok(Self::new(coefficient, exponent))
    }

    /// Raises to a power under a context, negative exponents through the
    /// reciprocal.
    ///
    /// The walk over the exponent's 31 bits squares and multiplies at an
    /// elevated precision of `context.precision() + digits(|n|) + 1` so the
    /// final rounding back to the context is correct.
    ///
    /// # Errors
    /// `OutOfRange` when `|n|` exceeds 999 999 999, when the context demands
    /// more digits than it allows, or for a negative exponent under an
    /// unlimited context.
    pub fn pow_with_context(&self, n: i32, context: &MathContext) -> NumResult<Self> {
        let magnitude = n.unsigned_abs();
        if magnitude > MAX_POW_EXPONENT {
            return Err(Error::OutOfRange { what: "power exponent exceeds 999999999" });
        }
        if context.is_unlimited() {
            if n < 0 {
                return Err(Error::OutOfRange { what: "negative power needs a bounded context" });
            }
            return self.pow(magnitude);
        }
        let exponent_digits = BigInt::from(magnitude).decimal_digits();
        if exponent_digits > context.precision() {
            return Err(Error::OutOfRange { what: "power exponent wider than the context" });
        }
        let elevated =
            MathContext::new(context.precision() + exponent_digits + 1, context.rounding());

        let mut acc = Self::one();
        let mut seen_bit = false;
        let mut walker = magnitude;
        for step in 1..=31u32 {
            walker <<= 1;
            if walker & (1 << 31) != 0 {
                seen_bit = true;
                acc = acc.mul(self)?.round(&elevated)?;
            }
            if step == 31 {
                break;
            }
            if seen_bit {
                acc = acc.mul(&acc)?.round(&elevated)?;
            }
        }
        if n < 0 {
            acc = Self::one().divide_with_context(&acc, &elevated)?;
        }
        acc.round(context)
    }

    /// Moves the decimal point `places` to the left.
    ///
    /// The exponent never goes above zero: surplus places scale the
    /// coefficient instead.
    ///
    /// # Errors
    /// `Overflow` when the exponent leaves i32.
    pub fn move_point_left(&self, places: i32) -> NumResult<Self> {
        self.with_moved_point(i128::from(self.exponent) - i128::from(places))
    }

    /// Moves the decimal point `places` to the right.
    ///
    /// # Errors
    /// `Overflow` when the exponent leaves i32.
    pub fn move_point_right(&self, places: i32) -> NumResult<Self> {
        self.with_moved_point(i128::from(self.exponent) + i128::from(places))
    }

    fn with_moved_point(&self, candidate: i128) -> NumResult<Self> {
        if candidate <= 0 {
            return Ok(Self::new(
                self.coefficient.clone(),
                checked_exponent(candidate, self.is_zero())?,
            ));
        }
        let scaled = checked_exponent(candidate, self.is_zero())?;
        Ok(Self::new(self.coefficient.mul(&power_of_ten(scaled.unsigned_abs().into())), 0))
    }

    /// Scales by `10^n` by adjusting the exponent only.
    ///
    /// # Errors
    /// `Overflow` when the exponent leaves i32 on a nonzero coefficient.
    pub fn scale_by_power_of_ten(&self, n: i32) -> NumResult<Self> {
        let candidate = i128::from(self.exponent) + i128::from(n);
        Ok(Self::new(self.coefficient.clone(), checked_exponent(candidate, self.is_zero())?))
    }

    /// Removes trailing zeros from the coefficient, raising the exponent to
    /// match. Zero collapses to exponent 0.
    #[must_use]
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.is_zero() {
            return Self::new(BigInt::ZERO, 0);
        }
        self.strip_toward(i128::from(i32::MAX))
    }

    /// Strips trailing zeros until the exponent reaches `preferred` or no
    /// zeros remain.
    fn strip_toward(&self, preferred: i128) -> Self {
        let mut coefficient = self.coefficient.clone();
        let mut exponent = i128::from(self.exponent);
        while exponent < preferred && exponent < i128::from(i32::MAX) && !coefficient.is_zero() {
            let (quotient, rem) = coefficient.div_rem_u32(10);
            if rem != 0 {
                break;
            }
            coefficient = quotient;
            exponent += 1;
        }
        Self::new(coefficient, exponent as i32)
    }

    /// The larger of two values under numeric comparison; ties keep `self`.
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        match self.compare(other) {
            Ordering::Less => other.clone(),
            _ => self.clone(),
        }
    }

    /// The smaller of two values under numeric comparison; ties keep `self`.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        match self.compare(other) {
            Ordering::Greater => other.clone(),
            _ => self.clone(),
        }
    }

    /// One unit in the last place of this value.
    #[must_use]
    pub fn ulp(&self) -> Self {
        Self::new(BigInt::one(), self.exponent)
    }

    /// The integer part, truncated toward zero.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        if self.exponent >= 0 {
            self.coefficient.mul(&power_of_ten(u64::from(self.exponent.unsigned_abs())))
        } else {
            &self.coefficient / &power_of_ten(u64::from(self.exponent.unsigned_abs()))
        }
    }

    /// The nearest double; huge values saturate to the infinities.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.coefficient.to_f64() * 10f64.powi(self.exponent)
    }

    /// Builds the exact decimal expansion of an IEEE-754 double.
    ///
    /// A finite double is `n * 2^k`; for negative `k` this becomes
    /// `n * 5^-k * 10^k`, which is exact.
    ///
    /// # Errors
    /// `Overflow` for NaN and the infinities.
    pub fn from_f64(value: f64) -> NumResult<Self> {
        if value.is_nan() || value.is_infinite() {
            return Err(Error::Overflow { what: "non-finite double" });
        }
        if value == 0.0 {
            return Ok(Self::ZERO);
        }
        let bits = value.to_bits();
        let negative = bits >> 63 != 0;
        let biased_exponent = ((bits >> 52) & 0x7FF) as i32;
        let fraction = bits & ((1u64 << 52) - 1);
        let (significand, exponent_two) = if biased_exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | 1 << 52, biased_exponent - 1075)
        };
        let mut coefficient = BigInt::from(significand);
        let mut exponent_ten = 0i32;
        if exponent_two >= 0 {
            coefficient = coefficient.shl(i64::from(exponent_two));
        } else {
            let power = exponent_two.unsigned_abs();
            coefficient = coefficient.mul(&BigInt::five().pow(power)?);
            exponent_ten = exponent_two;
        }
        if negative {
            coefficient = coefficient.neg();
        }
        Ok(Self::new(coefficient, exponent_ten))
    }

    /// Parses with the default locale.
    ///
    /// # Errors
    /// `Format` for malformed input; `Overflow` when the exponent leaves
    /// i32 on a nonzero coefficient.
    pub fn parse(input: &str) -> NumResult<Self> {
        Self::parse_with_locale(input, &Locale::default())
    }

    /// Parses `[+-]?digits[.digits][(e|E)[+-]?digits]`, taking the decimal
    /// separator from `locale`.
    ///
    /// # Errors
    /// `Format` for malformed input; `Overflow` when the exponent leaves
    /// i32 on a nonzero coefficient.
    pub fn parse_with_locale(input: &str, locale: &Locale) -> NumResult<Self> {
        let (mantissa, exponent_text) = match input.find(['e', 'E']) {
            Some(position) => (&input[..position], Some(&input[position + 1..])),
            None => (input, None),
        };
        let explicit_exponent: i64 = match exponent_text {
            None => 0,
            Some(text) => {
                text.parse().map_err(|_| Error::Format { reason: "invalid exponent" })?
            }
        };
        let (sign, unsigned) = match mantissa.as_bytes().first() {
            None => return Err(Error::Format { reason: "empty string" }),
            Some(b'+') => ("", &mantissa[1..]),
            Some(b'-') => ("-", &mantissa[1..]),
            Some(_) => ("", mantissa),
        };
        let separator = locale.decimal_separator();
        let (integer_part, fraction_part) = match unsigned.find(separator) {
            Some(position) => (&unsigned[..position], &unsigned[position + separator.len()..]),
            None => (unsigned, ""),
        };
        if integer_part.is_empty() && fraction_part.is_empty() {
            return Err(Error::Format { reason: "no digits" });
        }
        let mut digits =
            String::with_capacity(sign.len() + integer_part.len() + fraction_part.len());
        digits.push_str(sign);
        digits.push_str(integer_part);
        digits.push_str(fraction_part);
        // Radix-10 parsing rejects every stray character, including a second
        // separator.
        let coefficient = radix::parse(&digits, 10)?;
        let candidate = i128::from(explicit_exponent) - fraction_part.len() as i128;
        let exponent = checked_exponent(candidate, coefficient.is_zero())?;
        Ok(Self::new(coefficient, exponent))
    }

    /// Scientific notation with the default locale; plain notation when the
    /// exponent is at most zero and the adjusted exponent at least −6.
    #[must_use]
    pub fn to_scientific_string(&self) -> String {
        self.format_with_locale(&Locale::default())
    }

    /// Scientific notation, taking the decimal separator from `locale`.
    #[must_use]
    pub fn format_with_locale(&self, locale: &Locale) -> String {
        let digits = self.coefficient.abs().to_string();
        let sign = if self.coefficient.is_negative() { "-" } else { "" };
        let length = digits.len() as i64;
        let adjusted = i64::from(self.exponent) + length - 1;
        let separator = locale.decimal_separator();
        if self.exponent <= 0 && adjusted >= -6 {
            let point = length + i64::from(self.exponent);
            if point > 0 {
                let (integer, fraction) = digits.split_at(point as usize);
                if fraction.is_empty() {
                    format!("{sign}{integer}")
                } else {
                    format!("{sign}{integer}{separator}{fraction}")
                }
            } else {
                let zeros = "0".repeat((-point) as usize);
                format!("{sign}0{separator}{zeros}{digits}")
            }
        } else if length == 1 {
            format!("{sign}{digits}E{adjusted:+}")
        } else {
            let (first, rest) = digits.split_at(1);
            format!("{sign}{first}{separator}{rest}E{adjusted:+}")
        }
    }

    /// Positional notation with no exponent marker, however long it gets.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let digits = self.coefficient.abs().to_string();
        let sign = if self.coefficient.is_negative() { "-" } else { "" };
        if self.exponent >= 0 {
            if self.is_zero() {
                return "0".to_string();
            }
            let zeros = "0".repeat(self.exponent.unsigned_abs() as usize);
            return format!("{sign}{digits}{zeros}");
        }
        let point = digits.len() as i64 + i64::from(self.exponent);
        if point > 0 {
            let (integer, fraction) = digits.split_at(point as usize);
            format!("{sign}{integer}.{fraction}")
        } else {
            let zeros = "0".repeat((-point) as usize);
            format!("{sign}0.{zeros}{digits}")
        }
    }

    /// Engineering notation: the exponent is forced to a multiple of three.
    #[must_use]
    pub fn to_engineering_string(&self) -> String {
        let digits = self.coefficient.abs().to_string();
        let adjusted = i64::from(self.exponent) + digits.len() as i64 - 1;
        if self.exponent <= 0 && adjusted >= -6 {
            return self.to_scientific_string();
        }
        let sign = if self.coefficient.is_negative() { "-" } else { "" };
        let engineering_exponent = adjusted - adjusted.rem_euclid(3);
        let integer_digits = (adjusted - engineering_exponent + 1) as usize;
        let mut significand = digits;
        if significand.len() < integer_digits {
            let padding = integer_digits - significand.len();
            significand.push_str(&"0".repeat(padding));
        }
        if integer_digits >= significand.len() {
            format!("{sign}{significand}E{engineering_exponent:+}")
        } else {
            let (integer, fraction) = significand.split_at(integer_digits);
            format!("{sign}{integer}.{fraction}E{engineering_exponent:+}")
        }
    }
}

/// Narrows a candidate exponent to i32.
///
/// A zero coefficient clamps to the nearest bound instead of failing; any
/// other loss of information is an overflow.
pub(crate) fn checked_exponent(candidate: i128, zero_coefficient: bool) -> NumResult<i32> {
    match i32::try_from(candidate) {
        Ok(exponent) => Ok(exponent),
        Err(_) if zero_coefficient => Ok(clamp_exponent(candidate)),
        Err(_) => Err(Error::Overflow { what: "decimal exponent" }),
    }
}

/// Saturates a candidate exponent into the i32 range.
fn clamp_exponent(candidate: i128) -> i32 {
    candidate.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

/// Rejects zero divisors, distinguishing `0/0`.
fn check_divisor(dividend: &BigDecimal, divisor: &BigDecimal) -> NumResult<()> {
    if !divisor.is_zero() {
        return Ok(());
    }
    if dividend.is_zero() {
        Err(Error::Arithmetic { reason: "division undefined (0/0)" })
    } else {
        Err(Error::Arithmetic { reason: "division by zero" })
    }
}

/// Working precision wide enough to hold any terminating quotient:
/// `precision(a) + ceil(10 * precision(b) / 3) + extra`, capped at i32::MAX.
fn working_precision(a: &BigDecimal, b: &BigDecimal, extra: u64) -> u32 {
    let wide = i128::from(a.precision())
        + i128::from((b.precision() as u64 * 10).div_ceil(3))
        + i128::from(extra);
    wide.min(i128::from(i32::MAX)) as u32
}

/// Whether two coefficient/exponent pairs denote the same value.
fn values_equal(c1: &BigInt, e1: i128, c2: &BigInt, e2: i128) -> bool {
    let target = e1.min(e2);
    let a = scale_up(c1, (e1 - target) as u64);
    let b = scale_up(c2, (e2 - target) as u64);
    a == b
}

fn scale_up(coefficient: &BigInt, by: u64) -> BigInt {
    if by == 0 { coefficient.clone() } else { coefficient.mul(&power_of_ten(by)) }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.exponent == other.exponent && self.coefficient == other.coefficient
    }
}

impl Eq for BigDecimal {}

impl Hash for BigDecimal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coefficient.hash(state);
        self.exponent.hash(state);
    }
}

impl PartialOrd for BigDecimal {
    /// Numeric order: representations of the same value rank equal even
    /// when `==` distinguishes them.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_scientific_string())
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    fn from_str(input: &str) -> NumResult<Self> {
        Self::parse(input)
    }
}

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<i32> for BigDecimal {
    fn from(value: i32) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<u32> for BigDecimal {
    fn from(value: u32) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<u64> for BigDecimal {
    fn from(value: u64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl serde::Serialize for BigDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for BigDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
