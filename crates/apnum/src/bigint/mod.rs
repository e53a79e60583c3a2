//! Signed arbitrary-precision integers.
//!
//! `BigInt` pairs a sign with a big-endian magnitude and dispatches all digit
//! work to the magnitude primitives. Values are immutable: every operation
//! returns a fresh instance.

mod bits;
mod convert;

use std::{cmp::Ordering, fmt, str::FromStr};

use num_traits::{Num, One, Signed, Zero};

use crate::{
    error::{Error, NumResult},
    magnitude::{self, Digits},
    radix,
};

/// Sign of a [`BigInt`]: negative, zero, or positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Sign {
    /// Below zero.
    Minus,
    /// Exactly zero.
    Zero,
    /// Above zero.
    Plus,
}

impl Sign {
    /// −1, 0, or +1.
    #[must_use]
    pub const fn signum(self) -> i32 {
        match self {
            Self::Minus => -1,
            Self::Zero => 0,
            Self::Plus => 1,
        }
    }

    const fn flip(self) -> Self {
        match self {
            Self::Minus => Self::Plus,
            Self::Zero => Self::Zero,
            Self::Plus => Self::Minus,
        }
    }
}

/// An immutable signed integer of unbounded magnitude.
///
/// The magnitude is stored most significant digit first and never carries a
/// leading zero; a zero value has an empty magnitude and [`Sign::Zero`].
/// Together these give every mathematical value exactly one representation,
/// so equality is plain field equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: Digits,
}

/// The largest exponent `pow` accepts.
const MAX_POW_EXPONENT: u32 = 999_999_999;

static POW10_U64: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < 20 {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// `10^exp` as a [`BigInt`]; small exponents come from a u64 table.
pub(crate) fn power_of_ten(exp: u64) -> BigInt {
    if let Some(&small) = POW10_U64.get(exp as usize) {
        return BigInt::from(small);
    }
    let mut acc = BigInt::from(POW10_U64[(exp % 19) as usize]);
    let mut base = BigInt::from(POW10_U64[19]);
    let mut remaining = exp / 19;
    while remaining > 0 {
        if remaining & 1 == 1 {
            acc = acc.mul(&base);
        }
        remaining >>= 1;
        if remaining > 0 {
            base = base.mul(&base);
        }
    }
    acc
}

impl BigInt {
    /// The value 0.
    pub const ZERO: BigInt = BigInt { sign: Sign::Zero, magnitude: Digits::new_const() };

    /// The value 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from(1u32)
    }

    /// The value 2.
    #[must_use]
    pub fn two() -> Self {
        Self::from(2u32)
    }

    /// The value 5.
    #[must_use]
    pub fn five() -> Self {
        Self::from(5u32)
    }

    /// The value 10.
    #[must_use]
    pub fn ten() -> Self {
        Self::from(10u32)
    }

    /// The value −1.
    #[must_use]
    pub fn neg_one() -> Self {
        Self::from(-1i32)
    }

    /// Builds a value from a sign and a big-endian magnitude.
    ///
    /// Leading zero digits are trimmed first.
    ///
    /// # Errors
    /// `Format` when the sign and the trimmed magnitude disagree about being
    /// zero.
    pub fn from_sign_magnitude(sign: Sign, magnitude: &[u32]) -> NumResult<Self> {
        let mut digits = Digits::from_slice(magnitude);
        magnitude::trim(&mut digits);
        match (sign, digits.is_empty()) {
            (Sign::Zero, true) => Ok(Self::ZERO),
            (Sign::Zero, false) => Err(Error::Format { reason: "zero sign with nonzero magnitude" }),
            (_, true) => Err(Error::Format { reason: "nonzero sign with empty magnitude" }),
            (sign, false) => Ok(Self { sign, magnitude: digits }),
        }
    }

    /// Internal constructor: trims and fixes up the sign of a zero result.
    pub(crate) fn from_parts(sign: Sign, mut magnitude: Digits) -> Self {
        magnitude::trim(&mut magnitude);
        if magnitude.is_empty() {
            return Self::ZERO;
        }
        debug_assert_ne!(sign, Sign::Zero);
        Self { sign, magnitude }
    }

    /// The sign of this value.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// −1, 0, or +1.
    #[must_use]
    pub fn signum(&self) -> i32 {
        self.sign.signum()
    }

    /// Whether this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Whether this value is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus
    }

    /// Whether this value is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// The big-endian magnitude digits.
    pub(crate) fn digits(&self) -> &[u32] {
        &self.magnitude
    }

    /// The sign and a copy of the big-endian magnitude.
    #[must_use]
    pub fn to_sign_magnitude(&self) -> (Sign, Vec<u32>) {
        (self.sign, self.magnitude.to_vec())
    }

    /// Whether the least significant bit is set.
    pub(crate) fn is_odd(&self) -> bool {
        self.magnitude.last().is_some_and(|&d| d & 1 == 1)
    }

    /// Number of trailing zero bits in the magnitude.
    pub(crate) fn trailing_zeros(&self) -> u64 {
        magnitude::trailing_zero_bits(&self.magnitude)
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Minus => self.neg(),
            _ => self.clone(),
        }
    }

    /// The negated value.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self { sign: self.sign.flip(), magnitude: self.magnitude.clone() }
    }

    /// Adds two values.
    ///
    /// Matching signs add magnitudes under the common sign; opposite signs
    /// subtract the smaller magnitude from the larger under the larger's
    /// sign.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match (self.sign, other.sign) {
            (Sign::Zero, _) => other.clone(),
            (_, Sign::Zero) => self.clone(),
            (a, b) if a == b => {
                Self::from_parts(a, magnitude::add(&self.magnitude, &other.magnitude))
            }
            _ => match magnitude::cmp(&self.magnitude, &other.magnitude) {
                Ordering::Equal => Self::ZERO,
                Ordering::Greater => {
                    Self::from_parts(self.sign, magnitude::sub(&self.magnitude, &other.magnitude))
                }
                Ordering::Less => {
                    Self::from_parts(other.sign, magnitude::sub(&other.magnitude, &self.magnitude))
                }
            },
        }
    }

    /// Subtracts `other` from this value.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two values.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::ZERO;
        }
        let sign = if self.sign == other.sign { Sign::Plus } else { Sign::Minus };
        Self::from_parts(sign, magnitude::mul(&self.magnitude, &other.magnitude))
    }

    /// Truncating division with remainder.
    ///
    /// The quotient carries the product of the operand signs; the remainder
    /// carries the dividend's sign.
    ///
    /// # Errors
    /// `DivideByZero` when `other` is zero.
    pub fn div_rem(&self, other: &Self) -> NumResult<(Self, Self)> {
        if other.is_zero() {
            return Err(Error::DivideByZero);
        }
        if self.is_zero() {
            return Ok((Self::ZERO, Self::ZERO));
        }
        let (quotient, rem) = magnitude::div_rem(&self.magnitude, &other.magnitude);
        let sign = if self.sign == other.sign { Sign::Plus } else { Sign::Minus };
        Ok((Self::from_parts(sign, quotient), Self::from_parts(self.sign, rem)))
    }

    /// The truncating quotient, or `None` for a zero divisor.
    #[must_use]
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        self.div_rem(other).ok().map(|(quotient, _)| quotient)
    }

    /// The remainder of truncating division, or `None` for a zero divisor.
    #[must_use]
    pub fn checked_rem(&self, other: &Self) -> Option<Self> {
        self.div_rem(other).ok().map(|(_, rem)| rem)
    }

    /// Divides by a single nonzero digit, returning the remainder's
    /// magnitude.
    pub(crate) fn div_rem_u32(&self, divisor: u32) -> (Self, u32) {
        debug_assert_ne!(divisor, 0);
        if self.is_zero() {
            return (Self::ZERO, 0);
        }
        let (quotient, rem) = magnitude::div_rem_digit(&self.magnitude, divisor);
        (Self::from_parts(self.sign, quotient), rem)
    }

    /// Raises this value to a non-negative power by repeated squaring.
    ///
    /// # Errors
    /// `OutOfRange` when `exponent` exceeds 999 999 999.
    pub fn pow(&self, exponent: u32) -> NumResult<Self> {
        if exponent > MAX_POW_EXPONENT {
            return Err(Error::OutOfRange { what: "power exponent exceeds 999999999" });
        }
        if exponent == 0 {
            return Ok(Self::one());
        }
        let mut acc = Self::one();
        let mut base = self.clone();
        let mut remaining = exponent;
        loop {
            if remaining & 1 == 1 {
                acc = acc.mul(&base);
            }
            remaining >>= 1;
            if remaining == 0 {
                break;
            }
            base = base.mul(&base);
        }
        Ok(acc)
    }

    /// `self^exponent mod modulus`, reducing after every multiply.
    ///
    /// # Errors
    /// `OutOfRange` for a negative exponent; `DivideByZero` for a zero
    /// modulus.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> NumResult<Self> {
        if exponent.is_negative() {
            return Err(Error::OutOfRange { what: "negative modular power exponent" });
        }
        let mut acc = Self::one().div_rem(modulus)?.1;
        if exponent.is_zero() {
            return Ok(acc);
        }
        let mut base = self.div_rem(modulus)?.1;
        let bits = exponent.bit_length();
        for index in 0..bits {
            if exponent.test_bit(index) {
                acc = acc.mul(&base).div_rem(modulus)?.1;
            }
            if index + 1 < bits {
                base = base.mul(&base).div_rem(modulus)?.1;
            }
        }
        Ok(acc)
    }

    /// Greatest common divisor of the absolute values.
    ///
    /// Euclidean steps close the gap while the operands differ by two or
    /// more digits in length, then Stein's binary algorithm finishes.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        let mut a = self.abs();
        let mut b = other.abs();
        loop {
            if b.is_zero() {
                return a;
            }
            if a.magnitude.len().abs_diff(b.magnitude.len()) < 2 {
                return binary_gcd(&a, &b);
            }
            let rem = match a.div_rem(&b) {
                Ok((_, rem)) => rem,
                Err(_) => unreachable!(),
            };
            a = b;
            b = rem;
        }
    }

    /// Number of decimal digits in the magnitude; 1 for zero.
    ///
    /// Counts nine digits per division by 10^9, plus the digits of the
    /// final single-word residue.
    #[must_use]
    pub fn decimal_digits(&self) -> u32 {
        if self.is_zero() {
            return 1;
        }
        let mut work: Digits = self.magnitude.clone();
        let mut digits = 0u32;
        let mut start = 0usize;
        while work.len() - start > 1 {
            magnitude::div_rem_digit_in_place(&mut work[start..], 1_000_000_000);
            digits += 9;
            while start < work.len() && work[start] == 0 {
                start += 1;
            }
        }
        let residue = work.get(start).copied().unwrap_or(0);
        digits + digits_in_word(residue)
    }

    /// Parses a string in the given radix (2..=36).
    ///
    /// # Errors
    /// `OutOfRange` for a bad radix, `Format` for a malformed string.
    pub fn parse_radix(input: &str, radix: u32) -> NumResult<Self> {
        radix::parse(input, radix)
    }

    /// Formats this value in the given radix (2..=36).
    ///
    /// # Errors
    /// `OutOfRange` for a bad radix.
    pub fn to_str_radix(&self, radix: u32) -> NumResult<String> {
        radix::format(self, radix)
    }
}

/// Decimal digit count of one word.
fn digits_in_word(value: u32) -> u32 {
    let mut digits = 1;
    let mut threshold = 10u64;
    while u64::from(value) >= threshold {
        digits += 1;
        threshold *= 10;
    }
    digits
}

/// Stein's algorithm on two nonzero values of similar length.
fn binary_gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let shift_a = a.trailing_zeros();
    let shift_b = b.trailing_zeros();
    let common_twos = shift_a.min(shift_b);
    let mut u = a.shr_bits(shift_a);
    let mut v = b.shr_bits(shift_b);
    // u and v are odd from here on; the difference of two odd values is
    // even, so each round strips at least one bit.
    loop {
        match u.cmp(&v) {
            Ordering::Equal => break,
            Ordering::Greater => {
                let diff = u.sub(&v);
                u = diff.shr_bits(diff.trailing_zeros());
            }
            Ordering::Less => {
                let diff = v.sub(&u);
                v = diff.shr_bits(diff.trailing_zeros());
            }
        }
    }
    u.shl_bits(common_twos)
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Plus => magnitude::cmp(&self.magnitude, &other.magnitude),
            Sign::Minus => magnitude::cmp(&other.magnitude, &self.magnitude),
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match radix::format(self, 10) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(input: &str) -> NumResult<Self> {
        radix::parse(input, 10)
    }
}

// --- operator glue ---

impl std::ops::Add<&BigInt> for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(self, rhs)
    }
}

impl std::ops::Add for BigInt {
    type Output = BigInt;
    fn add(self, rhs: BigInt) -> BigInt {
        BigInt::add(&self, &rhs)
    }
}

impl std::ops::Sub<&BigInt> for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(self, rhs)
    }
}

impl std::ops::Sub for BigInt {
    type Output = BigInt;
    fn sub(self, rhs: BigInt) -> BigInt {
        BigInt::sub(&self, &rhs)
    }
}

impl std::ops::Mul<&BigInt> for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl std::ops::Mul for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: BigInt) -> BigInt {
        BigInt::mul(&self, &rhs)
    }
}

impl std::ops::Div<&BigInt> for &BigInt {
    type Output = BigInt;
    fn div(self, rhs: &BigInt) -> BigInt {
        match self.checked_div(rhs) {
            Some(quotient) => quotient,
            None => panic!("division by zero"),
        }
    }
}

impl std::ops::Div for BigInt {
    type Output = BigInt;
    fn div(self, rhs: BigInt) -> BigInt {
        &self / &rhs
    }
}

impl std::ops::Rem<&BigInt> for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.checked_rem(rhs) {
            Some(rem) => rem,
            None => panic!("division by zero"),
        }
    }
}

impl std::ops::Rem for BigInt {
    type Output = BigInt;
    fn rem(self, rhs: BigInt) -> BigInt {
        &self % &rhs
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}

impl std::ops::Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::neg(&self)
    }
}

// --- num-traits integration ---

impl Zero for BigInt {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::one()
    }
}

impl Num for BigInt {
    type FromStrRadixErr = Error;

    fn from_str_radix(input: &str, radix: u32) -> NumResult<Self> {
        radix::parse(input, radix)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other { Self::ZERO } else { self.sub(other) }
    }

    fn signum(&self) -> Self {
        Self::from(BigInt::signum(self))
    }

    fn is_positive(&self) -> bool {
        BigInt::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl serde::Serialize for BigInt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    #[test]
    fn test_canonical_representation() {
        assert!(BigInt::ZERO.digits().is_empty());
        assert_eq!(BigInt::ZERO.sign(), Sign::Zero);
        let trimmed = BigInt::from_sign_magnitude(Sign::Plus, &[0, 0, 5]).unwrap();
        assert_eq!(trimmed.digits(), &[5]);
    }

    #[test]
    fn test_from_sign_magnitude_validation() {
        assert!(BigInt::from_sign_magnitude(Sign::Zero, &[0, 0]).is_ok());
        assert!(matches!(
            BigInt::from_sign_magnitude(Sign::Zero, &[1]),
            Err(Error::Format { .. })
        ));
        assert!(matches!(
            BigInt::from_sign_magnitude(Sign::Plus, &[0]),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn test_add_sign_dispatch() {
        assert_eq!(int("7").add(&int("-7")), BigInt::ZERO);
        assert_eq!(int("7").add(&int("-3")), int("4"));
        assert_eq!(int("-7").add(&int("3")), int("-4"));
        assert_eq!(int("-7").add(&int("-3")), int("-10"));
        assert_eq!(int("0").add(&int("-3")), int("-3"));
    }

    #[test]
    fn test_add_sub_round_trip() {
        let a = int("123456789012345678901234567890");
        let b = int("-98765432109876543210");
        assert_eq!(a.add(&b).sub(&b), a);
        assert_eq!(b.add(&a).sub(&a), b);
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(int("-4").mul(&int("-5")), int("20"));
        assert_eq!(int("-4").mul(&int("5")), int("-20"));
        assert_eq!(int("4").mul(&int("0")), BigInt::ZERO);
    }

    #[test]
    fn test_div_rem_signs_and_identity() {
        for (x, y) in [("7", "3"), ("-7", "3"), ("7", "-3"), ("-7", "-3")] {
            let (x, y) = (int(x), int(y));
            let (quotient, rem) = x.div_rem(&y).unwrap();
            assert_eq!(quotient.mul(&y).add(&rem), x);
            assert!(rem.abs() < y.abs());
            assert!(rem.is_zero() || rem.signum() == x.signum());
        }
        assert_eq!(int("7").div_rem(&int("3")).unwrap().0, int("2"));
        assert_eq!(int("-7").div_rem(&int("3")).unwrap().0, int("-2"));
        assert!(matches!(int("1").div_rem(&BigInt::ZERO), Err(Error::DivideByZero)));
    }

    #[test]
    fn test_pow() {
        assert_eq!(BigInt::ZERO.pow(0).unwrap(), BigInt::one());
        assert_eq!(int("3").pow(5).unwrap(), int("243"));
        assert_eq!(int("-2").pow(9).unwrap(), int("-512"));
        assert_eq!(int("10").pow(30).unwrap(), int("1000000000000000000000000000000"));
        assert!(matches!(int("2").pow(1_000_000_000), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_mod_pow() {
        let base = int("4");
        assert_eq!(base.mod_pow(&int("13"), &int("497")).unwrap(), int("445"));
        let big = int("123456789");
        let exp = int("1000");
        let modulus = int("99991");
        let expected = big.pow(1000).unwrap().div_rem(&modulus).unwrap().1;
        assert_eq!(big.mod_pow(&exp, &modulus).unwrap(), expected);
        assert!(matches!(
            base.mod_pow(&int("-1"), &int("7")),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(int("0").gcd(&int("-6")), int("6"));
        assert_eq!(int("12").gcd(&int("0")), int("12"));
        assert_eq!(int("12").gcd(&int("18")), int("6"));
        assert_eq!(int("-12").gcd(&int("18")), int("6"));
        assert_eq!(int("17").gcd(&int("31")), int("1"));
        // Length gap forces the Euclidean phase before Stein takes over.
        let a = int("10").pow(30).unwrap();
        let b = int("96");
        assert_eq!(a.gcd(&b), int("32"));
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(BigInt::ZERO.decimal_digits(), 1);
        assert_eq!(int("9").decimal_digits(), 1);
        assert_eq!(int("10").decimal_digits(), 2);
        assert_eq!(int("-999999999").decimal_digits(), 9);
        assert_eq!(int("1000000000").decimal_digits(), 10);
        assert_eq!(int("123456789012345678901234567890").decimal_digits(), 30);
    }

    #[test]
    fn test_ordering() {
        assert!(int("-10") < int("-9"));
        assert!(int("-1") < BigInt::ZERO);
        assert!(BigInt::ZERO < int("1"));
        assert!(int("9") < int("10"));
        assert!(int("12345678901234567890") > int("12345678901234567889"));
    }

    #[test]
    fn test_operator_glue() {
        let a = int("100");
        let b = int("7");
        assert_eq!(&a + &b, int("107"));
        assert_eq!(&a - &b, int("93"));
        assert_eq!(&a * &b, int("700"));
        assert_eq!(&a / &b, int("14"));
        assert_eq!(&a % &b, int("2"));
        assert_eq!(-a, int("-100"));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = int("1") / BigInt::ZERO;
    }

    #[test]
    fn test_power_of_ten_table_boundary() {
        assert_eq!(power_of_ten(0), BigInt::one());
        assert_eq!(power_of_ten(19), int("10000000000000000000"));
        assert_eq!(power_of_ten(20), int("100000000000000000000"));
        assert_eq!(power_of_ten(45), int("10").pow(45).unwrap());
    }

    #[test]
    fn test_serde_round_trip() {
        let value = int("-123456789012345678901234567890");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
