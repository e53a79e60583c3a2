//! Conversions between [`BigInt`] and machine types.

use num_traits::ToPrimitive;
use smallvec::smallvec;

use crate::{
    bigint::{BigInt, Sign},
    error::{Error, NumResult},
    magnitude::{self, Digits},
};

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        if value == 0 {
            return Self::ZERO;
        }
        Self { sign: Sign::Plus, magnitude: smallvec![value] }
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        let high = (value >> 32) as u32;
        let low = value as u32;
        let magnitude: Digits = if high == 0 { smallvec![low] } else { smallvec![high, low] };
        if value == 0 {
            return Self::ZERO;
        }
        Self { sign: Sign::Plus, magnitude }
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        let magnitude = Self::from(value.unsigned_abs());
        if value < 0 { magnitude.neg() } else { magnitude }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let magnitude = Self::from(value.unsigned_abs());
        if value < 0 { magnitude.neg() } else { magnitude }
    }
}

impl BigInt {
    /// Builds the integer part of an IEEE-754 double.
    ///
    /// The binary representation is decomposed exactly, the implicit
    /// significand bit restored, and the result shifted into place with
    /// truncation toward zero.
    ///
    /// # Errors
    /// `Overflow` for NaN and the infinities.
    pub fn from_f64(value: f64) -> NumResult<Self> {
        if value.is_nan() || value.is_infinite() {
            return Err(Error::Overflow { what: "non-finite double" });
        }
        let bits = value.to_bits();
        let negative = bits >> 63 != 0;
        let biased_exponent = ((bits >> 52) & 0x7FF) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        if biased_exponent == 0 && fraction == 0 {
            return Ok(Self::ZERO);
        }
        // Subnormals carry no implicit bit and behave as exponent 1.
        let (significand, exponent) = if biased_exponent == 0 {
            (fraction, 1)
        } else {
            (fraction | 1 << 52, biased_exponent)
        };
        let magnitude = Self::from(significand);
        let shift = exponent - 1075;
        let shifted = if shift >= 0 {
            magnitude.shl_bits(shift as u64)
        } else {
            magnitude.shr_bits(shift.unsigned_abs())
        };
        Ok(if negative { shifted.neg() } else { shifted })
    }

    /// The nearest double, ties to even; values beyond the range become
    /// the matching infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let bits = magnitude::bit_len(&self.magnitude);
        let mut value = if bits <= 53 {
            // At most two digits and exactly representable.
            let mut raw = 0u64;
            for &digit in &self.magnitude {
                raw = raw << 32 | u64::from(digit);
            }
            raw as f64
        } else {
            let shift = bits - 53;
            let (top, _) = magnitude::shr(&self.magnitude, shift);
            let mut mantissa = 0u64;
            for &digit in &top {
                mantissa = mantissa << 32 | u64::from(digit);
            }
            let round = magnitude::bit(&self.magnitude, shift - 1);
            let sticky = magnitude::trailing_zero_bits(&self.magnitude) < shift - 1;
            if round && (sticky || mantissa & 1 == 1) {
                mantissa += 1;
            }
            let mut exponent = shift;
            if mantissa == 1 << 53 {
                mantissa >>= 1;
                exponent += 1;
            }
            // value = mantissa * 2^exponent with mantissa in [2^52, 2^53)
            let unbiased = exponent + 52;
            if unbiased > 1023 {
                f64::INFINITY
            } else {
                f64::from_bits((unbiased + 1023) << 52 | (mantissa & ((1 << 52) - 1)))
            }
        };
        if self.is_negative() {
            value = -value;
        }
        value
    }

    /// Builds a value from a big-endian two's-complement byte array.
    ///
    /// # Errors
    /// `Format` for an empty array.
    pub fn from_bytes_twos_complement(bytes: &[u8]) -> NumResult<Self> {
        if bytes.is_empty() {
            return Err(Error::Format { reason: "empty byte array" });
        }
        let negative = bytes[0] & 0x80 != 0;
        let fill: u8 = if negative { 0xFF } else { 0 };
        let mut words = Vec::with_capacity(bytes.len().div_ceil(4) + 1);
        for chunk in bytes.rchunks(4) {
            let mut word = [fill; 4];
            word[4 - chunk.len()..].copy_from_slice(chunk);
            words.push(u32::from_be_bytes(word));
        }
        words.push(if negative { u32::MAX } else { 0 });
        Ok(Self::from_twos_complement_words(words, negative))
    }

    /// The minimal big-endian two's-complement byte encoding.
    ///
    /// Always at least one byte; the top bit of the first byte is the sign
    /// bit, so positive values whose magnitude fills a byte gain a leading
    /// zero. The exact inverse of
    /// [`from_bytes_twos_complement`](Self::from_bytes_twos_complement).
    #[must_use]
    pub fn to_bytes_twos_complement(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let byte_len = (self.bit_length() / 8 + 1) as usize;
        let first_nonzero = self.first_nonzero_le();
        let mut out = vec![0u8; byte_len];
        for i in 0..byte_len {
            let word = self.twos_word(i / 4, first_nonzero);
            out[byte_len - 1 - i] = (word >> ((i % 4) * 8)) as u8;
        }
        out
    }

    /// The value as `i32`, if it fits.
    #[must_use]
    pub fn to_i32(&self) -> Option<i32> {
        ToPrimitive::to_i32(self)
    }

    /// The value as `u32`, if it fits.
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        ToPrimitive::to_u32(self)
    }

    /// The value as `i64`, if it fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        ToPrimitive::to_i64(self)
    }

    /// The value as `u64`, if it fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        ToPrimitive::to_u64(self)
    }

    fn magnitude_u64(&self) -> Option<u64> {
        match self.magnitude.len() {
            0 => Some(0),
            1 => Some(u64::from(self.magnitude[0])),
            2 => Some(u64::from(self.magnitude[0]) << 32 | u64::from(self.magnitude[1])),
            _ => None,
        }
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude_u64()?;
        match self.sign {
            Sign::Zero => Some(0),
            Sign::Plus if magnitude <= i64::MAX as u64 => Some(magnitude as i64),
            // The asymmetric edge: |i64::MIN| is one beyond i64::MAX.
            Sign::Minus if magnitude <= 1 << 63 => Some((magnitude as i64).wrapping_neg()),
            _ => None,
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.sign {
            Sign::Zero => Some(0),
            Sign::Plus => self.magnitude_u64(),
            Sign::Minus => None,
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(BigInt::to_f64(self))
    }
}
