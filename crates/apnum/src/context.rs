//! Arithmetic contexts: a precision budget paired with a rounding mode.

use std::fmt;

use crate::rounding::RoundingMode;

/// Immutable precision/rounding pair governing an operation.
///
/// A precision of 0 means exact, unlimited arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MathContext {
    precision: u32,
    rounding: RoundingMode,
}

impl MathContext {
    /// 9 significant digits, ties away from zero.
    pub const BASIC_DEFAULT: MathContext = MathContext::new(9, RoundingMode::HalfUp);
    /// IEEE 754R decimal32: 7 significant digits, ties to even.
    pub const DECIMAL32: MathContext = MathContext::new(7, RoundingMode::HalfEven);
    /// IEEE 754R decimal64: 16 significant digits, ties to even.
    pub const DECIMAL64: MathContext = MathContext::new(16, RoundingMode::HalfEven);
    /// IEEE 754R decimal128: 34 significant digits, ties to even.
    pub const DECIMAL128: MathContext = MathContext::new(34, RoundingMode::HalfEven);
    /// Exact arithmetic; the rounding mode is never consulted.
    pub const UNLIMITED: MathContext = MathContext::new(0, RoundingMode::HalfUp);

    /// Creates a context with the given precision and rounding mode.
    #[must_use]
    pub const fn new(precision: u32, rounding: RoundingMode) -> Self {
        Self { precision, rounding }
    }

    /// The number of significant digits results are rounded to; 0 is exact.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// The rounding mode applied when digits must be discarded.
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Whether this context performs exact arithmetic.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.precision == 0
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

impl fmt::Display for MathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "precision={} rounding={}", self.precision, self.rounding)
    }
}
