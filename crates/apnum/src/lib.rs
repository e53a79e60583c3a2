#![doc = include_str!("../../../README.md")]
// Digit and exponent narrowing casts are range-checked at their call sites.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

mod bigdecimal;
mod bigint;
mod context;
mod error;
mod locale;
mod magnitude;
mod math;
mod radix;
mod rounding;

pub use crate::{
    bigdecimal::BigDecimal,
    bigint::{BigInt, Sign},
    context::MathContext,
    error::{Error, NumResult},
    locale::Locale,
    rounding::RoundingMode,
};
