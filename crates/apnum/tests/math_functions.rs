//! End-to-end checks of the transcendental kernel.

use std::cmp::Ordering;

use apnum::BigDecimal;

fn dec(text: &str) -> BigDecimal {
    BigDecimal::parse(text).unwrap()
}

// Scenario: square root of two to twenty places, exact digit string.
#[test]
fn sqrt_of_two_to_twenty_places() {
    let root = dec("2.0").sqrt(20).unwrap();
    assert_eq!(root.to_string(), "1.41421356237309504880");
}

#[test]
fn sqrt_tracks_the_floor_of_the_scaled_root() {
    assert_eq!(dec("152.2756").sqrt(4).unwrap().to_string(), "12.3400");
    assert_eq!(dec("3").sqrt(10).unwrap().to_string(), "1.7320508075");
    assert_eq!(dec("1000000").sqrt(5).unwrap().to_string(), "1000.00000");
}

// Scenario: exp(1) to 46 places, exact digit string.
#[test]
fn exp_of_one_to_forty_six_places() {
    let e = dec("1").exp(46).unwrap();
    assert_eq!(e.to_string(), "2.7182818284590452353602874713526624977572470937");
}

// Scenario: ln(2.65) to 32 places, exact digit string.
#[test]
fn ln_of_two_point_six_five_to_thirty_two_places() {
    let value = dec("2.65").ln(32).unwrap();
    assert_eq!(value.to_string(), "0.97455963999813084070924556288652");
}

#[test]
fn exp_then_ln_round_trips() {
    for text in ["0.5", "1", "2.65", "7"] {
        let value = dec(text);
        let exponential = value.exp(30).unwrap();
        let back = exponential.ln(18).unwrap();
        let error = back.sub(&value).abs();
        assert!(
            error.compare(&dec("0.00000000000000001")) != Ordering::Greater,
            "{text}: {back}"
        );
    }
}

#[test]
fn int_power_handles_both_exponent_signs() {
    assert_eq!(dec("3").int_power(4, 6).unwrap().to_string(), "81.000000");
    assert_eq!(dec("2").int_power(-10, 10).unwrap().to_string(), "0.0009765625");
    assert_eq!(dec("7.5").int_power(0, 3).unwrap().to_string(), "1");
}

#[test]
fn int_root_inverts_int_power() {
    for (base, index) in [("7", 3u64), ("1.5", 5), ("42", 2)] {
        let base = dec(base);
        let power = base.int_power(index as i64, 24).unwrap();
        let back = power.int_root(index, 12).unwrap();
        let error = back.sub(&base).abs();
        assert!(
            error.compare(&dec("0.0000000001")) != Ordering::Greater,
            "{base} ^ {index}: {back}"
        );
    }
}
