//! Integration tests for numeric classification
//!
//! Every boolean, integer, float, and complex scalar is `Numeric`.

use mmtype::{Category, Kind, category_of, type_of};
use num_complex::Complex;
use proptest::prelude::*;

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn bool_is_numeric() {
    assert_eq!(type_of(&true).unwrap(), Category::Numeric);
    assert_eq!(type_of(&false).unwrap(), Category::Numeric);
}

#[test]
fn signed_integers_are_numeric() {
    assert_eq!(type_of(&-1i8).unwrap(), Category::Numeric);
    assert_eq!(type_of(&-1i16).unwrap(), Category::Numeric);
    assert_eq!(type_of(&-1i32).unwrap(), Category::Numeric);
    assert_eq!(type_of(&-1i64).unwrap(), Category::Numeric);
    assert_eq!(type_of(&-1i128).unwrap(), Category::Numeric);
    assert_eq!(type_of(&-1isize).unwrap(), Category::Numeric);
}

#[test]
fn unsigned_integers_are_numeric() {
    assert_eq!(type_of(&1u8).unwrap(), Category::Numeric);
    assert_eq!(type_of(&1u16).unwrap(), Category::Numeric);
    assert_eq!(type_of(&1u32).unwrap(), Category::Numeric);
    assert_eq!(type_of(&1u64).unwrap(), Category::Numeric);
    assert_eq!(type_of(&1u128).unwrap(), Category::Numeric);
    assert_eq!(type_of(&1usize).unwrap(), Category::Numeric);
}

#[test]
fn floats_are_numeric() {
    assert_eq!(type_of(&1.5f32).unwrap(), Category::Numeric);
    assert_eq!(type_of(&f64::NAN).unwrap(), Category::Numeric);
}

#[test]
fn complex_numbers_are_numeric() {
    assert_eq!(type_of(&Complex::new(1.0f32, -1.0)).unwrap(), Category::Numeric);
    assert_eq!(type_of(&Complex::new(0.0f64, 2.0)).unwrap(), Category::Numeric);
}

#[test]
fn char_is_numeric() {
    assert_eq!(type_of(&'λ').unwrap(), Category::Numeric);
}

#[test]
fn numeric_kind_table() {
    for kind in Kind::NUMERIC {
        assert_eq!(Category::from_kind(kind).unwrap(), Category::Numeric);
    }
}

#[test]
fn static_and_value_classification_agree() {
    assert_eq!(category_of::<u16>().unwrap(), type_of(&7u16).unwrap());
    assert_eq!(category_of::<Complex<f64>>().unwrap(), Category::Numeric);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn zero_and_forty_two_agree() {
    assert_eq!(type_of(&0i32).unwrap(), type_of(&42i32).unwrap());
}

proptest! {
    #[test]
    fn numeric_ignores_contents(b in any::<bool>(), n in any::<i128>(), f in any::<f32>()) {
        prop_assert_eq!(type_of(&b).unwrap(), Category::Numeric);
        prop_assert_eq!(type_of(&n).unwrap(), Category::Numeric);
        prop_assert_eq!(type_of(&f).unwrap(), Category::Numeric);
    }

    #[test]
    fn complex_ignores_contents(re in any::<f64>(), im in any::<f64>()) {
        prop_assert_eq!(type_of(&Complex::new(re, im)).unwrap(), Category::Numeric);
    }
}
