//! Absent values, booleans, numbers, strings and symbols.

use show_testhelpers::test;
use show_value::{VBoxed, VSymbol, Value, WellKnownSymbol};

use crate::show;

#[test]
fn absent_values_differ() {
    assert_eq!(show(Value::Null), "null");
    assert_eq!(show(Value::Undefined), "undefined");
    assert_eq!(show(None::<bool>), "undefined");
}

#[test]
fn booleans() {
    assert_eq!(show(true), "true");
    assert_eq!(show(false), "false");
    assert_eq!(show(VBoxed::boolean(true)), "new Boolean (true)");
}

#[test]
fn signed_zero() {
    assert_eq!(show(0.0), "0");
    assert_eq!(show(-0.0), "-0");
    assert_eq!(show(VBoxed::number(0.0)), "new Number (0)");
    assert_eq!(show(VBoxed::number(-0.0)), "new Number (-0)");
}

#[test]
fn special_numbers() {
    assert_eq!(show(f64::NAN), "NaN");
    assert_eq!(show(f64::INFINITY), "Infinity");
    assert_eq!(show(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(show(VBoxed::number(f64::NAN)), "new Number (NaN)");
    assert_eq!(show(VBoxed::number(f64::NEG_INFINITY)), "new Number (-Infinity)");
}

#[test]
fn ordinary_numbers() {
    assert_eq!(show(1), "1");
    assert_eq!(show(-42), "-42");
    assert_eq!(show(0.25), "0.25");
    assert_eq!(show(1e21), "1e+21");
    assert_eq!(show(u64::MAX), "18446744073709552000");
}

#[test]
fn integers_round_trip() {
    for n in [-1_000_000i64, -1, 0, 7, 123_456_789, 9_007_199_254_740_991] {
        let text = show(n);
        assert_eq!(text.parse::<i64>().unwrap(), n, "{text}");
    }
}

#[test]
fn strings_are_quoted_and_escaped() {
    assert_eq!(show(""), r#""""#);
    assert_eq!(show("abc"), r#""abc""#);
    assert_eq!(show("foo\n\"bar\"\nbaz\n"), "\"foo\\n\\\"bar\\\"\\nbaz\\n\"");
    assert_eq!(show("tab\there"), r#""tab\there""#);
    assert_eq!(show("\u{1}"), r#""\u0001""#);
    assert_eq!(show('x'), r#""x""#);
}

#[test]
fn boxed_strings() {
    assert_eq!(show(VBoxed::string("abc")), r#"new String ("abc")"#);
    assert_eq!(show(VBoxed::string("")), r#"new String ("")"#);
}

#[test]
fn symbols() {
    assert_eq!(show(VSymbol::new(None)), "Symbol ()");
    assert_eq!(show(VSymbol::new(Some(""))), r#"Symbol ("")"#);
    assert_eq!(show(VSymbol::new(Some("foo"))), r#"Symbol ("foo")"#);
    assert_eq!(show(VSymbol::new(Some("a\"b"))), r#"Symbol ("a\"b")"#);
}

#[test]
fn well_known_symbols_are_dotted_references() {
    for which in WellKnownSymbol::ALL {
        assert_eq!(
            show(VSymbol::well_known(which)),
            format!("Symbol.{}", which.name())
        );
    }
}

#[test]
fn interned_symbols_look_like_private_ones() {
    let interned = VSymbol::for_key("shared");
    let private = VSymbol::new(Some("shared"));
    assert_ne!(interned, private);
    assert_eq!(show(interned), show(private));
}
