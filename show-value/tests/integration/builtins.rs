//! Regular expressions, dates, errors, argument bundles and opaque values.

use insta::assert_snapshot;
use show_testhelpers::test;
use show_value::{
    VArguments, VArray, VDate, VError, VFunction, VObject, VOpaque, VRegExp, VSymbol, Value,
};

use crate::show;

#[test]
fn regexps() {
    assert_eq!(show(VRegExp::new("a+b", "").unwrap()), "/a+b/");
    assert_eq!(show(VRegExp::new("a/b", "ig").unwrap()), "/a\\/b/gi");
    assert_eq!(show(VRegExp::new("", "").unwrap()), "/(?:)/");
}

#[test]
fn invalid_regexp_flags_are_errors() {
    let err = VRegExp::new("a", "gz").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid regular expression flags 'gz': unknown flag 'z'"
    );
}

#[test]
fn dates() {
    assert_eq!(show(VDate::from_millis(0.0)), r#"new Date ("1970-01-01T00:00:00.000Z")"#);
    assert_eq!(
        show(VDate::parse("2001-02-03T04:05:06.789Z").unwrap()),
        r#"new Date ("2001-02-03T04:05:06.789Z")"#
    );
    assert_eq!(
        show(VDate::from_millis(-62_198_755_200_000.0)),
        r#"new Date ("-000001-01-01T00:00:00.000Z")"#
    );
}

#[test]
fn invalid_dates() {
    assert_eq!(show(VDate::invalid()), "new Date (NaN)");
    assert_eq!(show(VDate::from_millis(f64::NAN)), "new Date (NaN)");
    assert_eq!(show(VDate::from_millis(9e15)), "new Date (NaN)");
}

#[test]
fn errors() {
    assert_eq!(show(VError::new("oops")), r#"new Error ("oops")"#);
    assert_eq!(show(VError::type_error("bad \"x\"")), r#"new TypeError ("bad \"x\"")"#);
    assert_eq!(show(VError::range_error("")), r#"new RangeError ("")"#);
    assert_eq!(
        show(VError::with_name("CustomError", "boom")),
        r#"new CustomError ("boom")"#
    );
}

#[test]
fn arguments() {
    let empty: [Value; 0] = [];
    assert_eq!(show(VArguments::new(empty)), "function () { return arguments; } ()");
    assert_snapshot!(
        show(VArguments::new([Value::from(1), Value::from("a"), VArray::from_iter([true]).into()])),
        @r#"function () { return arguments; } (1, "a", [true])"#
    );
}

#[test]
fn opaque_values_show_their_tag() {
    assert_eq!(show(VOpaque::new("WeakMap")), "<WeakMap>");
    assert_eq!(show(VOpaque::new("Promise")), "<Promise>");
}

#[test]
fn functions_are_opaque() {
    let bound = VFunction::new("bound push", |_| Value::Undefined);
    let value = Value::from(bound);
    assert_eq!(show(value.clone()), "<Function>");
    assert_eq!(show(value), "<Function>");
    assert_eq!(show(VFunction::anonymous(|_| Value::Null)), "<Function>");
}

#[test]
fn everything_together() {
    let obj = VObject::new();
    obj.insert("when", VDate::from_millis(86_400_000.0));
    obj.insert("error", VError::syntax_error("unexpected token"));
    obj.insert("pattern", VRegExp::new("^\\d+$", "m").unwrap());
    obj.insert("callback", VFunction::anonymous(|_| Value::Undefined));
    obj.insert(VSymbol::new(Some("meta")), VOpaque::new("WeakSet"));
    assert_snapshot!(
        show(obj),
        @r#"{"callback": <Function>, "error": new SyntaxError ("unexpected token"), "pattern": /^\d+$/m, "when": new Date ("1970-01-02T00:00:00.000Z"), [Symbol ("meta")]: <WeakSet>}"#
    );
}
