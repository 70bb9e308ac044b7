use insta::assert_snapshot;
use show_testhelpers::test;
use show_value::{VArray, VMap, VObject, VSet, VSymbol, Value, WellKnownSymbol};

use crate::show;

#[test]
fn arrays() {
    assert_eq!(show(VArray::new()), "[]");
    assert_eq!(show(VArray::from_iter([1, 2, 3])), "[1, 2, 3]");
    assert_eq!(
        show(vec![Value::from("a"), Value::Null, Value::Undefined]),
        r#"["a", null, undefined]"#
    );
}

#[test]
fn nested_arrays() {
    let inner = VArray::from_iter([2, 3]);
    let outer = VArray::from_iter([Value::from(1), inner.into(), VArray::new().into()]);
    assert_eq!(show(outer), "[1, [2, 3], []]");
}

#[test]
fn array_named_properties_follow_elements() {
    let arr = VArray::from_iter([1, 2]);
    arr.set_property("z", true);
    arr.set_property("a", false);
    arr.set_property(VSymbol::new(Some("s")), 0);
    assert_eq!(show(arr), r#"[1, 2, "a": false, "z": true, [Symbol ("s")]: 0]"#);
}

#[test]
fn array_index_names_are_elements() {
    let arr = VArray::new();
    arr.set_property("0", "x");
    arr.set_property("00", "y");
    assert_eq!(show(arr), r#"["x", "00": "y"]"#);
}

#[test]
fn sparse_array_writes_do_not_allocate_the_gap() {
    let arr = VArray::new();
    arr.set_property("4294967294", 1);
    assert_eq!(arr.len(), 4_294_967_295);
    assert_eq!(show(arr.clone()), r#"["4294967294": 1]"#);

    arr.set(0, "first");
    assert_snapshot!(show(arr), @r#"["first", "4294967294": 1]"#);
}

#[test]
fn object_keys_are_sorted() {
    assert_eq!(show(VObject::new()), "{}");
    let obj = VObject::from_iter([("y", 1), ("x", 2)]);
    assert_eq!(show(obj), r#"{"x": 2, "y": 1}"#);
}

#[test]
fn object_key_order_ignores_insertion_order() {
    let forwards = VObject::from_iter([("a", 1), ("b", 2), ("c", 3)]);
    let backwards = VObject::from_iter([("c", 3), ("b", 2), ("a", 1)]);
    assert_eq!(show(forwards), show(backwards));
}

#[test]
fn object_keys_are_escaped() {
    let obj = VObject::from_iter([("a\"b", 1), ("", 2)]);
    assert_eq!(show(obj), r#"{"": 2, "a\"b": 1}"#);
}

#[test]
fn symbol_keys_sort_after_string_keys() {
    let obj = VObject::new();
    obj.insert(VSymbol::new(Some("b")), 1);
    obj.insert(VSymbol::new(Some("a")), 2);
    obj.insert(VSymbol::new(None), 3);
    obj.insert("z", 4);
    obj.insert(VSymbol::iterator(), 5);
    assert_snapshot!(
        show(obj),
        @r#"{"z": 4, [Symbol ()]: 3, [Symbol.iterator]: 5, [Symbol ("a")]: 2, [Symbol ("b")]: 1}"#
    );
}

#[test]
fn symbols_with_equal_descriptions_keep_insertion_order() {
    let obj = VObject::new();
    obj.insert(VSymbol::new(Some("s")), 1);
    obj.insert(VSymbol::new(Some("s")), 2);
    obj.insert(VSymbol::new(None), 3);
    obj.insert(VSymbol::new(None), 4);
    assert_eq!(
        show(obj),
        r#"{[Symbol ()]: 3, [Symbol ()]: 4, [Symbol ("s")]: 1, [Symbol ("s")]: 2}"#
    );
}

#[test]
fn well_known_symbol_key() {
    let obj = VObject::new();
    obj.insert(VSymbol::well_known(WellKnownSymbol::ToStringTag), "Thing");
    assert_eq!(show(obj), r#"{[Symbol.toStringTag]: "Thing"}"#);
}

#[test]
fn sets() {
    assert_eq!(show(VSet::new()), "new Set ([])");
    assert_eq!(show(VSet::from_iter([3, 1, 2, 1])), "new Set ([3, 1, 2])");
}

#[test]
fn maps() {
    assert_eq!(show(VMap::new()), "new Map ([])");
    let map = VMap::from_iter([(Value::from("b"), Value::from(1)), (Value::from(2), Value::Null)]);
    assert_eq!(show(map), r#"new Map ([["b", 1], [2, null]])"#);
}

#[test]
fn nested_sets_and_maps() {
    let set = VSet::from_iter([
        Value::from(VSet::new()),
        Value::from(VSet::from_iter([1])),
        Value::from(VMap::new()),
    ]);
    let map = VMap::new();
    map.set(VArray::from_iter([1]), VSet::from_iter(["x"]));
    map.set(set, VMap::from_iter([(1, 2)]));
    assert_snapshot!(
        show(map),
        @r#"new Map ([[[1], new Set (["x"])], [new Set ([new Set ([]), new Set ([1]), new Map ([])]), new Map ([[1, 2]])]])"#
    );
}

#[test]
fn insertion_order_is_iteration_order() {
    let set = VSet::new();
    set.add("b");
    set.add("a");
    set.add("b");
    assert_eq!(show(set), r#"new Set (["b", "a"])"#);
}

#[test]
fn render_is_stable() {
    let obj = VObject::from_iter([("k", VArray::from_iter([1, 2]))]);
    let value = Value::from(obj);
    assert_eq!(show(value.clone()), show(value));
}
