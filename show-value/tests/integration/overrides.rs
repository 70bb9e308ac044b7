use std::cell::Cell;
use std::rc::Rc;

use show_testhelpers::test;
use show_value::{SHOW_KEY, Show, VArray, VFunction, VObject, VSet, Value, cycle, render};

use crate::show;

/// A host-native list that renders through its elements.
struct List(Vec<Value>);

impl Show for List {
    fn show(&self) -> String {
        let items: Vec<String> = self.0.iter().map(render).collect();
        format!("List.of ({})", items.join(", "))
    }
}

#[test]
fn custom_type_renders_itself() {
    let list = Value::custom(List(vec![Value::from(1), Value::from("two"), Value::Null]));
    assert_eq!(show(list), r#"List.of (1, "two", null)"#);
}

#[test]
fn custom_values_nest() {
    let inner = Value::custom(List(vec![Value::from(-0.0)]));
    let outer = VObject::from_iter([("list", inner)]);
    assert_eq!(show(outer), r#"{"list": List.of (-0)}"#);
}

#[test]
fn object_hook_replaces_default_rendering() {
    let obj = VObject::from_iter([("x", 1), ("y", 2)]);
    obj.insert(SHOW_KEY, VFunction::new("show", |_| Value::from("Point")));
    assert_eq!(show(obj), "Point");
}

#[test]
fn array_hook_replaces_default_rendering() {
    let arr = VArray::from_iter([1, 2, 3]);
    arr.set_property(
        SHOW_KEY,
        VFunction::new("show", |this| {
            let Some(arr) = this.as_array() else {
                return Value::Undefined;
            };
            let items: Vec<String> = arr.elements().iter().map(render).collect();
            Value::from(format!("Vector.from ([{}])", items.join(", ")))
        }),
    );
    assert_eq!(show(arr), "Vector.from ([1, 2, 3])");
}

#[test]
fn hook_output_is_used_verbatim() {
    let obj = VObject::new();
    obj.insert(SHOW_KEY, VFunction::anonymous(|_| Value::from("not \"quoted\"\n")));
    assert_eq!(show(obj), "not \"quoted\"\n");
}

#[test]
fn non_callable_hook_renders_as_a_property() {
    let obj = VObject::from_iter([(SHOW_KEY, 1)]);
    assert_eq!(show(obj), r#"{"@@show": 1}"#);
}

#[test]
fn hook_is_called_once_per_render() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let obj = VObject::new();
    obj.insert(
        SHOW_KEY,
        VFunction::anonymous(move |_| {
            counter.set(counter.get() + 1);
            Value::from("X")
        }),
    );
    let pair = VArray::from_iter([obj.clone(), obj]);
    assert_eq!(show(pair), "[X, X]");
    assert_eq!(calls.get(), 2);
}

#[test]
fn hooks_share_cycle_tracking_with_the_renderer() {
    // the hook renders the wrapper's contents, which loop back to the outer array
    let outer = VArray::new();
    let wrapper = VObject::from_iter([("items", outer.clone())]);
    wrapper.insert(
        SHOW_KEY,
        VFunction::new("show", |this| {
            let items = this
                .as_object()
                .and_then(|obj| obj.get("items"))
                .unwrap_or(Value::Undefined);
            Value::from(format!("Wrapper ({})", render(&items)))
        }),
    );
    outer.push(wrapper);
    assert_eq!(show(outer), "[Wrapper (<Circular>)]");
    assert_eq!(cycle::in_progress_len(), 0);
}

#[test]
fn hook_receiver_is_not_marked_but_its_children_are() {
    // the hook runs before its receiver is marked, so the loop closes one level
    // further in, at the array the hook renders
    let node = VObject::new();
    let children = VArray::from_iter([node.clone()]);
    node.insert("children", children);
    node.insert(
        SHOW_KEY,
        VFunction::new("show", |this| {
            let children = this
                .as_object()
                .and_then(|obj| obj.get("children"))
                .unwrap_or(Value::Undefined);
            Value::from(format!("Node ({})", render(&children)))
        }),
    );
    assert_eq!(show(node), "Node ([Node (<Circular>)])");
    assert_eq!(cycle::in_progress_len(), 0);
}

#[test]
fn hooks_win_over_every_category() {
    let set_like = VArray::new();
    set_like.set_property(SHOW_KEY, VFunction::anonymous(|_| VSet::from_iter([1]).into()));
    assert_eq!(show(set_like), "new Set ([1])");
}
