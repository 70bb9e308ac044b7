use show_testhelpers::test;
use show_value::Value;

use crate::show;

#[test]
fn json_documents_render_with_sorted_keys() {
    let doc: serde_json::Value =
        serde_json::from_str(r#"{"b": [1, 2.5, "x"], "a": {"nested": null}}"#).unwrap();
    assert_eq!(
        show(Value::from(doc)),
        r#"{"a": {"nested": null}, "b": [1, 2.5, "x"]}"#
    );
}

#[test]
fn json_scalars() {
    assert_eq!(show(Value::from(serde_json::json!(null))), "null");
    assert_eq!(show(Value::from(serde_json::json!(-0.0))), "-0");
    assert_eq!(show(Value::from(serde_json::json!("q\""))), r#""q\"""#);
}
