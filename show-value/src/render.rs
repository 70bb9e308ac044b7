//! The renderer.
//!
//! Each value goes through the same steps:
//!
//! 1. absent values print as `null` / `undefined`;
//! 2. a value with its own renderer (see [`override_for`]) prints whatever that returns;
//! 3. a container already being rendered prints `<Circular>`;
//! 4. everything else prints according to its shape, recursing into children.

use crate::boxed::Primitive;
use crate::cycle;
use crate::number::number_to_string;
use crate::object::SortedProperties;
use crate::other::{VArguments, VError};
use crate::show::override_for;
use crate::string::quote_into;
use crate::symbol::VSymbol;
use crate::value::Value;
use crate::{debug, trace};

/// Renders `value` as an expression that, where feasible, evaluates to an
/// equal value.
///
/// ```
/// use show_value::{VObject, Value, render};
///
/// let obj = VObject::from_iter([("y", 1), ("x", 2)]);
/// assert_eq!(render(&Value::from(obj)), r#"{"x": 2, "y": 1}"#);
/// assert_eq!(render(&Value::from(-0.0)), "-0");
/// assert_eq!(render(&Value::from("a\"b")), r#""a\"b""#);
/// ```
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(&mut out, value);
    out
}

/// Appends comma-separated items to the output.
struct Seq<'a> {
    out: &'a mut String,
    first: bool,
}

impl<'a> Seq<'a> {
    fn new(out: &'a mut String) -> Self {
        Self { out, first: true }
    }

    fn item(&mut self) -> &mut String {
        if !self.first {
            self.out.push_str(", ");
        }
        self.first = false;
        &mut *self.out
    }
}

fn render_into(out: &mut String, value: &Value) {
    match value {
        Value::Null => {
            out.push_str("null");
            return;
        }
        Value::Undefined => {
            out.push_str("undefined");
            return;
        }
        _ => {}
    }

    if let Some(text) = override_for(value) {
        out.push_str(&text);
        return;
    }

    let _guard = match value.composite_identity() {
        Some(id) => match cycle::enter(id) {
            Some(guard) => Some(guard),
            None => {
                debug!(tag = value.tag().name(), "cycle detected");
                out.push_str("<Circular>");
                return;
            }
        },
        None => None,
    };

    trace!(tag = value.tag().name(), boxed = value.is_boxed(), "render");
    match value {
        Value::Null | Value::Undefined => {}
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => quote_into(out, s),
        Value::Symbol(symbol) => write_symbol(out, symbol),
        Value::Boxed(boxed) => {
            let (ctor, inner) = match boxed.primitive() {
                Primitive::Boolean(b) => ("Boolean", Value::Boolean(*b)),
                Primitive::Number(n) => ("Number", Value::Number(*n)),
                Primitive::String(s) => ("String", Value::String(s.clone())),
            };
            write_call(out, &format!("new {ctor}"), |out| render_into(out, &inner));
        }
        Value::RegExp(re) => out.push_str(&re.to_string()),
        Value::Date(date) => write_call(out, "new Date", |out| match date.to_iso_string() {
            Some(iso) => quote_into(out, &iso),
            None => write_number(out, f64::NAN),
        }),
        Value::Error(error) => write_error(out, error),
        Value::Arguments(args) => write_arguments(out, args),
        Value::Array(arr) => {
            let elements = arr.elements();
            let sparse = arr.sparse_elements();
            let properties = arr.sorted_properties();
            out.push('[');
            let mut seq = Seq::new(out);
            for element in &elements {
                render_into(seq.item(), element);
            }
            // past a hole, positions no longer line up, so spell out the index
            for (index, element) in &sparse {
                let out = seq.item();
                quote_into(out, &index.to_string());
                out.push_str(": ");
                render_into(out, element);
            }
            write_properties(&mut seq, &properties);
            out.push(']');
        }
        Value::Object(obj) => {
            let properties = obj.sorted_properties();
            out.push('{');
            write_properties(&mut Seq::new(out), &properties);
            out.push('}');
        }
        Value::Set(set) => {
            let values = set.values();
            write_call(out, "new Set", |out| write_list(out, &values));
        }
        Value::Map(map) => {
            let entries = map.entries();
            write_call(out, "new Map", |out| {
                out.push('[');
                let mut seq = Seq::new(out);
                for (key, value) in &entries {
                    let out = seq.item();
                    out.push('[');
                    render_into(out, key);
                    out.push_str(", ");
                    render_into(out, value);
                    out.push(']');
                }
                out.push(']');
            });
        }
        Value::Function(_) | Value::Custom(_) | Value::Opaque(_) => {
            out.push('<');
            out.push_str(value.tag().name());
            out.push('>');
        }
    }
}

/// Writes `callee (args)`.
fn write_call(out: &mut String, callee: &str, args: impl FnOnce(&mut String)) {
    out.push_str(callee);
    out.push_str(" (");
    args(out);
    out.push(')');
}

fn write_number(out: &mut String, n: f64) {
    // -0 == 0, so only the sign bit tells them apart
    if n == 0.0 && n.is_sign_negative() {
        out.push_str("-0");
    } else {
        out.push_str(&number_to_string(n));
    }
}

fn write_symbol(out: &mut String, symbol: &VSymbol) {
    if let Some(which) = symbol.as_well_known() {
        out.push_str("Symbol.");
        out.push_str(which.name());
        return;
    }
    write_call(out, "Symbol", |out| {
        if let Some(description) = symbol.description() {
            quote_into(out, description);
        }
    });
}

fn write_error(out: &mut String, error: &VError) {
    write_call(out, &format!("new {}", error.name()), |out| {
        quote_into(out, error.message())
    });
}

fn write_arguments(out: &mut String, args: &VArguments) {
    write_call(out, "function () { return arguments; }", |out| {
        let mut seq = Seq::new(out);
        for arg in args.as_slice() {
            render_into(seq.item(), arg);
        }
    });
}

fn write_list(out: &mut String, values: &[Value]) {
    out.push('[');
    let mut seq = Seq::new(out);
    for value in values {
        render_into(seq.item(), value);
    }
    out.push(']');
}

fn write_properties(seq: &mut Seq<'_>, properties: &SortedProperties) {
    for (name, value) in &properties.named {
        let out = seq.item();
        quote_into(out, name);
        out.push_str(": ");
        render_into(out, value);
    }
    for (symbol, value) in &properties.symbols {
        let out = seq.item();
        out.push('[');
        write_symbol(out, symbol);
        out.push_str("]: ");
        render_into(out, value);
    }
}
