//! Text renderings of composed pages for the command line.

use lopdf::content::Operation;
use lopdf::{Dictionary, Object};
use serde_json::{Value, json};

fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// A JSON view of a PDF object. Names get a leading `/`, strings that are
/// not UTF-8 become lowercase hex.
pub fn object_to_json(object: &Object) -> Value {
    match object {
        Object::Null => Value::Null,
        Object::Boolean(b) => json!(b),
        Object::Integer(i) => json!(i),
        Object::Real(r) => json!(r),
        Object::Name(name) => json!(format!("/{}", bytes_to_string(name))),
        Object::String(bytes, _) => match std::str::from_utf8(bytes) {
            Ok(s) => json!(s),
            Err(_) => json!(bytes.iter().map(|b| format!("{:02x}", b)).collect::<String>()),
        },
        Object::Array(items) => Value::Array(items.iter().map(object_to_json).collect()),
        Object::Dictionary(dict) => dictionary_to_json(dict),
        Object::Reference((id, generation)) => json!(format!("{} {} R", id, generation)),
        other => json!(format!("{:?}", other)),
    }
}

pub fn dictionary_to_json(dict: &Dictionary) -> Value {
    let map = dict
        .iter()
        .map(|(key, value)| (bytes_to_string(key), object_to_json(value)))
        .collect();
    Value::Object(map)
}

pub fn operations_to_json(operations: &[Operation]) -> Value {
    Value::Array(
        operations
            .iter()
            .map(|op| {
                json!({
                    "op": op.operator,
                    "operands": op.operands.iter().map(object_to_json).collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}
