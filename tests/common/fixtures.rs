use serde_json::{Value, json};

/// A document with one font and the given paragraphs
pub fn document(paragraphs: Vec<Value>) -> Value {
    json!({
        "page": { "width": 595, "height": 842, "origin": { "x": 72, "y": 72 } },
        "fonts": { "mono": { "builtin": "TestMono", "advanceEm": 0.5 } },
        "paragraphs": paragraphs
    })
}

/// A paragraph from its lines and its inline source content
pub fn paragraph(content: Vec<Value>, lines: Vec<Value>) -> Value {
    json!({ "content": content, "lines": lines })
}

/// A placed line at vertical position `y`
pub fn line(y: f32, runs: Vec<Value>) -> Value {
    json!({
        "box": { "x": 0, "y": y, "width": 451, "height": 14 },
        "runs": runs
    })
}

/// A plain 10pt run in the test font
pub fn run(text: &str) -> Value {
    json!({ "text": text, "fonts": ["mono"], "fontSize": 10 })
}

/// A run with extra attributes merged in
pub fn styled_run(text: &str, attributes: Value) -> Value {
    let mut value = run(text);
    if let (Some(target), Some(extra)) = (value.as_object_mut(), attributes.as_object()) {
        for (key, v) in extra {
            target.insert(key.clone(), v.clone());
        }
    }
    value
}

pub fn text(content: &str) -> Value {
    json!({ "type": "Text", "content": content })
}

pub fn note(value: &str) -> Value {
    json!({ "type": "Note", "value": value })
}

pub fn image(src: &str) -> Value {
    json!({ "type": "Image", "src": src })
}

pub fn decoration(width: f32, style: &str) -> Value {
    json!({
        "rect": { "x": 0, "y": 12, "width": width, "height": 1 },
        "style": style,
        "color": "#cc0000"
    })
}
