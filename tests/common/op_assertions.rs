use lopdf::content::Operation;

/// Count operations with the given operator
pub fn count_operator(ops: &[Operation], operator: &str) -> usize {
    ops.iter().filter(|op| op.operator == operator).count()
}

/// Operators in stream order
pub fn operators(ops: &[Operation]) -> Vec<&str> {
    ops.iter().map(|op| op.operator.as_str()).collect()
}

/// Operand values of `op` as floats
#[allow(dead_code)]
pub fn float_operands(op: &Operation) -> Vec<f32> {
    op.operands.iter().filter_map(|o| o.as_float().ok()).collect()
}

/// Assert that every `q` in a content stream has a matching `Q`
#[macro_export]
macro_rules! assert_ops_balanced {
    ($page:expr) => {
        let mut depth: i64 = 0;
        for op in &$page.operations {
            match op.operator.as_str() {
                "q" => depth += 1,
                "Q" => {
                    depth -= 1;
                    assert!(depth >= 0, "Q without matching q");
                }
                _ => {}
            }
        }
        assert_eq!(depth, 0, "Unbalanced graphics state in content stream");
        assert!($page.balanced, "Recording surface saw unbalanced save/restore");
    };
}

/// Assert the number of annotations of a subtype
#[macro_export]
macro_rules! assert_annotation_count {
    ($page:expr, $subtype:expr, $count:expr) => {
        let found = $page
            .annotations
            .iter()
            .filter(|a| {
                a.get(b"Subtype")
                    .and_then(lopdf::Object::as_name)
                    .map(|n| n == $subtype.as_bytes())
                    .unwrap_or(false)
            })
            .count();
        assert_eq!(found, $count, "Expected {} {} annotation(s), found {}", $count, $subtype, found);
    };
}
