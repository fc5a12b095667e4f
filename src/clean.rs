use serde_json::{Map, Value};

/// Returns a minimal copy of `value` with empty entries pruned from
/// mappings.
///
/// A mapping key is dropped when its cleaned child is null, an empty
/// mapping, or an empty array. Arrays are cleaned element-wise but never
/// lose elements; a scalar (including null) is returned as-is. The input
/// is never mutated.
///
/// ```
/// use serde_json::json;
/// use schema_edit::clean;
///
/// assert_eq!(
///     json!({ "qux": "keep" }),
///     clean(&json!({ "foo": null, "bar": [], "baz": {}, "qux": "keep" })),
/// );
/// ```
pub fn clean(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(clean).collect()),
        Value::Object(map) => {
            let mut cleaned = Map::new();
            for (key, child) in map {
                let child = clean(child);
                if is_empty(&child) {
                    continue;
                }
                cleaned.insert(key.clone(), child);
            }
            Value::Object(cleaned)
        }
        scalar => scalar.clone(),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cleans_as_expected() {
        let cases = vec![
            (json!({}), json!({})),
            (json!({ "foo": "bar" }), json!({ "foo": "bar" })),
            (json!({ "foo": null }), json!({})),
            (json!({ "foo": [] }), json!({})),
            (json!({ "foo": {} }), json!({})),
            (json!({ "foo": { "bar": { "baz": {} } } }), json!({})),
            (json!([]), json!([])),
            (json!([{ "foo": null }]), json!([{}])),
            (json!("string"), json!("string")),
            (json!(1), json!(1)),
            (json!(null), json!(null)),
        ];

        for (input, expected) in cases {
            assert_eq!(expected, clean(&input));
        }
    }

    #[test]
    fn keeps_populated_entries_while_pruning_empty_siblings() {
        assert_eq!(
            json!({ "qux": "keep" }),
            clean(&json!({ "foo": null, "bar": [], "baz": {}, "qux": "keep" }))
        );
    }

    #[test]
    fn arrays_never_lose_elements() {
        assert_eq!(
            json!([null, [], {}, "keep"]),
            clean(&json!([null, [], {}, "keep"]))
        );
    }

    #[test]
    fn is_idempotent() {
        let docs = vec![
            json!({ "foo": { "bar": { "baz": {} } }, "qux": [1, null] }),
            json!([{ "foo": null }, "bar"]),
            json!({ "type": ["object"], "properties": {} }),
        ];

        for doc in docs {
            let once = clean(&doc);
            assert_eq!(once, clean(&once));
        }
    }

    #[test]
    fn never_mutates_its_input() {
        let doc = json!({ "foo": null, "bar": { "baz": [] } });
        let snapshot = doc.clone();

        clean(&doc);

        assert_eq!(snapshot, doc);
    }
}
