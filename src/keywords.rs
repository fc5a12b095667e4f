//! Validation keyword vocabulary for JSON Schema declared types.
//!
//! The vocabulary maps each declared type to the validation keywords that
//! constrain it, so a caller holding a set of declared types can compute
//! which keywords may still be added and which keys on a schema are
//! validation keywords rather than structural ones.

use crate::key_set::KeySet;
use serde_json::Value;

const ARRAY: &[&str] = &["minItems", "maxItems", "uniqueItems"];
const BOOLEAN: &[&str] = &[];
const INTEGER: &[&str] = &[
    "minimum",
    "maximum",
    "exclusiveMaximum",
    "exclusiveMinimum",
    "multipleOf",
];
const NUMBER: &[&str] = &[
    "minimum",
    "maximum",
    "exclusiveMaximum",
    "exclusiveMinimum",
    "multipleOf",
];
const NULL: &[&str] = &[];
const OBJECT: &[&str] = &["additionalProperties", "minProperties", "maxProperties"];
const STRING: &[&str] = &["format", "pattern", "minLength", "maxLength"];

/// Keywords that compose subschemas rather than constrain a declared type.
pub const COMPOSITION_KEYWORDS: &[&str] = &["allOf", "anyOf", "oneOf", "not"];

/// The validation keywords applicable to a single declared type.
///
/// Unknown types have an empty vocabulary, as do `boolean` and `null`.
pub fn keywords_for(declared_type: &str) -> KeySet<&'static str> {
    let keywords: &[&str] = match declared_type {
        "array" => ARRAY,
        "boolean" => BOOLEAN,
        "integer" => INTEGER,
        "number" => NUMBER,
        "null" => NULL,
        "object" => OBJECT,
        "string" => STRING,
        _ => &[],
    };
    KeySet::new(keywords.iter().copied())
}

/// The union of keyword vocabularies across a set of declared types.
///
/// This is the set of keywords a schema declaring exactly `declared_types`
/// may meaningfully carry.
pub fn applicable_keywords<'a, I>(declared_types: I) -> KeySet<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut applicable = KeySet::new(std::iter::empty());
    for declared_type in declared_types {
        applicable = applicable.union(&keywords_for(declared_type));
    }
    applicable
}

/// The validation keywords already present on a schema mapping.
///
/// Computed as the intersection of the mapping's keys with the full
/// vocabulary; non-mapping values have no active keywords.
pub fn active_keywords(schema: &Value) -> KeySet<String> {
    let vocabulary = applicable_keywords(
        ["array", "boolean", "integer", "number", "null", "object", "string"]
            .iter()
            .copied(),
    );

    match schema {
        Value::Object(map) => map
            .keys()
            .filter(|key| vocabulary.contains(key.as_str()))
            .cloned()
            .collect(),
        _ => KeySet::new(std::iter::empty()),
    }
}

/// The editing form a schema value calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    /// The schema is a `$ref` to a shared definition.
    Reference,
    /// The schema composes subschemas with `allOf`, `anyOf`, `oneOf`, or
    /// `not`.
    Composition,
    /// The schema declares a `type`.
    Type,
    /// Nothing declared yet.
    Blank,
}

impl SchemaKind {
    /// Classifies a schema value. `$ref` wins over composition, which wins
    /// over a declared `type`; anything else (including non-mappings) is
    /// blank.
    pub fn of(schema: &Value) -> Self {
        let map = match schema {
            Value::Object(map) => map,
            _ => return SchemaKind::Blank,
        };

        if map.contains_key("$ref") {
            return SchemaKind::Reference;
        }

        let keys = KeySet::new(map.keys().map(String::as_str));
        let composition = KeySet::new(COMPOSITION_KEYWORDS.iter().copied());
        if !keys.intersection(&composition).is_empty() {
            SchemaKind::Composition
        } else if map.contains_key("type") {
            SchemaKind::Type
        } else {
            SchemaKind::Blank
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn per_type_vocabularies() {
        assert!(keywords_for("array").contains("minItems"));
        assert!(keywords_for("string").contains("pattern"));
        assert!(keywords_for("object").contains("additionalProperties"));
        assert!(keywords_for("boolean").is_empty());
        assert!(keywords_for("null").is_empty());
        assert!(keywords_for("something-else").is_empty());
    }

    #[test]
    fn integer_and_number_share_range_keywords() {
        assert_eq!(keywords_for("integer"), keywords_for("number"));
    }

    #[test]
    fn applicable_keywords_union_across_declared_types() {
        let applicable = applicable_keywords(vec!["integer", "string"]);

        assert!(applicable.contains("minimum"));
        assert!(applicable.contains("minLength"));
        assert!(!applicable.contains("minItems"));
        assert_eq!(
            keywords_for("integer").len() + keywords_for("string").len(),
            applicable.len()
        );
    }

    #[test]
    fn applicable_keywords_of_nothing_is_empty() {
        assert!(applicable_keywords(vec![]).is_empty());
    }

    #[test]
    fn active_keywords_intersects_schema_keys_with_the_vocabulary() {
        let schema = json!({
            "type": ["string"],
            "minLength": 3,
            "pattern": "^a",
            "properties": {},
        });

        assert_eq!(
            KeySet::new(vec!["minLength".to_string(), "pattern".to_string()]),
            active_keywords(&schema)
        );
        assert!(active_keywords(&json!("scalar")).is_empty());
    }

    #[test]
    fn classifies_schema_kinds() {
        assert_eq!(
            SchemaKind::Reference,
            SchemaKind::of(&json!({ "$ref": "#/definitions/address" }))
        );
        assert_eq!(
            SchemaKind::Composition,
            SchemaKind::of(&json!({ "anyOf": [] }))
        );
        assert_eq!(
            SchemaKind::Type,
            SchemaKind::of(&json!({ "type": ["object"] }))
        );
        assert_eq!(SchemaKind::Blank, SchemaKind::of(&json!({})));
        assert_eq!(SchemaKind::Blank, SchemaKind::of(&json!(42)));
    }

    #[test]
    fn reference_wins_over_other_kinds() {
        assert_eq!(
            SchemaKind::Reference,
            SchemaKind::of(&json!({ "$ref": "#/definitions/x", "type": ["object"] }))
        );
    }
}
