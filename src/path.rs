use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// A dotted key path into a JSON document.
///
/// A path is parsed and normalized at construction: the raw string is split
/// on `.` and empty segments are discarded, so `"a..b."` addresses the same
/// location as `"a.b"`. A path with zero segments addresses the document
/// root. Against a mapping a segment is a key; against an array it is read
/// as a base-10 index.
///
/// Paths are immutable values. They hold no reference to any document;
/// [`Path::join`] produces a new path.
///
/// ```
/// use serde_json::json;
/// use schema_edit::Path;
///
/// let schema = json!({ "properties": { "name": { "type": ["string"] } } });
/// let path = Path::from("properties.name").join("type");
///
/// assert_eq!(Some(&json!(["string"])), path.get(&schema));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

/// Error from [`Path::set`] when a path cannot be created in a document.
///
/// These are usage errors surfaced to the caller; [`Path::get`] and
/// [`Path::remove`] never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetError {
    /// A segment descends into, or assigns under, a scalar value. Scalars
    /// have no members to create.
    #[error("cannot set `{path}`: `{segment}` descends into a scalar value")]
    Scalar { path: Path, segment: String },

    /// A non-numeric segment was applied to an array.
    #[error("cannot set `{path}`: `{segment}` is not an array index")]
    Index { path: Path, segment: String },
}

impl Path {
    /// The zero-segment path addressing the whole document.
    pub fn root() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Appends another path (or raw dotted string), returning a new path.
    ///
    /// Joining normalizes the same way construction does, so joining `""`
    /// is a no-op.
    pub fn join(&self, other: impl Into<Path>) -> Path {
        let mut segments = self.segments.clone();
        segments.extend(other.into().segments);
        Path { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reads the value addressed by this path.
    ///
    /// The root path yields the document itself. Any traversal failure, a
    /// missing key, an out-of-range or non-numeric array index, or a
    /// scalar in the middle of the path, yields `None`; callers supply
    /// their own default with `unwrap_or`. The document is never mutated
    /// and the returned reference borrows from it.
    pub fn get<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(doc, |value, segment| match value {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
                _ => None,
            })
    }

    /// Returns a new document equal to `doc` with `value` placed at this
    /// path. The input document is never mutated.
    ///
    /// The root path replaces the whole document with `value`. Missing
    /// intermediate segments are created as empty mappings; the final
    /// segment is assigned unconditionally, overwriting whatever was
    /// there. Assigning to an array index past the end pads the array
    /// with nulls.
    ///
    /// Fails when a segment would have to extend a scalar (scalars have
    /// no members) or index an array with a non-numeric segment.
    pub fn set(&self, doc: &Value, value: Value) -> Result<Value, SetError> {
        let (last, intermediate) = match self.segments.split_last() {
            Some(parts) => parts,
            None => return Ok(value),
        };

        let mut new_doc = doc.clone();
        let target = intermediate
            .iter()
            .try_fold(&mut new_doc, |target, segment| match target {
                Value::Object(map) => Ok(map
                    .entry(segment.clone())
                    .or_insert_with(|| Value::Object(Map::new()))),
                Value::Array(items) => {
                    let index = self.array_index(segment)?;
                    if index >= items.len() {
                        items.resize(index + 1, Value::Null);
                        items[index] = Value::Object(Map::new());
                    }
                    Ok(&mut items[index])
                }
                _ => Err(SetError::Scalar {
                    path: self.clone(),
                    segment: segment.clone(),
                }),
            })?;

        match target {
            Value::Object(map) => {
                map.insert(last.clone(), value);
            }
            Value::Array(items) => {
                let index = self.array_index(last)?;
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = value;
            }
            _ => {
                return Err(SetError::Scalar {
                    path: self.clone(),
                    segment: last.clone(),
                })
            }
        }

        Ok(new_doc)
    }

    /// Returns a new document with this path's final segment removed from
    /// its parent. The input document is never mutated.
    ///
    /// The root path denotes whole-document removal and yields `None`,
    /// which is distinct from a document holding null. Removing from a
    /// mapping drops the key; removing an array element leaves a null in
    /// its slot rather than re-indexing the array. A path whose
    /// intermediate segments are missing (or whose final segment is
    /// absent) yields the unchanged copy.
    pub fn remove(&self, doc: &Value) -> Option<Value> {
        let (last, intermediate) = self.segments.split_last()?;

        let mut new_doc = doc.clone();
        if let Some(parent) = descend_mut(&mut new_doc, intermediate) {
            match parent {
                Value::Object(map) => {
                    map.remove(last);
                }
                Value::Array(items) => {
                    if let Some(slot) = last
                        .parse::<usize>()
                        .ok()
                        .and_then(|index| items.get_mut(index))
                    {
                        *slot = Value::Null;
                    }
                }
                _ => {}
            }
        }

        Some(new_doc)
    }

    fn array_index(&self, segment: &str) -> Result<usize, SetError> {
        segment.parse().map_err(|_| SetError::Index {
            path: self.clone(),
            segment: segment.to_string(),
        })
    }
}

fn descend_mut<'a>(doc: &'a mut Value, segments: &[String]) -> Option<&'a mut Value> {
    segments
        .iter()
        .try_fold(doc, |value, segment| match value {
            Value::Object(map) => map.get_mut(segment),
            Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Path {
            segments: raw
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Path::from(raw.as_str())
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
