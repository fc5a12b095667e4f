//! Builds and edits JSON Schema documents by dotted key path.
//!
//! A schema under construction is an ordinary [`serde_json::Value`]. This
//! crate supplies the manipulation core a form-driven builder needs around
//! such a document: a [`Path`] type for copy-on-write reads, writes, and
//! removals by dotted path, a [`KeySet`] for keyword-vocabulary
//! comparisons, and [`clean`] for pruning empty entries before a document
//! is shown or serialized.
//!
//! Every operation leaves its input untouched: writes and removals return
//! a new document, reads return a borrowed view.
//!
//! # Quick start
//!
//! ```
//! use serde_json::json;
//! use schema_edit::{Editor, Path};
//!
//! let editor = Editor::new()
//!     .set(&Path::from("type"), json!(["object"])).unwrap()
//!     .set(&Path::from("properties.name.type"), json!(["string"])).unwrap()
//!     .set(&Path::from("properties.name.minLength"), json!(3)).unwrap();
//!
//! let editor = editor.remove(&Path::from("properties.name.minLength"));
//!
//! assert_eq!(
//!     json!({
//!         "type": ["object"],
//!         "properties": { "name": { "type": ["string"] } },
//!     }),
//!     editor.into_cleaned(),
//! );
//! ```

mod clean;
mod key_set;
mod keywords;
mod path;

pub use crate::clean::clean;
pub use crate::key_set::KeySet;
pub use crate::keywords::{
    active_keywords, applicable_keywords, keywords_for, SchemaKind, COMPOSITION_KEYWORDS,
};
pub use crate::path::{Path, SetError};

use serde_json::{Map, Value};

/// A document under construction.
///
/// Owns the current state of the document and funnels every edit through
/// [`Path`], so each edit replaces the state with a fresh copy. Note that
/// though edits read like updates, in Rust ownership terms [`Editor::set`]
/// and [`Editor::remove`] *move* `self`.
pub struct Editor {
    document: Value,
}

impl Editor {
    /// Starts from an empty mapping.
    pub fn new() -> Self {
        Self {
            document: Value::Object(Map::new()),
        }
    }

    /// Wraps an existing document.
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    /// Places `value` at `path`, creating missing intermediate mappings.
    ///
    /// Fails under the same conditions as [`Path::set`].
    pub fn set(self, path: &Path, value: Value) -> Result<Self, SetError> {
        Ok(Self {
            document: path.set(&self.document, value)?,
        })
    }

    /// Removes the value at `path`.
    ///
    /// Removing at the root resets the editor to its empty-mapping
    /// starting state.
    pub fn remove(self, path: &Path) -> Self {
        Self {
            document: path
                .remove(&self.document)
                .unwrap_or_else(|| Value::Object(Map::new())),
        }
    }

    /// Reads the value at `path`, if present.
    pub fn get(&self, path: &Path) -> Option<&Value> {
        path.get(&self.document)
    }

    pub fn value(&self) -> &Value {
        &self.document
    }

    pub fn into_value(self) -> Value {
        self.document
    }

    /// Consumes the editor, pruning empty entries from the document the
    /// way a preview or serialization step would.
    pub fn into_cleaned(self) -> Value {
        clean(&self.document)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
