//! Structured serialization of scene trees.
//!
//! Every node kind writes itself through a [`Serializer`], a key-value
//! writer producing an insertion-ordered JSON object. The writer owns the
//! default-omission rules: a field equal to its documented default is
//! never emitted, and absent (`None`) values omit their key entirely,
//! keeping serialized scenes minimal.
//!
//! # Example
//!
//! ```
//! use armillary_core::serialize::Serializer;
//!
//! let mut serializer = Serializer::new();
//! serializer.add("width", 2.0f32);
//! serializer.add_default("opacity", 1.0f32, 1.0); // omitted, equals default
//!
//! let value = serializer.finish();
//! assert_eq!(value["width"], 2.0);
//! assert!(value.get("opacity").is_none());
//! ```

use serde_json::{Map, Value};

use crate::{color::Color, geometry::Transform, node::Node};

/// A scalar or encodable value accepted by [`Serializer::add`].
///
/// Returning `None` from [`scene_value`](SceneValue::scene_value) omits
/// the key, which is how `Option` fields disappear from the output.
pub trait SceneValue {
    /// Converts the value into its serialized form, or `None` to omit it.
    fn scene_value(&self) -> Option<Value>;
}

impl SceneValue for bool {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(*self))
    }
}

impl SceneValue for f32 {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(f64::from(*self)))
    }
}

impl SceneValue for f64 {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(*self))
    }
}

impl SceneValue for u32 {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(*self))
    }
}

impl SceneValue for usize {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(*self))
    }
}

impl SceneValue for &str {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(*self))
    }
}

impl SceneValue for String {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(self.as_str()))
    }
}

impl SceneValue for Color {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(self.to_string()))
    }
}

impl SceneValue for Transform {
    fn scene_value(&self) -> Option<Value> {
        Some(Value::from(self.to_string()))
    }
}

impl<T: SceneValue> SceneValue for Option<T> {
    fn scene_value(&self) -> Option<Value> {
        self.as_ref().and_then(SceneValue::scene_value)
    }
}

/// A value that serializes as a nested object (strokes, paints via their
/// key-aware form, and similar attribute blocks).
pub trait SerializeScene {
    /// Writes the value's fields into the given serializer.
    fn serialize(&self, serializer: &mut Serializer);
}

/// The structured document writer consumed by every node's serialize
/// method.
///
/// Keys keep insertion order, so the field write order of a node kind is
/// the field order of the output document.
#[derive(Debug, Default)]
pub struct Serializer {
    entries: Map<String, Value>,
}

impl Serializer {
    /// Creates an empty serializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` under `key`. `None` values omit the key.
    pub fn add(&mut self, key: &str, value: impl SceneValue) {
        if let Some(value) = value.scene_value() {
            self.entries.insert(key.to_string(), value);
        }
    }

    /// Writes `value` under `key` only when it differs from `default`.
    pub fn add_default<T>(&mut self, key: &str, value: T, default: T)
    where
        T: SceneValue + PartialEq,
    {
        if value != default {
            self.add(key, value);
        }
    }

    /// Writes a nested serializable block under `key`.
    pub fn add_block(&mut self, key: &str, block: &dyn SerializeScene) {
        let mut nested = Serializer::new();
        block.serialize(&mut nested);
        self.entries.insert(key.to_string(), nested.finish());
    }

    /// Writes an optional nested serializable block, omitting the key when
    /// absent.
    pub fn add_optional_block<T: SerializeScene>(&mut self, key: &str, block: Option<&T>) {
        if let Some(block) = block {
            self.add_block(key, block);
        }
    }

    /// Writes a single node under `key`, tagged with its concrete kind.
    /// Absent nodes omit the key.
    pub fn add_node(&mut self, key: &str, node: Option<&Node>) {
        if let Some(node) = node {
            self.entries.insert(key.to_string(), node.to_value());
        }
    }

    /// Writes an ordered node sequence under `key`; each element carries a
    /// discriminant tag for its concrete kind.
    pub fn add_nodes(&mut self, key: &str, nodes: &[Node]) {
        let array = nodes.iter().map(Node::to_value).collect();
        self.entries.insert(key.to_string(), Value::Array(array));
    }

    /// Writes a pre-built JSON value under `key`.
    pub fn add_value(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the serializer and returns the document object.
    pub fn finish(self) -> Value {
        Value::Object(self.entries)
    }
}
